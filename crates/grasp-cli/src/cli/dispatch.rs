//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::langs::LangsArgs;
use crate::commands::rules::RulesArgs;
use crate::commands::tokens::TokensArgs;
use crate::commands::tree::TreeArgs;

/// Source and language flags shared by `tokens` and `tree`.
#[derive(Debug, PartialEq, Eq)]
pub struct InputParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub lang_file: Option<PathBuf>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            lang: m.get_one::<String>("lang").cloned(),
            lang_file: m.get_one::<PathBuf>("lang_file").cloned(),
        }
    }
}

pub struct TokensParams {
    pub input: InputParams,
    pub json: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source_path: p.input.source_path,
            source_text: p.input.source_text,
            lang: p.input.lang,
            lang_file: p.input.lang_file,
            json: p.json,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub input: InputParams,
    pub json: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            source_path: p.input.source_path,
            source_text: p.input.source_text,
            lang: p.input.lang,
            lang_file: p.input.lang_file,
            json: p.json,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RulesParams {
    pub lang: Option<String>,
    pub lang_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl RulesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            lang: m.get_one::<String>("lang").cloned(),
            lang_file: m.get_one::<PathBuf>("lang_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<RulesParams> for RulesArgs {
    fn from(p: RulesParams) -> Self {
        Self {
            lang: p.lang,
            lang_file: p.lang_file,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LangsParams {
    pub json: bool,
}

impl LangsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<LangsParams> for LangsArgs {
    fn from(p: LangsParams) -> Self {
        Self { json: p.json }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
