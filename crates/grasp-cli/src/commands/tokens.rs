use std::path::PathBuf;

use grasp_core::{Colors, DumpOptions, dump_tokens};
use grasp_lib::{Lang, LangImpl};

use super::lang_resolver::require_lang;
use super::source::load_source;
use super::{CommandError, fail};

pub struct TokensArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub lang_file: Option<PathBuf>,
    pub json: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref());
    let lang = require_lang(
        args.lang.as_deref(),
        args.lang_file.as_deref(),
        args.source_path.as_deref(),
    );

    let options = DumpOptions {
        spans: args.spans,
        colors: Colors::new(args.color),
    };
    match render_tokens(&lang, &source, args.json, options) {
        Ok(out) => print!("{out}"),
        Err(err) => fail(err),
    }
}

/// Tokens of `source`, one per line, or as a JSON array.
pub fn render_tokens(
    lang: &Lang,
    source: &str,
    json: bool,
    options: DumpOptions,
) -> Result<String, CommandError> {
    let tokens = lang.tokenize(source);
    if json {
        let mut out = serde_json::to_string_pretty(&tokens)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(dump_tokens(&tokens, options))
}
