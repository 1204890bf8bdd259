use std::path::PathBuf;

use grasp_core::{Colors, DumpOptions, Node, dump_tree, to_json};
use grasp_lib::{Lang, LangImpl};

use super::lang_resolver::require_lang;
use super::source::load_source;
use super::{CommandError, fail};

pub struct TreeArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub lang_file: Option<PathBuf>,
    pub json: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
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
    match render_tree(&lang, &source, args.json, options) {
        Ok(out) => print!("{out}"),
        Err(err) => fail(err),
    }
}

/// Tree of `source` as the indented text dump, or as JSON.
pub fn render_tree(
    lang: &Lang,
    source: &str,
    json: bool,
    options: DumpOptions,
) -> Result<String, CommandError> {
    let tree = lang.parse(source)?;
    if json {
        let mut out = to_json(&Node::Tree(tree))?;
        out.push('\n');
        return Ok(out);
    }
    Ok(dump_tree(&tree, options))
}
