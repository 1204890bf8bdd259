use std::path::PathBuf;

use grasp_core::Colors;
use grasp_lib::LangImpl;
use grasp_lib::syntax::RuleTable;

use super::lang_resolver::require_lang;

pub struct RulesArgs {
    pub lang: Option<String>,
    pub lang_file: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: RulesArgs) {
    let lang = require_lang(args.lang.as_deref(), args.lang_file.as_deref(), None);
    print!("{}", render_rules(lang.rules(), Colors::new(args.color)));
}

/// Rule table, one state per header, in matching order. Sub-lexers are
/// indented under the rule that owns them.
pub fn render_rules(table: &RuleTable, colors: Colors) -> String {
    let mut out = String::new();
    write_table(table, 0, colors, &mut out);
    out
}

fn write_table(table: &RuleTable, depth: usize, colors: Colors, out: &mut String) {
    let pad = "  ".repeat(depth);
    for (name, rules) in table.states() {
        out.push_str(&pad);
        out.push_str(&colors.kind(&format!("state {name}")));
        out.push('\n');
        for rule in rules {
            out.push_str(&pad);
            out.push_str("  ");
            out.push_str(&rule.to_string());
            out.push('\n');
            if let Some(sub) = &rule.sub {
                write_table(sub, depth + 2, colors, out);
            }
        }
    }
}
