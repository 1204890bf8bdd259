use grasp_langs::LangInfo;
use serde::Serialize;

use super::fail;

pub struct LangsArgs {
    pub json: bool,
}

#[derive(Serialize)]
struct LangEntry<'a> {
    name: &'a str,
    aliases: &'a [&'a str],
    extensions: &'a [&'a str],
}

pub fn run(args: LangsArgs) {
    let infos = grasp_langs::all_info();
    if args.json {
        match render_json(&infos) {
            Ok(out) => println!("{out}"),
            Err(err) => fail(err),
        }
        return;
    }
    print!("{}", render_list(&infos));
}

/// `name (alias, ...) [.ext, ...]`, one language per line.
pub fn render_list(infos: &[LangInfo]) -> String {
    let mut out = format!("Supported languages ({}):\n", infos.len());
    for info in infos {
        out.push_str("  ");
        out.push_str(info.name);
        let aliases: Vec<_> = info.aliases.iter().skip(1).copied().collect();
        if !aliases.is_empty() {
            out.push_str(&format!(" ({})", aliases.join(", ")));
        }
        let extensions: Vec<_> = info.extensions.iter().map(|ext| format!(".{ext}")).collect();
        if !extensions.is_empty() {
            out.push_str(&format!(" [{}]", extensions.join(", ")));
        }
        out.push('\n');
    }
    out
}

pub fn render_json(infos: &[LangInfo]) -> serde_json::Result<String> {
    let entries: Vec<_> = infos
        .iter()
        .map(|info| LangEntry {
            name: info.name,
            aliases: info.aliases,
            extensions: info.extensions,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
