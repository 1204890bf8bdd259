use std::path::Path;

use grasp_lib::Lang;
use grasp_lib::langs::dynamic;

/// Resolve the language of a command.
///
/// A `--lang-file` description wins, then the `-l` flag, then the extension
/// of the source file.
pub fn resolve_lang(
    explicit: Option<&str>,
    lang_file: Option<&Path>,
    source_path: Option<&Path>,
) -> Result<Lang, String> {
    if let Some(path) = lang_file {
        return dynamic::from_file(path).map_err(|err| err.to_string());
    }

    if let Some(name) = explicit {
        return grasp_langs::from_name(name).ok_or_else(|| format!("unknown language: '{name}'"));
    }

    if let Some(path) = source_path
        && path.as_os_str() != "-"
        && let Some(ext) = path.extension().and_then(|e| e.to_str())
    {
        return grasp_langs::from_ext(ext).ok_or_else(|| {
            format!("cannot infer language from extension '.{ext}', use -l/--lang")
        });
    }

    Err("-l/--lang or --lang-file is required (cannot infer from input)".to_string())
}

/// Like [`resolve_lang`], but exits with a diagnostic on failure.
pub fn require_lang(
    explicit: Option<&str>,
    lang_file: Option<&Path>,
    source_path: Option<&Path>,
) -> Lang {
    match resolve_lang(explicit, lang_file, source_path) {
        Ok(lang) => lang,
        Err(msg) => {
            eprintln!("error: {msg}");
            if let Some(suggestion) = explicit.and_then(suggest_language) {
                eprintln!();
                eprintln!("Did you mean '{suggestion}'?");
            }
            eprintln!();
            eprintln!("Run 'grasp langs' for the full list.");
            std::process::exit(1);
        }
    }
}

/// Suggest similar language names for typos.
pub fn suggest_language(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();
    grasp_langs::all_info()
        .into_iter()
        .flat_map(|info| info.aliases.iter().map(move |alias| (info.name, *alias)))
        .map(|(name, alias)| (name, levenshtein(alias, &input_lower)))
        .filter(|&(_, distance)| distance <= 2)
        .min_by_key(|&(_, distance)| distance)
        .map(|(name, _)| name.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
