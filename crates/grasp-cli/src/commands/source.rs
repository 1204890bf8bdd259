use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::fail;

/// Source text from `--source`, a file, or stdin when the path is `-`.
pub fn load_source(text: Option<&str>, path: Option<&Path>) -> String {
    match (text, path) {
        (Some(text), None) => text.to_string(),
        (None, Some(path)) => read_path(path),
        (Some(_), Some(_)) => fail("cannot use both --source and positional SOURCE"),
        (None, None) => fail("source required (positional or --source)"),
    }
}

fn read_path(path: &Path) -> String {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buf) {
            fail(format!("failed to read stdin: {err}"));
        }
        return buf;
    }
    fs::read_to_string(path)
        .unwrap_or_else(|err| fail(format!("cannot read `{}`: {err}", path.display())))
}
