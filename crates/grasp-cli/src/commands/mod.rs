pub mod lang_resolver;
pub mod langs;
pub mod rules;
pub mod source;
pub mod tokens;
pub mod tree;

#[cfg(test)]
mod lang_resolver_tests;
#[cfg(test)]
mod langs_tests;
#[cfg(test)]
mod rules_tests;
#[cfg(test)]
mod tree_tests;

/// Failure while rendering a command's output.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] grasp_lib::ParseError),

    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print `error: {message}` and exit with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}
