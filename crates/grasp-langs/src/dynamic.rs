//! Dynamic language loading (runtime).
//!
//! Loads a [`LanguageConfig`] from camelCase JSON, validates it by
//! compiling its rule table, and wraps it as a [`Lang`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use grasp_syntax::{ConfigError, LanguageConfig};

use crate::{Lang, LangInner};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid language description: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Language named `name` described by `json`.
pub fn from_json(name: &str, json: &str) -> Result<Lang, LoadError> {
    let config: LanguageConfig = serde_json::from_str(json)?;
    from_config(name, config)
}

/// Language described by the JSON file at `path`, named after its stem.
pub fn from_file(path: &Path) -> Result<Lang, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    from_json(&name, &json)
}

pub fn from_config(name: &str, config: LanguageConfig) -> Result<Lang, LoadError> {
    Ok(Arc::new(LangInner::new(name, config)?))
}
