use std::sync::{Arc, LazyLock};

#[cfg(test)]
use grasp_syntax::LanguageConfig;

use crate::{Lang, LangInner, grammar};

/// Names and extensions a built-in language is resolved by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LangInfo {
    pub name: &'static str,
    /// Accepted by [`from_name`]; the first one is `name`.
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
}

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                name: $name:literal,
                config: $config:path,
                names: [$($alias:literal),* $(,)?],
                extensions: [$($ext:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        // Static Lang definitions, compiled on first use
        $(
            #[cfg(feature = $feature)]
            pub fn $fn_name() -> Lang {
                static LANG: LazyLock<Lang> = LazyLock::new(|| {
                    let inner = LangInner::new($name, $config()).unwrap_or_else(|err| {
                        panic!("built-in language `{}` is inconsistent: {err}", $name)
                    });
                    Arc::new(inner)
                });
                Arc::clone(&LANG)
            }
        )*

        pub fn from_name(s: &str) -> Option<Lang> {
            match s.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($alias)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn from_ext(ext: &str) -> Option<Lang> {
            match ext.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($ext)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn all() -> Vec<Lang> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    $fn_name(),
                )*
            ]
        }

        /// Unbuilt descriptions, so a broken one surfaces as a `ConfigError`.
        #[cfg(test)]
        pub(crate) fn all_configs() -> Vec<(&'static str, LanguageConfig)> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    ($name, $config()),
                )*
            ]
        }

        pub fn all_info() -> Vec<LangInfo> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    LangInfo {
                        name: $name,
                        aliases: &[$($alias),*],
                        extensions: &[$($ext),*],
                    },
                )*
            ]
        }
    };
}

define_langs! {
    groovy => {
        feature: "lang-groovy",
        name: "groovy",
        config: grammar::groovy::config,
        names: ["groovy", "gradle"],
        extensions: ["groovy", "gradle", "gvy", "gy", "gsh"],
    },
    python => {
        feature: "lang-python",
        name: "python",
        config: grammar::python::config,
        names: ["python", "py", "python3"],
        extensions: ["py", "pyi", "pyw"],
    },
    scala => {
        feature: "lang-scala",
        name: "scala",
        config: grammar::scala::config,
        names: ["scala"],
        extensions: ["scala", "sc", "sbt"],
    },
    starlark => {
        feature: "lang-starlark",
        name: "starlark",
        config: grammar::starlark::config,
        names: ["starlark", "star", "bazel", "bzl"],
        extensions: ["star", "bzl", "bazel", "sky"],
    },
}
