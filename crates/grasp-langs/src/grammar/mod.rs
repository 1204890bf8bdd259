//! Lexical descriptions of the built-in languages.

#[cfg(feature = "lang-groovy")]
pub mod groovy;
#[cfg(feature = "lang-python")]
pub mod python;
#[cfg(feature = "lang-scala")]
pub mod scala;
#[cfg(feature = "lang-starlark")]
pub mod starlark;

/// Numeric literal pattern in the Python style: underscores between digits,
/// octal and hex integers, point and exponent floats, optionally binary
/// integers.
///
/// Floats come first so that `1.5` is one number rather than `1` followed
/// by `.5`; the alternation picks the first branch that matches, not the
/// longest.
pub fn numbers(binary: bool) -> String {
    let digit = "[0-9]";
    let hexdigit = "[0-9a-fA-F]";

    let octinteger = "(?:0[oO](?:_?[0-7])+)";
    let hexinteger = format!("(?:0[xX](?:_?{hexdigit})+)");
    let decinteger = format!("(?:[1-9](?:_?{digit})*|0+(?:_?0)*)");
    // Prefixed forms before decimals, or `0x1` would stop after `0`.
    let mut integer = format!("{hexinteger}|{octinteger}");
    if binary {
        integer.push_str("|(?:0[bB](?:_?[01])+)");
    }
    integer.push('|');
    integer.push_str(&decinteger);

    let digitpart = format!("(?:{digit}(?:_?{digit})*)");
    let fraction = format!("(?:\\.{digitpart})");
    let exponent = format!("(?:[eE][-+]?{digitpart})");
    let pointfloat = format!("(?:{digitpart}?{fraction}|{digitpart}\\.)");
    let exponentfloat = format!("(?:(?:{digitpart}|{pointfloat}){exponent})");

    format!("(?:{exponentfloat}|{pointfloat}|{integer})")
}

/// Brackets shared by every built-in language.
pub(crate) const BRACKETS: [(&str, &str); 3] = [("{", "}"), ("[", "]"), ("(", ")")];
