use grasp_core::{Cursor, Token};
use grasp_langs::LangImpl;

use crate::builder::Query;

/// Context used by most tests: the values of matched tokens, in order.
pub type Values = Vec<String>;

pub fn push(mut values: Values, token: &Token) -> Values {
    values.push(token.value.clone());
    values
}

/// Keeps only the latest token value.
pub fn replace(_: Values, token: &Token) -> Values {
    vec![token.value.clone()]
}

pub fn parse(source: &str) -> Cursor {
    grasp_langs::python().cursor(source).unwrap()
}

pub fn run(query: &Query<Values>, source: &str) -> Option<Values> {
    query.run(&parse(source), Vec::new()).unwrap()
}
