use grasp_core::Colors;
use indoc::indoc;

use super::*;

type Names = Vec<String>;

fn push(mut names: Names, token: &Token) -> Names {
    names.push(token.value.clone());
    names
}

fn names(items: &[&str]) -> Option<Names> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn python_function_names() {
    let input = indoc! {"
        class A:
            def f(self):
                pass

            def g(self):
                return f(self)
    "};

    let query = sym("def").sym_with(ANY, push);
    let found = langs::python().query(input, &query, Vec::new()).unwrap();
    assert_eq!(found, names(&["f", "g"]));
}

#[test]
fn gradle_dependencies() {
    let input = indoc! {r#"
        dependencies {
            implementation "org.slf4j:slf4j-api:2.0.9"
            testImplementation 'junit:junit:4.13'
        }
    "#};

    let configuration = alt([sym("implementation"), sym("testImplementation")]);
    let query = configuration.str_with(ANY, push);
    let lang = langs::from_ext("gradle").unwrap();

    let found = lang.query(input, &query, Vec::new()).unwrap();
    assert_eq!(found, names(&["org.slf4j:slf4j-api:2.0.9", "junit:junit:4.13"]));
}

#[test]
fn starlark_load_arguments() {
    let input = r#"load("//tools:defs.bzl", "py_binary")"#;

    let arguments = TreeOptions::new().opening("(").search(str_with(ANY, push));
    let query = sym("load").tree(arguments);

    let found = langs::starlark().query(input, &query, Vec::new()).unwrap();
    assert_eq!(found, names(&["//tools:defs.bzl", "py_binary"]));
}

#[test]
fn scala_interpolation() {
    let input = r#"val greeting = s"hello $name""#;

    let parts = StrOptions::new()
        .content_with(ANY, push)
        .template(sym_with(ANY, push));
    let query = str_parts(parts);

    let found = langs::scala().query(input, &query, Vec::new()).unwrap();
    assert_eq!(found, names(&["hello ", "name"]));
}

#[test]
fn no_match_is_not_an_error() {
    let found = langs::python()
        .query("...", &sym_with(ANY, push), Vec::new())
        .unwrap();
    assert_eq!(found, None);
}

#[test]
fn parse_errors_surface() {
    let err = langs::python()
        .query("a:\n\tb\n  c", &sym_with(ANY, push), Vec::new())
        .unwrap_err();

    assert!(matches!(err, Error::Parse(ParseError::InconsistentIndent { line: 3, .. })));
    insta::assert_snapshot!(err, @r#"inconsistent indentation at 3:3: "  " does not line up with "\t""#);
}

#[test]
fn query_errors_surface() {
    let query: Query<Names> = Query::new().many_range(sym("a"), 2, Some(1));
    let err = langs::python().query("a", &query, Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Query(QueryError::InvalidRepetition { min: 2, max: 1 })
    ));
}

#[test]
fn load_errors_convert() {
    fn load(json: &str) -> Result<Lang> {
        Ok(langs::dynamic::from_json("custom", json)?)
    }

    let err = load("{").unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Json(_))));

    let json = r#"{ "lexer": { "symbols": "[a-z]+", "numbers": "[0-9]+", "operators": [","] } }"#;
    let lang = load(json).unwrap();
    let found = lang.query("a, b", &sym_with(ANY, push), Vec::new()).unwrap();
    assert_eq!(found, names(&["a", "b"]));
}

#[test]
fn traced_query() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    let found = langs::python()
        .query_traced("x", &sym_with(ANY, push), Vec::new(), &mut tracer)
        .unwrap();

    assert_eq!(found, names(&["x"]));
    insta::assert_snapshot!(tracer.into_lines().join("\n"), @r"
    ▶ search root-tree
      ● sym symbol
      ✓ match #1
    ◀ 1 matches
    ● tree root-tree
    ");
}
