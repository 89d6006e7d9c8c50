//! Integration tests for the end-to-end front end.
//!
//! These tests verify that the complete pipeline works correctly from source
//! text through tokenization, parsing, normalization and error reporting.

use frontend::{
    display_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::{parse, parse_source},
    tree::{
        rewrite::NormalizeConfig,
        tree::{EPSILON_LABEL, LEGACY_EPSILON_LABEL},
    },
};

const FACTORIAL: &str = "// Factorial
beginprog Factorial
variables a, b, c, i

read(a)
if (a < 0 or not a = 0 and a <= 12) then
  b := 1
  for i := 1 to a do
    b := b * i
  endfor
  print(b)
else
  print(-1)
endif
c := a
while c > 0 do
  c := c - 1
endwhile
endprog
";

#[test]
fn test_parse_full_program() {
    let tree = parse_source(FACTORIAL.to_string(), Some("factorial.imp".to_string())).unwrap();

    assert_eq!(tree.label(tree.root()), "Program");
    assert_eq!(tree.find("Instruction").len(), 10);
    assert_eq!(tree.find("Comp").len(), 4);
    assert_eq!(tree.find("For").len(), 1);
    assert_eq!(tree.find("While").len(), 1);
    assert_eq!(tree.find("IfElse").len(), 1);

    let name = tree.find("PROGNAME")[0];
    assert_eq!(tree.token(name).unwrap().value.as_deref(), Some("Factorial"));
    assert_eq!(tree.token(name).unwrap().position.to_string(), "factorial.imp:2");
}

#[test]
fn test_parse_from_tokens() {
    let tokens = tokenize(FACTORIAL.to_string(), None).unwrap();
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eos);

    let from_tokens = parse(frontend::lexer::source::TokenStream::new(tokens)).unwrap();
    let from_text = parse_source(FACTORIAL.to_string(), None).unwrap();

    assert_eq!(from_tokens.print_tree(), from_text.print_tree());
}

#[test]
fn test_print_raw_tree() {
    let tree = parse_source("beginprog P\nendprog".to_string(), None).unwrap();

    let expected = [
        "\n[Program",
        "\n[SkipLines]\n",
        "\n[BEGINPROG]\n",
        "\n[PROGNAME P]\n",
        "\n[ENDLINE]\n",
        "\n[SkipLines]\n",
        "\n[Variables\n[EPSILON]\n]\n",
        "\n[SkipLines]\n",
        "\n[Code\n[EPSILON]\n]\n",
        "\n[SkipLines]\n",
        "\n[ENDPROG]\n",
        "\n[SkipLines]\n",
        "\n[EOS]\n",
        "]\n",
    ]
    .concat();

    assert_eq!(tree.print_tree(), expected);
}

#[test]
fn test_print_normalized_tree() {
    let mut tree = parse_source("beginprog P\nendprog".to_string(), None).unwrap();
    tree.normalize(&NormalizeConfig::default());

    let printed = tree.print_tree();
    assert!(printed.contains("\n[Variables]\n"));
    assert!(printed.contains("\n[Code]\n"));
    assert!(!printed.contains(EPSILON_LABEL));
}

#[test]
fn test_normalize_full_program() {
    let mut tree = parse_source(FACTORIAL.to_string(), None).unwrap();
    let nodes = tree.node_count();
    let epsilons = tree.find(EPSILON_LABEL).len();
    assert!(epsilons > 0);

    tree.normalize(&NormalizeConfig::default());

    assert!(tree.find(EPSILON_LABEL).is_empty());
    assert_eq!(tree.node_count(), nodes - epsilons);
    assert_eq!(tree.find("Instruction").len(), 10);

    // A second run finds nothing left to do.
    let printed = tree.print_tree();
    tree.normalize(&NormalizeConfig::default());
    assert_eq!(tree.print_tree(), printed);
}

#[test]
fn test_legacy_normalize_full_program() {
    let mut tree = parse_source(FACTORIAL.to_string(), None).unwrap();
    let printed = tree.print_tree();

    tree.normalize(&NormalizeConfig::legacy());

    assert_eq!(tree.print_tree(), printed);
    assert!(tree.find(LEGACY_EPSILON_LABEL).is_empty());
}

#[test]
fn test_report_syntax_error() {
    let source = "beginprog P\n  x := * 2\nendprog";
    let error = parse_source(source.to_string(), Some("bad.imp".to_string())).unwrap_err();

    let report = display_error(&error, source);
    let lines = report.lines().collect::<Vec<_>>();

    assert_eq!(
        lines[0],
        "Error: UnexpectedTokenDetailed (Unexpected token: `TIMES`, expected a number, a variable or an arithmetic expression)"
    );
    assert_eq!(lines[1], "-> bad.imp");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | x := * 2");
    assert_eq!(lines[4], "  | ^");
}

#[test]
fn test_report_lexer_error() {
    let source = "beginprog P\nx := 1 # 2\nendprog";
    let error = parse_source(source.to_string(), Some("bad.imp".to_string())).unwrap_err();

    let report = display_error(&error, source);
    assert!(report.starts_with("Error: UnrecognisedToken\n"));
    assert!(report.contains("2 | x := 1 # 2"));
}

#[test]
fn test_missing_end_of_program() {
    let source = FACTORIAL.replace("endprog\n", "");
    let error = parse_source(source, None).unwrap_err();

    assert_eq!(error.get_found(), Some(TokenKind::Eos));
    assert_eq!(error.get_line(), 19);
}

#[test]
fn test_long_program() {
    const LINES: usize = 50_000;

    let source = format!("beginprog Long\n{}endprog\n", "a := a + 1\n".repeat(LINES));
    let mut tree = parse_source(source, Some("long.imp".to_string())).unwrap();

    tree.normalize(&NormalizeConfig::default());

    assert!(tree.find(EPSILON_LABEL).is_empty());
    assert_eq!(tree.find("Instruction").len(), LINES);

    let printed = tree.print_tree();
    assert_eq!(printed.matches("\n[Assign").count(), LINES);
    assert!(printed.starts_with("\n[Program"));
}
