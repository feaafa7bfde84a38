//! Scanner classification and sample program tests
//!
//! Single-token cases are parameterized with rstest. Whole sample programs under
//! `tests/fixtures/programs` are validated and their listings pinned with inline snapshots.

use lexcheck::lex::lexing::{Scanner, Tokenizer};
use lexcheck::lex::loader::Source;
use lexcheck::lex::token::{Token, TokenKind};
use lexcheck::lex::validation::{validate, ValidationResult};
use rstest::rstest;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("programs")
        .join(name)
}

fn first_token(source: &str) -> Token {
    Scanner::new(source).next_token().expect("scanner never faults")
}

fn validate_fixture(name: &str) -> (ValidationResult, Vec<String>) {
    let source = Source::from_path(fixture_path(name)).expect("fixture to load");
    let mut scanner = source.scanner();
    let mut trace: Vec<String> = Vec::new();
    let result = validate(&mut scanner, &mut trace).expect("scanner never faults");
    (result, trace)
}

// ===== Single tokens =====

#[rstest]
#[case("+", TokenKind::Plus, "+")]
#[case("-", TokenKind::Minus, "-")]
#[case("*", TokenKind::Times, "*")]
#[case("/", TokenKind::Divide, "/")]
#[case("(", TokenKind::LParen, "(")]
#[case(")", TokenKind::RParen, ")")]
#[case("[", TokenKind::LBrack, "[")]
#[case("]", TokenKind::RBrack, "]")]
#[case("{", TokenKind::LBrace, "{")]
#[case("}", TokenKind::RBrace, "}")]
#[case(",", TokenKind::Comma, ",")]
#[case(".", TokenKind::Dot, ".")]
#[case(";", TokenKind::Semicolon, ";")]
#[case(":=", TokenKind::Assign, ":=")]
#[case("=", TokenKind::Eq, "=")]
#[case("<", TokenKind::Lt, "<")]
#[case(">", TokenKind::Gt, ">")]
#[case("class", TokenKind::Class, "class")]
#[case("nil", TokenKind::Nil, "nil")]
#[case("array", TokenKind::Array, "array")]
#[case("while", TokenKind::While, "while")]
#[case("if", TokenKind::If, "if")]
#[case("else", TokenKind::Else, "else")]
#[case("new", TokenKind::New, "new")]
#[case("extends", TokenKind::Extends, "extends")]
#[case("return", TokenKind::Return, "return")]
#[case("int", TokenKind::TypeInt, "int")]
#[case("string", TokenKind::TypeString, "string")]
#[case("void", TokenKind::TypeVoid, "void")]
#[case("0", TokenKind::Int, "0")]
#[case("32767", TokenKind::Int, "32767")]
#[case("\"\"", TokenKind::Str, "\"\"")]
#[case("\"Hello\"", TokenKind::Str, "\"Hello\"")]
#[case("x", TokenKind::Id, "x")]
#[case("ifx", TokenKind::Id, "ifx")]
#[case("a1b2", TokenKind::Id, "a1b2")]
fn test_single_token(#[case] source: &str, #[case] kind: TokenKind, #[case] text: &str) {
    assert_eq!(first_token(source), Token::new(kind, text, 1, 1));
}

#[rstest]
#[case("#")]
#[case(":")]
#[case("01")]
#[case("32768")]
#[case("99999999999")]
#[case("\"no digits 1\"")]
#[case("\"unterminated")]
#[case("/* open comment")]
#[case("_leading")]
fn test_unclassifiable_input_is_error(#[case] source: &str) {
    assert_eq!(first_token(source).kind, TokenKind::Error);
}

#[rstest]
#[case("")]
#[case("   \n\t ")]
#[case("// only a comment")]
#[case("/* only\n a block */")]
fn test_blank_input_is_immediate_eof(#[case] source: &str) {
    assert!(first_token(source).kind.is_eof());
}

// ===== Sample programs =====

#[test]
fn test_point_program() {
    let (result, trace) = validate_fixture("point.txt");
    let listing = result.listing().expect("point.txt is well formed");

    insta::assert_snapshot!(listing.to_string(), @r#"
    class
    Point
    extends
    Shape
    {
    int
    x
    ;
    string
    name
    :=
    "origin"
    ;
    void
    move
    (
    int
    dx
    )
    {
    x
    :=
    x
    +
    dx
    ;
    }
    }
    "#);
    assert_eq!(
        &trace[..5],
        ["[2,1]:class", "[2,7]:Point", "[2,13]:extends", "[2,21]:Shape", "[2,27]:{"]
    );
    assert_eq!(trace[6], "[3,9]:x");
}

#[test]
fn test_arrays_program() {
    let (result, trace) = validate_fixture("arrays.txt");
    let listing = result.listing().expect("arrays.txt is well formed");

    insta::assert_snapshot!(listing.serialize(" "), @"array IntArray = int [ ] ; int sum ( IntArray a , int n ) { int i := 0 ; int s := 0 ; while ( i < n ) { s := s + a [ i ] ; i := i + 1 ; } return s ; }");
    // the block comment spans lines 1-2, code starts on line 3
    assert_eq!(trace[0], "[3,1]:array");
}

#[test]
fn test_bad_number_program_is_rejected() {
    let (result, trace) = validate_fixture("bad_number.txt");
    assert_eq!(result, ValidationResult::Rejected);
    // tokens before the error were still traced
    assert_eq!(trace, vec!["[1,1]:int", "[1,5]:x", "[1,7]::="]);
}

#[test]
fn test_unclosed_comment_program_is_rejected() {
    let (result, trace) = validate_fixture("unclosed_comment.txt");
    assert_eq!(result, ValidationResult::Rejected);
    assert_eq!(trace.len(), 5);
}
