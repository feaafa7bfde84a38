//! Token definitions
//!
//! This module defines the token kinds the scanner classifies input into, and the positioned
//! [Token] record that flows from a tokenizer into the validator.
//!
//! The kinds are defined with the logos derive macro, so the enum doubles as the scanner's
//! classification table. Two kinds are never produced by logos itself:
//!     - `Eof` is synthesized by the scanner once the input is exhausted.
//!     - `Error` is produced for input logos cannot classify (and for unterminated block
//!       comments, through the `/*` callback).
//!
//! Kinds keep the numeric codes of the classic `TokenNames` table (EOF = 0 .. ERROR = 33), see
//! [TokenKind::code].

use logos::{FilterResult, Lexer, Logos};
use std::fmt;

/// Largest value an integer literal may carry (2^15 - 1).
pub const MAX_INT_LITERAL: u16 = 32767;

/// All token kinds, in code order
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+|//[^\n]*")]
pub enum TokenKind {
    // End of input marker (synthesized)
    Eof,

    // Arithmetic operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,

    // Brackets
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBrack,
    #[token("]")]
    RBrack,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Statement punctuation
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token(":=")]
    Assign,

    // Comparison
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Keywords
    #[token("class")]
    Class,
    #[token("nil")]
    Nil,
    #[token("array")]
    Array,
    #[token("while")]
    While,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("new")]
    New,
    #[token("extends")]
    Extends,
    #[token("return")]
    Return,
    #[token("int")]
    TypeInt,
    #[token("string")]
    TypeString,
    #[token("void")]
    TypeVoid,

    // Literals and names
    #[regex("[0-9]+", int_literal)]
    Int,
    #[regex(r#""[a-zA-Z]*""#)]
    Str,
    #[regex("[a-zA-Z][a-zA-Z0-9]*")]
    Id,

    // Classification failure. Block comments are matched here too: a terminated comment is
    // skipped, an unterminated one becomes an error token.
    #[token("/*", block_comment)]
    Error,
}

/// Integers have no leading zeros and fit in 15 bits.
fn int_literal(lex: &mut Lexer<TokenKind>) -> bool {
    let slice = lex.slice();
    if slice.len() > 1 && slice.starts_with('0') {
        return false;
    }
    matches!(slice.parse::<u16>(), Ok(value) if value <= MAX_INT_LITERAL)
}

fn block_comment(lex: &mut Lexer<TokenKind>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Emit(())
        }
    }
}

impl TokenKind {
    /// Every kind, indexed by its code.
    pub const ALL: [TokenKind; 34] = [
        TokenKind::Eof,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrack,
        TokenKind::RBrack,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Semicolon,
        TokenKind::Assign,
        TokenKind::Eq,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Class,
        TokenKind::Nil,
        TokenKind::Array,
        TokenKind::While,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::New,
        TokenKind::Extends,
        TokenKind::Return,
        TokenKind::TypeInt,
        TokenKind::TypeString,
        TokenKind::TypeVoid,
        TokenKind::Int,
        TokenKind::Str,
        TokenKind::Id,
        TokenKind::Error,
    ];

    /// Numeric code of this kind
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Upper-case name used in logs, e.g. `TYPE_INT`
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrack => "LBRACK",
            TokenKind::RBrack => "RBRACK",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Class => "CLASS",
            TokenKind::Nil => "NIL",
            TokenKind::Array => "ARRAY",
            TokenKind::While => "WHILE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::New => "NEW",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Return => "RETURN",
            TokenKind::TypeInt => "TYPE_INT",
            TokenKind::TypeString => "TYPE_STRING",
            TokenKind::TypeVoid => "TYPE_VOID",
            TokenKind::Int => "INT",
            TokenKind::Str => "STRING",
            TokenKind::Id => "ID",
            TokenKind::Error => "ERROR",
        }
    }

    /// Canonical spelling for fixed-lexeme kinds, `None` for kinds whose text is the lexeme
    pub fn spelling(self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Divide => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrack => "[",
            TokenKind::RBrack => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Assign => ":=",
            TokenKind::Eq => "=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Class => "class",
            TokenKind::Nil => "nil",
            TokenKind::Array => "array",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::New => "new",
            TokenKind::Extends => "extends",
            TokenKind::Return => "return",
            TokenKind::TypeInt => "int",
            TokenKind::TypeString => "string",
            TokenKind::TypeVoid => "void",
            TokenKind::Eof | TokenKind::Int | TokenKind::Str | TokenKind::Id | TokenKind::Error => {
                return None
            }
        };
        Some(spelling)
    }

    pub fn is_eof(self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned token
///
/// `line` and `column` are 1-based and point at the first character of the token. They are
/// only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Token of a fixed-lexeme kind, spelled canonically
    ///
    /// Kinds without a canonical spelling get an empty text.
    pub fn fixed(kind: TokenKind, line: usize, column: usize) -> Self {
        Self::new(kind, kind.spelling().unwrap_or_default(), line, column)
    }

    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }

    pub fn error(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(TokenKind::Error, text, line, column)
    }
}

/// Diagnostic form: `[line,column]:text`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]:{}", self.line, self.column, self.text)
    }
}
