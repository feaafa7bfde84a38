//! Logos based scanner
//!
//! Wraps a `logos::Lexer` over [TokenKind] and turns its `(kind, span)` output into positioned
//! [Token]s:
//!     - fixed-lexeme kinds get their canonical spelling as text, literals and identifiers
//!       keep the lexeme;
//!     - anything logos rejects becomes an ERROR token carrying the offending slice;
//!     - once logos is exhausted (or the scanner is closed) every pull returns EOF positioned
//!       at the end of the input.

use crate::lex::error::ScanError;
use crate::lex::lexing::Tokenizer;
use crate::lex::position::{Position, SourceLocation};
use crate::lex::token::{Token, TokenKind};
use logos::Logos;
use tracing::{debug, trace};

pub struct Scanner<'src> {
    source: &'src str,
    lexer: Option<logos::Lexer<'src, TokenKind>>,
    location: SourceLocation,
    end: Position,
    last: Position,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        let location = SourceLocation::new(source);
        let end = location.byte_to_position(source, source.len());
        debug!(
            bytes = source.len(),
            lines = location.line_count(),
            "scanner ready, input ends at {}",
            end
        );
        Self {
            source,
            lexer: Some(TokenKind::lexer(source)),
            location,
            end,
            last: Position::default(),
        }
    }

    /// True once the end of input was reached or the scanner was closed
    pub fn is_exhausted(&self) -> bool {
        self.lexer.is_none()
    }

    fn eof(&mut self) -> Token {
        self.last = self.end;
        Token::eof(self.end.line, self.end.column)
    }
}

impl Tokenizer for Scanner<'_> {
    fn next_token(&mut self) -> Result<Token, ScanError> {
        let Some(lexer) = self.lexer.as_mut() else {
            return Ok(self.eof());
        };

        let Some(result) = lexer.next() else {
            trace!("end of input at {}", self.end);
            self.lexer = None;
            return Ok(self.eof());
        };

        let span = lexer.span();
        let slice = lexer.slice();
        let position = self.location.byte_to_position(self.source, span.start);
        self.last = position;

        let token = match result {
            Ok(kind) if kind.is_error() => Token::error(slice, position.line, position.column),
            Ok(kind) => {
                let text = kind.spelling().unwrap_or(slice);
                Token::new(kind, text, position.line, position.column)
            }
            Err(()) => Token::error(slice, position.line, position.column),
        };
        trace!(kind = %token.kind, code = token.kind.code(), "scanned {}", token);
        Ok(token)
    }

    fn line(&self) -> usize {
        self.last.line
    }

    fn column(&self) -> usize {
        self.last.column
    }

    fn close(&mut self) {
        self.lexer = None;
    }
}
