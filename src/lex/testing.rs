//! Testing utilities
//!
//! The validator is tested against scripted token streams, not only against the scanner:
//! malformed streams (content after EOF, errors at arbitrary points, faults) are easy to
//! describe as scripts and hard to produce from real input.
//!
//! - [ScriptedTokenizer] replays a fixed list of tokens, then answers EOF forever. The script
//!   itself may contain EOF tokens followed by more content, which is how trailing content is
//!   modelled. It counts pulls, so tests can assert that nothing was pulled past an ERROR.
//! - [mk_token] / [mk_tokens] build tokens from `(kind, text, line, column)` tuples.

use crate::lex::error::ScanError;
use crate::lex::lexing::Tokenizer;
use crate::lex::token::{Token, TokenKind};
use std::collections::VecDeque;

/// Replays a token script
#[derive(Debug, Clone)]
pub struct ScriptedTokenizer {
    script: VecDeque<Token>,
    pulls: usize,
    fault_at: Option<(usize, String)>,
    last: (usize, usize),
    closed: bool,
}

impl ScriptedTokenizer {
    pub fn new(script: Vec<Token>) -> Self {
        Self {
            script: script.into(),
            pulls: 0,
            fault_at: None,
            last: (1, 1),
            closed: false,
        }
    }

    /// Fail with [ScanError::Injected] on the given pull (0-based)
    pub fn fail_at(mut self, pull: usize, message: impl Into<String>) -> Self {
        self.fault_at = Some((pull, message.into()));
        self
    }

    /// Number of `next_token` calls so far
    pub fn pulls(&self) -> usize {
        self.pulls
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Tokens not pulled yet
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Tokenizer for ScriptedTokenizer {
    fn next_token(&mut self) -> Result<Token, ScanError> {
        let pull = self.pulls;
        self.pulls += 1;

        if let Some((at, message)) = &self.fault_at {
            if *at == pull {
                return Err(ScanError::Injected(message.clone()));
            }
        }

        let token = self
            .script
            .pop_front()
            .unwrap_or_else(|| Token::eof(self.last.0, self.last.1));
        self.last = (token.line, token.column);
        Ok(token)
    }

    fn line(&self) -> usize {
        self.last.0
    }

    fn column(&self) -> usize {
        self.last.1
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Build a token, taking the canonical spelling when `text` is empty and the kind has one
pub fn mk_token(kind: TokenKind, text: &str, line: usize, column: usize) -> Token {
    match kind.spelling() {
        Some(spelling) if text.is_empty() => Token::new(kind, spelling, line, column),
        _ => Token::new(kind, text, line, column),
    }
}

/// Build a token list from `(kind, text, line, column)` tuples
pub fn mk_tokens(items: &[(TokenKind, &str, usize, usize)]) -> Vec<Token> {
    items
        .iter()
        .map(|(kind, text, line, column)| mk_token(*kind, text, *line, *column))
        .collect()
}
