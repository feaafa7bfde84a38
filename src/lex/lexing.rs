//! Lexing
//!
//!     This module defines the contract between a token producer and the validator, and
//!     ships the one producer the binary uses.
//!
//! The Tokenizer Contract
//!
//!     A [Tokenizer] is a stateful, lazy, pull-based producer over a single input. Consumers
//!     call [Tokenizer::next_token] once per token. The contract:
//!         - For finite input, a token of kind EOF is eventually produced.
//!         - Every call after the first EOF returns EOF again (idempotent at end). The
//!           validator relies on this for its trailing-content check, which pulls once more
//!           after EOF.
//!         - Input that cannot be classified yields a token of kind ERROR. This is data, not
//!           a fault: `Err` is reserved for the backing input failing (see
//!           [ScanError](crate::lex::error::ScanError)).
//!         - [Tokenizer::line] and [Tokenizer::column] describe the most recently produced
//!           token and are only meaningful right after a pull.
//!         - [Tokenizer::close] releases the input. It is called exactly once, after
//!           consumption, on every exit path.
//!
//! The Scanner
//!
//!     [Scanner] is the logos based tokenizer. The classification table lives on
//!     [TokenKind](crate::lex::token::TokenKind); the scanner adds positions, canonical
//!     texts and the EOF sentinel.

pub mod scanner;

pub use scanner::Scanner;

use crate::lex::error::ScanError;
use crate::lex::token::Token;

/// Pull-based token producer over one input
pub trait Tokenizer {
    /// Advance and return the next token
    fn next_token(&mut self) -> Result<Token, ScanError>;

    /// Line of the most recently produced token
    fn line(&self) -> usize;

    /// Column of the most recently produced token
    fn column(&self) -> usize;

    /// Release the underlying input
    fn close(&mut self) {}
}

impl<T: Tokenizer + ?Sized> Tokenizer for &mut T {
    fn next_token(&mut self) -> Result<Token, ScanError> {
        (**self).next_token()
    }

    fn line(&self) -> usize {
        (**self).line()
    }

    fn column(&self) -> usize {
        (**self).column()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn next_token(&mut self) -> Result<Token, ScanError> {
        (**self).next_token()
    }

    fn line(&self) -> usize {
        (**self).line()
    }

    fn column(&self) -> usize {
        (**self).column()
    }

    fn close(&mut self) {
        (**self).close()
    }
}
