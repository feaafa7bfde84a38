//! # lexcheck
//!
//! Drives a tokenizer over one source, validates that the token stream is well formed and
//! emits the canonical token listing (or the failure marker).
//!
//! File Layout
//!
//! Everything lives under [lex](crate::lex):
//! src/lex
//!   ├── token        Token kinds and the token record
//!   ├── lexing       The Tokenizer contract and the logos based Scanner
//!   ├── validation   The stream validator (the consumption loop)
//!   ├── artifact     The single authoritative output file
//!   └── driver       Load, scan, validate, write: what the binary runs
//!
//! The validator only knows the [Tokenizer](crate::lex::lexing::Tokenizer) trait. The Scanner
//! is one implementation of it; tests drive the validator with scripted tokenizers from the
//! [testing module](crate::lex::testing).

pub mod lex;
