//! Stream validation
//!
//!     The validator drives a [Tokenizer] to exhaustion and decides, in a single pass, whether
//!     the stream is well formed. It enforces two independent rules:
//!         - no ERROR token may appear before the end of the stream;
//!         - after the first EOF, the tokenizer must keep saying EOF (no trailing content).
//!
//! The Consumption Loop
//!
//!     ```text
//!       START --pull--> SCANNING
//!         SCANNING: normal      -> record + append, stay in SCANNING
//!                   error       -> REJECTED
//!                   end-marker  -> CHECK_TRAILING
//!         CHECK_TRAILING --pull exactly one more-->
//!                   end-marker  -> ACCEPTED
//!                   otherwise   -> REJECTED
//!     ```
//!
//!     No pull happens after an ERROR token. The partial listing of a rejected run is dropped;
//!     only the diagnostic sink has seen it. Both rejection causes yield the same
//!     [ValidationResult::Rejected]; the cause is only logged.
//!
//! Serialization
//!
//!     The listing is collected first and joined afterwards, with the separator strictly
//!     between entries. No leading or trailing separator, and the empty listing serializes to
//!     the empty string.

use crate::lex::diagnostics::{DiagnosticSink, NullSink};
use crate::lex::error::ScanError;
use crate::lex::lexing::Tokenizer;
use crate::lex::token::Token;
use std::fmt;
use tracing::{debug, info, trace};

/// Separator of the canonical listing
pub const CANONICAL_SEPARATOR: &str = "\n";

/// Artifact content of every run that does not end in an accepted listing
pub const FAILURE_MARKER: &str = "ERROR";

/// Ordered texts of the accepted tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<String>,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join the entries with `separator` placed between them
    pub fn serialize(&self, separator: &str) -> String {
        self.entries.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for Listing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Canonical form, newline separated
impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(CANONICAL_SEPARATOR))
    }
}

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(Listing),
    Rejected,
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn listing(&self) -> Option<&Listing> {
        match self {
            ValidationResult::Accepted(listing) => Some(listing),
            ValidationResult::Rejected => None,
        }
    }
}

/// Why a stream was rejected; logged, never surfaced in the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    LexicalError,
    TrailingContent,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::LexicalError => f.write_str("lexical error"),
            Rejection::TrailingContent => f.write_str("content after end of stream"),
        }
    }
}

/// Runs the consumption loop, mirroring accepted tokens to a diagnostic sink
pub struct StreamValidator<S: DiagnosticSink = NullSink> {
    sink: S,
}

impl StreamValidator<NullSink> {
    /// Validator without a diagnostic trace
    pub fn silent() -> Self {
        Self::new(NullSink)
    }
}

impl<S: DiagnosticSink> StreamValidator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Drive `tokenizer` until the stream is accepted or rejected
    ///
    /// `Err` only carries faults of the tokenizer's input. The tokenizer is not closed here;
    /// that belongs to whoever owns the input.
    pub fn run<T: Tokenizer + ?Sized>(
        &mut self,
        tokenizer: &mut T,
    ) -> Result<ValidationResult, ScanError> {
        let mut listing = Listing::new();

        loop {
            let token = tokenizer.next_token()?;
            trace!(kind = %token.kind, line = token.line, column = token.column, "pulled");

            if token.kind.is_error() {
                return Ok(reject(Rejection::LexicalError, &token));
            }
            if token.kind.is_eof() {
                break;
            }

            debug!("accepted {}", token);
            self.sink.record(&token);
            listing.push(token.text);
        }

        let after_end = tokenizer.next_token()?;
        if !after_end.kind.is_eof() {
            return Ok(reject(Rejection::TrailingContent, &after_end));
        }

        info!(tokens = listing.len(), "token stream accepted");
        Ok(ValidationResult::Accepted(listing))
    }
}

fn reject(cause: Rejection, token: &Token) -> ValidationResult {
    info!(
        kind = %token.kind,
        line = token.line,
        column = token.column,
        "token stream rejected: {}",
        cause
    );
    ValidationResult::Rejected
}

/// One-shot validation with the given sink
pub fn validate<T, S>(tokenizer: &mut T, sink: S) -> Result<ValidationResult, ScanError>
where
    T: Tokenizer + ?Sized,
    S: DiagnosticSink,
{
    StreamValidator::new(sink).run(tokenizer)
}
