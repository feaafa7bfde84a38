//! Diagnostic trace
//!
//! While scanning, the validator mirrors every accepted token as a `[line,column]:text` line.
//! This trace is a convenience for humans (the binary sends it to stdout); it carries no
//! contract and never decides the outcome of a run. Write failures are logged and dropped.

use crate::lex::token::Token;
use std::io::{self, Write};
use tracing::warn;

/// Receives one entry per accepted token, in pull order
pub trait DiagnosticSink {
    fn record(&mut self, token: &Token);
}

/// Discards every entry
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _token: &Token) {}
}

/// Collects rendered lines
impl DiagnosticSink for Vec<String> {
    fn record(&mut self, token: &Token) {
        self.push(token.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, token: &Token) {
        (**self).record(token)
    }
}

/// Writes one line per entry to any writer
#[derive(Debug)]
pub struct TraceWriter<W: Write> {
    writer: W,
    failed: bool,
}

impl TraceWriter<io::Stdout> {
    /// Console mirror
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TraceWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for TraceWriter<W> {
    fn record(&mut self, token: &Token) {
        if self.failed {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{}", token) {
            warn!("diagnostic trace disabled after write failure: {}", err);
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::token::TokenKind;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_trace_writer_line_format() {
        let mut sink = TraceWriter::new(Vec::new());
        sink.record(&Token::fixed(TokenKind::Plus, 1, 1));
        sink.record(&Token::new(TokenKind::Int, "42", 1, 3));
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "[1,1]:+\n[1,3]:42\n");
    }

    #[test]
    fn test_vec_sink_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.record(&Token::new(TokenKind::Id, "x", 3, 4));
        assert_eq!(lines, vec!["[3,4]:x".to_string()]);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut sink = TraceWriter::new(BrokenPipe);
        sink.record(&Token::new(TokenKind::Id, "x", 1, 1));
        sink.record(&Token::new(TokenKind::Id, "y", 1, 3));
        assert!(sink.failed);
    }
}
