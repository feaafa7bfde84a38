//! Driver
//!
//! One run of the process: load the input, scan and validate it, close the tokenizer and
//! write exactly one artifact.
//!
//! Every completed run leaves the failure marker or the complete listing at the output path.
//! That includes runs whose input could not be read: a fault writes the marker too and is
//! then reported as a [DriverError] so the caller can tell it apart from a plain rejection
//! (exit status 2 instead of 1). The only run that leaves no artifact is one where the
//! artifact itself cannot be written.

use crate::lex::artifact::Artifact;
use crate::lex::config::Config;
use crate::lex::diagnostics::{DiagnosticSink, NullSink, TraceWriter};
use crate::lex::error::{DriverError, ScanError};
use crate::lex::lexing::Tokenizer;
use crate::lex::loader::Source;
use crate::lex::validation::{StreamValidator, ValidationResult};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of a run that completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted { tokens: usize },
    Rejected,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Accepted { .. } => 0,
            Outcome::Rejected => 1,
        }
    }
}

impl From<&ValidationResult> for Outcome {
    fn from(result: &ValidationResult) -> Self {
        match result {
            ValidationResult::Accepted(listing) => Outcome::Accepted {
                tokens: listing.len(),
            },
            ValidationResult::Rejected => Outcome::Rejected,
        }
    }
}

/// Validate `input` and write the artifact to `output`
///
/// The diagnostic trace goes to stdout when `config.trace.enabled` is set.
pub fn run(input: &Path, output: &Path, config: &Config) -> Result<Outcome, DriverError> {
    if config.trace.enabled {
        run_with_sink(input, output, TraceWriter::stdout())
    } else {
        run_with_sink(input, output, NullSink)
    }
}

/// [run] with an explicit diagnostic sink
pub fn run_with_sink<S: DiagnosticSink>(
    input: &Path,
    output: &Path,
    sink: S,
) -> Result<Outcome, DriverError> {
    let scanned = Source::from_path(input).and_then(|source| {
        debug!(input = ?source.path(), "validating");
        let mut scanner = source.scanner();
        consume(&mut scanner, sink)
    });
    finish(scanned, output)
}

/// Validate an already constructed tokenizer, closing it afterwards on every path
pub fn consume<T, S>(tokenizer: &mut T, sink: S) -> Result<ValidationResult, ScanError>
where
    T: Tokenizer + ?Sized,
    S: DiagnosticSink,
{
    let result = StreamValidator::new(sink).run(tokenizer);
    tokenizer.close();
    result
}

/// Write the artifact for a scan result and map it to an outcome
pub fn finish(
    scanned: Result<ValidationResult, ScanError>,
    output: &Path,
) -> Result<Outcome, DriverError> {
    match scanned {
        Ok(result) => {
            Artifact::from_result(&result).write_to(output)?;
            let outcome = Outcome::from(&result);
            info!(?outcome, output = %output.display(), "run complete");
            Ok(outcome)
        }
        Err(fault) => {
            warn!("input fault, writing failure marker: {}", fault);
            Artifact::failure().write_to(output)?;
            Err(fault.into())
        }
    }
}
