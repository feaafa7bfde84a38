//! Error types
//!
//! Lexical errors and trailing content are not errors here: they are data, reported as
//! [ValidationResult::Rejected](crate::lex::validation::ValidationResult::Rejected). The types
//! below cover the faults around the token stream: the input going bad, the artifact failing
//! to land, the configuration failing to load.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fault raised by a tokenizer's backing input
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read input '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input '{}' is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Raised by scripted tokenizers to exercise the fault path
    #[error("injected fault: {0}")]
    Injected(String),
}

/// Failure to write the output artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot write artifact '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot replace artifact '{}': {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Anything that stops a driver run from completing normally
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Write(#[from] ArtifactError),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl DriverError {
    /// Process exit status for an abnormal run
    pub fn exit_code(&self) -> i32 {
        2
    }
}
