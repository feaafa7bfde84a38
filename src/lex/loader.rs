//! Source loading
//!
//! [Source] owns the text a run scans. It is loaded once, before the consumption loop, and
//! the [Scanner](crate::lex::lexing::Scanner) borrows it, so the input outlives every pull and
//! is released when the run's `Source` goes out of scope, whichever way the run ends.
//!
//! # Example
//!
//! ```rust
//! use lexcheck::lex::loader::Source;
//!
//! // From file
//! let source = Source::from_path("program.txt")?;
//! let mut scanner = source.scanner();
//!
//! // From string
//! let source = Source::from_string("class A { }");
//! ```

use crate::lex::error::ScanError;
use crate::lex::lexing::Scanner;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Source {
    text: String,
    path: Option<PathBuf>,
}

impl Source {
    /// Read the whole file as UTF-8
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => ScanError::InvalidUtf8 {
                path: path.to_path_buf(),
            },
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded source");
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn from_string<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path the source was read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.text)
    }
}
