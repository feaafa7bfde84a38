//! Output artifact
//!
//! A run produces exactly one authoritative file: the serialized listing when the stream was
//! accepted, the failure marker otherwise. The content is built in memory first, written to a
//! temporary file next to the destination and then renamed over it, so readers see either
//! the old file or the complete new one. A listing is never left half written.

use crate::lex::error::ArtifactError;
use crate::lex::validation::{ValidationResult, CANONICAL_SEPARATOR, FAILURE_MARKER};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Listing(String),
    Failure(String),
}

impl Artifact {
    pub fn from_result(result: &ValidationResult) -> Self {
        match result {
            ValidationResult::Accepted(listing) => {
                Artifact::Listing(listing.serialize(CANONICAL_SEPARATOR))
            }
            ValidationResult::Rejected => Self::failure(),
        }
    }

    pub fn failure() -> Self {
        Artifact::Failure(FAILURE_MARKER.to_string())
    }

    pub fn contents(&self) -> &str {
        match self {
            Artifact::Listing(text) | Artifact::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Artifact::Failure(_))
    }

    /// Replace `path` with this artifact
    pub fn write_to(&self, path: &Path) -> Result<(), ArtifactError> {
        let io_error = |source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(self.contents().as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;
        file.persist(path).map_err(|err| ArtifactError::Persist {
            path: path.to_path_buf(),
            source: err.error,
        })?;

        debug!(
            path = %path.display(),
            bytes = self.contents().len(),
            failure = self.is_failure(),
            "artifact written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::validation::Listing;
    use std::fs;

    #[test]
    fn test_accepted_listing_contents() {
        let result = ValidationResult::Accepted(Listing::from_iter(["+", "42"]));
        let artifact = Artifact::from_result(&result);
        assert_eq!(artifact, Artifact::Listing("+\n42".to_string()));
    }

    #[test]
    fn test_rejected_is_marker() {
        let artifact = Artifact::from_result(&ValidationResult::Rejected);
        assert_eq!(artifact.contents(), "ERROR");
        assert!(artifact.is_failure());
    }

    #[test]
    fn test_marker_differs_from_empty_listing() {
        let empty = Artifact::from_result(&ValidationResult::Accepted(Listing::new()));
        let rejected = Artifact::from_result(&ValidationResult::Rejected);
        assert_eq!(empty.contents(), "");
        assert_ne!(empty.contents(), rejected.contents());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "a much longer previous content\n").unwrap();

        Artifact::failure().write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ERROR");
    }

    #[test]
    fn test_empty_listing_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let result = ValidationResult::Accepted(Listing::new());
        Artifact::from_result(&result).write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("out.txt");
        let err = Artifact::failure().write_to(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }
}
