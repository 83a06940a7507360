use std::path::Path;

use thiserror::Error;

/// Unified error type for vtes operations
#[derive(Error, Debug)]
pub enum VtesError {
    #[error("Cannot read {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    #[error("Cannot write {path}: {reason}")]
    ConfigWrite { path: String, reason: String },

    #[error("Git diff failed: {0}")]
    Diff(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Unknown bump kind: {0}")]
    UnknownBumpKind(String),

    #[error("Cannot fetch .gitignore template '{name}': {reason}")]
    TemplateFetch { name: String, reason: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Cannot watch file: {0}")]
    Watch(#[from] notify::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in vtes
pub type Result<T> = std::result::Result<T, VtesError>;

impl VtesError {
    /// Create a read error for a configuration file
    pub fn config_read(path: &Path, reason: impl ToString) -> Self {
        VtesError::ConfigRead {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a write error for a configuration file
    pub fn config_write(path: &Path, reason: impl ToString) -> Self {
        VtesError::ConfigWrite {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn diff(msg: impl Into<String>) -> Self {
        VtesError::Diff(msg.into())
    }

    pub fn commit(msg: impl Into<String>) -> Self {
        VtesError::Commit(msg.into())
    }

    pub fn invalid_version(msg: impl Into<String>) -> Self {
        VtesError::InvalidVersion(msg.into())
    }

    pub fn template_fetch(name: impl Into<String>, reason: impl ToString) -> Self {
        VtesError::TemplateFetch {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        VtesError::Settings(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_display_names_path() {
        let err = VtesError::config_read(Path::new("/tmp/commit.json"), "expected value");
        assert_eq!(
            err.to_string(),
            "Cannot read /tmp/commit.json: expected value"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VtesError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VtesError::diff("x"), "Git diff failed"),
            (VtesError::commit("x"), "Commit failed"),
            (VtesError::invalid_version("x"), "Invalid version"),
            (VtesError::UnknownBumpKind("x".into()), "Unknown bump kind"),
            (VtesError::template_fetch("Rust", "x"), "Cannot fetch"),
            (VtesError::settings("x"), "Settings error"),
            (
                VtesError::from(notify::Error::path_not_found()),
                "Cannot watch file",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_commit_error_keeps_detail() {
        let err = VtesError::commit("nothing to commit, working tree clean");
        assert!(err.to_string().contains("working tree clean"));
    }
}
