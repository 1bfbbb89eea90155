//! Error types for the data model, validation and record store.
//!
//! Controllers never propagate these past their own boundary: they log the
//! error and surface a user-facing message through the view instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::{EMAIL_ERROR, PASSWORD_ERROR};

/// Errors raised when constructing or loading model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A subject mark fell outside `[0, 100]`.
    #[error("mark {0} is outside the range 0-100")]
    MarkOutOfRange(f64),

    /// A student record carries more subjects than allowed.
    #[error("student has {count} subjects, at most {max} are allowed")]
    TooManySubjects { count: usize, max: usize },

    /// Two subjects on the same student share an id.
    #[error("duplicate subject id: {0}")]
    DuplicateSubject(String),
}

/// Format errors for registration and password changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", EMAIL_ERROR)]
    Email,

    #[error("{}", PASSWORD_ERROR)]
    Password,
}

/// Errors from reading or writing the backing JSON file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read, written or created.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a valid student array.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be serialized.
    #[error("failed to serialize student records: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Path of the file involved, if the error concerns one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StoreError::Io { path, .. } | StoreError::Parse { path, .. } => Some(path),
            StoreError::Serialize(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_carry_user_messages() {
        assert_eq!(
            ValidationError::Email.to_string(),
            "Invalid email format. Must end with @university.com"
        );
        assert!(ValidationError::Password
            .to_string()
            .starts_with("Invalid password format."));
    }

    #[test]
    fn store_error_exposes_path() {
        let err = StoreError::Io {
            path: PathBuf::from("students.data"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("students.data")));
        assert!(err.to_string().contains("students.data"));
    }
}
