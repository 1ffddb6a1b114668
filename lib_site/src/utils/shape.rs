use std::fmt;

use thiserror::Error;

/// A document did not have the expected shape.
///
/// `path` locates the offending field in dotted form (`about.values[2].icon`)
/// and `reason` says what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct ShapeError {
    pub path: String,
    pub reason: String,
}

impl ShapeError {
    pub fn new(path: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Joins a field name onto a parent path.
    pub fn join(parent: &str, field: &str) -> String {
        if parent.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", parent, field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_path_and_reason() {
        let err = ShapeError::new(ShapeError::join("careers", "heading"), "must be a non-empty string");
        assert_eq!(err.to_string(), "careers.heading: must be a non-empty string");
        assert_eq!(ShapeError::join("", "navbarLinks"), "navbarLinks");
    }
}
