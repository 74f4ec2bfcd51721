//! Error types for fallfield.
//!
//! Generation is pure computation, so the only failure modes are caller
//! mistakes: asking for a style that doesn't exist, or supplying a custom
//! profile with nonsensical ranges.

use std::fmt;

/// Errors that can occur when resolving styles or generating batches.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A style name did not match any known profile.
    ///
    /// Carries the offending name so the caller can see which theme key was
    /// wrong. There is deliberately no default fallback.
    UnknownStyle(String),
    /// A custom profile range is inverted or non-finite.
    InvalidRange {
        /// Name of the offending `StyleConfig` field.
        field: &'static str,
        /// Range start as supplied.
        min: f32,
        /// Range end as supplied.
        max: f32,
    },
    /// A custom profile scalar is out of its valid domain.
    InvalidParameter {
        /// Name of the offending `StyleConfig` field.
        field: &'static str,
        /// Value as supplied.
        value: f32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnknownStyle(name) => {
                write!(f, "Unknown style '{}'. Known styles: backend, security.", name)
            }
            FieldError::InvalidRange { field, min, max } => {
                write!(f, "Invalid range for '{}': {}..{}", field, min, max)
            }
            FieldError::InvalidParameter { field, value } => {
                write!(f, "Invalid value for '{}': {}", field, value)
            }
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_names_offender() {
        let err = FieldError::UnknownStyle("matrix".to_string());
        assert!(err.to_string().contains("matrix"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = FieldError::InvalidRange {
            field: "opacity",
            min: 0.9,
            max: 0.1,
        };
        let text = err.to_string();
        assert!(text.contains("opacity"));
        assert!(text.contains("0.9..0.1"));
    }
}
