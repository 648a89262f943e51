//! Error types for template resolution

use serde::{Deserialize, Serialize};

/// Error type for building and resolving template actions
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TemplateError {
    /// Resolved object has the wrong runtime type
    #[error("Object resolved for {names:?} is not a {expected}")]
    TypeMismatch {
        expected: String,
        names: Vec<String>,
    },

    /// Lookup produced no object for the requested names
    #[error("No object found for {names:?}")]
    ObjectNotFound { names: Vec<String> },

    /// Build attempted before any object was bound
    #[error("No object bound for {names:?}; resolve with a lookup first")]
    UnboundObject { names: Vec<String> },
}

impl TemplateError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } | Self::ObjectNotFound { .. } => "resolution",
            Self::UnboundObject { .. } => "misuse",
        }
    }

    /// The logical names involved in the failure.
    #[inline]
    pub fn names(&self) -> &[String] {
        match self {
            Self::TypeMismatch { names, .. }
            | Self::ObjectNotFound { names }
            | Self::UnboundObject { names } => names,
        }
    }
}
