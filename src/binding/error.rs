//! Errors returned by bindable values and lists.

use std::fmt;

/// Error returned from a binding read or write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// A list lookup used an index at or past the end of the list
    OutOfBounds { index: usize, len: usize },
    /// A converted binding could not represent the value in the other type
    Conversion { value: String, target: &'static str },
}

impl BindingError {
    pub(crate) fn conversion(value: impl Into<String>, target: &'static str) -> Self {
        BindingError::Conversion {
            value: value.into(),
            target,
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for list of length {}", index, len)
            }
            BindingError::Conversion { value, target } => {
                write!(f, "cannot convert {:?} to {}", value, target)
            }
        }
    }
}

impl std::error::Error for BindingError {}
