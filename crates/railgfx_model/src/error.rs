use thiserror::Error;

use crate::{AdvancedField, FieldValue};

/// Errors raised when converting raw values into model types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{value} is not a valid {kind} ordinal")]
    InvalidOrdinal { kind: &'static str, value: u32 },

    #[error("'{label}' is not a known {kind} label")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("{value:?} cannot be assigned to {field}")]
    FieldMismatch { field: AdvancedField, value: FieldValue },

    #[error("resolution {width}x{height} has a zero dimension")]
    EmptyResolution { width: u32, height: u32 },
}
