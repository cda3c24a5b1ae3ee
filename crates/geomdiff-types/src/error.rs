use thiserror::Error;

use crate::kind::ElementType;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeError {
    #[error("unknown element type: {0:?}")]
    UnknownElementType(String),

    #[error("coordinate out of range: {axis} = {value}")]
    CoordinateOutOfRange { axis: &'static str, value: f64 },

    #[error("geometry kind mismatch: element is a {expected}, geometry belongs to a {actual}")]
    GeometryKindMismatch {
        expected: ElementType,
        actual: ElementType,
    },
}
