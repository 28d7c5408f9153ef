//! Validation errors

use std::fmt::Display;

/// All the possible configuration issues we might encounter while building a
/// classification grid. Both are raised at construction time only; queries
/// never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (UnsupportedDimension) Input coordinate rows are not 2D
    UnsupportedDimension(usize),
    /// (InvalidDepth) The subdivision depth bound is not a positive integer
    InvalidDepth(usize),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnsupportedDimension(dim) => write!(
                f,
                "(UnsupportedDimension) unsupported dimensionality: expected 2D points, got {}D",
                dim
            ),
            ValidationError::InvalidDepth(depth) => write!(
                f,
                "(InvalidDepth) invalid depth: the bound must be a positive integer, got {}",
                depth
            ),
        }
    }
}
