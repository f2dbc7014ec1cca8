//! Error types shared across the proof system.

use thiserror::Error;

use crate::data_structures::GroupId;

/// Errors surfaced by matrix algebra, commitments, proving and verification.
///
/// Shape and field violations are eager: no partial result escapes a failing
/// operation. Algebraic mismatches of witness values never surface here; they
/// manifest as a `false` return from a verifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GsError {
    /// Arithmetic or composition between incompatibly-shaped containers.
    #[error("incompatible dimensions: {lhs_rows}x{lhs_cols} against {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Operand does not belong to the expected algebraic domain.
    #[error("field mismatch: expected {expected:?}, got {actual:?}")]
    FieldMismatch { expected: GroupId, actual: GroupId },

    /// 1-indexed accessor with row or column beyond bounds.
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Attempt to reduce a container that is not 1x1.
    #[error("flatten requires a 1x1 container, got {rows}x{cols}")]
    FlattenShape { rows: usize, cols: usize },

    /// Malformed byte blob: wrong length or an invalid element encoding.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Proof component of the wrong type for the equation family.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}

/// Result type for all fallible operations in this crate.
pub type GsResult<T> = Result<T, GsError>;
