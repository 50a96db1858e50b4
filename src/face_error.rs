//! FaceError: unified error type for face-lattice public APIs
//!
//! Every fallible operation of the crate returns this type. Misuse (bad input
//! tables, querying an iterator in the wrong state, out-of-range lookups) is
//! reported here rather than by panicking.

use thiserror::Error;

/// Unified error type for face enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FaceError {
    /// Ambient dimension below -1, not below the number of atoms, or below
    /// what a generator supports.
    #[error("invalid ambient dimension {0}")]
    InvalidDimension(i32),
    /// Too few atoms for the requested construction.
    #[error("a {dimension}-dimensional construction needs at least {min} atoms, got {n_atoms}")]
    TooFewAtoms {
        dimension: i32,
        n_atoms: usize,
        min: usize,
    },
    /// A coatom (or bit list) names an atom that does not exist.
    #[error("atom {atom} out of range (n_atoms = {n_atoms}){}", .coatom.map(|c| format!(" in coatom {c}")).unwrap_or_default())]
    AtomOutOfRange {
        coatom: Option<usize>,
        atom: usize,
        n_atoms: usize,
    },
    /// Rows of an incidence matrix have different lengths.
    #[error("incidence matrix row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A name list does not match the number of atoms/coatoms.
    #[error("{kind} name list has {found} entries, expected {expected}")]
    NameCountMismatch {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    /// Face queried before the first `advance`.
    #[error("iterator is not positioned at a face yet")]
    NoCurrentFace,
    /// Face queried after the iterator ran out.
    #[error("iterator is exhausted")]
    Exhausted,
    /// Operation not available for the iterator's orientation.
    #[error("operation not available in this mode: {0}")]
    WrongOrientation(&'static str),
    /// Face dimension outside the valid range.
    #[error("dimension {dimension} out of range [{min}, {max}]")]
    DimensionOutOfRange { dimension: i32, min: i32, max: i32 },
    /// Face index past the number of faces of that dimension.
    #[error("index {index} out of range for dimension {dimension} ({len} faces)")]
    IndexOutOfRange {
        dimension: i32,
        index: usize,
        len: usize,
    },
    /// Row index past the end of a bit table.
    #[error("row {index} out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    /// Output buffer cannot hold the result.
    #[error("output buffer too small: need {needed}, have {len}")]
    BufferTooSmall { needed: usize, len: usize },
    /// Bit vector does not have the table's word count.
    #[error("bit vector has {found} words, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },
    /// Internal consistency check failed.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
