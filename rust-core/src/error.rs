use thiserror::Error;

/// Errors raised by cell reduction, symmetry algebra and twin-law detection.
///
/// `CentringMismatch` and `ClosureOverflow` signal inconsistent input (a cell that
/// disagrees with the lattice type of its space group, or generators that do not
/// form a lattice point group). They are never expected for well-formed input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TwinError {
    #[error("Centring mismatch: expected {expected}, found {found}")]
    CentringMismatch { expected: String, found: String },

    #[error("Group closure exceeded the maximum order {max_order}")]
    ClosureOverflow { max_order: usize },

    #[error("Niggli reduction failed: {0}")]
    ReductionFailed(String),

    #[error("Invalid unit cell: {0}")]
    InvalidCell(String),

    #[error("Unknown centring type: {0}")]
    UnknownCentring(char),

    #[error("Unknown space group: {0}")]
    UnknownSpaceGroup(String),

    #[error("Invalid coordinate triplet: {0}")]
    InvalidTriplet(String),

    #[error("Singular operation: {0}")]
    SingularOperation(String),
}

pub type Result<T> = std::result::Result<T, TwinError>;
