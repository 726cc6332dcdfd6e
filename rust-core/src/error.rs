use thiserror::Error;

/// Errors raised while configuring or constructing a nanotube.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TubeGenError {
    #[error("Degenerate chirality ({n}, {m}): indices must be non-negative and not both zero")]
    InvalidChirality { n: i64, m: i64 },

    #[error("Cannot parse chirality '{0}', expected 'n,m'")]
    InvalidChiralityFormat(String),

    #[error("Lattice spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    #[error("A ribbon needs at least one unit cell, got {0}")]
    InvalidLength(usize),

    #[error("Unknown boundary condition: {0}")]
    UnknownBoundaryCondition(String),

    #[error("Unknown embedding: {0}")]
    UnknownEmbedding(String),

    /// The chirality and translation vector are inconsistent. Never expected for valid input.
    #[error("Unable to find symmetry vector for chirality ({n}, {m})")]
    SymmetryVectorNotFound { n: u32, m: u32 },
}
