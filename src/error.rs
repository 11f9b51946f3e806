//! Crate-wide error taxonomy.

use thiserror::Error as ThisError;

/// Failure kinds surfaced by tour construction and search.
///
/// Nothing in this crate retries internally; every failure propagates
/// to the caller as one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A path was assigned that is not a permutation of `0..n`.
    /// The tour that rejected it keeps its previous path.
    #[error("invalid tour: path must visit each of the {n} cities exactly once")]
    InvalidPath { n: usize },

    /// A neighborhood was requested for a move family that is not
    /// implemented.
    #[error("unsupported move family: {k}-opt (only 2-opt is implemented)")]
    UnsupportedMove { k: usize },

    /// Greedy-edge ran out of candidate edges before every city reached
    /// degree 2. Cannot happen on a complete graph; indicates a broken
    /// internal invariant.
    #[error("greedy edge construction exhausted all {examined} candidate edges before completing a tour")]
    ConstructionExhausted { examined: usize },

    /// The instance is too small for the requested operation.
    #[error("degenerate instance: {n} cities (need at least {min})")]
    DegenerateInput { n: usize, min: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
