//! Euclidean Travelling Salesman Problem toolkit.
//!
//! Computes near-optimal tours over 2-D point sets, with an exact
//! solver for small instances:
//!
//! - **Nearest-Neighbor / Greedy-Edge**: deterministic construction
//!   heuristics producing a complete tour from coordinates alone.
//! - **Local Search**: steepest-descent hill climbing over the 2-opt
//!   neighborhood, stopping at the first local minimum.
//! - **Tabu Search**: trajectory search that accepts worsening moves,
//!   with a bounded FIFO memory of visited tours to prevent cycling.
//! - **Held-Karp**: exact dynamic-programming solver, exponential in
//!   the city count.
//!
//! # Architecture
//!
//! [`model`] owns the immutable [`model::Problem`] and the
//! invariant-checked [`model::Tour`]; [`neighborhood`] enumerates
//! 2-opt moves; [`construct`] builds tours from scratch; [`search`]
//! improves them behind the [`search::SearchStrategy`] contract; and
//! [`solver`] composes the pieces. Point generation, file formats,
//! plotting, and CLI concerns all live with consumers of this crate.
//!
//! Every algorithm is deterministic and single-threaded. The
//! `parallel` feature switches neighbor-cost scans to a rayon
//! map-reduce without changing any result; the `serde` feature adds
//! `Serialize`/`Deserialize` to the model types.

pub mod construct;
pub mod error;
pub mod exact;
pub mod model;
pub mod neighborhood;
pub mod search;
pub mod solver;

pub use error::{Error, Result};
