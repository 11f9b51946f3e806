//! Problem and solution data model.
//!
//! [`Problem`] owns the city coordinates and the Euclidean metric over
//! them; [`Tour`] is a candidate solution carrying the permutation
//! invariant. Both are consumed read-only by every heuristic and
//! solver in the crate.

mod problem;
mod tour;

pub use problem::{Point, Problem};
pub use tour::Tour;
