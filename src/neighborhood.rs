//! Tour neighborhood generation.
//!
//! The only implemented move family is 2-opt: remove two edges of the
//! cycle and reconnect the endpoints by reversing the segment between
//! them. The neighborhood of a tour is the full set of such reversals,
//! roughly n²/2 candidates, produced in a fixed deterministic order.
//!
//! Higher k-opt families are deliberately not implemented; requesting
//! one is an [`Error::UnsupportedMove`], not a silent fallback.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman
//! problems", *Operations Research* 6(6), 791-812.

use crate::error::{Error, Result};
use crate::model::Tour;

/// Families of tour-modifying moves a neighborhood can be built from.
///
/// This is a closed enumeration, not a plugin point: only
/// `KOpt { k: 2 }` is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFamily {
    /// k-opt edge exchange.
    KOpt { k: usize },
}

impl Default for MoveFamily {
    fn default() -> Self {
        MoveFamily::KOpt { k: 2 }
    }
}

/// Generates the full neighborhood of `tour` under the given move
/// family.
///
/// # Errors
///
/// [`Error::UnsupportedMove`] for any family other than 2-opt.
pub fn neighbors(tour: &Tour, family: MoveFamily) -> Result<Vec<Tour>> {
    match family {
        MoveFamily::KOpt { k: 2 } => Ok(two_opt_neighbors(tour)),
        MoveFamily::KOpt { k } => Err(Error::UnsupportedMove { k }),
    }
}

/// All 2-opt neighbors of `tour`, in generation order.
///
/// For every position pair `(v1, v2)` with `v2 >= v1 + 2` — adjacent
/// positions are excluded since reversing a single city is the
/// identity — the candidate keeps the prefix up to `v1`, reverses
/// `path[v1+1..=v2]`, and keeps the suffix. Iteration is `v1`
/// ascending, then `v2` ascending, so output order is a pure function
/// of the input order. A tour on fewer than three cities has no
/// 2-opt neighbors.
pub fn two_opt_neighbors(tour: &Tour) -> Vec<Tour> {
    let path = tour.as_slice();
    let n = path.len();
    let count = n.saturating_sub(1) * n.saturating_sub(2) / 2;
    let mut out = Vec::with_capacity(count);
    for v1 in 0..n {
        for v2 in (v1 + 2)..n {
            out.push(Tour::from_permutation(two_opt_swap(path, v1, v2)));
        }
    }
    out
}

/// Reverses `path[v1+1..=v2]`, exchanging edges `(v1, v1+1)` and
/// `(v2, v2+1 mod n)` for `(v1, v2)` and `(v1+1, v2+1 mod n)`.
fn two_opt_swap(path: &[usize], v1: usize, v2: usize) -> Vec<usize> {
    let mut next = path.to_vec();
    next[v1 + 1..=v2].reverse();
    next
}
