//! Search strategy contract and result types.

use crate::error::Result;
use crate::model::{Problem, Tour};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Why a search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The iteration budget ran out.
    IterationLimit,
    /// No neighbor improved on the incumbent (local search).
    LocalMinimum,
    /// Every neighbor was in tabu memory; a normal stop, not an error.
    AllTabu,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best tour found; never worse than the initial tour.
    pub best: Tour,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Why the loop stopped.
    pub termination: Termination,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// An improvement strategy over complete tours.
///
/// Strategies hold configuration only; iteration counters and working
/// tours are per-call locals, so repeated `search` invocations on one
/// strategy value behave identically and can never leak state into an
/// unrelated call. The trait is object-safe, letting
/// [`crate::solver::Solver`] hold a `&dyn SearchStrategy`.
pub trait SearchStrategy {
    /// True once `iterations` exceeds this strategy's budget.
    fn stopping_condition(&self, iterations: usize) -> bool;

    /// Improves `initial`, returning the best tour observed along the
    /// way together with how and when the loop stopped.
    fn search(&self, problem: &Problem, initial: Tour) -> Result<SearchResult>;
}

/// Index and cost of the cheapest admissible neighbor.
///
/// Sequentially this scans in generation order and keeps the first of
/// equally-cheap candidates. The rayon path reduces over
/// `(cost, index)` lexicographically, which selects the same candidate
/// the sequential scan does, so enabling `parallel` never changes a
/// search result.
pub(crate) fn min_admissible<F>(
    problem: &Problem,
    neighborhood: &[Tour],
    admissible: F,
) -> Option<(usize, f64)>
where
    F: Fn(&Tour) -> bool + Sync,
{
    #[cfg(feature = "parallel")]
    {
        neighborhood
            .par_iter()
            .enumerate()
            .filter(|(_, tour)| admissible(tour))
            .map(|(i, tour)| (i, problem.cost(tour)))
            .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut best: Option<(usize, f64)> = None;
        for (i, tour) in neighborhood.iter().enumerate() {
            if !admissible(tour) {
                continue;
            }
            let cost = problem.cost(tour);
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((i, cost));
            }
        }
        best
    }
}
