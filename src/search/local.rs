//! Hill-climbing local search over the 2-opt neighborhood.
//!
//! # Algorithm
//!
//! 1. Start from the initial tour as the incumbent
//! 2. At each iteration:
//!    a. Generate the full 2-opt neighborhood of the incumbent
//!    b. Pick the cheapest candidate (first wins ties)
//!    c. If strictly better than the incumbent, adopt it; otherwise
//!       stop — the incumbent is 2-opt locally optimal
//! 3. Terminate on the first non-improving scan or after the
//!    iteration budget

use super::config::LocalSearchConfig;
use super::types::{min_admissible, SearchResult, SearchStrategy, Termination};
use crate::error::Result;
use crate::model::{Problem, Tour};
use crate::neighborhood::two_opt_neighbors;

/// Steepest-descent 2-opt improvement.
///
/// The incumbent cost sequence is non-increasing by construction, and
/// the returned tour is never worse than the initial one.
///
/// # Examples
///
/// ```
/// use tsp_heur::model::{Point, Problem, Tour};
/// use tsp_heur::search::{LocalSearch, SearchStrategy};
///
/// let problem = Problem::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ])?;
///
/// // crossed diagonals; 2-opt uncrosses them
/// let crossed = Tour::new(vec![0, 2, 1, 3])?;
/// let result = LocalSearch::default().search(&problem, crossed)?;
/// assert!((result.best_cost - 4.0).abs() < 1e-12);
/// # Ok::<(), tsp_heur::Error>(())
/// ```
pub struct LocalSearch {
    config: LocalSearchConfig,
}

impl LocalSearch {
    pub fn new(config: LocalSearchConfig) -> Self {
        Self { config }
    }
}

impl Default for LocalSearch {
    fn default() -> Self {
        Self::new(LocalSearchConfig::default())
    }
}

impl SearchStrategy for LocalSearch {
    fn stopping_condition(&self, iterations: usize) -> bool {
        iterations > self.config.max_iterations
    }

    fn search(&self, problem: &Problem, initial: Tour) -> Result<SearchResult> {
        let mut best = initial;
        let mut best_cost = problem.cost(&best);
        let mut iterations = 0;
        let mut cost_history = Vec::new();
        let mut termination = Termination::IterationLimit;

        while !self.stopping_condition(iterations + 1) {
            iterations += 1;
            let mut neighborhood = two_opt_neighbors(&best);

            let Some((index, cost)) = min_admissible(problem, &neighborhood, |_| true) else {
                // instances below three cities have no 2-opt moves
                termination = Termination::LocalMinimum;
                break;
            };

            if cost < best_cost {
                best = neighborhood.swap_remove(index);
                best_cost = cost;
                cost_history.push(best_cost);
                if self.config.verbose {
                    log::info!("local_search: improved iteration={iterations} cost={best_cost:.6}");
                } else {
                    log::debug!("local_search: improved iteration={iterations} cost={best_cost:.6}");
                }
            } else {
                cost_history.push(best_cost);
                termination = Termination::LocalMinimum;
                log::debug!(
                    "local_search: stuck at local minimum iteration={iterations} cost={best_cost:.6}"
                );
                break;
            }
        }

        Ok(SearchResult {
            best,
            best_cost,
            iterations,
            termination,
            cost_history,
        })
    }
}
