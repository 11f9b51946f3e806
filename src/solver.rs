//! Top-level solve orchestration.

use crate::error::Result;
use crate::model::{Problem, Tour};
use crate::search::SearchStrategy;

/// Wires a problem, an optional search strategy, and an optional
/// initial tour into a final tour.
///
/// Purely compositional: construction heuristics or callers provide
/// the starting tour (the identity permutation when none is given),
/// and the strategy does the actual work. With no strategy the initial
/// tour is returned as-is — "construction only".
///
/// # Examples
///
/// ```
/// use tsp_heur::construct::GreedyEdge;
/// use tsp_heur::model::{Point, Problem};
/// use tsp_heur::search::LocalSearch;
/// use tsp_heur::solver::Solver;
///
/// let problem = Problem::new(vec![
///     Point::new(0.1, 0.9),
///     Point::new(0.4, 0.2),
///     Point::new(0.8, 0.7),
///     Point::new(0.3, 0.5),
///     Point::new(0.9, 0.1),
/// ])?;
///
/// // polish a greedy construction with local search
/// let constructed = GreedyEdge::solve(&problem)?;
/// let tour = Solver::solve(&problem, Some(&LocalSearch::default()), Some(constructed))?;
/// assert_eq!(tour.len(), 5);
/// # Ok::<(), tsp_heur::Error>(())
/// ```
pub struct Solver;

impl Solver {
    pub fn solve(
        problem: &Problem,
        strategy: Option<&dyn SearchStrategy>,
        initial: Option<Tour>,
    ) -> Result<Tour> {
        let initial = initial.unwrap_or_else(|| Tour::identity(problem.len()));
        match strategy {
            Some(strategy) => {
                let result = strategy.search(problem, initial)?;
                log::debug!(
                    "solver: search done cost={:.6} iterations={}",
                    result.best_cost,
                    result.iterations
                );
                Ok(result.best)
            }
            None => Ok(initial),
        }
    }
}
