//! Tabu search over the 2-opt neighborhood.
//!
//! # Algorithm
//!
//! 1. Seed the tabu memory with the starting tour
//! 2. At each iteration:
//!    a. Generate the 2-opt neighborhood of the *intermediate* tour
//!    b. Select the cheapest neighbor not in tabu memory; if every
//!       neighbor is tabu, stop
//!    c. Adopt it as the new intermediate even when it is worse than
//!       the best so far — this is what walks the search out of local
//!       minima
//!    d. Update the global best on strict improvement, record the
//!       adopted tour in memory (oldest entry evicted past capacity)
//! 3. Return the best tour ever observed, which may differ from the
//!    final intermediate
//!
//! Membership is keyed on whole tours rather than recent moves, so a
//! revisited tour stays barred for the life of the memory window.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on
//! Computing* 1(3), 190-206.

use std::collections::{HashSet, VecDeque};

use super::config::TabuSearchConfig;
use super::types::{min_admissible, SearchResult, SearchStrategy, Termination};
use crate::error::Result;
use crate::model::{Problem, Tour};
use crate::neighborhood::two_opt_neighbors;

/// Bounded FIFO memory of visited tours.
///
/// The queue preserves insertion order for oldest-first eviction; the
/// set gives O(1) membership tests on the permutation key.
#[derive(Debug)]
struct TabuMemory {
    queue: VecDeque<Tour>,
    seen: HashSet<Tour>,
    capacity: usize,
}

impl TabuMemory {
    fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            seen: HashSet::new(),
            capacity,
        }
    }

    fn contains(&self, tour: &Tour) -> bool {
        self.seen.contains(tour)
    }

    /// Records `tour`; a no-op when already present. Evicts the oldest
    /// entry once capacity is exceeded, so `len` never ends up above
    /// the configured capacity.
    fn insert(&mut self, tour: Tour) {
        if !self.seen.insert(tour.clone()) {
            return;
        }
        self.queue.push_back(tour);
        if self.queue.len() > self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.seen.remove(&oldest);
            }
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Trajectory search that tolerates worsening steps.
///
/// Keeps two tours: the global best and a working intermediate that
/// the neighborhood is generated from. Unlike [`super::LocalSearch`],
/// a non-improving scan does not end the run.
pub struct TabuSearch {
    config: TabuSearchConfig,
}

impl TabuSearch {
    pub fn new(config: TabuSearchConfig) -> Self {
        Self { config }
    }
}

impl Default for TabuSearch {
    fn default() -> Self {
        Self::new(TabuSearchConfig::default())
    }
}

impl SearchStrategy for TabuSearch {
    fn stopping_condition(&self, iterations: usize) -> bool {
        iterations > self.config.max_iterations
    }

    fn search(&self, problem: &Problem, initial: Tour) -> Result<SearchResult> {
        let mut best = initial.clone();
        let mut best_cost = problem.cost(&best);
        let mut intermediate = initial.clone();
        let mut memory = TabuMemory::new(self.config.capacity);
        memory.insert(initial);

        let mut iterations = 0;
        let mut cost_history = Vec::new();
        let mut termination = Termination::IterationLimit;

        while !self.stopping_condition(iterations + 1) {
            iterations += 1;
            let mut neighborhood = two_opt_neighbors(&intermediate);

            let admissible =
                min_admissible(problem, &neighborhood, |tour| !memory.contains(tour));
            let Some((index, cost)) = admissible else {
                termination = Termination::AllTabu;
                log::debug!("tabu_search: no admissible move iteration={iterations}");
                break;
            };

            // adopted even when worse than the best so far
            intermediate = neighborhood.swap_remove(index);
            if cost < best_cost {
                best = intermediate.clone();
                best_cost = cost;
                if self.config.verbose {
                    log::info!("tabu_search: improved iteration={iterations} cost={best_cost:.6}");
                } else {
                    log::debug!("tabu_search: improved iteration={iterations} cost={best_cost:.6}");
                }
            }
            memory.insert(intermediate.clone());
            cost_history.push(best_cost);
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
