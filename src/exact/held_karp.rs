//! Held-Karp exact dynamic program.
//!
//! # Algorithm
//!
//! City 0 is fixed as the tour start and end. For every non-empty
//! subset `S` of the remaining cities and every `k ∈ S`, `g(S, k)` is
//! the cheapest way to leave city 0, visit exactly the cities in `S`,
//! and stop at `k`:
//!
//! ```text
//! g({k}, k) = d(0, k)
//! g(S, k)   = min over m ∈ S\{k} of g(S\{k}, m) + d(m, k)
//! ```
//!
//! The optimal cycle closes the cheapest `g(full, k) + d(k, 0)`, and
//! the tour is read back through a parallel predecessor table. All
//! minimizations break ties toward the lowest city index, so the
//! result is deterministic.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the SIAM* 10(1), 196-210.

use crate::error::Result;
use crate::model::{Problem, Tour};

/// Exact TSP solver with `Θ(2^(n-1) · n)` table entries.
///
/// Memory is exponential in the city count; instances beyond roughly
/// 18 cities will not fit. Both tables live for a single `solve` call
/// and are dropped after path reconstruction.
pub struct HeldKarp;

impl HeldKarp {
    pub fn solve(problem: &Problem) -> Result<Tour> {
        let n = problem.len();
        // cities 1..n, shifted down by one into mask bit positions
        let m = n - 1;
        let size = 1usize << m;

        // g[mask * m + k]: cheapest 0 → (cities of mask) path ending at k+1
        let mut g = vec![f64::INFINITY; size * m];
        let mut pred = vec![usize::MAX; size * m];

        for k in 0..m {
            g[(1 << k) * m + k] = problem.distance(0, k + 1);
        }

        // every proper submask is numerically smaller, so ascending
        // mask order respects the dependency order
        for mask in 1..size {
            if mask.count_ones() < 2 {
                continue;
            }
            for k in 0..m {
                if mask & (1 << k) == 0 {
                    continue;
                }
                let rest = mask & !(1 << k);
                let mut best = f64::INFINITY;
                let mut best_pred = usize::MAX;
                for j in 0..m {
                    if rest & (1 << j) == 0 {
                        continue;
                    }
                    let candidate = g[rest * m + j] + problem.distance(j + 1, k + 1);
                    if candidate < best {
                        best = candidate;
                        best_pred = j;
                    }
                }
                g[mask * m + k] = best;
                pred[mask * m + k] = best_pred;
            }
        }

        let full = size - 1;
        let mut best_total = f64::INFINITY;
        let mut last = 0;
        for k in 0..m {
            let candidate = g[full * m + k] + problem.distance(k + 1, 0);
            if candidate < best_total {
                best_total = candidate;
                last = k;
            }
        }

        // walk predecessors back through shrinking subsets
        let mut path = Vec::with_capacity(n);
        let mut mask = full;
        let mut k = last;
        while k != usize::MAX {
            path.push(k + 1);
            let predecessor = pred[mask * m + k];
            mask &= !(1 << k);
            k = predecessor;
        }
        path.push(0);
        path.reverse();

        log::debug!("held_karp: solved n={n} cost={best_total:.6}");
        Ok(Tour::from_permutation(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_problem(n: usize, seed: u64) -> Problem {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..n)
            .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect();
        Problem::new(points).unwrap()
    }

    /// Cheapest cycle cost over every permutation fixing city 0 first.
    fn brute_force_cost(problem: &Problem) -> f64 {
        fn permute(
            problem: &Problem,
            path: &mut Vec<usize>,
            remaining: &mut Vec<usize>,
            best: &mut f64,
        ) {
            if remaining.is_empty() {
                let tour = Tour::new(path.clone()).unwrap();
                let cost = problem.cost(&tour);
                if cost < *best {
                    *best = cost;
                }
                return;
            }
            for i in 0..remaining.len() {
                let city = remaining.remove(i);
                path.push(city);
                permute(problem, path, remaining, best);
                path.pop();
                remaining.insert(i, city);
            }
        }

        let mut best = f64::INFINITY;
        let mut path = vec![0];
        let mut remaining: Vec<usize> = (1..problem.len()).collect();
        permute(problem, &mut path, &mut remaining, &mut best);
        best
    }

    #[test]
    fn test_two_cities() {
        let problem = Problem::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
        let tour = HeldKarp::solve(&problem).unwrap();
        assert_eq!(tour.as_slice(), &[0, 1]);
        assert!((problem.cost(&tour) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_square() {
        let problem = Problem::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        let tour = HeldKarp::solve(&problem).unwrap();
        assert!((problem.cost(&tour) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_starts_at_city_zero() {
        let problem = random_problem(9, 7);
        let tour = HeldKarp::solve(&problem).unwrap();
        assert_eq!(tour.as_slice()[0], 0);

        let mut sorted = tour.path();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_matches_brute_force_on_small_instances() {
        for n in 3..=8 {
            for seed in [11, 42, 1999] {
                let problem = random_problem(n, seed);
                let tour = HeldKarp::solve(&problem).unwrap();
                let exact = brute_force_cost(&problem);
                assert!(
                    (problem.cost(&tour) - exact).abs() < 1e-9,
                    "n={n} seed={seed}: Held-Karp found {}, brute force {}",
                    problem.cost(&tour),
                    exact
                );
            }
        }
    }

    #[test]
    fn test_beats_or_matches_heuristics() {
        use crate::construct::{GreedyEdge, NearestNeighbor};

        let problem = random_problem(10, 23);
        let optimal = problem.cost(&HeldKarp::solve(&problem).unwrap());
        let nn = problem.cost(&NearestNeighbor::solve(&problem).unwrap());
        let greedy = problem.cost(&GreedyEdge::solve(&problem).unwrap());

        assert!(optimal <= nn + 1e-12);
        assert!(optimal <= greedy + 1e-12);
    }

    #[test]
    fn test_triangle_agreement() {
        use crate::construct::{GreedyEdge, NearestNeighbor};

        // a triangle has a unique Hamiltonian cycle up to rotation and
        // direction, so every solver must agree on its cost
        let problem = Problem::new(vec![
            Point::new(0.2, 0.1),
            Point::new(0.9, 0.4),
            Point::new(0.5, 0.8),
        ])
        .unwrap();

        let exact = problem.cost(&HeldKarp::solve(&problem).unwrap());
        let nn = problem.cost(&NearestNeighbor::solve(&problem).unwrap());
        let greedy = problem.cost(&GreedyEdge::solve(&problem).unwrap());

        assert!((exact - nn).abs() < 1e-12);
        assert!((exact - greedy).abs() < 1e-12);
    }
}
