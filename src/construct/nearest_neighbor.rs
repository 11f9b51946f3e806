//! Nearest-neighbor construction heuristic.

use crate::error::Result;
use crate::model::{Problem, Tour};

/// Builds a tour by repeatedly visiting the closest unvisited city.
///
/// Starts at city 0 and appends the unvisited city nearest to the last
/// one appended; ties go to the lowest city index, so construction is
/// fully deterministic. O(n²), with distances computed on demand.
///
/// # Examples
///
/// ```
/// use tsp_heur::construct::NearestNeighbor;
/// use tsp_heur::model::{Point, Problem};
///
/// let problem = Problem::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(1.0, 0.0),
/// ])?;
/// let tour = NearestNeighbor::solve(&problem)?;
/// assert_eq!(tour.as_slice(), &[0, 2, 1]);
/// # Ok::<(), tsp_heur::Error>(())
/// ```
pub struct NearestNeighbor;

impl NearestNeighbor {
    pub fn solve(problem: &Problem) -> Result<Tour> {
        let n = problem.len();
        let mut path = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        path.push(0);
        visited[0] = true;

        for _ in 1..n {
            let last = path[path.len() - 1];
            let mut nearest: Option<(usize, f64)> = None;
            for city in 0..n {
                if visited[city] {
                    continue;
                }
                let d = problem.distance(last, city);
                // strict < keeps the lowest index on ties
                if nearest.is_none_or(|(_, best)| d < best) {
                    nearest = Some((city, d));
                }
            }
            let (city, _) = nearest.expect("an unvisited city must remain");
            visited[city] = true;
            path.push(city);
        }

        log::debug!("nearest_neighbor: constructed tour n={n}");
        Ok(Tour::from_permutation(path))
    }
}
