//! TSP instance: a fixed set of 2-D cities and the metric over them.

use crate::error::{Error, Result};
use crate::model::Tour;

/// A city location in the Euclidean plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An immutable Euclidean TSP instance.
///
/// Cities are indexed `0..n` in insertion order. The instance owns its
/// coordinates and is never mutated after construction; all solvers
/// borrow it read-only, so a single instance can back any number of
/// concurrent solve calls.
///
/// Where the coordinates come from is the caller's business — random
/// uniform points, file loaders, and the like live outside this crate.
///
/// # Examples
///
/// ```
/// use tsp_heur::model::{Point, Problem, Tour};
///
/// let problem = Problem::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ])?;
///
/// let perimeter = Tour::identity(4);
/// assert!((problem.cost(&perimeter) - 4.0).abs() < 1e-12);
/// # Ok::<(), tsp_heur::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    points: Vec<Point>,
}

impl Problem {
    /// Minimum instance size accepted by [`Problem::new`].
    pub const MIN_CITIES: usize = 2;

    /// Creates an instance from city coordinates.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateInput`] for fewer than two cities.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < Self::MIN_CITIES {
            return Err(Error::DegenerateInput {
                n: points.len(),
                min: Self::MIN_CITIES,
            });
        }
        Ok(Self { points })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; construction rejects empty instances.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// City coordinates, indexed by city id.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Euclidean distance between two distinct cities.
    ///
    /// Deterministic and symmetric: `distance(i, j) == distance(j, i)`.
    ///
    /// # Panics
    ///
    /// Panics when `i == j`; a self-distance request is a programmer
    /// error, not a recoverable condition.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        assert_ne!(i, j, "distance requires two distinct cities");
        let (a, b) = (self.points[i], self.points[j]);
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    /// Total length of the cyclic tour: the sum over consecutive pairs
    /// plus the closing edge from the last city back to the first.
    pub fn cost(&self, tour: &Tour) -> f64 {
        let path = tour.as_slice();
        debug_assert_eq!(path.len(), self.len(), "tour size must match instance size");
        let mut total = 0.0;
        for pair in path.windows(2) {
            total += self.distance(pair[0], pair[1]);
        }
        total + self.distance(path[path.len() - 1], path[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_square() -> Problem {
        Problem::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_degenerate_instances() {
        assert_eq!(
            Problem::new(vec![]),
            Err(Error::DegenerateInput { n: 0, min: 2 })
        );
        assert_eq!(
            Problem::new(vec![Point::new(0.5, 0.5)]),
            Err(Error::DegenerateInput { n: 1, min: 2 })
        );
        assert!(Problem::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_ok());
    }

    #[test]
    fn test_distance_known_values() {
        let problem = unit_square();
        assert!((problem.distance(0, 1) - 1.0).abs() < 1e-12);
        assert!((problem.distance(0, 2) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "distinct cities")]
    fn test_self_distance_panics() {
        unit_square().distance(2, 2);
    }

    #[test]
    fn test_cost_of_square_perimeter() {
        let problem = unit_square();
        let tour = Tour::identity(4);
        assert!(
            (problem.cost(&tour) - 4.0).abs() < 1e-12,
            "perimeter of the unit square should cost 4.0, got {}",
            problem.cost(&tour)
        );
    }

    #[test]
    fn test_cost_counts_closing_edge() {
        let problem = Problem::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
        let tour = Tour::identity(2);
        // out and back along the same edge
        assert!((problem.cost(&tour) - 10.0).abs() < 1e-12);
    }

    fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(
            (0.0..1.0f64, 0.0..1.0f64).prop_map(|(x, y)| Point::new(x, y)),
            2..32,
        )
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(points in points_strategy()) {
            let problem = Problem::new(points).unwrap();
            for i in 0..problem.len() {
                for j in 0..problem.len() {
                    if i != j {
                        prop_assert_eq!(problem.distance(i, j), problem.distance(j, i));
                    }
                }
            }
        }

        #[test]
        fn prop_cost_is_non_negative(points in points_strategy()) {
            let problem = Problem::new(points).unwrap();
            let tour = Tour::identity(problem.len());
            prop_assert!(problem.cost(&tour) >= 0.0);
        }
    }
}
