//! Greedy-edge construction heuristic.
//!
//! Sorts all C(n,2) edges by length and accepts them greedily under
//! degree and cycle constraints until exactly one Hamiltonian cycle
//! remains, then walks the accepted edges into a visiting order.

use super::union_find::UnionFind;
use crate::error::{Error, Result};
use crate::model::{Problem, Tour};

/// An undirected candidate edge with its Euclidean length.
#[derive(Debug, Clone, Copy)]
struct Edge {
    a: usize,
    b: usize,
    weight: f64,
}

/// Builds a tour out of the globally cheapest admissible edges.
///
/// Typically beats [`super::NearestNeighbor`] on uniform instances
/// because it never commits to an expensive edge early just to extend
/// the path.
///
/// # Examples
///
/// ```
/// use tsp_heur::construct::GreedyEdge;
/// use tsp_heur::model::{Point, Problem};
///
/// let problem = Problem::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ])?;
/// let tour = GreedyEdge::solve(&problem)?;
/// assert!((problem.cost(&tour) - 4.0).abs() < 1e-12);
/// # Ok::<(), tsp_heur::Error>(())
/// ```
pub struct GreedyEdge;

impl GreedyEdge {
    /// Minimum instance size: a cycle visiting each city once needs
    /// three distinct edges.
    pub const MIN_CITIES: usize = 3;

    /// # Errors
    ///
    /// [`Error::DegenerateInput`] below three cities;
    /// [`Error::ConstructionExhausted`] if the edge list runs out
    /// before a cycle forms (cannot happen on a complete graph).
    pub fn solve(problem: &Problem) -> Result<Tour> {
        let n = problem.len();
        if n < Self::MIN_CITIES {
            return Err(Error::DegenerateInput {
                n,
                min: Self::MIN_CITIES,
            });
        }

        let accepted = select_edges(problem)?;
        let path = walk_cycle(n, &accepted);
        log::debug!("greedy_edge: constructed tour n={n} accepted={}", accepted.len());
        Ok(Tour::from_permutation(path))
    }
}

/// Accepts edges in ascending length order until every city has degree
/// exactly 2.
///
/// An edge is admissible when both endpoints still have degree < 2 and
/// it does not close a cycle early. The cycle check is waived once n-1
/// edges are in: at that point the accepted edges form a single
/// Hamiltonian path and the one admissible edge left joins its two
/// ends. Connectivity is tracked incrementally in a union-find updated
/// on each acceptance.
fn select_edges(problem: &Problem) -> Result<Vec<(usize, usize)>> {
    let n = problem.len();
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for a in 0..n {
        for b in (a + 1)..n {
            edges.push(Edge {
                a,
                b,
                weight: problem.distance(a, b),
            });
        }
    }
    // stable: equal-length edges keep enumeration order
    edges.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut degree = vec![0u8; n];
    let mut components = UnionFind::new(n);
    let mut accepted: Vec<(usize, usize)> = Vec::with_capacity(n);

    for edge in &edges {
        if degree[edge.a] >= 2 || degree[edge.b] >= 2 {
            continue;
        }
        let closing = accepted.len() + 1 == n;
        if !closing && components.connected(edge.a, edge.b) {
            continue;
        }
        degree[edge.a] += 1;
        degree[edge.b] += 1;
        components.union(edge.a, edge.b);
        accepted.push((edge.a, edge.b));
        if accepted.len() == n {
            return Ok(accepted);
        }
    }

    Err(Error::ConstructionExhausted {
        examined: edges.len(),
    })
}

/// Orders the accepted cycle edges into a path starting at city 0.
///
/// Every city has exactly two incident edges, so from each city the
/// walk consumes the one incident edge that does not lead back where
/// it came from.
fn walk_cycle(n: usize, accepted: &[(usize, usize)]) -> Vec<usize> {
    let mut adjacent: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
    for &(a, b) in accepted {
        adjacent[a].push(b);
        adjacent[b].push(a);
    }

    let mut path = Vec::with_capacity(n);
    let mut previous = 0;
    let mut current = 0;
    for _ in 0..n {
        path.push(current);
        let next = adjacent[current]
            .iter()
            .copied()
            .find(|&city| city != previous)
            .expect("every city on the cycle has two distinct neighbors");
        previous = current;
        current = next;
    }
    path
}
