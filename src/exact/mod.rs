//! Exact solvers.
//!
//! Exponential-state algorithms that trade memory for a provably
//! optimal tour; only practical on small instances.

mod held_karp;

pub use held_karp::HeldKarp;
