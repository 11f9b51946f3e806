//! Tour-improvement search strategies.
//!
//! [`LocalSearch`] and [`TabuSearch`] are both polymorphic over the
//! [`SearchStrategy`] contract, so a solver can pick one at runtime
//! without knowing the concrete type. Both consume the full 2-opt
//! neighborhood of their incumbent tour each iteration; they differ in
//! what they do when the scan stops improving — local search halts,
//! tabu search keeps moving through non-improving tours while a
//! bounded memory stops it from cycling back.

mod config;
mod local;
mod tabu;
mod types;

pub use config::{LocalSearchConfig, TabuSearchConfig};
pub use local::LocalSearch;
pub use tabu::TabuSearch;
pub use types::{SearchResult, SearchStrategy, Termination};
