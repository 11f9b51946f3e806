//! Search strategy configuration.

/// Configuration for hill-climbing local search.
///
/// # Examples
///
/// ```
/// use tsp_heur::search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default().with_max_iterations(200);
/// assert_eq!(config.max_iterations, 200);
/// ```
#[derive(Debug, Clone)]
pub struct LocalSearchConfig {
    /// Maximum number of neighborhood scans.
    pub max_iterations: usize,
    /// Log improvements at info level instead of debug.
    pub verbose: bool,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            verbose: false,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables or disables verbose improvement logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Configuration for tabu search.
///
/// # Examples
///
/// ```
/// use tsp_heur::search::TabuSearchConfig;
///
/// let config = TabuSearchConfig::default()
///     .with_max_iterations(500)
///     .with_capacity(50);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.capacity, 50);
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearchConfig {
    /// Maximum number of neighborhood scans.
    pub max_iterations: usize,
    /// Tabu memory capacity; once exceeded, the oldest tour is evicted
    /// first.
    pub capacity: usize,
    /// Log improvements at info level instead of debug.
    pub verbose: bool,
}

impl Default for TabuSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            capacity: 100,
            verbose: false,
        }
    }
}

impl TabuSearchConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enables or disables verbose improvement logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
