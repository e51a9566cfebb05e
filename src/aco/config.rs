//! ACO configuration.

/// Configuration parameters for the Ant Colony solver.
///
/// Defaults reproduce the classic small-instance setup: 4 ants,
/// 10 iterations, `alpha = beta = 1`, 15% evaporation and a uniform
/// initial trail of 1.0.
///
/// # Examples
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_max_iterations(100)
///     .with_beta(2.0)
///     .with_seed(7);
/// assert_eq!(config.num_ants, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants building a tour in every iteration.
    pub num_ants: usize,

    /// Number of iterations. The solver always runs all of them.
    pub max_iterations: usize,

    /// Pheromone exponent. Higher values follow existing trails more greedily.
    pub alpha: f64,

    /// Visibility exponent applied to `1 / distance`.
    pub beta: f64,

    /// Evaporation rate in (0, 1).
    pub rho: f64,

    /// Pheromone value on every edge before the first iteration.
    pub initial_pheromone: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Whether to construct the ants' tours in parallel using rayon.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 4,
            max_iterations: 10,
            alpha: 1.0,
            beta: 1.0,
            rho: 0.15,
            initial_pheromone: 1.0,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and non-negative, got {}", self.beta));
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(format!("rho must be in (0, 1), got {}", self.rho));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            ));
        }
        Ok(())
    }
}
