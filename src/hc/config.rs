//! Random-restart hill climbing configuration.

/// Configuration parameters for random-restart hill climbing.
///
/// # Examples
///
/// ```
/// use lorry_balance::hc::RestartConfig;
///
/// let config = RestartConfig::default()
///     .with_restarts(50)
///     .with_seed(7);
/// assert_eq!(config.restarts, 50);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartConfig {
    /// Number of independent restarts (random start + descent).
    ///
    /// Must be at least 1.
    pub restarts: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, so consecutive runs differ.
    pub seed: Option<u64>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            restarts: 250,
            seed: None,
        }
    }
}

impl RestartConfig {
    /// Sets the number of restarts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.restarts == 0 {
            return Err("restarts must be at least 1".into());
        }
        Ok(())
    }
}
