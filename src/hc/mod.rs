//! Random-restart hill climbing (HC).
//!
//! A single-solution local search: from a random start, repeatedly move
//! to the best neighbor while it strictly improves the cost. The search
//! stops at the first local optimum, so independent restarts from fresh
//! random solutions are used to sample several basins; the best local
//! optimum over all restarts is returned.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., §4.1.1 "Hill-climbing search".

mod config;
mod runner;
mod types;

pub use config::RestartConfig;
pub use runner::{Descent, HillClimbRunner, RestartResult};
pub use types::HillClimbProblem;
