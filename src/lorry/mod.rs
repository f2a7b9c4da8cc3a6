//! Brick-to-lorry load balancing.
//!
//! Thirty brick groups of known weight must be split across three
//! lorries so that the loads are as even as possible. The objective is
//! the gap between the heaviest and lightest lorry, minimized with
//! [`crate::hc`] using single-brick moves as the neighborhood.

mod assignment;
mod data;
mod problem;

pub use assignment::Assignment;
pub use data::{BRICK_WEIGHTS, LORRY_COUNT};
pub use problem::LoadBalanceProblem;

use crate::hc::RestartResult;

/// Renders the console report: the best fitness, then one line per lorry.
///
/// # Examples
///
/// ```
/// use lorry_balance::hc::RestartResult;
/// use lorry_balance::lorry::{render_report, Assignment};
///
/// let result = RestartResult {
///     best: Assignment::new(vec![vec![2.5], vec![1.0, 1.5]]),
///     best_cost: 0.0,
///     restarts: 1,
///     best_restart: 0,
///     cost_history: vec![0.0],
///     total_steps: 0,
/// };
/// assert_eq!(
///     render_report(&result),
///     "Best fitness: 0\nLorry 1: 2.5\nLorry 2: 1, 1.5\n"
/// );
/// ```
pub fn render_report(result: &RestartResult<Assignment>) -> String {
    format!("Best fitness: {}\n{}", result.best_cost, result.best)
}
