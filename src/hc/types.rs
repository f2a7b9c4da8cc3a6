//! Core trait for random-restart hill climbing.

use rand::Rng;

/// Defines a hill climbing problem.
///
/// The user supplies random initial solutions, a cost function, and a
/// best-improvement neighborhood step. The framework handles the descent
/// loop, restarts, and global-best tracking.
///
/// # Minimization
///
/// Hill climbing minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct Knapsack { values: Vec<f64> }
///
/// impl HillClimbProblem for Knapsack {
///     type Solution = Vec<bool>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         self.values.iter().map(|_| rng.random_bool(0.5)).collect()
///     }
///
///     fn cost(&self, picks: &Vec<bool>) -> f64 { /* ... */ }
///
///     fn best_neighbor(&self, picks: &Vec<bool>) -> Vec<bool> {
///         // try every single bit flip, keep the cheapest strict improvement
///     }
/// }
/// ```
pub trait HillClimbProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates a random starting solution for one restart.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Returns the best neighbor of `solution`.
    ///
    /// Implementations should return a clone of `solution` when no
    /// neighbor strictly improves on it; the runner treats a neighbor
    /// whose cost is not strictly lower as convergence either way.
    fn best_neighbor(&self, solution: &Self::Solution) -> Self::Solution;
}
