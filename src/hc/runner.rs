//! Random-restart hill climbing execution engine.
//!
//! # Algorithm
//!
//! 1. For each restart:
//!    a. Generate a random initial solution
//!    b. **Descent**: replace the current solution with its best neighbor
//!    while that neighbor is strictly cheaper
//!    c. If the converged cost is strictly lower than the global best,
//!    record it as the new global best
//! 2. Return the global best solution
//!
//! A single shared RNG feeds every restart, so a fixed seed reproduces
//! the whole run.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::config::RestartConfig;
use super::types::HillClimbProblem;

/// Outcome of a single descent from one starting solution.
#[derive(Debug, Clone)]
pub struct Descent<S: Clone> {
    /// Local optimum reached.
    pub solution: S,
    /// Cost of the local optimum.
    pub cost: f64,
    /// Number of accepted (strictly improving) moves.
    pub steps: usize,
    /// Cost of the starting solution followed by the cost after each
    /// accepted move. Strictly decreasing.
    pub cost_trace: Vec<f64>,
}

/// Result of a random-restart hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartResult<S: Clone> {
    /// Best solution found across all restarts.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Number of restarts executed.
    pub restarts: usize,
    /// Restart (0-based) at which the best solution was found.
    pub best_restart: usize,
    /// Best cost after each restart.
    pub cost_history: Vec<f64>,
    /// Accepted descent moves summed over all restarts.
    pub total_steps: usize,
}

/// Random-restart hill climbing runner.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs random-restart hill climbing on the given problem.
    ///
    /// Returns `Err` if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorry_balance::hc::{HillClimbRunner, RestartConfig};
    /// use lorry_balance::lorry::LoadBalanceProblem;
    ///
    /// let problem = LoadBalanceProblem::new(vec![4.0, 3.0, 2.0, 1.0], 2);
    /// let config = RestartConfig::default().with_restarts(5).with_seed(42);
    /// let result = HillClimbRunner::run(&problem, &config).unwrap();
    /// assert_eq!(result.cost_history.len(), 5);
    /// assert!(result.best_cost >= 0.0);
    /// ```
    pub fn run<P: HillClimbProblem>(
        problem: &P,
        config: &RestartConfig,
    ) -> Result<RestartResult<P::Solution>, String> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // First restart seeds the global best, so no sentinel is needed
        let first = Self::descend(problem, problem.initial_solution(&mut rng));
        debug!(restart = 0, cost = first.cost, steps = first.steps, "restart converged");

        let mut best = first.solution;
        let mut best_cost = first.cost;
        let mut best_restart = 0;
        let mut total_steps = first.steps;

        let mut cost_history = Vec::with_capacity(config.restarts);
        cost_history.push(best_cost);

        for restart in 1..config.restarts {
            let start = problem.initial_solution(&mut rng);
            let descent = Self::descend(problem, start);
            total_steps += descent.steps;
            debug!(restart, cost = descent.cost, steps = descent.steps, "restart converged");

            if descent.cost < best_cost {
                best = descent.solution;
                best_cost = descent.cost;
                best_restart = restart;
            }

            cost_history.push(best_cost);
        }

        info!(
            best_cost,
            best_restart,
            restarts = config.restarts,
            total_steps,
            "hill climbing finished"
        );

        Ok(RestartResult {
            best,
            best_cost,
            restarts: config.restarts,
            best_restart,
            cost_history,
            total_steps,
        })
    }

    /// Descends from `start` until no neighbor is strictly cheaper.
    ///
    /// Terminates because every accepted move strictly lowers a cost
    /// that the problem bounds from below.
    pub fn descend<P: HillClimbProblem>(problem: &P, start: P::Solution) -> Descent<P::Solution> {
        let mut current = start;
        let mut current_cost = problem.cost(&current);
        let mut cost_trace = vec![current_cost];

        loop {
            let neighbor = problem.best_neighbor(&current);
            let neighbor_cost = problem.cost(&neighbor);

            if neighbor_cost < current_cost {
                trace!(from = current_cost, to = neighbor_cost, "accepted move");
                current = neighbor;
                current_cost = neighbor_cost;
                cost_trace.push(current_cost);
            } else {
                break;
            }
        }

        Descent {
            solution: current,
            cost: current_cost,
            steps: cost_trace.len() - 1,
            cost_trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hc::{HillClimbProblem, RestartConfig};
    use rand::Rng;

    // ---- f(x) = (x - 7)^2 over integers, unit steps ----

    struct DiscreteQuadratic;

    impl HillClimbProblem for DiscreteQuadratic {
        type Solution = i32;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> i32 {
            rng.random_range(-50..50)
        }

        fn cost(&self, &x: &i32) -> f64 {
            let d = x as f64 - 7.0;
            d * d
        }

        fn best_neighbor(&self, &x: &i32) -> i32 {
            let mut best = x;
            let mut best_cost = self.cost(&x);
            for candidate in [x - 1, x + 1] {
                let c = self.cost(&candidate);
                if c < best_cost {
                    best = candidate;
                    best_cost = c;
                }
            }
            best
        }
    }

    // ---- Two basins: local optimum at -10 (cost 5), global at 10 (cost 0) ----

    struct TwoBasins;

    impl HillClimbProblem for TwoBasins {
        type Solution = i32;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> i32 {
            rng.random_range(-20..=20)
        }

        fn cost(&self, &x: &i32) -> f64 {
            let left = (x + 10).abs() as f64 + 5.0;
            let right = (x - 10).abs() as f64;
            left.min(right)
        }

        fn best_neighbor(&self, &x: &i32) -> i32 {
            let mut best = x;
            let mut best_cost = self.cost(&x);
            for candidate in [x - 1, x + 1] {
                let c = self.cost(&candidate);
                if c < best_cost {
                    best = candidate;
                    best_cost = c;
                }
            }
            best
        }
    }

    #[test]
    fn test_descend_reaches_optimum() {
        let descent = HillClimbRunner::descend(&DiscreteQuadratic, -3);
        assert_eq!(descent.solution, 7);
        assert_eq!(descent.cost, 0.0);
        assert_eq!(descent.steps, 10);
        assert_eq!(descent.cost_trace.len(), 11);
    }

    #[test]
    fn test_descend_cost_trace_strictly_decreasing() {
        let descent = HillClimbRunner::descend(&DiscreteQuadratic, 40);
        for window in descent.cost_trace.windows(2) {
            assert!(
                window[1] < window[0],
                "cost trace should strictly decrease: {} >= {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_descend_at_optimum_takes_no_steps() {
        let descent = HillClimbRunner::descend(&DiscreteQuadratic, 7);
        assert_eq!(descent.steps, 0);
        assert_eq!(descent.cost_trace, vec![0.0]);
    }

    #[test]
    fn test_run_finds_global_basin() {
        let config = RestartConfig::default().with_restarts(30).with_seed(42);
        let result = HillClimbRunner::run(&TwoBasins, &config).unwrap();
        assert_eq!(result.best, 10);
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.restarts, 30);
    }

    #[test]
    fn test_run_cost_history_non_increasing() {
        let config = RestartConfig::default().with_restarts(40).with_seed(7);
        let result = HillClimbRunner::run(&TwoBasins, &config).unwrap();

        assert_eq!(result.cost_history.len(), 40);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.cost_history[result.best_restart], result.best_cost);
    }

    #[test]
    fn test_run_same_seed_is_deterministic() {
        let config = RestartConfig::default().with_restarts(20).with_seed(99);
        let a = HillClimbRunner::run(&TwoBasins, &config).unwrap();
        let b = HillClimbRunner::run(&TwoBasins, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
        assert_eq!(a.total_steps, b.total_steps);
    }

    #[test]
    fn test_run_single_restart() {
        let config = RestartConfig::default().with_restarts(1).with_seed(1);
        let result = HillClimbRunner::run(&DiscreteQuadratic, &config).unwrap();
        assert_eq!(result.restarts, 1);
        assert_eq!(result.best_restart, 0);
        assert_eq!(result.cost_history, vec![0.0]);
    }

    #[test]
    fn test_run_zero_restarts_is_error() {
        let config = RestartConfig::default().with_restarts(0).with_seed(1);
        assert!(HillClimbRunner::run(&DiscreteQuadratic, &config).is_err());
    }
}
