//! Brick-to-lorry load balancing as a hill climbing problem.

use rand::Rng;

use super::assignment::Assignment;
use super::data::{BRICK_WEIGHTS, LORRY_COUNT};
use crate::hc::HillClimbProblem;

/// Splits a fixed list of weights across a fixed number of lorries,
/// minimizing the gap between the heaviest and lightest lorry.
#[derive(Debug, Clone)]
pub struct LoadBalanceProblem {
    weights: Vec<f64>,
    lorry_count: usize,
}

impl LoadBalanceProblem {
    /// Creates a problem over `weights` with `lorry_count` lorries (at least one).
    pub fn new(weights: Vec<f64>, lorry_count: usize) -> Self {
        Self {
            weights,
            lorry_count: lorry_count.max(1),
        }
    }

    /// The shipped instance: 30 brick groups across 3 lorries.
    pub fn bricks() -> Self {
        Self::new(BRICK_WEIGHTS.to_vec(), LORRY_COUNT)
    }

    /// Item weights, in input order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of lorries.
    pub fn lorry_count(&self) -> usize {
        self.lorry_count
    }
}

impl HillClimbProblem for LoadBalanceProblem {
    type Solution = Assignment;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        Assignment::random(&self.weights, self.lorry_count, rng)
    }

    fn cost(&self, solution: &Assignment) -> f64 {
        solution.fitness()
    }

    /// Steepest descent over single-item moves.
    ///
    /// The first candidate (in [`Assignment::single_moves`] order) with
    /// the lowest fitness wins; later ties never replace it. Returns a
    /// clone of `solution` when that candidate is not strictly better.
    fn best_neighbor(&self, solution: &Assignment) -> Assignment {
        let mut best: Option<(Assignment, f64)> = None;

        for candidate in solution.single_moves() {
            let fitness = candidate.fitness();
            let improves = match &best {
                Some((_, best_fitness)) => fitness < *best_fitness,
                None => true,
            };
            if improves {
                best = Some((candidate, fitness));
            }
        }

        match best {
            Some((candidate, fitness)) if fitness < solution.fitness() => candidate,
            _ => solution.clone(),
        }
    }
}
