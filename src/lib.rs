//! Random-restart hill climbing for balancing brick loads across lorries.
//!
//! - **Hill Climbing (HC)**: generic steepest-descent local search with
//!   random restarts and global-best tracking. The user implements random
//!   initialization, a cost function, and a best-neighbor step.
//! - **Lorry**: the load-balancing domain. Weighted brick groups are
//!   partitioned across a fixed number of lorries, minimizing the spread
//!   between the heaviest and lightest load.
//!
//! # Example
//!
//! ```
//! use lorry_balance::hc::{HillClimbRunner, RestartConfig};
//! use lorry_balance::lorry::LoadBalanceProblem;
//!
//! let problem = LoadBalanceProblem::bricks();
//! let config = RestartConfig::default().with_restarts(10).with_seed(42);
//! let result = HillClimbRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.best.item_count(), 30);
//! ```

pub mod hc;
pub mod lorry;
