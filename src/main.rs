//! Splits the shipped brick groups across three lorries and prints the
//! most balanced loading found.

use std::error::Error;

use lorry_balance::hc::{HillClimbRunner, RestartConfig};
use lorry_balance::lorry::{render_report, LoadBalanceProblem};
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();

    let problem = LoadBalanceProblem::bricks();
    let config = RestartConfig::default();
    let result = HillClimbRunner::run(&problem, &config)?;

    print!("{}", render_report(&result));
    Ok(())
}
