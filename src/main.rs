use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use convection_fd::{
    initialization::{self, HatProfile},
    io::{
        prompt::{Confirm, stdin_prompt},
        write_to_csv::write_to_csv,
    },
    solver::{Solver, SolverParameters},
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scenario {
    /// u_t + c u_x = 0 with c = 1
    Linear,
    /// u_t + u u_x = 0
    Nonlinear,
}

/// 1D convection with forward-time, backward-space differencing.
#[derive(Parser)]
#[command(name = "convection-fd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// JSON parameter file; overrides --scenario
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "linear")]
    scenario: Scenario,

    /// Report the initial condition without asking
    #[arg(long, conflicts_with = "no")]
    yes: bool,

    /// Skip the initial condition without asking
    #[arg(long)]
    no: bool,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (solver_params, hat) = match &cli.config {
        Some(path) => initialization::initialize_params_by_file(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => match cli.scenario {
            Scenario::Linear => (
                SolverParameters::linear_reference(),
                HatProfile::linear_script(),
            ),
            Scenario::Nonlinear => (
                SolverParameters::nonlinear_reference(),
                HatProfile::nonlinear_script(),
            ),
        },
    };
    info!(?solver_params, ?hat, "parameters");

    let mesh = initialization::initialize_mesh1d(&solver_params)?;
    let initial = initialization::initialize_hat(&mesh, &hat);

    let show_initial = if cli.yes {
        true
    } else if cli.no {
        false
    } else {
        stdin_prompt()
            .confirm("Visualize initial condition:")
            .context("reading confirmation")?
    };
    let stdout = io::stdout();
    if show_initial {
        write_to_csv(stdout.lock(), initial.view(), &mesh).context("reporting initial condition")?;
    }

    let mut solver = Solver::new(&mesh, initial, &solver_params)?;
    solver.solve();
    info!(
        step = solver.current_step(),
        time = solver.current_time(),
        "integration finished"
    );
    write_to_csv(stdout.lock(), solver.field(), &mesh).context("reporting solution")?;
    Ok(())
}
