use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use sweng_lessons::io::{read_params, read_profile, write_profile, write_snapshots};
use sweng_lessons::sim::diffusion::{DiffusionParams, run_recorded, spike_profile};
use tracing::info;

#[derive(Parser)]
#[command(name = "sweng-lessons")]
#[command(version, about = "Run the lesson snippets from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the 1D heat equation with the explicit scheme
    Heat(HeatArgs),
}

#[derive(Args)]
struct HeatArgs {
    /// JSON parameter file; flags below override its values
    #[arg(long)]
    params: Option<PathBuf>,

    /// Thermal diffusivity in m^2/s
    #[arg(long)]
    alpha: Option<f64>,

    /// Domain length in m
    #[arg(long)]
    length: Option<f64>,

    /// End time in s
    #[arg(long)]
    t_max: Option<f64>,

    /// Number of nodes
    #[arg(long)]
    nx: Option<usize>,

    /// Number of time levels
    #[arg(long)]
    nt: Option<usize>,

    /// Initial profile as a JSON array; defaults to a centered spike
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Height of the default spike profile
    #[arg(long, default_value_t = 100.0)]
    peak: f64,

    /// Write the final profile to this JSON file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write snapshots to this JSON file
    #[arg(long)]
    snapshots: Option<PathBuf>,

    /// Record a snapshot every N steps
    #[arg(long, default_value_t = 0)]
    every: usize,
}

impl HeatArgs {
    /// Parameters from `--params` (or the defaults) with flag overrides applied.
    fn resolve_params(&self) -> Result<DiffusionParams> {
        let mut params = match &self.params {
            Some(path) => read_params(path)?,
            None => DiffusionParams::default(),
        };
        if let Some(alpha) = self.alpha {
            params.alpha = alpha;
        }
        if let Some(length) = self.length {
            params.length = length;
        }
        if let Some(t_max) = self.t_max {
            params.t_max = t_max;
        }
        if let Some(nx) = self.nx {
            params.nx = nx;
        }
        if let Some(nt) = self.nt {
            params.nt = nt;
        }
        params.check_ranges().context("Invalid heat parameters")?;
        Ok(params)
    }

    fn initial_profile(&self, params: &DiffusionParams) -> Result<Vec<f64>> {
        let initial = match &self.profile {
            Some(path) => read_profile(path)?,
            None => spike_profile(params.nx, self.peak),
        };
        if initial.len() != params.nx {
            bail!("Profile has {} nodes but nx = {}", initial.len(), params.nx);
        }
        Ok(initial)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Heat(args) => heat(args),
    }
}

fn heat(args: HeatArgs) -> Result<()> {
    let params = args.resolve_params()?;
    let initial = args.initial_profile(&params)?;

    info!(
        dx = params.dx(),
        dt = params.dt(),
        r = params.stability_ratio(),
        steps = params.num_steps(),
        "running explicit heat solver"
    );
    if let Err(err) = params.validate() {
        bail!(
            "{err}; with t_max = {} use nt >= {}",
            params.t_max,
            params.min_stable_nt()
        );
    }

    let snapshots = run_recorded(&initial, &params, args.every)?;
    let final_profile = snapshots
        .last()
        .map(|s| s.temperatures.as_slice())
        .unwrap_or(initial.as_slice());

    if let Some(path) = &args.snapshots {
        write_snapshots(path, &snapshots)?;
        info!(count = snapshots.len(), path = %path.display(), "snapshots written");
    }

    match &args.output {
        Some(path) => {
            write_profile(path, final_profile)?;
            info!(path = %path.display(), "final profile written");
        }
        None => {
            for (i, t) in final_profile.iter().enumerate() {
                println!("{:>4} {:>10.4} {:>12.6}", i, i as f64 * params.dx(), t);
            }
        }
    }

    Ok(())
}
