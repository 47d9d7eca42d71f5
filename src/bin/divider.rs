use anyhow::Result;
use clap::Parser;
use sweng_lessons::divider::{divide, parse_operand};

/// Divide two numbers given on the command line
#[derive(Parser)]
#[command(name = "divider", version, about, long_about = None)]
struct Cli {
    /// Dividend
    #[arg(allow_hyphen_values = true)]
    numerator: String,

    /// Divisor
    #[arg(allow_hyphen_values = true)]
    denominator: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let numerator = parse_operand(1, &cli.numerator)?;
    let denominator = parse_operand(2, &cli.denominator)?;
    tracing::debug!(numerator, denominator, "dividing");

    println!("{}", divide(numerator, denominator)?);
    Ok(())
}
