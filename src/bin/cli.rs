//! SeqVec CLI
//!
//! Drives a `Vector<i64>` through commands and prints the buffer after each.

use clap::{Parser, Subcommand};
use seqvec::harness::{scenario, Command, Session};
use seqvec::{GrowthPolicy, SeqVecError};
use tracing_subscriber::{fmt, EnvFilter};

/// SeqVec CLI
#[derive(Parser, Debug)]
#[command(name = "seqvec-cli")]
#[command(about = "Exercise the SeqVec container from the command line")]
#[command(version)]
struct Args {
    /// Capacity of the first allocation
    #[arg(long, default_value = "10")]
    initial_capacity: usize,

    /// Capacity multiplier when the buffer is full
    #[arg(long, default_value = "2")]
    growth_factor: usize,

    /// Starting contents, e.g. 1,2,3
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    init: Vec<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the insert/erase/at walkthrough on {10, 20, 30}
    Scenario,

    /// Apply commands in order, e.g. "push_back 5" "insert 0 1"
    Run {
        /// Stop at the first failing command
        #[arg(long)]
        strict: bool,

        /// Commands, one per argument
        #[arg(required = true)]
        ops: Vec<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,seqvec=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("SeqVec CLI v{}", seqvec::VERSION);

    let policy = match GrowthPolicy::builder()
        .initial_capacity(args.initial_capacity)
        .growth_factor(args.growth_factor)
        .build()
    {
        Ok(policy) => policy,
        Err(e) => {
            tracing::error!("Invalid growth policy: {}", e);
            std::process::exit(2);
        }
    };

    let result = match args.command {
        Commands::Scenario => {
            let (initial, commands) = scenario();
            execute(policy, &initial, commands.into_iter().map(Ok), false)
        }
        Commands::Run { strict, ops } => {
            let commands = ops.iter().map(|op| Command::parse(op));
            execute(policy, &args.init, commands, strict)
        }
    };

    if let Err(e) = result {
        tracing::error!("Run aborted: {}", e);
        std::process::exit(1);
    }
}

/// Apply each command, printing its outcome and the buffer afterwards
fn execute<I>(policy: GrowthPolicy, initial: &[i64], commands: I, strict: bool) -> Result<(), SeqVecError>
where
    I: Iterator<Item = Result<Command, SeqVecError>>,
{
    let mut session = Session::new(policy, initial)?;
    println!("start: {}", session.vector());

    let mut failures = 0usize;
    for command in commands {
        let outcome = command.and_then(|command| {
            let outcome = session.apply(&command)?;
            Ok((command, outcome))
        });

        match outcome {
            Ok((command, outcome)) => {
                println!("{}: {}", command.name(), outcome);
                println!("  {}", session.vector());
            }
            Err(e) if strict => return Err(e),
            Err(e) => {
                failures += 1;
                println!("error: {}", e);
            }
        }
    }

    tracing::info!(
        "Applied {} command(s), {} failed",
        session.applied(),
        failures
    );
    Ok(())
}
