use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use calculator::Service;
use calculator_sdk::{CalculatorApi, Operation};
use clap::{Parser, Subcommand};
use devops_bootstrap::{AppConfig, CliArgs};

/// Hello DevOps - greeting and integer arithmetic for pipeline smoke checks
#[derive(Parser, Debug)]
#[command(name = "hello-devops")]
#[command(about = "Hello DevOps - greeting and integer arithmetic for pipeline smoke checks")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print the greeting (default)
    Greet,
    /// Add two integers
    #[command(allow_negative_numbers = true)]
    Add { a: i64, b: i64 },
    /// Multiply two integers
    #[command(allow_negative_numbers = true)]
    Multiply { a: i64, b: i64 },
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock())
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let args = CliArgs {
        config: cli.config,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args);

    devops_bootstrap::init_logging(&config.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hello-devops starting");

    if args.print_config {
        writeln!(out, "Effective configuration:\n{}", config.to_yaml()?)?;
        return Ok(());
    }

    let service = Service::from_config(&config.calculator);
    match cli.command.unwrap_or(Commands::Greet) {
        Commands::Greet => writeln!(out, "{}", service.greeting())?,
        Commands::Add { a, b } => write_result(out, &service, Operation::Add, a, b)?,
        Commands::Multiply { a, b } => write_result(out, &service, Operation::Multiply, a, b)?,
        Commands::Check => {
            tracing::info!("Checking configuration...");
            writeln!(out, "Configuration is valid")?;
            writeln!(out, "{}", config.to_yaml()?)?;
        }
    }
    Ok(())
}

fn write_result(
    out: &mut dyn Write,
    api: &dyn CalculatorApi,
    op: Operation,
    a: i64,
    b: i64,
) -> Result<()> {
    let value = api
        .evaluate(op, a, b)
        .with_context(|| format!("cannot compute {op} of {a} and {b}"))?;
    writeln!(out, "{value}")?;
    Ok(())
}
