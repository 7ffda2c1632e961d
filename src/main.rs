//! bigcalc - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bigcalc::core::{eval_expression, AngleMode, EvaluationContext};
use bigcalc::repl::{format_result, LineRepl, ReplConfig};
use bigcalc::util::config::load_user_config;
use bigcalc::util::logger::{self, LogLevel};
use bigcalc::{NAME, VERSION};

/// Scientific infix expression calculator
#[derive(Parser, Debug)]
#[command(name = "bigcalc")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive calculator (default)
    Repl {
        /// Start in degree mode
        #[arg(long)]
        degrees: bool,
    },

    /// Evaluate a single expression and print the result
    Eval {
        /// Expression to evaluate
        #[arg(value_name = "EXPR")]
        expr: String,

        /// Evaluate in degree mode
        #[arg(long)]
        degrees: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger::init_with_level(if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    });

    match args.command.unwrap_or(Commands::Repl { degrees: false }) {
        Commands::Repl { degrees } => {
            let user = load_user_config().context("Failed to load user config")?;
            let mut config = ReplConfig::from_user_config(&user);
            if degrees {
                config.angle_mode = AngleMode::Degrees;
            }
            LineRepl::with_config(config)?.run()?;
        }
        Commands::Eval { expr, degrees } => {
            let ctx = EvaluationContext::new(if degrees {
                AngleMode::Degrees
            } else {
                AngleMode::Radians
            });
            let value = eval_expression(&expr, &ctx)
                .with_context(|| format!("Failed to evaluate: {expr}"))?;
            println!("{}", format_result(value));
        }
    }

    Ok(())
}
