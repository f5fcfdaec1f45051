use anyhow::Result;
use clap::{Parser, Subcommand};

use envelope_balance::cli::{
    handle_check_command, handle_config_command, handle_plan_command, handle_positions_command,
};
use envelope_balance::config::{BalancePaths, OutputFormat, Settings};
use envelope_balance::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "envelope-balance",
    author = "Kaylee Beyene",
    version,
    about = "Plan the transfers that balance a household budget",
    long_about = "envelope-balance reads a monthly budget snapshot (income, expenses \
                  and savings per account) and works out which account-to-account \
                  transfers bring every account to zero."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the transfers that balance a budget snapshot
    Plan {
        /// Snapshot file (JSON or YAML), or a name in the snapshots directory
        snapshot: String,
        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Fail instead of printing a partial plan when the budget is unbalanced
        #[arg(long)]
        strict: bool,
    },

    /// Show the net position of every account in a snapshot
    #[command(alias = "pos")]
    Positions {
        /// Snapshot file (JSON or YAML), or a name in the snapshots directory
        snapshot: String,
    },

    /// Check whether a snapshot balances (exit status 1 if it does not)
    Check {
        /// Snapshot file (JSON or YAML), or a name in the snapshots directory
        snapshot: String,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BalancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings.log_filter);

    match cli.command {
        Some(Commands::Plan {
            snapshot,
            format,
            strict,
        }) => {
            handle_plan_command(&paths, &settings, &snapshot, format, strict)?;
        }
        Some(Commands::Positions { snapshot }) => {
            handle_positions_command(&paths, &settings, &snapshot)?;
        }
        Some(Commands::Check { snapshot }) => {
            if !handle_check_command(&paths, &settings, &snapshot)? {
                std::process::exit(1);
            }
        }
        Some(Commands::Config { init }) => {
            handle_config_command(&paths, &settings, init)?;
        }
        None => {
            println!("envelope-balance - transfer planning for household budgets");
            println!();
            println!("Run 'envelope-balance --help' for usage information.");
            println!("Run 'envelope-balance plan <SNAPSHOT>' to plan transfers.");
        }
    }

    Ok(())
}
