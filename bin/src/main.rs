//! cambio CLI - Historical exchange rates and currency conversion.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

const LONG_ABOUT: &str = "\
Cambio provides historical exchange rates for a base currency against a \
set of other currencies over an interval of dates, and converts between \
currencies on any given day. Data comes from the Frankfurter API.

Rates exist for working days (M-F) only, and the current day's rates may \
not be available until 16:00 CET. The minimum supported date is \
1999-01-04. Dates are always inclusive.";

#[derive(Parser)]
#[command(name = "cambio")]
#[command(about = "Historical exchange rates and currency conversion")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress status output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve historical exchange rates in a date range for a base
    /// currency and one or more other currencies
    History {
        /// Start date (YYYY-MM-DD). Inclusive. Defaults to today
        #[arg(short = 'f', long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Inclusive. Defaults to today
        #[arg(short = 't', long)]
        end: Option<String>,

        /// Base currency symbol
        #[arg(short, long, default_value = "USD")]
        base: String,

        /// Currencies to convert to (space separated list of symbols)
        #[arg(short, long, required = true, num_args = 1..)]
        symbol: Vec<String>,

        /// Path of file to write output to, without extension (JSONL format)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert an amount from one currency to another on a given date
    Convert {
        /// Currency exchange date (YYYY-MM-DD). Defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Base currency symbol
        #[arg(short, long, default_value = "USD")]
        base: String,

        /// Currency to convert to
        #[arg(short, long)]
        symbol: String,

        /// Amount to convert
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,
    },

    /// List currencies supported by the API
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Today is observed once here; all date validation uses this value.
    let today = chrono::Local::now().date_naive();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::History {
            start,
            end,
            base,
            symbol,
            output,
        } => {
            commands::history::history(
                start.as_deref(),
                end.as_deref(),
                &base,
                &symbol,
                output,
                today,
                cli.quiet,
            )
            .await
        }
        Commands::Convert {
            date,
            base,
            symbol,
            amount,
        } => commands::convert::convert(date.as_deref(), &base, &symbol, amount, today).await,
        Commands::Currencies => commands::currencies::currencies().await,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
