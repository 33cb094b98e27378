//! Minibank CLI - Banking shell over an in-memory ledger
//!
//! Usage:
//! ```bash
//! minibank                                  # interactive shell
//! bank > deposit --client "John Doe" --amount 100 --description "salary"
//! bank > withdraw --client "John Doe" --amount 30 --description "groceries"
//! bank > show_bank_statement --client "John Doe" --since "2021-01-01 00:00:00" --till "2021-12-31 23:59:59"
//! minibank --format csv deposit --client Alice --amount 5 --description tip
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use minibank_core::Rounding;
use minibank_reports::{
    CsvExporter, JsonExporter, MarkdownExporter, ReportExporter, TableExporter,
};
use tracing_subscriber::EnvFilter;

mod commands;
mod session;
mod shell;

use session::Session;

/// Log filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn";

/// Minibank - Service that simulates the bank's work with customer accounts
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rounding rule for statement amounts
    #[arg(long, default_value = "half-down", global = true)]
    pub rounding: RoundingArg,

    /// Output format for bank statements
    #[arg(long, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Prompt of the interactive shell
    #[arg(long, default_value = "bank > ", global = true)]
    pub prompt: String,

    /// Run one command and exit; without a command the shell starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add deposit operation
    Deposit {
        /// Full name
        #[arg(long)]
        client: String,
        /// Amount, $
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(long)]
        description: String,
    },

    /// Add withdrawal operation
    Withdraw {
        /// Full name
        #[arg(long)]
        client: String,
        /// Amount, $
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(long)]
        description: String,
    },

    /// Show transactions for chosen dates
    #[command(name = "show_bank_statement")]
    ShowBankStatement {
        /// Full name
        #[arg(long)]
        client: String,
        /// Datetime (example: 2021-01-01 00:00:00)
        #[arg(long)]
        since: String,
        /// Datetime (example: 2021-01-01 00:00:00)
        #[arg(long)]
        till: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    HalfDown,
    HalfUp,
    HalfEven,
}

impl RoundingArg {
    pub fn to_core_type(&self) -> Rounding {
        match self {
            RoundingArg::HalfDown => Rounding::HalfDown,
            RoundingArg::HalfUp => Rounding::HalfUp,
            RoundingArg::HalfEven => Rounding::HalfEven,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn exporter(&self) -> Box<dyn ReportExporter> {
        match self {
            OutputFormat::Table => Box::new(TableExporter::new()),
            OutputFormat::Csv => Box::new(CsvExporter::new()),
            OutputFormat::Json => Box::new(JsonExporter::new()),
            OutputFormat::Markdown => Box::new(MarkdownExporter::new()),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so statements on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::new(cli.rounding.to_core_type(), cli.format);

    match cli.command {
        Some(command) => {
            let output = session.execute(command)?;
            println!("{}", output);
        }
        None => shell::run(&mut session, &cli.prompt)?,
    }

    Ok(())
}
