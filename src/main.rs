use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finsight::cli::{
    handle_add_command, handle_balance_command, handle_budgets_command,
    handle_transactions_command, handle_transfer_command, resolve_now, AddArgs, BalanceArgs,
    BudgetsArgs, TransactionsArgs, TransferArgs,
};
use finsight::config::{paths::FinsightPaths, settings::Settings};
use finsight::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "Finsight filters a snapshot of your accounts and transactions by \
                  account, type and period, and totals balances, income and \
                  expenses per currency."
)]
struct Cli {
    /// Evaluate periods as of this date or date-time instead of now
    #[arg(long, global = true, env = "FINSIGHT_AS_OF")]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with empty snapshots
    Init,

    /// Show current configuration and paths
    Config,

    /// Show balances, income and expenses by currency
    #[command(alias = "bal")]
    Balance(BalanceArgs),

    /// List filtered transactions, newest first
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// Show budget usage and goal progress
    Budgets(BudgetsArgs),

    /// Validate a new transaction and print its request body
    Add(AddArgs),

    /// Preview a transfer between two accounts
    Transfer(TransferArgs),
}

fn init_tracing() {
    let log_format = std::env::var("FINSIGHT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinsightPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let now = resolve_now(cli.as_of.as_deref())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Finsight at: {}", paths.base_dir().display());
            let created = finsight::storage::initialize_storage(&paths)?;
            for file in &created {
                println!("  created {}", file.display());
            }
            println!("Initialization complete!");
            println!();
            println!("Place the API's JSON responses in {}", paths.data_dir().display());
        }
        Some(Commands::Config) => {
            println!("Finsight Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default period:  {}", settings.default_period);
            println!("  Default account: {}", settings.default_account);
            println!("  Date format:     {}", settings.date_format);
            println!("  Budget warning:  {}%", settings.budget_warning_percent);
        }
        Some(Commands::Balance(args)) => {
            let storage = Storage::open(paths)?;
            handle_balance_command(&storage, &settings, args, now)?;
        }
        Some(Commands::Transactions(args)) => {
            let storage = Storage::open(paths)?;
            handle_transactions_command(&storage, &settings, args, now)?;
        }
        Some(Commands::Budgets(args)) => {
            let storage = Storage::open(paths)?;
            handle_budgets_command(&storage, &settings, args, now)?;
        }
        Some(Commands::Add(args)) => {
            let storage = Storage::open(paths)?;
            handle_add_command(&storage, args, now)?;
        }
        Some(Commands::Transfer(args)) => {
            let storage = Storage::open(paths)?;
            handle_transfer_command(&storage, args, now)?;
        }
        None => {
            println!("Finsight - personal finance dashboard");
            println!();
            println!("Run 'finsight --help' for usage information.");
        }
    }

    Ok(())
}
