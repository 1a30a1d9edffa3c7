use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use budgetmgr::cli::{
    exit_code, handle_add, handle_balance, handle_budget_command, handle_chart, handle_list,
    handle_remove, handle_summary, hint, AddArgs, BudgetCommands, ChartArgs, ListArgs,
    SummaryArgs,
};
use budgetmgr::config::{BudgetPaths, Settings};
use budgetmgr::storage::open_store;
use budgetmgr::BudgetError;

#[derive(Parser)]
#[command(
    name = "budgetmgr",
    version,
    about = "Manage your financial ledger",
    long_about = "budgetmgr records dated income and expense transactions by category, \
                  summarizes them per year, month or custom range, exports summaries \
                  to CSV, JSON or YAML, and warns when a category goes over its \
                  monthly budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new transaction
    Add(AddArgs),

    /// Remove a transaction by id
    #[command(alias = "rm")]
    Remove {
        /// Transaction id
        id: String,
    },

    /// List transactions in chronological order
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show total balance, income, and expenses
    Balance,

    /// Summarize a period and optionally export it
    Summary(SummaryArgs),

    /// Print an ASCII chart of income and expenses per category
    Chart(ChartArgs),

    /// Monthly category budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show current configuration and paths, optionally changing settings
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    /// Store data in "json" files or a "sqlite" database
    #[arg(long)]
    backend: Option<String>,
    /// Currency symbol used in console output
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> ExitCode {
    budgetmgr::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            match err.downcast_ref::<BudgetError>() {
                Some(budget_err) => {
                    if let Some(hint) = hint(budget_err) {
                        eprintln!("Hint: {}", hint);
                    }
                    ExitCode::from(exit_code(budget_err))
                }
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = BudgetPaths::new()?;

    let Some(command) = cli.command else {
        println!("budgetmgr - personal finance ledger");
        println!();
        println!("Run 'budgetmgr --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config(args) = &command {
        if args.backend.is_some() || args.currency.is_some() {
            let mut stored = Settings::load(&paths)?;
            if let Some(backend) = &args.backend {
                stored.storage_backend = backend.parse()?;
            }
            if let Some(currency) = &args.currency {
                stored.currency_symbol = currency.clone();
            }
            stored.save(&paths)?;
            println!("Saved settings to {}", paths.settings_file().display());
            println!();
        }
    }

    let settings = Settings::load_or_create(&paths)?;

    if let Commands::Config(_) = command {
        println!("budgetmgr Configuration");
        println!("=======================");
        println!("Base directory:   {}", paths.base_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!("Data directory:   {}", paths.data_dir().display());
        println!("Export directory: {}", paths.export_dir().display());
        println!();
        println!("Settings:");
        println!("  Storage backend: {}", settings.storage_backend);
        println!("  Currency symbol: {}", settings.currency_symbol);
        return Ok(());
    }

    let mut boxed = open_store(&paths, settings.storage_backend)?;
    let store = boxed.as_mut();

    match command {
        Commands::Add(args) => handle_add(store, &settings, args)?,
        Commands::Remove { id } => handle_remove(store, &id)?,
        Commands::List(args) => handle_list(store, &settings, args)?,
        Commands::Balance => handle_balance(store, &settings)?,
        Commands::Summary(args) => handle_summary(store, &settings, args)?,
        Commands::Chart(args) => handle_chart(store, args)?,
        Commands::Budget(cmd) => handle_budget_command(store, &settings, cmd)?,
        Commands::Config(_) => {}
    }

    Ok(())
}
