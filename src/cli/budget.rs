//! Budget CLI commands
//!
//! Set, remove, list and check monthly category budgets.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_list, format_budget_status};
use crate::error::BudgetResult;
use crate::models::{Budget, Money, Period, Timestamp};
use crate::reports::evaluate_all;
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set (or replace) the monthly limit for a category
    Set {
        /// Category name
        category: String,
        /// Monthly limit, must be positive (e.g. "600.00")
        limit: String,
    },
    /// Remove the budget for a category
    #[command(alias = "rm")]
    Remove {
        /// Category name
        category: String,
    },
    /// List configured budgets
    #[command(alias = "ls")]
    List,
    /// Show spending against each budget for a month
    Status {
        /// Any timestamp in the month to check, defaults to now
        #[arg(long)]
        at: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut dyn Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = Money::parse(&limit)?;
            let budget = Budget::new(category, limit)?;

            let mut book = store.load_budget_book()?;
            let replaced = book.set(budget.clone());
            store.save_budget(&budget)?;

            match replaced {
                Some(old) => println!(
                    "Updated budget for '{}': {} (was {})",
                    budget.category(),
                    budget.limit().format_with_symbol(symbol),
                    old.limit().format_with_symbol(symbol)
                ),
                None => println!(
                    "Set budget for '{}': {}",
                    budget.category(),
                    budget.limit().format_with_symbol(symbol)
                ),
            }
        }

        BudgetCommands::Remove { category } => {
            let mut book = store.load_budget_book()?;
            let removed = book.remove(&category)?;
            store.delete_budget(&category)?;
            println!("Removed budget for '{}'", removed.category());
        }

        BudgetCommands::List => {
            let book = store.load_budget_book()?;
            print!("{}", format_budget_list(&book, symbol));
        }

        BudgetCommands::Status { at } => {
            let reference = match at {
                Some(ts) => Timestamp::from_iso(&ts)?,
                None => Timestamp::now(),
            };
            let ledger = store.load_ledger()?;
            let book = store.load_budget_book()?;
            let statuses = evaluate_all(&ledger, &book, reference)?;

            println!("Budget status for {}", Period::month_of(reference));
            print!("{}", format_budget_status(&statuses, symbol));
        }
    }

    Ok(())
}
