//! Expense CLI commands
//!
//! Implements the add, list, edit, delete and total commands for one user.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_details;
use crate::error::ExpenseResult;
use crate::reports::{format_total, MonthlySummary};
use crate::services::{ExpenseForm, ExpenseService, SessionService, UserType};
use crate::storage::Storage;

use super::confirm;

/// Expense commands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Username
        #[arg(short, long, env = "EXPENSE_USER")]
        user: String,
        /// What the money was spent on
        expense: String,
        /// Amount (e.g., "5" or "12.50")
        amount: String,
        /// Month the expense belongs to
        #[arg(short, long)]
        month: String,
        /// Currency code (default from settings)
        #[arg(long, default_value = "")]
        currency: String,
        /// Category
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// List expenses grouped by month
    List {
        /// Username
        #[arg(short, long, env = "EXPENSE_USER")]
        user: String,
        /// Show a subtotal under each month
        #[arg(short, long)]
        subtotals: bool,
    },
    /// Edit an expense
    Edit {
        /// Username
        #[arg(short, long, env = "EXPENSE_USER")]
        user: String,
        /// List position (1-based) or expense ID
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New currency
        #[arg(long)]
        currency: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Username
        #[arg(short, long, env = "EXPENSE_USER")]
        user: String,
        /// List position (1-based) or expense ID
        expense: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the total of all expenses
    Total {
        /// Username
        #[arg(short, long, env = "EXPENSE_USER")]
        user: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let sessions = SessionService::new(storage);
    let service = ExpenseService::new(storage, settings);

    match cmd {
        ExpenseCommands::Add {
            user,
            expense,
            amount,
            month,
            currency,
            category,
        } => {
            let mut session = sessions.start(&user, UserType::Existing)?;
            let form = ExpenseForm::new(expense, amount, currency, category, month);

            let added = service.add(&mut session, &form)?;

            println!("Added expense: {}", added);
            println!("  Month: {}", added.month);
            println!("  ID: {}", added.id);
            println!("{}", format_total(session.total(), &settings.total_label));
        }

        ExpenseCommands::List { user, subtotals } => {
            let session = sessions.start(&user, UserType::Existing)?;
            let summary = MonthlySummary::generate(session.expenses());
            print!("{}", summary.format_terminal(&settings.total_label, subtotals));
        }

        ExpenseCommands::Edit {
            user,
            expense,
            name,
            amount,
            currency,
            category,
            month,
        } => {
            let mut session = sessions.start(&user, UserType::Existing)?;
            let position = session.resolve(&expense)?;

            if name.is_none()
                && amount.is_none()
                && currency.is_none()
                && category.is_none()
                && month.is_none()
            {
                println!("No changes specified. Use --name, --amount, --currency, --category or --month.");
                return Ok(());
            }

            let mut form = service.begin_edit(&mut session, position)?;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(currency) = currency {
                form.currency = currency;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(month) = month {
                form.month = month;
            }

            let outcome = service.submit(&mut session, &form)?;
            println!("Updated expense #{}: {}", position + 1, outcome.expense());
        }

        ExpenseCommands::Delete { user, expense, yes } => {
            let mut session = sessions.start(&user, UserType::Existing)?;
            let position = session.resolve(&expense)?;

            if !yes && settings.confirm_delete {
                if let Some(found) = session.get(position) {
                    print!("{}", format_expense_details(found, position));
                }
                if !confirm("Are you sure you want to delete this expense?")? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let removed = service.delete(&mut session, position)?;
            println!("Deleted expense: {}", removed);
            println!("{}", format_total(session.total(), &settings.total_label));
        }

        ExpenseCommands::Total { user } => {
            let session = sessions.start(&user, UserType::Existing)?;
            println!("{}", format_total(session.total(), &settings.total_label));
        }
    }

    Ok(())
}
