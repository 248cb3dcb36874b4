//! Expense CLI commands
//!
//! Implements the add / day / list / delete / clear commands.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_daily_view, format_expense_list};
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Money, PaymentType};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

use super::{confirm, parse_date_or_today};

/// Arguments for `kakeibo add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount in whole currency units (e.g. "120" or "1,200")
    pub amount: String,
    /// What the money was spent on
    pub description: String,
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Payment method (cash or card; unrecognized values count as cash)
    #[arg(short = 't', long = "type", default_value = "cash")]
    pub payment: String,
}

/// Arguments for `kakeibo day`
#[derive(Args)]
pub struct DayArgs {
    /// Day to show (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
}

/// Arguments for `kakeibo list`
#[derive(Args)]
pub struct ListArgs {
    /// Only show expenses on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Number of expenses to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Arguments for `kakeibo delete`
#[derive(Args)]
pub struct DeleteArgs {
    /// Expense ID (full UUID or the short exp-XXXXXXXX form)
    pub id: String,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for `kakeibo clear`
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Handle `kakeibo add`
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> KakeiboResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        KakeiboError::Validation(format!("Invalid amount '{}': {}", args.amount, e))
    })?;
    let date = parse_date_or_today(args.date.as_deref())?;
    let payment = PaymentType::parse(&args.payment);

    let service = ExpenseService::new(&storage.expenses);
    let expense = service.add(CreateExpenseInput {
        date,
        description: args.description,
        amount,
        payment,
    })?;
    storage.save_all()?;

    println!(
        "Added {} on {}: {} {} ({})",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.description,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.payment
    );
    Ok(())
}

/// Handle `kakeibo day`
pub fn handle_day(storage: &Storage, settings: &Settings, args: DayArgs) -> KakeiboResult<()> {
    let date = parse_date_or_today(args.date.as_deref())?;
    let service = ExpenseService::new(&storage.expenses);
    let expenses = service.daily(date)?;

    print!(
        "{}",
        format_daily_view(date, &expenses, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `kakeibo list`
pub fn handle_list(storage: &Storage, settings: &Settings, args: ListArgs) -> KakeiboResult<()> {
    let service = ExpenseService::new(&storage.expenses);

    let expenses = match args.date.as_deref() {
        Some(date) => service.daily(parse_date_or_today(Some(date))?)?,
        None => service.list()?,
    };

    let shown: Vec<_> = expenses.iter().take(args.limit).cloned().collect();
    print!(
        "{}",
        format_expense_list(&shown, &settings.currency_symbol)
    );
    if expenses.len() > shown.len() {
        println!("({} of {} shown)", shown.len(), expenses.len());
    }
    Ok(())
}

/// Handle `kakeibo delete`
pub fn handle_delete(storage: &Storage, settings: &Settings, args: DeleteArgs) -> KakeiboResult<()> {
    if !args.force && !confirm(&format!("Delete expense {}?", args.id))? {
        println!("Cancelled.");
        return Ok(());
    }

    let service = ExpenseService::new(&storage.expenses);
    let deleted = service.delete(&args.id)?;
    storage.save_all()?;

    println!(
        "Deleted {}: {} {}",
        deleted.id,
        deleted.description,
        deleted.amount.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `kakeibo clear`
pub fn handle_clear(storage: &Storage, args: ClearArgs) -> KakeiboResult<()> {
    if !args.force && !confirm("Delete ALL expenses? This cannot be undone.")? {
        println!("Cancelled.");
        return Ok(());
    }

    let service = ExpenseService::new(&storage.expenses);
    let removed = service.clear_all()?;
    storage.save_all()?;

    println!("Deleted {} expense(s).", removed);
    Ok(())
}
