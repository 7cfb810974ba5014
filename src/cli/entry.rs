//! Entry CLI commands
//!
//! Implements the add / edit / delete / list / summary commands on top of
//! the ledger service.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_categories, format_ledger_view, format_summary, format_transaction_details, LedgerView,
    SummaryView,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryDraft, Kind, TransactionId, DATE_FORMAT};
use crate::services::{parse_category_selector, parse_month_selector, Ledger, TransactionFilter};
use crate::storage::Store;

/// Entry subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Record income or an expense
    Add {
        /// Amount, e.g. "500" or "12.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Income or Expense
        #[arg(short, long, default_value = "expense")]
        kind: Kind,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change an existing entry; omitted fields keep their value
    Edit {
        /// Entry ID
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type
        #[arg(short, long)]
        kind: Option<Kind>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List entries with totals
    List {
        /// Only this category ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,
        /// Only this month, 1-12 ("All" for every month)
        #[arg(short, long)]
        month: Option<String>,
        /// Exact amount, or text found in category, type or date
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show income, expense and balance
    Summary,
}

/// Handle an entry command
pub fn handle_entry_command<S: Store>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: EntryCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        EntryCommands::Add {
            amount,
            category,
            kind,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let txn = ledger.add(&EntryDraft::new(amount, category, kind, date))?;

            println!("Added entry:");
            print!("{}", indent(&format_transaction_details(&txn, symbol)));
        }

        EntryCommands::Edit {
            id,
            amount,
            category,
            kind,
            date,
        } => {
            let id = parse_id(&id)?;
            let current = ledger
                .get(id)
                .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

            let mut draft = current.to_draft();
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(kind) = kind {
                draft.kind = kind;
            }
            if let Some(date) = date {
                draft.date = date;
            }

            let updated = ledger.update(id, &draft)?;

            println!("Updated entry:");
            print!("{}", indent(&format_transaction_details(&updated, symbol)));
        }

        EntryCommands::Delete { id, force } => {
            let id = parse_id(&id)?;
            let txn = ledger
                .get(id)
                .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

            if !force {
                println!("About to delete entry:");
                print!("{}", indent(&format_transaction_details(txn, symbol)));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = ledger.remove(id)?;
            println!(
                "Deleted entry: {} ({} {} {})",
                deleted.id,
                deleted.date_string(),
                deleted.category,
                deleted.amount.format_with_symbol(symbol)
            );
        }

        EntryCommands::List {
            category,
            month,
            search,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(category) = category.as_deref().and_then(parse_category_selector) {
                filter = filter.category(category);
            }
            if let Some(month) = month.as_deref().map(parse_month_selector).transpose()?.flatten() {
                filter = filter.month(month);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }

            let view = LedgerView::build(ledger.transactions(), &filter, symbol);
            print!("{}", format_ledger_view(&view));
        }

        EntryCommands::Summary => {
            let summary = ledger.summary();
            print!("{}", format_summary(&SummaryView::new(&summary, symbol)));
            println!();

            let view = LedgerView::build(ledger.transactions(), &TransactionFilter::new(), symbol);
            print!("{}", format_categories(&view.categories));
        }
    }

    Ok(())
}

fn parse_id(id: &str) -> LedgerResult<TransactionId> {
    TransactionId::parse(id.trim())
        .map_err(|_| LedgerError::Validation(format!("Invalid entry ID: '{}'", id)))
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

fn indent(block: &str) -> String {
    block.lines().map(|line| format!("  {}\n", line)).collect()
}
