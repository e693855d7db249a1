use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// A comma-separated index selection like `0,2,5`, parsed as one
/// argument value. An empty string is a valid empty selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSelection(pub Vec<usize>);

pub fn parse_index_list(value: &str) -> Result<IndexSelection, String> {
    if value.trim().is_empty() {
        return Ok(IndexSelection(Vec::new()));
    }

    value
        .split(',')
        .map(|piece| {
            piece
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("`{piece}` is not a valid entry index"))
        })
        .collect::<Result<Vec<usize>, String>>()
        .map(IndexSelection)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListArg {
    Debits,
    Payroll,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryListArg {
    Debits,
    Payroll,
    Scheduled,
    Transfers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BulkActionArg {
    Schedule,
    Reopen,
    Delete,
    Recategorize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Salario,
    Adiantamento,
    Gratificacao,
    DecimoTerceiro,
}

#[derive(Debug, Parser)]
#[command(
    name = "caixa",
    version,
    about = "cash ledger for retail store groups",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Ledger home directory (defaults to CAIXA_HOME, then ~/.caixa)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage store groups
    #[command(arg_required_else_help = true)]
    Group {
        #[command(subcommand)]
        command: GroupCommand,
    },
    /// Manage the stores of a group
    #[command(arg_required_else_help = true)]
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },
    /// Append entries from a normalized JSON array file
    Import {
        group: String,
        store: String,
        /// Which live list receives the entries
        #[arg(long, value_enum)]
        list: ListArg,
        /// Path to the JSON file
        file: PathBuf,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Move money between two stores of a group
    #[command(arg_required_else_help = true)]
    Transfer {
        #[command(subcommand)]
        command: TransferCommand,
    },
    /// Act on one live entry by its list index
    #[command(arg_required_else_help = true)]
    Entry {
        #[command(subcommand)]
        command: EntryCommand,
    },
    /// Apply one operation to a selection of live entries
    Bulk {
        group: String,
        store: String,
        #[arg(long, value_enum)]
        list: ListArg,
        #[arg(long, value_enum)]
        action: BulkActionArg,
        /// Comma-separated entry indices, e.g. `0,2,5`
        #[arg(long, value_parser = parse_index_list, default_value = "")]
        select: IndexSelection,
        /// Payroll category (recategorize only)
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Daily close: check for pending entries and archive them
    #[command(arg_required_else_help = true)]
    Day {
        #[command(subcommand)]
        command: DayCommand,
    },
    /// Show a store's expenses, receipts, and balance
    Totals {
        group: String,
        store: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List a store's entries
    Entries {
        group: String,
        store: String,
        /// Include archived entries
        #[arg(long)]
        history: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Manage payment alert rules
    #[command(arg_required_else_help = true)]
    Rule {
        #[command(subcommand)]
        command: RuleCommand,
    },
    /// Manage the payee directory
    #[command(arg_required_else_help = true)]
    Supplier {
        #[command(subcommand)]
        command: SupplierCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum GroupCommand {
    /// Create a new store group
    Create {
        name: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List groups
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum StoreCommand {
    /// Add a store to a group
    Add {
        group: String,
        name: String,
        /// Opening cash balance
        #[arg(long, default_value_t = 0.0)]
        balance: f64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List the stores of a group with their balances
    List {
        group: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove a store and all of its entries
    Remove {
        group: String,
        name: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Set a store's opening balance
    SetBalance {
        group: String,
        name: String,
        balance: f64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TransferCommand {
    /// Record a transfer from one store to another
    Create {
        group: String,
        /// Origin store
        #[arg(long)]
        from: String,
        /// Destination store
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
        /// Transfer date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        date: IsoDate,
        #[arg(long, default_value = "")]
        description: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Rewrite an existing transfer, possibly moving it between stores
    Edit {
        group: String,
        /// Id of the transfer to rewrite
        id: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, value_parser = parse_iso_date)]
        date: IsoDate,
        #[arg(long, default_value = "")]
        description: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Delete a transfer and its receipt
    Delete {
        group: String,
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum EntryCommand {
    /// Flip one entry between open and scheduled
    Toggle {
        group: String,
        store: String,
        /// Which live list holds the entry
        #[arg(long, value_enum)]
        list: EntryListArg,
        /// Zero-based position in the list
        #[arg(long)]
        index: usize,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Move one entry to the same list of another store
    Move {
        group: String,
        /// Store the entry leaves
        #[arg(long)]
        from: String,
        /// Store the entry lands in
        #[arg(long)]
        to: String,
        /// Which live list holds the entry
        #[arg(long, value_enum)]
        list: ListArg,
        /// Zero-based position in the source list
        #[arg(long)]
        index: usize,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DayCommand {
    /// Report whether the group still holds live entries today
    Check {
        group: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Archive live entries into history (one store, or the whole group)
    Clear {
        group: String,
        /// Clear only this store
        #[arg(long)]
        store: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RuleCommand {
    /// Add a payment alert rule (at least one predicate is required)
    Add {
        group: String,
        /// Case-insensitive text to look for in payee and document
        #[arg(long)]
        term: Option<String>,
        /// Document number to match (digits compared when longer than 4)
        #[arg(long)]
        document: Option<String>,
        /// Amount to match within one cent
        #[arg(long)]
        amount: Option<f64>,
        /// Exact due date to match (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Alert text shown when the rule matches
        #[arg(long)]
        message: String,
        /// Mark matches as a recurring payment
        #[arg(long)]
        recurring: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List alert rules
    List {
        group: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove an alert rule by id
    Remove {
        group: String,
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Run a store's live entries through the rule set
    Match {
        group: String,
        store: String,
        #[arg(long, value_enum)]
        list: ListArg,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SupplierCommand {
    /// List the payee directory of a group
    List {
        group: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
