use serde::Serialize;

use crate::model::{AutoDebit, Group, Receipt, ScheduledPayment, Store, Transfer};

/// Derived totals over a store's live entries. Archived entries never
/// contribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoreTotals {
    pub expenses: f64,
    pub receipts: f64,
    pub balance: f64,
}

/// Computes `opening_balance - expenses + receipts` over live entries.
/// Transfer amounts count as expenses by absolute value; every other
/// amount is summed as recorded, including zero or negative values.
pub fn compute_totals(store: &Store) -> StoreTotals {
    let debits: f64 = store.live.auto_debits.iter().map(|entry| entry.amount).sum();
    let payroll: f64 = store.live.payroll.iter().map(|entry| entry.amount).sum();
    let scheduled: f64 = store.live.scheduled.iter().map(|entry| entry.amount).sum();
    let transfers: f64 = store
        .live
        .transfers_out
        .iter()
        .map(|entry| entry.amount.abs())
        .sum();
    let receipts: f64 = store.live.receipts.iter().map(|entry| entry.amount).sum();

    let expenses = debits + payroll + scheduled + transfers;
    StoreTotals {
        expenses,
        receipts,
        balance: store.opening_balance - expenses + receipts,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    AutoDebit,
    Payroll,
    Scheduled,
    TransferOut,
    Receipt,
}

impl EntryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AutoDebit => "auto_debit",
            Self::Payroll => "payroll",
            Self::Scheduled => "scheduled",
            Self::TransferOut => "transfer_out",
            Self::Receipt => "receipt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryData {
    AutoDebit(AutoDebit),
    Payment(ScheduledPayment),
    Transfer(Transfer),
    Receipt(Receipt),
}

/// One row of the flattened transactions view: an entry tagged with its
/// kind and owning store, consumed read-only by the export adapters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedEntry {
    pub store: String,
    pub kind: EntryKind,
    pub archived: bool,
    pub entry: EntryData,
}

/// Flattens one store's entries into a typed view: live entries first,
/// in array order per kind, with history appended when requested.
pub fn aggregate_entries(
    group: &Group,
    store_name: &str,
    include_history: bool,
) -> Vec<AggregatedEntry> {
    let Some(store) = group.stores.get(store_name) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    push_ledger_entries(&mut items, store_name, &store.live, false);
    if include_history {
        push_ledger_entries(&mut items, store_name, &store.history, true);
    }
    items
}

fn push_ledger_entries(
    items: &mut Vec<AggregatedEntry>,
    store_name: &str,
    ledger: &crate::model::StoreLedger,
    archived: bool,
) {
    for entry in &ledger.auto_debits {
        items.push(AggregatedEntry {
            store: store_name.to_string(),
            kind: EntryKind::AutoDebit,
            archived,
            entry: EntryData::AutoDebit(entry.clone()),
        });
    }
    for entry in &ledger.payroll {
        items.push(AggregatedEntry {
            store: store_name.to_string(),
            kind: EntryKind::Payroll,
            archived,
            entry: EntryData::Payment(entry.clone()),
        });
    }
    for entry in &ledger.scheduled {
        items.push(AggregatedEntry {
            store: store_name.to_string(),
            kind: EntryKind::Scheduled,
            archived,
            entry: EntryData::Payment(entry.clone()),
        });
    }
    for entry in &ledger.transfers_out {
        items.push(AggregatedEntry {
            store: store_name.to_string(),
            kind: EntryKind::TransferOut,
            archived,
            entry: EntryData::Transfer(entry.clone()),
        });
    }
    for entry in &ledger.receipts {
        items.push(AggregatedEntry {
            store: store_name.to_string(),
            kind: EntryKind::Receipt,
            archived,
            entry: EntryData::Receipt(entry.clone()),
        });
    }
}
