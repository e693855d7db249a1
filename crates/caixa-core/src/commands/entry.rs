use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{EntryMoveData, EntryToggleData};
use crate::error::LedgerError;
use crate::ledger::bulk::{StatusEntry, toggle_status};
use crate::ledger::relocate::move_entry;
use crate::model::EntryStatus;
use crate::state::save_groups;

use super::common::{ListKind, open_ledger, require_group, require_group_mut, require_store_mut};

/// The lists `entry toggle` can target. Unlike bulk operations, a
/// toggle also reaches transfers; only the debit side carries a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryList {
    Debits,
    Payroll,
    Scheduled,
    Transfers,
}

impl EntryList {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debits => "debits",
            Self::Payroll => "payroll",
            Self::Scheduled => "scheduled",
            Self::Transfers => "transfers",
        }
    }
}

/// Flips one live entry between open and scheduled and reports the
/// status it landed on.
pub fn toggle(
    group_name: &str,
    store_name: &str,
    list: EntryList,
    index: usize,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;
    let store = require_store_mut(group, group_name, store_name)?;

    let flipped = match list {
        EntryList::Debits => flip(&mut store.live.auto_debits, index),
        EntryList::Payroll => flip(&mut store.live.payroll, index),
        EntryList::Scheduled => flip(&mut store.live.scheduled, index),
        EntryList::Transfers => flip(&mut store.live.transfers_out, index),
    };
    let Some(status) = flipped else {
        return Err(LedgerError::invalid_argument(&format!(
            "Entry index {index} is out of range for the {} list of `{store_name}`.",
            list.as_str()
        )));
    };
    save_groups(&home, &groups)?;

    success(
        "entry toggle",
        EntryToggleData {
            group: group_name.to_string(),
            store: store_name.to_string(),
            list: list.as_str().to_string(),
            index,
            status: status.as_str().to_string(),
        },
    )
}

/// Moves one live entry to the same list of another store in the group.
pub fn relocate(
    group_name: &str,
    from_store: &str,
    to_store: &str,
    list: ListKind,
    index: usize,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let updated = {
        let group = require_group(&groups, group_name)?;
        move_entry(group, from_store, to_store, list, index)?
    };
    groups.insert(group_name.to_string(), updated);
    save_groups(&home, &groups)?;

    success(
        "entry move",
        EntryMoveData {
            group: group_name.to_string(),
            from_store: from_store.to_string(),
            to_store: to_store.to_string(),
            list: list.as_str().to_string(),
            index,
        },
    )
}

fn flip<T>(entries: &mut Vec<T>, index: usize) -> Option<EntryStatus>
where
    T: Clone + StatusEntry,
{
    if index >= entries.len() {
        return None;
    }
    *entries = toggle_status(entries, index);
    entries.get(index).map(StatusEntry::status)
}
