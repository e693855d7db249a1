use crate::error::{LedgerError, LedgerResult};
use crate::model::Group;

use super::ListKind;

/// Moves one live entry from a store's list onto the end of the same
/// list in another store, in a new Group value.
///
/// Preconditions are checked before anything is cloned: both stores
/// must exist, differ, and the index must name an entry in the source
/// list. A rejected call leaves the input untouched. Transfers are
/// excluded here; re-pointing a transfer is an edit of its pair.
pub fn move_entry(
    group: &Group,
    from: &str,
    to: &str,
    list: ListKind,
    index: usize,
) -> LedgerResult<Group> {
    if from == to {
        return Err(LedgerError::invalid_argument(
            "Source and destination stores must differ.",
        ));
    }
    if !group.stores.contains_key(to) {
        return Err(LedgerError::unknown_store(to));
    }
    let Some(source) = group.stores.get(from) else {
        return Err(LedgerError::unknown_store(from));
    };
    let source_len = match list {
        ListKind::Debits => source.live.auto_debits.len(),
        ListKind::Payroll => source.live.payroll.len(),
        ListKind::Scheduled => source.live.scheduled.len(),
    };
    if index >= source_len {
        return Err(LedgerError::invalid_argument(&format!(
            "Entry index {index} is out of range for the {} list of `{from}`.",
            list.as_str()
        )));
    }

    let mut next = group.clone();
    match list {
        ListKind::Debits => {
            let entry = take(&mut next, from, |ledger| ledger.auto_debits.remove(index))?;
            put(&mut next, to, |ledger| ledger.auto_debits.push(entry))?;
        }
        ListKind::Payroll => {
            let entry = take(&mut next, from, |ledger| ledger.payroll.remove(index))?;
            put(&mut next, to, |ledger| ledger.payroll.push(entry))?;
        }
        ListKind::Scheduled => {
            let entry = take(&mut next, from, |ledger| ledger.scheduled.remove(index))?;
            put(&mut next, to, |ledger| ledger.scheduled.push(entry))?;
        }
    }
    Ok(next)
}

fn take<T>(
    group: &mut Group,
    store_name: &str,
    remove: impl FnOnce(&mut crate::model::StoreLedger) -> T,
) -> LedgerResult<T> {
    group
        .stores
        .get_mut(store_name)
        .map(|store| remove(&mut store.live))
        .ok_or_else(|| LedgerError::unknown_store(store_name))
}

fn put(
    group: &mut Group,
    store_name: &str,
    append: impl FnOnce(&mut crate::model::StoreLedger),
) -> LedgerResult<()> {
    group
        .stores
        .get_mut(store_name)
        .map(|store| append(&mut store.live))
        .ok_or_else(|| LedgerError::unknown_store(store_name))
}
