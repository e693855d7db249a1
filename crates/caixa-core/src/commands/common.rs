use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::model::{Group, Groups, Store};
use crate::state::{ensure_ledger_directory, load_groups, resolve_ledger_home};

pub use crate::ledger::ListKind;

pub(crate) fn open_ledger(home_override: Option<&Path>) -> LedgerResult<(PathBuf, Groups)> {
    let home = resolve_ledger_home(home_override)?;
    ensure_ledger_directory(&home)?;
    let groups = load_groups(&home)?;
    Ok((home, groups))
}

pub(crate) fn require_group<'a>(groups: &'a Groups, name: &str) -> LedgerResult<&'a Group> {
    groups
        .get(name)
        .ok_or_else(|| LedgerError::group_not_found(name))
}

pub(crate) fn require_group_mut<'a>(
    groups: &'a mut Groups,
    name: &str,
) -> LedgerResult<&'a mut Group> {
    groups
        .get_mut(name)
        .ok_or_else(|| LedgerError::group_not_found(name))
}

pub(crate) fn require_store<'a>(
    group: &'a Group,
    group_name: &str,
    store_name: &str,
) -> LedgerResult<&'a Store> {
    group
        .stores
        .get(store_name)
        .ok_or_else(|| LedgerError::store_not_found(group_name, store_name))
}

pub(crate) fn require_store_mut<'a>(
    group: &'a mut Group,
    group_name: &str,
    store_name: &str,
) -> LedgerResult<&'a mut Store> {
    group
        .stores
        .get_mut(store_name)
        .ok_or_else(|| LedgerError::store_not_found(group_name, store_name))
}
