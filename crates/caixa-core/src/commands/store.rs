use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{StoreListData, StoreRemoveData, StoreSummary, StoreWriteData};
use crate::error::LedgerError;
use crate::ledger::totals::compute_totals;
use crate::model::Store;
use crate::state::save_groups;

use super::common::{open_ledger, require_group, require_group_mut, require_store_mut};

pub fn add(
    group_name: &str,
    store_name: &str,
    opening_balance: f64,
    created_on: &str,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let trimmed = store_name.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid_argument("Store name must not be empty."));
    }

    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;
    if group.stores.contains_key(trimmed) {
        return Err(LedgerError::store_already_exists(group_name, trimmed));
    }
    group
        .stores
        .insert(trimmed.to_string(), Store::new(opening_balance, created_on));
    save_groups(&home, &groups)?;

    success(
        "store add",
        StoreWriteData {
            group: group_name.to_string(),
            store: trimmed.to_string(),
            opening_balance,
        },
    )
}

pub fn list(group_name: &str, home_override: Option<&Path>) -> LedgerResult<SuccessEnvelope> {
    let (_, groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;

    let stores = group
        .stores
        .iter()
        .map(|(name, store)| StoreSummary {
            name: name.clone(),
            opening_balance: store.opening_balance,
            created_on: store.created_on.clone(),
            live_entries: store.live.len(),
            totals: compute_totals(store),
        })
        .collect();

    success(
        "store list",
        StoreListData {
            group: group_name.to_string(),
            stores,
        },
    )
}

pub fn remove(
    group_name: &str,
    store_name: &str,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;

    // shift_remove keeps the remaining keys in their insertion order.
    if group.stores.shift_remove(store_name).is_none() {
        return Err(LedgerError::store_not_found(group_name, store_name));
    }
    save_groups(&home, &groups)?;

    success(
        "store remove",
        StoreRemoveData {
            group: group_name.to_string(),
            store: store_name.to_string(),
        },
    )
}

pub fn set_balance(
    group_name: &str,
    store_name: &str,
    opening_balance: f64,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;
    let store = require_store_mut(group, group_name, store_name)?;
    store.opening_balance = opening_balance;
    save_groups(&home, &groups)?;

    success(
        "store set-balance",
        StoreWriteData {
            group: group_name.to_string(),
            store: store_name.to_string(),
            opening_balance,
        },
    )
}
