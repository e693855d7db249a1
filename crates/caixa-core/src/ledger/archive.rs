use crate::error::{LedgerError, LedgerResult};
use crate::model::Group;

/// True when any store in the group still holds a live entry of any
/// kind. Drives the once-a-day clear prompt.
pub fn has_any_live_entries(group: &Group) -> bool {
    group.stores.values().any(|store| !store.live.is_empty())
}

/// Archives every live entry of one store into its history partition.
///
/// Receipts for this store's outgoing transfers are reconciled first:
/// each matching receipt moves from the destination store's live list
/// into the destination's history, so a transfer is never archived on
/// one side while its receipt stays live on the other. A transfer with
/// no matching receipt (prior data corruption) is archived anyway.
pub fn clear_store(group: &Group, store_name: &str) -> LedgerResult<Group> {
    if !group.stores.contains_key(store_name) {
        return Err(LedgerError::unknown_store(store_name));
    }
    let mut next = group.clone();
    archive_one(&mut next, store_name);
    Ok(next)
}

/// Archives every store of the group in one pass, returning a single
/// new Group value. Store key order is untouched (keys are only ever
/// updated in place, never removed and reinserted).
pub fn clear_group(group: &Group) -> Group {
    let mut next = group.clone();
    let store_names: Vec<String> = next.stores.keys().cloned().collect();
    for store_name in &store_names {
        archive_one(&mut next, store_name);
    }
    next
}

fn archive_one(group: &mut Group, store_name: &str) {
    // Step 1: move the receipts paired with this store's outgoing
    // transfers into their destination's history, before anything else
    // is archived. The destination is usually a different store.
    let pairs: Vec<(String, String)> = match group.stores.get(store_name) {
        Some(store) => store
            .live
            .transfers_out
            .iter()
            .map(|transfer| (transfer.destination.clone(), transfer.id.clone()))
            .collect(),
        None => return,
    };
    for (destination_name, transfer_id) in pairs {
        let Some(destination) = group.stores.get_mut(&destination_name) else {
            continue;
        };
        let Some(position) = destination
            .live
            .receipts
            .iter()
            .position(|receipt| receipt.id == transfer_id)
        else {
            // No matching receipt: tolerate and archive the transfer alone.
            continue;
        };
        let receipt = destination.live.receipts.remove(position);
        destination.history.receipts.push(receipt);
    }

    // Steps 2 and 3: append the remaining live entries to history in
    // order, then reset the live arrays. Opening balance, creation date
    // and existing history stay as they are.
    if let Some(store) = group.stores.get_mut(store_name) {
        let mut live = std::mem::take(&mut store.live);
        store.history.absorb(&mut live);
    }
}
