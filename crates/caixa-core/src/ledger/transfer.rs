use ulid::Ulid;

use crate::error::{LedgerError, LedgerResult};
use crate::model::{EntryStatus, Group, Receipt, Transfer};

/// Operator input for a transfer write. The correlation id is assigned
/// by [`create_or_update_transfer`], never by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferDraft {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub amount: f64,
    pub description: String,
    pub status: EntryStatus,
}

/// Writes one balanced transfer pair into a new Group value: the
/// `Transfer` is appended to the origin's outgoing list and a `Receipt`
/// with the same id to the destination's receipt list.
///
/// On the edit path (`previous_id` set) both sides of the old pair are
/// stripped from *every* store first, because an edit may have moved
/// the transfer between stores. Preconditions are checked before
/// anything is cloned, so a rejected call leaves the input untouched
/// and the caller never observes a dangling receipt.
pub fn create_or_update_transfer(
    group: &Group,
    draft: &TransferDraft,
    previous_id: Option<&str>,
) -> LedgerResult<Group> {
    if draft.origin == draft.destination {
        return Err(LedgerError::invalid_transfer(
            "Origin and destination stores must differ.",
        ));
    }
    if draft.amount <= 0.0 {
        return Err(LedgerError::invalid_transfer(
            "Transfer amount must be positive.",
        ));
    }
    for store_name in [&draft.origin, &draft.destination] {
        if !group.stores.contains_key(store_name) {
            return Err(LedgerError::invalid_transfer(&format!(
                "Store `{store_name}` does not exist."
            )));
        }
    }

    let mut next = group.clone();
    let id = match previous_id {
        Some(previous) => {
            strip_pair(&mut next, previous);
            previous.to_string()
        }
        None => Ulid::new().to_string(),
    };

    let transfer = Transfer {
        id: id.clone(),
        origin: draft.origin.clone(),
        destination: draft.destination.clone(),
        date: draft.date.clone(),
        amount: draft.amount,
        description: draft.description.clone(),
        status: draft.status,
    };

    if let Some(origin) = next.stores.get_mut(&draft.origin) {
        origin.live.transfers_out.push(transfer);
    } else {
        return Err(LedgerError::invalid_transfer(&format!(
            "Store `{}` does not exist.",
            draft.origin
        )));
    }
    if let Some(destination) = next.stores.get_mut(&draft.destination) {
        destination.live.receipts.push(Receipt {
            id,
            amount: draft.amount,
        });
    } else {
        return Err(LedgerError::invalid_transfer(&format!(
            "Store `{}` does not exist.",
            draft.destination
        )));
    }

    Ok(next)
}

/// Removes both sides of the pair with this id from every store.
/// Unknown ids leave the group unchanged.
pub fn delete_transfer(group: &Group, id: &str) -> Group {
    let mut next = group.clone();
    strip_pair(&mut next, id);
    next
}

/// Looks up a live transfer by id, scanning every store's outgoing list.
pub fn find_transfer<'a>(group: &'a Group, id: &str) -> Option<&'a Transfer> {
    group
        .stores
        .values()
        .flat_map(|store| store.live.transfers_out.iter())
        .find(|transfer| transfer.id == id)
}

fn strip_pair(group: &mut Group, id: &str) {
    for store in group.stores.values_mut() {
        store.live.transfers_out.retain(|transfer| transfer.id != id);
        store.live.receipts.retain(|receipt| receipt.id != id);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{EntryStatus, Group, Store};

    use super::{TransferDraft, create_or_update_transfer, delete_transfer, find_transfer};

    fn group_with_stores(names: &[&str]) -> Group {
        let mut group = Group::default();
        for name in names {
            group
                .stores
                .insert((*name).to_string(), Store::new(1000.0, "2026-08-27"));
        }
        group
    }

    fn draft(origin: &str, destination: &str, amount: f64) -> TransferDraft {
        TransferDraft {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date: "2026-08-27".to_string(),
            amount,
            description: "reforco de caixa".to_string(),
            status: EntryStatus::Open,
        }
    }

    #[test]
    fn create_appends_matched_pair() {
        let group = group_with_stores(&["X", "Y"]);
        let next = create_or_update_transfer(&group, &draft("X", "Y", 300.0), None)
            .expect("valid transfer");

        let origin = &next.stores["X"];
        let destination = &next.stores["Y"];
        assert_eq!(origin.live.transfers_out.len(), 1);
        assert_eq!(destination.live.receipts.len(), 1);
        assert_eq!(
            origin.live.transfers_out[0].id,
            destination.live.receipts[0].id
        );
        assert!((destination.live.receipts[0].amount - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_same_origin_and_destination() {
        let group = group_with_stores(&["X"]);
        let result = create_or_update_transfer(&group, &draft("X", "X", 100.0), None);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_transfer");
        }
    }

    #[test]
    fn rejects_non_positive_amount() {
        let group = group_with_stores(&["X", "Y"]);
        assert!(create_or_update_transfer(&group, &draft("X", "Y", 0.0), None).is_err());
        assert!(create_or_update_transfer(&group, &draft("X", "Y", -5.0), None).is_err());
    }

    #[test]
    fn rejects_missing_store_without_mutation() {
        let group = group_with_stores(&["X"]);
        let result = create_or_update_transfer(&group, &draft("X", "Fantasma", 100.0), None);
        assert!(result.is_err());
        assert!(group.stores["X"].live.transfers_out.is_empty());
    }

    #[test]
    fn edit_moves_pair_when_stores_change() {
        let group = group_with_stores(&["X", "Y", "Z"]);
        let created = create_or_update_transfer(&group, &draft("X", "Y", 300.0), None)
            .expect("valid transfer");
        let id = created.stores["X"].live.transfers_out[0].id.clone();

        // Re-point the transfer from X->Y to Z->Y; no side of the old
        // pair may survive anywhere.
        let edited = create_or_update_transfer(&created, &draft("Z", "Y", 250.0), Some(&id))
            .expect("valid edit");

        assert!(edited.stores["X"].live.transfers_out.is_empty());
        assert_eq!(edited.stores["Z"].live.transfers_out.len(), 1);
        assert_eq!(edited.stores["Z"].live.transfers_out[0].id, id);
        assert_eq!(edited.stores["Y"].live.receipts.len(), 1);
        assert!((edited.stores["Y"].live.receipts[0].amount - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn edit_keeps_previous_id() {
        let group = group_with_stores(&["X", "Y"]);
        let created = create_or_update_transfer(&group, &draft("X", "Y", 300.0), None)
            .expect("valid transfer");
        let id = created.stores["X"].live.transfers_out[0].id.clone();

        let edited = create_or_update_transfer(&created, &draft("X", "Y", 400.0), Some(&id))
            .expect("valid edit");
        assert_eq!(edited.stores["X"].live.transfers_out[0].id, id);
        assert_eq!(edited.stores["Y"].live.receipts[0].id, id);
    }

    #[test]
    fn delete_removes_both_sides_everywhere() {
        let group = group_with_stores(&["X", "Y"]);
        let created = create_or_update_transfer(&group, &draft("X", "Y", 300.0), None)
            .expect("valid transfer");
        let id = created.stores["X"].live.transfers_out[0].id.clone();

        let deleted = delete_transfer(&created, &id);
        assert!(deleted.stores["X"].live.transfers_out.is_empty());
        assert!(deleted.stores["Y"].live.receipts.is_empty());
        assert!(find_transfer(&deleted, &id).is_none());
    }

    #[test]
    fn delete_of_unknown_id_changes_nothing() {
        let group = group_with_stores(&["X", "Y"]);
        let created = create_or_update_transfer(&group, &draft("X", "Y", 300.0), None)
            .expect("valid transfer");

        let deleted = delete_transfer(&created, "nao-existe");
        assert_eq!(deleted, created);
    }

    #[test]
    fn exactly_one_pair_exists_after_write() {
        let group = group_with_stores(&["X", "Y", "Z"]);
        let created = create_or_update_transfer(&group, &draft("X", "Y", 300.0), None)
            .expect("valid transfer");
        let id = created.stores["X"].live.transfers_out[0].id.clone();

        let transfer_count: usize = created
            .stores
            .values()
            .map(|store| {
                store
                    .live
                    .transfers_out
                    .iter()
                    .filter(|transfer| transfer.id == id)
                    .count()
            })
            .sum();
        let receipt_count: usize = created
            .stores
            .values()
            .map(|store| {
                store
                    .live
                    .receipts
                    .iter()
                    .filter(|receipt| receipt.id == id)
                    .count()
            })
            .sum();
        assert_eq!(transfer_count, 1);
        assert_eq!(receipt_count, 1);
    }
}
