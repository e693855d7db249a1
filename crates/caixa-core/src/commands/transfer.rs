use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{TransferDeleteData, TransferWriteData};
use crate::error::LedgerError;
use crate::ledger::transfer::{
    TransferDraft, create_or_update_transfer, delete_transfer, find_transfer,
};
use crate::state::save_groups;

use super::common::{open_ledger, require_group};

pub fn create(
    group_name: &str,
    draft: &TransferDraft,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    write(group_name, draft, None, "transfer create", home_override)
}

pub fn edit(
    group_name: &str,
    id: &str,
    draft: &TransferDraft,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    write(group_name, draft, Some(id), "transfer edit", home_override)
}

pub fn delete(
    group_name: &str,
    id: &str,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;
    if find_transfer(group, id).is_none() {
        return Err(LedgerError::transfer_not_found(group_name, id));
    }

    let next = delete_transfer(group, id);
    groups[group_name] = next;
    save_groups(&home, &groups)?;

    success(
        "transfer delete",
        TransferDeleteData {
            group: group_name.to_string(),
            id: id.to_string(),
        },
    )
}

fn write(
    group_name: &str,
    draft: &TransferDraft,
    previous_id: Option<&str>,
    command: &str,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;
    if let Some(id) = previous_id {
        if find_transfer(group, id).is_none() {
            return Err(LedgerError::transfer_not_found(group_name, id));
        }
    }

    let next = create_or_update_transfer(group, draft, previous_id)?;
    // On the create path the id is fresh, so the written pair is the
    // last outgoing entry at the origin.
    let transfer = match previous_id {
        Some(id) => find_transfer(&next, id).cloned(),
        None => next
            .stores
            .get(&draft.origin)
            .and_then(|store| store.live.transfers_out.last())
            .cloned(),
    }
    .ok_or_else(|| LedgerError::internal_serialization("Transfer vanished after write."))?;

    groups[group_name] = next;
    save_groups(&home, &groups)?;

    success(
        command,
        TransferWriteData {
            group: group_name.to_string(),
            transfer,
        },
    )
}
