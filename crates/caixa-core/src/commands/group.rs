use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{GroupCreateData, GroupListData, GroupSummary};
use crate::error::LedgerError;
use crate::model::Group;
use crate::state::save_groups;

use super::common::open_ledger;

pub fn create(name: &str, home_override: Option<&Path>) -> LedgerResult<SuccessEnvelope> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid_argument("Group name must not be empty."));
    }

    let (home, mut groups) = open_ledger(home_override)?;
    if groups.contains_key(trimmed) {
        return Err(LedgerError::group_already_exists(trimmed));
    }
    groups.insert(trimmed.to_string(), Group::default());
    save_groups(&home, &groups)?;

    success(
        "group create",
        GroupCreateData {
            group: trimmed.to_string(),
        },
    )
}

pub fn list(home_override: Option<&Path>) -> LedgerResult<SuccessEnvelope> {
    let (_, groups) = open_ledger(home_override)?;
    let summaries = groups
        .iter()
        .map(|(name, group)| GroupSummary {
            name: name.clone(),
            store_count: group.stores.len(),
        })
        .collect();

    success("group list", GroupListData { groups: summaries })
}
