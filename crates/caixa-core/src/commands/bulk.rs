use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::BulkData;
use crate::error::LedgerError;
use crate::ledger::bulk::{
    delete_selected, recategorize_selected, reopen_selected, schedule_selected,
};
use crate::model::PayrollCategory;
use crate::state::save_groups;

use super::common::{ListKind, open_ledger, require_group_mut, require_store_mut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOperation {
    Schedule,
    Reopen,
    Delete,
    Recategorize(PayrollCategory),
}

impl BulkOperation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Reopen => "reopen",
            Self::Delete => "delete",
            Self::Recategorize(_) => "recategorize",
        }
    }
}

/// Applies one bulk operation to a selection of live entries. An empty
/// selection is accepted and changes nothing.
pub fn run(
    group_name: &str,
    store_name: &str,
    list: ListKind,
    operation: BulkOperation,
    selection: &[usize],
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    if matches!(operation, BulkOperation::Recategorize(_)) && list != ListKind::Payroll {
        return Err(LedgerError::invalid_argument(
            "Only payroll entries carry a payroll category.",
        ));
    }

    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;
    let store = require_store_mut(group, group_name, store_name)?;

    let remaining = match list {
        ListKind::Debits => {
            let updated = match operation {
                BulkOperation::Schedule => schedule_selected(&store.live.auto_debits, selection),
                BulkOperation::Reopen => reopen_selected(&store.live.auto_debits, selection),
                BulkOperation::Delete => delete_selected(&store.live.auto_debits, selection),
                BulkOperation::Recategorize(_) => store.live.auto_debits.clone(),
            };
            store.live.auto_debits = updated;
            store.live.auto_debits.len()
        }
        ListKind::Payroll => {
            let updated = match operation {
                BulkOperation::Schedule => schedule_selected(&store.live.payroll, selection),
                BulkOperation::Reopen => reopen_selected(&store.live.payroll, selection),
                BulkOperation::Delete => delete_selected(&store.live.payroll, selection),
                BulkOperation::Recategorize(category) => {
                    recategorize_selected(&store.live.payroll, selection, category)
                }
            };
            store.live.payroll = updated;
            store.live.payroll.len()
        }
        ListKind::Scheduled => {
            let updated = match operation {
                BulkOperation::Schedule => schedule_selected(&store.live.scheduled, selection),
                BulkOperation::Reopen => reopen_selected(&store.live.scheduled, selection),
                BulkOperation::Delete => delete_selected(&store.live.scheduled, selection),
                BulkOperation::Recategorize(_) => store.live.scheduled.clone(),
            };
            store.live.scheduled = updated;
            store.live.scheduled.len()
        }
    };
    save_groups(&home, &groups)?;

    success(
        "bulk",
        BulkData {
            group: group_name.to_string(),
            store: store_name.to_string(),
            list: list.as_str().to_string(),
            operation: operation.as_str().to_string(),
            selected: selection.len(),
            remaining,
        },
    )
}
