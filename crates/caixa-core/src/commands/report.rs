use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{EntriesData, TotalsData};
use crate::ledger::totals::{aggregate_entries, compute_totals};

use super::common::{open_ledger, require_group, require_store};

pub fn totals(
    group_name: &str,
    store_name: &str,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (_, groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;
    let store = require_store(group, group_name, store_name)?;

    success(
        "totals",
        TotalsData {
            group: group_name.to_string(),
            store: store_name.to_string(),
            totals: compute_totals(store),
        },
    )
}

pub fn entries(
    group_name: &str,
    store_name: &str,
    include_history: bool,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (_, groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;
    require_store(group, group_name, store_name)?;

    success(
        "entries",
        EntriesData {
            group: group_name.to_string(),
            store: store_name.to_string(),
            include_history,
            entries: aggregate_entries(group, store_name, include_history),
        },
    )
}
