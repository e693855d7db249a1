use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{DayCheckData, DayClearData};
use crate::ledger::archive::{clear_group, clear_store, has_any_live_entries};
use crate::state::{DailyMarker, load_daily_marker, save_daily_marker, save_groups};

use super::common::{open_ledger, require_group};

/// The once-a-day prompt: reports whether the group still holds live
/// entries from a previous day and records today as checked. The marker
/// lives next to the ledger document, never inside it, so it stays
/// per-machine.
pub fn check(
    group_name: &str,
    today: &str,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;

    let marker = load_daily_marker(&home)?;
    let already_checked_today = marker.last_checked == today;
    if !already_checked_today {
        save_daily_marker(
            &home,
            &DailyMarker {
                last_checked: today.to_string(),
            },
        )?;
    }

    success(
        "day check",
        DayCheckData {
            date: today.to_string(),
            already_checked_today,
            has_live_entries: has_any_live_entries(group),
        },
    )
}

/// Archives live entries into history: one store, or every store of the
/// group in a single pass.
pub fn clear(
    group_name: &str,
    store_name: Option<&str>,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;

    let (next, cleared_stores) = match store_name {
        Some(store) => (clear_store(group, store)?, 1),
        None => {
            let count = group.stores.len();
            (clear_group(group), count)
        }
    };
    groups[group_name] = next;
    save_groups(&home, &groups)?;

    success(
        "day clear",
        DayClearData {
            group: group_name.to_string(),
            store: store_name.map(str::to_string),
            cleared_stores,
        },
    )
}
