use std::fs;
use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ImportData;
use crate::error::LedgerError;
use crate::model::{AutoDebit, ScheduledPayment};
use crate::state::save_groups;
use crate::suppliers::merge_payees;

use super::common::{ListKind, open_ledger, require_group_mut, require_store_mut};

/// Appends the entries of a normalized JSON array file to one of a
/// store's live lists. Whatever produced the file (spreadsheet export,
/// bank listing, another tool) is outside this boundary; here the file
/// is just an array of already-shaped entries.
///
/// A payroll import additionally runs the batch through the supplier
/// directory, so known payees back-fill missing pix keys and tax ids
/// and unknown payees are registered.
pub fn run(
    group_name: &str,
    store_name: &str,
    list: ListKind,
    file: &Path,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let raw = fs::read_to_string(file)
        .map_err(|error| {
            LedgerError::import_file_unreadable(&file.display().to_string(), &error.to_string())
        })?;

    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;
    require_store_mut(group, group_name, store_name)?;

    let mut new_suppliers = None;
    let mut pix_recovered = None;
    let imported = match list {
        ListKind::Debits => {
            let entries: Vec<AutoDebit> = parse_array(file, &raw)?;
            let count = entries.len();
            if let Some(store) = group.stores.get_mut(store_name) {
                store.live.auto_debits.extend(entries);
            }
            count
        }
        ListKind::Payroll => {
            let entries: Vec<ScheduledPayment> = parse_array(file, &raw)?;
            let outcome = merge_payees(&group.suppliers, &entries);
            let count = outcome.lines.len();
            group.suppliers = outcome.suppliers;
            new_suppliers = Some(outcome.new_suppliers);
            pix_recovered = Some(outcome.pix_recovered);
            if let Some(store) = group.stores.get_mut(store_name) {
                store.live.payroll.extend(outcome.lines);
            }
            count
        }
        ListKind::Scheduled => {
            let entries: Vec<ScheduledPayment> = parse_array(file, &raw)?;
            let count = entries.len();
            if let Some(store) = group.stores.get_mut(store_name) {
                store.live.scheduled.extend(entries);
            }
            count
        }
    };
    save_groups(&home, &groups)?;

    success(
        "import",
        ImportData {
            group: group_name.to_string(),
            store: store_name.to_string(),
            list: list.as_str().to_string(),
            imported,
            new_suppliers,
            pix_recovered,
        },
    )
}

fn parse_array<T>(file: &Path, raw: &str) -> LedgerResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(raw).map_err(|error| {
        LedgerError::import_file_malformed(&file.display().to_string(), &error.to_string())
    })
}
