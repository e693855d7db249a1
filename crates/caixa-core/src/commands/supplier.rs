use std::path::Path;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SupplierListData;

use super::common::{open_ledger, require_group};

pub fn list(group_name: &str, home_override: Option<&Path>) -> LedgerResult<SuccessEnvelope> {
    let (_, groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;

    success(
        "supplier list",
        SupplierListData {
            group: group_name.to_string(),
            suppliers: group.suppliers.clone(),
        },
    )
}
