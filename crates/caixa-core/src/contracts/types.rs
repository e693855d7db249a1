use serde::Serialize;

use crate::ledger::totals::{AggregatedEntry, StoreTotals};
use crate::model::{AlertRule, Supplier, Transfer};

#[derive(Debug, Clone, Serialize)]
pub struct GroupCreateData {
    pub group: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub store_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupListData {
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreWriteData {
    pub group: String,
    pub store: String,
    pub opening_balance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreSummary {
    pub name: String,
    pub opening_balance: f64,
    pub created_on: String,
    pub live_entries: usize,
    pub totals: StoreTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreListData {
    pub group: String,
    pub stores: Vec<StoreSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreRemoveData {
    pub group: String,
    pub store: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportData {
    pub group: String,
    pub store: String,
    pub list: String,
    pub imported: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_suppliers: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_recovered: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferWriteData {
    pub group: String,
    pub transfer: Transfer,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferDeleteData {
    pub group: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkData {
    pub group: String,
    pub store: String,
    pub list: String,
    pub operation: String,
    pub selected: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryToggleData {
    pub group: String,
    pub store: String,
    pub list: String,
    pub index: usize,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryMoveData {
    pub group: String,
    pub from_store: String,
    pub to_store: String,
    pub list: String,
    pub index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCheckData {
    pub date: String,
    pub already_checked_today: bool,
    pub has_live_entries: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayClearData {
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    pub cleared_stores: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsData {
    pub group: String,
    pub store: String,
    pub totals: StoreTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntriesData {
    pub group: String,
    pub store: String,
    pub include_history: bool,
    pub entries: Vec<AggregatedEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleWriteData {
    pub group: String,
    pub rule: AlertRule,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleListData {
    pub group: String,
    pub rules: Vec<AlertRule>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleRemoveData {
    pub group: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleMatchRow {
    pub index: usize,
    pub rule_id: String,
    pub message: String,
    pub recurring: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleMatchData {
    pub group: String,
    pub store: String,
    pub list: String,
    pub matches: Vec<RuleMatchRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierListData {
    pub group: String,
    pub suppliers: Vec<Supplier>,
}
