use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The whole persisted document: every group the operator manages,
/// keyed by group name. Insertion order is significant and survives
/// the JSON round trip.
pub type Groups = IndexMap<String, Group>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Open,
    Scheduled,
}

impl EntryStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Scheduled => "scheduled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Pix,
    Boleto,
    Recibo,
    NfE,
    Cheque,
    Guia,
    Outros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollCategory {
    Salario,
    Adiantamento,
    Gratificacao,
    DecimoTerceiro,
}

impl PayrollCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salario => "salario",
            Self::Adiantamento => "adiantamento",
            Self::Gratificacao => "gratificacao",
            Self::DecimoTerceiro => "decimo_terceiro",
        }
    }
}

/// An auto-debit bill (DDA) imported from a bank listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoDebit {
    pub beneficiary: String,
    pub document_id: String,
    pub due_date: String,
    pub amount: f64,
    #[serde(default)]
    pub status: EntryStatus,
}

/// A scheduled payment. Payroll lines share this shape and carry a
/// `payroll_category`; they live in the store's `payroll` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payee: String,
    pub method: PaymentMethod,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payroll_category: Option<PayrollCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_ref: Option<String>,
}

/// The debit side of an inter-store transfer. The matching credit is a
/// [`Receipt`] with the same `id` in the destination store; correlation
/// is by plain id value so the pairing survives serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub amount: f64,
    pub description: String,
    #[serde(default)]
    pub status: EntryStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub amount: f64,
}

/// The five entry arrays of one period. Used both for a store's live
/// entries and, append-only, for its archived history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreLedger {
    #[serde(default)]
    pub auto_debits: Vec<AutoDebit>,
    #[serde(default)]
    pub payroll: Vec<ScheduledPayment>,
    #[serde(default)]
    pub scheduled: Vec<ScheduledPayment>,
    #[serde(default)]
    pub transfers_out: Vec<Transfer>,
    #[serde(default)]
    pub receipts: Vec<Receipt>,
}

impl StoreLedger {
    pub fn len(&self) -> usize {
        self.auto_debits.len()
            + self.payroll.len()
            + self.scheduled.len()
            + self.transfers_out.len()
            + self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.auto_debits.is_empty()
            && self.payroll.is_empty()
            && self.scheduled.is_empty()
            && self.transfers_out.is_empty()
            && self.receipts.is_empty()
    }

    /// Moves every entry of `other` onto the end of this ledger,
    /// preserving order. `other` is left empty.
    pub fn absorb(&mut self, other: &mut StoreLedger) {
        self.auto_debits.append(&mut other.auto_debits);
        self.payroll.append(&mut other.payroll);
        self.scheduled.append(&mut other.scheduled);
        self.transfers_out.append(&mut other.transfers_out);
        self.receipts.append(&mut other.receipts);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub opening_balance: f64,
    #[serde(flatten)]
    pub live: StoreLedger,
    pub created_on: String,
    #[serde(default)]
    pub history: StoreLedger,
}

impl Store {
    pub fn new(opening_balance: f64, created_on: &str) -> Self {
        Self {
            opening_balance,
            live: StoreLedger::default(),
            created_on: created_on.to_string(),
            history: StoreLedger::default(),
        }
    }
}

/// A payee directory entry, deduplicated by normalized name. Pix keys
/// discovered during imports are persisted here so later imports can
/// back-fill them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
}

/// An operator-defined payment alert. Every predicate that is set must
/// hold for the rule to match; unset predicates are ignored. A rule
/// with no predicate at all is rejected at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub message: String,
    #[serde(default)]
    pub recurring: bool,
}

impl AlertRule {
    pub fn has_predicate(&self) -> bool {
        self.term.is_some()
            || self.document.is_some()
            || self.amount.is_some()
            || self.due_date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub stores: IndexMap<String, Store>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub alert_rules: Vec<AlertRule>,
}

#[cfg(test)]
mod tests {
    use super::{AutoDebit, EntryStatus, Group, Store};

    #[test]
    fn entry_status_defaults_to_open() {
        let parsed: Result<AutoDebit, _> = serde_json::from_str(
            r#"{"beneficiary":"CEMIG","document_id":"123","due_date":"2026-09-01","amount":200.0}"#,
        );
        assert!(parsed.is_ok());
        if let Ok(debit) = parsed {
            assert_eq!(debit.status, EntryStatus::Open);
        }
    }

    #[test]
    fn entry_status_serializes_lowercase() {
        let rendered = serde_json::to_value(EntryStatus::Scheduled);
        assert!(rendered.is_ok());
        if let Ok(value) = rendered {
            assert_eq!(value, serde_json::json!("scheduled"));
        }
    }

    #[test]
    fn store_map_round_trip_preserves_insertion_order() {
        let mut group = Group::default();
        for name in ["Zebra", "Alfa", "Meio"] {
            group.stores.insert(name.to_string(), Store::new(0.0, "2026-08-01"));
        }

        let encoded = serde_json::to_string(&group).expect("group serializes");
        let decoded: Group = serde_json::from_str(&encoded).expect("group deserializes");
        let keys: Vec<&String> = decoded.stores.keys().collect();
        assert_eq!(keys, ["Zebra", "Alfa", "Meio"]);
    }

    #[test]
    fn store_flattens_live_ledger_fields() {
        let store = Store::new(1000.0, "2026-08-27");
        let value = serde_json::to_value(&store).expect("store serializes");
        assert!(value.get("auto_debits").is_some());
        assert!(value.get("live").is_none());
    }
}
