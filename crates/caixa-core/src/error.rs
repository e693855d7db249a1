use std::path::Path;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LedgerError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

impl LedgerError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
        }
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::new(
            "invalid_argument",
            message,
            vec!["Run `caixa --help` for usage.".to_string()],
        )
    }

    pub fn group_not_found(group: &str) -> Self {
        Self::new(
            "group_not_found",
            &format!("Group `{group}` was not found."),
            vec![
                "Run `caixa group list` to see existing groups.".to_string(),
                "Create it with `caixa group create <name>`.".to_string(),
            ],
        )
    }

    pub fn group_already_exists(group: &str) -> Self {
        Self::new(
            "group_already_exists",
            &format!("Group `{group}` already exists."),
            vec!["Pick a different group name.".to_string()],
        )
    }

    pub fn store_not_found(group: &str, store: &str) -> Self {
        Self::new(
            "store_not_found",
            &format!("Store `{store}` was not found in group `{group}`."),
            vec![format!(
                "Run `caixa store list {group}` to see existing stores."
            )],
        )
    }

    pub fn store_already_exists(group: &str, store: &str) -> Self {
        Self::new(
            "store_already_exists",
            &format!("Store `{store}` already exists in group `{group}`."),
            vec!["Pick a different store name.".to_string()],
        )
    }

    pub fn unknown_store(store: &str) -> Self {
        Self::new(
            "store_not_found",
            &format!("Store `{store}` was not found."),
            vec!["Run `caixa store list <group>` to see existing stores.".to_string()],
        )
    }

    pub fn invalid_transfer(message: &str) -> Self {
        Self::new(
            "invalid_transfer",
            message,
            vec![
                "A transfer needs two distinct existing stores and a positive amount.".to_string(),
            ],
        )
    }

    pub fn transfer_not_found(group: &str, id: &str) -> Self {
        Self::new(
            "transfer_not_found",
            &format!("Transfer `{id}` was not found in group `{group}`."),
            vec![format!(
                "Run `caixa entries {group} <store>` to list live transfers."
            )],
        )
    }

    pub fn rule_without_predicates() -> Self {
        Self::new(
            "rule_without_predicates",
            "An alert rule needs at least one predicate, otherwise it would match every entry.",
            vec![
                "Set at least one of --term, --document, --amount, --date.".to_string(),
            ],
        )
    }

    pub fn rule_not_found(group: &str, id: &str) -> Self {
        Self::new(
            "rule_not_found",
            &format!("Alert rule `{id}` was not found in group `{group}`."),
            vec![format!("Run `caixa rule list {group}` to see rule ids.")],
        )
    }

    pub fn import_file_unreadable(path: &str, detail: &str) -> Self {
        Self::new(
            "import_file_unreadable",
            &format!("Cannot read import file `{path}`: {detail}"),
            vec!["Check the path and file permissions, then retry.".to_string()],
        )
    }

    pub fn import_file_malformed(path: &str, detail: &str) -> Self {
        Self::new(
            "import_file_malformed",
            &format!("Import file `{path}` is not a valid entry array: {detail}"),
            vec![
                "Provide a JSON file containing one top-level array of entries.".to_string(),
            ],
        )
    }

    pub fn ledger_io(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_io",
            &format!("Cannot access the ledger at `{location}`: {detail}"),
            vec![format!(
                "Grant access to `{location}` or set `CAIXA_HOME` to a writable directory."
            )],
        )
    }

    pub fn ledger_corrupt(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_corrupt",
            &format!("Ledger document at `{location}` is not valid JSON: {detail}"),
            vec![format!(
                "Restore `{location}` from a backup or remove it to start empty."
            )],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
