use std::path::Path;

use ulid::Ulid;

use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{RuleListData, RuleMatchData, RuleMatchRow, RuleRemoveData, RuleWriteData};
use crate::error::LedgerError;
use crate::model::AlertRule;
use crate::rules::{RuleSubject, match_rule};
use crate::state::save_groups;

use super::common::{ListKind, open_ledger, require_group, require_group_mut, require_store};

#[derive(Debug, Clone, Default)]
pub struct RuleDraft {
    pub term: Option<String>,
    pub document: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<String>,
    pub message: String,
    pub recurring: bool,
}

pub fn add(
    group_name: &str,
    draft: &RuleDraft,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let rule = AlertRule {
        id: Ulid::new().to_string(),
        term: draft.term.clone(),
        document: draft.document.clone(),
        amount: draft.amount,
        due_date: draft.due_date.clone(),
        message: draft.message.clone(),
        recurring: draft.recurring,
    };
    if !rule.has_predicate() {
        return Err(LedgerError::rule_without_predicates());
    }

    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;
    group.alert_rules.push(rule.clone());
    save_groups(&home, &groups)?;

    success(
        "rule add",
        RuleWriteData {
            group: group_name.to_string(),
            rule,
        },
    )
}

pub fn list(group_name: &str, home_override: Option<&Path>) -> LedgerResult<SuccessEnvelope> {
    let (_, groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;

    success(
        "rule list",
        RuleListData {
            group: group_name.to_string(),
            rules: group.alert_rules.clone(),
        },
    )
}

pub fn remove(
    group_name: &str,
    id: &str,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (home, mut groups) = open_ledger(home_override)?;
    let group = require_group_mut(&mut groups, group_name)?;

    let before = group.alert_rules.len();
    group.alert_rules.retain(|rule| rule.id != id);
    if group.alert_rules.len() == before {
        return Err(LedgerError::rule_not_found(group_name, id));
    }
    save_groups(&home, &groups)?;

    success(
        "rule remove",
        RuleRemoveData {
            group: group_name.to_string(),
            id: id.to_string(),
        },
    )
}

/// Runs every entry of one live list through the rule set and reports
/// which entries matched which rule. Read-only.
pub fn check(
    group_name: &str,
    store_name: &str,
    list: ListKind,
    home_override: Option<&Path>,
) -> LedgerResult<SuccessEnvelope> {
    let (_, groups) = open_ledger(home_override)?;
    let group = require_group(&groups, group_name)?;
    let store = require_store(group, group_name, store_name)?;

    let subjects: Vec<RuleSubject> = match list {
        ListKind::Debits => store
            .live
            .auto_debits
            .iter()
            .map(RuleSubject::from_auto_debit)
            .collect(),
        ListKind::Payroll => store
            .live
            .payroll
            .iter()
            .map(RuleSubject::from_payment)
            .collect(),
        ListKind::Scheduled => store
            .live
            .scheduled
            .iter()
            .map(RuleSubject::from_payment)
            .collect(),
    };

    let matches = subjects
        .iter()
        .enumerate()
        .filter_map(|(index, subject)| {
            match_rule(&group.alert_rules, subject).map(|rule| RuleMatchRow {
                index,
                rule_id: rule.id.clone(),
                message: rule.message.clone(),
                recurring: rule.recurring,
            })
        })
        .collect();

    success(
        "rule match",
        RuleMatchData {
            group: group_name.to_string(),
            store: store_name.to_string(),
            list: list.as_str().to_string(),
            matches,
        },
    )
}
