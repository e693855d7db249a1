use crate::model::{AlertRule, AutoDebit, ScheduledPayment};

/// The matchable facets of one ledger entry, extracted once so the
/// matcher never needs to know which entry kind it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSubject {
    pub text: String,
    pub document: String,
    pub amount: f64,
    pub due_date: String,
}

impl RuleSubject {
    pub fn from_auto_debit(entry: &AutoDebit) -> Self {
        Self {
            text: format!("{} {}", entry.beneficiary, entry.document_id),
            document: entry.document_id.clone(),
            amount: entry.amount,
            due_date: entry.due_date.clone(),
        }
    }

    pub fn from_payment(entry: &ScheduledPayment) -> Self {
        Self {
            text: format!(
                "{} {}",
                entry.payee,
                entry.description.as_deref().unwrap_or_default()
            ),
            document: entry.tax_id.clone().unwrap_or_default(),
            amount: entry.amount,
            due_date: entry.date.clone(),
        }
    }
}

/// Returns the first rule in list order whose set predicates all hold.
/// Unset predicates are skipped; rule validity (at least one predicate
/// set) is enforced where rules are created, not here.
pub fn match_rule<'a>(rules: &'a [AlertRule], subject: &RuleSubject) -> Option<&'a AlertRule> {
    rules.iter().find(|rule| rule_applies(rule, subject))
}

fn rule_applies(rule: &AlertRule, subject: &RuleSubject) -> bool {
    if let Some(term) = &rule.term {
        if !subject
            .text
            .to_lowercase()
            .contains(&term.to_lowercase())
        {
            return false;
        }
    }
    if let Some(document) = &rule.document {
        if !document_matches(document, &subject.document) {
            return false;
        }
    }
    if let Some(amount) = rule.amount {
        if (amount - subject.amount).abs() > 0.01 {
            return false;
        }
    }
    if let Some(due_date) = &rule.due_date {
        if due_date != &subject.due_date {
            return false;
        }
    }
    true
}

/// Document numbers arrive punctuated every which way (CNPJ dots and
/// slashes, barcode spacing), so both sides are reduced to digits.
/// Short digit runs are too ambiguous to compare normalized; at four
/// digits or fewer the raw strings are compared instead.
fn document_matches(rule_document: &str, subject_document: &str) -> bool {
    let rule_digits = digits_only(rule_document);
    if rule_digits.len() > 4 {
        digits_only(subject_document).contains(&rule_digits)
    } else {
        subject_document.contains(rule_document)
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use crate::model::{AlertRule, AutoDebit, EntryStatus};

    use super::{RuleSubject, match_rule};

    fn rule(id: &str) -> AlertRule {
        AlertRule {
            id: id.to_string(),
            term: None,
            document: None,
            amount: None,
            due_date: None,
            message: format!("alerta {id}"),
            recurring: false,
        }
    }

    fn subject() -> RuleSubject {
        RuleSubject {
            text: "CEMIG DISTRIBUICAO 2026/000123".to_string(),
            document: "2026/000123".to_string(),
            amount: 412.37,
            due_date: "2026-09-05".to_string(),
        }
    }

    #[test]
    fn term_matches_case_insensitively_against_the_combined_text() {
        let mut r = rule("r1");
        r.term = Some("cemig".to_string());
        assert!(match_rule(&[r], &subject()).is_some());
    }

    #[test]
    fn first_matching_rule_wins_in_list_order() {
        let mut first = rule("r1");
        first.term = Some("cemig".to_string());
        let mut second = rule("r2");
        second.term = Some("distribuicao".to_string());

        let rules = vec![first, second];
        let matched = match_rule(&rules, &subject()).expect("a rule matches");
        assert_eq!(matched.id, "r1");
    }

    #[test]
    fn all_set_predicates_must_hold_together() {
        let mut r = rule("r1");
        r.term = Some("cemig".to_string());
        r.amount = Some(999.0);
        assert!(match_rule(&[r], &subject()).is_none());
    }

    #[test]
    fn long_document_predicates_compare_digits_only() {
        let mut r = rule("r1");
        r.document = Some("2026-000123".to_string());
        assert!(match_rule(&[r], &subject()).is_some());
    }

    #[test]
    fn short_document_predicates_compare_raw_substrings() {
        let mut r = rule("r1");
        // Four digits or fewer: "0123" normalized would hit "000123",
        // but the raw document does not contain "0-12".
        r.document = Some("0-12".to_string());
        assert!(match_rule(&[r.clone()], &subject()).is_none());

        r.document = Some("0123".to_string());
        assert!(match_rule(&[r], &subject()).is_some());
    }

    #[test]
    fn amount_tolerance_is_one_cent() {
        let mut r = rule("r1");
        r.amount = Some(412.38);
        assert!(match_rule(&[r.clone()], &subject()).is_some());

        r.amount = Some(412.39);
        assert!(match_rule(&[r], &subject()).is_none());
    }

    #[test]
    fn date_predicate_is_exact() {
        let mut r = rule("r1");
        r.due_date = Some("2026-09-05".to_string());
        assert!(match_rule(&[r.clone()], &subject()).is_some());

        r.due_date = Some("2026-09-06".to_string());
        assert!(match_rule(&[r], &subject()).is_none());
    }

    #[test]
    fn empty_rule_list_never_matches() {
        assert!(match_rule(&[], &subject()).is_none());
    }

    #[test]
    fn subject_from_auto_debit_carries_every_facet() {
        let entry = AutoDebit {
            beneficiary: "COPASA".to_string(),
            document_id: "555666".to_string(),
            due_date: "2026-09-10".to_string(),
            amount: 88.5,
            status: EntryStatus::Open,
        };
        let s = RuleSubject::from_auto_debit(&entry);
        assert_eq!(s.text, "COPASA 555666");
        assert_eq!(s.document, "555666");
        assert_eq!(s.due_date, "2026-09-10");
    }
}
