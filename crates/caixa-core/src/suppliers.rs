use ulid::Ulid;

use crate::model::{ScheduledPayment, Supplier};

/// Result of merging a batch of imported payment lines against the
/// supplier directory: the updated directory, the enriched lines, and
/// counters for the import summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub suppliers: Vec<Supplier>,
    pub lines: Vec<ScheduledPayment>,
    pub new_suppliers: usize,
    pub pix_recovered: usize,
}

/// Canonical form used for directory identity: diacritics folded,
/// trimmed, upper-cased, internal whitespace collapsed. "João  Silva"
/// and "JOAO SILVA" name the same supplier.
pub fn normalize_name(name: &str) -> String {
    let folded: String = name.chars().map(fold_diacritic).collect();
    folded
        .trim()
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

/// Merges imported payment lines into the directory and enriches the
/// lines with what the directory already knows.
///
/// Identity is the normalized payee name. Unknown payees are added with
/// a fresh id; known payees gain a tax id or pix key only where the
/// directory slot is empty and the incoming value is not. Nothing the
/// directory has recorded is ever replaced by an empty incoming value.
/// A line missing its pix key or tax id takes the directory's value;
/// each pix key filled that way counts as recovered.
pub fn merge_payees(directory: &[Supplier], lines: &[ScheduledPayment]) -> MergeOutcome {
    let mut suppliers = directory.to_vec();
    let mut enriched = Vec::with_capacity(lines.len());
    let mut new_suppliers = 0;
    let mut pix_recovered = 0;

    for line in lines {
        let normalized = normalize_name(&line.payee);
        let position = suppliers
            .iter()
            .position(|supplier| normalize_name(&supplier.name) == normalized);

        let index = match position {
            Some(index) => {
                let supplier = &mut suppliers[index];
                if supplier.tax_id.is_none() {
                    if let Some(tax_id) = non_empty(&line.tax_id) {
                        supplier.tax_id = Some(tax_id);
                    }
                }
                if supplier.pix_key.is_none() {
                    if let Some(pix_key) = non_empty(&line.pix_key) {
                        supplier.pix_key = Some(pix_key);
                    }
                }
                index
            }
            None => {
                suppliers.push(Supplier {
                    id: Ulid::new().to_string(),
                    name: normalized,
                    tax_id: non_empty(&line.tax_id),
                    pix_key: non_empty(&line.pix_key),
                });
                new_suppliers += 1;
                suppliers.len() - 1
            }
        };

        let supplier = &suppliers[index];
        let mut updated = line.clone();
        if non_empty(&updated.tax_id).is_none() {
            updated.tax_id = supplier.tax_id.clone();
        }
        if non_empty(&updated.pix_key).is_none() {
            if supplier.pix_key.is_some() {
                pix_recovered += 1;
            }
            updated.pix_key = supplier.pix_key.clone();
        }
        enriched.push(updated);
    }

    MergeOutcome {
        suppliers,
        lines: enriched,
        new_suppliers,
        pix_recovered,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}
