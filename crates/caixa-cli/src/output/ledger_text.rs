use std::io;

use serde_json::Value;

use super::format::{Align, Column, key_value_rows, money, render_table};

pub fn render_group_create(data: &Value) -> io::Result<String> {
    Ok(format!("Group `{}` created.", field_str(data, "group")))
}

pub fn render_group_list(data: &Value) -> io::Result<String> {
    let groups = field_array(data, "groups");
    if groups.is_empty() {
        return Ok("No groups yet. Create one with `caixa group create <name>`.".to_string());
    }

    let columns = [
        Column {
            name: "Group",
            align: Align::Left,
        },
        Column {
            name: "Stores",
            align: Align::Right,
        },
    ];
    let rows = groups
        .iter()
        .map(|group| {
            vec![
                field_str(group, "name").to_string(),
                field_u64(group, "store_count").to_string(),
            ]
        })
        .collect::<Vec<_>>();

    Ok(render_table(&columns, &rows).join("\n"))
}

pub fn render_store_write(data: &Value) -> io::Result<String> {
    Ok(format!(
        "Store `{}` in group `{}` now opens at {}.",
        field_str(data, "store"),
        field_str(data, "group"),
        money(field_f64(data, "opening_balance")),
    ))
}

pub fn render_store_list(data: &Value) -> io::Result<String> {
    let stores = field_array(data, "stores");
    if stores.is_empty() {
        return Ok(format!(
            "Group `{}` has no stores yet.",
            field_str(data, "group")
        ));
    }

    let columns = [
        Column {
            name: "Store",
            align: Align::Left,
        },
        Column {
            name: "Opening",
            align: Align::Right,
        },
        Column {
            name: "Live",
            align: Align::Right,
        },
        Column {
            name: "Balance",
            align: Align::Right,
        },
    ];
    let rows = stores
        .iter()
        .map(|store| {
            let balance = store
                .get("totals")
                .map(|totals| field_f64(totals, "balance"))
                .unwrap_or_default();
            vec![
                field_str(store, "name").to_string(),
                money(field_f64(store, "opening_balance")),
                field_u64(store, "live_entries").to_string(),
                money(balance),
            ]
        })
        .collect::<Vec<_>>();

    Ok(render_table(&columns, &rows).join("\n"))
}

pub fn render_store_remove(data: &Value) -> io::Result<String> {
    Ok(format!(
        "Store `{}` removed from group `{}`.",
        field_str(data, "store"),
        field_str(data, "group"),
    ))
}

pub fn render_import(data: &Value) -> io::Result<String> {
    let mut lines = vec![format!(
        "Imported {} {} entries into `{}`.",
        field_u64(data, "imported"),
        field_str(data, "list"),
        field_str(data, "store"),
    )];
    if let Some(new_suppliers) = data.get("new_suppliers").and_then(Value::as_u64) {
        if new_suppliers > 0 {
            lines.push(format!("{new_suppliers} new payees registered."));
        }
    }
    if let Some(pix_recovered) = data.get("pix_recovered").and_then(Value::as_u64) {
        if pix_recovered > 0 {
            lines.push(format!(
                "{pix_recovered} pix keys filled in from the directory."
            ));
        }
    }
    Ok(lines.join("\n"))
}

pub fn render_transfer_write(data: &Value) -> io::Result<String> {
    let transfer = data.get("transfer").cloned().unwrap_or(Value::Null);
    let rows = key_value_rows(
        &[
            ("Id:", field_str(&transfer, "id").to_string()),
            ("From:", field_str(&transfer, "origin").to_string()),
            ("To:", field_str(&transfer, "destination").to_string()),
            ("Amount:", money(field_f64(&transfer, "amount"))),
            ("Date:", field_str(&transfer, "date").to_string()),
        ],
        2,
    );
    Ok(format!("Transfer recorded.\n{}", rows.join("\n")))
}

pub fn render_transfer_delete(data: &Value) -> io::Result<String> {
    Ok(format!(
        "Transfer `{}` and its receipt removed.",
        field_str(data, "id")
    ))
}

pub fn render_entry_toggle(data: &Value) -> io::Result<String> {
    Ok(format!(
        "Entry {} in the {} list of `{}` is now {}.",
        field_u64(data, "index"),
        field_str(data, "list"),
        field_str(data, "store"),
        field_str(data, "status"),
    ))
}

pub fn render_entry_move(data: &Value) -> io::Result<String> {
    Ok(format!(
        "Entry {} moved from `{}` to `{}` ({} list).",
        field_u64(data, "index"),
        field_str(data, "from_store"),
        field_str(data, "to_store"),
        field_str(data, "list"),
    ))
}

pub fn render_bulk(data: &Value) -> io::Result<String> {
    Ok(format!(
        "Applied `{}` to {} selected {} entries; {} remain.",
        field_str(data, "operation"),
        field_u64(data, "selected"),
        field_str(data, "list"),
        field_u64(data, "remaining"),
    ))
}

pub fn render_day_check(data: &Value) -> io::Result<String> {
    let has_live = field_bool(data, "has_live_entries");
    let already = field_bool(data, "already_checked_today");

    let mut lines = vec![format!("Daily check for {}.", field_str(data, "date"))];
    if already {
        lines.push("Already checked today.".to_string());
    }
    if has_live {
        lines.push(
            "There are live entries pending. Archive them with `caixa day clear <group>`."
                .to_string(),
        );
    } else {
        lines.push("No live entries pending.".to_string());
    }
    Ok(lines.join("\n"))
}

pub fn render_day_clear(data: &Value) -> io::Result<String> {
    let scope = match data.get("store").and_then(Value::as_str) {
        Some(store) => format!("store `{store}`"),
        None => format!("{} stores", field_u64(data, "cleared_stores")),
    };
    Ok(format!(
        "Cleared {} in group `{}`; live entries moved to history.",
        scope,
        field_str(data, "group"),
    ))
}

pub fn render_totals(data: &Value) -> io::Result<String> {
    let totals = data.get("totals").cloned().unwrap_or(Value::Null);
    let rows = key_value_rows(
        &[
            ("Expenses:", money(field_f64(&totals, "expenses"))),
            ("Receipts:", money(field_f64(&totals, "receipts"))),
            ("Balance:", money(field_f64(&totals, "balance"))),
        ],
        2,
    );
    Ok(format!(
        "Totals for `{}` / `{}`:\n{}",
        field_str(data, "group"),
        field_str(data, "store"),
        rows.join("\n"),
    ))
}

pub fn render_entries(data: &Value) -> io::Result<String> {
    let entries = field_array(data, "entries");
    if entries.is_empty() {
        return Ok(format!(
            "Store `{}` has no entries to show.",
            field_str(data, "store")
        ));
    }

    let columns = [
        Column {
            name: "#",
            align: Align::Right,
        },
        Column {
            name: "Kind",
            align: Align::Left,
        },
        Column {
            name: "Who",
            align: Align::Left,
        },
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
    ];
    let rows = entries
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let entry = row.get("entry").cloned().unwrap_or(Value::Null);
            let archived = field_bool(row, "archived");
            let status = if archived {
                "archived".to_string()
            } else {
                field_str(&entry, "status").to_string()
            };
            vec![
                index.to_string(),
                field_str(row, "kind").to_string(),
                entry_counterparty(&entry),
                entry_date(&entry),
                money(field_f64(&entry, "amount")),
                status,
            ]
        })
        .collect::<Vec<_>>();

    Ok(render_table(&columns, &rows).join("\n"))
}

pub fn render_rule_write(data: &Value) -> io::Result<String> {
    let rule = data.get("rule").cloned().unwrap_or(Value::Null);
    Ok(format!(
        "Rule `{}` added to group `{}`.",
        field_str(&rule, "id"),
        field_str(data, "group"),
    ))
}

pub fn render_rule_list(data: &Value) -> io::Result<String> {
    let rules = field_array(data, "rules");
    if rules.is_empty() {
        return Ok(format!(
            "Group `{}` has no alert rules.",
            field_str(data, "group")
        ));
    }

    let mut blocks = Vec::new();
    for rule in &rules {
        let mut facts = vec![("Message:", field_str(rule, "message").to_string())];
        if let Some(term) = rule.get("term").and_then(Value::as_str) {
            facts.push(("Term:", term.to_string()));
        }
        if let Some(document) = rule.get("document").and_then(Value::as_str) {
            facts.push(("Document:", document.to_string()));
        }
        if let Some(amount) = rule.get("amount").and_then(Value::as_f64) {
            facts.push(("Amount:", money(amount)));
        }
        if let Some(due_date) = rule.get("due_date").and_then(Value::as_str) {
            facts.push(("Date:", due_date.to_string()));
        }
        if field_bool(rule, "recurring") {
            facts.push(("Recurring:", "yes".to_string()));
        }

        let mut block = vec![format!("Rule {}:", field_str(rule, "id"))];
        block.extend(key_value_rows(&facts, 2));
        blocks.push(block.join("\n"));
    }
    Ok(blocks.join("\n\n"))
}

pub fn render_rule_remove(data: &Value) -> io::Result<String> {
    Ok(format!("Rule `{}` removed.", field_str(data, "id")))
}

pub fn render_rule_match(data: &Value) -> io::Result<String> {
    let matches = field_array(data, "matches");
    if matches.is_empty() {
        return Ok(format!(
            "No rule matches in `{}` {} entries.",
            field_str(data, "store"),
            field_str(data, "list"),
        ));
    }

    let columns = [
        Column {
            name: "#",
            align: Align::Right,
        },
        Column {
            name: "Alert",
            align: Align::Left,
        },
        Column {
            name: "Recurring",
            align: Align::Left,
        },
    ];
    let rows = matches
        .iter()
        .map(|row| {
            vec![
                field_u64(row, "index").to_string(),
                field_str(row, "message").to_string(),
                if field_bool(row, "recurring") {
                    "yes".to_string()
                } else {
                    "no".to_string()
                },
            ]
        })
        .collect::<Vec<_>>();

    Ok(render_table(&columns, &rows).join("\n"))
}

pub fn render_supplier_list(data: &Value) -> io::Result<String> {
    let suppliers = field_array(data, "suppliers");
    if suppliers.is_empty() {
        return Ok(format!(
            "Group `{}` has no registered payees.",
            field_str(data, "group")
        ));
    }

    let columns = [
        Column {
            name: "Name",
            align: Align::Left,
        },
        Column {
            name: "Tax id",
            align: Align::Left,
        },
        Column {
            name: "Pix key",
            align: Align::Left,
        },
    ];
    let rows = suppliers
        .iter()
        .map(|supplier| {
            vec![
                field_str(supplier, "name").to_string(),
                supplier
                    .get("tax_id")
                    .and_then(Value::as_str)
                    .unwrap_or("-")
                    .to_string(),
                supplier
                    .get("pix_key")
                    .and_then(Value::as_str)
                    .unwrap_or("-")
                    .to_string(),
            ]
        })
        .collect::<Vec<_>>();

    Ok(render_table(&columns, &rows).join("\n"))
}

fn entry_counterparty(entry: &Value) -> String {
    for key in ["beneficiary", "payee", "destination"] {
        if let Some(value) = entry.get(key).and_then(Value::as_str) {
            return value.to_string();
        }
    }
    // Receipts only carry the correlation id.
    field_str(entry, "id").to_string()
}

fn entry_date(entry: &Value) -> String {
    for key in ["due_date", "date"] {
        if let Some(value) = entry.get(key).and_then(Value::as_str) {
            return value.to_string();
        }
    }
    "-".to_string()
}

fn field_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn field_f64(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or_default()
}

fn field_u64(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or_default()
}

fn field_bool(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn field_array(value: &Value, key: &str) -> Vec<Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
