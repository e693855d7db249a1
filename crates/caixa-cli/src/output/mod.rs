mod error_text;
mod format;
mod json;
mod ledger_text;
mod mode;

use std::io;

use caixa_core::{LedgerError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &LedgerError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "group create" => ledger_text::render_group_create(&success.data),
        "group list" => ledger_text::render_group_list(&success.data),
        "store add" | "store set-balance" => ledger_text::render_store_write(&success.data),
        "store list" => ledger_text::render_store_list(&success.data),
        "store remove" => ledger_text::render_store_remove(&success.data),
        "import" => ledger_text::render_import(&success.data),
        "transfer create" | "transfer edit" => ledger_text::render_transfer_write(&success.data),
        "transfer delete" => ledger_text::render_transfer_delete(&success.data),
        "entry toggle" => ledger_text::render_entry_toggle(&success.data),
        "entry move" => ledger_text::render_entry_move(&success.data),
        "bulk" => ledger_text::render_bulk(&success.data),
        "day check" => ledger_text::render_day_check(&success.data),
        "day clear" => ledger_text::render_day_clear(&success.data),
        "totals" => ledger_text::render_totals(&success.data),
        "entries" => ledger_text::render_entries(&success.data),
        "rule add" => ledger_text::render_rule_write(&success.data),
        "rule list" => ledger_text::render_rule_list(&success.data),
        "rule remove" => ledger_text::render_rule_remove(&success.data),
        "rule match" => ledger_text::render_rule_match(&success.data),
        "supplier list" => ledger_text::render_supplier_list(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
