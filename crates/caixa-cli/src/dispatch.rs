use caixa_core::commands::{
    self, ListKind, bulk::BulkOperation, entry::EntryList, rule::RuleDraft,
};
use caixa_core::ledger::transfer::TransferDraft;
use caixa_core::model::{EntryStatus, PayrollCategory};
use caixa_core::{LedgerError, LedgerResult, SuccessEnvelope};
use chrono::Local;

use crate::cli::{
    BulkActionArg, CategoryArg, Cli, Commands, DayCommand, EntryCommand, EntryListArg,
    GroupCommand, IsoDate, ListArg, RuleCommand, StoreCommand, SupplierCommand, TransferCommand,
};

pub fn dispatch(cli: &Cli) -> LedgerResult<SuccessEnvelope> {
    let home = cli.home.as_deref();
    match &cli.command {
        Commands::Group { command } => match command {
            GroupCommand::Create { name, .. } => commands::group::create(name, home),
            GroupCommand::List { .. } => commands::group::list(home),
        },
        Commands::Store { command } => match command {
            StoreCommand::Add {
                group,
                name,
                balance,
                ..
            } => commands::store::add(group, name, *balance, &today(), home),
            StoreCommand::List { group, .. } => commands::store::list(group, home),
            StoreCommand::Remove { group, name, .. } => commands::store::remove(group, name, home),
            StoreCommand::SetBalance {
                group,
                name,
                balance,
                ..
            } => commands::store::set_balance(group, name, *balance, home),
        },
        Commands::Import {
            group,
            store,
            list,
            file,
            ..
        } => commands::import::run(group, store, list_kind(*list), file, home),
        Commands::Transfer { command } => match command {
            TransferCommand::Create {
                group,
                from,
                to,
                amount,
                date,
                description,
                ..
            } => commands::transfer::create(
                group,
                &transfer_draft(from, to, *amount, date, description),
                home,
            ),
            TransferCommand::Edit {
                group,
                id,
                from,
                to,
                amount,
                date,
                description,
                ..
            } => commands::transfer::edit(
                group,
                id,
                &transfer_draft(from, to, *amount, date, description),
                home,
            ),
            TransferCommand::Delete { group, id, .. } => {
                commands::transfer::delete(group, id, home)
            }
        },
        Commands::Entry { command } => match command {
            EntryCommand::Toggle {
                group,
                store,
                list,
                index,
                ..
            } => commands::entry::toggle(group, store, entry_list(*list), *index, home),
            EntryCommand::Move {
                group,
                from,
                to,
                list,
                index,
                ..
            } => commands::entry::relocate(group, from, to, list_kind(*list), *index, home),
        },
        Commands::Bulk {
            group,
            store,
            list,
            action,
            select,
            category,
            ..
        } => {
            let operation = bulk_operation(*action, *category)?;
            commands::bulk::run(group, store, list_kind(*list), operation, &select.0, home)
        }
        Commands::Day { command } => match command {
            DayCommand::Check { group, .. } => commands::day::check(group, &today(), home),
            DayCommand::Clear { group, store, .. } => {
                commands::day::clear(group, store.as_deref(), home)
            }
        },
        Commands::Totals { group, store, .. } => commands::report::totals(group, store, home),
        Commands::Entries {
            group,
            store,
            history,
            ..
        } => commands::report::entries(group, store, *history, home),
        Commands::Rule { command } => match command {
            RuleCommand::Add {
                group,
                term,
                document,
                amount,
                date,
                message,
                recurring,
                ..
            } => commands::rule::add(
                group,
                &RuleDraft {
                    term: term.clone(),
                    document: document.clone(),
                    amount: *amount,
                    due_date: date.as_ref().map(|value| value.as_str().to_string()),
                    message: message.clone(),
                    recurring: *recurring,
                },
                home,
            ),
            RuleCommand::List { group, .. } => commands::rule::list(group, home),
            RuleCommand::Remove { group, id, .. } => commands::rule::remove(group, id, home),
            RuleCommand::Match {
                group, store, list, ..
            } => commands::rule::check(group, store, list_kind(*list), home),
        },
        Commands::Supplier { command } => match command {
            SupplierCommand::List { group, .. } => commands::supplier::list(group, home),
        },
    }
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn list_kind(list: ListArg) -> ListKind {
    match list {
        ListArg::Debits => ListKind::Debits,
        ListArg::Payroll => ListKind::Payroll,
        ListArg::Scheduled => ListKind::Scheduled,
    }
}

fn entry_list(list: EntryListArg) -> EntryList {
    match list {
        EntryListArg::Debits => EntryList::Debits,
        EntryListArg::Payroll => EntryList::Payroll,
        EntryListArg::Scheduled => EntryList::Scheduled,
        EntryListArg::Transfers => EntryList::Transfers,
    }
}

fn transfer_draft(
    from: &str,
    to: &str,
    amount: f64,
    date: &IsoDate,
    description: &str,
) -> TransferDraft {
    TransferDraft {
        origin: from.to_string(),
        destination: to.to_string(),
        date: date.as_str().to_string(),
        amount,
        description: description.to_string(),
        status: EntryStatus::Open,
    }
}

fn bulk_operation(
    action: BulkActionArg,
    category: Option<CategoryArg>,
) -> LedgerResult<BulkOperation> {
    match action {
        BulkActionArg::Schedule => Ok(BulkOperation::Schedule),
        BulkActionArg::Reopen => Ok(BulkOperation::Reopen),
        BulkActionArg::Delete => Ok(BulkOperation::Delete),
        BulkActionArg::Recategorize => match category {
            Some(category) => Ok(BulkOperation::Recategorize(payroll_category(category))),
            None => Err(LedgerError::invalid_argument(
                "`--action recategorize` needs `--category`.",
            )),
        },
    }
}

fn payroll_category(category: CategoryArg) -> PayrollCategory {
    match category {
        CategoryArg::Salario => PayrollCategory::Salario,
        CategoryArg::Adiantamento => PayrollCategory::Adiantamento,
        CategoryArg::Gratificacao => PayrollCategory::Gratificacao,
        CategoryArg::DecimoTerceiro => PayrollCategory::DecimoTerceiro,
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn group_flow_dispatches_against_a_temp_home() {
        let home = tempfile::tempdir().expect("temp home");
        let home_arg = home.path().display().to_string();

        let create = parse_from(["caixa", "group", "create", "Matriz", "--home", &home_arg]);
        assert!(create.is_ok());
        if let Ok(cli) = create {
            let response = dispatch(&cli);
            assert!(response.is_ok());
            if let Ok(success) = response {
                assert_eq!(success.command, "group create");
            }
        }

        let list = parse_from(["caixa", "group", "list", "--home", &home_arg]);
        assert!(list.is_ok());
        if let Ok(cli) = list {
            let response = dispatch(&cli);
            assert!(response.is_ok());
            if let Ok(success) = response {
                assert_eq!(success.command, "group list");
            }
        }
    }

    #[test]
    fn unknown_group_is_an_operator_error() {
        let home = tempfile::tempdir().expect("temp home");
        let home_arg = home.path().display().to_string();

        let parsed = parse_from(["caixa", "store", "list", "Fantasma", "--home", &home_arg]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "group_not_found");
            }
        }
    }

    #[test]
    fn entry_toggle_on_an_empty_list_is_an_operator_error() {
        let home = tempfile::tempdir().expect("temp home");
        let home_arg = home.path().display().to_string();

        for setup in [
            vec!["caixa", "group", "create", "Matriz", "--home", &home_arg],
            vec![
                "caixa", "store", "add", "Matriz", "Centro", "--home", &home_arg,
            ],
        ] {
            let parsed = parse_from(setup);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert!(dispatch(&cli).is_ok());
            }
        }

        let parsed = parse_from([
            "caixa", "entry", "toggle", "Matriz", "Centro", "--list", "debits", "--index", "0",
            "--home", &home_arg,
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }

    #[test]
    fn recategorize_without_category_is_rejected() {
        let home = tempfile::tempdir().expect("temp home");
        let home_arg = home.path().display().to_string();

        let parsed = parse_from([
            "caixa",
            "bulk",
            "Matriz",
            "Centro",
            "--list",
            "payroll",
            "--action",
            "recategorize",
            "--home",
            &home_arg,
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }
}
