use crate::cli::{
    Commands, DayCommand, EntryCommand, GroupCommand, RuleCommand, StoreCommand, SupplierCommand,
    TransferCommand,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Group { command } => match command {
            GroupCommand::Create { json, .. } | GroupCommand::List { json } => *json,
        },
        Commands::Store { command } => match command {
            StoreCommand::Add { json, .. }
            | StoreCommand::List { json, .. }
            | StoreCommand::Remove { json, .. }
            | StoreCommand::SetBalance { json, .. } => *json,
        },
        Commands::Import { json, .. }
        | Commands::Bulk { json, .. }
        | Commands::Totals { json, .. }
        | Commands::Entries { json, .. } => *json,
        Commands::Transfer { command } => match command {
            TransferCommand::Create { json, .. }
            | TransferCommand::Edit { json, .. }
            | TransferCommand::Delete { json, .. } => *json,
        },
        Commands::Entry { command } => match command {
            EntryCommand::Toggle { json, .. } | EntryCommand::Move { json, .. } => *json,
        },
        Commands::Day { command } => match command {
            DayCommand::Check { json, .. } | DayCommand::Clear { json, .. } => *json,
        },
        Commands::Rule { command } => match command {
            RuleCommand::Add { json, .. }
            | RuleCommand::List { json, .. }
            | RuleCommand::Remove { json, .. }
            | RuleCommand::Match { json, .. } => *json,
        },
        Commands::Supplier { command } => match command {
            SupplierCommand::List { json, .. } => *json,
        },
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}
