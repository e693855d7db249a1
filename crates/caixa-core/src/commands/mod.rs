pub mod bulk;
mod common;
pub mod day;
pub mod entry;
pub mod group;
pub mod import;
pub mod report;
pub mod rule;
pub mod store;
pub mod supplier;
pub mod transfer;

pub use common::ListKind;
