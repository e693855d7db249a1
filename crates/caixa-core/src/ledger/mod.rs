pub mod archive;
pub mod bulk;
pub mod relocate;
pub mod totals;
pub mod transfer;

/// Which live entry list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Debits,
    Payroll,
    Scheduled,
}

impl ListKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debits => "debits",
            Self::Payroll => "payroll",
            Self::Scheduled => "scheduled",
        }
    }
}
