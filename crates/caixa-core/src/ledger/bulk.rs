use crate::model::{AutoDebit, EntryStatus, PayrollCategory, ScheduledPayment, Transfer};

/// Entries whose status can be flipped between open and scheduled,
/// individually or over an index selection.
pub trait StatusEntry {
    fn status(&self) -> EntryStatus;
    fn set_status(&mut self, status: EntryStatus);
}

impl StatusEntry for AutoDebit {
    fn status(&self) -> EntryStatus {
        self.status
    }

    fn set_status(&mut self, status: EntryStatus) {
        self.status = status;
    }
}

impl StatusEntry for ScheduledPayment {
    fn status(&self) -> EntryStatus {
        self.status
    }

    fn set_status(&mut self, status: EntryStatus) {
        self.status = status;
    }
}

impl StatusEntry for Transfer {
    fn status(&self) -> EntryStatus {
        self.status
    }

    fn set_status(&mut self, status: EntryStatus) {
        self.status = status;
    }
}

/// Selections are index-based against the current array. Any structural
/// change (a delete, a re-import) renumbers the array and invalidates
/// previously captured indices; out-of-range indices are ignored rather
/// than trusted. An empty selection is always a no-op.
pub fn schedule_selected<T>(entries: &[T], selected: &[usize]) -> Vec<T>
where
    T: Clone + StatusEntry,
{
    transition_selected(entries, selected, EntryStatus::Open, EntryStatus::Scheduled)
}

pub fn reopen_selected<T>(entries: &[T], selected: &[usize]) -> Vec<T>
where
    T: Clone + StatusEntry,
{
    transition_selected(entries, selected, EntryStatus::Scheduled, EntryStatus::Open)
}

pub fn delete_selected<T>(entries: &[T], selected: &[usize]) -> Vec<T>
where
    T: Clone,
{
    entries
        .iter()
        .enumerate()
        .filter(|(index, _)| !selected.contains(index))
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Overwrites `payroll_category` on every selected payroll line.
pub fn recategorize_selected(
    entries: &[ScheduledPayment],
    selected: &[usize],
    category: PayrollCategory,
) -> Vec<ScheduledPayment> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if selected.contains(&index) {
                let mut updated = entry.clone();
                updated.payroll_category = Some(category);
                updated
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Flips one entry between open and scheduled, as the inline status
/// badge does. Out-of-range indices leave the list unchanged.
pub fn toggle_status<T>(entries: &[T], index: usize) -> Vec<T>
where
    T: Clone + StatusEntry,
{
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let mut updated = entry.clone();
            if position == index {
                let flipped = match updated.status() {
                    EntryStatus::Open => EntryStatus::Scheduled,
                    EntryStatus::Scheduled => EntryStatus::Open,
                };
                updated.set_status(flipped);
            }
            updated
        })
        .collect()
}

fn transition_selected<T>(
    entries: &[T],
    selected: &[usize],
    from: EntryStatus,
    to: EntryStatus,
) -> Vec<T>
where
    T: Clone + StatusEntry,
{
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut updated = entry.clone();
            if selected.contains(&index) && updated.status() == from {
                updated.set_status(to);
            }
            updated
        })
        .collect()
}
