pub mod budget;
pub mod entry;

pub use budget::{BudgetRow, BudgetStatus};
pub use entry::{
    EntryDraft, EntryRecord, EntryRow, DATE_FORMAT, DEFAULT_MAIN_CATEGORY, DEFAULT_PAYMENT,
};
