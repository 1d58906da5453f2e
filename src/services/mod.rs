pub mod budget_service;
pub mod entry_service;

pub use budget_service::BudgetService;
pub use entry_service::{EntryService, SubmissionReceipt};

use crate::errors::SheetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error("{0}")]
    Invalid(String),
}
