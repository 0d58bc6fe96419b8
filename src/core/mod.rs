pub mod client;
pub mod controller;
pub mod presenter;
pub mod store;

pub use crate::domain::model::{EntryDraft, EntryId, ProjectEntry, SolverResult, SubmissionRequest};
pub use crate::domain::ports::{ConfigProvider, Presenter, SolverApi};
pub use crate::utils::error::Result;
