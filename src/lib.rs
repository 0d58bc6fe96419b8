pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::client::SolverClient;
pub use crate::core::controller::{FormController, Phase};
pub use crate::core::presenter::ConsolePresenter;
pub use crate::core::store::{EntryField, ProjectStore};
pub use crate::domain::model::{EntryDraft, EntryId, ProjectEntry, SolverResult, SubmissionRequest};
pub use crate::domain::ports::{ConfigProvider, Presenter, SolverApi};
pub use crate::utils::error::{FormError, Result};
