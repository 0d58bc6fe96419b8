use crate::domain::model::{SolverResult, SubmissionRequest};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn solver_endpoint(&self) -> &str;
}

/// The remote optimization service, seen from the form. One attempt per
/// call; retries are the caller's decision, not the transport's.
#[async_trait]
pub trait SolverApi: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SolverResult>;
}

/// Where outcomes land. `show_error` must interrupt the user so a failure
/// cannot be missed; it must not hide a previously shown result.
pub trait Presenter {
    fn show_result(&mut self, result: &SolverResult);
    fn show_error(&mut self, error: &FormError);
    fn hide_result(&mut self);
}
