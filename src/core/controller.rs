use crate::core::store::{EntryField, ProjectStore};
use crate::domain::model::{EntryDraft, EntryId, SubmissionRequest};
use crate::domain::ports::{Presenter, SolverApi};
use crate::utils::error::Result;
use crate::utils::validation::{validate_budget, validate_entries};

/// Where a submission attempt currently stands. The solver call is the only
/// suspension point; anything driving the controller from concurrent events
/// must respect the `Requesting` guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting,
}

/// Ties the form together: one method per user action, dispatching every
/// outcome to the presenter. No failure is silent and no partial result is
/// ever rendered.
pub struct FormController<S: SolverApi, P: Presenter> {
    store: ProjectStore,
    budget: String,
    solver: S,
    presenter: P,
    phase: Phase,
}

impl<S: SolverApi, P: Presenter> FormController<S, P> {
    pub fn new(solver: S, presenter: P) -> Self {
        Self {
            store: ProjectStore::new(),
            budget: String::new(),
            solver,
            presenter,
            phase: Phase::Idle,
        }
    }

    pub fn add_entry(&mut self) -> EntryId {
        self.store.add()
    }

    pub fn remove_entry(&mut self, id: EntryId) {
        self.store.remove(id);
    }

    pub fn update_entry(&mut self, id: EntryId, field: EntryField, value: &str) {
        self.store.update(id, field, value);
    }

    pub fn set_budget(&mut self, raw: &str) {
        self.budget = raw.to_string();
    }

    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn entries(&self) -> &[EntryDraft] {
        self.store.entries()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Clears the form back to its initial shape: one blank row, empty
    /// budget, no visible result.
    pub fn reset(&mut self) {
        self.store.reset();
        self.budget.clear();
        self.presenter.hide_result();
    }

    /// Validates, snapshots, sends, renders. Returns true when a result was
    /// shown. A submit arriving while another is in flight is refused
    /// rather than raced. With a single owner the exclusive borrow across
    /// the await already rules that out; the guard matters for drivers that
    /// share the controller behind a lock.
    pub async fn submit(&mut self) -> bool {
        if self.phase == Phase::Requesting {
            tracing::warn!("Submission already in flight, ignoring submit");
            return false;
        }

        // Budget first, entries second; the first failure is the one the
        // user hears about.
        let request = match self.build_request() {
            Ok(request) => request,
            Err(error) => {
                tracing::debug!("Validation failed: {}", error);
                self.presenter.show_error(&error);
                return false;
            }
        };

        self.phase = Phase::Requesting;
        let outcome = self.solver.submit(&request).await;
        self.phase = Phase::Idle;

        match outcome {
            Ok(result) => {
                self.presenter.show_result(&result);
                true
            }
            Err(error) => {
                tracing::debug!("Submission failed: {}", error);
                self.presenter.show_error(&error);
                false
            }
        }
    }

    fn build_request(&self) -> Result<SubmissionRequest> {
        let capacity = validate_budget(&self.budget)?;
        let items = validate_entries(&self.store.snapshot())?;
        Ok(SubmissionRequest { capacity, items })
    }
}
