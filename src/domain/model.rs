use serde::{Deserialize, Serialize};

/// Per-entry identity. Names are display text and need not be unique;
/// removal and edits address entries by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live, editable form row. Fields stay raw text until validation so a
/// half-typed value is representable without sentinel numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub id: EntryId,
    pub name: String,
    pub cost: String,
    pub profit: String,
}

/// A validated project, ready for the wire. Field names on the wire are the
/// solver service's contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "peso")]
    pub cost: u64,
    #[serde(rename = "ganancia")]
    pub profit: u64,
}

/// Immutable snapshot built at submit time. Owns its data outright so edits
/// to the live drafts cannot touch an in-flight request.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    #[serde(rename = "capacidad")]
    pub capacity: u64,
    #[serde(rename = "objetos")]
    pub items: Vec<ProjectEntry>,
}

/// The solver's answer: which projects to fund and the resulting totals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolverResult {
    #[serde(rename = "seleccionados")]
    pub selected_names: Vec<String>,
    #[serde(rename = "ganancia_total")]
    pub total_profit: u64,
    #[serde(rename = "peso_total")]
    pub total_cost: u64,
}
