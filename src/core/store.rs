use crate::domain::model::{EntryDraft, EntryId};

/// Which draft field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Cost,
    Profit,
}

/// The ordered collection of drafts the user is editing. Owns every draft
/// exclusively; other components only ever see snapshots.
///
/// Two counters: `next_id` hands out identities and never rewinds, so a
/// reference taken before a reset can never address an entry created after
/// it. `name_counter` numbers the display names and restarts on reset.
#[derive(Debug)]
pub struct ProjectStore {
    entries: Vec<EntryDraft>,
    next_id: u64,
    name_counter: u64,
}

impl ProjectStore {
    /// A fresh store already contains one blank row, same as the original
    /// form on page load.
    pub fn new() -> Self {
        let mut store = Self {
            entries: Vec::new(),
            next_id: 0,
            name_counter: 0,
        };
        store.add();
        store
    }

    /// Appends a blank draft with an auto-numbered name and returns its id.
    pub fn add(&mut self) -> EntryId {
        self.next_id += 1;
        self.name_counter += 1;
        let id = EntryId(self.next_id);

        self.entries.push(EntryDraft {
            id,
            name: format!("Project {}", self.name_counter),
            cost: String::new(),
            profit: String::new(),
        });

        id
    }

    /// Removes by identity, preserving the order of the rest. Removing an id
    /// that is already gone is a no-op.
    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Edits one field of a draft in place. Unknown ids are ignored.
    pub fn update(&mut self, id: EntryId, field: EntryField, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            match field {
                EntryField::Name => entry.name = value.to_string(),
                EntryField::Cost => entry.cost = value.to_string(),
                EntryField::Profit => entry.profit = value.to_string(),
            }
        }
    }

    /// Empties the form, restarts the name numbering and leaves a single
    /// blank row for the user to fill.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.name_counter = 0;
        self.add();
    }

    /// Ordered copy of the current field values. The live drafts stay here.
    pub fn snapshot(&self) -> Vec<EntryDraft> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[EntryDraft] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_has_one_blank_row() {
        let store = ProjectStore::new();

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].name, "Project 1");
        assert_eq!(store.entries()[0].cost, "");
        assert_eq!(store.entries()[0].profit, "");
    }

    #[test]
    fn test_add_numbers_names_monotonically() {
        let mut store = ProjectStore::new();
        store.add();
        let third = store.add();

        assert_eq!(store.len(), 3);
        assert_eq!(store.entries()[1].name, "Project 2");
        assert_eq!(store.entries()[2].name, "Project 3");
        assert_eq!(store.entries()[2].id, third);
    }

    #[test]
    fn test_remove_preserves_order_and_numbering() {
        let mut store = ProjectStore::new();
        let second = store.add();
        store.add();

        store.remove(second);

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].name, "Project 1");
        assert_eq!(store.entries()[1].name, "Project 3");

        // numbering continues, removed numbers are not reused
        store.add();
        assert_eq!(store.entries()[2].name, "Project 4");
    }

    #[test]
    fn test_remove_twice_is_a_noop() {
        let mut store = ProjectStore::new();
        let second = store.add();

        store.remove(second);
        store.remove(second);

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_edits_in_place() {
        let mut store = ProjectStore::new();
        let id = store.entries()[0].id;

        store.update(id, EntryField::Name, "Fund A");
        store.update(id, EntryField::Cost, "30");
        store.update(id, EntryField::Profit, "50");

        let entry = &store.entries()[0];
        assert_eq!(entry.name, "Fund A");
        assert_eq!(entry.cost, "30");
        assert_eq!(entry.profit, "50");
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let mut store = ProjectStore::new();
        store.update(EntryId(999), EntryField::Name, "ghost");

        assert_eq!(store.entries()[0].name, "Project 1");
    }

    #[test]
    fn test_reset_restarts_numbering_at_one() {
        let mut store = ProjectStore::new();
        store.add();
        store.add();

        store.reset();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].name, "Project 1");

        store.reset();
        assert_eq!(store.entries()[0].name, "Project 1");
    }

    #[test]
    fn test_stale_id_from_before_reset_cannot_touch_new_rows() {
        let mut store = ProjectStore::new();
        let old = store.entries()[0].id;

        store.reset();
        let fresh = store.entries()[0].id;
        assert_ne!(old, fresh);

        store.remove(old);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached_from_live_drafts() {
        let mut store = ProjectStore::new();
        let id = store.entries()[0].id;
        store.update(id, EntryField::Cost, "30");

        let snapshot = store.snapshot();
        store.update(id, EntryField::Cost, "9999");

        assert_eq!(snapshot[0].cost, "30");
    }
}
