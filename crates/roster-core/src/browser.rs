//! The event-processing context.
//!
//! A [`Browser`] owns the store, the query state and the edit session. Every
//! user action is one `&mut self` call that runs to completion; the visible
//! page is recomputed lazily by [`Browser::view`] and cached until the store
//! revision or the query changes.

use std::num::NonZeroUsize;

use roster_model::{
    DraftError, Field, FieldUpdate, ModelError, NewRecord, Record, RecordDraft, RecordId,
};
use tracing::{debug, warn};

use crate::edit::EditSession;
use crate::error::EditError;
use crate::query::{QueryState, SortSpec, View, compute_view, last_page_index};
use crate::store::RecordStore;

#[derive(Debug, Default)]
struct ViewCache {
    /// Store revision and query the cached view was computed from.
    key: Option<(u64, QueryState)>,
    view: View,
    recomputations: u64,
}

#[derive(Debug, Default)]
pub struct Browser {
    store: RecordStore,
    query: QueryState,
    edit: EditSession,
    cache: ViewCache,
}

impl Browser {
    pub fn new(records: impl IntoIterator<Item = Record>, page_size: NonZeroUsize) -> Self {
        Self {
            store: RecordStore::from_records(records),
            query: QueryState::new(page_size),
            edit: EditSession::default(),
            cache: ViewCache::default(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    /// Current page, recomputed only if the records or the query changed.
    ///
    /// After recomputation the page index is clamped into range, so the
    /// returned page is never past the end while rows exist.
    pub fn view(&mut self) -> &View {
        let revision = self.store.revision();
        let fresh = matches!(
            &self.cache.key,
            Some((cached_revision, cached_query))
                if *cached_revision == revision && *cached_query == self.query
        );
        if !fresh {
            self.refresh(revision);
        }
        &self.cache.view
    }

    /// How many times the projection has actually run.
    pub fn recomputations(&self) -> u64 {
        self.cache.recomputations
    }

    fn refresh(&mut self, revision: u64) {
        let mut view = compute_view(self.store.records(), &self.query);
        self.cache.recomputations += 1;
        if self.query.clamp_page(view.total_filtered) {
            debug!(
                page = self.query.page_index(),
                total = view.total_filtered,
                "page index clamped"
            );
            view = compute_view(self.store.records(), &self.query);
            self.cache.recomputations += 1;
        }
        debug!(
            revision,
            total = view.total_filtered,
            page = view.page_index,
            "view recomputed"
        );
        self.cache.key = Some((revision, self.query.clone()));
        self.cache.view = view;
    }

    // --- query ---

    pub fn search(&mut self, text: impl Into<String>) {
        self.query.set_search(text);
        debug!(search = self.query.search(), "search changed");
    }

    pub fn toggle_sort(&mut self, key: Field) -> Option<SortSpec> {
        let sort = self.query.toggle_sort(key);
        debug!(?sort, "sort toggled");
        sort
    }

    /// Toggle by column name; unrecognised names leave the sort unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] for an unknown column.
    pub fn toggle_sort_named(&mut self, name: &str) -> Result<Option<SortSpec>, ModelError> {
        match name.parse::<Field>() {
            Ok(key) => Ok(self.toggle_sort(key)),
            Err(error) => {
                warn!(column = name, "ignoring sort on unknown column");
                Err(error)
            }
        }
    }

    /// Jump to a zero-based page; out-of-range values are clamped on the next view.
    pub fn go_to_page(&mut self, page_index: usize) {
        self.query.set_page(page_index);
    }

    pub fn first_page(&mut self) {
        self.query.set_page(0);
    }

    pub fn last_page(&mut self) {
        let last = self.final_page_index();
        self.query.set_page(last);
    }

    pub fn next_page(&mut self) {
        let last = self.final_page_index();
        let next = self.query.page_index().saturating_add(1).min(last);
        self.query.set_page(next);
    }

    pub fn previous_page(&mut self) {
        let previous = self.query.page_index().saturating_sub(1);
        self.query.set_page(previous);
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.query.set_page_size(page_size);
        debug!(page_size = page_size.get(), "page size changed");
    }

    fn final_page_index(&mut self) -> usize {
        let total = self.view().total_filtered;
        last_page_index(total, self.query.page_size())
    }

    // --- records ---

    /// Validate the draft and add it.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found; nothing is inserted.
    pub fn add(&mut self, draft: &RecordDraft) -> Result<Record, DraftError> {
        let candidate = draft.validate()?;
        Ok(self.add_record(candidate))
    }

    pub fn add_record(&mut self, candidate: NewRecord) -> Record {
        self.store.add(candidate)
    }

    /// Remove a record, ending its edit session if it was being edited.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let removed = self.store.remove(id)?;
        self.edit.release(id);
        Some(removed)
    }

    /// Record shown at one-based row number `row` of the current page.
    pub fn record_at_row(&mut self, row: usize) -> Option<RecordId> {
        let view = self.view();
        let first = view.row_number(0);
        let offset = row.checked_sub(first)?;
        view.items.get(offset).map(|record| record.id)
    }

    // --- editing ---

    /// # Errors
    ///
    /// [`EditError::UnknownRecord`] if `id` is not in the store, or
    /// [`EditError::AlreadyEditing`] if another record is being edited.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<(), EditError> {
        if !self.store.contains(id) {
            return Err(EditError::UnknownRecord(id));
        }
        self.edit.begin_edit(id)
    }

    pub fn end_edit(&mut self) -> Option<RecordId> {
        self.edit.end_edit()
    }

    /// Write one field of the record being edited. Changes apply immediately.
    ///
    /// # Errors
    ///
    /// [`EditError::NotEditing`] when no edit session is open.
    pub fn edit_field(&mut self, update: FieldUpdate) -> Result<(), EditError> {
        let id = self.edit.editing_id().ok_or(EditError::NotEditing)?;
        if self.store.update(id, update) {
            Ok(())
        } else {
            self.edit.release(id);
            Err(EditError::UnknownRecord(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_seeded;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn view_is_memoized() {
        let mut browser = Browser::new(generate_seeded(30, 7), size(10));
        browser.view();
        let after_first = browser.recomputations();
        browser.view();
        browser.view();
        assert_eq!(browser.recomputations(), after_first);

        browser.search("a");
        browser.view();
        assert!(browser.recomputations() > after_first);
    }

    #[test]
    fn store_mutation_invalidates_view() {
        let mut browser = Browser::new(generate_seeded(5, 1), size(10));
        assert_eq!(browser.view().total_filtered, 5);
        let id = browser.view().items[0].id;
        browser.remove(id);
        assert_eq!(browser.view().total_filtered, 4);
    }

    #[test]
    fn next_and_previous_stay_in_range() {
        let mut browser = Browser::new(generate_seeded(25, 3), size(10));
        browser.previous_page();
        assert_eq!(browser.query().page_index(), 0);
        browser.next_page();
        browser.next_page();
        browser.next_page();
        assert_eq!(browser.query().page_index(), 2);
        browser.first_page();
        assert_eq!(browser.query().page_index(), 0);
        browser.last_page();
        assert_eq!(browser.query().page_index(), 2);
        assert_eq!(browser.view().items.len(), 5);
    }

    #[test]
    fn record_at_row_uses_global_numbering() {
        let mut browser = Browser::new(generate_seeded(25, 3), size(10));
        browser.go_to_page(1);
        let expected = browser.view().items[0].id;
        assert_eq!(browser.record_at_row(11), Some(expected));
        assert_eq!(browser.record_at_row(10), None);
        assert_eq!(browser.record_at_row(21), None);
    }

    #[test]
    fn edit_field_requires_session() {
        let mut browser = Browser::new(generate_seeded(2, 9), size(10));
        assert_eq!(
            browser.edit_field(FieldUpdate::Salary(5)),
            Err(EditError::NotEditing)
        );
        let id = browser.view().items[0].id;
        browser.begin_edit(id).unwrap();
        browser.edit_field(FieldUpdate::Salary(5)).unwrap();
        assert_eq!(browser.store().get(id).unwrap().salary, 5);
    }

    #[test]
    fn begin_edit_rejects_unknown_record() {
        let mut browser = Browser::new(Vec::new(), size(10));
        let stranger = RecordId::new();
        assert_eq!(
            browser.begin_edit(stranger),
            Err(EditError::UnknownRecord(stranger))
        );
        assert!(browser.edit_session().is_viewing());
    }

    #[test]
    fn unknown_sort_column_is_ignored() {
        let mut browser = Browser::new(generate_seeded(3, 2), size(10));
        browser.toggle_sort(Field::Salary);
        assert!(browser.toggle_sort_named("id").is_err());
        assert_eq!(
            browser.query().sort(),
            Some(SortSpec::ascending(Field::Salary))
        );
        assert_eq!(
            browser.toggle_sort_named("salary").unwrap(),
            Some(SortSpec::descending(Field::Salary))
        );
    }
}
