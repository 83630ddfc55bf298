//! Worked examples of filtering, sorting, paging and editing.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use roster_core::{Browser, EditError, QueryState, SortSpec, compute_view};
use roster_model::{Field, FieldUpdate, NewRecord, Position, Record, RecordDraft, RecordId};

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn record(tag: u8, name: &str, dob: &str, position: Position, salary: u64) -> Record {
    NewRecord {
        full_name: name.to_string(),
        date_of_birth: NaiveDate::parse_from_str(dob, "%Y-%m-%d").unwrap(),
        position,
        salary,
    }
    .into_record(RecordId::from_random_bytes([tag; 16]))
}

fn two_people() -> Vec<Record> {
    vec![
        record(1, "Nguyễn An", "1990-01-01", Position::Frontend, 1000),
        record(2, "Trần Bình", "1995-05-05", Position::Backend, 2000),
    ]
}

fn ids(records: &[Record]) -> Vec<RecordId> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn lowercase_search_matches_accented_name() {
    let records = two_people();
    let query = QueryState::default().with_search("nguyễn");
    let view = compute_view(&records, &query);
    assert_eq!(ids(&view.items), vec![records[0].id]);
    assert_eq!(view.total_filtered, 1);
}

#[test]
fn search_never_looks_at_other_fields() {
    let records = two_people();
    let query = QueryState::default().with_search("backend");
    assert_eq!(compute_view(&records, &query).total_filtered, 0);
}

#[test]
fn salary_descending() {
    let records = two_people();
    let query = QueryState::default().with_sort(Some(SortSpec::descending(Field::Salary)));
    let view = compute_view(&records, &query);
    assert_eq!(ids(&view.items), vec![records[1].id, records[0].id]);
}

#[test]
fn date_of_birth_is_chronological() {
    let records = vec![
        record(1, "A", "2001-12-31", Position::Hr, 1),
        record(2, "B", "1999-01-15", Position::Hr, 1),
        record(3, "C", "2001-02-01", Position::Hr, 1),
    ];
    let query = QueryState::default().with_sort(Some(SortSpec::ascending(Field::DateOfBirth)));
    let view = compute_view(&records, &query);
    assert_eq!(
        ids(&view.items),
        vec![records[1].id, records[2].id, records[0].id]
    );
}

#[test]
fn names_sort_by_base_letter_not_code_point() {
    let records = vec![
        record(1, "Đỗ Vy", "2000-01-01", Position::Hr, 1),
        record(2, "Ánh Lan", "2000-01-01", Position::Hr, 1),
        record(3, "Bùi Nam", "2000-01-01", Position::Hr, 1),
        record(4, "Hoàng Huy", "2000-01-01", Position::Hr, 1),
        record(5, "Đặng An", "2000-01-01", Position::Hr, 1),
        record(6, "Vũ Minh", "2000-01-01", Position::Hr, 1),
        record(7, "Dương Lan", "2000-01-01", Position::Hr, 1),
    ];
    let query = QueryState::default().with_sort(Some(SortSpec::ascending(Field::FullName)));
    let names: Vec<_> = compute_view(&records, &query)
        .items
        .into_iter()
        .map(|r| r.full_name)
        .collect();
    assert_eq!(
        names,
        [
            "Ánh Lan",
            "Bùi Nam",
            "Đặng An",
            "Đỗ Vy",
            "Dương Lan",
            "Hoàng Huy",
            "Vũ Minh",
        ]
    );
}

#[test]
fn position_sorts_by_label() {
    let records = vec![
        record(1, "A", "2000-01-01", Position::Hr, 1),
        record(2, "B", "2000-01-01", Position::Frontend, 1),
        record(3, "C", "2000-01-01", Position::Backend, 1),
    ];
    let query = QueryState::default().with_sort(Some(SortSpec::ascending(Field::Position)));
    let positions: Vec<_> = compute_view(&records, &query)
        .items
        .iter()
        .map(|r| r.position)
        .collect();
    assert_eq!(
        positions,
        vec![Position::Backend, Position::Frontend, Position::Hr]
    );
}

#[test]
fn three_toggles_restore_insertion_order() {
    let mut browser = Browser::new(two_people(), size(10));
    let original = ids(&browser.view().items);

    assert_eq!(
        browser.toggle_sort(Field::Salary),
        Some(SortSpec::ascending(Field::Salary))
    );
    assert_eq!(
        browser.toggle_sort(Field::Salary),
        Some(SortSpec::descending(Field::Salary))
    );
    assert_eq!(ids(&browser.view().items), vec![original[1], original[0]]);
    assert_eq!(browser.toggle_sort(Field::Salary), None);
    assert_eq!(ids(&browser.view().items), original);
}

#[test]
fn page_past_the_end_clamps_to_last_page() {
    let records = two_people();
    let mut browser = Browser::new(records.clone(), size(1));
    browser.go_to_page(5);
    let view = browser.view();
    assert_eq!(view.page_index, 1);
    assert_eq!(ids(&view.items), vec![records[1].id]);
    assert_eq!(view.page_count(), 2);
    assert_eq!(browser.query().page_index(), 1);
}

#[test]
fn raw_projection_returns_empty_page_past_the_end() {
    let records = two_people();
    let query = QueryState::new(size(1)).with_page(5);
    let view = compute_view(&records, &query);
    assert!(view.items.is_empty());
    assert_eq!(view.total_filtered, 2);
}

#[test]
fn narrowing_search_pulls_page_back() {
    let mut browser = Browser::new(roster_core::generate_seeded(50, 11), size(5));
    browser.go_to_page(9);
    assert_eq!(browser.view().page_index, 9);
    browser.search("zzz-nobody");
    browser.go_to_page(3);
    let view = browser.view();
    assert_eq!(view.page_index, 0);
    assert!(view.items.is_empty());
    assert_eq!(view.range_label(), "0-0 of 0");
}

#[test]
fn add_then_remove_leaves_no_trace() {
    let mut browser = Browser::new(two_people(), size(10));
    let before = browser.store().len();
    let draft = RecordDraft {
        full_name: "X".to_string(),
        date_of_birth: "2000-01-01".to_string(),
        position: Position::Hr,
        salary: 1200,
    };
    let added = browser.add(&draft).unwrap();
    assert_eq!(browser.store().len(), before + 1);
    assert_eq!(browser.view().items[0].id, added.id);

    browser.remove(added.id);
    assert_eq!(browser.store().len(), before);
    assert!(browser.store().get(added.id).is_none());
}

#[test]
fn incomplete_draft_is_not_added() {
    let mut browser = Browser::new(two_people(), size(10));
    assert!(browser.add(&RecordDraft::default()).is_err());
    assert_eq!(browser.store().len(), 2);
}

#[test]
fn removing_the_edited_record_ends_the_session() {
    let records = two_people();
    let mut browser = Browser::new(records.clone(), size(10));
    browser.begin_edit(records[0].id).unwrap();
    browser.remove(records[0].id);
    assert!(browser.edit_session().is_viewing());
    assert_eq!(
        browser.edit_field(FieldUpdate::Salary(1)),
        Err(EditError::NotEditing)
    );
}

#[test]
fn removing_another_record_keeps_the_session() {
    let records = two_people();
    let mut browser = Browser::new(records.clone(), size(10));
    browser.begin_edit(records[0].id).unwrap();
    browser.remove(records[1].id);
    assert!(browser.edit_session().is_editing(records[0].id));
}

#[test]
fn second_edit_is_rejected_until_save() {
    let records = two_people();
    let mut browser = Browser::new(records.clone(), size(10));
    browser.begin_edit(records[0].id).unwrap();
    assert!(matches!(
        browser.begin_edit(records[1].id),
        Err(EditError::AlreadyEditing { .. })
    ));
    assert_eq!(browser.end_edit(), Some(records[0].id));
    browser.begin_edit(records[1].id).unwrap();
    assert!(browser.edit_session().is_editing(records[1].id));
}

#[test]
fn live_edits_show_up_in_the_view() {
    let records = two_people();
    let mut browser = Browser::new(records.clone(), size(10));
    browser.search("bình");
    assert_eq!(browser.view().total_filtered, 1);
    browser.begin_edit(records[1].id).unwrap();
    browser
        .edit_field(FieldUpdate::FullName("Trần Cường".to_string()))
        .unwrap();
    assert_eq!(browser.view().total_filtered, 0);
}
