//! Tests for roster-model types.

use roster_model::{
    DraftError, Field, FieldUpdate, ModelError, Position, RecordDraft, RecordId, parse_date,
};

#[test]
fn draft_to_record_keeps_every_field() {
    let draft = RecordDraft {
        full_name: "Lê Minh".to_string(),
        date_of_birth: "1988-07-14".to_string(),
        position: Position::Backend,
        salary: 3100,
    };
    let record = draft.validate().expect("valid draft").into_record(RecordId::new());
    assert_eq!(record.full_name, "Lê Minh");
    assert_eq!(record.date_of_birth, parse_date("1988-07-14").unwrap());
    assert_eq!(record.position, Position::Backend);
    assert_eq!(record.salary, 3100);
}

#[test]
fn draft_errors_are_reported_in_form_order() {
    let draft = RecordDraft {
        full_name: String::new(),
        date_of_birth: "not a date".to_string(),
        ..RecordDraft::default()
    };
    assert_eq!(draft.validate(), Err(DraftError::EmptyFullName));
}

#[test]
fn field_update_names_its_field() {
    for field in Field::ALL {
        let raw = match field {
            Field::FullName => "Vũ Hải",
            Field::DateOfBirth => "2001-03-04",
            Field::Position => "Hr",
            Field::Salary => "900",
        };
        let update = FieldUpdate::parse(field, raw).expect("valid value");
        assert_eq!(update.field(), field);
    }
}

#[test]
fn error_messages_name_the_input() {
    let error = FieldUpdate::parse(Field::Salary, "lots").unwrap_err();
    assert_eq!(error, ModelError::InvalidSalary("lots".to_string()));
    assert_eq!(
        error.to_string(),
        "invalid salary: lots (expected a non-negative whole number)"
    );
}
