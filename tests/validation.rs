//! Tests for the required-field validator.
mod common;
use common::*;
use stepform::prelude::*;
use stepform::validation::{MSG_INVALID_NUMBER, MSG_REQUIRED, MSG_SELECT_ONE, validate_all};

fn complete_first_step() -> DraftRecord {
    DraftRecord::from_iter([
        ("name", FieldValue::text("Ana")),
        ("age", FieldValue::Number(31.0)),
        ("tags", FieldValue::Selection(Selection::of(&["a"]))),
    ])
}

#[test]
fn test_missing_required_field_is_reported() {
    let form = create_small_form();
    let mut draft = complete_first_step();
    draft.remove("name");

    let errors = validate_step(&form, 0, &draft);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("name"), Some(MSG_REQUIRED));
}

#[test]
fn test_empty_string_counts_as_missing() {
    let form = create_small_form();
    let mut draft = complete_first_step();
    draft.set("name", FieldValue::text(""));

    let errors = validate_step(&form, 0, &draft);
    assert_eq!(errors.get("name"), Some(MSG_REQUIRED));
}

#[test]
fn test_empty_selection_asks_for_an_option() {
    let form = create_small_form();
    let mut draft = complete_first_step();
    draft.set("tags", FieldValue::Selection(Selection::default()));

    let errors = validate_step(&form, 0, &draft);
    assert_eq!(errors.get("tags"), Some(MSG_SELECT_ONE));
}

#[test]
fn test_other_text_alone_satisfies_a_selection() {
    let form = create_small_form();
    let mut draft = complete_first_step();
    draft.set(
        "tags",
        FieldValue::Selection(Selection::default().with_other("custom")),
    );

    assert!(validate_step(&form, 0, &draft).is_empty());
}

#[test]
fn test_blank_other_text_does_not_count_as_a_choice() {
    let form = create_small_form();
    let mut draft = complete_first_step();
    draft.set(
        "tags",
        FieldValue::Selection(Selection::default().with_other("   ")),
    );

    assert_eq!(validate_step(&form, 0, &draft).get("tags"), Some(MSG_SELECT_ONE));
}

#[test]
fn test_number_must_be_finite_and_non_negative() {
    let form = create_small_form();

    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let mut draft = complete_first_step();
        draft.set("age", FieldValue::Number(bad));
        let errors = validate_step(&form, 0, &draft);
        assert_eq!(errors.get("age"), Some(MSG_INVALID_NUMBER), "value {}", bad);
    }

    let mut draft = complete_first_step();
    draft.set("age", FieldValue::Number(0.0));
    assert!(validate_step(&form, 0, &draft).is_empty());
}

#[test]
fn test_text_in_number_field_is_invalid() {
    let form = create_small_form();
    let mut draft = complete_first_step();
    draft.set("age", FieldValue::text("thirty"));

    let errors = validate_step(&form, 0, &draft);
    assert_eq!(errors.get("age"), Some(MSG_INVALID_NUMBER));
}

#[test]
fn test_errors_follow_declared_field_order() {
    let form = create_small_form();
    let errors = validate_step(&form, 0, &DraftRecord::new());

    let fields: Vec<_> = errors.fields().collect();
    assert_eq!(fields, vec!["name", "age", "tags"]);
    assert_eq!(errors.first().map(|e| e.field.as_str()), Some("name"));
    // Absent selections are missing, not empty.
    assert_eq!(errors.get("tags"), Some(MSG_REQUIRED));
}

#[test]
fn test_optional_fields_are_never_checked() {
    let form = create_small_form();
    let mut draft = complete_first_step();
    draft.set("notes", FieldValue::text(""));

    assert!(validate_step(&form, 0, &draft).is_empty());
    assert!(validate_step(&form, 1, &DraftRecord::new()).is_empty());
}

#[test]
fn test_review_and_out_of_range_steps_have_no_errors() {
    let form = create_small_form();
    let draft = DraftRecord::new();

    assert!(validate_step(&form, form.review_index(), &draft).is_empty());
    assert!(validate_step(&form, 99, &draft).is_empty());
}

#[test]
fn test_validate_all_on_empty_briefing() {
    let form = briefing_form().unwrap();
    let failing = validate_all(&form, &DraftRecord::new());

    let steps: Vec<usize> = failing.iter().map(|(step, _)| *step).collect();
    assert_eq!(steps, vec![0, 1, 4]);
    assert_eq!(failing[0].1.len(), 5);
    assert_eq!(failing[2].1.get("desiredInvestment"), Some(MSG_REQUIRED));
}
