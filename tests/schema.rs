//! Tests for form definitions and their JSON representation.
use stepform::prelude::*;
use stepform::schema::RawForm;

fn review() -> StepDescriptor {
    StepDescriptor::review("review", "Review")
}

#[test]
fn test_briefing_form_layout() {
    let form = briefing_form().unwrap();

    assert_eq!(form.step_count(), 10);
    assert_eq!(form.review_index(), 9);
    assert!(form.steps()[9].is_review());
    assert_eq!(form.input_steps().len(), 9);
    assert_eq!(form.steps()[4].id, "desired-services");

    let investment = form.field("desiredInvestment").unwrap();
    assert_eq!(investment.kind, FieldKind::Currency);
    assert!(investment.required);
    assert_eq!(form.locate("desiredInvestment").map(|l| l.step), Some(4));

    let channels = form.field("channelsUsed").unwrap();
    assert!(channels.allows_free_other);
    assert_eq!(channels.options.len(), 5);

    let required: Vec<_> = form.steps()[0]
        .fields
        .iter()
        .filter(|f| f.required)
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(
        required,
        vec!["companyName", "segment", "marketTime", "location", "responsible"]
    );
}

#[test]
fn test_form_needs_steps_and_a_trailing_review() {
    assert_eq!(FormDefinition::new(vec![]).unwrap_err(), DefinitionError::NoSteps);

    let no_review = vec![StepDescriptor::new(
        "only",
        "Only",
        vec![FieldDescriptor::new("a", "A", FieldKind::Text)],
    )];
    assert_eq!(
        FormDefinition::new(no_review).unwrap_err(),
        DefinitionError::ReviewStepHasFields("only".to_string())
    );

    let minimal = FormDefinition::new(vec![review()]).unwrap();
    assert_eq!(minimal.review_index(), 0);
}

#[test]
fn test_duplicate_ids_and_names_are_rejected() {
    let steps = vec![
        StepDescriptor::new("s", "S", vec![]),
        StepDescriptor::new("s", "S again", vec![]),
        review(),
    ];
    assert_eq!(
        FormDefinition::new(steps).unwrap_err(),
        DefinitionError::DuplicateStepId("s".to_string())
    );

    let steps = vec![
        StepDescriptor::new("one", "One", vec![FieldDescriptor::new("x", "X", FieldKind::Text)]),
        StepDescriptor::new("two", "Two", vec![FieldDescriptor::new("x", "X", FieldKind::Number)]),
        review(),
    ];
    assert_eq!(
        FormDefinition::new(steps).unwrap_err(),
        DefinitionError::DuplicateFieldName {
            step_id: "two".to_string(),
            field: "x".to_string()
        }
    );
}

#[test]
fn test_choice_fields_need_options() {
    let steps = vec![
        StepDescriptor::new("s", "S", vec![FieldDescriptor::new("pick", "Pick", FieldKind::Select)]),
        review(),
    ];
    assert_eq!(
        FormDefinition::new(steps).unwrap_err(),
        DefinitionError::MissingOptions("pick".to_string())
    );

    let steps = vec![
        StepDescriptor::new(
            "s",
            "S",
            vec![
                FieldDescriptor::new("pick", "Pick", FieldKind::Select)
                    .with_options(&["a"])
                    .with_other(),
            ],
        ),
        review(),
    ];
    assert!(matches!(
        FormDefinition::new(steps).unwrap_err(),
        DefinitionError::OtherNotSupported { .. }
    ));
}

#[test]
fn test_kind_accepts_matching_shapes() {
    assert!(FieldKind::Select.accepts(&FieldValue::text("a")));
    assert!(FieldKind::Currency.accepts(&FieldValue::Number(1.0)));
    assert!(FieldKind::Checkboxes.accepts(&FieldValue::Selection(Selection::default())));
    assert!(!FieldKind::Number.accepts(&FieldValue::text("1")));
    assert!(!FieldKind::Text.accepts(&FieldValue::Selection(Selection::default())));
}

#[test]
fn test_raw_form_from_json() {
    let json = r#"[
        {
            "id": "info",
            "title": "Info",
            "fields": [
                { "name": "company", "label": "Company", "type": "text", "required": true },
                { "name": "channels", "label": "Channels", "type": "checkboxes",
                  "options": ["Site", "LP"], "hasOther": true },
                { "name": "margin", "label": "Margin", "type": "percentage", "placeholder": "0%" }
            ]
        },
        { "id": "review", "title": "Review", "description": "Check everything" }
    ]"#;

    let form = RawForm::from_json(json).unwrap().into_form().unwrap();
    assert_eq!(form.step_count(), 2);
    assert!(form.field("company").unwrap().required);
    assert!(form.field("channels").unwrap().allows_free_other);
    assert_eq!(form.field("margin").unwrap().placeholder.as_deref(), Some("0%"));
    assert_eq!(form.steps()[1].description.as_deref(), Some("Check everything"));
}

#[test]
fn test_raw_form_errors() {
    let unknown = r#"[{ "id": "s", "title": "S", "fields": [
        { "name": "when", "label": "When", "type": "date" } ] },
        { "id": "review", "title": "Review" }]"#;
    assert_eq!(
        RawForm::from_json(unknown).unwrap().into_form().unwrap_err(),
        DefinitionError::UnknownFieldType {
            field: "when".to_string(),
            type_name: "date".to_string()
        }
    );

    assert!(matches!(
        RawForm::from_json("{ nope").unwrap_err(),
        DefinitionError::JsonParseError(_)
    ));
}

#[test]
fn test_draft_json_shape() {
    let draft = DraftRecord::from_iter([
        ("companyName", FieldValue::text("Acme")),
        ("desiredInvestment", FieldValue::Number(5000.0)),
        (
            "channelsUsed",
            FieldValue::Selection(Selection::of(&["Site"]).with_other("Blog")),
        ),
        ("priorities", FieldValue::Selection(Selection::of(&["Aumentar vendas"]))),
    ]);

    let value: serde_json::Value = serde_json::from_str(&draft.to_json().unwrap()).unwrap();
    assert_eq!(value["companyName"], "Acme");
    assert_eq!(value["desiredInvestment"], 5000.0);
    assert_eq!(value["channelsUsed"]["selected"][0], "Site");
    assert_eq!(value["channelsUsed"]["other"], "Blog");
    assert!(value["priorities"].get("other").is_none());

    let parsed = DraftRecord::from_json(r#"{"desiredInvestment": 5000, "companyName": "Acme"}"#)
        .unwrap();
    assert_eq!(parsed.get("desiredInvestment"), Some(&FieldValue::Number(5000.0)));
    assert_eq!(parsed.get("companyName"), Some(&FieldValue::text("Acme")));
}

#[test]
fn test_selection_behaves_like_an_ordered_set() {
    let mut selection = Selection::of(&["b", "a", "b"]);
    assert_eq!(selection.selected, vec!["b", "a"]);

    selection.deselect("b");
    assert!(!selection.is_selected("b"));
    selection.set_other("   ");
    assert!(selection.other.is_none());
    assert_eq!(selection.len(), 1);
}
