use paralegal_core::types::{
    Column, ControlKind, FieldSet, FieldSpec, FormMode, MissingRequiredInput, ModeKind,
    RenderResult, Report, SectionBody,
};

fn form() -> FormMode {
    FormMode {
        kind: ModeKind::MotionWriter,
        name: "motion_writer".into(),
        label: "Motion Writer".into(),
        heading: "Motion Drafting Assistant".into(),
        icon: "📝".into(),
        submit_label: "Generate Motion".into(),
        fields: vec![
            FieldSpec {
                name: "party_names".into(),
                required: true,
                ..Default::default()
            },
            FieldSpec {
                name: "case_number".into(),
                ..Default::default()
            },
            FieldSpec {
                name: "relief_sought".into(),
                kind: ControlKind::TextArea,
                required: true,
                column: Column::Right,
                ..Default::default()
            },
        ],
    }
}

#[test]
fn test_fieldset_absent_reads_empty() {
    let fields = FieldSet::new().with("a", "1");
    assert_eq!(fields.get("a"), "1");
    assert_eq!(fields.get("b"), "");
    assert!(fields.is_blank("b"));
}

#[test]
fn test_fieldset_get_or_only_replaces_empty() {
    let fields = FieldSet::new().with("empty", "").with("space", " ");
    assert_eq!(fields.get_or("empty", "default"), "default");
    assert_eq!(fields.get_or("missing", "default"), "default");
    assert_eq!(fields.get_or("space", "default"), " ");
}

#[test]
fn test_fieldset_deserializes_from_flat_object() {
    let fields: FieldSet =
        serde_json::from_str(r#"{"party_names":"Moyo vs Chuma","case_number":""}"#).unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("party_names"), "Moyo vs Chuma");
}

#[test]
fn test_missing_required_in_form_order() {
    let form = form();
    assert_eq!(
        form.missing_required(&FieldSet::new()),
        vec!["party_names".to_string(), "relief_sought".to_string()]
    );
    let partial = FieldSet::new().with("relief_sought", "costs");
    assert_eq!(form.missing_required(&partial), vec!["party_names".to_string()]);
    let full = partial.with("party_names", "A vs B");
    assert!(form.missing_required(&full).is_empty());
}

#[test]
fn test_optional_fields_never_missing() {
    let form = form();
    let fields = FieldSet::new()
        .with("party_names", "A")
        .with("relief_sought", "B");
    assert!(form.missing_required(&fields).is_empty());
    assert!(form.has_two_columns());
}

#[test]
fn test_mode_names_round_trip() {
    for kind in ModeKind::ALL {
        assert_eq!(ModeKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ModeKind::from_name("unknown"), None);
}

#[test]
fn test_missing_input_displays_message() {
    let notice = MissingRequiredInput::new(ModeKind::ContractAnalyzer, vec!["contract_text".into()]);
    assert_eq!(notice.to_string(), "Please paste contract text to analyze.");
    let err: Box<dyn std::error::Error> = Box::new(notice);
    assert!(err.to_string().contains("contract text"));
}

#[test]
fn test_render_result_display_text() {
    let notice = RenderResult::Notice(MissingRequiredInput::new(ModeKind::MotionWriter, vec![]));
    assert!(!notice.is_rendered());
    assert_eq!(
        notice.display_text(),
        "Please provide the party names and the relief sought."
    );

    let report = Report::new(ModeKind::ContractAnalyzer, "🔍", "Analysis Complete!").section(
        "💡",
        "Recommended Fixes",
        SectionBody::Bullets(vec!["fix".into()]),
    );
    let rendered = RenderResult::Rendered(report);
    assert!(rendered.is_rendered());
    assert!(rendered.notice().is_none());
    assert!(rendered.display_text().contains("• fix"));
}

#[test]
fn test_section_body_serializes_with_kind_tag() {
    let body = SectionBody::Bullets(vec!["x".into()]);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["kind"], "bullets");
    assert_eq!(json["content"][0], "x");
}
