use chrono::NaiveDate;
use paralegal_core::renderer::{RenderContext, Renderer};
use paralegal_core::tables::LookupTables;
use paralegal_core::types::{CourtProfile, FieldSet, ModeKind, RenderResult};
use paralegal_domains::contract::{analyze_contract, ContractRenderer, POTENTIAL_ISSUES, RECOMMENDED_FIXES};

#[test]
fn test_five_issues_and_five_fixes() {
    let findings = analyze_contract("The Seller shall deliver the goods.").unwrap();
    assert_eq!(findings.issues.len(), 5);
    assert_eq!(findings.fixes.len(), 5);
    assert_eq!(findings.issues[0], POTENTIAL_ISSUES[0]);
    assert_eq!(
        findings.fixes[4],
        "Expand force majeure to include load-shedding and forex unavailability"
    );
}

#[test]
fn test_findings_ignore_contract_content() {
    let a = analyze_contract("Employment agreement between A and B.").unwrap();
    let b = analyze_contract("x").unwrap();
    let c = analyze_contract("   ").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.fixes, RECOMMENDED_FIXES.map(String::from).to_vec());
}

#[test]
fn test_empty_text_is_missing_input() {
    let err = analyze_contract("").unwrap_err();
    assert_eq!(err.mode, ModeKind::ContractAnalyzer);
    assert_eq!(err.fields, vec!["contract_text".to_string()]);
    assert_eq!(err.message, "Please paste contract text to analyze.");
}

#[test]
fn test_renderer_on_empty_fields_returns_notice() {
    let tables = LookupTables::builtin();
    let court = CourtProfile::default();
    let ctx = RenderContext {
        tables: &tables,
        court: &court,
        today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    let result = ContractRenderer.render(&FieldSet::new(), &ctx);
    assert!(matches!(result, RenderResult::Notice(_)));
}

#[test]
fn test_renderer_report_sections() {
    let tables = LookupTables::builtin();
    let court = CourtProfile::default();
    let ctx = RenderContext {
        tables: &tables,
        court: &court,
        today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    let fields = FieldSet::new().with("contract_text", "Clause 1. Payment.");
    let result = ContractRenderer.render(&fields, &ctx);
    let report = result.report().unwrap();
    assert_eq!(report.banner, "Analysis Complete!");
    let issues = report.get_section("Potential Loopholes & Issues").unwrap();
    assert_eq!(issues.body.items().len(), 5);
    let fixes = report.get_section("Recommended Fixes").unwrap();
    assert_eq!(fixes.body.items().len(), 5);
    let text = result.display_text();
    assert!(text.contains("• Include specific timelines and notice periods for termination"));
}
