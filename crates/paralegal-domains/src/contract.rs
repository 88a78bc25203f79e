use paralegal_core::renderer::{RenderContext, Renderer};
use paralegal_core::tables::LookupTables;
use paralegal_core::types::{
    FieldSet, FieldSpec, FormMode, MissingRequiredInput, ModeKind, RenderResult, Report,
    SectionBody, Tone,
};
use serde::Serialize;

use crate::area_field;

// Common issues in Zimbabwean contracts. The list does not depend on the
// submitted text.
pub const POTENTIAL_ISSUES: [&str; 5] = [
    "Ambiguous termination clauses that may not comply with the Labour Act",
    "Unclear dispute resolution mechanism - consider specifying Zimbabwean courts",
    "Potential violation of Consumer Contracts Act provisions",
    "Vague payment terms that could lead to contractual disputes",
    "Insufficient force majeure clause for Zimbabwean context",
];

pub const RECOMMENDED_FIXES: [&str; 5] = [
    "Include specific timelines and notice periods for termination",
    "Specify that disputes will be resolved in Zimbabwean courts under Zimbabwean law",
    "Ensure all terms are fair and reasonable under the Consumer Contracts Act",
    "Define clear payment deadlines and consequences for late payment",
    "Expand force majeure to include load-shedding and forex unavailability",
];

pub fn contract_mode() -> FormMode {
    FormMode {
        kind: ModeKind::ContractAnalyzer,
        name: ModeKind::ContractAnalyzer.name().into(),
        label: ModeKind::ContractAnalyzer.label().into(),
        heading: "Contract Loophole Analyzer".into(),
        icon: "🔍".into(),
        submit_label: "Analyze Contract".into(),
        fields: vec![FieldSpec {
            required: true,
            height: Some(200),
            ..area_field(
                "contract_text",
                "Paste Contract Text Here:",
                "Paste the contract text you want analyzed for loopholes and issues...",
            )
        }],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractFindings {
    pub issues: Vec<String>,
    pub fixes: Vec<String>,
}

/// Any non-empty text yields the same five issues and five fixes.
pub fn analyze_contract(text: &str) -> Result<ContractFindings, MissingRequiredInput> {
    if text.is_empty() {
        return Err(MissingRequiredInput::new(
            ModeKind::ContractAnalyzer,
            vec!["contract_text".into()],
        ));
    }
    tracing::info!(chars = text.chars().count(), "contract analyzed");
    Ok(ContractFindings {
        issues: POTENTIAL_ISSUES.iter().map(|s| s.to_string()).collect(),
        fixes: RECOMMENDED_FIXES.iter().map(|s| s.to_string()).collect(),
    })
}

impl ContractFindings {
    pub fn into_report(self) -> Report {
        Report::new(ModeKind::ContractAnalyzer, "🔍", "Analysis Complete!")
            .section(
                "⚠️",
                "Potential Loopholes & Issues",
                SectionBody::Callouts {
                    tone: Tone::Loophole,
                    label: None,
                    items: self.issues,
                },
            )
            .section("💡", "Recommended Fixes", SectionBody::Bullets(self.fixes))
    }
}

pub struct ContractRenderer;

impl Renderer for ContractRenderer {
    fn kind(&self) -> ModeKind {
        ModeKind::ContractAnalyzer
    }

    fn form(&self, _tables: &LookupTables) -> FormMode {
        contract_mode()
    }

    fn render(&self, fields: &FieldSet, _ctx: &RenderContext<'_>) -> RenderResult {
        analyze_contract(fields.get("contract_text"))
            .map(ContractFindings::into_report)
            .into()
    }
}
