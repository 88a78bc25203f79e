use paralegal_core::renderer::{RenderContext, Renderer};
use paralegal_core::tables::LookupTables;
use paralegal_core::types::{FieldSet, FormMode, ModeKind, RenderResult, Report, SectionBody, Tone};
use serde::Serialize;

use crate::{area_field, right, select_field};

const DEFAULT_STRENGTH: &str = "your factual evidence";
const DEFAULT_LEGAL_ISSUE: &str = "the interpretation of relevant statutes";
const DEFAULT_OPPOSING_MOTIONS: &str = "typical procedural objections in this case type";
const PROCEDURAL_ANTICIPATION: &str =
    "Anticipate and pre-emptively address the opponent's likely procedural challenges";

pub fn strategy_mode(tables: &LookupTables) -> FormMode {
    FormMode {
        kind: ModeKind::CaseStrategy,
        name: ModeKind::CaseStrategy.name().into(),
        label: ModeKind::CaseStrategy.label().into(),
        heading: "Case Strategy Advisor".into(),
        icon: "🎯".into(),
        submit_label: "Generate Strategy".into(),
        fields: vec![
            select_field("presiding_judge", "Presiding Judge", tables.judges.judges()),
            select_field("case_category", "Case Category", tables.case_types.case_types()),
            area_field(
                "opponent_previous_motions",
                "Opponent's Previous Motion Types",
                "e.g., Exception applications, Summary judgment applications...",
            ),
            right(area_field("case_strengths", "Your Case Strengths", "")),
            right(area_field("case_weaknesses", "Your Case Weaknesses", "")),
            right(area_field("key_legal_issues", "Key Legal Issues", "")),
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyBrief {
    pub judge: String,
    pub approach: String,
    pub recommendations: [String; 3],
    pub defense_warning: String,
}

/// Text before the first '.', or the whole text when it has none.
pub fn first_clause(text: &str) -> &str {
    text.split_once('.').map_or(text, |(head, _)| head)
}

/// No field is required; every empty field has a fallback phrase.
pub fn advise_strategy(fields: &FieldSet, tables: &LookupTables) -> StrategyBrief {
    let judge = fields.get("presiding_judge");
    let approach = tables.judges.advice_for(judge).to_string();

    let strongest = match fields.get("case_strengths") {
        "" => DEFAULT_STRENGTH,
        strengths => first_clause(strengths),
    };
    let recommendations = [
        format!("Lead with your strongest point: {strongest}"),
        PROCEDURAL_ANTICIPATION.to_string(),
        format!(
            "Focus on the core legal issue: {}",
            fields.get_or("key_legal_issues", DEFAULT_LEGAL_ISSUE)
        ),
    ];
    let defense_warning = format!(
        "Prepare to counter: {}",
        fields.get_or("opponent_previous_motions", DEFAULT_OPPOSING_MOTIONS)
    );

    tracing::info!(judge, known_judge = tables.judges.table().contains(judge), "strategy generated");

    StrategyBrief {
        judge: judge.to_string(),
        approach,
        recommendations,
        defense_warning,
    }
}

impl StrategyBrief {
    pub fn into_report(self) -> Report {
        Report::new(ModeKind::CaseStrategy, "🎯", "Strategy Generated!")
            .section(
                "👨‍⚖️",
                "Judge-Specific Approach",
                SectionBody::Note {
                    tone: Tone::Info,
                    text: self.approach,
                },
            )
            .section(
                "📊",
                "Recommended Arguments",
                SectionBody::Numbered(self.recommendations.to_vec()),
            )
            .section(
                "🛡️",
                "Defense Strategy",
                SectionBody::Note {
                    tone: Tone::Warning,
                    text: self.defense_warning,
                },
            )
    }
}

pub struct StrategyRenderer;

impl Renderer for StrategyRenderer {
    fn kind(&self) -> ModeKind {
        ModeKind::CaseStrategy
    }

    fn form(&self, tables: &LookupTables) -> FormMode {
        strategy_mode(tables)
    }

    fn render(&self, fields: &FieldSet, ctx: &RenderContext<'_>) -> RenderResult {
        RenderResult::Rendered(advise_strategy(fields, ctx.tables).into_report())
    }
}
