use paralegal_core::parties::{split_parties, Parties};
use paralegal_core::renderer::{RenderContext, Renderer};
use paralegal_core::tables::LookupTables;
use paralegal_core::types::{
    FieldSet, FieldSpec, FormMode, MissingRequiredInput, ModeKind, RenderResult, Report,
    SectionBody, Tone,
};
use serde::Serialize;

use crate::{area_field, right, select_field, text_field};

pub const DEFAULT_CASE_NUMBER: &str = "HC 1234/23";
const DEFAULT_RELIEF_BACKGROUND: &str = "the relief set out below";
const DEFAULT_RELIEF_PRAYER: &str = "The Respondent pay the sum claimed.";
const DEFAULT_FACTS: &str = "The applicant has a clear right to the relief sought.";
const DEFAULT_LEGAL_BASIS: &str = "the common law and the High Court Act [Chapter 7:06]";

/// Markers that open each of the seven document sections, in order:
/// caption, parties, application heading, background, legal basis, prayer, date line.
pub const SECTION_HEADINGS: [&str; 7] = [
    "CASE NO:",
    "BETWEEN:",
    "APPLICATION IN TERMS OF",
    "BACKGROUND",
    "LEGAL BASIS",
    "PRAYER",
    "DATED at",
];

pub fn motion_mode(tables: &LookupTables) -> FormMode {
    FormMode {
        kind: ModeKind::MotionWriter,
        name: ModeKind::MotionWriter.name().into(),
        label: ModeKind::MotionWriter.label().into(),
        heading: "Motion Drafting Assistant".into(),
        icon: "📝".into(),
        submit_label: "Generate Motion".into(),
        fields: vec![
            select_field("case_type", "Case Type", tables.case_types.case_types()),
            FieldSpec {
                required: true,
                ..text_field("party_names", "Party Names (e.g., Applicant vs Respondent)")
            },
            text_field("case_number", "Case Number"),
            FieldSpec {
                required: true,
                ..area_field(
                    "relief_sought",
                    "Relief Sought",
                    "What are you asking the court to do?",
                )
            },
            right(FieldSpec {
                height: Some(150),
                ..area_field("facts_of_case", "Facts of the Case", "")
            }),
            right(area_field(
                "legal_basis",
                "Legal Basis",
                "Constitutional provisions, statutes, case law...",
            )),
        ],
    }
}

/// A drafted motion and the counter-arguments it will likely meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotionDraft {
    pub parties: Parties,
    /// Template token from the case-type table.
    pub template: String,
    pub case_number: String,
    pub prayer: [String; 3],
    pub document: String,
    pub counter_arguments: [String; 3],
}

/// Fill the motion skeleton from `fields`. Requires `party_names` and
/// `relief_sought`; every other field has a literal default.
pub fn draft_motion(
    fields: &FieldSet,
    ctx: &RenderContext<'_>,
) -> Result<MotionDraft, MissingRequiredInput> {
    let missing: Vec<String> = ["party_names", "relief_sought"]
        .into_iter()
        .filter(|name| fields.is_blank(name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(MissingRequiredInput::new(ModeKind::MotionWriter, missing));
    }

    let parties = split_parties(fields.get("party_names"));
    let template = ctx
        .tables
        .case_types
        .template_for(fields.get("case_type"))
        .to_string();
    let case_number = fields.get_or("case_number", DEFAULT_CASE_NUMBER).to_string();
    let relief = fields.get("relief_sought");
    let background_relief = match relief {
        "" => DEFAULT_RELIEF_BACKGROUND.to_string(),
        r => r.to_lowercase(),
    };
    let prayer = [
        fields.get_or("relief_sought", DEFAULT_RELIEF_PRAYER).to_string(),
        "Costs of suit.".to_string(),
        "Further and/or alternative relief.".to_string(),
    ];
    let facts = fields.get_or("facts_of_case", DEFAULT_FACTS);
    let legal_basis = fields.get_or("legal_basis", DEFAULT_LEGAL_BASIS);
    let court = ctx.court;

    let document = format!(
        "{court_name}\n\
         {court_station}\n\
         \n\
         CASE NO: {case_number}\n\
         \n\
         BETWEEN:\n\
         \n\
         {applicant} - APPLICANT\n\
         \n\
         AND\n\
         \n\
         {respondent} - RESPONDENT\n\
         \n\
         APPLICATION IN TERMS OF {template}\n\
         \n\
         BACKGROUND\n\
         1. This is an application for {background_relief}.\n\
         2. The material facts are as follows: {facts}\n\
         \n\
         LEGAL BASIS\n\
         3. The application is founded on {legal_basis}.\n\
         \n\
         PRAYER\n\
         WHEREFORE the Applicant prays for an order that:\n\
         1. {prayer_1}\n\
         2. {prayer_2}\n\
         3. {prayer_3}\n\
         \n\
         DATED at {place} this {day} day of {month_year}.",
        court_name = court.court_name,
        court_station = court.court_station,
        applicant = parties.applicant,
        respondent = parties.respondent,
        prayer_1 = prayer[0],
        prayer_2 = prayer[1],
        prayer_3 = prayer[2],
        place = court.signing_place,
        day = ctx.today.format("%d"),
        month_year = ctx.today.format("%B %Y"),
    );

    let challenged = if parties.separated {
        parties.applicant.as_str()
    } else {
        "the applicant"
    };
    let counter_arguments = [
        format!("The respondent will likely argue that {challenged} has failed to establish a clear right."),
        "A potential defense could be that the matter is not urgent and should follow normal court procedures.".to_string(),
        "The opposing party may contend that there are material disputes of fact that cannot be resolved on motion.".to_string(),
    ];

    tracing::info!(
        template = %template,
        separated = parties.separated,
        "motion drafted"
    );

    Ok(MotionDraft {
        parties,
        template,
        case_number,
        prayer,
        document,
        counter_arguments,
    })
}

impl MotionDraft {
    pub fn into_report(self) -> Report {
        Report::new(ModeKind::MotionWriter, "✅", "Motion Generated Successfully!")
            .section(
                "📄",
                "Generated Motion Document",
                SectionBody::Document(self.document),
            )
            .section(
                "🎯",
                "Three Possible Counter-Arguments",
                SectionBody::Callouts {
                    tone: Tone::Argument,
                    label: Some("Argument".into()),
                    items: self.counter_arguments.to_vec(),
                },
            )
    }
}

pub struct MotionRenderer;

impl Renderer for MotionRenderer {
    fn kind(&self) -> ModeKind {
        ModeKind::MotionWriter
    }

    fn form(&self, tables: &LookupTables) -> FormMode {
        motion_mode(tables)
    }

    fn render(&self, fields: &FieldSet, ctx: &RenderContext<'_>) -> RenderResult {
        draft_motion(fields, ctx)
            .map(MotionDraft::into_report)
            .into()
    }
}
