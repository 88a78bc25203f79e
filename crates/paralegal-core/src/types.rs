use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Modes ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// Drafts a court motion from party names, relief and facts.
    MotionWriter,
    /// Reports the stock loophole list for a pasted contract.
    ContractAnalyzer,
    /// Judge-specific approach plus recommended arguments.
    CaseStrategy,
}

impl ModeKind {
    /// Selector order.
    pub const ALL: [ModeKind; 3] = [
        ModeKind::MotionWriter,
        ModeKind::ContractAnalyzer,
        ModeKind::CaseStrategy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MotionWriter => "motion_writer",
            Self::ContractAnalyzer => "contract_analyzer",
            Self::CaseStrategy => "case_strategy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MotionWriter => "Motion Writer",
            Self::ContractAnalyzer => "Contract Analyzer",
            Self::CaseStrategy => "Case Strategy Advisor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Notice shown instead of a render when required fields are empty.
    pub fn missing_input_message(&self) -> &'static str {
        match self {
            Self::MotionWriter => "Please provide the party names and the relief sought.",
            Self::ContractAnalyzer => "Please paste contract text to analyze.",
            Self::CaseStrategy => "Please fill in the required fields.",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Field Sets ───────────────────────────────────────────────────────────

/// User-entered values for one submission, keyed by field name.
/// Fields that were never submitted read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(BTreeMap<String, String>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Returns `fallback` when the field is empty. Only literal emptiness counts;
    /// whitespace is user input like any other.
    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        match self.get(name) {
            "" => fallback,
            v => v,
        }
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<HashMap<String, String>> for FieldSet {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

// ── Form Descriptors ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Multi-line text area.
    TextArea,
    /// Single choice from `FieldSpec::options`.
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    #[default]
    Left,
    Right,
}

/// One input control of a mode's form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: ControlKind,
    pub required: bool,
    pub placeholder: String,
    /// Enumerated choices; only meaningful for `ControlKind::Select`.
    pub options: Vec<String>,
    /// Text area height in pixels. None = browser default.
    pub height: Option<u16>,
    pub column: Column,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            kind: ControlKind::Text,
            required: false,
            placeholder: String::new(),
            options: Vec::new(),
            height: None,
            column: Column::Left,
        }
    }
}

/// A complete mode definition: selector entry plus ordered form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMode {
    pub kind: ModeKind,
    pub name: String,
    pub label: String,
    pub heading: String,
    pub icon: String,
    pub submit_label: String,
    pub fields: Vec<FieldSpec>,
}

impl FormMode {
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Names of required fields that are empty in `fields`, in form order.
    pub fn missing_required(&self, fields: &FieldSet) -> Vec<String> {
        self.required_fields()
            .filter(|f| fields.is_blank(&f.name))
            .map(|f| f.name.clone())
            .collect()
    }

    pub fn has_two_columns(&self) -> bool {
        self.fields.iter().any(|f| f.column == Column::Right)
    }
}

// ── Court ────────────────────────────────────────────────────────────────

/// Caption and signing details printed on every drafted motion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtProfile {
    pub court_name: String,
    pub court_station: String,
    pub signing_place: String,
}

impl Default for CourtProfile {
    fn default() -> Self {
        Self {
            court_name: "IN THE HIGH COURT OF ZIMBABWE".into(),
            court_station: "HELD AT ZVISHAVANE MAGISTRATE COURT".into(),
            signing_place: "Harare".into(),
        }
    }
}

// ── Render Results ───────────────────────────────────────────────────────

/// A submission whose required fields were empty. Always recoverable by
/// resubmitting with the fields filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRequiredInput {
    pub mode: ModeKind,
    pub fields: Vec<String>,
    pub message: String,
}

impl MissingRequiredInput {
    pub fn new(mode: ModeKind, fields: Vec<String>) -> Self {
        Self {
            mode,
            fields,
            message: mode.missing_input_message().into(),
        }
    }
}

impl fmt::Display for MissingRequiredInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MissingRequiredInput {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Warning,
    /// Counter-argument box.
    Argument,
    /// Contract issue box.
    Loophole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    /// Preformatted document text.
    Document(String),
    /// Highlighted boxes; with a label each box is prefixed "<label> <n>:".
    Callouts {
        tone: Tone,
        label: Option<String>,
        items: Vec<String>,
    },
    Bullets(Vec<String>),
    Numbered(Vec<String>),
    Note { tone: Tone, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub icon: String,
    pub title: String,
    pub body: SectionBody,
}

/// Everything displayed for one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub mode: ModeKind,
    pub icon: String,
    pub banner: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    Rendered(Report),
    Notice(MissingRequiredInput),
}

impl RenderResult {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Rendered(r) => Some(r),
            Self::Notice(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&MissingRequiredInput> {
        match self {
            Self::Rendered(_) => None,
            Self::Notice(n) => Some(n),
        }
    }

    /// The string handed to the display: the report as markdown, or the notice.
    pub fn display_text(&self) -> String {
        match self {
            Self::Rendered(r) => r.to_markdown(),
            Self::Notice(n) => n.message.clone(),
        }
    }
}

impl From<Result<Report, MissingRequiredInput>> for RenderResult {
    fn from(r: Result<Report, MissingRequiredInput>) -> Self {
        match r {
            Ok(report) => Self::Rendered(report),
            Err(notice) => Self::Notice(notice),
        }
    }
}
