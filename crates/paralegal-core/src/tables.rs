use serde::Serialize;

/// Ordered, read-only key → value table that is total: keys outside the
/// declared set resolve to the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupTable {
    entries: Vec<(String, String)>,
    fallback: String,
}

impl LookupTable {
    pub fn new(entries: &[(&str, &str)], fallback: &str) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fallback: fallback.into(),
        }
    }

    pub fn lookup(&self, key: &str) -> &str {
        match self.entries.iter().find(|(k, _)| k == key) {
            Some((_, v)) => v.as_str(),
            None => {
                tracing::debug!(key, "no table entry, using fallback");
                self.fallback.as_str()
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Case types ───────────────────────────────────────────────────────────

pub const CASE_TEMPLATE_FALLBACK: &str = "THE HIGH COURT RULES";

const CASE_TEMPLATES: &[(&str, &str)] = &[
    ("Contract Dispute", "application_for_summary_judgment"),
    ("Land Dispute", "urgent_application"),
    ("Employment", "reinstatement_application"),
    ("Family Law", "maintenance_variation"),
    ("Commercial", "interdict_application"),
];

/// Case type → motion template token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CaseTypeTable(LookupTable);

impl CaseTypeTable {
    pub fn builtin() -> Self {
        Self(LookupTable::new(CASE_TEMPLATES, CASE_TEMPLATE_FALLBACK))
    }

    pub fn template_for(&self, case_type: &str) -> &str {
        self.0.lookup(case_type)
    }

    pub fn case_types(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    pub fn table(&self) -> &LookupTable {
        &self.0
    }
}

// ── Judges ───────────────────────────────────────────────────────────────

pub const JUDGE_ADVICE_FALLBACK: &str = "Focus on clear legal principles and evidence";

const JUDGE_ADVICE: &[(&str, &str)] = &[
    (
        "Justice Chidyausiku",
        "Focus on constitutional arguments and fundamental rights",
    ),
    (
        "Justice Malaba",
        "Emphasize precedent and established legal principles",
    ),
    (
        "Justice Garwe",
        "Prepare detailed factual analysis and evidence",
    ),
    (
        "Justice Gwaunza",
        "Highlight gender and social justice aspects where applicable",
    ),
    (
        "Justice Patel",
        "Focus on commercial practicality and business context",
    ),
];

/// Presiding judge → approach advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JudgeAdviceTable(LookupTable);

impl JudgeAdviceTable {
    pub fn builtin() -> Self {
        Self(LookupTable::new(JUDGE_ADVICE, JUDGE_ADVICE_FALLBACK))
    }

    pub fn advice_for(&self, judge: &str) -> &str {
        self.0.lookup(judge)
    }

    pub fn judges(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    pub fn table(&self) -> &LookupTable {
        &self.0
    }
}

/// Both static tables, built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupTables {
    pub case_types: CaseTypeTable,
    pub judges: JudgeAdviceTable,
}

impl LookupTables {
    pub fn builtin() -> Self {
        Self {
            case_types: CaseTypeTable::builtin(),
            judges: JudgeAdviceTable::builtin(),
        }
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::builtin()
    }
}
