use chrono::NaiveDate;
use paralegal_core::renderer::{RenderContext, Renderer};
use paralegal_core::tables::LookupTables;
use paralegal_core::types::{
    CourtProfile, FieldSet, FormMode, MissingRequiredInput, ModeKind, RenderResult,
};

use crate::contract::ContractRenderer;
use crate::motion::MotionRenderer;
use crate::strategy::StrategyRenderer;

/// The renderer that handles `kind`.
pub fn renderer_for(kind: ModeKind) -> &'static dyn Renderer {
    match kind {
        ModeKind::MotionWriter => &MotionRenderer,
        ModeKind::ContractAnalyzer => &ContractRenderer,
        ModeKind::CaseStrategy => &StrategyRenderer,
    }
}

/// Routes a submission to its mode's renderer: validate, then render.
///
/// Holds only read-only state, so one instance serves every request.
pub struct Dispatcher {
    tables: LookupTables,
    court: CourtProfile,
}

impl Dispatcher {
    pub fn new(tables: LookupTables, court: CourtProfile) -> Self {
        Self { tables, court }
    }

    pub fn builtin() -> Self {
        Self::new(LookupTables::builtin(), CourtProfile::default())
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    pub fn court(&self) -> &CourtProfile {
        &self.court
    }

    /// Form descriptors in selector order.
    pub fn modes(&self) -> Vec<FormMode> {
        ModeKind::ALL.iter().map(|k| self.form(*k)).collect()
    }

    pub fn form(&self, kind: ModeKind) -> FormMode {
        renderer_for(kind).form(&self.tables)
    }

    /// Resolve a mode by canonical name or short alias.
    pub fn resolve(&self, name: &str) -> Option<ModeKind> {
        crate::get_mode(name, &self.tables).map(|m| m.kind)
    }

    /// Validate required fields and render. `today` is the date printed on
    /// dated documents.
    pub fn submit(&self, kind: ModeKind, fields: &FieldSet, today: NaiveDate) -> RenderResult {
        let form = self.form(kind);
        let missing = form.missing_required(fields);
        if !missing.is_empty() {
            tracing::warn!(mode = %kind, missing = ?missing, "submission missing required input");
            return RenderResult::Notice(MissingRequiredInput::new(kind, missing));
        }

        let ctx = RenderContext {
            tables: &self.tables,
            court: &self.court,
            today,
        };
        let result = renderer_for(kind).render(fields, &ctx);
        tracing::info!(mode = %kind, rendered = result.is_rendered(), "submission handled");
        result
    }

    /// `submit` dated with the local calendar date.
    pub fn submit_today(&self, kind: ModeKind, fields: &FieldSet) -> RenderResult {
        self.submit(kind, fields, chrono::Local::now().date_naive())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::builtin()
    }
}
