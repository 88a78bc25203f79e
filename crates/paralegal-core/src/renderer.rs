use chrono::NaiveDate;

use crate::tables::LookupTables;
use crate::types::{CourtProfile, FieldSet, FormMode, ModeKind, RenderResult};

/// Everything a renderer may read besides the submitted fields.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub tables: &'a LookupTables,
    pub court: &'a CourtProfile,
    /// Date printed on dated documents.
    pub today: NaiveDate,
}

pub trait Renderer: Send + Sync {
    fn kind(&self) -> ModeKind;

    /// The form this renderer consumes. Select options come from `tables`.
    fn form(&self, tables: &LookupTables) -> FormMode;

    /// Render `fields`. Must never fail on optional fields; empty required
    /// fields yield `RenderResult::Notice`.
    fn render(&self, fields: &FieldSet, ctx: &RenderContext<'_>) -> RenderResult;
}
