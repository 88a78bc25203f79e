pub mod contract;
pub mod dispatch;
pub mod motion;
pub mod strategy;

pub use dispatch::{renderer_for, Dispatcher};

use paralegal_core::tables::LookupTables;
use paralegal_core::types::{Column, ControlKind, FieldSpec, FormMode};

/// Return all built-in form modes, in selector order.
pub fn all_modes(tables: &LookupTables) -> Vec<FormMode> {
    vec![
        motion::motion_mode(tables),
        contract::contract_mode(),
        strategy::strategy_mode(tables),
    ]
}

/// Look up a built-in mode by name (with short aliases).
pub fn get_mode(name: &str, tables: &LookupTables) -> Option<FormMode> {
    match name {
        "motion" => get_mode("motion_writer", tables),
        "contract" => get_mode("contract_analyzer", tables),
        "strategy" => get_mode("case_strategy", tables),
        _ => all_modes(tables).into_iter().find(|m| m.name == name),
    }
}

// ── Shared field builders ────────────────────────────────────────────────

/// Single-line text input.
pub(crate) fn text_field(name: &str, label: &str) -> FieldSpec {
    FieldSpec {
        name: name.into(),
        label: label.into(),
        kind: ControlKind::Text,
        ..Default::default()
    }
}

/// Multi-line text area with an optional placeholder.
pub(crate) fn area_field(name: &str, label: &str, placeholder: &str) -> FieldSpec {
    FieldSpec {
        name: name.into(),
        label: label.into(),
        kind: ControlKind::TextArea,
        placeholder: placeholder.into(),
        ..Default::default()
    }
}

/// Single-select over `options`, in the given order.
pub(crate) fn select_field<'a>(
    name: &str,
    label: &str,
    options: impl Iterator<Item = &'a str>,
) -> FieldSpec {
    FieldSpec {
        name: name.into(),
        label: label.into(),
        kind: ControlKind::Select,
        options: options.map(str::to_string).collect(),
        ..Default::default()
    }
}

/// Move a field into the right-hand column.
pub(crate) fn right(field: FieldSpec) -> FieldSpec {
    FieldSpec {
        column: Column::Right,
        ..field
    }
}
