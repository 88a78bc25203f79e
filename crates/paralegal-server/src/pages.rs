//! Server-rendered HTML pages.
//!
//! One page per mode: sidebar selector, the mode's form (submitted values
//! kept), and the result area below it.

use std::fmt::Write;

use paralegal_core::types::{
    Column, ControlKind, FieldSet, FieldSpec, FormMode, RenderResult, Report, SectionBody, Tone,
};

const DISCLAIMER: &str = "Disclaimer: This is a demonstration tool. Always consult with a \
    qualified legal practitioner for actual legal advice.";

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full page for `form`, with `result` shown under the form when present.
pub fn mode_page(
    title: &str,
    modes: &[FormMode],
    form: &FormMode,
    fields: &FieldSet,
    result: Option<&RenderResult>,
) -> String {
    let nav = nav_html(modes, form);
    let form_html = form_html(form, fields);
    let result_html = match result {
        Some(RenderResult::Rendered(report)) => report_html(report),
        Some(RenderResult::Notice(notice)) => format!(
            r#"<div class="alert warning">{}</div>"#,
            escape(&notice.message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <aside class="sidebar">
        <h2>Navigation</h2>
        <p class="hint">Choose a service:</p>
{nav}
    </aside>
    <main>
        <div class="main-header">⚖️ {title}</div>
        <div class="section-header">{icon} {heading}</div>
{form_html}
        <section id="output" class="output">
{result_html}
        </section>
        <hr>
        <footer><em>{disclaimer}</em></footer>
    </main>
</body>
</html>"#,
        title = escape(title),
        css = CSS,
        icon = form.icon,
        heading = escape(&form.heading),
        disclaimer = DISCLAIMER,
    )
}

fn nav_html(modes: &[FormMode], current: &FormMode) -> String {
    let mut out = String::from("        <nav>\n");
    for mode in modes {
        let class = if mode.kind == current.kind {
            r#" class="active""#
        } else {
            ""
        };
        let _ = writeln!(
            out,
            r#"            <a href="/modes/{}"{class}>{}</a>"#,
            mode.name,
            escape(&mode.label)
        );
    }
    out.push_str("        </nav>");
    out
}

fn form_html(form: &FormMode, fields: &FieldSet) -> String {
    let controls = |column: Column| -> String {
        form.fields
            .iter()
            .filter(|f| f.column == column)
            .map(|f| control_html(f, fields.get(&f.name)))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let columns = if form.has_two_columns() {
        format!(
            "<div class=\"columns\">\n<div class=\"col\">\n{}\n</div>\n<div class=\"col\">\n{}\n</div>\n</div>",
            controls(Column::Left),
            controls(Column::Right)
        )
    } else {
        controls(Column::Left)
    };
    format!(
        r#"        <form method="post" action="/modes/{name}">
{columns}
            <button type="submit">{submit}</button>
        </form>"#,
        name = form.name,
        submit = escape(&form.submit_label),
    )
}

fn control_html(field: &FieldSpec, value: &str) -> String {
    let id = &field.name;
    let label = escape(&field.label);
    let required = if field.required { " required" } else { "" };
    let placeholder = if field.placeholder.is_empty() {
        String::new()
    } else {
        format!(r#" placeholder="{}""#, escape(&field.placeholder))
    };
    let control = match field.kind {
        ControlKind::Text => format!(
            r#"<input type="text" id="{id}" name="{id}" value="{}"{placeholder}{required}>"#,
            escape(value)
        ),
        ControlKind::TextArea => {
            let style = field
                .height
                .map(|h| format!(r#" style="height: {h}px""#))
                .unwrap_or_default();
            format!(
                r#"<textarea id="{id}" name="{id}"{style}{placeholder}{required}>{}</textarea>"#,
                escape(value)
            )
        }
        ControlKind::Select => {
            let mut options = String::new();
            for option in &field.options {
                let selected = if option == value { " selected" } else { "" };
                let option = escape(option);
                let _ = write!(options, r#"<option value="{option}"{selected}>{option}</option>"#);
            }
            format!(r#"<select id="{id}" name="{id}">{options}</select>"#)
        }
    };
    format!(
        r#"            <div class="field"><label for="{id}">{label}</label>{control}</div>"#
    )
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "alert success",
        Tone::Info => "alert info",
        Tone::Warning => "alert warning",
        Tone::Argument => "argument-box",
        Tone::Loophole => "loophole-alert",
    }
}

pub(crate) fn report_html(report: &Report) -> String {
    let mut out = format!(
        r#"<div class="{}">{} {}</div>"#,
        tone_class(Tone::Success),
        report.icon,
        escape(&report.banner)
    );
    for section in &report.sections {
        let _ = write!(
            out,
            "\n<h3>{} {}</h3>\n",
            section.icon,
            escape(&section.title)
        );
        match &section.body {
            SectionBody::Document(text) => {
                let _ = write!(out, r#"<div class="document">{}</div>"#, escape(text));
            }
            SectionBody::Callouts { tone, label, items } => {
                for (i, item) in items.iter().enumerate() {
                    let prefix = label
                        .as_ref()
                        .map(|l| format!("<strong>{} {}:</strong> ", escape(l), i + 1))
                        .unwrap_or_default();
                    let _ = writeln!(
                        out,
                        r#"<div class="{}">{prefix}{}</div>"#,
                        tone_class(*tone),
                        escape(item)
                    );
                }
            }
            SectionBody::Bullets(items) => {
                out.push_str("<ul>");
                for item in items {
                    let _ = write!(out, "<li>{}</li>", escape(item));
                }
                out.push_str("</ul>");
            }
            SectionBody::Numbered(items) => {
                out.push_str("<ol>");
                for item in items {
                    let _ = write!(out, "<li>{}</li>", escape(item));
                }
                out.push_str("</ol>");
            }
            SectionBody::Note { tone, text } => {
                let _ = write!(out, r#"<div class="{}">{}</div>"#, tone_class(*tone), escape(text));
            }
        }
    }
    out
}

const CSS: &str = r#"
        * { box-sizing: border-box; }
        body { font-family: system-ui, sans-serif; margin: 0; display: flex; min-height: 100vh; }
        .sidebar { width: 240px; background: #f0f2f6; padding: 1.5rem 1rem; }
        .sidebar nav a { display: block; padding: 0.5rem 0.75rem; margin: 0.25rem 0; border-radius: 6px; color: #1f3d7a; text-decoration: none; }
        .sidebar nav a.active { background: #2c5aa0; color: #fff; }
        .hint { color: #555; font-size: 0.9rem; }
        main { flex: 1; padding: 2rem 3rem; max-width: 1200px; }
        .main-header { font-size: 2.5rem; color: #1f3d7a; text-align: center; margin-bottom: 2rem; }
        .section-header { font-size: 1.5rem; color: #2c5aa0; margin-top: 2rem; margin-bottom: 1rem; }
        .columns { display: flex; gap: 2rem; }
        .col { flex: 1; }
        .field { display: flex; flex-direction: column; margin-bottom: 1rem; }
        .field label { font-size: 0.9rem; margin-bottom: 0.25rem; }
        input, textarea, select { font: inherit; padding: 0.5rem; border: 1px solid #ccc; border-radius: 6px; }
        textarea { min-height: 80px; resize: vertical; }
        button { font: inherit; padding: 0.5rem 1.25rem; border: 1px solid #2c5aa0; border-radius: 6px; background: #fff; color: #2c5aa0; cursor: pointer; }
        button:hover { background: #2c5aa0; color: #fff; }
        .output { margin-top: 2rem; }
        .document { white-space: pre-wrap; font-family: Georgia, serif; background: #fafafa; padding: 1rem; border: 1px solid #eee; }
        .argument-box { background-color: #f0f2f6; padding: 1rem; border-radius: 10px; margin: 0.5rem 0; border-left: 4px solid #2c5aa0; }
        .loophole-alert { background-color: #fff3cd; padding: 1rem; border-radius: 10px; border-left: 4px solid #ffc107; margin: 0.5rem 0; }
        .alert { padding: 1rem; border-radius: 6px; margin: 0.5rem 0; }
        .alert.success { background: #d4edda; color: #155724; }
        .alert.info { background: #d1ecf1; color: #0c5460; }
        .alert.warning { background: #fff3cd; color: #856404; }
        footer { color: #666; font-size: 0.9rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Moyo" & 'Chuma'</b>"#),
            "&lt;b&gt;&quot;Moyo&quot; &amp; &#39;Chuma&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_select_keeps_submitted_choice() {
        let field = FieldSpec {
            name: "case_type".into(),
            label: "Case Type".into(),
            kind: ControlKind::Select,
            options: vec!["Employment".into(), "Family Law".into()],
            ..Default::default()
        };
        let html = control_html(&field, "Family Law");
        assert!(html.contains(r#"<option value="Family Law" selected>"#));
        assert!(html.contains(r#"<option value="Employment">"#));
    }

    #[test]
    fn test_textarea_height_and_required() {
        let field = FieldSpec {
            name: "contract_text".into(),
            kind: ControlKind::TextArea,
            required: true,
            height: Some(200),
            ..Default::default()
        };
        let html = control_html(&field, "a < b");
        assert!(html.contains(r#"style="height: 200px""#));
        assert!(html.contains(" required>a &lt; b</textarea>"));
    }
}
