use std::fmt::Write;

use crate::types::{ModeKind, Report, Section, SectionBody, Tone};

impl Report {
    pub fn new(mode: ModeKind, icon: &str, banner: &str) -> Self {
        Self {
            mode,
            icon: icon.into(),
            banner: banner.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, icon: &str, title: &str, body: SectionBody) -> Self {
        self.sections.push(Section {
            icon: icon.into(),
            title: title.into(),
            body,
        });
        self
    }

    pub fn get_section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Flatten the report into the markdown display string.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.icon, self.banner);
        for section in &self.sections {
            let _ = writeln!(out, "\n### {} {}\n", section.icon, section.title);
            write_body(&mut out, &section.body);
        }
        out
    }
}

fn write_body(out: &mut String, body: &SectionBody) {
    match body {
        SectionBody::Document(text) => {
            let _ = writeln!(out, "{text}");
        }
        SectionBody::Callouts { label, items, .. } => {
            for (i, item) in items.iter().enumerate() {
                match label {
                    Some(label) => {
                        let _ = writeln!(out, "> **{label} {}:** {item}", i + 1);
                    }
                    None => {
                        let _ = writeln!(out, "> {item}");
                    }
                }
            }
        }
        SectionBody::Bullets(items) => {
            for item in items {
                let _ = writeln!(out, "• {item}");
            }
        }
        SectionBody::Numbered(items) => {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "**{}.** {item}", i + 1);
            }
        }
        SectionBody::Note { tone, text } => {
            let prefix = match tone {
                Tone::Warning => "⚠ ",
                _ => "",
            };
            let _ = writeln!(out, "{prefix}{text}");
        }
    }
}

impl SectionBody {
    /// Item texts in display order; a document or note yields its single text.
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Document(text) | Self::Note { text, .. } => vec![text.as_str()],
            Self::Callouts { items, .. } | Self::Bullets(items) | Self::Numbered(items) => {
                items.iter().map(String::as_str).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::new(ModeKind::CaseStrategy, "🎯", "Strategy Generated!")
            .section(
                "📊",
                "Recommended Arguments",
                SectionBody::Numbered(vec!["first".into(), "second".into()]),
            )
            .section(
                "🎯",
                "Counter",
                SectionBody::Callouts {
                    tone: Tone::Argument,
                    label: Some("Argument".into()),
                    items: vec!["one".into()],
                },
            )
    }

    #[test]
    fn test_markdown_starts_with_banner() {
        let md = sample().to_markdown();
        assert!(md.starts_with("🎯 Strategy Generated!\n"));
    }

    #[test]
    fn test_markdown_numbers_items_from_one() {
        let md = sample().to_markdown();
        assert!(md.contains("### 📊 Recommended Arguments"));
        assert!(md.contains("**1.** first\n**2.** second\n"));
    }

    #[test]
    fn test_markdown_labels_callouts() {
        let md = sample().to_markdown();
        assert!(md.contains("> **Argument 1:** one"));
    }

    #[test]
    fn test_get_section_by_title() {
        let report = sample();
        let section = report.get_section("Counter").unwrap();
        assert_eq!(section.body.items(), vec!["one"]);
        assert!(report.get_section("Missing").is_none());
    }
}
