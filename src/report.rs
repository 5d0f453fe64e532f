//! Sectioned plain-text reports.
//!
//! A report is an owned value: callers add sections and render it once.

/// Builds a report from `(header, content)` sections.
///
/// Each section renders as the header line, the content, then the separator
/// line, e.g. a "Tags" header followed by the tag list and `------------`.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    separator: String,
    sections: Vec<(String, String)>,
}

impl ReportBuilder {
    pub fn new(separator: impl Into<String>) -> Self {
        ReportBuilder {
            separator: separator.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section
    pub fn add(&mut self, header: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.sections.push((header.into(), content.into()));
        self
    }

    /// Append a section listing `items` one per line, or `empty` when there
    /// are none
    pub fn add_list<S: AsRef<str>>(
        &mut self,
        header: impl Into<String>,
        items: &[S],
        empty: &str,
    ) -> &mut Self {
        let content = if items.is_empty() {
            empty.to_string()
        } else {
            items
                .iter()
                .map(|item| format!("  {}", item.as_ref()))
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.add(header, content)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn render(&self) -> String {
        let capacity = self
            .sections
            .iter()
            .map(|(h, c)| h.len() + c.len() + self.separator.len() + 3)
            .sum();
        let mut out = String::with_capacity(capacity);

        for (header, content) in &self.sections {
            out.push_str(header);
            out.push('\n');
            out.push_str(content);
            out.push('\n');
            out.push_str(&self.separator);
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = ReportBuilder::new("---");
        assert!(report.is_empty());
        assert_eq!(report.render(), "");
    }

    #[test]
    fn test_sections_render_in_order() {
        let mut report = ReportBuilder::new("---");
        report.add("Target", "v1.2.3").add("Aliases", "v1.2");

        assert_eq!(report.render(), "Target\nv1.2.3\n---\nAliases\nv1.2\n---\n");
    }

    #[test]
    fn test_add_list() {
        let mut report = ReportBuilder::new("");
        report.add_list("Ignored", &["latest", "main"], "none");
        let none: [&str; 0] = [];
        report.add_list("Aliases", &none, "none");

        assert_eq!(
            report.render(),
            "Ignored\n  latest\n  main\n\nAliases\nnone\n\n"
        );
    }

    #[test]
    fn test_reports_are_independent() {
        let mut a = ReportBuilder::new("-");
        let mut b = ReportBuilder::new("-");
        a.add("A", "1");
        b.add("B", "2");
        assert!(!a.render().contains('B'));
        assert!(!b.render().contains('A'));
    }
}
