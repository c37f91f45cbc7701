//! Score report template.
//!
//! Builds the pandoc markdown for a single-page report: title, client,
//! timestamp, chart (or a notice when it cannot be embedded) and the score
//! table with one colour swatch per category.

use crate::domain::wheel::swatch;
use crate::ports::ScoreReport;

/// Report title.
pub const REPORT_TITLE: &str = "Wheel of Life Results";

/// Shown in place of a chart that failed to decode.
pub const CHART_FALLBACK: &str = "Chart image could not be embedded.";

/// How the chart appears in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPlacement<'a> {
    /// No chart section at all.
    Omitted,
    /// Embed the image at this path, relative to the pandoc resource path.
    Embedded(&'a str),
    /// Show the fallback notice.
    Failed,
}

/// Markdown template for score reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportTemplate;

impl ReportTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Renders the report body as pandoc markdown.
    pub fn render(&self, report: &ScoreReport, chart: ChartPlacement<'_>) -> String {
        let mut doc = String::new();
        doc.push_str("---\npagestyle: empty\n---\n\n");
        doc.push_str(&format!("# {}\n\n", REPORT_TITLE));

        if let Some(name) = &report.client_name {
            doc.push_str(&format!("**Client:** {}\n\n", escape_markdown(name)));
        }
        doc.push_str(&format!("{}\n\n", report.generated_at.to_display_string()));

        match chart {
            ChartPlacement::Omitted => {}
            ChartPlacement::Embedded(path) => {
                doc.push_str(&format!("![]({}){{width=100%}}\n\n", path));
            }
            ChartPlacement::Failed => {
                doc.push_str(&format!("\\textcolor{{red}}{{{}}}\n\n", CHART_FALLBACK));
            }
        }

        doc.push_str("## Scores\n\n");
        for (i, (label, score)) in report.rows().enumerate() {
            doc.push_str(&format!(
                "| \\colorbox[HTML]{{{}}}{{\\strut\\hspace{{0.8em}}}} {}: {}\n",
                swatch(i).hex(),
                escape_markdown(label),
                score
            ));
        }
        doc.push('\n');
        doc
    }
}

fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '[' | ']' | '#' | '`' | '<' | '>' | '|' | '$' | '^' | '~') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Score, Timestamp};
    use crate::ports::ChartAttachment;
    use chrono::{TimeZone, Utc};

    fn report(client: Option<&str>) -> ScoreReport {
        ScoreReport {
            client_name: client.map(str::to_string),
            generated_at: Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
            categories: vec!["Health".into(), "Work & career".into()],
            values: vec![Score::new(3).unwrap(), Score::new(7).unwrap()],
            chart: ChartAttachment::Missing,
        }
    }

    #[test]
    fn includes_title_timestamp_and_scores() {
        let md = ReportTemplate::new().render(&report(None), ChartPlacement::Omitted);
        assert!(md.contains("# Wheel of Life Results"));
        assert!(md.contains("2024-05-01 08:00 UTC"));
        assert!(md.contains("## Scores"));
        assert!(md.contains("Health: 3"));
        assert!(md.contains("Work & career: 7"));
        assert!(!md.contains("Client:"));
    }

    #[test]
    fn client_line_only_when_named() {
        let md = ReportTemplate::new().render(&report(Some("Ada")), ChartPlacement::Omitted);
        assert!(md.contains("**Client:** Ada"));
    }

    #[test]
    fn one_swatch_per_category_in_palette_order() {
        let md = ReportTemplate::new().render(&report(None), ChartPlacement::Omitted);
        assert_eq!(md.matches("\\colorbox").count(), 2);
        assert!(md.contains(&format!("\\colorbox[HTML]{{{}}}", swatch(0).hex())));
        assert!(md.contains(&format!("\\colorbox[HTML]{{{}}}", swatch(1).hex())));
    }

    #[test]
    fn chart_placement_variants() {
        let template = ReportTemplate::new();
        let embedded = template.render(&report(None), ChartPlacement::Embedded("chart.png"));
        assert!(embedded.contains("![](chart.png){width=100%}"));

        let failed = template.render(&report(None), ChartPlacement::Failed);
        assert!(failed.contains(CHART_FALLBACK));
        assert!(!failed.contains("!["));
    }

    #[test]
    fn markdown_specials_are_escaped() {
        assert_eq!(escape_markdown("a_b*c"), "a\\_b\\*c");
        assert_eq!(escape_markdown("Plain & simple"), "Plain & simple");
    }
}
