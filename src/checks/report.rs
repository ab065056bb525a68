//! Compliance report types

use serde::Serialize;

/// Result of every check for one document
///
/// Field names are the report keys rendered in the HTML page and the JSON API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub font_name_issues: Vec<String>,
    pub font_size_issues: Vec<String>,
    pub table_font_issues: Vec<String>,
    pub orientation_issues: Vec<String>,
    pub toc_check: TocCheck,
    pub margin_errors: Vec<String>,
    pub margin_warnings: Vec<String>,
    pub header_footer_errors: Vec<String>,
    pub internal_link_issues: Vec<String>,
    pub external_link_issues: Vec<String>,
}

impl Report {
    /// Issue lists with their report keys, in display order
    pub fn issue_lists(&self) -> [(&'static str, &[String]); 9] {
        [
            ("font_name_issues", self.font_name_issues.as_slice()),
            ("font_size_issues", self.font_size_issues.as_slice()),
            ("table_font_issues", self.table_font_issues.as_slice()),
            ("orientation_issues", self.orientation_issues.as_slice()),
            ("margin_errors", self.margin_errors.as_slice()),
            ("margin_warnings", self.margin_warnings.as_slice()),
            ("header_footer_errors", self.header_footer_errors.as_slice()),
            ("internal_link_issues", self.internal_link_issues.as_slice()),
            ("external_link_issues", self.external_link_issues.as_slice()),
        ]
    }

    /// Number of issue strings plus broken TOC links
    pub fn issue_count(&self) -> usize {
        let lists: usize = self.issue_lists().iter().map(|(_, list)| list.len()).sum();
        let toc = match &self.toc_check {
            TocCheck::Summary(summary) => summary.broken_links,
            TocCheck::Failed { .. } => 1,
        };
        lists + toc
    }
}

/// TOC reconciliation outcome: a summary, or the reason it could not run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TocCheck {
    Summary(TocSummary),
    Failed { error: String },
}

impl Default for TocCheck {
    fn default() -> Self {
        TocCheck::Summary(TocSummary::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TocSummary {
    pub toc_present: bool,
    pub total_links_in_toc: usize,
    pub valid_links: usize,
    pub broken_links: usize,
    pub broken_anchor_ids: Vec<String>,
}
