//! Formatting compliance checks
//!
//! Each check is an independent function over the typed [`Document`] or the
//! raw [`DocxArchive`]; none reads another's output.
//!
//! - [`fonts`]: body font family/size, table font size
//! - [`layout`]: orientation, margins, header/footer distance
//! - [`toc`]: TOC anchors against bookmarks
//! - [`links`]: internal link labels, external link reachability

pub mod fonts;
pub mod layout;
pub mod links;
pub mod report;
pub mod toc;

pub use links::{ExternalTarget, HttpLinkProbe, LinkProbe};
pub use report::{Report, TocCheck, TocSummary};

use crate::docx::{Document, DocxArchive, DocxResult};

/// Outcome of the offline checks
pub struct Inspection {
    /// Report with every field filled except `external_link_issues`
    pub report: Report,
    /// External links still to be probed
    pub external_targets: Vec<ExternalTarget>,
}

/// Run every check that does not need the network
pub fn inspect(archive: &DocxArchive, document: &Document) -> DocxResult<Inspection> {
    let root = archive.main_document()?;

    let fonts = fonts::check_fonts(document);
    let margins = layout::check_margins(document);

    let report = Report {
        font_name_issues: fonts.name_issues,
        font_size_issues: fonts.size_issues,
        table_font_issues: fonts::check_table_fonts(document),
        orientation_issues: layout::check_orientation(document),
        toc_check: toc::check_toc_links(archive),
        margin_errors: margins.errors,
        margin_warnings: margins.warnings,
        header_footer_errors: layout::check_header_footer_distance(document),
        internal_link_issues: links::check_internal_links(&root, document),
        external_link_issues: Vec::new(),
    };

    Ok(Inspection {
        report,
        external_targets: links::collect_external_targets(&root, archive),
    })
}

impl Inspection {
    /// Probe the collected external links and complete the report
    pub async fn finish(self, probe: &dyn LinkProbe) -> Report {
        let Inspection {
            mut report,
            external_targets,
        } = self;
        report.external_link_issues = links::check_external_links(&external_targets, probe).await;
        report
    }
}
