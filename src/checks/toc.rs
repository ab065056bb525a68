//! Table of contents link reconciliation
//!
//! Word TOC entries are hyperlinks to `_Toc…` bookmarks. An entry whose
//! bookmark no longer exists (heading deleted, TOC not refreshed) is broken.

use std::collections::HashSet;

use super::report::{TocCheck, TocSummary};
use crate::docx::{bookmark_names, hyperlinks, DocxArchive};

/// Reconcile TOC anchors against bookmarks in the main document part
///
/// Archive or XML failures degrade to [`TocCheck::Failed`] instead of
/// aborting the report.
pub fn check_toc_links(archive: &DocxArchive) -> TocCheck {
    let root = match archive.main_document() {
        Ok(root) => root,
        Err(e) => {
            tracing::warn!(error = %e, "TOC check could not parse the main document part");
            return TocCheck::Failed {
                error: format!("TOC parsing error: {}", e),
            };
        }
    };

    let anchors: Vec<String> = hyperlinks(&root)
        .into_iter()
        .filter(|link| link.is_toc())
        .filter_map(|link| link.anchor)
        .collect();
    let bookmarks = bookmark_names(&root);

    let summary = reconcile(&anchors, &bookmarks);
    tracing::debug!(
        total = summary.total_links_in_toc,
        broken = summary.broken_links,
        "TOC links reconciled"
    );

    TocCheck::Summary(summary)
}

/// Anchors missing from `bookmarks`, with order and duplicates preserved
pub fn reconcile(anchors: &[String], bookmarks: &HashSet<String>) -> TocSummary {
    let broken: Vec<String> = anchors
        .iter()
        .filter(|anchor| !bookmarks.contains(anchor.as_str()))
        .cloned()
        .collect();

    TocSummary {
        toc_present: !anchors.is_empty(),
        total_links_in_toc: anchors.len(),
        valid_links: anchors.len() - broken.len(),
        broken_links: broken.len(),
        broken_anchor_ids: broken,
    }
}
