//! Hyperlinks, bookmarks and relationships of the main document part

use std::collections::{HashMap, HashSet};

use super::archive::{DocxArchive, MAIN_RELS_PART};
use super::error::DocxResult;
use super::xml::{XmlElement, PACKAGE_RELS_NS, R_NS, W_NS};

/// Anchor prefix Word generates for table-of-contents entries
pub const TOC_ANCHOR_PREFIX: &str = "_Toc";

/// A `w:hyperlink` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkRef {
    /// Internal bookmark target (`w:anchor`)
    pub anchor: Option<String>,
    /// External target indirection (`r:id`)
    pub relationship_id: Option<String>,
    /// Concatenated `w:t` text, untrimmed
    pub text: String,
}

impl HyperlinkRef {
    pub fn is_toc(&self) -> bool {
        self.anchor
            .as_deref()
            .is_some_and(|anchor| anchor.starts_with(TOC_ANCHOR_PREFIX))
    }
}

/// Every hyperlink below `root`, in document order
pub fn hyperlinks(root: &XmlElement) -> Vec<HyperlinkRef> {
    root.descendants_named(W_NS, "hyperlink")
        .map(|link| HyperlinkRef {
            anchor: link
                .attr(W_NS, "anchor")
                .filter(|a| !a.is_empty())
                .map(str::to_string),
            relationship_id: link
                .attr(R_NS, "id")
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            text: link
                .descendants_named(W_NS, "t")
                .map(|t| t.text())
                .collect(),
        })
        .collect()
}

/// Names of every `w:bookmarkStart` below `root`
pub fn bookmark_names(root: &XmlElement) -> HashSet<String> {
    root.descendants_named(W_NS, "bookmarkStart")
        .filter_map(|b| b.attr(W_NS, "name"))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub target: String,
}

/// Relationship table of a part, keyed by `Id`
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    by_id: HashMap<String, Relationship>,
}

impl Relationships {
    pub fn parse(root: &XmlElement) -> Self {
        let by_id = root
            .children_named(PACKAGE_RELS_NS, "Relationship")
            .filter_map(|rel| {
                let id = rel.plain_attr("Id")?;
                let target = rel.plain_attr("Target")?;
                Some((
                    id.to_string(),
                    Relationship {
                        target: target.to_string(),
                    },
                ))
            })
            .collect();

        Self { by_id }
    }

    /// Read and parse `word/_rels/document.xml.rels`
    pub fn from_archive(archive: &DocxArchive) -> DocxResult<Self> {
        Ok(Self::parse(&archive.parse_part(MAIN_RELS_PART)?))
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }
}
