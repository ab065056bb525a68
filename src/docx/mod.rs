//! Docx reading
//!
//! Opens the ZIP container, parses WordprocessingML parts with quick-xml and
//! exposes:
//! - [`Document`]: typed view of body paragraphs, tables and sections
//! - [`hyperlinks`], [`bookmark_names`], [`Relationships`]: link inventory
//!   used by the TOC and link checks

mod archive;
mod error;
mod links;
mod model;
mod parser;
pub mod xml;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::{DocxArchive, DEFAULT_MAX_PART_BYTES, MAIN_PART, MAIN_RELS_PART};
pub use error::{DocxError, DocxResult};
pub use links::{
    bookmark_names, hyperlinks, HyperlinkRef, Relationship, Relationships, TOC_ANCHOR_PREFIX,
};
pub use model::{
    Document, Margins, Orientation, Paragraph, RunStyle, SectionLayout, Side, Table, TableCell,
    TableRow, TWIPS_PER_INCH,
};
pub use xml::XmlElement;
