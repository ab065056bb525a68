//! Typed view of a Word document
//!
//! Produced once when the document is opened. Checks read these values and
//! never touch the underlying XML.

use serde::Serialize;

use super::archive::DocxArchive;
use super::error::DocxResult;
use super::parser;

/// Twentieths of a point per inch (`w:pgMar` unit)
pub const TWIPS_PER_INCH: f64 = 1440.0;

/// Explicit formatting of a run. `None` means inherited from the style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStyle {
    pub font_name: Option<String>,
    pub font_size_pt: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    /// Plain text of the direct runs and hyperlink runs
    pub text: String,
    /// Direct runs, in order
    pub runs: Vec<RunStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Every run of the table in row, cell, paragraph order
    pub fn runs(&self) -> impl Iterator<Item = &RunStyle> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.paragraphs.iter())
            .flat_map(|paragraph| paragraph.runs.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Interpret `w:pgSz/@w:orient`. Absent means portrait; an unknown value
    /// cannot be interpreted.
    pub fn from_attr(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("portrait") => Some(Orientation::Portrait),
            Some("landscape") => Some(Orientation::Landscape),
            Some(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Bottom => "Bottom",
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl Margins {
    pub fn uniform(inches: f64) -> Self {
        Self {
            top: Some(inches),
            bottom: Some(inches),
            left: Some(inches),
            right: Some(inches),
        }
    }

    pub fn sides(&self) -> [(Side, Option<f64>); 4] {
        [
            (Side::Top, self.top),
            (Side::Bottom, self.bottom),
            (Side::Left, self.left),
            (Side::Right, self.right),
        ]
    }
}

/// Page layout of one section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    /// `None` when the orientation value cannot be interpreted
    pub orientation: Option<Orientation>,
    pub margins: Margins,
    pub header_distance_in: Option<f64>,
    pub footer_distance_in: Option<f64>,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            orientation: Some(Orientation::Portrait),
            margins: Margins::default(),
            header_distance_in: None,
            footer_distance_in: None,
        }
    }
}

/// Body content and page layout of an opened document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<Table>,
    pub sections: Vec<SectionLayout>,
}

impl Document {
    /// Build the typed view from the archive's main part
    pub fn open(archive: &DocxArchive) -> DocxResult<Self> {
        let root = archive.main_document()?;
        parser::parse_document(&root)
    }

    /// Space-joined text of all body paragraphs, lowercased
    pub fn full_text_lowercase(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
