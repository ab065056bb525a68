//! Docx container access
//!
//! A `.docx` file is a ZIP archive of XML parts. The archive bytes are kept in
//! memory for the duration of one request and parts are read on demand.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use super::error::{DocxError, DocxResult};
use super::xml::XmlElement;

/// Main document part
pub const MAIN_PART: &str = "word/document.xml";

/// Relationships of the main document part (hyperlink targets live here)
pub const MAIN_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Default cap on the uncompressed size of a single part
pub const DEFAULT_MAX_PART_BYTES: u64 = 64 * 1024 * 1024;

/// An opened docx container
pub struct DocxArchive {
    bytes: Vec<u8>,
    max_part_bytes: u64,
}

impl DocxArchive {
    /// Open a docx file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> DocxResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Open a docx container held in memory
    ///
    /// Fails if the bytes are not a readable ZIP archive.
    pub fn from_bytes(bytes: Vec<u8>) -> DocxResult<Self> {
        ZipArchive::new(Cursor::new(bytes.as_slice()))?;
        Ok(Self {
            bytes,
            max_part_bytes: DEFAULT_MAX_PART_BYTES,
        })
    }

    /// Cap the number of bytes any single part may inflate to
    pub fn with_max_part_bytes(mut self, limit: u64) -> Self {
        self.max_part_bytes = limit;
        self
    }

    /// Raw bytes of a part
    ///
    /// The declared size in the ZIP header is not trusted; reading stops one
    /// byte past the limit.
    pub fn read_part(&self, name: &str) -> DocxResult<Vec<u8>> {
        let mut archive = ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        let mut file = archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => DocxError::MissingPart(name.to_string()),
            other => DocxError::Archive(other),
        })?;

        let limit = self.max_part_bytes;
        let mut content = Vec::new();
        file.by_ref().take(limit.saturating_add(1)).read_to_end(&mut content)?;
        if content.len() as u64 > limit {
            return Err(DocxError::PartTooLarge {
                name: name.to_string(),
                limit,
            });
        }
        Ok(content)
    }

    /// Parse a part into an element tree
    pub fn parse_part(&self, name: &str) -> DocxResult<XmlElement> {
        XmlElement::parse(&self.read_part(name)?)
    }

    /// Parse `word/document.xml`
    pub fn main_document(&self) -> DocxResult<XmlElement> {
        self.parse_part(MAIN_PART)
    }
}
