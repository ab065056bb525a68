//! Docx reader error types

use thiserror::Error;

/// Errors raised while opening a docx container or reading its XML parts
#[derive(Debug, Error)]
pub enum DocxError {
    /// The upload is not a readable ZIP container
    #[error("File is not a valid docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A required part is absent from the container
    #[error("There is no item named '{0}' in the archive")]
    MissingPart(String),

    /// A part inflates past the configured limit
    #[error("Part '{name}' exceeds the {limit} byte limit")]
    PartTooLarge { name: String, limit: u64 },

    /// Low-level XML syntax error
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed XML that does not have the expected shape
    #[error("Malformed XML: {0}")]
    Malformed(String),

    /// The main part is not a WordprocessingML document
    #[error("Not a Word document: {0}")]
    NotWordprocessing(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for docx operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;
