//! Upload handling
//!
//! - [`filename`]: extension gate and display-name sanitising
//! - [`staging`]: request-scoped temporary file for the uploaded bytes

pub mod filename;
pub mod staging;

pub use filename::{display_name, has_docx_extension, secure_filename};
pub use staging::StagedUpload;
