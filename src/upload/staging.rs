//! Request-scoped staging of uploaded documents
//!
//! The upload is written to a uniquely named temporary file in the upload
//! directory. The file is removed when the [`StagedUpload`] is dropped, so
//! every exit path of a request cleans up after itself and concurrent uploads
//! of the same client filename never share a path.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    pub fn stage(dir: &Path, data: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(".docx")
            .tempfile_in(dir)?;
        file.write_all(data)?;
        file.flush()?;

        tracing::debug!(path = %file.path().display(), bytes = data.len(), "Staged upload");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
