//! HTML rendering
//!
//! Server-rendered pages for the browser flow:
//! - upload form served at `/`
//! - report page returned by `/upload`
//!
//! All document-derived text is escaped with `html-escape`.

mod pages;

pub use pages::{render_report, render_upload_form};
