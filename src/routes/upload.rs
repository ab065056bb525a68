//! Upload Routes
//!
//! Endpoints:
//! - GET / - Upload form
//! - POST /upload - Check a document, HTML report
//! - POST /api/v1/check - Check a document, JSON report
//!
//! Both POST endpoints take a multipart body with the document in the `file`
//! field. The extension is checked before the body of the field is read.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::checks::{self, Inspection, Report};
use crate::docx::{Document, DocxArchive};
use crate::error::{AppError, Result};
use crate::html;
use crate::state::AppState;
use crate::upload::{display_name, has_docx_extension, StagedUpload};

/// Name of the multipart field carrying the document
const FILE_FIELD: &str = "file";

// ============================================================================
// Router
// ============================================================================

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(upload_form))
        .route("/upload", post(upload))
        .route("/api/v1/check", post(check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
async fn upload_form() -> Html<String> {
    Html(html::render_upload_form())
}

/// POST /upload
async fn upload(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Html<String>> {
    let file = read_upload(multipart).await?;
    let checked = check_document(&state, file).await?;
    Ok(Html(html::render_report(&checked.filename, &checked.report)))
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub filename: String,
    pub checked_at: DateTime<Utc>,
    pub issue_count: usize,
    pub report: Report,
}

/// POST /api/v1/check
async fn check(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<CheckResponse>> {
    let file = read_upload(multipart).await?;
    let checked = check_document(&state, file).await?;

    Ok(Json(CheckResponse {
        filename: checked.filename,
        checked_at: Utc::now(),
        issue_count: checked.report.issue_count(),
        report: checked.report,
    }))
}

// ============================================================================
// Pipeline
// ============================================================================

struct UploadedFile {
    filename: String,
    data: Bytes,
}

struct CheckedDocument {
    filename: String,
    report: Report,
}

/// Pull the `file` field out of the multipart body
async fn read_upload(
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<UploadedFile> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!("Request is not a multipart upload: {}", rejection);
            return Err(AppError::MissingFile);
        }
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // A plain form value named `file` is not an upload
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        if !has_docx_extension(&filename) {
            return Err(AppError::UnsupportedFileType);
        }

        let data = field.bytes().await?;
        return Ok(UploadedFile { filename, data });
    }

    Err(AppError::MissingFile)
}

/// Stage, open and check one document
///
/// Parsing and offline checks run on the blocking pool; the staged file is
/// removed before external links are probed.
async fn check_document(state: &AppState, upload: UploadedFile) -> Result<CheckedDocument> {
    let request_id = Uuid::new_v4();
    let filename = display_name(&upload.filename);

    tracing::info!(
        request_id = %request_id,
        file_name = %filename,
        size = upload.data.len(),
        "Checking document"
    );

    let upload_dir = state.config().upload.dir.clone();
    let max_part_bytes = state.config().upload.max_part_bytes;
    let data = upload.data;

    let inspection = tokio::task::spawn_blocking(move || -> Result<Inspection> {
        let staged = StagedUpload::stage(&upload_dir, &data)?;
        let archive = DocxArchive::open(staged.path())?.with_max_part_bytes(max_part_bytes);
        let document = Document::open(&archive)?;
        Ok(checks::inspect(&archive, &document)?)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    tracing::debug!(
        request_id = %request_id,
        external_links = inspection.external_targets.len(),
        "Probing external links"
    );
    let report = inspection.finish(state.link_probe()).await;

    tracing::info!(
        request_id = %request_id,
        file_name = %filename,
        issues = report.issue_count(),
        "Document checked"
    );

    Ok(CheckedDocument { filename, report })
}

// ============================================================================
// Tests
// ============================================================================
