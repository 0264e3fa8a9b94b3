//! Axum route handlers for the standalone ATS analysis API.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::analysis::analyzer::{analyze_resume, AnalysisResult};
use crate::analysis::extract::extract_text;
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::UploadForm;

/// POST /api/v1/resume/analyze
///
/// Multipart form with a `file` field (pdf/doc/docx). Extraction failures
/// degrade to empty text rather than erroring, so a corrupt file still gets
/// a (low) score back.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let (kind, bytes) = form.require_file()?;

    let text = extract_text(bytes, kind);

    Ok(Json(analyze_resume(&text, &state.taxonomy)))
}
