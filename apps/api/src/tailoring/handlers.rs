//! Axum route handlers for the tailoring API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::analysis::extract::extract_text;
use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::optimizer::{get_optimized_resume, TailoringResult};
use crate::upload::UploadForm;

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub analysis: TailoringResult,
    pub optimized_resume: String,
}

/// POST /api/v1/resume/tailor
///
/// Multipart form with `file` and `job_description` fields. Returns the
/// tailoring analysis of the uploaded resume plus an optimized text with
/// synthetic skill bullets appended where the match falls short.
pub async fn handle_tailor(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TailorResponse>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let (kind, bytes) = form.require_file()?;
    let job_description = form.require_job_description()?;

    let resume_text = extract_text(bytes, kind);

    let (optimized_resume, analysis) =
        get_optimized_resume(&resume_text, job_description, &state.taxonomy);

    Ok(Json(TailorResponse {
        analysis,
        optimized_resume,
    }))
}
