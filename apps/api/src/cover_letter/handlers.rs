//! Axum route handler for the cover-letter generator.
//!
//! The upstream call is fail-soft: any timeout or non-success response
//! yields `cover_letter: null` rather than an error status. Resume analysis
//! never depends on this path.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cover_letter::prompts::{build_prompt, COVER_LETTER_SYSTEM};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub years_of_experience: u32,
    pub education: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub job_description: String,
    pub applicant: ApplicantProfile,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: Option<String>,
}

/// POST /api/v1/cover-letter
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    if request.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "company_name cannot be empty".to_string(),
        ));
    }

    let Some(completions) = &state.completions else {
        info!("Cover-letter generation requested but no API key is configured");
        return Ok(Json(CoverLetterResponse { cover_letter: None }));
    };

    let prompt = build_prompt(&request);

    let cover_letter = match completions.complete(&prompt, COVER_LETTER_SYSTEM).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Cover-letter generation failed, returning none: {e}");
            None
        }
    };

    Ok(Json(CoverLetterResponse { cover_letter }))
}
