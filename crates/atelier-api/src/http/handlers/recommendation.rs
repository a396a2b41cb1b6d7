//! Recommendation handler: one form submission, one pipeline run.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use atelier_types::profile::StyleProfileForm;
use atelier_types::report::{ImageOutcome, Recommendation, Section};

use crate::http::error::AppError;
use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

/// One report section, in canonical order, for direct rendering.
#[derive(Debug, Serialize)]
pub struct SectionView {
    pub title: &'static str,
    /// Trimmed body, or `""` when the header never appeared.
    pub body: String,
    pub present: bool,
}

/// Response payload: the full recommendation plus render-ready fields.
#[derive(Debug, Serialize)]
pub struct RecommendationView {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub sections: Vec<SectionView>,
    /// `<img src>` value when an image was generated.
    pub image_src: Option<String>,
}

impl From<Recommendation> for RecommendationView {
    fn from(recommendation: Recommendation) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|s| SectionView {
                title: s.title(),
                body: recommendation.report.text_or_empty(s.title()).to_string(),
                present: recommendation.report.contains(s.title()),
            })
            .collect();
        let image_src = match &recommendation.image {
            ImageOutcome::Generated { image } => image.display_src(),
            ImageOutcome::Failed { .. } => None,
        };

        Self {
            recommendation,
            sections,
            image_src,
        }
    }
}

/// POST /api/v1/recommendations - Validate the form and run the pipeline.
///
/// - 400 when validation fails (no service is called)
/// - 502 when the text service fails (the image service is not called)
/// - 200 otherwise, including when only the image failed
///
/// Error envelopes carry the same `request_id` that was logged.
pub async fn create_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<StyleProfileForm>, JsonRejection>,
) -> Result<Json<ApiResponse<RecommendationView>>, ApiResponse<()>> {
    let start = Instant::now();
    let request_id = new_request_id();

    let recommendation = match run_submission(&state, payload, &request_id).await {
        Ok(recommendation) => recommendation,
        Err(e) => {
            let elapsed = start.elapsed().as_millis() as u64;
            tracing::info!(
                %request_id,
                code = e.code(),
                elapsed_ms = elapsed,
                "recommendation rejected"
            );
            return Err(e.into_envelope(request_id, elapsed));
        }
    };
    let elapsed = start.elapsed().as_millis() as u64;
    tracing::info!(
        %request_id,
        sections = recommendation.report.len(),
        image = recommendation.image.is_generated(),
        elapsed_ms = elapsed,
        "recommendation complete"
    );

    Ok(Json(
        ApiResponse::success(recommendation.into(), request_id, elapsed)
            .with_link("self", "/api/v1/recommendations")
            .with_link("form", "/api/v1/form/options"),
    ))
}

async fn run_submission(
    state: &AppState,
    payload: Result<Json<StyleProfileForm>, JsonRejection>,
    request_id: &str,
) -> Result<Recommendation, AppError> {
    let Json(form) = payload?;
    let profile = form.validate()?;
    tracing::info!(%request_id, gender = %profile.gender, "recommendation requested");

    Ok(state.assembler.recommend(&profile).await?)
}
