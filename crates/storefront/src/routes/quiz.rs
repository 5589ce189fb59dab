//! Skin quiz route handlers.
//!
//! The quiz collects a skin type, any number of concerns, and a
//! sensitivity level, then asks the recommendation service for advice.
//! Submission uses multipart so the repeated `concerns` field arrives
//! as every checked value.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::CurrentUser;
use crate::routes::cart::cart_count;
use crate::services::recommend::{self, Recommendation, SkinProfile};
use crate::state::AppState;

/// Skin type choices offered by the quiz.
pub const SKIN_TYPES: [&str; 4] = ["Dry", "Oily", "Combination", "Normal"];

/// Concern choices offered by the quiz.
pub const CONCERNS: [&str; 5] = ["Dryness", "Irritation", "Aging", "Uneven Tone", "Redness"];

/// Sensitivity choices offered by the quiz.
pub const SENSITIVITY: [&str; 3] = ["Not Sensitive", "Mildly Sensitive", "Very Sensitive"];

/// Quiz form template.
#[derive(Template, WebTemplate)]
#[template(path = "quiz/form.html")]
pub struct QuizFormTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub skin_types: Vec<&'static str>,
    pub concerns: Vec<&'static str>,
    pub sensitivity: Vec<&'static str>,
}

/// Render the quiz form.
#[instrument(skip_all)]
pub async fn form(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    QuizFormTemplate {
        user,
        cart_count: cart_count(&session).await,
        skin_types: SKIN_TYPES.to_vec(),
        concerns: CONCERNS.to_vec(),
        sensitivity: SENSITIVITY.to_vec(),
    }
}

/// Quiz result template.
#[derive(Template, WebTemplate)]
#[template(path = "quiz/result.html")]
pub struct QuizResultTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub result: Recommendation,
}

/// Handle a quiz submission and render the recommendation.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let profile = parse_submission(multipart).await?;
    let catalog = state.store().products().await;
    let result = recommend::personalized(state.recommender(), &profile, &catalog).await;

    Ok(QuizResultTemplate {
        user,
        cart_count: cart_count(&session).await,
        result,
    })
}

/// Collect the quiz fields out of the multipart body.
async fn parse_submission(mut multipart: Multipart) -> Result<SkinProfile> {
    let mut skin_type = None;
    let mut concerns = Vec::new();
    let mut sensitivity = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?;

        match name.as_str() {
            "skin_type" => skin_type = Some(value),
            "concerns" => concerns.push(value),
            "sensitivity" => sensitivity = Some(value),
            _ => {}
        }
    }

    Ok(SkinProfile {
        skin_type: skin_type
            .ok_or_else(|| AppError::BadRequest("skin type is required".to_string()))?,
        concerns,
        sensitivity: sensitivity
            .ok_or_else(|| AppError::BadRequest("sensitivity is required".to_string()))?,
    })
}
