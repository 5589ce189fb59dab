//! Journal route handlers: article listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use handora_core::BlogPostId;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::{BlogPost, CurrentUser};
use crate::routes::cart::cart_count;
use crate::state::AppState;

/// Article listing template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub posts: Vec<BlogPost>,
}

/// Render the article listing.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
) -> impl IntoResponse {
    BlogIndexTemplate {
        user,
        cart_count: cart_count(&session).await,
        posts: state.store().blogs().await,
    }
}

/// Article detail template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub post: BlogPost,
}

/// Render an article detail page.
#[instrument(skip_all, fields(id = %id))]
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
    Path(id): Path<BlogPostId>,
) -> Result<impl IntoResponse> {
    let post = state
        .store()
        .blog(&id)
        .await
        .ok_or_else(|| AppError::NotFound("article".to_string()))?;

    Ok(BlogShowTemplate {
        user,
        cart_count: cart_count(&session).await,
        post,
    })
}
