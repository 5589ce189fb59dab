//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::{BlogPost, CurrentUser, Product};
use crate::routes::cart::cart_count;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    /// Products flagged as featured, for the hero grid.
    pub featured: Vec<Product>,
    /// Most recent journal article, if any.
    pub latest_post: Option<BlogPost>,
}

/// Render the home page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
) -> impl IntoResponse {
    HomeTemplate {
        user,
        cart_count: cart_count(&session).await,
        featured: state.store().featured_products().await,
        latest_post: state.store().blogs().await.into_iter().next(),
    }
}
