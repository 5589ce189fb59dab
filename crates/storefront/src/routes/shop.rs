//! Shop route handlers: product listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use handora_core::{Category, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::{CurrentUser, Product};
use crate::routes::cart::cart_count;
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    /// Category filter; absent or unrecognized shows everything.
    pub category: Option<String>,
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub active_category: Option<Category>,
}

/// Render the product listing, optionally filtered by category.
#[instrument(skip_all, fields(category = query.category.as_deref().unwrap_or("all")))]
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    // Unknown category values fall back to the unfiltered listing.
    let active_category = query.category.as_deref().and_then(|c| c.parse().ok());

    ShopTemplate {
        user,
        cart_count: cart_count(&session).await,
        products: state.store().products_in_category(active_category).await,
        categories: Category::ALL.to_vec(),
        active_category,
    }
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/show.html")]
pub struct ProductTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub product: Product,
}

/// Render a product detail page.
#[instrument(skip_all, fields(id = %id))]
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    session: Session,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse> {
    let product = state
        .store()
        .product(&id)
        .await
        .ok_or_else(|| AppError::NotFound("product".to_string()))?;

    Ok(ProductTemplate {
        user,
        cart_count: cart_count(&session).await,
        product,
    })
}
