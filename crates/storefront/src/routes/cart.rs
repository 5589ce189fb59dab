//! Cart route handlers.
//!
//! The cart lives in the session. Add merges by product id, remove
//! drops a line by index, checkout empties the cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use handora_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::{Cart, CurrentUser, session::keys};
use crate::state::AppState;

/// Load the cart from the session, defaulting to empty.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Write the cart back to the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session
        .insert(keys::CART, cart)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))
}

/// Number of cart lines, for the nav badge.
pub async fn cart_count(session: &Session) -> usize {
    load_cart(session).await.len()
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub cart: Cart,
}

/// Render the cart page.
#[instrument(skip_all)]
pub async fn show(OptionalUser(user): OptionalUser, session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartTemplate {
        user,
        cart_count: cart.len(),
        cart,
    }
}

/// Add-to-cart form payload.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: ProductId,
}

/// Add a product to the cart and return to the cart page.
#[instrument(skip_all, fields(product_id = %form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddForm>,
) -> Result<Redirect> {
    let product = state
        .store()
        .product(&form.product_id)
        .await
        .ok_or_else(|| AppError::NotFound("product".to_string()))?;

    let mut cart = load_cart(&session).await;
    cart.add(product);
    save_cart(&session, &cart).await?;

    Ok(Redirect::to("/cart"))
}

/// Remove-line form payload.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub index: usize,
}

/// Remove a cart line by index. Out-of-range indexes are ignored.
#[instrument(skip_all, fields(index = form.index))]
pub async fn remove(session: Session, Form(form): Form<RemoveForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await;
    cart.remove(form.index);
    save_cart(&session, &cart).await?;
    Ok(Redirect::to("/cart"))
}

/// Checkout: empty the cart and return home.
///
/// No order is recorded yet; this mirrors the demo checkout, which only
/// clears the cart. Payment capture would hook in here.
#[instrument(skip_all)]
pub async fn checkout(session: Session) -> Result<Redirect> {
    let mut cart = load_cart(&session).await;
    cart.clear();
    save_cart(&session, &cart).await?;
    Ok(Redirect::to("/"))
}
