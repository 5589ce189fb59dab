//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured products, latest article)
//! GET  /health                 - Health check
//!
//! # Shop
//! GET  /shop                   - Product listing (?category= filter)
//! GET  /shop/{id}              - Product detail
//!
//! # Journal
//! GET  /blog                   - Article listing
//! GET  /blog/{id}              - Article detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a product
//! POST /cart/remove            - Remove a line
//! POST /cart/checkout          - Clear the cart
//!
//! # Skin Quiz
//! GET  /quiz                   - Quiz form
//! POST /quiz                   - Quiz submission, recommendation result
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action (multipart, optional avatar)
//! POST /auth/logout            - Logout action
//!
//! # Admin (requires admin role)
//! GET  /admin                  - Dashboard (collection counts)
//! GET  /admin/products         - Product management
//! GET  /admin/products/new     - New product form
//! GET  /admin/products/{id}    - Edit product form
//! POST /admin/products         - Create or update a product
//! POST /admin/products/{id}/delete - Delete a product
//! GET  /admin/articles         - Article management
//! GET  /admin/articles/new     - New article form
//! GET  /admin/articles/{id}    - Edit article form
//! POST /admin/articles         - Create or update an article
//! POST /admin/articles/{id}/delete - Delete an article
//! GET  /admin/orders           - Order listing
//! ```

pub mod admin;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod home;
pub mod quiz;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/{id}", get(shop::show))
}

/// Create the journal routes router.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::index))
        .route("/{id}", get(blog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route(
            "/products",
            get(admin::products).post(admin::save_product),
        )
        .route("/products/new", get(admin::new_product))
        .route("/products/{id}", get(admin::edit_product))
        .route("/products/{id}/delete", post(admin::delete_product))
        .route(
            "/articles",
            get(admin::articles).post(admin::save_article),
        )
        .route("/articles/new", get(admin::new_article))
        .route("/articles/{id}", get(admin::edit_article))
        .route("/articles/{id}/delete", post(admin::delete_article))
        .route("/orders", get(admin::orders))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Shop routes
        .nest("/shop", shop_routes())
        // Journal routes
        .nest("/blog", blog_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Skin quiz
        .route("/quiz", get(quiz::form).post(quiz::submit))
        // Auth routes
        .nest("/auth", auth_routes())
        // Admin console
        .nest("/admin", admin_routes())
}
