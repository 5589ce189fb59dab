//! Admin console route handlers.
//!
//! Every handler takes [`RequireAdmin`]; shoppers and anonymous
//! visitors never reach these. Product and article forms post as
//! multipart so images can be uploaded and inlined as data URLs.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use handora_core::{BlogPostId, Category, Price, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{BlogDraft, BlogPost, CurrentUser, Order, Product, ProductDraft};
use crate::routes::cart::cart_count;
use crate::state::AppState;
use crate::store::Counts;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub counts: Counts,
}

/// Render the dashboard with collection counts.
#[instrument(skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
) -> impl IntoResponse {
    DashboardTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        counts: state.store().counts().await,
    }
}

/// Product management template: the list plus an optional edit form.
#[derive(Template, WebTemplate)]
#[template(path = "admin/products.html")]
pub struct AdminProductsTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub products: Vec<Product>,
    pub editing: Option<Product>,
    pub show_form: bool,
    pub categories: Vec<Category>,
}

/// Render the product list.
#[instrument(skip_all)]
pub async fn products(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
) -> impl IntoResponse {
    AdminProductsTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        products: state.store().products().await,
        editing: None,
        show_form: false,
        categories: Category::ALL.to_vec(),
    }
}

/// Render the empty product form.
#[instrument(skip_all)]
pub async fn new_product(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
) -> impl IntoResponse {
    AdminProductsTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        products: state.store().products().await,
        editing: None,
        show_form: true,
        categories: Category::ALL.to_vec(),
    }
}

/// Render the product form pre-filled for editing.
#[instrument(skip_all, fields(id = %id))]
pub async fn edit_product(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse> {
    let product = state
        .store()
        .product(&id)
        .await
        .ok_or_else(|| AppError::NotFound("product".to_string()))?;

    Ok(AdminProductsTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        products: state.store().products().await,
        editing: Some(product),
        show_form: true,
        categories: Category::ALL.to_vec(),
    })
}

/// Create or update a product from the form submission.
#[instrument(skip_all)]
pub async fn save_product(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    multipart: Multipart,
) -> Result<Redirect> {
    let draft = parse_product_form(multipart).await?;
    state.store().save_product(draft).await?;
    Ok(Redirect::to("/admin/products"))
}

/// Delete a product. Unknown ids are a no-op.
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Redirect> {
    state.store().delete_product(&id).await?;
    Ok(Redirect::to("/admin/products"))
}

/// Article management template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/articles.html")]
pub struct AdminArticlesTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub posts: Vec<BlogPost>,
    pub editing: Option<BlogPost>,
    pub show_form: bool,
}

/// Render the article list.
#[instrument(skip_all)]
pub async fn articles(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
) -> impl IntoResponse {
    AdminArticlesTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        posts: state.store().blogs().await,
        editing: None,
        show_form: false,
    }
}

/// Render the empty article form.
#[instrument(skip_all)]
pub async fn new_article(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
) -> impl IntoResponse {
    AdminArticlesTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        posts: state.store().blogs().await,
        editing: None,
        show_form: true,
    }
}

/// Render the article form pre-filled for editing.
#[instrument(skip_all, fields(id = %id))]
pub async fn edit_article(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
    Path(id): Path<BlogPostId>,
) -> Result<impl IntoResponse> {
    let post = state
        .store()
        .blog(&id)
        .await
        .ok_or_else(|| AppError::NotFound("article".to_string()))?;

    Ok(AdminArticlesTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        posts: state.store().blogs().await,
        editing: Some(post),
        show_form: true,
    })
}

/// Create or update an article from the form submission.
#[instrument(skip_all)]
pub async fn save_article(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    multipart: Multipart,
) -> Result<Redirect> {
    let draft = parse_article_form(multipart).await?;
    state.store().save_blog(draft).await?;
    Ok(Redirect::to("/admin/articles"))
}

/// Delete an article. Unknown ids are a no-op.
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_article(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<BlogPostId>,
) -> Result<Redirect> {
    state.store().delete_blog(&id).await?;
    Ok(Redirect::to("/admin/articles"))
}

/// Order listing template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/orders.html")]
pub struct AdminOrdersTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub orders: Vec<Order>,
}

/// Render the order listing.
#[instrument(skip_all)]
pub async fn orders(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
) -> impl IntoResponse {
    AdminOrdersTemplate {
        user: Some(admin),
        cart_count: cart_count(&session).await,
        orders: state.store().orders().await,
    }
}

// Form parsing ---------------------------------------------------------------

/// Shown for products saved without an upload or URL.
const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1556228720-195a672e8a03?auto=format&fit=crop&q=80&w=800";

/// Shown for articles saved without an upload or URL.
const DEFAULT_ARTICLE_IMAGE: &str =
    "https://images.unsplash.com/photo-1512290923902-8a9f81dc236c?auto=format&fit=crop&q=80&w=800";

struct RawForm {
    text: std::collections::HashMap<String, String>,
    image_data_url: Option<String>,
}

impl RawForm {
    fn get(&self, key: &str) -> &str {
        self.text.get(key).map_or("", String::as_str)
    }

    fn required(&self, key: &str) -> Result<&str> {
        let value = self.get(key).trim();
        if value.is_empty() {
            return Err(AppError::BadRequest(format!("{key} is required")));
        }
        Ok(value)
    }
}

/// Read every field of a multipart form; the `image` field, when it
/// carries bytes, is inlined as a data URL.
async fn collect_form(mut multipart: Multipart) -> Result<RawForm> {
    let mut text = std::collections::HashMap::new();
    let mut image_data_url = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == "image" {
            let mime = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?;
            if !bytes.is_empty() {
                image_data_url = Some(encode_data_url(&mime, &bytes));
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?;
            text.insert(name, value);
        }
    }

    Ok(RawForm {
        text,
        image_data_url,
    })
}

/// Inline image bytes as a `data:` URL.
fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Uploaded image, then the URL field, then the placeholder.
fn resolve_image(form: &RawForm, default: &str) -> String {
    if let Some(data_url) = &form.image_data_url {
        return data_url.clone();
    }
    let url = form.get("image_url").trim();
    if url.is_empty() {
        default.to_string()
    } else {
        url.to_string()
    }
}

async fn parse_product_form(multipart: Multipart) -> Result<ProductDraft> {
    let form = collect_form(multipart).await?;

    let id = Some(form.get("id"))
        .filter(|v| !v.trim().is_empty())
        .map(ProductId::from);
    let category: Category = form
        .required("category")?
        .parse()
        .map_err(|_| AppError::BadRequest("unknown category".to_string()))?;
    let price = Price::parse(form.required("price")?)
        .map_err(|e| AppError::BadRequest(format!("price: {e}")))?;
    let stock: u32 = form
        .required("stock")?
        .parse()
        .map_err(|_| AppError::BadRequest("stock must be a whole number".to_string()))?;

    // Uploaded image wins over the URL field; empty falls back to the
    // stock placeholder.
    let image_url = resolve_image(&form, DEFAULT_PRODUCT_IMAGE);

    Ok(ProductDraft {
        id,
        name: form.required("name")?.to_string(),
        category,
        price,
        description: form.get("description").trim().to_string(),
        ingredients: parse_ingredients(form.get("ingredients")),
        image_url,
        stock,
        featured: form.get("featured") == "on",
    })
}

/// Split the comma-separated ingredients field.
fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

async fn parse_article_form(multipart: Multipart) -> Result<BlogDraft> {
    let form = collect_form(multipart).await?;

    let id = Some(form.get("id"))
        .filter(|v| !v.trim().is_empty())
        .map(BlogPostId::from);
    let date = Some(form.get("date").trim())
        .filter(|v| !v.is_empty())
        .map(str::parse::<NaiveDate>)
        .transpose()
        .map_err(|_| AppError::BadRequest("date must be YYYY-MM-DD".to_string()))?;

    let image_url = resolve_image(&form, DEFAULT_ARTICLE_IMAGE);

    Ok(BlogDraft {
        id,
        title: form.required("title")?.to_string(),
        excerpt: form.get("excerpt").trim().to_string(),
        content: form.get("content").trim().to_string(),
        date,
        image_url,
    })
}
