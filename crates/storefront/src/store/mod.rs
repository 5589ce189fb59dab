//! Collection storage.
//!
//! Collections live in memory behind async locks and are written
//! through to a [`KvStore`] as whole JSON documents on every mutation.

pub mod kv;
pub mod seed;

use std::sync::Arc;

use chrono::Utc;
use handora_core::{BlogPostId, Category, ProductId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::models::{BlogDraft, BlogPost, Order, Product, ProductDraft};

pub use kv::{JsonFileStore, KvStore, MemoryStore, StoreError};

/// Persisted collection keys.
pub mod keys {
    pub const PRODUCTS: &str = "handora_products";
    pub const BLOGS: &str = "handora_blogs";
    pub const ORDERS: &str = "handora_orders";
}

/// Collection counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub products: usize,
    pub blogs: usize,
    pub orders: usize,
}

struct DataStoreInner {
    backend: Arc<dyn KvStore>,
    products: RwLock<Vec<Product>>,
    blogs: RwLock<Vec<BlogPost>>,
    orders: RwLock<Vec<Order>>,
}

/// Shared handle to the product, blog, and order collections.
#[derive(Clone)]
pub struct DataStore {
    inner: Arc<DataStoreInner>,
}

impl DataStore {
    /// Load all collections from the backend.
    ///
    /// A missing or unreadable collection falls back to its seed (or an
    /// empty list for orders), and the fallback is written through so
    /// the next boot reads it back cleanly.
    pub fn open(backend: Arc<dyn KvStore>) -> Result<Self, StoreError> {
        let products = load_or_seed(backend.as_ref(), keys::PRODUCTS, seed::products)?;
        let blogs = load_or_seed(backend.as_ref(), keys::BLOGS, seed::blogs)?;
        let orders = load_or_seed(backend.as_ref(), keys::ORDERS, Vec::new)?;

        Ok(Self {
            inner: Arc::new(DataStoreInner {
                backend,
                products: RwLock::new(products),
                blogs: RwLock::new(blogs),
                orders: RwLock::new(orders),
            }),
        })
    }

    /// All products, in stored order (newest first).
    pub async fn products(&self) -> Vec<Product> {
        self.inner.products.read().await.clone()
    }

    /// Look up a product by id.
    pub async fn product(&self, id: &ProductId) -> Option<Product> {
        self.inner
            .products
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Products flagged for the home page.
    pub async fn featured_products(&self) -> Vec<Product> {
        self.inner
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    /// Products in a category, or the whole catalog when `category` is
    /// `None`.
    pub async fn products_in_category(&self, category: Option<Category>) -> Vec<Product> {
        let products = self.inner.products.read().await;
        match category {
            Some(c) => products.iter().filter(|p| p.category == c).cloned().collect(),
            None => products.clone(),
        }
    }

    /// Create or update a product.
    ///
    /// A draft carrying an id that matches an existing product replaces
    /// it in place; otherwise a fresh id is minted and the product is
    /// prepended so new items surface first.
    pub async fn save_product(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut products = self.inner.products.write().await;

        let saved = match draft.id.clone() {
            Some(id) if products.iter().any(|p| p.id == id) => {
                let product = draft.into_product(id.clone());
                for slot in products.iter_mut() {
                    if slot.id == id {
                        *slot = product.clone();
                    }
                }
                product
            }
            _ => {
                let product = draft.into_product(ProductId::generate());
                products.insert(0, product.clone());
                product
            }
        };

        self.write_through(keys::PRODUCTS, &*products)?;
        Ok(saved)
    }

    /// Delete a product. Unknown ids are a no-op.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut products = self.inner.products.write().await;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() != before {
            self.write_through(keys::PRODUCTS, &*products)?;
        }
        Ok(())
    }

    /// All journal articles, in stored order (newest first).
    pub async fn blogs(&self) -> Vec<BlogPost> {
        self.inner.blogs.read().await.clone()
    }

    /// Look up an article by id.
    pub async fn blog(&self, id: &BlogPostId) -> Option<BlogPost> {
        self.inner
            .blogs
            .read()
            .await
            .iter()
            .find(|b| &b.id == id)
            .cloned()
    }

    /// Create or update an article.
    ///
    /// Drafts without a date are stamped with today's date. Matching
    /// ids replace in place, new articles are prepended.
    pub async fn save_blog(&self, draft: BlogDraft) -> Result<BlogPost, StoreError> {
        let mut blogs = self.inner.blogs.write().await;
        let date = draft.date.unwrap_or_else(|| Utc::now().date_naive());

        let saved = match draft.id.clone() {
            Some(id) if blogs.iter().any(|b| b.id == id) => {
                let post = draft.into_post(id.clone(), date);
                for slot in blogs.iter_mut() {
                    if slot.id == id {
                        *slot = post.clone();
                    }
                }
                post
            }
            _ => {
                let post = draft.into_post(BlogPostId::generate(), date);
                blogs.insert(0, post.clone());
                post
            }
        };

        self.write_through(keys::BLOGS, &*blogs)?;
        Ok(saved)
    }

    /// Delete an article. Unknown ids are a no-op.
    pub async fn delete_blog(&self, id: &BlogPostId) -> Result<(), StoreError> {
        let mut blogs = self.inner.blogs.write().await;
        let before = blogs.len();
        blogs.retain(|b| &b.id != id);
        if blogs.len() != before {
            self.write_through(keys::BLOGS, &*blogs)?;
        }
        Ok(())
    }

    /// All recorded orders.
    ///
    /// Checkout does not create orders; this lists whatever the
    /// persisted collection carries (typically nothing).
    pub async fn orders(&self) -> Vec<Order> {
        self.inner.orders.read().await.clone()
    }

    /// Collection sizes for the admin dashboard.
    pub async fn counts(&self) -> Counts {
        Counts {
            products: self.inner.products.read().await.len(),
            blogs: self.inner.blogs.read().await.len(),
            orders: self.inner.orders.read().await.len(),
        }
    }

    fn write_through<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.inner.backend.set(key, &bytes)
    }
}

fn load_or_seed<T, F>(backend: &dyn KvStore, key: &str, seed: F) -> Result<Vec<T>, StoreError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match backend.get(key) {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(items) => return Ok(items),
            Err(e) => {
                tracing::warn!(key, error = %e, "collection unreadable, reseeding");
            }
        },
        Ok(None) => {
            tracing::info!(key, "collection missing, seeding");
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "collection load failed, reseeding");
        }
    }

    let items = seed();
    let bytes = serde_json::to_vec_pretty(&items)?;
    backend.set(key, &bytes)?;
    Ok(items)
}
