//! Handora storefront library.
//!
//! Serves the public shop (catalog, blog, cart, skin quiz) and the
//! admin console (product, article, and order management) from a single
//! axum application backed by a JSON file store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
