//! Handora Core - Shared types library.
//!
//! This crate provides common types used across all Handora components:
//! - `storefront` - Public-facing storefront with the admin panel
//! - `cli` - Command-line tools for seeding and managing persisted data
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and the
//!   closed domain enums (category, order status, subscription cadence, role)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
