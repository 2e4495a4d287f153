//! Typed client for the catalog gateway.
//!
//! Mirrors the frontend data layer: four generic verbs against a fixed base
//! URL with a bounded per-request timeout, and one thin wrapper per domain
//! operation that validates its input before any network call is made.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod api;
pub mod catalog;
pub mod errors;

pub use api::ApiClient;
pub use catalog::{CatalogClient, Category, Product, ProductForm};
pub use errors::ClientError;
