//! Shared building blocks for the catalog microservices.
//!
//! Every service in the workspace pulls its error taxonomy, configuration
//! plumbing and HTTP response helpers from here so that the three deployables
//! stay wire-compatible with each other.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod response;
