//! # corkboard-core
//!
//! Foundation types for the Corkboard sticky-note service.
//!
//! This crate provides the shared vocabulary the other corkboard crates
//! depend on:
//!
//! - **Errors**: [`errors::DomainError`] taxonomy via `thiserror`
//! - **Roles**: [`types::Role`] for group memberships
//! - **Colors**: [`types::normalize_color`] for sticky-note color input
//! - **Logging**: [`logging::init_tracing`] subscriber setup
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other corkboard crates.

#![deny(unsafe_code)]

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::{DomainError, Result};
pub use types::Role;
