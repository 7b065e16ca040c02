//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - In-process cache and the cached candidate repository
//! - [`persistence`] - PostgreSQL and in-memory candidate stores

pub mod cache;
pub mod persistence;
