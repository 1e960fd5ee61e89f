//! Beerworks Core Library
//!
//! This crate provides the shared types for the beerworks client, including:
//! - Beer domain model and paged list container
//! - Endpoint configuration (base URL and path templates)
//! - Write-side validation

pub mod config;
pub mod models;

// Re-export commonly used types
pub use config::Endpoints;
pub use models::{Beer, BeerListParams, BeerPagedList, ValidationError};
