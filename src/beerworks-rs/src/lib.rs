//! Beerworks Client Library
//!
//! HTTP client for the beer-inventory REST API.

mod client;

pub use client::{BeerApi, BeerClient};
pub use beerworks_core::{Beer, BeerListParams, BeerPagedList, Endpoints, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Invalid beer payload: {0}")]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// HTTP status carried by a `Server` error, if any. Lets callers
    /// decide what a 404 on delete means instead of the client deciding
    /// for them.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
