//! Shared error types for the services crate.

use thiserror::Error;

use offerboard_core::model::{CredentialError, ReferenceError};
use storage::repository::StorageError;

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while fetching the offer feed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OfferFeedError {
    #[error("offer feed returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while building a feed configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedConfigError {
    #[error("invalid feed endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}
