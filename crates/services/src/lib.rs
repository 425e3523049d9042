#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod dashboard_service;
pub mod error;
pub mod offer_feed;

pub use offerboard_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use dashboard_service::{DashboardService, DashboardSnapshot, RequestToken};
pub use error::{AppServicesError, AuthError, FeedConfigError, OfferFeedError};
pub use offer_feed::{FeedConfig, HttpOfferSource, OfferSource};
