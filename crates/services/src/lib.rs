#![forbid(unsafe_code)]

pub mod api_client;
pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod roadmap_service;

pub use api_client::{ApiClient, ApiConfig, DEFAULT_API_BASE_URL};
pub use app_services::AppServices;
pub use auth_service::{AUTH_TOKEN_KEY, AuthService, USER_ID_KEY};
pub use error::{ApiError, AppServicesError, AuthError, LoadError};
pub use roadmap_service::{RoadmapService, RoadmapSource};
