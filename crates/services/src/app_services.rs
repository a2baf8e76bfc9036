use std::sync::Arc;

use ace_core::Roadmap;
use ace_core::model::{DashboardStats, Exercise, ExerciseId};
use storage::repository::Storage;

use crate::api_client::{ApiClient, ApiConfig};
use crate::auth_service::AuthService;
use crate::error::{ApiError, AppServicesError, LoadError};
use crate::roadmap_service::RoadmapService;

/// Assembles app-facing services around one API endpoint and one local store.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
}

impl AppServices {
    /// Build services over an existing storage backend.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the configured base URL is unusable.
    pub fn new(storage: &Storage, config: ApiConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(config)?;
        let auth = Arc::new(AuthService::new(api, Arc::clone(&storage.local)));
        Ok(Self { auth })
    }

    /// Build services backed by `SQLite` local storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the base
    /// URL is unusable.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, config)?)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    /// Roadmap for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotSignedIn` before the token is read when nobody
    /// is signed in. Otherwise see [`RoadmapService::load`]; local storage
    /// failures surface as `LoadError::Storage`.
    pub async fn load_roadmap(&self) -> Result<Roadmap, LoadError> {
        let user_id = self
            .auth
            .current_user_id()
            .await?
            .ok_or(LoadError::NotSignedIn)?;
        let client = self.auth.client().await?;
        RoadmapService::new(Arc::new(client))
            .load(Some(user_id))
            .await
    }

    /// Dashboard aggregate for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotSignedIn` without a request when nobody is
    /// signed in, and `LoadError::Api` if any dashboard request fails.
    pub async fn load_dashboard(&self) -> Result<DashboardStats, LoadError> {
        let user_id = self
            .auth
            .current_user_id()
            .await?
            .ok_or(LoadError::NotSignedIn)?;
        let client = self.auth.client().await?;
        Ok(client.dashboard(user_id).await?)
    }

    /// One exercise, for lesson pages.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Api` if the exercise cannot be fetched.
    pub async fn load_exercise(&self, exercise_id: ExerciseId) -> Result<Exercise, LoadError> {
        let client = self.auth.client().await?;
        Ok(client.exercise(exercise_id).await?)
    }
}
