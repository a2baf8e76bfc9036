use ace_core::model::{
    Badge, Credentials, DashboardStats, DashboardSummary, Exercise, ExerciseId, LearningPlan,
    LoginGrant, NewSubmission, RecentResult, Registration, SkillProgress, Submission,
    TopicExercises, User, UserId,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7035/api";

/// Where the API lives and which bearer token to present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// Typed client for the exam-content REST API.
///
/// The credential is part of the client's configuration: a signed-in
/// client is a new value built with [`ApiClient::with_token`], never a
/// mutation of a shared one.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the base URL cannot be parsed or
    /// cannot carry a path.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|_| ApiError::InvalidBaseUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            token: config.token,
        })
    }

    /// Same endpoint and connection pool, different credential.
    #[must_use]
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one JSON request against `segments` under the base URL.
    ///
    /// Each segment is percent-encoded on its own. The bearer token, if any,
    /// is attached as the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpStatus` for non-success responses and
    /// `ApiError::Http` for transport or decoding failures.
    pub async fn request<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "api request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, path = %segments.join("/"), %status, "api request failed");
            return Err(ApiError::HttpStatus(status));
        }

        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, segments, None).await
    }

    async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, segments, Some(body)).await
    }

    // ─── Users ───────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        self.post(&["users", "register"], registration).await
    }

    /// Exchange credentials for a token. Does not change this client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, ApiError> {
        self.post(&["users", "login"], credentials).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn user(&self, user_id: UserId) -> Result<User, ApiError> {
        let id = user_id.to_string();
        self.get(&["users", id.as_str()]).await
    }

    // ─── Exercises ───────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        self.get(&["exercises"]).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn exercises_by_topic(&self, topic: &str) -> Result<TopicExercises, ApiError> {
        self.get(&["exercises", "topic", topic]).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn exercise(&self, exercise_id: ExerciseId) -> Result<Exercise, ApiError> {
        let id = exercise_id.to_string();
        self.get(&["exercises", id.as_str()]).await
    }

    // ─── Submissions ─────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn submit(&self, submission: &NewSubmission) -> Result<Submission, ApiError> {
        self.post(&["submissions"], submission).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn submissions(&self, user_id: UserId) -> Result<Vec<Submission>, ApiError> {
        let id = user_id.to_string();
        self.get(&["submissions", "user", id.as_str()]).await
    }

    // ─── Plans & badges ──────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn learning_plans(&self, user_id: UserId) -> Result<Vec<LearningPlan>, ApiError> {
        let id = user_id.to_string();
        self.get(&["learningplans", "user", id.as_str()]).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn badges(&self, user_id: UserId) -> Result<Vec<Badge>, ApiError> {
        let id = user_id.to_string();
        self.get(&["userbadges", id.as_str()]).await
    }

    // ─── Dashboard ───────────────────────────────────────────────────────────

    /// Fetch summary, skill progress, today's plans and recent results
    /// concurrently and merge them.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` among the four requests; no partial
    /// result is produced.
    pub async fn dashboard(&self, user_id: UserId) -> Result<DashboardStats, ApiError> {
        let id = user_id.to_string();
        let summary_path = ["dashboard", id.as_str(), "summary"];
        let progress_path = ["dashboard", id.as_str(), "progress"];
        let today_path = ["dashboard", id.as_str(), "today"];
        let recent_path = ["dashboard", id.as_str(), "recent-results"];

        let (summary, progress, today, recent_results) = futures::try_join!(
            self.get::<DashboardSummary>(&summary_path),
            self.get::<SkillProgress>(&progress_path),
            self.get::<Vec<LearningPlan>>(&today_path),
            self.get::<Vec<RecentResult>>(&recent_path),
        )?;
        Ok(DashboardStats {
            summary,
            progress,
            today,
            recent_results,
        })
    }
}
