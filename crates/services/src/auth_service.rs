use std::sync::Arc;

use ace_core::model::{Credentials, LoginGrant, Registration, User, UserId};
use storage::repository::LocalStore;

use crate::api_client::ApiClient;
use crate::error::AuthError;

/// Local-storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Local-storage key holding the signed-in user's id.
pub const USER_ID_KEY: &str = "userId";

/// Persists the signed-in identity and hands out clients carrying it.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: Arc<dyn LocalStore>,
}

impl AuthService {
    /// `api` is the anonymous client; tokens are layered on per call.
    #[must_use]
    pub fn new(api: ApiClient, store: Arc<dyn LocalStore>) -> Self {
        Self { api, store }
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` if the request fails.
    pub async fn register(&self, registration: &Registration) -> Result<User, AuthError> {
        Ok(self.api.register(registration).await?)
    }

    /// Sign in and persist the token and user id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` if the server rejects the credentials and
    /// `AuthError::Storage` if the identity cannot be persisted.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, AuthError> {
        let grant = self.api.login(credentials).await?;
        self.store.set_item(AUTH_TOKEN_KEY, &grant.token).await?;
        self.store
            .set_item(USER_ID_KEY, &grant.user_id.to_string())
            .await?;
        tracing::info!(user_id = %grant.user_id, "signed in");
        Ok(grant)
    }

    /// Forget the stored token and user id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if local storage cannot be written.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.remove_item(AUTH_TOKEN_KEY).await?;
        self.store.remove_item(USER_ID_KEY).await?;
        tracing::info!("signed out");
        Ok(())
    }

    /// Stored bearer token, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if local storage cannot be read.
    pub async fn token(&self) -> Result<Option<String>, AuthError> {
        Ok(self.store.get_item(AUTH_TOKEN_KEY).await?)
    }

    /// True when a bearer token is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if local storage cannot be read.
    pub async fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.token().await?.is_some())
    }

    /// The signed-in user's id.
    ///
    /// A missing or unparsable value means nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if local storage cannot be read.
    pub async fn current_user_id(&self) -> Result<Option<UserId>, AuthError> {
        let raw = self.store.get_item(USER_ID_KEY).await?;
        Ok(raw.and_then(|raw| match raw.parse::<UserId>() {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(%err, "ignoring stored user id");
                None
            }
        }))
    }

    /// A client presenting the stored token (anonymous when none is stored).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if local storage cannot be read.
    pub async fn client(&self) -> Result<ApiClient, AuthError> {
        Ok(self.api.with_token(self.token().await?))
    }
}
