use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;
use crate::time::wire_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "wire_timestamp::option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /users/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Bearer token and user id issued on login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    pub token: String,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_profile_fields_may_be_missing() {
        let json = r#"{ "id": 1, "username": "lan", "email": "lan@example.com" }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.streak_days, None);
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn login_grant_reads_camel_case() {
        let grant: LoginGrant = serde_json::from_str(r#"{ "token": "t0k", "userId": 9 }"#).unwrap();
        assert_eq!(grant.user_id, UserId::new(9));
    }
}
