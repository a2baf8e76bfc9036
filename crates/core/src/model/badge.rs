use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::BadgeId;
use crate::time::wire_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub badge_id: BadgeId,
    pub badge_name: String,
    #[serde(with = "wire_timestamp")]
    pub awarded_at: DateTime<Utc>,
}
