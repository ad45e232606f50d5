//! User Group entity model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named group of users, as the platform last reported it.
///
/// Instances are snapshots: nothing here is cached or invalidated, and
/// every operation re-fetches from the platform. `user_count` and
/// `users` are populated only when the request asked for them — an
/// absent value is indistinguishable from an empty group otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    /// Server-assigned id, stable and unique within a team
    pub id: String,
    /// Owning team; empty for the default team
    pub team_id: String,
    /// Always true for User Groups; discriminates against other
    /// grouping entities in mixed payloads
    pub is_usergroup: bool,
    pub name: String,
    pub description: String,
    /// Mention alias, unique within the team
    pub handle: String,
    pub is_external: bool,
    #[serde(with = "epoch_seconds")]
    pub date_create: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub date_update: Option<DateTime<Utc>>,
    /// Disablement instant; unset while the group is enabled
    #[serde(with = "epoch_seconds")]
    pub date_delete: Option<DateTime<Utc>>,
    /// Non-empty for system-managed groups
    pub auto_type: String,
    pub created_by: String,
    pub updated_by: String,
    pub deleted_by: String,
    pub prefs: UserGroupPrefs,
    /// Member count; present only when `include_count` was requested
    pub user_count: Option<usize>,
    /// Member ids; present only when `include_users` was requested
    pub users: Option<Vec<String>>,
}

impl UserGroup {
    /// Disabling is a soft delete: the platform stamps `date_delete`
    /// and clears it again on enable.
    pub fn is_disabled(&self) -> bool {
        self.date_delete.is_some()
    }
}

/// Default context applied when a group is mentioned.
///
/// Opaque channel id lists, passed through verbatim; no ordering or
/// uniqueness is enforced on this side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroupPrefs {
    /// Default public channel ids
    pub channels: Vec<String>,
    /// Default private channel ids
    pub groups: Vec<String>,
}

/// The platform transmits instants as epoch seconds, with 0 meaning
/// "not set".
mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.map(|t| t.timestamp()).unwrap_or(0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        if secs == 0 {
            return Ok(None);
        }
        DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}")))
    }
}
