//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible
//! defaults. Import via `use crate::client::fixtures::*` in test
//! modules.

#![allow(dead_code)] // Builder methods are available for future tests

use chrono::{DateTime, TimeZone, Utc};

use super::models::{UserGroup, UserGroupPrefs};

/// Builder for creating test UserGroup instances.
///
/// # Example
/// ```ignore
/// let group = UserGroupBuilder::new("S1")
///     .name("Engineering")
///     .handle("eng")
///     .user_count(12)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct UserGroupBuilder {
    id: String,
    name: String,
    handle: String,
    description: String,
    team_id: String,
    channels: Vec<String>,
    user_count: Option<usize>,
    users: Option<Vec<String>>,
    date_delete: Option<DateTime<Utc>>,
}

impl UserGroupBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Group {}", &id),
            handle: format!("group-{}", id.to_lowercase()),
            id,
            description: String::new(),
            team_id: "T0001".to_string(),
            channels: Vec::new(),
            user_count: None,
            users: None,
            date_delete: None,
        }
    }

    /// Set the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the mention handle.
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = handle.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the owning team id.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    /// Set the default channels.
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = channels;
        self
    }

    /// Set the member count.
    pub fn user_count(mut self, count: usize) -> Self {
        self.user_count = Some(count);
        self
    }

    /// Set the member id list.
    pub fn users(mut self, users: Vec<String>) -> Self {
        self.users = Some(users);
        self
    }

    /// Mark the group as disabled at the given epoch second.
    pub fn disabled_at(mut self, epoch_secs: i64) -> Self {
        self.date_delete = Some(Utc.timestamp_opt(epoch_secs, 0).unwrap());
        self
    }

    /// Build the UserGroup instance.
    pub fn build(self) -> UserGroup {
        UserGroup {
            id: self.id,
            team_id: self.team_id,
            is_usergroup: true,
            name: self.name,
            description: self.description,
            handle: self.handle,
            date_delete: self.date_delete,
            created_by: "U0001".to_string(),
            prefs: UserGroupPrefs {
                channels: self.channels,
                groups: Vec::new(),
            },
            user_count: self.user_count,
            users: self.users,
            ..UserGroup::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let group = UserGroupBuilder::new("S1").build();
        assert_eq!(group.id, "S1");
        assert_eq!(group.name, "Group S1");
        assert_eq!(group.handle, "group-s1");
        assert!(group.is_usergroup);
        assert!(!group.is_disabled());
    }

    #[test]
    fn test_builder_disabled_group() {
        let group = UserGroupBuilder::new("S1").disabled_at(1446747568).build();
        assert!(group.is_disabled());
    }
}
