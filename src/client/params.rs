//! Per-operation request parameters
//!
//! Each operation takes a parameter struct whose zero value means
//! "use the server defaults". Setters chain and the last write to a
//! field wins, so callers opt into exactly the parameters they need
//! without positional-argument bloat.
//!
//! # Example
//! ```
//! use slack_usergroups::client::params::ListUserGroupsParams;
//!
//! let params = ListUserGroupsParams::new()
//!     .include_disabled(true)
//!     .team_id("T0001");
//! ```

use super::form::FormRequest;

/// Optional parameters for creating a User Group.
///
/// All fields use plain semantics: an empty value is never
/// transmitted, because creation has no "explicitly clear" case.
#[derive(Debug, Clone, Default)]
pub struct CreateUserGroupParams {
    /// Mention handle; must be unique within the team
    pub handle: String,
    /// Short description of the group
    pub description: String,
    /// Default channel ids for the group
    pub channels: Vec<String>,
    /// Owning team, for org-wide tokens
    pub team_id: String,
}

impl CreateUserGroupParams {
    pub fn new() -> Self {
        Self::default()
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

    /// Set the default channels.
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = channels;
        self
    }

    /// Set the owning team id.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub(crate) fn apply(&self, form: &mut FormRequest) {
        form.field_nonempty("handle", &self.handle);
        form.field_nonempty("description", &self.description);
        form.list_nonempty("channels", &self.channels);
        form.field_nonempty("team_id", &self.team_id);
    }
}

/// Optional parameters for disabling or enabling a User Group.
///
/// Shared by both operations; they take the same wire parameters.
#[derive(Debug, Clone, Default)]
pub struct DisableUserGroupParams {
    /// Include the member count in the returned group
    pub include_count: bool,
    /// Owning team, for org-wide tokens
    pub team_id: String,
}

impl DisableUserGroupParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the member count in the response.
    pub fn include_count(mut self, on: bool) -> Self {
        self.include_count = on;
        self
    }

    /// Set the owning team id.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub(crate) fn apply(&self, form: &mut FormRequest) {
        form.flag("include_count", self.include_count);
        form.field_nonempty("team_id", &self.team_id);
    }
}

/// Optional parameters for listing User Groups.
#[derive(Debug, Clone, Default)]
pub struct ListUserGroupsParams {
    /// Include the member count for each group
    pub include_count: bool,
    /// Include disabled groups in the listing
    pub include_disabled: bool,
    /// Include the member id list for each group
    pub include_users: bool,
    /// Owning team, for org-wide tokens
    pub team_id: String,
}

impl ListUserGroupsParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the member count for each group.
    pub fn include_count(mut self, on: bool) -> Self {
        self.include_count = on;
        self
    }

    /// Include disabled groups.
    pub fn include_disabled(mut self, on: bool) -> Self {
        self.include_disabled = on;
        self
    }

    /// Request the member id list for each group.
    pub fn include_users(mut self, on: bool) -> Self {
        self.include_users = on;
        self
    }

    /// Set the owning team id.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub(crate) fn apply(&self, form: &mut FormRequest) {
        form.flag("include_count", self.include_count);
        form.flag("include_disabled", self.include_disabled);
        form.flag("include_users", self.include_users);
        form.field_nonempty("team_id", &self.team_id);
    }
}

/// Optional parameters for updating a User Group.
///
/// `name` and `handle` use plain semantics (empty means untouched).
/// `description`, `channels` and `team_id` are explicit-presence
/// fields: `None` leaves the remote value untouched, while
/// `Some(empty)` transmits an empty value and clears it. A plain
/// "empty means unset" encoding cannot express that second case.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserGroupParams {
    /// New group name
    pub name: String,
    /// New mention handle
    pub handle: String,
    /// New description; `Some("")` clears it
    pub description: Option<String>,
    /// New default channels; `Some(vec![])` clears them
    pub channels: Option<Vec<String>>,
    /// New owning team
    pub team_id: Option<String>,
}

impl UpdateUserGroupParams {
    pub fn new() -> Self {
        Self::default()
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

    /// Set the description. Pass an empty string to clear it.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default channels. Pass an empty vec to clear them.
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set the owning team id.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub(crate) fn apply(&self, form: &mut FormRequest) {
        form.field_nonempty("name", &self.name);
        form.field_nonempty("handle", &self.handle);
        form.field_present("description", self.description.as_deref());
        form.list_present("channels", self.channels.as_deref());
        form.field_present("team_id", self.team_id.as_deref());
    }
}

/// Optional parameters for listing the members of a User Group.
#[derive(Debug, Clone, Default)]
pub struct ListUserGroupMembersParams {
    /// Include members of disabled groups
    pub include_disabled: bool,
    /// Owning team, for org-wide tokens
    pub team_id: String,
}

impl ListUserGroupMembersParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include members of disabled groups.
    pub fn include_disabled(mut self, on: bool) -> Self {
        self.include_disabled = on;
        self
    }

    /// Set the owning team id.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub(crate) fn apply(&self, form: &mut FormRequest) {
        form.flag("include_disabled", self.include_disabled);
        form.field_nonempty("team_id", &self.team_id);
    }
}

/// Optional parameters for replacing the members of a User Group.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserGroupMembersParams {
    /// Include the member count in the returned group
    pub include_count: bool,
    /// Owning team, for org-wide tokens
    pub team_id: String,
}

impl UpdateUserGroupMembersParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the member count in the response.
    pub fn include_count(mut self, on: bool) -> Self {
        self.include_count = on;
        self
    }

    /// Set the owning team id.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub(crate) fn apply(&self, form: &mut FormRequest) {
        form.flag("include_count", self.include_count);
        form.field_nonempty("team_id", &self.team_id);
    }
}
