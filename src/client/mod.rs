//! Slack User Groups API client
//!
//! The [`UserGroupsApi`] trait is the full API surface; production code
//! uses [`UserGroupsClient`] (reqwest-backed), tests swap in the mock
//! implementation from [`mock`].

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
pub mod form;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod params;

pub use http::UserGroupsClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockUserGroupsClient;
pub use models::{UserGroup, UserGroupPrefs};
pub use params::{
    CreateUserGroupParams, DisableUserGroupParams, ListUserGroupMembersParams,
    ListUserGroupsParams, UpdateUserGroupMembersParams, UpdateUserGroupParams,
};

/// User Groups API surface
///
/// One method per remote action on the `usergroups.*` family. Every
/// method is a single request/response round trip: no retries, no
/// caching, no local validation — malformed names or ids are rejected
/// by the platform, not here. Returned entities are snapshots; the
/// client holds no state besides its token.
///
/// Methods return plain futures, so cancellation is structural:
/// dropping a future aborts the in-flight request.
#[async_trait]
pub trait UserGroupsApi: Send + Sync {
    /// Create a new User Group named `name`.
    async fn create_user_group(
        &self,
        name: &str,
        params: CreateUserGroupParams,
    ) -> Result<UserGroup>;

    /// Disable an existing User Group.
    ///
    /// Disablement is a soft delete: the platform stamps `date_delete`
    /// and the group can later be re-enabled.
    async fn disable_user_group(
        &self,
        usergroup: &str,
        params: DisableUserGroupParams,
    ) -> Result<UserGroup>;

    /// Re-enable a previously disabled User Group.
    async fn enable_user_group(
        &self,
        usergroup: &str,
        params: DisableUserGroupParams,
    ) -> Result<UserGroup>;

    /// List User Groups for the team, in the order the platform
    /// returns them.
    async fn list_user_groups(&self, params: ListUserGroupsParams) -> Result<Vec<UserGroup>>;

    /// Update an existing User Group.
    ///
    /// `description`, `channels` and `team_id` distinguish "leave
    /// untouched" from "explicitly clear"; see
    /// [`UpdateUserGroupParams`].
    async fn update_user_group(
        &self,
        usergroup: &str,
        params: UpdateUserGroupParams,
    ) -> Result<UserGroup>;

    /// Retrieve the current member user ids of a User Group.
    async fn list_user_group_members(
        &self,
        usergroup: &str,
        params: ListUserGroupMembersParams,
    ) -> Result<Vec<String>>;

    /// Replace the member list of a User Group.
    ///
    /// `members` is a comma-joined list of user ids (`"U1,U2"`); the
    /// platform treats it as a complete replacement, not an increment.
    async fn update_user_group_members(
        &self,
        usergroup: &str,
        members: &str,
        params: UpdateUserGroupMembersParams,
    ) -> Result<UserGroup>;
}
