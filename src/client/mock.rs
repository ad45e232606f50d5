//! Mock User Groups API client for testing
//!
//! Provides a mock implementation of [`UserGroupsApi`] for unit
//! testing consumers without making real API calls.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::UserGroupsApi;
use super::models::{UserGroup, UserGroupPrefs};
use super::params::{
    CreateUserGroupParams, DisableUserGroupParams, ListUserGroupMembersParams,
    ListUserGroupsParams, UpdateUserGroupMembersParams, UpdateUserGroupParams,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure canned responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockUserGroupsClient::new()
///     .with_groups(vec![UserGroupBuilder::new("S1").build()])
///     .await;
///
/// let groups = mock.list_user_groups(ListUserGroupsParams::new()).await?;
/// assert_eq!(groups.len(), 1);
/// ```
#[derive(Default)]
pub struct MockUserGroupsClient {
    /// Groups to return from list_user_groups
    groups: Arc<Mutex<Vec<UserGroup>>>,
    /// Group to return from single-entity operations
    group: Arc<Mutex<Option<UserGroup>>>,
    /// Member ids to return from list_user_group_members
    members: Arc<Mutex<Vec<String>>>,
    /// Error to return (if any), consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub create: usize,
    pub disable: usize,
    pub enable: usize,
    pub list: usize,
    pub update: usize,
    pub list_members: usize,
    pub update_members: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.create
            + self.disable
            + self.enable
            + self.list
            + self.update
            + self.list_members
            + self.update_members
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The operation called (e.g. "create", "update_members")
    pub operation: String,
    /// Target group id, where the operation takes one
    pub usergroup: Option<String>,
    /// Pre-joined member id list, for update_members
    pub members: Option<String>,
}

impl MockUserGroupsClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure groups to return from list_user_groups.
    pub async fn with_groups(self, groups: Vec<UserGroup>) -> Self {
        *self.groups.lock().await = groups;
        self
    }

    /// Configure the group returned by single-entity operations.
    pub async fn with_group(self, group: UserGroup) -> Self {
        *self.group.lock().await = Some(group);
        self
    }

    /// Configure member ids to return from list_user_group_members.
    pub async fn with_members(self, members: Vec<String>) -> Self {
        *self.members.lock().await = members;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a captured request for test assertions.
    async fn capture_request(
        &self,
        operation: &str,
        usergroup: Option<&str>,
        members: Option<&str>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            operation: operation.to_string(),
            usergroup: usergroup.map(|s| s.to_string()),
            members: members.map(|s| s.to_string()),
        });
    }

    async fn canned_group(&self, id: &str) -> UserGroup {
        self.group.lock().await.clone().unwrap_or_else(|| UserGroup {
            id: id.to_string(),
            is_usergroup: true,
            prefs: UserGroupPrefs::default(),
            ..UserGroup::default()
        })
    }
}

#[async_trait]
impl UserGroupsApi for MockUserGroupsClient {
    async fn create_user_group(
        &self,
        name: &str,
        _params: CreateUserGroupParams,
    ) -> Result<UserGroup> {
        self.check_error().await?;
        self.capture_request("create", None, None).await;
        self.call_count.lock().await.create += 1;

        let mut group = self.canned_group("S-mock").await;
        if group.name.is_empty() {
            group.name = name.to_string();
        }
        Ok(group)
    }

    async fn disable_user_group(
        &self,
        usergroup: &str,
        _params: DisableUserGroupParams,
    ) -> Result<UserGroup> {
        self.check_error().await?;
        self.capture_request("disable", Some(usergroup), None).await;
        self.call_count.lock().await.disable += 1;

        Ok(self.canned_group(usergroup).await)
    }

    async fn enable_user_group(
        &self,
        usergroup: &str,
        _params: DisableUserGroupParams,
    ) -> Result<UserGroup> {
        self.check_error().await?;
        self.capture_request("enable", Some(usergroup), None).await;
        self.call_count.lock().await.enable += 1;

        Ok(self.canned_group(usergroup).await)
    }

    async fn list_user_groups(&self, _params: ListUserGroupsParams) -> Result<Vec<UserGroup>> {
        self.check_error().await?;
        self.capture_request("list", None, None).await;
        self.call_count.lock().await.list += 1;

        Ok(self.groups.lock().await.clone())
    }

    async fn update_user_group(
        &self,
        usergroup: &str,
        _params: UpdateUserGroupParams,
    ) -> Result<UserGroup> {
        self.check_error().await?;
        self.capture_request("update", Some(usergroup), None).await;
        self.call_count.lock().await.update += 1;

        Ok(self.canned_group(usergroup).await)
    }

    async fn list_user_group_members(
        &self,
        usergroup: &str,
        _params: ListUserGroupMembersParams,
    ) -> Result<Vec<String>> {
        self.check_error().await?;
        self.capture_request("list_members", Some(usergroup), None)
            .await;
        self.call_count.lock().await.list_members += 1;

        Ok(self.members.lock().await.clone())
    }

    async fn update_user_group_members(
        &self,
        usergroup: &str,
        members: &str,
        _params: UpdateUserGroupMembersParams,
    ) -> Result<UserGroup> {
        self.check_error().await?;
        self.capture_request("update_members", Some(usergroup), Some(members))
            .await;
        self.call_count.lock().await.update_members += 1;

        Ok(self.canned_group(usergroup).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::UserGroupBuilder;

    #[tokio::test]
    async fn test_mock_returns_configured_groups() {
        let mock = MockUserGroupsClient::new()
            .with_groups(vec![
                UserGroupBuilder::new("S1").build(),
                UserGroupBuilder::new("S2").build(),
            ])
            .await;

        let groups = mock
            .list_user_groups(ListUserGroupsParams::new())
            .await
            .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(mock.call_counts().await.list, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_one_shot() {
        let mock = MockUserGroupsClient::new()
            .with_error(ApiError::Rejected("no_such_subteam".to_string()))
            .await;

        assert!(
            mock.disable_user_group("S1", DisableUserGroupParams::new())
                .await
                .is_err()
        );
        assert!(
            mock.disable_user_group("S1", DisableUserGroupParams::new())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_mock_captures_member_updates() {
        let mock = MockUserGroupsClient::new();
        mock.update_user_group_members("S1", "U1,U2", UpdateUserGroupMembersParams::new())
            .await
            .unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].operation, "update_members");
        assert_eq!(captured[0].usergroup.as_deref(), Some("S1"));
        assert_eq!(captured[0].members.as_deref(), Some("U1,U2"));
    }
}
