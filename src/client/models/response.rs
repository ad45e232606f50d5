//! Response envelopes
//!
//! Every Web API response embeds the same success/error status; the
//! payload field next to it differs per operation, so each operation
//! decodes into its own envelope rather than one wide struct. Which
//! payload is valid for a response is then a compile-time property.

use serde::Deserialize;

use super::group::UserGroup;
use crate::error::ApiError;

/// Success/error status embedded in every envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiStatus {
    /// True when the platform accepted the request
    #[serde(default)]
    pub ok: bool,
    /// Machine-readable rejection code when `ok` is false
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiStatus {
    /// Turn a failed status into a domain rejection.
    pub fn check(&self) -> Result<(), ApiError> {
        if self.ok {
            Ok(())
        } else {
            Err(ApiError::Rejected(
                self.error
                    .clone()
                    .unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }
}

/// Envelope for operations returning a single group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserGroupResponse {
    #[serde(flatten)]
    pub status: ApiStatus,
    #[serde(default)]
    pub usergroup: UserGroup,
}

impl UserGroupResponse {
    /// Unwrap the payload, discarding it on a failed status.
    pub fn into_usergroup(self) -> Result<UserGroup, ApiError> {
        self.status.check()?;
        Ok(self.usergroup)
    }
}

/// Envelope for the list operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserGroupListResponse {
    #[serde(flatten)]
    pub status: ApiStatus,
    #[serde(default)]
    pub usergroups: Vec<UserGroup>,
}

impl UserGroupListResponse {
    /// Unwrap the groups in the platform's original order.
    pub fn into_usergroups(self) -> Result<Vec<UserGroup>, ApiError> {
        self.status.check()?;
        Ok(self.usergroups)
    }
}

/// Envelope for the member listing operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserGroupMembersResponse {
    #[serde(flatten)]
    pub status: ApiStatus,
    #[serde(default)]
    pub users: Vec<String>,
}

impl UserGroupMembersResponse {
    /// Unwrap the member id list.
    pub fn into_users(self) -> Result<Vec<String>, ApiError> {
        self.status.check()?;
        Ok(self.users)
    }
}
