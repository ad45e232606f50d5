//! reqwest-backed User Groups API client

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::UserGroupsApi;
use super::form::FormRequest;
use super::models::{
    UserGroup, UserGroupListResponse, UserGroupMembersResponse, UserGroupResponse,
};
use super::params::{
    CreateUserGroupParams, DisableUserGroupParams, ListUserGroupMembersParams,
    ListUserGroupsParams, UpdateUserGroupMembersParams, UpdateUserGroupParams,
};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Web API method names, one per remote action on the resource family.
const METHOD_CREATE: &str = "usergroups.create";
const METHOD_DISABLE: &str = "usergroups.disable";
const METHOD_ENABLE: &str = "usergroups.enable";
const METHOD_LIST: &str = "usergroups.list";
const METHOD_UPDATE: &str = "usergroups.update";
const METHOD_MEMBERS_LIST: &str = "usergroups.users.list";
const METHOD_MEMBERS_UPDATE: &str = "usergroups.users.update";

/// User Groups API client
///
/// Holds no mutable state; concurrent callers can share one instance
/// behind a reference without locking.
pub struct UserGroupsClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl UserGroupsClient {
    /// Create a new client from the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate_auth()?;
        let token = config.token.clone().unwrap_or_default();

        let http = HttpClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_host,
            token,
        })
    }

    /// Start a payload with the mandatory token field.
    fn form(&self) -> FormRequest {
        let mut form = FormRequest::new();
        form.field("token", &self.token);
        form
    }

    /// One request/response round trip: POST the form, decode the
    /// envelope.
    ///
    /// Fails only at the transport level (network, non-2xx status,
    /// malformed body). A domain rejection still decodes fine here and
    /// is unwrapped from the envelope status by the caller.
    async fn post_form<T: DeserializeOwned>(&self, method: &str, form: FormRequest) -> Result<T> {
        log::debug!("POST {method}");

        let url = format!("{}/{}", self.base_url, method);
        let response = self
            .http
            .post(&url)
            .form(form.fields())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {e}"))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {status}"));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {status}");
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }

    /// Disable and enable take the same payload shape.
    async fn set_enablement(
        &self,
        method: &str,
        usergroup: &str,
        params: &DisableUserGroupParams,
    ) -> Result<UserGroup> {
        let mut form = self.form();
        form.field("usergroup", usergroup);
        params.apply(&mut form);

        let response: UserGroupResponse = self.post_form(method, form).await?;
        Ok(response.into_usergroup()?)
    }
}

#[async_trait]
impl UserGroupsApi for UserGroupsClient {
    async fn create_user_group(
        &self,
        name: &str,
        params: CreateUserGroupParams,
    ) -> Result<UserGroup> {
        let mut form = self.form();
        form.field("name", name);
        params.apply(&mut form);

        let response: UserGroupResponse = self.post_form(METHOD_CREATE, form).await?;
        Ok(response.into_usergroup()?)
    }

    async fn disable_user_group(
        &self,
        usergroup: &str,
        params: DisableUserGroupParams,
    ) -> Result<UserGroup> {
        self.set_enablement(METHOD_DISABLE, usergroup, &params).await
    }

    async fn enable_user_group(
        &self,
        usergroup: &str,
        params: DisableUserGroupParams,
    ) -> Result<UserGroup> {
        self.set_enablement(METHOD_ENABLE, usergroup, &params).await
    }

    async fn list_user_groups(&self, params: ListUserGroupsParams) -> Result<Vec<UserGroup>> {
        let mut form = self.form();
        params.apply(&mut form);

        let response: UserGroupListResponse = self.post_form(METHOD_LIST, form).await?;
        Ok(response.into_usergroups()?)
    }

    async fn update_user_group(
        &self,
        usergroup: &str,
        params: UpdateUserGroupParams,
    ) -> Result<UserGroup> {
        let mut form = self.form();
        form.field("usergroup", usergroup);
        params.apply(&mut form);

        let response: UserGroupResponse = self.post_form(METHOD_UPDATE, form).await?;
        Ok(response.into_usergroup()?)
    }

    async fn list_user_group_members(
        &self,
        usergroup: &str,
        params: ListUserGroupMembersParams,
    ) -> Result<Vec<String>> {
        let mut form = self.form();
        form.field("usergroup", usergroup);
        params.apply(&mut form);

        let response: UserGroupMembersResponse = self.post_form(METHOD_MEMBERS_LIST, form).await?;
        Ok(response.into_users()?)
    }

    async fn update_user_group_members(
        &self,
        usergroup: &str,
        members: &str,
        params: UpdateUserGroupMembersParams,
    ) -> Result<UserGroup> {
        let mut form = self.form();
        form.field("usergroup", usergroup);
        form.field("users", members);
        params.apply(&mut form);

        let response: UserGroupResponse = self.post_form(METHOD_MEMBERS_UPDATE, form).await?;
        Ok(response.into_usergroup()?)
    }
}
