//! User Groups API data models
//!
//! Domain types returned by the API plus the response envelopes they
//! arrive in.

mod group;
mod response;

pub use group::{UserGroup, UserGroupPrefs};
pub use response::{ApiStatus, UserGroupListResponse, UserGroupMembersResponse, UserGroupResponse};
