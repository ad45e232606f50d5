//! Typed async client for the Slack User Groups Web API.
//!
//! Covers the `usergroups.*` method family: creating, enabling,
//! disabling, listing and updating User Groups, and managing their
//! membership. Every call is a single form-encoded POST whose JSON
//! envelope either carries the requested payload or a rejection code.
//!
//! # Example
//!
//! ```no_run
//! use slack_usergroups::client::{UserGroupsApi, UserGroupsClient};
//! use slack_usergroups::client::params::CreateUserGroupParams;
//! use slack_usergroups::config::Config;
//!
//! # async fn demo() -> slack_usergroups::error::Result<()> {
//! let client = UserGroupsClient::new(Config::new("xoxb-my-token"))?;
//!
//! let group = client
//!     .create_user_group(
//!         "eng",
//!         CreateUserGroupParams::new().handle("engineering"),
//!     )
//!     .await?;
//! println!("created {}", group.id);
//! # Ok(())
//! # }
//! ```
//!
//! Operations return futures; dropping a future aborts the underlying
//! request. Deadlines beyond the client-wide request timeout are the
//! caller's business (`tokio::time::timeout` around the call).

pub mod client;
pub mod config;
pub mod error;

pub use client::{UserGroup, UserGroupPrefs, UserGroupsApi, UserGroupsClient};
pub use config::Config;
pub use error::{ApiError, ConfigError, Error, Result};
