use serde::{Deserialize, Serialize};

use super::user::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub last_set: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Purpose {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub last_set: i64,
}

/// A public channel within a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_general: bool,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub topic: Topic,
    #[serde(default)]
    pub purpose: Purpose,
}

/// A private group. Shaped like [`Channel`] minus the `is_general` flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub topic: Topic,
    #[serde(default)]
    pub purpose: Purpose,
}

/// A conversation between exactly the users in `members`. Its message
/// fragments live under the `<id>/` prefix in the archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub id: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Like a direct message but with more than two participants; its `name`
/// (not its id) is the storage path segment for message fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPartyInstantMessage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub members: Vec<String>,
}

/// One workspace within the enterprise grid.
///
/// The name comes from the team's directory segment under `teams/`, not
/// from any embedded field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// The name of the team
    pub name: String,
    /// The public channels for the team
    pub channels: Vec<Channel>,
    /// The private groups for the team
    pub groups: Vec<Group>,
    /// The list of users for the team
    pub users: Vec<User>,
}

/// One row of `integration_logs.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationLogMessage {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub change_type: String,
    #[serde(default)]
    pub admin_app_id: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_type: String,
}
