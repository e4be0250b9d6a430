use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A custom profile field value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "alt")]
    pub alternate: String,
}

/// A user's full profile as carried in `org_users.json` and per-team
/// `users.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub avatar_hash: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_name_normalized: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, FieldValue>>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_invited_by: Option<String>,
    #[serde(default)]
    pub is_custom_image: bool,
    #[serde(default)]
    pub image_24: String,
    #[serde(default)]
    pub image_32: String,
    #[serde(default)]
    pub image_48: String,
    #[serde(default)]
    pub image_72: String,
    #[serde(default)]
    pub image_192: String,
    #[serde(default)]
    pub image_512: String,
    #[serde(default)]
    pub image_1024: String,
    #[serde(default)]
    pub image_original: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub real_name_normalized: String,
    #[serde(default)]
    pub skype: String,
    #[serde(default)]
    pub status_emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_emoji_display_info: Option<Vec<String>>,
    #[serde(default)]
    pub status_expiration: i64,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub status_text_canonical: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub title: String,
}

/// Enterprise-grid-wide identity, present only for grid users. Records
/// which teams within the grid the user belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnterpriseUser {
    pub id: String,
    #[serde(default)]
    pub enterprise_id: String,
    #[serde(default)]
    pub enterprise_name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub enterprise_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_user: Option<EnterpriseUser>,
    #[serde(default)]
    pub enterprise_id: String,
    pub id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_app_user: bool,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub is_email_confirmed: bool,
    #[serde(default)]
    pub is_invited_user: bool,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub is_primary_owner: bool,
    #[serde(default)]
    pub is_restricted: bool,
    #[serde(default)]
    pub is_ultra_restricted: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub real_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,
    #[serde(default, rename = "tz")]
    pub time_zone: String,
    #[serde(default, rename = "tz_offset")]
    pub time_zone_offset: i64,
    #[serde(default, rename = "tz_label")]
    pub time_zone_label: String,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub who_can_share_contact_card: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grid_user_carries_enterprise_membership() {
        let user: User = serde_json::from_value(json!({
            "id": "U1",
            "name": "alice",
            "enterprise_user": {
                "id": "U1",
                "enterprise_id": "E1",
                "teams": ["T1", "T2"]
            }
        }))
        .unwrap();

        let enterprise = user.enterprise_user.unwrap();
        assert_eq!(enterprise.teams, ["T1", "T2"]);
    }

    #[test]
    fn plain_user_has_no_enterprise_identity() {
        let user: User = serde_json::from_value(json!({"id": "U2", "name": "bob"})).unwrap();
        assert!(user.enterprise_user.is_none());
    }
}
