use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile summary embedded on each message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageProfile {
    #[serde(default)]
    pub avatar_hash: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub image_72: String,
    #[serde(default)]
    pub is_restricted: bool,
    #[serde(default)]
    pub is_ultra_restricted: bool,
    #[serde(default)]
    pub team: String,
}

/// The polymorphic `text` field of a block element: either a bare string
/// or a typed text object (`{"type":"plain_text","text":...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockText {
    Plain(String),
    Styled(TextObject),
}

/// A typed text object inside a rich-content block.
///
/// Extra fields the export may carry (styles, links) are kept in `rest`
/// so re-encoding does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbatim: Option<bool>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageBlockElement {
    /// Set when the element is a button.
    #[serde(default)]
    pub action_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<BlockText>,
    /// Set when the element is an emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<MessageBlockElement>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageBlock {
    #[serde(default)]
    pub block_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<MessageBlockElement>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageReaction {
    pub name: String,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub count: u32,
}

/// An attachment referenced by a message.
///
/// `mode` determines lifecycle state: `hosted` content is retrievable,
/// `tombstone` content has been permanently removed and must never be
/// fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageFile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "mimetype", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, rename = "filetype", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_external: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url_shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_as_bot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_private: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_private_download: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_display_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_80: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_160: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_360: Option<String>,
    #[serde(default, rename = "thumb_360_w", skip_serializing_if = "Option::is_none")]
    pub thumb_360_width: Option<u32>,
    #[serde(default, rename = "thumb_360_h", skip_serializing_if = "Option::is_none")]
    pub thumb_360_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_480: Option<String>,
    #[serde(default, rename = "thumb_480_w", skip_serializing_if = "Option::is_none")]
    pub thumb_480_width: Option<u32>,
    #[serde(default, rename = "thumb_480_h", skip_serializing_if = "Option::is_none")]
    pub thumb_480_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_720: Option<String>,
    #[serde(default, rename = "thumb_720_w", skip_serializing_if = "Option::is_none")]
    pub thumb_720_width: Option<u32>,
    #[serde(default, rename = "thumb_720_h", skip_serializing_if = "Option::is_none")]
    pub thumb_720_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_800: Option<String>,
    #[serde(default, rename = "thumb_800_w", skip_serializing_if = "Option::is_none")]
    pub thumb_800_width: Option<u32>,
    #[serde(default, rename = "thumb_800_h", skip_serializing_if = "Option::is_none")]
    pub thumb_800_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_960: Option<String>,
    #[serde(default, rename = "thumb_960_w", skip_serializing_if = "Option::is_none")]
    pub thumb_960_width: Option<u32>,
    #[serde(default, rename = "thumb_960_h", skip_serializing_if = "Option::is_none")]
    pub thumb_960_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_1024: Option<String>,
    #[serde(default, rename = "thumb_1024_w", skip_serializing_if = "Option::is_none")]
    pub thumb_1024_width: Option<u32>,
    #[serde(default, rename = "thumb_1024_h", skip_serializing_if = "Option::is_none")]
    pub thumb_1024_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_tiny: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_exif_rotation: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_public: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_starred: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_rich_preview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_access: Option<String>,
}

impl MessageFile {
    /// Content is hosted by Slack and retrievable.
    pub fn is_hosted(&self) -> bool {
        self.mode == "hosted"
    }

    /// Content has been permanently removed; only metadata remains.
    /// Tombstoned files must never be downloaded.
    pub fn is_tombstone(&self) -> bool {
        self.mode == "tombstone"
    }
}

/// Summary of one reply in a thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageReply {
    pub user: String,
    #[serde(rename = "ts")]
    pub timestamp: String,
}

/// One chat message from a conversation fragment file.
///
/// Timestamps are Slack's string-encoded decimals (`"1609459200.000100"`),
/// sortable both lexically and numerically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<MessageBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<MessageFile>>,
    #[serde(default)]
    pub client_msg_id: String,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<MessageReaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<MessageReply>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_users_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_users: Option<Vec<String>>,
    #[serde(default)]
    pub source_team: String,
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "thread_ts", skip_serializing_if = "Option::is_none")]
    pub thread_timestamp: Option<String>,
    #[serde(rename = "ts")]
    pub timestamp: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload: Option<bool>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub user_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<MessageProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn block_text_decodes_plain_string() {
        let element: MessageBlockElement =
            serde_json::from_value(json!({"type": "button", "action_id": "a1", "text": "Click"}))
                .unwrap();
        assert_eq!(element.text, Some(BlockText::Plain("Click".to_string())));
    }

    #[test]
    fn block_text_decodes_typed_object() {
        let element: MessageBlockElement = serde_json::from_value(json!({
            "type": "button",
            "action_id": "a1",
            "text": {"type": "plain_text", "text": "Click", "emoji": true}
        }))
        .unwrap();
        match element.text {
            Some(BlockText::Styled(ref obj)) => {
                assert_eq!(obj.kind, "plain_text");
                assert_eq!(obj.text.as_deref(), Some("Click"));
                assert_eq!(obj.emoji, Some(true));
            }
            other => panic!("expected styled text, got {other:?}"),
        }
    }

    #[test]
    fn tombstone_and_hosted_modes() {
        let hosted = MessageFile {
            id: "F1".to_string(),
            mode: "hosted".to_string(),
            ..Default::default()
        };
        let tombstone = MessageFile {
            id: "F2".to_string(),
            mode: "tombstone".to_string(),
            ..Default::default()
        };
        assert!(hosted.is_hosted() && !hosted.is_tombstone());
        assert!(tombstone.is_tombstone() && !tombstone.is_hosted());
    }

    #[test]
    fn message_round_trip_preserves_populated_fields() {
        let original = json!({
            "ts": "1609459200.000100",
            "type": "message",
            "user": "U1",
            "text": "hello",
            "thread_ts": "1609459200.000100",
            "reply_count": 2,
            "reactions": [{"name": "wave", "users": ["U2"], "count": 1}],
            "files": [{
                "id": "F1",
                "mode": "hosted",
                "created": 1609459200,
                "user": "U1",
                "filetype": "png",
                "size": 1024,
                "url_private_download": "https://files.example.com/F1/photo.png",
                "thumb_360": "https://files.example.com/F1/thumb.png",
                "thumb_360_w": 360,
                "thumb_360_h": 240
            }]
        });

        let decoded: Message = serde_json::from_value(original.clone()).unwrap();
        let reencoded: Value = serde_json::to_value(&decoded).unwrap();

        // Every field of the original payload must survive unchanged.
        let Value::Object(fields) = &original else {
            unreachable!()
        };
        for (key, value) in fields {
            assert_eq!(reencoded.get(key), Some(value), "field {key} was lost");
        }
    }

    #[test]
    fn file_round_trip_skips_absent_optionals() {
        let original = json!({"id": "F9", "mode": "tombstone"});
        let decoded: MessageFile = serde_json::from_value(original.clone()).unwrap();
        let reencoded: Value = serde_json::to_value(&decoded).unwrap();
        assert_eq!(reencoded.get("url_private_download"), None);
        assert_eq!(reencoded.get("id"), original.get("id"));
    }
}
