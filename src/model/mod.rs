//! Data contracts for the records inside a Slack Enterprise Grid export.
//!
//! These mirror the JSON payloads Slack writes into the export zip.
//! Fields the export omits when empty are modeled as `Option` and skipped
//! on re-encode, so decoding a record and encoding it again preserves
//! every field that was present in the original payload.

mod conversation;
mod message;
mod user;

pub use conversation::{
    Channel, DirectMessage, Group, IntegrationLogMessage, MultiPartyInstantMessage, Purpose, Team,
    Topic,
};
pub use message::{
    BlockText, Message, MessageBlock, MessageBlockElement, MessageFile, MessageProfile,
    MessageReaction, MessageReply, TextObject,
};
pub use user::{EnterpriseUser, FieldValue, Profile, User};
