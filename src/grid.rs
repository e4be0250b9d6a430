//! Enterprise grid reconstruction.
//!
//! A Slack Enterprise Grid export is a flat zip namespace; this module
//! rebuilds the hierarchical model from it. Top-level collections are
//! loaded eagerly when the grid is built. Conversation message streams
//! are reconstructed on demand from the many per-day fragment files under
//! a conversation's path prefix, and are not cached.

use tracing::{debug, info};

use crate::error::ArchiveError;
use crate::io::ReadAt;
use crate::model::{
    DirectMessage, Group, IntegrationLogMessage, Message, MultiPartyInstantMessage, Team, User,
};
use crate::zip::Archive;

/// The root aggregate of an export: organization-wide collections plus
/// one [`Team`] per workspace in the grid.
///
/// Borrows the archive it was built from; the archive must stay open for
/// as long as the grid (or any message stream derived from it) is in use,
/// which the lifetime enforces.
#[derive(Debug)]
pub struct EnterpriseGrid<'a, R: ReadAt> {
    archive: &'a Archive<R>,
    direct_messages: Vec<DirectMessage>,
    groups: Vec<Group>,
    integration_log_messages: Vec<IntegrationLogMessage>,
    multi_party_instant_messages: Vec<MultiPartyInstantMessage>,
    organization_users: Vec<User>,
    teams: Vec<Team>,
}

impl<'a, R: ReadAt> EnterpriseGrid<'a, R> {
    /// Build the grid from an open archive.
    ///
    /// Decodes the fixed-name top-level entries, then discovers teams by
    /// scanning `teams/` directory markers one level deep and loading the
    /// three per-team collections for each. Construction is
    /// all-or-nothing: any decode failure aborts the build, and per-team
    /// failures name the offending team.
    pub async fn build(archive: &'a Archive<R>) -> Result<EnterpriseGrid<'a, R>, ArchiveError> {
        let direct_messages: Vec<DirectMessage> = archive.read_json("dms.json").await?;
        let organization_users: Vec<User> = archive.read_json("org_users.json").await?;
        let multi_party_instant_messages: Vec<MultiPartyInstantMessage> =
            archive.read_json("mpims.json").await?;
        let groups: Vec<Group> = archive.read_json("groups.json").await?;
        let integration_log_messages: Vec<IntegrationLogMessage> =
            archive.read_json("integration_logs.json").await?;

        // Team discovery follows the archive's native entry order and
        // does not deduplicate repeated markers.
        let markers: Vec<String> = archive
            .entries_with_prefix("teams/")
            .filter_map(|e| team_name(&e.name))
            .map(str::to_string)
            .collect();

        let mut teams = Vec::with_capacity(markers.len());
        for name in markers {
            let channels = archive
                .read_json(&format!("teams/{name}/channels.json"))
                .await
                .map_err(|e| ArchiveError::for_team(&name, e))?;
            let team_groups = archive
                .read_json(&format!("teams/{name}/groups.json"))
                .await
                .map_err(|e| ArchiveError::for_team(&name, e))?;
            let users = archive
                .read_json(&format!("teams/{name}/users.json"))
                .await
                .map_err(|e| ArchiveError::for_team(&name, e))?;

            debug!(team = %name, "loaded team");
            teams.push(Team {
                name,
                channels,
                groups: team_groups,
                users,
            });
        }

        info!(
            teams = teams.len(),
            direct_messages = direct_messages.len(),
            mpims = multi_party_instant_messages.len(),
            organization_users = organization_users.len(),
            "built enterprise grid"
        );

        Ok(EnterpriseGrid {
            archive,
            direct_messages,
            groups,
            integration_log_messages,
            multi_party_instant_messages,
            organization_users,
            teams,
        })
    }

    pub fn direct_messages(&self) -> &[DirectMessage] {
        &self.direct_messages
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn integration_log_messages(&self) -> &[IntegrationLogMessage] {
        &self.integration_log_messages
    }

    pub fn multi_party_instant_messages(&self) -> &[MultiPartyInstantMessage] {
        &self.multi_party_instant_messages
    }

    pub fn organization_users(&self) -> &[User] {
        &self.organization_users
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Reconstruct a conversation's message stream from its fragment files.
    ///
    /// Slack shards conversation history into one JSON file per calendar
    /// day; this concatenates every non-directory entry under `prefix` in
    /// the archive's enumeration order. The result is NOT re-sorted by
    /// timestamp; callers needing chronological order across fragments
    /// must sort explicitly. A prefix matching no entries yields an empty
    /// stream, not an error; a decode failure on any fragment aborts the
    /// whole call.
    pub async fn messages(&self, prefix: &str) -> Result<Vec<Message>, ArchiveError> {
        let fragments: Vec<String> = self
            .archive
            .entries_with_prefix(prefix)
            .filter(|e| !e.is_directory())
            .map(|e| e.name.clone())
            .collect();

        let mut messages = Vec::new();
        for name in fragments {
            let mut fragment: Vec<Message> = self.archive.read_json(&name).await?;
            messages.append(&mut fragment);
        }
        Ok(messages)
    }

    /// Every conversation prefix in the grid, in listing order: mpims,
    /// direct messages, then each team's channels and groups.
    ///
    /// Both consumers (listing and downloading) walk conversations
    /// through this, so they traverse the archive identically.
    pub fn conversation_prefixes(&self) -> Vec<String> {
        let mut prefixes = Vec::new();
        for mpim in &self.multi_party_instant_messages {
            prefixes.push(format!("{}/", mpim.name));
        }
        for dm in &self.direct_messages {
            prefixes.push(format!("{}/", dm.id));
        }
        for team in &self.teams {
            for channel in &team.channels {
                prefixes.push(format!("teams/{}/{}/", team.name, channel.name));
            }
            for group in &team.groups {
                prefixes.push(format!("teams/{}/{}/", team.name, group.name));
            }
        }
        prefixes
    }
}

/// Extract the team name from a `teams/` directory marker entry.
///
/// A marker qualifies only if it is a direct child directory of `teams/`:
/// not `teams/` itself, '/'-terminated, and with no deeper nesting
/// (`teams/acme/sub/` is not a team named `acme/sub`).
fn team_name(entry_name: &str) -> Option<&str> {
    let segment = entry_name.strip_prefix("teams/")?.strip_suffix('/')?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    Some(segment)
}
