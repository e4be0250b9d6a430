//! # slack-archiver
//!
//! Read a Slack Enterprise Grid export zip and reconstruct its logical
//! model: teams, channels, users, conversations, messages, and file
//! attachments.
//!
//! The export is a flat zip namespace (`dms.json`, `org_users.json`,
//! `teams/<name>/channels.json`, per-day message fragment files under
//! each conversation's prefix). [`Archive`] presents the zip as a
//! named-entry store with random access; [`EnterpriseGrid`] rebuilds the
//! hierarchy from it and reconstructs conversation message streams on
//! demand by merging per-day fragments.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use slack_archiver::{Archive, EnterpriseGrid};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let archive = Archive::open(Path::new("export.zip")).await?;
//!     let grid = EnterpriseGrid::build(&archive).await?;
//!
//!     for team in grid.teams() {
//!         println!("{}: {} channels", team.name, team.channels.len());
//!     }
//!
//!     let messages = grid.messages("teams/acme/general/").await?;
//!     println!("{} messages", messages.len());
//!
//!     drop(grid);
//!     archive.close()?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod download;
pub mod error;
pub mod grid;
pub mod io;
pub mod model;
pub mod zip;

pub use cli::Cli;
pub use error::{ArchiveError, DownloadError};
pub use grid::EnterpriseGrid;
pub use io::{LocalFileReader, ReadAt};
pub use zip::{Archive, ZipEntry};
