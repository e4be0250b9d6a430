//! Error taxonomy for archive reading and model construction.
//!
//! The library never retries and never returns a partial result: any read
//! or decode failure aborts the enclosing operation and surfaces an error
//! naming the offending entry, team, or conversation prefix so the corrupt
//! part of the archive can be pinpointed.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the archive container and the enterprise model builder.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file could not be opened or read.
    #[error("error reading source {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure while reading archive bytes at some offset.
    #[error("error reading archive data")]
    Read(#[from] std::io::Error),

    /// The file is not a structurally valid zip archive.
    #[error("invalid zip archive: {0}")]
    Format(&'static str),

    /// An entry uses a compression method this reader does not handle.
    #[error("entry {name:?} uses unsupported compression method {method}")]
    UnsupportedCompression { name: String, method: u16 },

    /// No entry with the requested name exists in the archive.
    #[error("entry {name:?} not found in archive")]
    NotFound { name: String },

    /// An entry decompressed fine but its bytes are not the expected JSON.
    #[error("error decoding entry {name:?}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A per-team collection failed to decode during grid construction.
    #[error("error loading team {team:?}")]
    Team {
        team: String,
        #[source]
        source: Box<ArchiveError>,
    },
}

impl ArchiveError {
    pub(crate) fn for_team(team: &str, source: ArchiveError) -> Self {
        ArchiveError::Team {
            team: team.to_string(),
            source: Box::new(source),
        }
    }
}

/// Errors raised by the attachment download collaborator.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The private download URL on a file record does not parse.
    #[error("error parsing url for file {id:?}: {url:?}")]
    InvalidUrl { id: String, url: String },

    /// A filesystem failure while creating or writing the destination.
    #[error("error writing destination {path:?} for file {id:?}")]
    Io {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP fetch of the attachment body failed.
    #[error("error downloading file {id:?} from {url:?}")]
    Network {
        id: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
