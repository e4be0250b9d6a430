//! Attachment downloading.
//!
//! Takes the [`MessageFile`] records discovered in an export and mirrors
//! their content to disk under a partitioned layout:
//!
//! ```text
//! year=<Y>/month=<M>/day=<D>/user=<uploader>/filetype=<type>/id=<fileID>/<filename>
//! ```
//!
//! The filename is the final path segment of the file's private download
//! URL and the date comes from its `created` Unix timestamp (UTC).
//! Tombstoned files are never fetched. An existing destination file of
//! the same byte size is not re-fetched unless overwriting is requested.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use reqwest::Client;
use tracing::{debug, info};

use crate::error::DownloadError;
use crate::model::MessageFile;

/// Compute the partitioned destination path for one attachment.
pub fn destination_path(dest: &Path, file: &MessageFile) -> Result<PathBuf, DownloadError> {
    let url = parse_download_url(file)?;
    let filename = url
        .path()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    let created = DateTime::from_timestamp(file.created.unwrap_or(0), 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    Ok(dest
        .join(format!("year={}", created.year()))
        .join(format!("month={}", created.month()))
        .join(format!("day={}", created.day()))
        .join(format!("user={}", file.user.as_deref().unwrap_or_default()))
        .join(format!(
            "filetype={}",
            file.file_type.as_deref().unwrap_or_default()
        ))
        .join(format!("id={}", file.id))
        .join(filename))
}

/// Whether an attachment needs fetching given what is already on disk.
///
/// A same-sized existing file is assumed current and skipped; requesting
/// overwrite always re-fetches.
pub fn should_fetch(existing_size: Option<u64>, file_size: Option<u64>, overwrite: bool) -> bool {
    if overwrite {
        return true;
    }
    !matches!((existing_size, file_size), (Some(e), Some(s)) if e == s)
}

/// Download every non-tombstoned attachment in `files` under `dest`.
///
/// Stops at the first failure; already-downloaded files remain on disk.
pub async fn download_files(
    files: &[MessageFile],
    dest: &Path,
    overwrite: bool,
) -> Result<(), DownloadError> {
    let client = Client::new();

    for file in files {
        if file.is_tombstone() {
            debug!(id = %file.id, "skipping tombstoned file");
            continue;
        }

        let path = destination_path(dest, file)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| DownloadError::Io {
                    id: file.id.clone(),
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let existing_size = tokio::fs::metadata(&path).await.ok().map(|m| m.len());
        if !should_fetch(existing_size, file.size, overwrite) {
            debug!(id = %file.id, path = %path.display(), "already downloaded, skipping");
            continue;
        }

        let url = parse_download_url(file)?;
        let body = fetch(&client, file, url).await?;

        tokio::fs::write(&path, &body)
            .await
            .map_err(|source| DownloadError::Io {
                id: file.id.clone(),
                path: path.clone(),
                source,
            })?;

        info!(id = %file.id, bytes = body.len(), path = %path.display(), "downloaded file");
    }

    Ok(())
}

fn parse_download_url(file: &MessageFile) -> Result<reqwest::Url, DownloadError> {
    let raw = file.url_private_download.as_deref().unwrap_or_default();
    reqwest::Url::parse(raw).map_err(|_| DownloadError::InvalidUrl {
        id: file.id.clone(),
        url: raw.to_string(),
    })
}

async fn fetch(
    client: &Client,
    file: &MessageFile,
    url: reqwest::Url,
) -> Result<Vec<u8>, DownloadError> {
    let network_err = |source: reqwest::Error| DownloadError::Network {
        id: file.id.clone(),
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(&network_err)?;

    let body = response.bytes().await.map_err(&network_err)?;
    Ok(body.to_vec())
}
