//! The archive container: a zip file presented as a named-entry store.

use std::path::Path;
use std::sync::Arc;

use flate2::read::DeflateDecoder;
use serde::de::DeserializeOwned;
use std::io::Read;

use crate::error::ArchiveError;
use crate::io::{LocalFileReader, ReadAt};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipEntry};

/// An opened export archive.
///
/// The entry index is parsed eagerly on open; entry content is read on
/// demand. The archive owns the underlying file handle, which is released
/// when the archive is dropped or [`close`](Archive::close)d. Anything
/// borrowing the archive (the enterprise grid, message streams) is tied to
/// its lifetime, so reads after close are unrepresentable.
#[derive(Debug)]
pub struct Archive<R: ReadAt> {
    parser: ZipParser<R>,
    entries: Vec<ZipEntry>,
}

impl Archive<LocalFileReader> {
    /// Open a local export archive and parse its entry index.
    pub async fn open(path: &Path) -> Result<Self, ArchiveError> {
        let reader = LocalFileReader::new(path).map_err(|source| ArchiveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(Arc::new(reader)).await
    }
}

impl<R: ReadAt> Archive<R> {
    /// Build an archive over any random-access source.
    pub async fn from_reader(reader: Arc<R>) -> Result<Self, ArchiveError> {
        let parser = ZipParser::new(reader);
        let entries = parser.list_entries().await?;
        Ok(Self { parser, entries })
    }

    /// All entries, in the archive's native enumeration order.
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Entries whose name starts with `prefix`, preserving native order.
    ///
    /// An empty prefix yields every entry. Duplicate names, if the
    /// producer wrote any, are yielded as-is.
    pub fn entries_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ZipEntry> {
        self.entries
            .iter()
            .filter(move |e| e.name.starts_with(prefix))
    }

    /// Decompress one entry's content by exact name.
    pub async fn read_bytes(&self, name: &str) -> Result<Vec<u8>, ArchiveError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ArchiveError::NotFound {
                name: name.to_string(),
            })?;
        self.read_entry(entry).await
    }

    /// Decompress the content of an already-located entry.
    pub async fn read_entry(&self, entry: &ZipEntry) -> Result<Vec<u8>, ArchiveError> {
        let data_offset = self.parser.data_offset(entry).await?;

        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser.reader().read_at(data_offset, &mut raw).await?;

        match entry.compression_method {
            CompressionMethod::Stored => Ok(raw),
            CompressionMethod::Deflate => {
                let mut decoded = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(raw.as_slice()).read_to_end(&mut decoded)?;
                Ok(decoded)
            }
            CompressionMethod::Unknown(method) => Err(ArchiveError::UnsupportedCompression {
                name: entry.name.clone(),
                method,
            }),
        }
    }

    /// Decode one named entry as JSON into `T`.
    ///
    /// Fails with [`ArchiveError::NotFound`] when no entry matches the
    /// name and [`ArchiveError::Decode`] (carrying the entry name) when
    /// the bytes do not parse as the requested schema.
    pub async fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, ArchiveError> {
        let data = self.read_bytes(name).await?;
        serde_json::from_slice(&data).map_err(|source| ArchiveError::Decode {
            name: name.to_string(),
            source,
        })
    }

    /// Close the archive, releasing the underlying file handle.
    ///
    /// Consumes the archive; the borrow checker rejects any later reads
    /// through a grid or message stream built from it.
    pub fn close(self) -> Result<(), ArchiveError> {
        drop(self);
        Ok(())
    }
}
