//! Zip container reading.
//!
//! A Slack export is a single zip file; this module presents it as a
//! named-entry store with random access.
//!
//! - [`structures`]: zip format records (EOCD, central directory entries)
//! - [`parser`]: low-level index parsing from raw bytes
//! - [`archive`]: the [`Archive`] container API used by the model layer
//!
//! The index is read from the end of the file (EOCD, then the central
//! directory), so opening an archive never scans entry data. STORED and
//! DEFLATE entries and ZIP64 archives are supported; encrypted and
//! multi-disk archives are not.

mod archive;
mod parser;
mod structures;

#[cfg(test)]
pub(crate) mod testutil;

pub use archive::Archive;
pub use parser::ZipParser;
pub use structures::{CompressionMethod, ZipEntry};
