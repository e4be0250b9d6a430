mod local;

pub use local::LocalFileReader;

use async_trait::async_trait;

/// Trait for random access reading from an archive source.
///
/// The zip layer reads the central directory from the end of the file and
/// individual entries from arbitrary offsets, so sequential readers are
/// not sufficient.
#[async_trait]
pub trait ReadAt: Send + Sync {
    /// Read data at the specified offset into the buffer.
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize>;

    /// Get the total size of the data source.
    fn size(&self) -> u64;
}

/// In-memory reader backed by a byte buffer, used by tests to exercise
/// the zip layer without touching the filesystem.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct MemReader(pub Vec<u8>);

#[cfg(test)]
#[async_trait]
impl ReadAt for MemReader {
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        let start = (offset as usize).min(self.0.len());
        let end = (start + buf.len()).min(self.0.len());
        let n = end - start;
        buf[..n].copy_from_slice(&self.0[start..end]);
        Ok(n)
    }

    fn size(&self) -> u64 {
        self.0.len() as u64
    }
}
