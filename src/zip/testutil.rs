//! Minimal in-memory zip writer for tests.
//!
//! Produces just enough of the format for the parser under test: local
//! file headers, a central directory, and an EOCD (optionally with a
//! trailing comment). Entries land in the central directory in insertion
//! order, which is what the enumeration-order tests rely on.

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::Write;

use super::structures::CompressionMethod;

pub(crate) struct ZipBuilder {
    data: Vec<u8>,
    central: Vec<u8>,
    count: u16,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            central: Vec::new(),
            count: 0,
        }
    }

    /// Add a directory marker entry (name must end with '/').
    pub fn add_dir(&mut self, name: &str) {
        assert!(name.ends_with('/'));
        self.add_raw(name, &[], CompressionMethod::Stored, 0, 0);
    }

    /// Add an uncompressed (STORED) entry.
    pub fn add_stored(&mut self, name: &str, content: &[u8]) {
        let crc = crc32(content);
        self.add_raw(name, content, CompressionMethod::Stored, content.len() as u32, crc);
    }

    /// Add a DEFLATE-compressed entry.
    pub fn add_deflate(&mut self, name: &str, content: &[u8]) {
        let crc = crc32(content);
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content).unwrap();
        let compressed = encoder.finish().unwrap();
        self.add_raw(name, &compressed, CompressionMethod::Deflate, content.len() as u32, crc);
    }

    /// Add a STORED entry whose central directory record saturates the
    /// 32-bit size and offset fields and carries the real values in a
    /// ZIP64 extended-information extra field. Pair with
    /// [`finish_zip64`](Self::finish_zip64).
    pub fn add_stored_zip64(&mut self, name: &str, content: &[u8]) {
        let crc = crc32(content);
        let lfh_offset = self.write_lfh(name, content, CompressionMethod::Stored, content.len() as u32, crc);

        self.central.extend_from_slice(b"PK\x01\x02");
        self.central.write_u16::<LittleEndian>(45).unwrap(); // version made by
        self.central.write_u16::<LittleEndian>(45).unwrap(); // version needed
        self.central.write_u16::<LittleEndian>(0).unwrap(); // flags
        self.central
            .write_u16::<LittleEndian>(CompressionMethod::Stored.as_u16())
            .unwrap();
        self.central.write_u16::<LittleEndian>(0).unwrap(); // mod time
        self.central.write_u16::<LittleEndian>(0).unwrap(); // mod date
        self.central.write_u32::<LittleEndian>(crc).unwrap();
        self.central.write_u32::<LittleEndian>(0xFFFFFFFF).unwrap(); // compressed, in extra
        self.central.write_u32::<LittleEndian>(0xFFFFFFFF).unwrap(); // uncompressed, in extra
        self.central.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        self.central.write_u16::<LittleEndian>(28).unwrap(); // extra length
        self.central.write_u16::<LittleEndian>(0).unwrap(); // comment length
        self.central.write_u16::<LittleEndian>(0).unwrap(); // disk number
        self.central.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        self.central.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        self.central.write_u32::<LittleEndian>(0xFFFFFFFF).unwrap(); // lfh offset, in extra
        self.central.extend_from_slice(name.as_bytes());

        // ZIP64 extended information: uncompressed, compressed, offset
        self.central.write_u16::<LittleEndian>(0x0001).unwrap();
        self.central.write_u16::<LittleEndian>(24).unwrap();
        self.central.write_u64::<LittleEndian>(content.len() as u64).unwrap();
        self.central.write_u64::<LittleEndian>(content.len() as u64).unwrap();
        self.central.write_u64::<LittleEndian>(lfh_offset).unwrap();

        self.count += 1;
    }

    fn write_lfh(
        &mut self,
        name: &str,
        raw: &[u8],
        method: CompressionMethod,
        uncompressed_size: u32,
        crc: u32,
    ) -> u64 {
        let offset = self.data.len() as u64;

        self.data.extend_from_slice(b"PK\x03\x04");
        self.data.write_u16::<LittleEndian>(20).unwrap(); // version needed
        self.data.write_u16::<LittleEndian>(0).unwrap(); // flags
        self.data.write_u16::<LittleEndian>(method.as_u16()).unwrap();
        self.data.write_u16::<LittleEndian>(0).unwrap(); // mod time
        self.data.write_u16::<LittleEndian>(0).unwrap(); // mod date
        self.data.write_u32::<LittleEndian>(crc).unwrap();
        self.data.write_u32::<LittleEndian>(raw.len() as u32).unwrap();
        self.data.write_u32::<LittleEndian>(uncompressed_size).unwrap();
        self.data.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        self.data.write_u16::<LittleEndian>(0).unwrap(); // extra length
        self.data.extend_from_slice(name.as_bytes());
        self.data.extend_from_slice(raw);

        offset
    }

    fn add_raw(
        &mut self,
        name: &str,
        raw: &[u8],
        method: CompressionMethod,
        uncompressed_size: u32,
        crc: u32,
    ) {
        let lfh_offset = self.write_lfh(name, raw, method, uncompressed_size, crc) as u32;

        // Central directory file header
        self.central.extend_from_slice(b"PK\x01\x02");
        self.central.write_u16::<LittleEndian>(20).unwrap(); // version made by
        self.central.write_u16::<LittleEndian>(20).unwrap(); // version needed
        self.central.write_u16::<LittleEndian>(0).unwrap(); // flags
        self.central.write_u16::<LittleEndian>(method.as_u16()).unwrap();
        self.central.write_u16::<LittleEndian>(0).unwrap(); // mod time
        self.central.write_u16::<LittleEndian>(0).unwrap(); // mod date
        self.central.write_u32::<LittleEndian>(crc).unwrap();
        self.central.write_u32::<LittleEndian>(raw.len() as u32).unwrap();
        self.central.write_u32::<LittleEndian>(uncompressed_size).unwrap();
        self.central.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        self.central.write_u16::<LittleEndian>(0).unwrap(); // extra length
        self.central.write_u16::<LittleEndian>(0).unwrap(); // comment length
        self.central.write_u16::<LittleEndian>(0).unwrap(); // disk number
        self.central.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        self.central.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        self.central.write_u32::<LittleEndian>(lfh_offset).unwrap();
        self.central.extend_from_slice(name.as_bytes());

        self.count += 1;
    }

    pub fn finish(self) -> Vec<u8> {
        self.finish_with_comment(b"")
    }

    pub fn finish_with_comment(self, comment: &[u8]) -> Vec<u8> {
        let mut out = self.data;
        let cd_offset = out.len() as u32;
        out.extend_from_slice(&self.central);
        let cd_size = out.len() as u32 - cd_offset;

        // End of central directory
        out.extend_from_slice(b"PK\x05\x06");
        out.write_u16::<LittleEndian>(0).unwrap(); // disk number
        out.write_u16::<LittleEndian>(0).unwrap(); // disk with cd
        out.write_u16::<LittleEndian>(self.count).unwrap();
        out.write_u16::<LittleEndian>(self.count).unwrap();
        out.write_u32::<LittleEndian>(cd_size).unwrap();
        out.write_u32::<LittleEndian>(cd_offset).unwrap();
        out.write_u16::<LittleEndian>(comment.len() as u16).unwrap();
        out.extend_from_slice(comment);

        out
    }

    /// Terminate the archive with a ZIP64 End of Central Directory plus
    /// locator, leaving the classic EOCD fields saturated so readers must
    /// take the ZIP64 path.
    pub fn finish_zip64(self) -> Vec<u8> {
        let mut out = self.data;
        let cd_offset = out.len() as u64;
        out.extend_from_slice(&self.central);
        let cd_size = out.len() as u64 - cd_offset;
        let eocd64_offset = out.len() as u64;

        // ZIP64 end of central directory
        out.extend_from_slice(b"PK\x06\x06");
        out.write_u64::<LittleEndian>(44).unwrap(); // size of remaining record
        out.write_u16::<LittleEndian>(45).unwrap(); // version made by
        out.write_u16::<LittleEndian>(45).unwrap(); // version needed
        out.write_u32::<LittleEndian>(0).unwrap(); // disk number
        out.write_u32::<LittleEndian>(0).unwrap(); // disk with cd
        out.write_u64::<LittleEndian>(self.count as u64).unwrap();
        out.write_u64::<LittleEndian>(self.count as u64).unwrap();
        out.write_u64::<LittleEndian>(cd_size).unwrap();
        out.write_u64::<LittleEndian>(cd_offset).unwrap();

        // ZIP64 end of central directory locator
        out.extend_from_slice(b"PK\x06\x07");
        out.write_u32::<LittleEndian>(0).unwrap(); // disk with eocd64
        out.write_u64::<LittleEndian>(eocd64_offset).unwrap();
        out.write_u32::<LittleEndian>(1).unwrap(); // total disks

        // Classic EOCD with every count and offset saturated
        out.extend_from_slice(b"PK\x05\x06");
        out.write_u16::<LittleEndian>(0).unwrap(); // disk number
        out.write_u16::<LittleEndian>(0).unwrap(); // disk with cd
        out.write_u16::<LittleEndian>(0xFFFF).unwrap();
        out.write_u16::<LittleEndian>(0xFFFF).unwrap();
        out.write_u32::<LittleEndian>(0xFFFFFFFF).unwrap();
        out.write_u32::<LittleEndian>(0xFFFFFFFF).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // comment length

        out
    }
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(data);
    crc.sum()
}
