//! Builds XVA-shaped tar archives on disk for integration tests.
//!
//! Blocks are added with their SHA-1 checksum record by default; helpers
//! allow corrupting, dropping, or reordering either side.

#![allow(dead_code)]

use sha1::{Digest, Sha1};
use std::fs::File;
use std::path::{Path, PathBuf};

pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

pub fn block_name(vdi: u32, seq: u32) -> String {
    format!("Ref:{}/{:08}", vdi, seq)
}

pub struct XvaBuilder {
    builder: tar::Builder<File>,
    path: PathBuf,
}

impl XvaBuilder {
    pub fn create(path: &Path) -> Self {
        let file = File::create(path).expect("create archive");
        Self {
            builder: tar::Builder::new(file),
            path: path.to_path_buf(),
        }
    }

    pub fn file(mut self, name: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Regular);
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        self.builder
            .append_data(&mut header, name, data)
            .expect("append file");
        self
    }

    pub fn dir(mut self, name: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Directory);
        header.set_size(0);
        header.set_mode(0o755);
        self.builder
            .append_data(&mut header, name, &[][..])
            .expect("append dir");
        self
    }

    /// Block followed by its correct checksum record.
    pub fn block(self, vdi: u32, seq: u32, data: &[u8]) -> Self {
        let name = block_name(vdi, seq);
        let sum = sha1_hex(data);
        self.file(&name, data)
            .file(&format!("{}.checksum", name), sum.as_bytes())
    }

    pub fn block_only(self, vdi: u32, seq: u32, data: &[u8]) -> Self {
        self.file(&block_name(vdi, seq), data)
    }

    pub fn checksum_only(self, vdi: u32, seq: u32, record: &str) -> Self {
        self.file(&format!("{}.checksum", block_name(vdi, seq)), record.as_bytes())
    }

    pub fn finish(mut self) -> PathBuf {
        self.builder.finish().expect("finish archive");
        self.path
    }
}
