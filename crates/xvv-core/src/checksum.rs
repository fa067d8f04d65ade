//! SHA-1 digests rendered the way XVA checksum records store them.
//!
//! Records are 40 bytes of lowercase hex, so every digest computed here is
//! rendered with `hex::encode` to stay byte-comparable with them.

use anyhow::{Context, Result};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Width in bytes of a hex-rendered SHA-1 digest.
pub const DIGEST_HEX_LEN: usize = 40;

const BUF_SIZE: usize = 64 * 1024;

/// Hash exactly `len` bytes from `reader` through the caller's buffer.
///
/// Fails with `UnexpectedEof` if the reader runs dry before `len` bytes.
pub fn sha1_exact<R: Read>(reader: &mut R, len: u64, buf: &mut [u8]) -> io::Result<String> {
    if buf.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "read buffer must not be empty",
        ));
    }
    let mut hasher = Sha1::new();
    let mut remaining = len;
    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("expected {} bytes, got {}", len, len - remaining),
                ))
            }
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        remaining -= n as u64;
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Compute SHA-1 of a file and return the digest as lowercase hex.
/// Reads in chunks until end of file, so pipes and FIFOs hash their full content.
pub fn sha1_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = match f.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
