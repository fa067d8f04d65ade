//! Digest extraction for block and checksum entries.

use crate::checksum::{sha1_exact, DIGEST_HEX_LEN};
use std::io::{self, Read};

/// Hash a block entry over exactly its declared size.
///
/// The final block of a disk is often shorter than the nominal block size,
/// so the declared size, not the buffer length, bounds the read.
pub fn block_digest<R: Read>(
    content: &mut R,
    declared_len: u64,
    buf: &mut [u8],
) -> io::Result<String> {
    sha1_exact(content, declared_len, buf)
}

/// Read a checksum record verbatim. Bytes past the fixed width are left unread.
pub fn checksum_record<R: Read>(content: &mut R) -> io::Result<String> {
    let mut record = [0u8; DIGEST_HEX_LEN];
    content.read_exact(&mut record)?;
    // Invalid UTF-8 is replaced; such a record never equals a computed hex digest.
    Ok(String::from_utf8_lossy(&record).into_owned())
}
