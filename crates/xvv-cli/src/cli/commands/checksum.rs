//! Checksum command: compute the SHA-1 record text of a file.

use anyhow::Result;
use std::path::Path;
use xvv_core::checksum;

/// Compute and print the SHA-1 of the given file, as lowercase hex.
pub fn run_checksum(path: &Path) -> Result<()> {
    let digest = checksum::sha1_path(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
