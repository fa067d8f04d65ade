//! Single-pass integrity check of an XVA archive.
//!
//! Walks tar entries in stream order, hashes each data block, reads each
//! checksum record, and pairs the two by block key. Blocks and records may
//! arrive in either order. The pass stops at the first mismatch; keys still
//! unpaired at end of stream make the archive invalid.

mod outcome;

use crate::xva::classify::{classify, EntryKind};
use crate::xva::digest::{block_digest, checksum_record};
use crate::xva::error::{Result, XvaError};
use crate::xva::pairing::{PairOutcome, PairingTable};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use outcome::{Invalidity, Outcome, ValidationSummary, Verdict};

/// Default read buffer: one nominal XVA block.
pub const DEFAULT_READ_BUFFER_BYTES: usize = 1024 * 1024;

/// Smallest read buffer accepted; smaller requests are raised to this.
pub const MIN_READ_BUFFER_BYTES: usize = 4 * 1024;

#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// At 2 and above, one debug line per classified entry and per validated pair.
    pub verbosity: u8,
    /// Size of the reusable buffer block content is streamed through.
    pub read_buffer_bytes: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            verbosity: 0,
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
        }
    }
}

impl ValidateOptions {
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    fn buffer_len(&self) -> usize {
        self.read_buffer_bytes.max(MIN_READ_BUFFER_BYTES)
    }
}

/// Open `path` and validate it. The file handle is dropped on every exit path.
pub fn validate_path(path: &Path, opts: &ValidateOptions) -> Outcome {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(source) => {
            return Outcome::Error(XvaError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    tracing::debug!("validating {}", path.display());
    validate_reader(BufReader::new(file), opts).into()
}

/// Validate a tar stream read sequentially from `reader`.
///
/// Returns `Err` only when the stream could not be read; corrupt or
/// incomplete content is reported as `Verdict::Invalid`.
pub fn validate_reader<R: Read>(reader: R, opts: &ValidateOptions) -> Result<Verdict> {
    let trace = opts.verbosity >= 2;
    let mut archive = tar::Archive::new(reader);
    let entries = archive.entries().map_err(XvaError::Stream)?;

    let mut table = PairingTable::new();
    let mut summary = ValidationSummary::default();
    let mut buf = vec![0u8; opts.buffer_len()];

    for entry in entries {
        let mut entry = entry.map_err(XvaError::Stream)?;
        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let is_file = entry.header().entry_type().is_file();
        let size = entry.size();

        let kind = classify(&name, is_file);
        let read_err = |source| XvaError::Entry {
            name: name.clone(),
            source,
        };
        let (key, digest) = match kind {
            EntryKind::Ignored => {
                summary.entries_ignored += 1;
                if trace {
                    tracing::debug!(entry = %name, "ignored");
                }
                continue;
            }
            EntryKind::Block { key } => {
                let digest = block_digest(&mut entry, size, &mut buf).map_err(read_err)?;
                summary.block_bytes += size;
                if trace {
                    tracing::debug!(entry = %name, size, %digest, "block");
                }
                (key, digest)
            }
            EntryKind::Checksum { key } => {
                let digest = checksum_record(&mut entry).map_err(read_err)?;
                if trace {
                    tracing::debug!(entry = %name, %digest, "checksum record");
                }
                (key, digest)
            }
        };

        match table.offer(key, digest) {
            PairOutcome::Pending => {}
            PairOutcome::Matched => {
                summary.pairs_verified += 1;
                if trace {
                    tracing::debug!("checksum valid for {}", key);
                }
            }
            PairOutcome::Mismatch { expected, actual } => {
                return Ok(Verdict::Invalid(Invalidity::Mismatch {
                    key: key.to_string(),
                    expected,
                    actual,
                }));
            }
        }
    }

    if trace {
        tracing::debug!("end of archive, {} keys unpaired", table.len());
    }
    if !table.is_empty() {
        return Ok(Verdict::Invalid(Invalidity::Unpaired {
            keys: table.into_unpaired(),
        }));
    }
    Ok(Verdict::Valid(summary))
}
