//! Entry classification by name and type.

use once_cell::sync::Lazy;
use regex::Regex;

/// Suffix that turns a block entry name into its checksum record name.
pub const CHECKSUM_SUFFIX: &str = ".checksum";

static CHECKSUM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Ref:[0-9]+/[0-9]{8}\.checksum$").expect("valid checksum pattern"));

static BLOCK_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Ref:[0-9]+/[0-9]{8}$").expect("valid block pattern"));

/// What a single archive entry means to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// Disk data; the key is the entry name itself.
    Block { key: &'a str },
    /// Detached digest record; the key is the name without `.checksum`.
    Checksum { key: &'a str },
    Ignored,
}

/// Classify an entry. Only regular files can be blocks or checksum records.
pub fn classify(name: &str, is_regular_file: bool) -> EntryKind<'_> {
    if !is_regular_file {
        return EntryKind::Ignored;
    }
    if CHECKSUM_NAME.is_match(name) {
        let key = &name[..name.len() - CHECKSUM_SUFFIX.len()];
        return EntryKind::Checksum { key };
    }
    if BLOCK_NAME.is_match(name) {
        return EntryKind::Block { key: name };
    }
    EntryKind::Ignored
}
