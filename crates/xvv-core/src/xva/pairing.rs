//! Pairing table: digests seen once, waiting for their counterpart.

use std::collections::HashMap;

/// Result of offering one side of a block/checksum pair to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// First side of this key; digest recorded.
    Pending,
    /// Second side matched the recorded digest; key removed.
    Matched,
    /// Second side disagrees with the recorded digest.
    Mismatch { expected: String, actual: String },
}

#[derive(Debug, Default)]
pub struct PairingTable {
    pending: HashMap<String, String>,
}

impl PairingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `digest` for `key`, or settle the key if it was already seen.
    ///
    /// On mismatch the recorded digest stays in place; the caller stops anyway.
    pub fn offer(&mut self, key: &str, digest: String) -> PairOutcome {
        match self.pending.get(key) {
            None => {
                self.pending.insert(key.to_string(), digest);
                PairOutcome::Pending
            }
            Some(recorded) if *recorded == digest => {
                self.pending.remove(key);
                PairOutcome::Matched
            }
            Some(recorded) => PairOutcome::Mismatch {
                expected: recorded.clone(),
                actual: digest,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Consume the table, returning keys still missing a counterpart, sorted.
    pub fn into_unpaired(self) -> Vec<String> {
        let mut keys: Vec<String> = self.pending.into_keys().collect();
        keys.sort();
        keys
    }
}
