//! Verdict types for archive validation.

use crate::xva::error::XvaError;
use std::fmt;

/// Counters gathered over a clean validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Block/checksum pairs whose digests agreed.
    pub pairs_verified: u64,
    /// Entries that were neither blocks nor checksum records.
    pub entries_ignored: u64,
    /// Total block content bytes hashed.
    pub block_bytes: u64,
}

/// Why an archive failed its integrity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidity {
    /// The two sides of a key carry different digests.
    /// `expected` is the digest seen first, `actual` the one seen second.
    Mismatch {
        key: String,
        expected: String,
        actual: String,
    },
    /// Keys seen from only one side by the end of the stream (sorted).
    Unpaired { keys: Vec<String> },
}

impl fmt::Display for Invalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalidity::Mismatch {
                key,
                expected,
                actual,
            } => write!(
                f,
                "invalid checksum for {}: expected {}, got {}",
                key, expected, actual
            ),
            Invalidity::Unpaired { keys } => {
                write!(f, "missing checksums or data blocks: [{}]", keys.join(", "))
            }
        }
    }
}

/// Result of a pass that read the archive to a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid(ValidationSummary),
    Invalid(Invalidity),
}

/// Three-way result exposed to callers: the archive is intact, corrupt, or
/// could not be checked at all.
#[derive(Debug)]
pub enum Outcome {
    Valid(ValidationSummary),
    Invalid(Invalidity),
    Error(XvaError),
}

impl Outcome {
    /// Process exit code: 0 valid, 1 invalid, 2 error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Valid(_) => 0,
            Outcome::Invalid(_) => 1,
            Outcome::Error(_) => 2,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    /// Human-readable reason; empty for a valid archive.
    pub fn reason(&self) -> String {
        match self {
            Outcome::Valid(_) => String::new(),
            Outcome::Invalid(why) => why.to_string(),
            Outcome::Error(err) => err.to_string(),
        }
    }
}

impl From<Result<Verdict, XvaError>> for Outcome {
    fn from(r: Result<Verdict, XvaError>) -> Self {
        match r {
            Ok(Verdict::Valid(summary)) => Outcome::Valid(summary),
            Ok(Verdict::Invalid(why)) => Outcome::Invalid(why),
            Err(err) => Outcome::Error(err),
        }
    }
}
