//! XVA archive integrity validation.
//!
//! An XVA file is a tar stream holding a VM disk as numbered data blocks
//! (`Ref:<vdi>/<8-digit sequence>`), each with a detached checksum record
//! (`Ref:<vdi>/<sequence>.checksum`) carrying the block's SHA-1 as 40 bytes of
//! lowercase hex. Validation pairs every block with its record in one forward
//! pass, without seeking.

mod classify;
mod digest;
mod error;
mod pairing;
mod validate;

pub use classify::{classify, EntryKind, CHECKSUM_SUFFIX};
pub use digest::{block_digest, checksum_record};
pub use error::{Result, XvaError};
pub use pairing::{PairOutcome, PairingTable};
pub use validate::{
    validate_path, validate_reader, Invalidity, Outcome, ValidateOptions, ValidationSummary,
    Verdict, DEFAULT_READ_BUFFER_BYTES, MIN_READ_BUFFER_BYTES,
};
