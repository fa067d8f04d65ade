//! Validate command: check an XVA archive and map the outcome to an exit code.

use std::io::{self, Read};
use std::path::Path;
use xvv_core::xva::{self, Outcome, ValidateOptions};

/// Validate the archive at `path` (`-` reads stdin) and log the verdict.
pub fn run_validate(path: &Path, opts: &ValidateOptions) -> i32 {
    if path == Path::new("-") {
        return run_validate_reader(path, io::stdin().lock(), opts);
    }
    let outcome = xva::validate_path(path, opts);
    report(path, &outcome);
    outcome.exit_code()
}

/// Validate an already-open stream; `label` only names it in log lines.
pub fn run_validate_reader<R: Read>(label: &Path, reader: R, opts: &ValidateOptions) -> i32 {
    let outcome = Outcome::from(xva::validate_reader(reader, opts));
    report(label, &outcome);
    outcome.exit_code()
}

fn report(path: &Path, outcome: &Outcome) {
    match outcome {
        Outcome::Valid(summary) => tracing::info!(
            pairs = summary.pairs_verified,
            ignored = summary.entries_ignored,
            bytes = summary.block_bytes,
            "xva file is valid"
        ),
        Outcome::Invalid(why) => tracing::error!("xva file is invalid, reason: {}", why),
        Outcome::Error(err) => {
            tracing::error!("cannot validate {}: {}", path.display(), err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};
    use xvv_core::checksum::sha1_exact;
    use xvv_core::logging::default_directive;

    fn archive(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut builder = tar::Builder::new(Vec::new());
        for (name, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            builder.append_data(&mut header, name, *data).unwrap();
        }
        builder.into_inner().unwrap()
    }

    fn valid_archive() -> Vec<u8> {
        let block = b"disk bytes";
        let mut buf = [0u8; 64];
        let sum = sha1_exact(&mut &block[..], block.len() as u64, &mut buf).unwrap();
        archive(&[
            ("Ref:0/00000001", &block[..]),
            ("Ref:0/00000001.checksum", sum.as_bytes()),
        ])
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run validation over `bytes` at `verbosity`, returning exit code and log text.
    fn logged_run(bytes: Vec<u8>, verbosity: u8) -> (i32, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(default_directive(
                verbosity,
            )))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let opts = ValidateOptions::with_verbosity(verbosity);
        let code = tracing::subscriber::with_default(subscriber, || {
            run_validate_reader(Path::new("-"), Cursor::new(bytes), &opts)
        });
        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        (code, text)
    }

    #[test]
    fn missing_archive_exits_2() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_validate(&dir.path().join("absent.xva"), &ValidateOptions::default());
        assert_eq!(code, 2);
    }

    #[test]
    fn empty_archive_exits_0() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xva");
        // Two zero blocks: a well-formed tar stream with no entries.
        std::fs::write(&path, vec![0u8; 1024]).unwrap();
        assert_eq!(run_validate(&path, &ValidateOptions::default()), 0);
    }

    #[test]
    fn non_tar_file_exits_2() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.xva");
        std::fs::write(&path, vec![0x41u8; 1024]).unwrap();
        assert_eq!(run_validate(&path, &ValidateOptions::default()), 2);
    }

    #[test]
    fn stream_exit_codes() {
        let opts = ValidateOptions::default();
        let stdin = Path::new("-");
        assert_eq!(run_validate_reader(stdin, Cursor::new(valid_archive()), &opts), 0);

        let lone = archive(&[("Ref:0/00000001", &b"orphan"[..])]);
        assert_eq!(run_validate_reader(stdin, Cursor::new(lone), &opts), 1);

        let mut cut = valid_archive();
        // Header plus half of the block content.
        cut.truncate(512 + 5);
        assert_eq!(run_validate_reader(stdin, Cursor::new(cut), &opts), 2);
    }

    #[test]
    fn output_per_verbosity_level() {
        let (code, quiet) = logged_run(valid_archive(), 0);
        assert_eq!(code, 0);
        assert!(quiet.is_empty(), "{quiet}");

        let (code, failed) = logged_run(archive(&[("Ref:0/00000001", &b"orphan"[..])]), 0);
        assert_eq!(code, 1);
        assert!(failed.contains("xva file is invalid, reason:"), "{failed}");
        assert!(failed.contains("Ref:0/00000001"), "{failed}");

        let (_, confirmed) = logged_run(valid_archive(), 1);
        assert!(confirmed.contains("xva file is valid"), "{confirmed}");
        assert!(!confirmed.contains("entry="), "{confirmed}");
        assert!(!confirmed.contains("checksum valid for"), "{confirmed}");

        let (_, detailed) = logged_run(valid_archive(), 2);
        assert!(detailed.contains("xva file is valid"), "{detailed}");
        assert_eq!(detailed.lines().filter(|l| l.contains(" entry=")).count(), 2);
        assert_eq!(
            detailed
                .lines()
                .filter(|l| l.contains("checksum valid for Ref:0/00000001"))
                .count(),
            1
        );
    }
}
