//! Filesystem file reader with transparent `.gz` decompression.
//!
//! EDA tools routinely gzip their logs and reports; the reader hides that
//! from the rest of the pipeline.  Every failure mode — missing file,
//! permission, bad compression, non-UTF-8 content — maps to
//! `GatecheckError::FileAccess`.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use gatecheck_contracts::error::{GatecheckError, GatecheckResult};
use gatecheck_core::traits::FileReader;

/// The production `FileReader` backed by the local filesystem.
#[derive(Debug, Default)]
pub struct FsFileReader;

impl FsFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl FileReader for FsFileReader {
    fn read_text(&self, path: &Path) -> GatecheckResult<String> {
        let access_err = |reason: String| GatecheckError::FileAccess {
            path: path.display().to_string(),
            reason,
        };

        let bytes = fs::read(path).map_err(|e| access_err(e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "gz") {
            let mut text = String::new();
            GzDecoder::new(&bytes[..])
                .read_to_string(&mut text)
                .map_err(|e| access_err(format!("gzip decode failed: {e}")))?;
            return Ok(text);
        }

        String::from_utf8(bytes).map_err(|e| access_err(format!("invalid UTF-8: {e}")))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    /// Per-test scratch directory under the system temp dir.
    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("gatecheck-reader-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_plain_text() {
        let dir = scratch("plain");
        let path = dir.join("design.log");
        fs::write(&path, "// Generator: Cadence Innovus 21.10\n").unwrap();

        let text = FsFileReader::new().read_text(&path).unwrap();
        assert!(text.contains("Innovus"));
    }

    /// A `.gz` path is decompressed transparently before returning text.
    #[test]
    fn decompresses_gz_files() {
        let dir = scratch("gz");
        let path = dir.join("design.log.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"compressed report line\n").unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let text = FsFileReader::new().read_text(&path).unwrap();
        assert_eq!(text, "compressed report line\n");
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let dir = scratch("missing");
        let result = FsFileReader::new().read_text(&dir.join("does-not-exist.log"));

        match result {
            Err(GatecheckError::FileAccess { path, .. }) => {
                assert!(path.contains("does-not-exist.log"));
            }
            other => panic!("expected FileAccess, got {:?}", other),
        }
    }

    /// Garbage bytes behind a `.gz` extension fail as FileAccess, not a panic.
    #[test]
    fn corrupt_gz_is_a_file_access_error() {
        let dir = scratch("corrupt");
        let path = dir.join("broken.log.gz");
        fs::write(&path, b"this is not gzip data").unwrap();

        assert!(matches!(
            FsFileReader::new().read_text(&path),
            Err(GatecheckError::FileAccess { .. })
        ));
    }
}
