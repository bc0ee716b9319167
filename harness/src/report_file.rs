//! Report persistence: write/read/verify a `SearchReport` on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   search_report.json         canonical JSON bytes
//!   search_report_digest.txt   ASCII digest string (e.g. "sha256:...")
//! ```
//!
//! Reading is fail-closed: missing files, non-canonical JSON, a foreign
//! schema or a digest mismatch are all errors.

use std::path::Path;

use thiserror::Error;

use lodestone_kernel::proof::canon::canonical_json_bytes;
use lodestone_kernel::proof::hash::ContentHash;
use lodestone_search::SearchReport;

pub const REPORT_FILENAME: &str = "search_report.json";
pub const DIGEST_FILENAME: &str = "search_report_digest.txt";

/// Error persisting or loading a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportFileError {
    #[error("i/o error: {detail}")]
    Io { detail: String },
    #[error("canonical JSON error: {detail}")]
    Canon { detail: String },
    #[error("report is not valid JSON: {detail}")]
    Parse { detail: String },
    #[error("report bytes are not in canonical form")]
    NonCanonical,
    #[error("report has an unknown schema")]
    SchemaMismatch,
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

/// Write `report` into `dir`, creating it if needed. Returns the digest.
///
/// # Errors
///
/// Returns [`ReportFileError::Io`] on I/O failure and
/// [`ReportFileError::Canon`] if the report cannot be canonicalized.
pub fn write_report(report: &SearchReport, dir: &Path) -> Result<ContentHash, ReportFileError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportFileError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;
    let bytes = report
        .to_canonical_json_bytes()
        .map_err(|e| ReportFileError::Canon {
            detail: e.to_string(),
        })?;
    let digest = report.digest().map_err(|e| ReportFileError::Canon {
        detail: e.to_string(),
    })?;
    write_atomic(&dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;
    Ok(digest)
}

/// Read and verify a report written by [`write_report`].
///
/// # Errors
///
/// Returns [`ReportFileError`] on any validation failure.
pub fn read_report(dir: &Path) -> Result<SearchReport, ReportFileError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let stored = read_required(dir, DIGEST_FILENAME)?;
    let stored = String::from_utf8_lossy(&stored).trim().to_string();

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ReportFileError::Parse {
            detail: e.to_string(),
        })?;
    let canonical = canonical_json_bytes(&value).map_err(|e| ReportFileError::Canon {
        detail: e.to_string(),
    })?;
    if canonical != bytes {
        return Err(ReportFileError::NonCanonical);
    }
    let report = SearchReport::from_json_value(value).ok_or(ReportFileError::SchemaMismatch)?;
    let recomputed = report.digest().map_err(|e| ReportFileError::Canon {
        detail: e.to_string(),
    })?;
    if recomputed.as_str() != stored {
        return Err(ReportFileError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }
    Ok(report)
}

/// Write to a temp file in the same directory, then rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportFileError> {
    let dir = path.parent().ok_or_else(|| ReportFileError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);
    std::fs::write(&temp_path, content).map_err(|e| ReportFileError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportFileError::Io {
        detail: format!("rename {} -> {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportFileError> {
    let path = dir.join(filename);
    std::fs::read(&path).map_err(|e| ReportFileError::Io {
        detail: format!("read {}: {e}", path.display()),
    })
}
