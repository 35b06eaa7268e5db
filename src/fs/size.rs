use std::{fmt, path::Path};

use log::info;

use crate::{
    error::{FileError, FileResult},
    fs::FileUtilities,
};

const KILOBYTE: u64 = 1024;

/// Size of a file, rendered as `~ N KB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    bytes: u64,
}

impl SizeReport {
    pub fn from_bytes(bytes: u64) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Bytes divided by 1024, rounded to the nearest integer with ties to even.
    pub fn kilobytes(&self) -> u64 {
        let whole = self.bytes / KILOBYTE;
        let rest = self.bytes % KILOBYTE;
        let half = KILOBYTE / 2;
        if rest > half || (rest == half && whole % 2 == 1) {
            whole + 1
        } else {
            whole
        }
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~ {} KB", self.kilobytes())
    }
}

impl FileUtilities {
    pub fn size_report(&self, path: impl AsRef<Path>) -> FileResult<SizeReport> {
        let path = path.as_ref();
        let result = std::fs::metadata(path)
            .map(|meta| SizeReport::from_bytes(meta.len()))
            .map_err(|e| FileError::from_read(path, e));
        let report = self.report("get_size_kb", result)?;

        info!(target: self.log_target(), "Size of {:?} is {}", path, report);
        Ok(report)
    }

    /// Returns the size of `path` as a string such as `~ 2 KB`.
    pub fn get_size_kb(&self, path: impl AsRef<Path>) -> FileResult<String> {
        self.size_report(path).map(|report| report.to_string())
    }
}
