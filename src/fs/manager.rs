use std::{
    borrow::Cow,
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use log::{error, trace};

use crate::error::{FileError, FileResult};

/// Stateless facade over structured-file, binary and base64 file operations.
///
/// The value only carries read-only settings: the `log` target every message is
/// emitted on and the default verbosity of
/// [`create_directories_default`](Self::create_directories_default). Cloning is
/// cheap and calls never share state.
#[derive(Debug, Clone)]
pub struct FileUtilities {
    log_target: Cow<'static, str>,
    verbose: bool,
}

impl Default for FileUtilities {
    fn default() -> Self {
        Self::new()
    }
}

impl FileUtilities {
    pub const DEFAULT_LOG_TARGET: &'static str = "boxfile";

    pub fn new() -> Self {
        Self {
            log_target: Cow::Borrowed(Self::DEFAULT_LOG_TARGET),
            verbose: true,
        }
    }

    pub fn with_log_target(mut self, target: impl Into<Cow<'static, str>>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn log_target(&self) -> &str {
        &self.log_target
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub(crate) fn read_to_string(&self, path: &Path) -> FileResult<String> {
        trace!(target: self.log_target(), "Opening {:?} for reading", path);
        let file = File::open(path).map_err(|e| FileError::from_read(path, e))?;
        let mut text = String::new();
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(|e| FileError::from_read(path, e))?;
        Ok(text)
    }

    pub(crate) fn read_bytes(&self, path: &Path) -> FileResult<Vec<u8>> {
        trace!(target: self.log_target(), "Opening {:?} for reading", path);
        let file = File::open(path).map_err(|e| FileError::from_read(path, e))?;
        let mut bytes = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| FileError::from_read(path, e))?;
        Ok(bytes)
    }

    /// Creates or truncates `path` and writes `bytes` to it.
    pub(crate) fn write_bytes(&self, path: &Path, bytes: &[u8]) -> FileResult<()> {
        trace!(target: self.log_target(), "Writing {} bytes to {:?}", bytes.len(), path);
        let mut file = File::create(path).map_err(|e| FileError::from_write(path, e))?;
        file.write_all(bytes)
            .and_then(|_| file.flush())
            .map_err(|e| FileError::from_write(path, e))
    }

    /// Logs a failed operation before handing the result back to the caller.
    pub(crate) fn report<T>(&self, operation: &str, result: FileResult<T>) -> FileResult<T> {
        result.inspect_err(|e| error!(target: self.log_target(), "{operation} failed: {e}"))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::init_test_logger;

    #[test]
    fn defaults_to_crate_target_and_verbose() {
        let utils = FileUtilities::default();
        assert_eq!(utils.log_target(), "boxfile");
        assert!(utils.verbose());
    }

    #[test]
    fn settings_are_overridable() {
        let utils = FileUtilities::new()
            .with_log_target(String::from("pipeline::io"))
            .with_verbose(false);
        assert_eq!(utils.log_target(), "pipeline::io");
        assert!(!utils.verbose());
    }

    #[test]
    fn write_then_read_bytes() -> anyhow::Result<()> {
        init_test_logger();
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("raw.bin");
        let utils = FileUtilities::new();

        utils.write_bytes(&path, &[0, 1, 2, 255])?;
        assert_eq!(utils.read_bytes(&path)?, vec![0, 1, 2, 255]);
        utils.write_bytes(&path, b"shorter")?;
        assert_eq!(utils.read_to_string(&path)?, "shorter");
        Ok(())
    }

    #[test]
    fn writing_into_missing_directory_fails() {
        init_test_logger();
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("no_such_dir").join("file.txt");
        let res = FileUtilities::new().write_bytes(&path, b"x");
        assert!(matches!(res, Err(FileError::Write { .. })));
    }

    #[test]
    fn reading_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let res = FileUtilities::new().read_bytes(&dir.path().join("absent"));
        assert!(matches!(res, Err(FileError::NotFound { .. })));
    }
}
