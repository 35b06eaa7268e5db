use std::path::Path;

use log::info;

use crate::{
    error::{FileError, FileResult},
    fs::FileUtilities,
};

impl FileUtilities {
    /// Creates every directory in `paths` together with its missing parents.
    ///
    /// Directories that already exist are left alone. Stops at the first path that
    /// cannot be created.
    pub fn create_directories<I, P>(&self, paths: I, verbose: bool) -> FileResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            let path = path.as_ref();
            let result =
                std::fs::create_dir_all(path).map_err(|e| FileError::from_write(path, e));
            self.report("create_directories", result)?;

            if verbose {
                info!(target: self.log_target(), "Created directory at: {:?}", path);
            }
        }
        Ok(())
    }

    /// [`create_directories`](Self::create_directories) with the configured verbosity.
    pub fn create_directories_default<I, P>(&self, paths: I) -> FileResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.create_directories(paths, self.verbose())
    }
}

#[cfg(test)]
mod tests {

    use log::Level;

    use super::*;
    use crate::{captured, init_test_logger};

    #[test]
    fn creates_nested_directories() -> anyhow::Result<()> {
        init_test_logger();
        let root = tempfile::tempdir()?;
        let paths = [
            root.path().join("artifacts/data_ingestion"),
            root.path().join("artifacts/model/checkpoints"),
        ];

        FileUtilities::new().create_directories(&paths, true)?;
        assert!(paths.iter().all(|p| p.is_dir()));
        Ok(())
    }

    #[test]
    fn is_idempotent() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let paths = vec![root.path().join("a/b"), root.path().join("c")];
        let utils = FileUtilities::new().with_verbose(false);

        utils.create_directories_default(&paths)?;
        std::fs::write(root.path().join("a/b/keep.txt"), "kept")?;
        utils.create_directories_default(&paths)?;

        assert!(paths.iter().all(|p| p.is_dir()));
        assert_eq!(std::fs::read_to_string(root.path().join("a/b/keep.txt"))?, "kept");
        Ok(())
    }

    #[test]
    fn verbose_logs_one_info_line_per_directory() -> anyhow::Result<()> {
        init_test_logger();
        let root = tempfile::tempdir()?;
        let target = "boxfile::test::dirs_verbose";
        let utils = FileUtilities::new().with_log_target(target);
        let paths = [root.path().join("raw"), root.path().join("processed/v1")];

        utils.create_directories(&paths, true)?;
        let lines = captured(target, Level::Info);
        assert_eq!(lines.len(), 2);
        for (line, path) in lines.iter().zip(&paths) {
            assert_eq!(line, &format!("Created directory at: {path:?}"));
        }
        Ok(())
    }

    #[test]
    fn quiet_creation_logs_nothing() -> anyhow::Result<()> {
        init_test_logger();
        let root = tempfile::tempdir()?;
        let target = "boxfile::test::dirs_quiet";
        let utils = FileUtilities::new()
            .with_log_target(target)
            .with_verbose(false);

        utils.create_directories_default([root.path().join("a"), root.path().join("b")])?;
        assert!(captured(target, Level::Info).is_empty());
        assert!(root.path().join("b").is_dir());
        Ok(())
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let res = FileUtilities::new().create_directories(Vec::<&Path>::new(), true);
        assert!(res.is_ok());
    }

    #[test]
    fn file_in_the_way_is_a_write_error() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "not a directory")?;

        let res = FileUtilities::new().create_directories([blocker.join("child")], true);
        assert!(matches!(res, Err(FileError::Write { .. })));
        Ok(())
    }
}
