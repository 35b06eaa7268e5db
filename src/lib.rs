//! Small, stateless helpers for the files a training pipeline reads and writes:
//! YAML and JSON documents, directory trees, bincode blobs, size reports and
//! base64-encoded images.
//!
//! ```no_run
//! use boxfile::{FileUtilities, Format};
//!
//! # fn main() -> boxfile::FileResult<()> {
//! let utils = FileUtilities::new();
//! let config = utils.read_structured("config/config.yaml", Format::Yaml)?;
//! if let Some(root) = config.lookup("artifacts_root").and_then(|v| v.as_str()) {
//!     utils.create_directories([root], true)?;
//! }
//! utils.write_json("artifacts/scores.json", &config)?;
//! println!("{}", utils.get_size_kb("artifacts/scores.json")?);
//! # Ok(())
//! # }
//! ```

pub mod document;
mod error;
mod fs;

#[doc(inline)]
pub use self::document::{Format, StructuredDocument};
#[doc(inline)]
pub use self::error::{FileError, FileResult};
#[doc(inline)]
pub use self::fs::{FileUtilities, SizeReport};

#[cfg(test)]
mod testing;
#[cfg(test)]
pub(crate) use self::testing::{captured, init_test_logger};
