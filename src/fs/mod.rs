//! File operations exposed through the [`FileUtilities`] facade.
//!
//! Each operation family lives in its own module as an `impl FileUtilities` block:
//! - structured YAML/JSON reading and writing
//! - directory creation
//! - bincode persistence of arbitrary values
//! - file size reports
//! - base64 image encoding and decoding

mod binary;
mod dirs;
mod image;
mod manager;
mod size;
mod structured;

#[doc(inline)]
pub use self::manager::FileUtilities;
#[doc(inline)]
pub use self::size::SizeReport;
