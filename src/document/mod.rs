//! In-memory representation of YAML and JSON files.

mod format;
mod structured;

#[doc(inline)]
pub use self::format::{Format, UnsupportedFormat};
#[doc(inline)]
pub use self::structured::StructuredDocument;
