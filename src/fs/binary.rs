use std::path::Path;

use bincode::Options;
use log::info;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::{FileError, FileResult},
    fs::FileUtilities,
};

// Varint lengths, little endian, trailing bytes rejected. Both directions must use
// the same options or saved files become unreadable.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
}

impl FileUtilities {
    /// Persists any serializable value to `path` in bincode form.
    pub fn save_binary<T: Serialize + ?Sized>(
        &self,
        data: &T,
        path: impl AsRef<Path>,
    ) -> FileResult<()> {
        let path = path.as_ref();
        let result = codec()
            .serialize(data)
            .map_err(|e| FileError::Serialize {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
            .and_then(|bytes| self.write_bytes(path, &bytes));
        self.report("save_binary", result)?;

        info!(target: self.log_target(), "Binary file saved at: {:?}", path);
        Ok(())
    }

    /// Restores a value written by [`save_binary`](Self::save_binary).
    pub fn load_binary<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> FileResult<T> {
        let path = path.as_ref();
        let result = self.read_bytes(path).and_then(|bytes| {
            codec()
                .deserialize(&bytes)
                .map_err(|source| FileError::Deserialization {
                    path: path.to_path_buf(),
                    source,
                })
        });
        let value = self.report("load_binary", result)?;

        info!(target: self.log_target(), "Binary file loaded from: {:?}", path);
        Ok(value)
    }
}
