use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};
use log::info;

use crate::{
    error::{FileError, FileResult},
    fs::FileUtilities,
};

impl FileUtilities {
    /// Decodes a padded, standard-alphabet base64 payload and writes the raw bytes
    /// to `output_path`. ASCII whitespace in the payload is skipped.
    ///
    /// Nothing is written when the payload is malformed.
    pub fn decode_image(
        &self,
        encoded: impl AsRef<[u8]>,
        output_path: impl AsRef<Path>,
    ) -> FileResult<()> {
        let output_path = output_path.as_ref();
        let cleaned: Vec<u8> = encoded
            .as_ref()
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let result = STANDARD
            .decode(cleaned)
            .map_err(|source| FileError::Decode {
                path: output_path.to_path_buf(),
                source,
            })
            .and_then(|bytes| self.write_bytes(output_path, &bytes));
        self.report("decode_image", result)?;

        info!(target: self.log_target(), "Decoded image written to: {:?}", output_path);
        Ok(())
    }

    /// Returns the base64 encoding of the file at `input_path`.
    pub fn encode_image(&self, input_path: impl AsRef<Path>) -> FileResult<Vec<u8>> {
        let input_path = input_path.as_ref();
        let result = self.read_bytes(input_path);
        let bytes = self.report("encode_image", result)?;

        info!(target: self.log_target(), "Encoded image read from: {:?}", input_path);
        Ok(STANDARD.encode(bytes).into_bytes())
    }
}
