use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    document::{Format, StructuredDocument},
    error::{FileError, FileResult},
    fs::FileUtilities,
};

const JSON_INDENT: &[u8] = b"    ";

impl FileUtilities {
    /// Reads and parses a YAML or JSON file into a non-empty mapping.
    pub fn read_structured(
        &self,
        path: impl AsRef<Path>,
        format: Format,
    ) -> FileResult<StructuredDocument> {
        let path = path.as_ref();
        debug!(target: self.log_target(), "Reading {} file {:?}", format, path);
        let result = self
            .read_to_string(path)
            .and_then(|text| StructuredDocument::parse(&text, format, path));
        let doc = self.report("read_structured", result)?;

        info!(target: self.log_target(), "{} file {:?} loaded successfully", format, path);
        Ok(doc)
    }

    pub fn read_yaml(&self, path: impl AsRef<Path>) -> FileResult<StructuredDocument> {
        self.read_structured(path, Format::Yaml)
    }

    pub fn read_json(&self, path: impl AsRef<Path>) -> FileResult<StructuredDocument> {
        self.read_structured(path, Format::Json)
    }

    /// Reads a structured file, choosing the format from its extension.
    pub fn read_auto(&self, path: impl AsRef<Path>) -> FileResult<StructuredDocument> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| FileError::UnknownFormat {
            path: path.to_path_buf(),
        });
        let format = self.report("read_auto", format)?;
        self.read_structured(path, format)
    }

    /// Writes `data` as JSON indented by four spaces, replacing any existing file.
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        data: &T,
    ) -> FileResult<()> {
        let path = path.as_ref();
        let result = to_json_bytes(data)
            .map_err(|e| FileError::Serialize {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
            .and_then(|bytes| self.write_bytes(path, &bytes));
        self.report("write_json", result)?;

        info!(target: self.log_target(), "JSON file saved at: {:?}", path);
        Ok(())
    }

    /// Writes `data` as YAML, replacing any existing file.
    pub fn write_yaml<T: Serialize + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        data: &T,
    ) -> FileResult<()> {
        let path = path.as_ref();
        let result = serde_yaml::to_string(data)
            .map_err(|e| FileError::Serialize {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
            .and_then(|text| self.write_bytes(path, text.as_bytes()));
        self.report("write_yaml", result)?;

        info!(target: self.log_target(), "YAML file saved at: {:?}", path);
        Ok(())
    }
}

fn to_json_bytes<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    data.serialize(&mut ser)?;
    Ok(buf)
}
