use std::{fmt, path::Path, str::FromStr};

/// Text formats a [`StructuredDocument`](super::StructuredDocument) can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Yaml,
    Json,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unsupported document format `{0}`, expected `yaml` or `json`")]
pub struct UnsupportedFormat(pub String);

impl Format {
    /// Picks the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Yaml => "YAML",
            Format::Json => "JSON",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}
