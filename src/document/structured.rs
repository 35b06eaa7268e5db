use std::{ops::Index, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    document::Format,
    error::{FileError, FileResult},
};

static NULL: Value = Value::Null;

/// A parsed YAML or JSON mapping.
///
/// Keys keep the order they had in the source file. Values are reachable by key
/// (`doc["name"]`, [`get`](Self::get)), by checked name ([`field`](Self::field)),
/// by dotted path ([`lookup`](Self::lookup)), or as a nested document
/// ([`section`](Self::section)). Any part of the tree can also be deserialized
/// into a typed struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructuredDocument {
    root: Map<String, Value>,
}

impl StructuredDocument {
    /// Parses `text` and checks it holds a non-empty mapping. `path` is only used
    /// to build error values.
    pub(crate) fn parse(text: &str, format: Format, path: &Path) -> FileResult<Self> {
        if text.trim().is_empty() {
            return Err(FileError::EmptyDocument {
                path: path.to_path_buf(),
                format,
            });
        }

        let parsed = match format {
            Format::Yaml => parse_yaml_value(text),
            Format::Json => serde_json::from_str::<Value>(text).map_err(|e| e.to_string()),
        };
        let value = parsed.map_err(|message| FileError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        })?;

        match value {
            Value::Object(root) if !root.is_empty() => Ok(Self { root }),
            value if is_falsy(&value) => Err(FileError::EmptyDocument {
                path: path.to_path_buf(),
                format,
            }),
            value => Err(FileError::NotAMapping {
                path: path.to_path_buf(),
                found: kind_of(&value),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Like [`get`](Self::get) but a missing key is an error.
    pub fn field(&self, key: &str) -> FileResult<&Value> {
        self.root.get(key).ok_or_else(|| FileError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Follows a dotted path such as `data_ingestion.root_dir`. Numeric segments
    /// index into sequences.
    pub fn lookup(&self, dotted: &str) -> Option<&Value> {
        let mut segments = dotted.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns the nested mapping under `key` as its own document.
    pub fn section(&self, key: &str) -> Option<StructuredDocument> {
        match self.root.get(key)? {
            Value::Object(map) => Some(Self { root: map.clone() }),
            _ => None,
        }
    }

    /// Deserializes the whole document into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> FileResult<T> {
        serde_json::from_value(Value::Object(self.root.clone())).map_err(|e| {
            FileError::InvalidDocument {
                message: e.to_string(),
            }
        })
    }

    /// Deserializes the value under `key` into `T`.
    pub fn field_as<T: DeserializeOwned>(&self, key: &str) -> FileResult<T> {
        let value = self.field(key)?.clone();
        serde_json::from_value(value).map_err(|e| FileError::InvalidField {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

impl Index<&str> for StructuredDocument {
    type Output = Value;

    /// Missing keys index to `Value::Null`, as with `serde_json::Value`.
    fn index(&self, key: &str) -> &Value {
        self.root.get(key).unwrap_or(&NULL)
    }
}

impl From<StructuredDocument> for Value {
    fn from(doc: StructuredDocument) -> Self {
        doc.into_value()
    }
}

/// Parses YAML, resolves `<<` merge keys and converts the tree to JSON values.
fn parse_yaml_value(text: &str) -> Result<Value, String> {
    let mut value: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
    value.apply_merge().map_err(|e| e.to_string())?;
    yaml_to_json(value)
}

// Values JSON cannot hold (non-string keys, NaN and infinities, custom tags) are
// rejected rather than coerced.
fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let Yaml::String(key) = key else {
                    return Err(format!(
                        "mapping keys must be strings, found `{}`",
                        yaml_snippet(&key)
                    ));
                };
                map.insert(key, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => return Err(format!("unsupported tag {}", tagged.tag)),
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<Value, String> {
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("number `{n}` has no JSON representation"))
}

fn yaml_snippet(value: &serde_yaml::Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_default()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
