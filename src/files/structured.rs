//! JSON and YAML documents on disk.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{read_text, write_bytes};
use crate::error::{ClikitError, Result};
use crate::output::print_error;

pub const DEFAULT_JSON_INDENT: usize = 2;

/// Structured document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Option<Format> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Some(Format::Json),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read and deserialize a document.
pub fn read_structured<T: DeserializeOwned>(path: impl AsRef<Path>, format: Format) -> Result<T> {
    let path = path.as_ref();
    let content = read_text(path)?;
    let parse_err = |message: String| ClikitError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    };
    match format {
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string())),
    }
}

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    read_structured(path, Format::Json)
}

pub fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    read_structured(path, Format::Yaml)
}

/// Serialize and write a document, creating parent directories.
///
/// JSON uses the default two-space indent; YAML is written in block style.
pub fn write_structured<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    data: &T,
    format: Format,
) -> Result<()> {
    match format {
        Format::Json => write_json_with_indent(path, data, DEFAULT_JSON_INDENT),
        Format::Yaml => write_yaml(path, data),
    }
}

pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    write_json_with_indent(path, data, DEFAULT_JSON_INDENT)
}

/// Write pretty-printed JSON indented by `indent` spaces.
pub fn write_json_with_indent<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    data: &T,
    indent: usize,
) -> Result<()> {
    let path = path.as_ref();
    to_json(data, indent)
        .and_then(|bytes| write_bytes(path, &bytes))
        .inspect_err(|e| print_error(&format!("Error writing JSON: {}", e)))
}

pub fn write_yaml<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();
    serde_yaml::to_string(data)
        .map_err(|e| ClikitError::Serialize {
            format: Format::Yaml,
            message: e.to_string(),
        })
        .and_then(|text| write_bytes(path, text.as_bytes()))
        .inspect_err(|e| print_error(&format!("Error writing YAML: {}", e)))
}

fn to_json<T: Serialize + ?Sized>(data: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser)
        .map_err(|e| ClikitError::Serialize {
            format: Format::Json,
            message: e.to_string(),
        })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Project {
        name: String,
        version: u32,
        tags: Vec<String>,
    }

    fn sample() -> Project {
        Project {
            name: "demo".to_string(),
            version: 3,
            tags: vec!["cli".to_string(), "tools".to_string()],
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.YAML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("dir/a.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.toml")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_json_is_indented_by_two_spaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("data.json");
        write_json(&path, &json!({"a": [1]})).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_json_custom_indent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        write_json_with_indent(&path, &json!({"k": "v"}), 4).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"k\": \"v\"\n}");
    }

    #[test]
    fn test_json_struct_survives_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.json");
        write_structured(&path, &sample(), Format::Json).unwrap();
        let loaded: Project = read_json(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_yaml_is_block_style() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.yaml");
        write_yaml(&path, &sample()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("name: demo\n"));
        assert!(text.contains("tags:\n- cli\n- tools\n"));

        let loaded: Project = read_structured(&path, Format::Yaml).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_read_yaml_into_map() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("map.yml");
        std::fs::write(&path, "b: 2\na: 1\n").unwrap();
        let map: BTreeMap<String, i64> = read_yaml(&path).unwrap();
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let result: Result<serde_json::Value> = read_json(&path);
        match result {
            Err(ClikitError::Parse { format, path: p, .. }) => {
                assert_eq!(format, Format::Json);
                assert_eq!(p, path);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_document_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let result: Result<serde_json::Value> = read_json(temp.path().join("none.json"));
        assert!(matches!(result, Err(ClikitError::Read { .. })));
    }
}
