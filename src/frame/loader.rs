//! Load frame sets from JSON files.
//!
//! Accepts either a bare array of frames or an object with a `frames` key.
//! Each field may carry an explicit `kind` tag; when the tag is missing the
//! kind is inferred from the value types (all strings -> label, all numbers
//! -> numeric, anything else -> other). Different hosts spell the kind tags
//! differently, so the accepted spellings live in `utils::config`.

use crate::frame::schema::{Field, Frame};
use crate::utils::config::{LABEL_KIND_NAMES, NUMERIC_KIND_NAMES};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawFrame {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    values: Vec<Value>,
}

/// Load a frame set from a JSON file
///
/// **Public** - main entry point for frame loading
///
/// # Errors
/// * `ParseError::IoError` - file cannot be read
/// * `ParseError::JsonError` - not valid JSON
/// * `ParseError::InvalidFormat` - JSON shape is not a frame set
pub fn load_frames(path: impl AsRef<Path>) -> Result<Vec<Frame>, ParseError> {
    let path = path.as_ref();
    debug!("Loading frames from: {}", path.display());

    let text = std::fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&text)?;

    let raw_frames: Vec<RawFrame> = match root {
        Value::Array(_) => serde_json::from_value(root)?,
        Value::Object(mut map) => match map.remove("frames") {
            Some(frames) => serde_json::from_value(frames)?,
            None => {
                return Err(ParseError::InvalidFormat(
                    "expected a JSON array of frames or an object with a 'frames' key"
                        .to_string(),
                ))
            }
        },
        _ => {
            return Err(ParseError::InvalidFormat(
                "top-level JSON value must be an array or object".to_string(),
            ))
        }
    };

    let frames: Vec<Frame> = raw_frames
        .into_iter()
        .enumerate()
        .map(|(i, raw)| convert_frame(raw, i))
        .collect::<Result<_, _>>()?;

    debug!("Loaded {} frames", frames.len());
    Ok(frames)
}

fn convert_frame(raw: RawFrame, index: usize) -> Result<Frame, ParseError> {
    let mut fields = Vec::with_capacity(raw.fields.len());
    for (fi, field) in raw.fields.into_iter().enumerate() {
        let name = field
            .name
            .unwrap_or_else(|| format!("field_{fi}"));
        fields.push(classify_field(name, field.kind.as_deref(), field.values)?);
    }
    Ok(Frame::new(
        raw.name.or_else(|| Some(format!("frame_{index}"))),
        fields,
    ))
}

/// Turn a raw field into a typed one.
///
/// An explicit kind tag wins; otherwise the kind is inferred from the value
/// types. Values that cannot satisfy an explicit tag are an error rather
/// than a silent skip, so row alignment across fields is never broken.
fn classify_field(name: String, kind: Option<&str>, values: Vec<Value>) -> Result<Field, ParseError> {
    match kind.map(|k| k.to_ascii_lowercase()) {
        Some(k) if LABEL_KIND_NAMES.contains(&k.as_str()) => {
            let labels = values
                .iter()
                .map(scalar_to_string)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "label field '{name}' contains a non-scalar value"
                    ))
                })?;
            Ok(Field::label(name, labels))
        }
        Some(k) if NUMERIC_KIND_NAMES.contains(&k.as_str()) => {
            let numbers = values
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "numeric field '{name}' contains a non-numeric value"
                    ))
                })?;
            Ok(Field::numeric(name, numbers))
        }
        Some(other) => {
            warn!("Field '{name}' has unrecognized kind '{other}', treating as other");
            Ok(Field::Other {
                name,
                len: values.len(),
            })
        }
        None => Ok(infer_field(name, values)),
    }
}

/// Kind inference for untagged fields
fn infer_field(name: String, values: Vec<Value>) -> Field {
    if !values.is_empty() && values.iter().all(Value::is_string) {
        let labels = values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
        return Field::label(name, labels);
    }
    if !values.is_empty() && values.iter().all(Value::is_number) {
        let numbers = values.iter().filter_map(Value::as_f64).collect();
        return Field::numeric(name, numbers);
    }
    Field::Other {
        name,
        len: values.len(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::schema::FieldKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_bare_array() {
        let file = write_temp(
            r#"[{"name":"defects","fields":[
                {"name":"category","kind":"label","values":["A","B"]},
                {"name":"count","kind":"numeric","values":[3,4]}
            ]}]"#,
        );
        let frames = load_frames(file.path()).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].fields.len(), 2);
        assert_eq!(frames[0].fields[0].kind(), FieldKind::Label);
        assert_eq!(frames[0].fields[1].kind(), FieldKind::Numeric);
    }

    #[test]
    fn test_load_frames_object() {
        let file = write_temp(r#"{"frames":[{"fields":[]}]}"#);
        let frames = load_frames(file.path()).unwrap();
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_kind_inference() {
        let file = write_temp(
            r#"[{"fields":[
                {"name":"defect","values":["A","B","A"]},
                {"name":"when","values":[1,null,3]}
            ]}]"#,
        );
        let frames = load_frames(file.path()).unwrap();
        assert_eq!(frames[0].fields[0].kind(), FieldKind::Label);
        // Mixed values fall back to "other"
        assert_eq!(frames[0].fields[1].kind(), FieldKind::Other);
        assert_eq!(frames[0].fields[1].len(), 3);
    }

    #[test]
    fn test_explicit_numeric_rejects_strings() {
        let file = write_temp(
            r#"[{"fields":[{"name":"v","kind":"number","values":[1,"two"]}]}]"#,
        );
        let err = load_frames(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_invalid_top_level_shape() {
        let file = write_temp(r#"{"not_frames": []}"#);
        assert!(load_frames(file.path()).is_err());
    }
}
