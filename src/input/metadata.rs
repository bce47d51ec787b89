//! Structured metadata (EXIF) extraction.
//!
//! The mapping is grouped by namespace (`IFD0`, `EXIF`, `GPS`, `INTEROP`, `THUMBNAIL`) and
//! queried with dotted keys such as `"IFD0.Artist"`. Inputs without a readable metadata block
//! produce an empty mapping rather than an error; only failing to read a file path is an error.

use std::{collections::BTreeMap, io::Cursor, path::Path};

use crate::foundation::error::{ImageError, ImageResult};

/// Scalar metadata value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Text or a multi-component value rendered as text.
    Text(String),
    /// Single integral component.
    Integer(i64),
    /// Single rational or floating point component.
    Float(f64),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(v) => Some(*v),
            MetadataValue::Integer(v) => Some(*v as f64),
            MetadataValue::Text(_) => None,
        }
    }
}

/// Namespace -> tag name -> value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetadataMapping {
    groups: BTreeMap<String, BTreeMap<String, MetadataValue>>,
}

impl MetadataMapping {
    /// Look up a dotted `"NAMESPACE.Tag"` key. Case-sensitive.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        let (namespace, tag) = key.split_once('.')?;
        self.groups.get(namespace)?.get(tag)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetadataValue::as_text)
    }

    pub fn namespace(&self, name: &str) -> Option<&BTreeMap<String, MetadataValue>> {
        self.groups.get(name)
    }

    /// Number of tags across all namespaces.
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(dotted key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &MetadataValue)> + '_ {
        self.groups.iter().flat_map(|(ns, tags)| {
            tags.iter()
                .map(move |(tag, value)| (format!("{ns}.{tag}"), value))
        })
    }

    // The first occurrence of a key wins.
    fn insert(&mut self, namespace: &str, tag: String, value: MetadataValue) {
        self.groups
            .entry(namespace.to_string())
            .or_default()
            .entry(tag)
            .or_insert(value);
    }
}

/// Where to read metadata from.
#[derive(Clone, Copy, Debug)]
pub enum MetadataSource<'a> {
    /// Encoded image bytes.
    Bytes(&'a [u8]),
    /// Path of an encoded image file.
    Path(&'a Path),
}

/// Extract the metadata mapping from `source`.
pub fn extract_metadata(source: MetadataSource<'_>) -> ImageResult<MetadataMapping> {
    match source {
        MetadataSource::Bytes(bytes) => Ok(extract_from_bytes(bytes)),
        MetadataSource::Path(path) => {
            let bytes = std::fs::read(path).map_err(|e| ImageError::io(path, e))?;
            Ok(extract_from_bytes(&bytes))
        }
    }
}

pub(crate) fn extract_from_bytes(bytes: &[u8]) -> MetadataMapping {
    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(err) => {
            tracing::debug!(error = %err, "no metadata block");
            return MetadataMapping::default();
        }
    };

    let mut out = MetadataMapping::default();
    for field in exif.fields() {
        out.insert(
            namespace_for(field),
            field.tag.to_string(),
            value_for(field),
        );
    }
    out
}

fn namespace_for(field: &exif::Field) -> &'static str {
    if field.ifd_num == exif::In::THUMBNAIL {
        return "THUMBNAIL";
    }
    match field.tag.context() {
        exif::Context::Tiff => "IFD0",
        exif::Context::Exif => "EXIF",
        exif::Context::Gps => "GPS",
        exif::Context::Interop => "INTEROP",
        #[allow(unreachable_patterns)]
        _ => "UNKNOWN",
    }
}

fn value_for(field: &exif::Field) -> MetadataValue {
    use exif::Value;

    match &field.value {
        Value::Ascii(lines) if !lines.is_empty() => {
            let text = lines
                .iter()
                .map(|l| String::from_utf8_lossy(l).trim_end_matches('\0').to_string())
                .collect::<Vec<_>>()
                .join("\n");
            MetadataValue::Text(text)
        }
        Value::Byte(v) if v.len() == 1 => MetadataValue::Integer(i64::from(v[0])),
        Value::Short(v) if v.len() == 1 => MetadataValue::Integer(i64::from(v[0])),
        Value::Long(v) if v.len() == 1 => MetadataValue::Integer(i64::from(v[0])),
        Value::SByte(v) if v.len() == 1 => MetadataValue::Integer(i64::from(v[0])),
        Value::SShort(v) if v.len() == 1 => MetadataValue::Integer(i64::from(v[0])),
        Value::SLong(v) if v.len() == 1 => MetadataValue::Integer(i64::from(v[0])),
        Value::Rational(v) if v.len() == 1 && v[0].denom != 0 => {
            MetadataValue::Float(v[0].to_f64())
        }
        Value::SRational(v) if v.len() == 1 && v[0].denom != 0 => {
            MetadataValue::Float(v[0].to_f64())
        }
        Value::Float(v) if v.len() == 1 => MetadataValue::Float(f64::from(v[0])),
        Value::Double(v) if v.len() == 1 => MetadataValue::Float(v[0]),
        _ => MetadataValue::Text(field.display_value().to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/metadata.rs"]
mod tests;
