//! Document parsing: front-matter split and metadata decoding.
//!
//! A locale document is a structured key/value preamble followed by a
//! free-form body. The preamble is either YAML (delimited by `---`) or
//! TOML (delimited by `+++`); the parse itself is delegated to serde,
//! and the decoded values are flattened into a single
//! `serde_json::Map<String, Value>`, the only place in the crate where
//! untyped data exists. Everything downstream narrows through the
//! sanitizers and assemblers.

use serde_json::{Map, Value};

/// A parsed locale document: loose metadata map plus raw body text.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub metadata: Map<String, Value>,
    pub body: String,
}

/// Front-matter delimiter flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML front matter delimited by `---`.
    Yaml,
    /// TOML front matter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split raw text into (format, front matter, body).
///
/// Returns `None` when no opening delimiter is present or the closing
/// delimiter is missing; callers treat that as a body-only document.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();
    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(delimiter)?;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse a raw document into metadata map + body.
///
/// This never fails: a document with no preamble, or with a preamble
/// that does not parse, degrades to an empty metadata map with the full
/// text as body. Field-level problems are the sanitizers' concern, not
/// the parser's.
pub fn parse_document(raw: &str) -> Document {
    let Some((format, fm, body)) = split_frontmatter(raw) else {
        return Document {
            metadata: Map::new(),
            body: raw.to_owned(),
        };
    };

    let metadata = match format {
        FrontmatterFormat::Yaml => serde_yaml::from_str::<serde_yaml::Value>(fm)
            .ok()
            .map(yaml_to_json),
        FrontmatterFormat::Toml => fm.parse::<toml::Value>().ok().map(toml_to_json),
    };

    match metadata {
        Some(Value::Object(map)) => Document {
            metadata: map,
            body: body.to_owned(),
        },
        // Parse failure or a non-map preamble: keep the whole text
        _ => Document {
            metadata: Map::new(),
            body: raw.to_owned(),
        },
    }
}

// ============================================================================
// Value Conversion
// ============================================================================

/// Convert a TOML value to a JSON value.
///
/// Datetimes become their literal string form so that date
/// normalization sees the same shape regardless of preamble flavor.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert a YAML value to a JSON value.
///
/// Non-string mapping keys are dropped (front-matter keys are always
/// field names); tagged values are unwrapped.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .filter_map(|(k, v)| {
                    let key = k.as_str()?.to_owned();
                    Some((key, yaml_to_json(v)))
                })
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}
