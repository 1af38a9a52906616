//! Front-matter schema validation

use chrono::{NaiveDate, NaiveDateTime};
use serde_yaml::Value;

use super::error::ValidationError;

/// Validated front-matter of a post document
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub summary: String,
    pub date: NaiveDateTime,
    pub author: String,
    pub protected: bool,
}

impl FrontMatter {
    /// Split a document into validated front-matter and the markdown body.
    ///
    /// The front-matter is the leading YAML block delimited by `---` lines.
    /// Returns (front_matter, body).
    pub fn parse(content: &str) -> Result<(Self, &str), ValidationError> {
        let (yaml, body) = split_document(content)?;
        let fields: Value = serde_yaml::from_str(yaml)?;
        let fm = Self::validate(&fields)?;
        Ok((fm, body))
    }

    /// Check presence and type of every schema field.
    ///
    /// `protected` is the only field with a default; everything else must be
    /// present and well-typed or the document is rejected.
    fn validate(fields: &Value) -> Result<Self, ValidationError> {
        let title = require_str(fields, "title", "string")?;
        if title.is_empty() {
            return Err(ValidationError::EmptyField { field: "title" });
        }

        let summary = require_str(fields, "summary", "string")?;
        let author = require_str(fields, "author", "string")?;

        let date_raw = require_str(fields, "date", "date string")?;
        let date = parse_date(date_raw)
            .ok_or_else(|| ValidationError::UnparsableDate(date_raw.to_string()))?;

        let protected = optional_bool(fields, "protected")?;

        Ok(Self {
            title: title.to_string(),
            summary: summary.to_string(),
            date,
            author: author.to_string(),
            protected,
        })
    }
}

/// Split a document into its raw YAML block and the remaining body.
fn split_document(content: &str) -> Result<(&str, &str), ValidationError> {
    let content = content.trim_start();
    let rest = content
        .strip_prefix("---")
        .ok_or(ValidationError::MissingFrontMatter)?;
    let rest = rest.trim_start_matches(['\n', '\r']);

    let end = rest
        .find("\n---")
        .ok_or(ValidationError::MissingFrontMatter)?;
    let yaml = &rest[..end];
    let body = rest[end + 4..].trim_start_matches(['\n', '\r']);
    Ok((yaml, body))
}

/// Look up a required string field.
fn require_str<'a>(
    fields: &'a Value,
    field: &'static str,
    expected: &'static str,
) -> Result<&'a str, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field, expected }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::WrongType { field, expected }),
    }
}

/// Look up the optional `protected` flag, defaulting to false.
fn optional_bool(fields: &Value, field: &'static str) -> Result<bool, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "boolean",
        }),
    }
}

/// Parse a date string in the accepted source formats.
fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}
