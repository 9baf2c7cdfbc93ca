//! Compiled line patterns with named, typed capture groups

use crate::{parse_error, pattern_error, Result};
use regex::Regex;
use std::collections::BTreeMap;

/// Kind declared for a captured field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    Float,
}

/// A captured field value coerced to its declared kind
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Mapping from field name to captured value for one matched line
pub type FieldMap = BTreeMap<String, FieldValue>;

/// A compiled line grammar: a regular expression plus an ordered list of
/// named, typed fields bound to its capture groups.
///
/// Field names need not be unique; a later capture overwrites an earlier one
/// under the same name (the iostat device grammar relies on this).
#[derive(Debug)]
pub struct LinePattern {
    pattern: String,
    regex: Regex,
    fields: Vec<(String, FieldKind)>,
}

impl LinePattern {
    /// Compile a pattern. The i-th capture group is bound to the i-th
    /// declared field; the whole line must match. A field count that does
    /// not agree with the group count is rejected here, at declaration
    /// time, not at first use.
    pub fn new(pattern: &str, fields: &[(&str, FieldKind)]) -> Result<Self> {
        let regex = Regex::new(&format!(r"\A(?:{})\z", pattern))
            .map_err(|e| pattern_error(pattern, e.to_string()))?;
        let groups = regex.captures_len() - 1;
        if groups != fields.len() {
            return Err(pattern_error(
                pattern,
                format!(
                    "declares {} fields but has {} capture groups",
                    fields.len(),
                    groups
                ),
            ));
        }
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            fields: fields
                .iter()
                .map(|(name, kind)| (name.to_string(), *kind))
                .collect(),
        })
    }

    /// The pattern text this matcher was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Attempt a full-line match against `text`.
    ///
    /// `Ok(None)` means the line does not have this shape; callers use that
    /// as a control signal, not an error. A line that matches but whose
    /// numeric capture cannot be coerced means the grammar and the actual
    /// log disagree, which is fatal.
    pub fn parse_line(&self, text: &str) -> Result<Option<FieldMap>> {
        let captures = match self.regex.captures(text) {
            Some(captures) => captures,
            None => return Ok(None),
        };

        let mut fields = FieldMap::new();
        for (index, (name, kind)) in self.fields.iter().enumerate() {
            let raw = captures
                .get(index + 1)
                .ok_or_else(|| {
                    parse_error(
                        format!("field {:?} did not capture", name),
                        None,
                        Some(text),
                    )
                })?
                .as_str();

            let value = match kind {
                FieldKind::Text => FieldValue::Text(raw.to_string()),
                FieldKind::Int => FieldValue::Int(raw.parse().map_err(|_| {
                    parse_error(
                        format!("field {:?} is not an integer: {:?}", name, raw),
                        None,
                        Some(text),
                    )
                })?),
                FieldKind::Float => FieldValue::Float(raw.parse().map_err(|_| {
                    parse_error(
                        format!("field {:?} is not a float: {:?}", name, raw),
                        None,
                        Some(text),
                    )
                })?),
            };
            fields.insert(name.clone(), value);
        }

        Ok(Some(fields))
    }
}
