//! Property-groups payload: the wire form of a TABLE setting value.
//!
//! A JSON array of flat objects, each mapping column names to string
//! values. Rows are held as `BTreeMap`s so the serialized form is
//! deterministic.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Ordered sequence of string-to-string groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropGroups {
    groups: Vec<BTreeMap<String, String>>,
}

impl PropGroups {
    /// Wraps the given groups.
    pub fn of(groups: Vec<BTreeMap<String, String>>) -> Self {
        Self { groups }
    }

    /// Parses a JSON array of flat string-valued objects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is not a JSON array, an element
    /// is not an object, or a column value is not a string.
    pub fn from_json_text(text: &str) -> ConfigResult<Self> {
        let parsed: Value = serde_json::from_str(text)
            .map_err(|e| ConfigError::new(format!("property groups must be JSON: {}", e)))?;
        let rows = parsed.as_array().ok_or_else(|| {
            ConfigError::new("property groups must be a JSON array of objects")
        })?;

        let mut groups = Vec::with_capacity(rows.len());
        for row in rows {
            groups.push(group_of(row)?);
        }
        Ok(Self { groups })
    }

    /// Renders the canonical JSON text form.
    pub fn to_json_text(&self) -> String {
        let rows: Vec<Value> = self
            .groups
            .iter()
            .map(|group| {
                Value::Object(
                    group
                        .iter()
                        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                        .collect(),
                )
            })
            .collect();
        Value::Array(rows).to_string()
    }

    /// The groups in construction order.
    pub fn raw(&self) -> &[BTreeMap<String, String>] {
        &self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Converts one JSON row into a string-to-string group.
pub(crate) fn group_of(row: &Value) -> ConfigResult<BTreeMap<String, String>> {
    let obj = row.as_object().ok_or_else(|| {
        ConfigError::new("every property group must be a JSON object")
    })?;
    let mut group = BTreeMap::new();
    for (key, value) in obj {
        let text = value.as_str().ok_or_else(|| {
            ConfigError::new(format!("property `{}` must carry a string value", key))
        })?;
        group.insert(key.clone(), text.to_string());
    }
    Ok(group)
}
