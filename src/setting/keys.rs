//! Identifier keys: immutable (group, name) pairs.
//!
//! Canonical textual form is a single JSON object with `group` and `name`
//! fields. Parsing malformed text is a [`ConfigError`], not a generic parse
//! fault, so callers can report it against the offending setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArgumentError, ArgumentResult, ConfigError, ConfigResult};

/// Stamps out one key type; the three key kinds share an identical contract
/// and differ only in what they identify.
macro_rules! key_type {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name {
            group: String,
            name: String,
        }

        impl $name {
            /// Creates a key, rejecting an empty group or name.
            pub fn of(
                group: impl Into<String>,
                name: impl Into<String>,
            ) -> ArgumentResult<Self> {
                let group = group.into();
                let name = name.into();
                if group.is_empty() {
                    return Err(ArgumentError::empty("group"));
                }
                if name.is_empty() {
                    return Err(ArgumentError::empty("name"));
                }
                Ok(Self { group, name })
            }

            /// The group this key belongs to.
            pub fn group(&self) -> &str {
                &self.group
            }

            /// The name within the group.
            pub fn name(&self) -> &str {
                &self.name
            }

            /// Renders a list of keys as a JSON array of canonical key objects.
            pub fn to_json_list(keys: &[Self]) -> String {
                let items: Vec<serde_json::Value> = keys
                    .iter()
                    .map(|key| {
                        serde_json::json!({"group": key.group, "name": key.name})
                    })
                    .collect();
                serde_json::Value::Array(items).to_string()
            }

            /// Parses a JSON array of canonical key objects.
            ///
            /// # Errors
            ///
            /// Returns [`ConfigError`] when the text is not a JSON array of
            /// well-formed key objects. The array may be empty; emptiness
            /// policy belongs to the caller.
            pub fn from_json_list(text: &str) -> ConfigResult<Vec<Self>> {
                let keys: Vec<Self> = serde_json::from_str(text).map_err(|e| {
                    ConfigError::new(format!(
                        "expected a JSON array of {} objects: {}",
                        $label, e
                    ))
                })?;
                for key in &keys {
                    key.validate()?;
                }
                Ok(keys)
            }

            fn validate(&self) -> ConfigResult<()> {
                if self.group.is_empty() || self.name.is_empty() {
                    return Err(ConfigError::new(format!(
                        "{} must carry a non-empty group and name",
                        $label
                    )));
                }
                Ok(())
            }
        }

        impl fmt::Display for $name {
            /// Renders the canonical JSON text form.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}",
                    serde_json::json!({"group": self.group, "name": self.name})
                )
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            /// Parses the canonical JSON text form.
            fn from_str(text: &str) -> ConfigResult<Self> {
                let key: Self = serde_json::from_str(text).map_err(|e| {
                    ConfigError::new(format!("malformed {} text: {}", $label, e))
                })?;
                key.validate()?;
                Ok(key)
            }
        }
    };
}

key_type!(
    /// Identifies a generic object by (group, name).
    ObjectKey,
    "object key"
);

key_type!(
    /// Identifies a topic by (group, name).
    TopicKey,
    "topic key"
);

key_type!(
    /// Identifies a connector by (group, name).
    ConnectorKey,
    "connector key"
);
