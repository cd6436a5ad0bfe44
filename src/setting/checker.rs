//! Type-dispatched value validation.
//!
//! One exhaustive match from [`Type`] to a pure predicate over a candidate
//! JSON value. A string candidate for a structured type is first parsed as
//! JSON text; structured candidates are validated directly. Every failure
//! is a [`ConfigError`] carrying the offending setting key, so callers can
//! tell "bad config" apart from programming errors.

use serde_json::Value;

use super::def::{SettingDef, Type};
use super::duration::parse_duration;
use super::keys::{ConnectorKey, ObjectKey, TopicKey};
use super::prop_groups::{group_of, PropGroups};
use crate::error::{ConfigError, ConfigResult};

/// Validator bound to one definition's declared type.
///
/// A pure function of its input; safe to invoke concurrently.
pub struct Checker<'a> {
    def: &'a SettingDef,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(def: &'a SettingDef) -> Self {
        Self { def }
    }

    /// Validates a candidate value against the definition's type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the candidate is rejected; the reason
    /// names the setting key.
    pub fn check(&self, candidate: &Value) -> ConfigResult<()> {
        if candidate.is_null() {
            return Err(self.reject("null is not a legal value"));
        }
        match self.def.value_type() {
            Type::Boolean => self.check_boolean(candidate),
            Type::String => self.check_string(candidate),
            Type::Short => self.check_integer(candidate, i16::MIN as i128, i16::MAX as i128),
            Type::Int => self.check_integer(candidate, i32::MIN as i128, i32::MAX as i128),
            Type::Long => self.check_integer(candidate, i64::MIN as i128, i64::MAX as i128),
            Type::Double => self.check_double(candidate),
            Type::List => self.check_list(candidate),
            Type::Class => self.check_non_empty_string(candidate, "class name"),
            Type::Password => self.check_non_empty_string(candidate, "password"),
            Type::Table => self.check_table(candidate),
            Type::Duration => self.check_duration(candidate),
            Type::Port => self.check_port(candidate),
            Type::ObjectKey => self.check_single_key::<ObjectKey>(candidate),
            Type::ConnectorKey => self.check_single_key::<ConnectorKey>(candidate),
            Type::ObjectKeys => self.check_key_list::<ObjectKey>(candidate),
            Type::TopicKeys => self.check_key_list::<TopicKey>(candidate),
            Type::Tags => self.check_tags(candidate),
        }
    }

    fn check_boolean(&self, candidate: &Value) -> ConfigResult<()> {
        match candidate {
            Value::Bool(_) => Ok(()),
            Value::String(text)
                if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") =>
            {
                Ok(())
            }
            other => Err(self.reject(format!(
                "expected a boolean, got {}",
                json_type_name(other)
            ))),
        }
    }

    fn check_string(&self, candidate: &Value) -> ConfigResult<()> {
        if candidate.is_string() {
            Ok(())
        } else {
            Err(self.reject(format!("expected a string, got {}", json_type_name(candidate))))
        }
    }

    fn check_non_empty_string(&self, candidate: &Value, what: &str) -> ConfigResult<()> {
        match candidate.as_str() {
            Some(text) if !text.is_empty() => Ok(()),
            Some(_) => Err(self.reject(format!("{} must not be empty", what))),
            None => Err(self.reject(format!(
                "expected a {}, got {}",
                what,
                json_type_name(candidate)
            ))),
        }
    }

    fn check_integer(&self, candidate: &Value, min: i128, max: i128) -> ConfigResult<()> {
        let number = integer_of(candidate).ok_or_else(|| {
            self.reject(format!(
                "expected an integer, got {}",
                json_type_name(candidate)
            ))
        })?;
        if number < min || number > max {
            return Err(self.reject(format!(
                "{} is out of range [{}, {}]",
                number, min, max
            )));
        }
        Ok(())
    }

    fn check_double(&self, candidate: &Value) -> ConfigResult<()> {
        match candidate {
            Value::Number(_) => Ok(()),
            Value::String(text) if text.parse::<f64>().is_ok() => Ok(()),
            other => Err(self.reject(format!(
                "expected a number, got {}",
                json_type_name(other)
            ))),
        }
    }

    fn check_list(&self, candidate: &Value) -> ConfigResult<()> {
        match candidate {
            Value::Array(_) => Ok(()),
            // A plain string is the legacy single-value form; JSON text that
            // decodes to an array is the structured form.
            Value::String(_) => Ok(()),
            other => Err(self.reject(format!(
                "expected an array, got {}",
                json_type_name(other)
            ))),
        }
    }

    fn check_table(&self, candidate: &Value) -> ConfigResult<()> {
        let groups = match candidate {
            Value::String(text) => PropGroups::from_json_text(text)
                .map_err(|e| self.reject(e.reason()))?,
            Value::Array(rows) => {
                let mut groups = Vec::with_capacity(rows.len());
                for row in rows {
                    groups.push(group_of(row).map_err(|e| self.reject(e.reason()))?);
                }
                PropGroups::of(groups)
            }
            other => {
                return Err(self.reject(format!(
                    "expected property groups, got {}",
                    json_type_name(other)
                )))
            }
        };
        if groups.is_empty() {
            return Err(self.reject("property groups must not be empty"));
        }
        for group in groups.raw() {
            if group.is_empty() {
                return Err(self.reject("every property group must carry at least one column"));
            }
            for table_key in self.def.table_keys() {
                if !group.contains_key(table_key) {
                    return Err(self.reject(format!(
                        "property group is missing required column `{}`",
                        table_key
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_duration(&self, candidate: &Value) -> ConfigResult<()> {
        match candidate.as_str() {
            Some(text) => parse_duration(text).map(|_| ()).map_err(|e| self.reject(e.reason())),
            None => Err(self.reject(format!(
                "expected duration text, got {}",
                json_type_name(candidate)
            ))),
        }
    }

    fn check_port(&self, candidate: &Value) -> ConfigResult<()> {
        let number = integer_of(candidate).ok_or_else(|| {
            self.reject(format!(
                "expected a port number, got {}",
                json_type_name(candidate)
            ))
        })?;
        if !(1..=65_535).contains(&number) {
            return Err(self.reject(format!("port {} is out of range [1, 65535]", number)));
        }
        Ok(())
    }

    fn check_single_key<K: KeyText>(&self, candidate: &Value) -> ConfigResult<()> {
        let text = match candidate {
            Value::String(text) => text.clone(),
            Value::Object(_) => candidate.to_string(),
            other => {
                return Err(self.reject(format!(
                    "expected a {} object, got {}",
                    K::LABEL,
                    json_type_name(other)
                )))
            }
        };
        K::parse_one(&text).map(|_| ()).map_err(|e| self.reject(e.reason()))
    }

    fn check_key_list<K: KeyText>(&self, candidate: &Value) -> ConfigResult<()> {
        let text = match candidate {
            Value::String(text) => text.clone(),
            Value::Array(_) => candidate.to_string(),
            other => {
                return Err(self.reject(format!(
                    "expected an array of {} objects, got {}",
                    K::LABEL,
                    json_type_name(other)
                )))
            }
        };
        let count = K::parse_list(&text).map_err(|e| self.reject(e.reason()))?;
        if count == 0 {
            return Err(self.reject(format!("at least one {} is required", K::LABEL)));
        }
        Ok(())
    }

    fn check_tags(&self, candidate: &Value) -> ConfigResult<()> {
        match candidate {
            // A plain string is accepted unconditionally.
            Value::String(_) => Ok(()),
            Value::Object(_) => Ok(()),
            Value::Array(items) if !items.is_empty() => Ok(()),
            Value::Array(_) => Err(self.reject("tags must not be an empty array")),
            other => Err(self.reject(format!("expected tags, got {}", json_type_name(other)))),
        }
    }

    fn reject(&self, reason: impl std::fmt::Display) -> ConfigError {
        ConfigError::rejected(self.def.key(), reason)
    }
}

/// Canonical-text parsing shared by the key checkers.
trait KeyText: Sized {
    const LABEL: &'static str;
    fn parse_one(text: &str) -> ConfigResult<Self>;
    fn parse_list(text: &str) -> ConfigResult<usize>;
}

macro_rules! key_text {
    ($name:ident, $label:literal) => {
        impl KeyText for $name {
            const LABEL: &'static str = $label;

            fn parse_one(text: &str) -> ConfigResult<Self> {
                text.parse()
            }

            fn parse_list(text: &str) -> ConfigResult<usize> {
                Ok(Self::from_json_list(text)?.len())
            }
        }
    };
}

key_text!(ObjectKey, "object key");
key_text!(TopicKey, "topic key");
key_text!(ConnectorKey, "connector key");

/// Integer view of a candidate: a JSON integer or an integer string.
fn integer_of(candidate: &Value) -> Option<i128> {
    match candidate {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i as i128)
            } else {
                n.as_u64().map(|u| u as i128)
            }
        }
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
