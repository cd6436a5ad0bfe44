//! The setting-definition entity and its builder.
//!
//! A `SettingDef` describes one configurable key: its value type, display
//! metadata, default, and flags. Definitions are built via
//! [`SettingDef::builder`], which validates each argument eagerly and
//! freezes the result at `build()`; after that the definition is immutable
//! and safe to share across threads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::checker::Checker;
use super::duration::format_duration;
use super::keys::{ConnectorKey, ObjectKey, TopicKey};
use crate::error::{ArgumentError, ArgumentResult};

/// Value kinds a setting can declare.
///
/// Closed on purpose: each variant owns one validation policy in
/// [`Checker`], so the checker set stays exhaustive and centrally
/// reviewable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Boolean,
    String,
    Short,
    Int,
    Long,
    Double,
    /// An array of arbitrary items, or a legacy single plain string.
    List,
    /// A fully-qualified class or plugin name; non-empty string.
    Class,
    /// Sensitive string; non-empty.
    Password,
    /// Property-groups payload whose rows must cover `table_keys`.
    Table,
    /// ISO-8601 or `"<integer> <UNIT_NAME>"` text.
    Duration,
    /// TCP port in `1..=65535`.
    Port,
    /// One canonical object-key JSON object.
    ObjectKey,
    /// Non-empty JSON array of canonical object-key objects.
    ObjectKeys,
    /// Non-empty JSON array of canonical topic-key objects.
    TopicKeys,
    /// Exactly one canonical connector-key JSON object.
    ConnectorKey,
    /// Free-form tags: plain string, object, or non-empty array.
    Tags,
}

impl Type {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Short => "short",
            Type::Int => "int",
            Type::Long => "long",
            Type::Double => "double",
            Type::List => "list",
            Type::Class => "class",
            Type::Password => "password",
            Type::Table => "table",
            Type::Duration => "duration",
            Type::Port => "port",
            Type::ObjectKey => "object key",
            Type::ObjectKeys => "object keys",
            Type::TopicKeys => "topic keys",
            Type::ConnectorKey => "connector key",
            Type::Tags => "tags",
        }
    }
}

/// What, if anything, a setting value refers to elsewhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    None,
    Topic,
    Node,
    File,
    BrokerCluster,
    WorkerCluster,
}

/// Schema entry describing one configurable key.
///
/// Equality and serialization are structural. Construct via
/// [`SettingDef::builder`]; there is no mutation path after `build()`.
/// Deserialization re-checks the builder invariants, so external bytes
/// cannot produce a definition the builder would have refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSettingDef")]
pub struct SettingDef {
    key: String,
    value_type: Type,
    display_name: String,
    group: String,
    order_in_group: i32,
    default_value: Option<String>,
    documentation: String,
    reference: Reference,
    required: bool,
    editable: bool,
    internal: bool,
    table_keys: Vec<String>,
}

impl SettingDef {
    /// Group assigned to definitions that never set one.
    pub const COMMON_GROUP: &'static str = "core";

    /// Documentation assigned to definitions that never set any.
    pub const COMMON_DOCUMENTATION: &'static str = "this setting is not documented";

    /// Starts a fresh builder.
    pub fn builder() -> SettingDefBuilder {
        SettingDefBuilder::default()
    }

    /// The setting key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The declared value type.
    pub fn value_type(&self) -> Type {
        self.value_type
    }

    /// Human-facing name; defaults to the key.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The group this setting is displayed under.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Position within the group.
    pub fn order_in_group(&self) -> i32 {
        self.order_in_group
    }

    /// Canonical string form of the default, if one was supplied.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The documentation text.
    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    /// What the value refers to.
    pub fn reference(&self) -> Reference {
        self.reference
    }

    /// True iff no default was supplied and the setting was never marked
    /// optional.
    pub fn required(&self) -> bool {
        self.required
    }

    /// False after `readonly()`.
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// True after `internal()`.
    pub fn internal(&self) -> bool {
        self.internal
    }

    /// Column names a TABLE value must cover; empty for other types.
    pub fn table_keys(&self) -> &[String] {
        &self.table_keys
    }

    /// Returns the validator bound to this definition's type.
    ///
    /// The checker is a pure function of its input and never mutates the
    /// definition.
    pub fn checker(&self) -> Checker<'_> {
        Checker::new(self)
    }

    /// Infallible constructor for the injected metadata definitions.
    ///
    /// The merge layer must have no failure path, so it bypasses the
    /// builder's fallible surface. Caller guarantees a non-empty key.
    pub(crate) fn meta(key: &str, default: &str, group: &str, order: i32) -> Self {
        Self {
            key: key.to_string(),
            value_type: Type::String,
            display_name: key.to_string(),
            group: group.to_string(),
            order_in_group: order,
            default_value: Some(default.to_string()),
            documentation: Self::COMMON_DOCUMENTATION.to_string(),
            reference: Reference::None,
            required: false,
            editable: false,
            internal: false,
            table_keys: Vec::new(),
        }
    }
}

/// Unvalidated wire shape of a definition.
#[derive(Deserialize)]
struct RawSettingDef {
    key: String,
    value_type: Type,
    display_name: String,
    group: String,
    order_in_group: i32,
    default_value: Option<String>,
    documentation: String,
    reference: Reference,
    required: bool,
    editable: bool,
    internal: bool,
    table_keys: Vec<String>,
}

impl TryFrom<RawSettingDef> for SettingDef {
    type Error = ArgumentError;

    fn try_from(raw: RawSettingDef) -> ArgumentResult<Self> {
        if raw.key.is_empty() {
            return Err(ArgumentError::empty("key"));
        }
        if raw.display_name.is_empty() {
            return Err(ArgumentError::empty("display name"));
        }
        if raw.group.is_empty() {
            return Err(ArgumentError::empty("group"));
        }
        if raw.documentation.is_empty() {
            return Err(ArgumentError::empty("documentation"));
        }
        // A default makes a setting optional; the two fields must agree.
        if raw.required && raw.default_value.is_some() {
            return Err(ArgumentError::illegal(
                "a definition carrying a default value cannot be required",
            ));
        }
        Ok(Self {
            key: raw.key,
            value_type: raw.value_type,
            display_name: raw.display_name,
            group: raw.group,
            order_in_group: raw.order_in_group,
            default_value: raw.default_value,
            documentation: raw.documentation,
            reference: raw.reference,
            required: raw.required,
            editable: raw.editable,
            internal: raw.internal,
            table_keys: raw.table_keys,
        })
    }
}

/// Single-owner staging object for [`SettingDef`].
///
/// Setters validate eagerly; `build()` fills unset fields with defaults and
/// freezes the result. Concurrent use of one builder is not supported.
#[derive(Debug, Default)]
pub struct SettingDefBuilder {
    key: Option<String>,
    value_type: Option<Type>,
    display_name: Option<String>,
    group: Option<String>,
    order_in_group: i32,
    default_value: Option<String>,
    documentation: Option<String>,
    reference: Option<Reference>,
    optional: bool,
    readonly: bool,
    internal: bool,
    table_keys: Vec<String>,
}

impl SettingDefBuilder {
    /// Sets the setting key.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Illegal`] for an empty key.
    pub fn key(mut self, key: impl Into<String>) -> ArgumentResult<Self> {
        self.key = Some(non_empty("key", key)?);
        Ok(self)
    }

    /// Sets the value type.
    #[must_use]
    pub fn value_type(mut self, value_type: Type) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Sets the human-facing name.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Illegal`] for an empty name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> ArgumentResult<Self> {
        self.display_name = Some(non_empty("display name", display_name)?);
        Ok(self)
    }

    /// Sets the display group.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Illegal`] for an empty group.
    pub fn group(mut self, group: impl Into<String>) -> ArgumentResult<Self> {
        self.group = Some(non_empty("group", group)?);
        Ok(self)
    }

    /// Sets the documentation text.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Illegal`] for an empty text.
    pub fn documentation(mut self, documentation: impl Into<String>) -> ArgumentResult<Self> {
        self.documentation = Some(non_empty("documentation", documentation)?);
        Ok(self)
    }

    /// Sets what the value refers to.
    #[must_use]
    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Sets the position within the group.
    #[must_use]
    pub fn order_in_group(mut self, order: i32) -> Self {
        self.order_in_group = order;
        self
    }

    /// Sets the column names a TABLE value must cover.
    #[must_use]
    pub fn table_keys(mut self, table_keys: Vec<String>) -> Self {
        self.table_keys = table_keys;
        self
    }

    /// Marks the setting not-required, with no default.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.default_value = None;
        self
    }

    /// Marks the setting not-required with a string default.
    #[must_use]
    pub fn optional_string(mut self, default: impl Into<String>) -> Self {
        self.optional = true;
        self.default_value = Some(default.into());
        self
    }

    /// Marks the setting not-required with a duration default, stored in
    /// canonical ISO-8601 text.
    #[must_use]
    pub fn optional_duration(mut self, default: Duration) -> Self {
        self.optional = true;
        self.default_value = Some(format_duration(default));
        self
    }

    /// Marks the setting not-required with an object-key default, stored as
    /// canonical key text.
    #[must_use]
    pub fn optional_object_key(mut self, default: &ObjectKey) -> Self {
        self.optional = true;
        self.default_value = Some(default.to_string());
        self
    }

    /// Marks the setting not-required with a topic-key default, stored as
    /// canonical key text.
    #[must_use]
    pub fn optional_topic_key(mut self, default: &TopicKey) -> Self {
        self.optional = true;
        self.default_value = Some(default.to_string());
        self
    }

    /// Marks the setting not-required with a connector-key default, stored
    /// as canonical key text.
    #[must_use]
    pub fn optional_connector_key(mut self, default: &ConnectorKey) -> Self {
        self.optional = true;
        self.default_value = Some(default.to_string());
        self
    }

    /// Marks the built definition read-only.
    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Marks the built definition internal (hidden from end users).
    #[must_use]
    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    /// Freezes the definition, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Missing`] when no key was ever supplied.
    pub fn build(self) -> ArgumentResult<SettingDef> {
        let key = self.key.ok_or(ArgumentError::Missing("key"))?;
        let required = self.default_value.is_none() && !self.optional;
        Ok(SettingDef {
            display_name: self.display_name.unwrap_or_else(|| key.clone()),
            key,
            value_type: self.value_type.unwrap_or(Type::String),
            group: self
                .group
                .unwrap_or_else(|| SettingDef::COMMON_GROUP.to_string()),
            order_in_group: self.order_in_group,
            default_value: self.default_value,
            documentation: self
                .documentation
                .unwrap_or_else(|| SettingDef::COMMON_DOCUMENTATION.to_string()),
            reference: self.reference.unwrap_or(Reference::None),
            required,
            editable: !self.readonly,
            internal: self.internal,
            table_keys: self.table_keys,
        })
    }
}

fn non_empty(what: &'static str, value: impl Into<String>) -> ArgumentResult<String> {
    let value = value.into();
    if value.is_empty() {
        return Err(ArgumentError::empty(what));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_arguments_are_illegal() {
        assert!(SettingDef::builder().key("").is_err());
        assert!(SettingDef::builder().display_name("").is_err());
        assert!(SettingDef::builder().group("").is_err());
        assert!(SettingDef::builder().documentation("").is_err());
    }

    #[test]
    fn build_without_key_is_missing() {
        let result = SettingDef::builder().value_type(Type::String).build();
        assert_eq!(result.unwrap_err(), ArgumentError::Missing("key"));
    }

    #[test]
    fn only_key_fills_every_default() {
        let def = SettingDef::builder().key("my.key").unwrap().build().unwrap();
        assert_eq!(def.key(), "my.key");
        assert_eq!(def.display_name(), "my.key");
        assert_eq!(def.group(), SettingDef::COMMON_GROUP);
        assert_eq!(def.documentation(), SettingDef::COMMON_DOCUMENTATION);
        assert_eq!(def.value_type(), Type::String);
        assert_eq!(def.reference(), Reference::None);
        assert_eq!(def.order_in_group(), 0);
        assert_eq!(def.default_value(), None);
        assert!(def.required());
        assert!(def.editable());
        assert!(!def.internal());
        assert!(def.table_keys().is_empty());
    }

    #[test]
    fn every_setter_lands_in_the_definition() {
        let def = SettingDef::builder()
            .key("k")
            .unwrap()
            .value_type(Type::Table)
            .display_name("display")
            .unwrap()
            .group("grp")
            .unwrap()
            .reference(Reference::WorkerCluster)
            .order_in_group(100)
            .optional_string("dft")
            .documentation("doc")
            .unwrap()
            .table_keys(vec!["a".to_string()])
            .build()
            .unwrap();
        assert_eq!(def.key(), "k");
        assert_eq!(def.value_type(), Type::Table);
        assert_eq!(def.display_name(), "display");
        assert_eq!(def.group(), "grp");
        assert_eq!(def.reference(), Reference::WorkerCluster);
        assert_eq!(def.order_in_group(), 100);
        assert_eq!(def.default_value(), Some("dft"));
        assert_eq!(def.documentation(), "doc");
        assert_eq!(def.table_keys(), ["a"]);
        assert!(!def.required());
        assert!(def.editable());
        assert!(!def.internal());
    }

    #[test]
    fn optional_without_default_is_not_required() {
        let def = SettingDef::builder()
            .key("k")
            .unwrap()
            .optional()
            .readonly()
            .internal()
            .build()
            .unwrap();
        assert_eq!(def.default_value(), None);
        assert!(!def.required());
        assert!(!def.editable());
        assert!(def.internal());
    }

    #[test]
    fn duration_default_is_stored_as_iso_text() {
        let def = SettingDef::builder()
            .key("k")
            .unwrap()
            .optional_duration(Duration::from_secs(10 * 3_600))
            .build()
            .unwrap();
        assert_eq!(def.default_value(), Some("PT10H"));
        assert!(!def.required());
    }

    #[test]
    fn key_defaults_are_stored_as_canonical_text() {
        let object_key = ObjectKey::of("g", "n").unwrap();
        let def = SettingDef::builder()
            .key("k")
            .unwrap()
            .optional_object_key(&object_key)
            .build()
            .unwrap();
        let text = def.default_value().unwrap();
        assert_eq!(text.parse::<ObjectKey>().unwrap(), object_key);

        let topic_key = TopicKey::of("g", "t").unwrap();
        let def = SettingDef::builder()
            .key("k")
            .unwrap()
            .optional_topic_key(&topic_key)
            .build()
            .unwrap();
        assert_eq!(def.default_value().unwrap().parse::<TopicKey>().unwrap(), topic_key);

        let connector_key = ConnectorKey::of("g", "c").unwrap();
        let def = SettingDef::builder()
            .key("k")
            .unwrap()
            .optional_connector_key(&connector_key)
            .build()
            .unwrap();
        assert_eq!(
            def.default_value().unwrap().parse::<ConnectorKey>().unwrap(),
            connector_key
        );
    }

    #[test]
    fn deserialization_rejects_an_inconsistent_required_flag() {
        let def = SettingDef::builder()
            .key("k")
            .unwrap()
            .optional_string("dft")
            .build()
            .unwrap();
        let mut value = serde_json::to_value(&def).unwrap();
        value["required"] = serde_json::Value::Bool(true);
        assert!(serde_json::from_value::<SettingDef>(value).is_err());
    }

    #[test]
    fn deserialization_rejects_empty_builder_checked_fields() {
        let def = SettingDef::builder().key("k").unwrap().build().unwrap();
        for field in ["key", "display_name", "group", "documentation"] {
            let mut value = serde_json::to_value(&def).unwrap();
            value[field] = serde_json::Value::String(String::new());
            assert!(
                serde_json::from_value::<SettingDef>(value).is_err(),
                "empty {} slipped through",
                field
            );
        }
    }

    #[test]
    fn serde_round_trip_is_structural() {
        let def = SettingDef::builder()
            .key("tags.key")
            .unwrap()
            .value_type(Type::Tags)
            .build()
            .unwrap();
        let text = serde_json::to_string(&def).unwrap();
        let copy: SettingDef = serde_json::from_str(&text).unwrap();
        assert_eq!(copy, def);
    }
}
