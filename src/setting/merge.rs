//! Definition merging: overlay caller definitions onto injected metadata.
//!
//! Every component schema carries four protected metadata keys — author,
//! version, revision, kind — injected with defaults from the build
//! metadata ([`crate::version`]) and the owner's [`ClassType`]. A caller
//! that supplies its own definition for a protected key always wins; the
//! injected default is discarded, never duplicated. The merge has no
//! failure path: it degrades to defaults rather than failing.

use std::collections::HashMap;

use super::def::SettingDef;
use crate::version;

/// Group holding the injected metadata definitions.
///
/// Distinct from [`SettingDef::COMMON_GROUP`] so metadata never mixes with
/// component settings in a rendered schema.
pub const META_GROUP: &str = "meta";

/// Protected key: what kind of component this is.
pub const KIND_KEY: &str = "kind";
/// Protected key: component version.
pub const VERSION_KEY: &str = "version";
/// Protected key: source revision of the build.
pub const REVISION_KEY: &str = "revision";
/// Protected key: who authored the build.
pub const AUTHOR_KEY: &str = "author";

const KIND_ORDER: i32 = 0;
const VERSION_ORDER: i32 = 1;
const REVISION_ORDER: i32 = 2;
const AUTHOR_ORDER: i32 = 3;

/// Classification of a schema-owning component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassType {
    Unknown,
    Source,
    Sink,
    Stream,
    Topic,
}

impl ClassType {
    /// The classification's wire name.
    pub fn key(&self) -> &'static str {
        match self {
            ClassType::Unknown => "unknown",
            ClassType::Source => "source",
            ClassType::Sink => "sink",
            ClassType::Stream => "stream",
            ClassType::Topic => "topic",
        }
    }
}

/// A component that exposes setting definitions to the outside world.
///
/// Implementors override [`custom_definitions`](Self::custom_definitions)
/// with their own settings and, when classifiable,
/// [`class_type`](Self::class_type); the provided
/// [`setting_definitions`](Self::setting_definitions) folds in the
/// protected metadata definitions.
pub trait WithDefinitions {
    /// The component's classification; unclassifiable owners stay
    /// [`ClassType::Unknown`].
    fn class_type(&self) -> ClassType {
        ClassType::Unknown
    }

    /// The component's own definitions, keyed by setting key.
    fn custom_definitions(&self) -> HashMap<String, SettingDef> {
        HashMap::new()
    }

    /// The final schema: custom definitions merged with injected metadata.
    fn setting_definitions(&self) -> HashMap<String, SettingDef> {
        merge(self, &self.custom_definitions(), &HashMap::new())
    }
}

/// The injected author definition with the given default.
pub fn author_definition(default: &str) -> SettingDef {
    SettingDef::meta(AUTHOR_KEY, default, META_GROUP, AUTHOR_ORDER)
}

/// The injected version definition with the given default.
pub fn version_definition(default: &str) -> SettingDef {
    SettingDef::meta(VERSION_KEY, default, META_GROUP, VERSION_ORDER)
}

/// The injected revision definition with the given default.
pub fn revision_definition(default: &str) -> SettingDef {
    SettingDef::meta(REVISION_KEY, default, META_GROUP, REVISION_ORDER)
}

/// The injected kind definition with the given default.
pub fn kind_definition(default: &str) -> SettingDef {
    SettingDef::meta(KIND_KEY, default, META_GROUP, KIND_ORDER)
}

/// Merges caller definitions with the injected metadata definitions.
///
/// Starts from the four protected defaults, overlays `extra`, then
/// overlays `caller` last, so the caller always wins on the protected keys
/// (and on any key it shares with `extra`). Keys outside the protected set
/// pass through unmodified.
pub fn merge<T: WithDefinitions + ?Sized>(
    owner: &T,
    caller: &HashMap<String, SettingDef>,
    extra: &HashMap<String, SettingDef>,
) -> HashMap<String, SettingDef> {
    let mut merged = HashMap::with_capacity(4 + caller.len() + extra.len());
    merged.insert(AUTHOR_KEY.to_string(), author_definition(version::USER));
    merged.insert(VERSION_KEY.to_string(), version_definition(version::VERSION));
    merged.insert(
        REVISION_KEY.to_string(),
        revision_definition(version::REVISION),
    );
    merged.insert(
        KIND_KEY.to_string(),
        kind_definition(owner.class_type().key()),
    );
    merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged.extend(caller.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;
    impl WithDefinitions for Plain {}

    struct Source;
    impl WithDefinitions for Source {
        fn class_type(&self) -> ClassType {
            ClassType::Source
        }
    }

    #[test]
    fn meta_group_is_not_the_common_group() {
        assert_ne!(META_GROUP, SettingDef::COMMON_GROUP);
    }

    #[test]
    fn protected_defaults_come_from_build_metadata() {
        let merged = merge(&Plain, &HashMap::new(), &HashMap::new());
        assert_eq!(merged[AUTHOR_KEY].default_value(), Some(version::USER));
        assert_eq!(merged[VERSION_KEY].default_value(), Some(version::VERSION));
        assert_eq!(merged[REVISION_KEY].default_value(), Some(version::REVISION));
        assert_eq!(merged[KIND_KEY].default_value(), Some("unknown"));
    }

    #[test]
    fn classified_owner_sets_the_kind() {
        let merged = merge(&Source, &HashMap::new(), &HashMap::new());
        assert_eq!(merged[KIND_KEY].default_value(), Some("source"));
    }

    #[test]
    fn caller_wins_on_protected_keys() {
        let caller = HashMap::from([(
            AUTHOR_KEY.to_string(),
            author_definition("someone else"),
        )]);
        let merged = merge(&Plain, &caller, &HashMap::new());
        assert_eq!(merged[AUTHOR_KEY].default_value(), Some("someone else"));
        // The other protected keys still carry their defaults.
        assert_eq!(merged[VERSION_KEY].default_value(), Some(version::VERSION));
    }

    #[test]
    fn caller_wins_over_extra() {
        let caller = HashMap::from([(KIND_KEY.to_string(), kind_definition("stream"))]);
        let extra = HashMap::from([(KIND_KEY.to_string(), kind_definition("topic"))]);
        let merged = merge(&Plain, &caller, &extra);
        assert_eq!(merged[KIND_KEY].default_value(), Some("stream"));
    }

    #[test]
    fn unprotected_keys_pass_through() {
        let def = SettingDef::builder().key("custom").unwrap().build().unwrap();
        let caller = HashMap::from([("custom".to_string(), def.clone())]);
        let merged = merge(&Plain, &caller, &HashMap::new());
        assert_eq!(merged["custom"], def);
        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn setting_definitions_uses_custom_definitions() {
        struct Owner;
        impl WithDefinitions for Owner {
            fn custom_definitions(&self) -> HashMap<String, SettingDef> {
                let def = SettingDef::builder().key("mine").unwrap().build().unwrap();
                HashMap::from([("mine".to_string(), def)])
            }
        }
        let merged = Owner.setting_definitions();
        assert!(merged.contains_key("mine"));
        assert!(merged.contains_key(AUTHOR_KEY));
    }
}
