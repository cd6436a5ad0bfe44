//! Definition merge invariants.
//!
//! The merge injects the four protected metadata keys with build-metadata
//! defaults, and a caller-supplied definition for a protected key is never
//! replaced or duplicated.

use std::collections::HashMap;

use penstock_common::setting::merge::{
    self, author_definition, revision_definition, version_definition, AUTHOR_KEY, KIND_KEY,
    META_GROUP, REVISION_KEY, VERSION_KEY,
};
use penstock_common::setting::{ClassType, SettingDef, WithDefinitions};
use penstock_common::version;
use rand::distributions::Alphanumeric;
use rand::Rng;

// =============================================================================
// Helper Functions
// =============================================================================

fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// An owner with no classification and no custom definitions.
struct Anonymous;
impl WithDefinitions for Anonymous {}

fn merge_with(caller: HashMap<String, SettingDef>) -> HashMap<String, SettingDef> {
    merge::merge(&Anonymous, &caller, &HashMap::new())
}

// =============================================================================
// Protected Key Override Tests
// =============================================================================

/// A caller-supplied author is never replaced.
#[test]
fn test_author_is_not_replaced() {
    let author = random_string(10);
    let merged = merge_with(HashMap::from([(
        AUTHOR_KEY.to_string(),
        author_definition(&author),
    )]));
    assert_eq!(merged[AUTHOR_KEY].default_value(), Some(author.as_str()));
}

/// A caller-supplied version is never replaced.
#[test]
fn test_version_is_not_replaced() {
    let ver = random_string(10);
    let merged = merge_with(HashMap::from([(
        VERSION_KEY.to_string(),
        version_definition(&ver),
    )]));
    assert_eq!(merged[VERSION_KEY].default_value(), Some(ver.as_str()));
}

/// A caller-supplied revision is never replaced.
#[test]
fn test_revision_is_not_replaced() {
    let rev = random_string(10);
    let merged = merge_with(HashMap::from([(
        REVISION_KEY.to_string(),
        revision_definition(&rev),
    )]));
    assert_eq!(merged[REVISION_KEY].default_value(), Some(rev.as_str()));
}

// =============================================================================
// Injected Default Tests
// =============================================================================

/// Without caller entries the protected keys carry build-metadata defaults.
#[test]
fn test_injected_defaults() {
    let merged = merge_with(HashMap::new());
    assert_eq!(merged[AUTHOR_KEY].default_value(), Some(version::USER));
    assert_eq!(merged[VERSION_KEY].default_value(), Some(version::VERSION));
    assert_eq!(merged[REVISION_KEY].default_value(), Some(version::REVISION));
}

/// An unclassifiable owner's kind defaults to unknown.
#[test]
fn test_kind_defaults_to_unknown() {
    let merged = merge_with(HashMap::new());
    assert_eq!(
        merged[KIND_KEY].default_value(),
        Some(ClassType::Unknown.key())
    );
}

/// A classified owner's kind reflects the classification.
#[test]
fn test_kind_follows_the_owner() {
    struct Sink;
    impl WithDefinitions for Sink {
        fn class_type(&self) -> ClassType {
            ClassType::Sink
        }
    }
    let merged = merge::merge(&Sink, &HashMap::new(), &HashMap::new());
    assert_eq!(merged[KIND_KEY].default_value(), Some("sink"));
}

// =============================================================================
// Map Shape Tests
// =============================================================================

/// The meta group is distinct from the common definition group.
#[test]
fn test_meta_group_is_distinct() {
    assert_ne!(META_GROUP, SettingDef::COMMON_GROUP);
}

/// Keys outside the protected set pass through from both maps, and the
/// result never duplicates a key.
#[test]
fn test_unprotected_keys_pass_through() {
    let mine = SettingDef::builder()
        .key("mine")
        .unwrap()
        .build()
        .unwrap();
    let theirs = SettingDef::builder()
        .key("theirs")
        .unwrap()
        .build()
        .unwrap();
    let caller = HashMap::from([("mine".to_string(), mine.clone())]);
    let extra = HashMap::from([("theirs".to_string(), theirs.clone())]);
    let merged = merge::merge(&Anonymous, &caller, &extra);
    assert_eq!(merged["mine"], mine);
    assert_eq!(merged["theirs"], theirs);
    // Four protected keys plus the two pass-throughs.
    assert_eq!(merged.len(), 6);
}

/// Merging twice with the same inputs yields the same map.
#[test]
fn test_merge_is_pure() {
    let caller = HashMap::from([(
        AUTHOR_KEY.to_string(),
        author_definition("someone"),
    )]);
    let first = merge::merge(&Anonymous, &caller, &HashMap::new());
    let second = merge::merge(&Anonymous, &caller, &HashMap::new());
    assert_eq!(first, second);
}
