//! Setting definitions and validation.
//!
//! A component author builds [`SettingDef`]s via the builder, the
//! [`merge`] layer folds them together with the injected metadata
//! definitions into the schema exposed to the outside world, and at runtime
//! each submitted value is validated by its definition's [`Checker`]
//! before being accepted.

mod checker;
mod def;
mod duration;
mod keys;
mod prop_groups;
pub mod merge;

pub use checker::Checker;
pub use def::{Reference, SettingDef, SettingDefBuilder, Type};
pub use duration::{format_duration, parse_duration};
pub use keys::{ConnectorKey, ObjectKey, TopicKey};
pub use merge::{ClassType, WithDefinitions};
pub use prop_groups::PropGroups;
