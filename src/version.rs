//! Build-provenance strings.
//!
//! Read-only metadata source consumed by the definition merge layer
//! ([`crate::setting::merge`]): the injected author/version/revision
//! definitions default to these values. Revision, user, and date come from
//! the build environment; a plain `cargo build` without the CI environment
//! falls back to `"unknown"`.

/// Package version, from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source revision the build was produced from.
pub const REVISION: &str = match option_env!("PENSTOCK_REVISION") {
    Some(revision) => revision,
    None => "unknown",
};

/// User (or CI identity) that produced the build.
pub const USER: &str = match option_env!("PENSTOCK_BUILD_USER") {
    Some(user) => user,
    None => "unknown",
};

/// Wall-clock date of the build.
pub const DATE: &str = match option_env!("PENSTOCK_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};
