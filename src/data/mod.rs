//! Tabular record values.
//!
//! A [`Row`] is an ordered sequence of uniquely-named [`Cell`]s plus an
//! ordered sequence of string tags. Cell payloads are [`Value`]s, a closed
//! set of primitive kinds plus a recursive row variant, so rows can nest.
//! All three types are immutable once constructed and safe to share across
//! threads without coordination.

mod cell;
mod row;
mod value;

pub use cell::Cell;
pub use row::Row;
pub use value::Value;
