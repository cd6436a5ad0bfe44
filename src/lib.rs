//! penstock-common - typed setting definitions and tabular record values
//! for the Penstock pipeline platform.
//!
//! This crate is the shared value layer consumed by connectors and streams:
//! `setting` describes what a legal configuration value looks like and
//! validates candidates against those descriptions; `data` carries accepted
//! structured values as uniform tabular records; `codec` provides the
//! byte-level round-trip every one of these values must survive.

pub mod codec;
pub mod data;
pub mod error;
pub mod setting;
pub mod version;
