#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # disadv-model
//!
//! Input data model for DISADV (Dispatch Advice) compilation.
//!
//! This crate defines the shipment record shape consumed by the message
//! compiler. The record is read-only input: compilation never mutates it,
//! and every field a sub-record might legitimately omit is optional so
//! that malformed entries can be represented, reported, and skipped
//! instead of failing deserialization.

/// Shipment record, party, item, and transport types.
pub mod record;

/// Primary input record and its sub-records.
pub use record::{Item, Party, ShipmentRecord, TransportInfo};

/// Treat an empty string the same as an absent field.
///
/// The external record format does not distinguish between a missing key
/// and a key bound to an empty string; presence checks use this helper so
/// both read as "not provided".
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
