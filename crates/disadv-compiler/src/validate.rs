//! Structural completeness validation of the shipment record
//!
//! Validation is a pure predicate over the whole record, evaluated once
//! per compilation attempt. It reports the first missing required field
//! in a fixed check order and retains no partial state.

use disadv_model::{Item, ShipmentRecord};
use thiserror::Error;

use crate::observer::CompileObserver;

/// Errors raised when a record is structurally incomplete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A top-level required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The item sequence is empty
    #[error("DISADV must contain at least one item.")]
    NoItems,
}

/// Validate a shipment record before any segment is emitted.
///
/// Check order is fixed: the presence checks for `messageRef`,
/// `shipmentNumber`, `parties`, and `items` run first, then the dedicated
/// item-sequence length check. An empty item list therefore reports
/// `Missing required field: items`, the same way the generic presence
/// check fires ahead of the length check upstream. On success an
/// informational signal is emitted on the observer; this is an
/// observability hook only, not part of the data contract.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered in check order.
pub fn validate(
    record: &ShipmentRecord,
    observer: &dyn CompileObserver,
) -> std::result::Result<(), ValidationError> {
    if record.message_ref.is_empty() {
        return Err(ValidationError::MissingField {
            field: "messageRef",
        });
    }
    if record.shipment_number.is_empty() {
        return Err(ValidationError::MissingField {
            field: "shipmentNumber",
        });
    }
    if record.parties.is_empty() {
        return Err(ValidationError::MissingField { field: "parties" });
    }
    if record.items.is_empty() {
        return Err(ValidationError::MissingField { field: "items" });
    }
    validate_items(&record.items)?;

    observer.info("Data validation passed.");
    Ok(())
}

/// Check that an item sequence contains at least one element.
///
/// Standalone entry point for callers that already hold a bare item
/// list; [`validate`] runs it after the presence checks, where the
/// presence check on `items` has already ruled the empty case out.
///
/// # Errors
///
/// Returns [`ValidationError::NoItems`] when the sequence is empty.
pub fn validate_items(items: &[Item]) -> std::result::Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    Ok(())
}
