#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # disadv-compiler
//!
//! EDIFACT DISADV (Dispatch Advice) D.96A message compiler.
//!
//! Compiles a [`disadv_model::ShipmentRecord`] into well-formed DISADV
//! message text in a single pass: structural validation, deterministic
//! segment ordering, aggregation of the total shipped weight, and exact
//! segment serialization. Malformed parties and items are skipped with a
//! warning and reported in a structured [`CompilationReport`]; only a
//! failed top-level validation aborts compilation.
//!
//! ## Example Usage
//!
//! ```rust
//! use disadv_model::{Item, Party, ShipmentRecord};
//!
//! let record = ShipmentRecord {
//!     message_ref: "654321".to_string(),
//!     shipment_number: "SHIP001".to_string(),
//!     parties: vec![Party::new("BY", "123456789")],
//!     items: vec![Item {
//!         product_code: Some("ABC123".to_string()),
//!         description: Some("Product A".to_string()),
//!         quantity: Some("10".to_string()),
//!         ..Item::default()
//!     }],
//!     transport: None,
//! };
//!
//! let compiled = disadv_compiler::compile(&record).unwrap();
//! assert!(compiled.text.starts_with("UNA:+.? '"));
//! assert!(compiled.text.ends_with("UNT+8+654321'"));
//! ```

/// Single-pass segment compiler and compiled message type.
pub mod compiler;
/// Injected observability hooks for validation and compilation signals.
pub mod observer;
/// Structured per-entry compilation report.
pub mod report;
/// Individual DISADV segment builders and code literals.
pub mod segments;
/// EDIFACT separators and segment assembly.
pub mod syntax;
/// Structural completeness validation of the input record.
pub mod validate;

pub use compiler::{CompiledMessage, DisadvCompiler};
pub use observer::{CompileObserver, NullObserver, TracingObserver};
pub use report::{CompilationReport, EntryOutcome, EntryReport};
pub use syntax::Separators;
pub use validate::{ValidationError, validate, validate_items};

use thiserror::Error;

/// Errors that can occur when compiling a DISADV message
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Crate-local result type for compilation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience function to compile a record with default settings.
///
/// Uses the current date for the DTM segment and routes observer signals
/// to `tracing`.
///
/// # Errors
///
/// Returns an error when the record fails structural validation; no
/// partial output is produced in that case.
pub fn compile(record: &disadv_model::ShipmentRecord) -> Result<CompiledMessage> {
    DisadvCompiler::new().compile(record, &TracingObserver)
}
