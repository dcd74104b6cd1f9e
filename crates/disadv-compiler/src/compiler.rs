//! Single-pass DISADV segment compiler
//!
//! Walks a validated shipment record and produces the ordered segment
//! sequence, the running weight aggregate, and the final joined message
//! text. The input record is never mutated; each call is independent.

use chrono::{Local, NaiveDate};
use disadv_model::{ShipmentRecord, present};
use rust_decimal::Decimal;

use crate::observer::CompileObserver;
use crate::report::{CompilationReport, EntryReport};
use crate::syntax::Separators;
use crate::{Result, segments, validate};

/// A compiled DISADV message with its derived aggregates and report
#[derive(Debug, Clone)]
pub struct CompiledMessage {
    /// Final message text, UNA through UNT, newline-joined
    pub text: String,
    /// Segments counted by the UNT trailer (everything after UNA,
    /// excluding UNT itself)
    pub segment_count: usize,
    /// Total shipped weight over items that declared one, in kilograms
    pub total_weight: Decimal,
    /// Per-entry kept/skipped outcomes and aggregation warnings
    pub report: CompilationReport,
}

/// Compiler for EDIFACT DISADV D.96A messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DisadvCompiler;

impl DisadvCompiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self
    }

    /// Compile a record, dating the message with the current local date.
    ///
    /// # Errors
    ///
    /// Returns an error when the record fails structural validation; no
    /// segments are emitted in that case.
    pub fn compile(
        &self,
        record: &ShipmentRecord,
        observer: &dyn CompileObserver,
    ) -> Result<CompiledMessage> {
        self.compile_on(record, Local::now().date_naive(), observer)
    }

    /// Compile a record with an explicit document date.
    ///
    /// Apart from the DTM segment the output is fully determined by the
    /// record, so compiling the same input twice yields identical text.
    ///
    /// # Errors
    ///
    /// Returns an error when the record fails structural validation.
    pub fn compile_on(
        &self,
        record: &ShipmentRecord,
        date: NaiveDate,
        observer: &dyn CompileObserver,
    ) -> Result<CompiledMessage> {
        if let Err(err) = validate::validate(record, observer) {
            observer.error(&err.to_string());
            return Err(err.into());
        }

        observer.info("Generating DISADV message...");

        let mut report = CompilationReport::default();
        let mut lines = vec![
            Separators::default().service_string_advice(),
            segments::unh(&record.message_ref),
            segments::bgm(&record.shipment_number),
            segments::dtm(date),
        ];

        for (index, party) in record.parties.iter().enumerate() {
            match (present(&party.qualifier), present(&party.id)) {
                (Some(qualifier), Some(id)) => {
                    lines.push(segments::nad(qualifier, id));
                    report.parties.push(EntryReport::kept(index));
                }
                (qualifier, id) => {
                    let mut missing = Vec::new();
                    if qualifier.is_none() {
                        missing.push("qualifier");
                    }
                    if id.is_none() {
                        missing.push("id");
                    }
                    observer.warn(&format!("Skipping invalid NAD entry: {party:?}"));
                    report.parties.push(EntryReport::skipped(index, missing));
                }
            }
        }

        if let Some(transport) = &record.transport {
            if let (Some(mode), Some(carrier)) =
                (present(&transport.mode), present(&transport.carrier))
            {
                lines.push(segments::tdt(carrier, mode));
            }
        }

        let mut total_weight = Decimal::ZERO;
        for (index, item) in record.items.iter().enumerate() {
            // Line numbering follows the input position: a skipped item
            // still consumes its number, leaving a gap in the output.
            let line_number = index + 1;

            let (Some(product_code), Some(description), Some(quantity)) = (
                present(&item.product_code),
                present(&item.description),
                present(&item.quantity),
            ) else {
                let mut missing = Vec::new();
                if present(&item.product_code).is_none() {
                    missing.push("productCode");
                }
                if present(&item.description).is_none() {
                    missing.push("description");
                }
                if present(&item.quantity).is_none() {
                    missing.push("quantity");
                }
                observer.warn(&format!("Skipping item due to missing fields: {item:?}"));
                report.items.push(EntryReport::skipped(index, missing));
                continue;
            };

            lines.push(segments::lin(line_number, product_code));
            lines.push(segments::imd(description));
            lines.push(segments::qty(quantity));

            if let Some(weight) = present(&item.weight) {
                lines.push(segments::mea(weight));
                match (weight.parse::<Decimal>(), quantity.parse::<i64>()) {
                    (Ok(unit_weight), Ok(count)) => {
                        total_weight += unit_weight * Decimal::from(count);
                    }
                    _ => {
                        let warning = format!(
                            "Item {line_number}: weight '{weight}' x quantity '{quantity}' \
                             could not be aggregated"
                        );
                        observer.warn(&warning);
                        report.warnings.push(warning);
                    }
                }
            }

            if let Some(vin) = present(&item.vin) {
                lines.push(segments::gin(vin));
            }

            report.items.push(EntryReport::kept(index));
        }

        let total_weight = total_weight.round_dp(2);
        lines.push(segments::mea(&format!("{total_weight:.2}")));

        // UNA is a service advice, not a counted segment
        let segment_count = lines.len() - 1;
        lines.push(segments::unt(segment_count, &record.message_ref));

        observer.info("DISADV message generated.");

        Ok(CompiledMessage {
            text: lines.join("\n"),
            segment_count,
            total_weight,
            report,
        })
    }
}
