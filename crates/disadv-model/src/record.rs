//! Shipment record types for dispatch advice compilation

use serde::{Deserialize, Serialize};

/// A structured shipment record, the input to DISADV compilation.
///
/// Top-level fields default to empty when absent so that completeness is
/// reported by the validator (with a field name) rather than by the
/// deserializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentRecord {
    /// Message reference, used in both the UNH header and UNT trailer
    pub message_ref: String,

    /// Dispatch advice reference carried in the BGM segment
    pub shipment_number: String,

    /// Involved parties, in emission order
    pub parties: Vec<Party>,

    /// Line items, in emission order
    pub items: Vec<Item>,

    /// Optional transport details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportInfo>,
}

/// A party identified by role qualifier and identifier.
///
/// Both fields are required for the party to be emitted as a NAD segment;
/// a party missing either is skipped with a warning, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    /// Role qualifier code, e.g. "BY" buyer, "SU" supplier, "CA" carrier
    pub qualifier: Option<String>,

    /// Party identifier
    pub id: Option<String>,
}

/// A dispatched line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Product code, emitted in the LIN segment
    pub product_code: Option<String>,

    /// Free-text description, emitted in the IMD segment
    pub description: Option<String>,

    /// Dispatched quantity as a numeric string
    pub quantity: Option<String>,

    /// Unit weight in kilograms as a numeric string
    pub weight: Option<String>,

    /// Vehicle identification number, emitted as a GIN segment when present
    pub vin: Option<String>,
}

/// Transport details, emitted as a TDT segment only when both fields are
/// present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportInfo {
    /// Transport mode code
    pub mode: Option<String>,

    /// Carrier identifier
    pub carrier: Option<String>,
}

impl ShipmentRecord {
    /// Create an empty record (useful as a builder starting point in tests)
    pub fn new() -> Self {
        Self::default()
    }
}

impl Party {
    /// Create a party with both fields set
    pub fn new(qualifier: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            id: Some(id.into()),
        }
    }
}

impl TransportInfo {
    /// Create transport info with both fields set
    pub fn new(mode: impl Into<String>, carrier: impl Into<String>) -> Self {
        Self {
            mode: Some(mode.into()),
            carrier: Some(carrier.into()),
        }
    }
}
