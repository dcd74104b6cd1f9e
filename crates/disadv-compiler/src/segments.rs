//! DISADV segment builders
//!
//! One function per segment of the DISADV D.96A subset, each producing a
//! single terminated line. Code literals are fixed by the subset and kept
//! here as constants.

use chrono::NaiveDate;

use crate::syntax::SegmentBuilder;

/// Message type identifier in the UNH header
pub const MESSAGE_TYPE: &str = "DISADV";
/// Message version number
pub const MESSAGE_VERSION: &str = "D";
/// Message release number
pub const MESSAGE_RELEASE: &str = "96A";
/// Controlling agency
pub const CONTROLLING_AGENCY: &str = "UN";

/// BGM document name code for a dispatch advice
pub const DOCUMENT_CODE_DISPATCH_ADVICE: &str = "351";
/// BGM message function: original
pub const MESSAGE_FUNCTION_ORIGINAL: &str = "9";
/// DTM qualifier for the document/message date
pub const DTM_DOCUMENT_DATE: &str = "137";
/// DTM format qualifier for CCYYMMDD
pub const DTM_FORMAT_CCYYMMDD: &str = "102";
/// NAD code list responsible agency (EAN)
pub const NAD_AGENCY_EAN: &str = "91";
/// TDT transport stage qualifier: main carriage
pub const TDT_MAIN_CARRIAGE: &str = "20";
/// LIN item number type: EAN
pub const LIN_ITEM_TYPE_EAN: &str = "EN";
/// QTY qualifier for dispatched quantity
pub const QTY_DISPATCHED: &str = "12";
/// QTY/MEA unit: each
pub const UNIT_EACH: &str = "EA";
/// MEA measurement purpose: weight
pub const MEA_WEIGHT: &str = "WT";
/// MEA measurement attribute
pub const MEA_ATTRIBUTE: &str = "AAA";
/// MEA unit: kilograms
pub const UNIT_KILOGRAM: &str = "KG";
/// GIN identity number qualifier for a vehicle identification number
pub const GIN_VIN: &str = "BJ";

/// `UNH+<message_ref>+DISADV:D:96A:UN'`
pub fn unh(message_ref: &str) -> String {
    SegmentBuilder::new("UNH")
        .element(message_ref)
        .composite([
            MESSAGE_TYPE,
            MESSAGE_VERSION,
            MESSAGE_RELEASE,
            CONTROLLING_AGENCY,
        ])
        .finish()
}

/// `BGM+351+<shipment_number>+9'`
pub fn bgm(shipment_number: &str) -> String {
    SegmentBuilder::new("BGM")
        .element(DOCUMENT_CODE_DISPATCH_ADVICE)
        .element(shipment_number)
        .element(MESSAGE_FUNCTION_ORIGINAL)
        .finish()
}

/// `DTM+137:<CCYYMMDD>:102'`
pub fn dtm(date: NaiveDate) -> String {
    let formatted = date.format("%Y%m%d").to_string();
    SegmentBuilder::new("DTM")
        .composite([DTM_DOCUMENT_DATE, formatted.as_str(), DTM_FORMAT_CCYYMMDD])
        .finish()
}

/// `NAD+<qualifier>+<id>::91'`
pub fn nad(qualifier: &str, id: &str) -> String {
    SegmentBuilder::new("NAD")
        .element(qualifier)
        .composite([id, "", NAD_AGENCY_EAN])
        .finish()
}

/// `TDT+20+<carrier>+<mode>'`
pub fn tdt(carrier: &str, mode: &str) -> String {
    SegmentBuilder::new("TDT")
        .element(TDT_MAIN_CARRIAGE)
        .element(carrier)
        .element(mode)
        .finish()
}

/// `LIN+<line_number>++<product_code>:EN'`
pub fn lin(line_number: usize, product_code: &str) -> String {
    SegmentBuilder::new("LIN")
        .element(&line_number.to_string())
        .element("")
        .composite([product_code, LIN_ITEM_TYPE_EAN])
        .finish()
}

/// `IMD+F++:::<description>'`
pub fn imd(description: &str) -> String {
    SegmentBuilder::new("IMD")
        .element("F")
        .element("")
        .composite(["", "", "", description])
        .finish()
}

/// `QTY+12:<quantity>:EA'`
pub fn qty(quantity: &str) -> String {
    SegmentBuilder::new("QTY")
        .composite([QTY_DISPATCHED, quantity, UNIT_EACH])
        .finish()
}

/// `MEA+WT+AAA:<weight>:KG'`
///
/// Used both per item (weight passed through verbatim) and for the
/// trailing aggregate (weight pre-formatted to two decimal places).
pub fn mea(weight: &str) -> String {
    SegmentBuilder::new("MEA")
        .element(MEA_WEIGHT)
        .composite([MEA_ATTRIBUTE, weight, UNIT_KILOGRAM])
        .finish()
}

/// `GIN+BJ+<vin>'`
pub fn gin(vin: &str) -> String {
    SegmentBuilder::new("GIN")
        .element(GIN_VIN)
        .element(vin)
        .finish()
}

/// `UNT+<segment_count>+<message_ref>'`
pub fn unt(segment_count: usize, message_ref: &str) -> String {
    SegmentBuilder::new("UNT")
        .element(&segment_count.to_string())
        .element(message_ref)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unh() {
        assert_eq!(unh("654321"), "UNH+654321+DISADV:D:96A:UN'");
    }

    #[test]
    fn test_bgm() {
        assert_eq!(bgm("SHIP001"), "BGM+351+SHIP001+9'");
    }

    #[test]
    fn test_dtm() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(dtm(date), "DTM+137:20240315:102'");
    }

    #[test]
    fn test_nad() {
        assert_eq!(nad("BY", "123456789"), "NAD+BY+123456789::91'");
    }

    #[test]
    fn test_tdt() {
        assert_eq!(tdt("DHL", "30"), "TDT+20+DHL+30'");
    }

    #[test]
    fn test_lin() {
        assert_eq!(lin(1, "ABC123"), "LIN+1++ABC123:EN'");
    }

    #[test]
    fn test_imd() {
        assert_eq!(imd("Product A"), "IMD+F++:::Product A'");
    }

    #[test]
    fn test_qty() {
        assert_eq!(qty("10"), "QTY+12:10:EA'");
    }

    #[test]
    fn test_mea_passthrough() {
        // Per-item weight is emitted exactly as provided
        assert_eq!(mea("2.5"), "MEA+WT+AAA:2.5:KG'");
    }

    #[test]
    fn test_gin() {
        assert_eq!(gin("1HGCM82633A123456"), "GIN+BJ+1HGCM82633A123456'");
    }

    #[test]
    fn test_unt() {
        assert_eq!(unt(18, "654321"), "UNT+18+654321'");
    }
}
