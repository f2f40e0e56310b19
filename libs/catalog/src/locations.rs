//! Factory location tables.
//!
//! Legacy serials carry a 2-character location, modern serials a
//! 3-character one. The two tables are disjoint in format and are never
//! consulted for the other serial layout.

use serde::Serialize;

/// A production location code and its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Code as it appears at the start of a serial.
    pub code: &'static str,
    /// Human-readable factory description.
    pub name: &'static str,
}

/// Selects which location table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTable {
    /// 2-character codes used by 11-character serials.
    Legacy,
    /// 3-character codes used by 12-character serials.
    Modern,
}

impl LocationTable {
    /// Length of the codes stored in this table.
    #[must_use]
    pub const fn code_len(self) -> usize {
        match self {
            Self::Legacy => 2,
            Self::Modern => 3,
        }
    }
}

const fn loc(code: &'static str, name: &'static str) -> Location {
    Location { code, name }
}

pub(crate) static LEGACY_LOCATIONS: &[Location] = &[
    loc("CK", "Ireland (Cork)"),
    loc("CY", "Korea"),
    loc("FC", "USA (Fountain, Colorado)"),
    loc("G8", "USA"),
    loc("QP", "USA"),
    loc("XA", "USA (ElkGrove/Sacramento, California)"),
    loc("XB", "USA (ElkGrove/Sacramento, California)"),
    loc("PT", "Korea"),
    loc("QT", "Taiwan (Quanta Computer)"),
    loc("UV", "Taiwan"),
    loc("RN", "Mexico"),
    loc("RM", "Refurbished Model"),
    loc("SG", "Singapore"),
    loc("W8", "China (Shanghai)"),
    loc("YM", "China"),
    // Later additions
    loc("H0", "Unknown"),
    loc("C0", "China (Quanta Computer, Tech-Com)"),
    loc("C3", "China (Shenzhen, Foxconn)"),
    loc("C7", "China (Shanghai, Pegatron)"),
    loc("MB", "Malaysia"),
    loc("EE", "Taiwan"),
    loc("VM", "Czech Republic (Pardubice, Foxconn)"),
    loc("1C", "China"),
    loc("4H", "China"),
    loc("MQ", "China"),
    loc("WQ", "China"),
    loc("7J", "China (Hon Hai/Foxconn)"),
    loc("FK", "China (Zhengzhou, Foxconn)"),
    loc("F1", "China (Zhengzhou, Foxconn)"),
    loc("F2", "China (Zhengzhou, Foxconn)"),
    loc("F7", "China"),
    loc("DL", "China (Foxconn)"),
    loc("DM", "China (Foxconn)"),
    loc("73", "Unknown"),
];

pub(crate) static MODERN_LOCATIONS: &[Location] = &[
    loc("C02", "China (Quanta Computer)"),
    loc("C07", "China (Quanta Computer)"),
    loc("C17", "China"),
    loc("C1M", "China"),
    loc("C2V", "China"),
    loc("CK2", "Ireland (Cork)"),
    loc("D25", "Unknown"),
    loc("F5K", "USA (Flextronics)"),
    loc("W80", "Unknown"),
    loc("W88", "Unknown"),
    loc("W89", "Unknown"),
    loc("CMV", "Unknown"),
    loc("YM0", "China (Hon Hai/Foxconn)"),
    loc("DGK", "Unknown"),
    loc("FVF", "Unknown"),
];
