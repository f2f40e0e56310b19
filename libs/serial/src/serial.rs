//! Decoded serial records and their validity findings.

use chrono::NaiveDate;
use serde::Serialize;
use smbios_catalog::{LocationTable, ModelIndex};

// =============================================================================
// Constants
// =============================================================================

pub const WEEK_MIN: u32 = 1;
pub const WEEK_MAX: u32 = 53;

/// Range accepted for an explicit year in a generation request.
pub const YEAR_MIN: i32 = 2000;
pub const YEAR_MAX: i32 = 2030;

pub const LEGACY_YEAR_MIN: i32 = 2003;
pub const LEGACY_YEAR_MAX: i32 = 2012;
pub const MODERN_YEAR_MIN: i32 = 2010;
/// First year of the second modern epoch.
pub const MODERN_YEAR_MID: i32 = 2020;
pub const MODERN_YEAR_MAX: i32 = 2030;

pub const COPY_MIN: u32 = 1;
pub const COPY_MAX: u32 = 34;

pub const LINE_MIN: u32 = 0;
/// Largest line a single high digit can reach: `33 * 34 + 33`.
pub const LINE_REPR_MAX: u32 = 1155;
/// `68 * 33 + 33 * 34 + 33`
pub const LINE_MAX: u32 = 3399;

pub const LEGACY_MLB_LEN: usize = 13;
pub const MODERN_MLB_LEN: usize = 17;

/// Smallest raw high digit of the line field that can reach `line`.
///
/// Lines up to [`LINE_REPR_MAX`] are reachable from high digit 0. Past that,
/// every step of 68 pushes the minimum up by one.
#[must_use]
pub fn line_to_rmin(line: u32) -> u32 {
    if line > LINE_REPR_MAX {
        (line - LINE_REPR_MAX).div_ceil(68)
    } else {
        0
    }
}

// =============================================================================
// SerialFormat
// =============================================================================

/// Layout of a serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SerialFormat {
    /// 11 characters: 2 country, 1 year, 2 week, 3 line, 3 model.
    Legacy,
    /// 12 characters: 3 country, 1 year, 1 week, 3 line, 4 model.
    Modern,
}

impl SerialFormat {
    /// Classifies a serial by its length.
    #[must_use]
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            11 => Some(Self::Legacy),
            12 => Some(Self::Modern),
            _ => None,
        }
    }

    /// Picks the layout that matches a model code length.
    #[must_use]
    pub fn from_model_len(len: usize) -> Option<Self> {
        match len {
            3 => Some(Self::Legacy),
            4 => Some(Self::Modern),
            _ => None,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Legacy => 11,
            Self::Modern => 12,
        }
    }

    #[must_use]
    pub const fn country_len(self) -> usize {
        match self {
            Self::Legacy => 2,
            Self::Modern => 3,
        }
    }

    #[must_use]
    pub const fn week_len(self) -> usize {
        match self {
            Self::Legacy => 2,
            Self::Modern => 1,
        }
    }

    #[must_use]
    pub const fn model_len(self) -> usize {
        match self {
            Self::Legacy => 3,
            Self::Modern => 4,
        }
    }

    /// Length of the board serial derived from a serial of this layout.
    #[must_use]
    pub const fn mlb_len(self) -> usize {
        match self {
            Self::Legacy => LEGACY_MLB_LEN,
            Self::Modern => MODERN_MLB_LEN,
        }
    }

    /// Location table the country code is looked up in.
    #[must_use]
    pub const fn location_table(self) -> LocationTable {
        match self {
            Self::Legacy => LocationTable::Legacy,
            Self::Modern => LocationTable::Modern,
        }
    }

    /// Years a generated serial of this layout may carry.
    #[must_use]
    pub const fn year_range(self) -> (i32, i32) {
        match self {
            Self::Legacy => (LEGACY_YEAR_MIN, LEGACY_YEAR_MAX),
            Self::Modern => (MODERN_YEAR_MIN, MODERN_YEAR_MAX),
        }
    }
}

impl std::fmt::Display for SerialFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

// =============================================================================
// Serial
// =============================================================================

/// Presentational fields resolved while decoding. Never used for validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SerialDetails {
    /// Factory description of the country code.
    pub location: Option<&'static str>,
    /// SMBIOS product name of the matched model.
    pub product: Option<&'static str>,
    /// Marketing name of the model code.
    pub model_description: Option<&'static str>,
    pub week_start: Option<NaiveDate>,
    pub week_end: Option<NaiveDate>,
}

/// A serial number split into its fields.
///
/// The raw fields hold the symbols exactly as they appear in the string, so
/// `to_string()` always reproduces the decoded input. Decoded values are
/// `None` when the symbols could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Serial {
    pub format: SerialFormat,
    pub country: String,
    pub year: char,
    /// One symbol (modern) or two digits (legacy).
    pub week: String,
    pub line: String,
    pub model: String,

    pub decoded_year: Option<i32>,
    pub decoded_week: Option<u32>,
    pub decoded_line: Option<u32>,
    /// Zero-based copy index within the production line.
    pub decoded_copy: Option<u32>,

    pub model_index: Option<ModelIndex>,
    pub country_index: Option<usize>,

    pub details: SerialDetails,
}

impl Serial {
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        self.format == SerialFormat::Legacy
    }

    /// One-based copy index, as shown to users.
    #[must_use]
    pub fn copy(&self) -> Option<u32> {
        self.decoded_copy.map(|c| c + 1)
    }
}

impl std::fmt::Display for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.country, self.year, self.week, self.line, self.model
        )
    }
}

// =============================================================================
// Findings
// =============================================================================

/// Something noticed while decoding a well-sized serial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A symbol outside the Base34 alphabet.
    InvalidSymbol { position: usize, symbol: char },
    /// The model code is not in the catalog.
    UnknownModel { code: String },
    /// The country code is not in the location table.
    UnknownLocation { code: String },
    InvalidYearSymbol { symbol: char },
    InvalidWeekSymbol { symbol: char },
    /// The week decoded outside [1, 53] and was dropped.
    WeekOutOfRange { week: u32 },
    /// The matched model was not produced in the decoded year.
    YearNotProduced { year: i32, product: &'static str },
    InvalidLineSymbol { position: usize, symbol: char },
}

impl Finding {
    /// Returns true if the finding makes the serial invalid.
    ///
    /// Unknown model and location codes are informational. An out-of-range
    /// week only drops the decoded week.
    #[must_use]
    pub fn invalidates(&self) -> bool {
        !matches!(
            self,
            Finding::UnknownModel { .. }
                | Finding::UnknownLocation { .. }
                | Finding::WeekOutOfRange { .. }
        )
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::InvalidSymbol { position, symbol } => {
                write!(f, "invalid symbol '{symbol}' at position {position}")
            }
            Finding::UnknownModel { code } => write!(f, "unknown model code '{code}'"),
            Finding::UnknownLocation { code } => write!(f, "unknown location '{code}'"),
            Finding::InvalidYearSymbol { symbol } => write!(f, "invalid year symbol '{symbol}'"),
            Finding::InvalidWeekSymbol { symbol } => write!(f, "invalid week symbol '{symbol}'"),
            Finding::WeekOutOfRange { week } => write!(
                f,
                "decoded week {week} is out of valid range [{WEEK_MIN}, {WEEK_MAX}]"
            ),
            Finding::YearNotProduced { year, product } => {
                write!(f, "invalid year {year} for model {product}")
            }
            Finding::InvalidLineSymbol { position, symbol } => {
                write!(f, "invalid line symbol '{symbol}' at position {position}")
            }
        }
    }
}

/// A decoded serial together with everything that looked wrong about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub serial: Serial,
    pub findings: Vec<Finding>,
}

impl Decoded {
    /// Returns true if no finding invalidates the serial.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(Finding::invalidates)
    }

    /// Findings that make the serial invalid.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.invalidates())
    }

    #[must_use]
    pub fn into_serial(self) -> Serial {
        self.serial
    }
}
