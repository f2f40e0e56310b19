//! Error types for serial decoding, generation, and board serials.

use smbios_catalog::ModelIndex;
use thiserror::Error;

/// Errors that reject a serial or a generation request outright.
///
/// Malformed fields inside a well-sized serial are not errors; they are
/// reported as [`Finding`](crate::Finding)s on the decoded record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerialError {
    /// The string is neither 11 nor 12 characters long.
    #[error("invalid serial length {len}, must be 12 or 11")]
    InvalidLength { len: usize },

    /// The string has the length of a board serial.
    #[error("invalid serial, you probably inserted a MLB")]
    LooksLikeMlb,

    /// A generation request named no model.
    #[error("unable to determine Mac model: set a model index or a model code")]
    MissingModel,

    /// A generation request named both a model index and a model code.
    #[error("model index and model code are mutually exclusive")]
    ConflictingModel,

    /// The model index is past the end of the catalog.
    #[error("model index {index} is out of range")]
    UnknownModelIndex { index: ModelIndex },

    /// The model code has the wrong length or contains invalid symbols.
    #[error("model code '{code}' must be 3 or 4 symbols of 0-9, A-Z without I and O")]
    InvalidModelCode { code: String },

    /// The country code has the wrong length or contains invalid symbols.
    #[error("country '{country}' must be 2 or 3 symbols of 0-9, A-Z without I and O")]
    InvalidCountry { country: String },

    /// Country and model code belong to different serial layouts.
    #[error("country '{country}' does not fit model code '{model}'")]
    FormatMismatch { country: String, model: String },

    /// No location is available for the serial layout.
    #[error("no location code available for this serial layout")]
    MissingLocation,

    /// The year cannot be encoded.
    #[error("year {year} is out of valid range [{min}, {max}]")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// The year symbol would be read back in the other decade for this model.
    #[error("year {year} of model code '{model}' would decode as {read_as}")]
    AmbiguousYear {
        year: i32,
        read_as: i32,
        model: String,
    },

    /// The model was never produced in the requested year.
    #[error("year {year} is not a production year of {product}")]
    YearNotProduced { year: i32, product: String },

    /// The week is outside [1, 53].
    #[error("week {week} is out of valid range [1, 53]")]
    WeekOutOfRange { week: u32 },

    /// The production line is outside [0, 3399].
    #[error("line {line} is out of valid range [0, 3399]")]
    LineOutOfRange { line: u32 },

    /// The copy index is outside [1, 34].
    #[error("copy {copy} is out of valid range [1, 34]")]
    CopyOutOfRange { copy: u32 },

    /// The copy index cannot produce the requested line.
    #[error("copy {copy} cannot represent line {line}")]
    CopyNotRepresentable { copy: u32, line: u32 },

    /// The synthesized serial does not decode back to the request.
    #[error("cannot represent serial {serial}: {reason}")]
    NotRepresentable { serial: String, reason: String },
}

impl SerialError {
    /// Returns true if the error came from the length check of a decode.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            SerialError::InvalidLength { .. } | SerialError::LooksLikeMlb
        )
    }

    /// Returns true if the error rejects an explicit request parameter.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            SerialError::YearOutOfRange { .. }
                | SerialError::AmbiguousYear { .. }
                | SerialError::WeekOutOfRange { .. }
                | SerialError::LineOutOfRange { .. }
                | SerialError::CopyOutOfRange { .. }
                | SerialError::CopyNotRepresentable { .. }
        )
    }
}

/// Errors from board serial (MLB) generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MlbError {
    /// No candidate passed the checksum within the attempt ceiling.
    #[error("no valid MLB found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    /// The week symbol of a modern serial decodes to week zero.
    #[error("week symbol '{symbol}' cannot be used for a MLB")]
    UndecodableWeek { symbol: char },

    /// The serial fields cannot be read as a production date.
    #[error("malformed serial for MLB generation: {reason}")]
    MalformedSerial { reason: String },

    /// The catalog holds no models to take a board code from.
    #[error("catalog has no models")]
    EmptyCatalog,
}

impl MlbError {
    /// Returns true if the search ran out of attempts.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, MlbError::Exhausted { .. })
    }
}
