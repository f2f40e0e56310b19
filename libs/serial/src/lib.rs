//! # smbios-serial
//!
//! Codec for Mac serial numbers and main logic board serials (MLB).
//!
//! ## Serial layouts
//!
//! ```text
//! legacy (11):  CC Y WW LLL MMM     e.g. W8 8 40 123 1AX
//! modern (12):  CCC Y W LLL MMMM    e.g. C02 L 1 3EC F8J2
//! ```
//!
//! `C` is the factory location, `Y`/`W` the production year and week, `L`
//! the production line in weighted Base34 and `M` the model code. Modern
//! serials fold the half of the year into the year symbol.
//!
//! ## Usage
//!
//! ```
//! use smbios_serial::Codec;
//!
//! let codec = Codec::builtin();
//! let decoded = codec.decode("C02L13ECF8J2").unwrap();
//! assert!(decoded.is_valid());
//! assert_eq!(decoded.serial.decoded_year, Some(2013));
//! ```
//!
//! Generation and board serials take the random source as a parameter:
//!
//! ```
//! use smbios_serial::{Codec, GenerationRequest};
//!
//! let codec = Codec::builtin();
//! let index = codec.catalog().find_product("iMac14,1").unwrap();
//! let mut rng = rand::rng();
//! let decoded = codec.generate(&GenerationRequest::for_model(index), &mut rng).unwrap();
//! let mlb = codec.mlb(&decoded.serial, &mut rng).unwrap();
//! assert!(smbios_serial::verify_mlb_checksum(&mlb));
//! ```

pub mod base34;
mod codec;
mod decode;
mod derive;
mod encode;
mod error;
mod mlb;
mod rom;
mod serial;
pub mod tables;

pub use codec::Codec;
pub use decode::decode;
pub use derive::{derivatives, Derivative, Derivatives};
pub use encode::{generate, GenerationRequest, GenerationRequestBuilder, ModelSelector};
pub use error::{MlbError, SerialError};
pub use mlb::{checksum_sum, generate_mlb, verify_mlb_checksum, MlbFormat, DEFAULT_MLB_ATTEMPTS};
pub use rom::generate_rom;
pub use serial::{
    line_to_rmin, Decoded, Finding, Serial, SerialDetails, SerialFormat, COPY_MAX, COPY_MIN,
    LEGACY_MLB_LEN, LEGACY_YEAR_MAX, LEGACY_YEAR_MIN, LINE_MAX, LINE_MIN, LINE_REPR_MAX,
    MODERN_MLB_LEN, MODERN_YEAR_MAX, MODERN_YEAR_MID, MODERN_YEAR_MIN, WEEK_MAX, WEEK_MIN,
    YEAR_MAX, YEAR_MIN,
};
