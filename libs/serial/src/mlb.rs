//! Main logic board serials (MLB).
//!
//! A board serial is derived from a decoded serial number: same country, the
//! production date shifted back by one week, a board code of the model and
//! random filler. Candidates are drawn until one passes
//! [`verify_mlb_checksum`].

use rand::Rng;
use serde::Serialize;
use smbios_catalog::{Catalog, ModelInfo, MLB_BLOCK1, MLB_BLOCK2, MLB_BLOCK3};
use tracing::{debug, warn};

use crate::base34::{self, ALPHABET};
use crate::error::MlbError;
use crate::serial::{Serial, SerialFormat, LEGACY_MLB_LEN, MODERN_MLB_LEN, WEEK_MAX};
use crate::tables;

/// Attempts made before giving up on a checksum-valid candidate.
pub const DEFAULT_MLB_ATTEMPTS: u32 = 10_000;

/// Multiplier applied to the random seed of the legacy ASCII7 block.
const ASCII7_MULTIPLIER: u32 = 0x73BA1C;
const ASCII7_SEED_MAX: u32 = 0x7FFE;

/// Layout of a board serial, told apart by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MlbFormat {
    Legacy,
    Modern,
}

impl MlbFormat {
    #[must_use]
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            LEGACY_MLB_LEN => Some(Self::Legacy),
            MODERN_MLB_LEN => Some(Self::Modern),
            _ => None,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Legacy => LEGACY_MLB_LEN,
            Self::Modern => MODERN_MLB_LEN,
        }
    }
}

impl std::fmt::Display for MlbFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

/// Weighted symbol sum of a board serial.
///
/// Symbols at positions with the same parity as the length weigh 3, the
/// others 1. Symbols outside the alphabet are skipped.
#[must_use]
pub fn checksum_sum(mlb: &str) -> u32 {
    let parity = mlb.len() & 1;
    mlb.bytes()
        .enumerate()
        .filter_map(|(i, c)| {
            let value = ALPHABET.iter().position(|&a| a == c)? as u32;
            Some(if i & 1 == parity { 3 * value } else { value })
        })
        .sum()
}

/// Returns true if the weighted sum is a multiple of the alphabet size.
#[must_use]
pub fn verify_mlb_checksum(mlb: &str) -> bool {
    checksum_sum(mlb) % ALPHABET.len() as u32 == 0
}

/// Generates a board serial for `serial`.
///
/// Serials without a catalog model borrow the board code of the last model
/// sharing their layout.
pub fn generate_mlb<R>(
    catalog: &Catalog,
    serial: &Serial,
    max_attempts: u32,
    rng: &mut R,
) -> Result<String, MlbError>
where
    R: Rng + ?Sized,
{
    let model = board_model(catalog, serial)?;
    let board = model.canonical_board();
    let (year, week) = production_date(serial)?;

    for attempt in 1..=max_attempts {
        let candidate = match serial.format {
            SerialFormat::Legacy => {
                let seed = rng.random_range(0..ASCII7_SEED_MAX);
                let Some(code) = base34::ascii7(seed.wrapping_mul(ASCII7_MULTIPLIER), 3) else {
                    continue;
                };
                let suffix = char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]);
                format!("{}{year}{week:02}0{code}{board}{suffix}", serial.country)
            }
            SerialFormat::Modern => {
                let block1 = MLB_BLOCK1[rng.random_range(0..MLB_BLOCK1.len())];
                let block2 = MLB_BLOCK2[rng.random_range(0..MLB_BLOCK2.len())];
                let block3 = MLB_BLOCK3[rng.random_range(0..MLB_BLOCK3.len())];
                format!(
                    "{}{year}{week:02}{block1}{block2}{board}{block3}",
                    serial.country
                )
            }
        };

        if verify_mlb_checksum(&candidate) {
            debug!(mlb = %candidate, attempt, "board serial found");
            return Ok(candidate);
        }
    }

    Err(MlbError::Exhausted {
        attempts: max_attempts,
    })
}

fn board_model(catalog: &Catalog, serial: &Serial) -> Result<&'static ModelInfo, MlbError> {
    if let Some(model) = serial.model_index.and_then(|index| catalog.model(index)) {
        return Ok(model);
    }

    let fallback = catalog
        .models()
        .iter()
        .rev()
        .find(|m| m.is_legacy() == serial.is_legacy())
        .or_else(|| catalog.fallback_model().and_then(|index| catalog.model(index)))
        .ok_or(MlbError::EmptyCatalog)?;

    warn!(
        model = %serial.model,
        fallback = fallback.product,
        "unknown model, assuming default"
    );
    Ok(fallback)
}

/// Decade digit and week of the board serial, one week before the serial's.
fn production_date(serial: &Serial) -> Result<(u32, u32), MlbError> {
    let year_symbol = u8::try_from(serial.year).unwrap_or(0);
    let week_symbols = serial.week.as_bytes();

    let (year, week) = match serial.format {
        SerialFormat::Legacy => {
            let malformed = || MlbError::MalformedSerial {
                reason: format!("'{}{}' is not a year and week", serial.year, serial.week),
            };
            let year = base34::digit_value(year_symbol).ok_or_else(malformed)?;
            let week = week_symbols
                .iter()
                .try_fold(0, |acc, &c| base34::digit_value(c).map(|d| acc * 10 + d))
                .filter(|_| week_symbols.len() == 2)
                .ok_or_else(malformed)?;
            (year, week)
        }
        SerialFormat::Modern => {
            let week_symbol = week_symbols.first().copied().unwrap_or(0);
            let week = tables::mlb_week(year_symbol, week_symbol);
            if week == 0 {
                return Err(MlbError::UndecodableWeek {
                    symbol: char::from(week_symbol),
                });
            }
            (tables::mlb_year(year_symbol), week)
        }
    };

    match week.checked_sub(1) {
        Some(0) => Ok(((year + 9) % 10, WEEK_MAX)),
        Some(week) => Ok((year, week)),
        None => Err(MlbError::MalformedSerial {
            reason: "week 00 has no preceding week".to_string(),
        }),
    }
}
