//! Serial number generation.
//!
//! A [`GenerationRequest`] is validated when it is built. Generation then
//! fills in every unset field, renders the candidate string, and decodes it
//! again: the returned record always comes from the decoder.

use rand::Rng;
use serde::Serialize;
use smbios_catalog::{Catalog, ModelIndex, ModelInfo};
use tracing::debug;

use crate::base34;
use crate::decode::{decode, epoch};
use crate::error::SerialError;
use crate::serial::{
    line_to_rmin, Decoded, SerialFormat, COPY_MAX, COPY_MIN, LEGACY_YEAR_MAX, LINE_MAX, LINE_MIN,
    MODERN_YEAR_MID, MODERN_YEAR_MIN, WEEK_MAX, WEEK_MIN, YEAR_MAX, YEAR_MIN,
};
use crate::tables;

/// Last year the modern year symbols can express.
const MODERN_YEAR_LAST: i32 = MODERN_YEAR_MID + 9;

/// How the model of a generated serial is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSelector {
    /// A model of the catalog; its canonical code is used.
    Index(ModelIndex),
    /// A model code used verbatim.
    Code(String),
}

/// Parameters for generating a serial. Unset fields are picked at
/// generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    model: ModelSelector,
    year: Option<i32>,
    week: Option<u32>,
    country: Option<String>,
    line: Option<u32>,
    copy: Option<u32>,
}

impl GenerationRequest {
    #[must_use]
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// A request that only names a catalog model.
    #[must_use]
    pub fn for_model(index: ModelIndex) -> Self {
        Self {
            model: ModelSelector::Index(index),
            year: None,
            week: None,
            country: None,
            line: None,
            copy: None,
        }
    }

    pub fn model(&self) -> &ModelSelector {
        &self.model
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn week(&self) -> Option<u32> {
        self.week
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn copy(&self) -> Option<u32> {
        self.copy
    }
}

/// Builder for [`GenerationRequest`].
#[derive(Debug, Clone, Default)]
pub struct GenerationRequestBuilder {
    index: Option<ModelIndex>,
    code: Option<String>,
    year: Option<i32>,
    week: Option<u32>,
    country: Option<String>,
    line: Option<u32>,
    copy: Option<u32>,
}

impl GenerationRequestBuilder {
    pub fn model_index(mut self, index: ModelIndex) -> Self {
        self.index = Some(index);
        self
    }

    pub fn model_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn copy(mut self, copy: u32) -> Self {
        self.copy = Some(copy);
        self
    }

    /// Validates the explicit parameters.
    pub fn build(self) -> Result<GenerationRequest, SerialError> {
        let model = match (self.index, self.code) {
            (Some(_), Some(_)) => return Err(SerialError::ConflictingModel),
            (None, None) => return Err(SerialError::MissingModel),
            (Some(index), None) => ModelSelector::Index(index),
            (None, Some(code)) => {
                if !matches!(code.len(), 3 | 4) || !all_symbols(&code) {
                    return Err(SerialError::InvalidModelCode { code });
                }
                ModelSelector::Code(code)
            }
        };

        if let Some(country) = &self.country {
            if !matches!(country.len(), 2 | 3) || !all_symbols(country) {
                return Err(SerialError::InvalidCountry {
                    country: country.clone(),
                });
            }
            if let ModelSelector::Code(code) = &model {
                if country.len() + 1 != code.len() {
                    return Err(SerialError::FormatMismatch {
                        country: country.clone(),
                        model: code.clone(),
                    });
                }
            }
        }

        if let Some(year) = self.year {
            if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
                return Err(SerialError::YearOutOfRange {
                    year,
                    min: YEAR_MIN,
                    max: YEAR_MAX,
                });
            }
        }

        if let Some(week) = self.week {
            if !(WEEK_MIN..=WEEK_MAX).contains(&week) {
                return Err(SerialError::WeekOutOfRange { week });
            }
        }

        if let Some(line) = self.line {
            if !(LINE_MIN..=LINE_MAX).contains(&line) {
                return Err(SerialError::LineOutOfRange { line });
            }
        }

        if let Some(copy) = self.copy {
            if !(COPY_MIN..=COPY_MAX).contains(&copy) {
                return Err(SerialError::CopyOutOfRange { copy });
            }
        }

        Ok(GenerationRequest {
            model,
            year: self.year,
            week: self.week,
            country: self.country,
            line: self.line,
            copy: self.copy,
        })
    }
}

fn all_symbols(s: &str) -> bool {
    s.bytes().all(base34::is_symbol)
}

/// Generates a serial for `request`.
///
/// The result always decodes as valid, with the requested (or picked) year
/// and week.
pub fn generate<R>(
    catalog: &Catalog,
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Decoded, SerialError>
where
    R: Rng + ?Sized,
{
    let (code, info) = resolve_model(catalog, &request.model)?;
    let format = SerialFormat::from_model_len(code.len())
        .ok_or_else(|| SerialError::InvalidModelCode { code: code.clone() })?;

    let country = resolve_country(catalog, request.country(), &code, format, info)?;
    let year = resolve_year(request.year, &code, format, info, rng)?;

    // Week 53 is too rare to pick at random.
    let week = request
        .week
        .unwrap_or_else(|| rng.random_range(WEEK_MIN..WEEK_MAX));

    let (year_field, week_field) = encode_date(year, week, format)?;

    let line = request
        .line
        .unwrap_or_else(|| rng.random_range(LINE_MIN..=LINE_MAX));
    let line_field = encode_line(line, request.copy)?;

    let candidate = format!("{country}{year_field}{week_field}{line_field}{code}");
    debug!(serial = %candidate, year, week, line, "generated serial candidate");

    let decoded = decode(catalog, &candidate)?;
    if let Some(finding) = decoded.errors().next() {
        return Err(SerialError::NotRepresentable {
            reason: finding.to_string(),
            serial: candidate,
        });
    }
    if decoded.serial.decoded_year != Some(year) || decoded.serial.decoded_week != Some(week) {
        return Err(SerialError::NotRepresentable {
            reason: format!("does not decode back to week {week} of {year}"),
            serial: candidate,
        });
    }

    Ok(decoded)
}

/// Resolves the model code, and the catalog entry when there is one.
///
/// An explicit code that the catalog knows is resolved to its model so
/// year defaults come from the model's production years.
fn resolve_model(
    catalog: &Catalog,
    selector: &ModelSelector,
) -> Result<(String, Option<&'static ModelInfo>), SerialError> {
    match selector {
        ModelSelector::Index(index) => {
            let info = catalog
                .model(*index)
                .ok_or(SerialError::UnknownModelIndex { index: *index })?;
            Ok((info.canonical_code().to_string(), Some(info)))
        }
        ModelSelector::Code(code) => {
            let info = catalog.find_model_code(code).map(|(_, info)| info);
            Ok((code.clone(), info))
        }
    }
}

fn resolve_country(
    catalog: &Catalog,
    requested: Option<&str>,
    code: &str,
    format: SerialFormat,
    info: Option<&ModelInfo>,
) -> Result<String, SerialError> {
    let len = format.country_len();

    if let Some(country) = requested {
        if country.len() != len {
            return Err(SerialError::FormatMismatch {
                country: country.to_string(),
                model: code.to_string(),
            });
        }
        return Ok(country.to_string());
    }

    // A country taken from a real serial of the model looks most plausible.
    if let Some(country) = info.and_then(|m| m.serial.get(..len)) {
        return Ok(country.to_string());
    }

    catalog
        .locations(format.location_table())
        .first()
        .map(|l| l.code.to_string())
        .ok_or(SerialError::MissingLocation)
}

fn resolve_year<R>(
    requested: Option<i32>,
    code: &str,
    format: SerialFormat,
    info: Option<&ModelInfo>,
    rng: &mut R,
) -> Result<i32, SerialError>
where
    R: Rng + ?Sized,
{
    let year = match (requested, info) {
        (Some(year), _) => year,
        (None, Some(model)) => match model.preferred_year {
            Some(year) => i32::from(year),
            None if model.years.is_empty() => default_year(code, format, info),
            None => i32::from(model.years[rng.random_range(0..model.years.len())]),
        },
        (None, None) => default_year(code, format, info),
    };

    let (min, max) = match format {
        SerialFormat::Legacy => format.year_range(),
        SerialFormat::Modern => (MODERN_YEAR_MIN, MODERN_YEAR_LAST),
    };
    if !(min..=max).contains(&year) {
        return Err(SerialError::YearOutOfRange { year, min, max });
    }

    if format == SerialFormat::Modern {
        let read_as = modern_year_read_as(year, code, info);
        if read_as != year {
            return Err(SerialError::AmbiguousYear {
                year,
                read_as,
                model: code.to_string(),
            });
        }
    }

    if let Some(model) = info {
        if !model.years.is_empty() && !model.produced_in(year) {
            return Err(SerialError::YearNotProduced {
                year,
                product: model.product.to_string(),
            });
        }
    }

    Ok(year)
}

/// Year used when neither the request nor the catalog picks one. Modern
/// serials take the first year of whichever decade the decoder will assume.
fn default_year(code: &str, format: SerialFormat, info: Option<&ModelInfo>) -> i32 {
    match format {
        SerialFormat::Legacy => LEGACY_YEAR_MAX,
        SerialFormat::Modern => epoch(0, code.as_bytes(), info),
    }
}

/// The year a decoder will read for a modern `year` with this model code.
fn modern_year_read_as(year: i32, code: &str, info: Option<&ModelInfo>) -> i32 {
    let offset = (year - MODERN_YEAR_MIN).rem_euclid(10) as u32;
    epoch(offset, code.as_bytes(), info) + offset as i32
}

/// Renders the year and week fields. `year` is already range-checked.
fn encode_date(
    year: i32,
    week: u32,
    format: SerialFormat,
) -> Result<(char, String), SerialError> {
    match format {
        SerialFormat::Legacy => {
            let digit = (year - 2000).rem_euclid(10) as u32;
            let year_field = char::from_digit(digit, 10).unwrap_or('0');
            Ok((year_field, format!("{week:02}")))
        }
        SerialFormat::Modern => {
            let decade = if year >= MODERN_YEAR_MID {
                MODERN_YEAR_MID
            } else {
                MODERN_YEAR_MIN
            };
            let offset = (year - decade) as u32;
            let year_field = tables::year_symbol(offset, week).ok_or(SerialError::YearOutOfRange {
                year,
                min: MODERN_YEAR_MIN,
                max: MODERN_YEAR_LAST,
            })?;
            let week_field =
                tables::week_symbol(week).ok_or(SerialError::WeekOutOfRange { week })?;
            Ok((year_field, week_field.to_string()))
        }
    }
}

/// Renders the three line symbols for `line`, optionally forcing a copy.
fn encode_line(line: u32, copy: Option<u32>) -> Result<String, SerialError> {
    let mut high = line_to_rmin(line);
    if let Some(copy) = copy {
        high += copy - 1;
        if high * 68 > line || high >= base34::ALPHABET.len() as u32 {
            return Err(SerialError::CopyNotRepresentable { copy, line });
        }
    }

    let rest = line - high * 68;
    [high, rest / 34, rest % 34]
        .into_iter()
        .map(base34::symbol)
        .collect::<Option<String>>()
        .ok_or(SerialError::LineOutOfRange { line })
}
