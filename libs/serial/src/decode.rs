//! Serial number decoding.
//!
//! Only the length is checked up front. Everything else is read field by
//! field, and problems are collected as [`Finding`]s so a malformed serial
//! still yields as much information as can be recovered.

use chrono::{Days, NaiveDate};
use smbios_catalog::{Catalog, ModelInfo};
use tracing::debug;

use crate::base34::{self, LINE_WEIGHTS};
use crate::error::SerialError;
use crate::serial::{
    line_to_rmin, Decoded, Finding, Serial, SerialDetails, SerialFormat, MODERN_YEAR_MID,
    MODERN_YEAR_MIN, WEEK_MAX, WEEK_MIN,
};
use crate::tables;

/// Decodes `input` against `catalog`.
///
/// Fails only when the length is neither 11 nor 12.
pub fn decode(catalog: &Catalog, input: &str) -> Result<Decoded, SerialError> {
    let bytes = input.as_bytes();
    let format = match SerialFormat::from_len(bytes.len()) {
        Some(format) => format,
        None if bytes.len() == crate::MODERN_MLB_LEN => return Err(SerialError::LooksLikeMlb),
        None => return Err(SerialError::InvalidLength { len: bytes.len() }),
    };

    let mut findings = Vec::new();

    for (position, &c) in bytes.iter().enumerate() {
        if !base34::is_symbol(c) {
            findings.push(Finding::InvalidSymbol {
                position,
                symbol: char::from(c),
            });
        }
    }

    let country_len = format.country_len();
    let week_len = format.week_len();
    let line_start = country_len + 1 + week_len;

    let country = &bytes[..country_len];
    let year = bytes[country_len];
    let week = &bytes[country_len + 1..line_start];
    let line = &bytes[line_start..line_start + 3];
    let model = &bytes[bytes.len() - format.model_len()..];

    let model_code = to_string(model);
    let matched = catalog.find_model_code(&model_code);
    if matched.is_none() {
        findings.push(Finding::UnknownModel {
            code: model_code.clone(),
        });
    }

    let country_code = to_string(country);
    let location = catalog.find_location(format.location_table(), &country_code);
    if location.is_none() {
        findings.push(Finding::UnknownLocation {
            code: country_code.clone(),
        });
    }

    let info = matched.map(|(_, m)| m);
    let (decoded_year, raw_week) = match format {
        SerialFormat::Modern => decode_modern_date(year, week[0], model, info, &mut findings),
        SerialFormat::Legacy => decode_legacy_date(year, week, &mut findings),
    };

    let decoded_week = raw_week.filter(|&w| {
        let in_range = (WEEK_MIN..=WEEK_MAX).contains(&w);
        if !in_range {
            findings.push(Finding::WeekOutOfRange { week: w });
        }
        in_range
    });

    if let (Some(year), Some(model)) = (decoded_year, info) {
        if !model.produced_in(year) {
            findings.push(Finding::YearNotProduced {
                year,
                product: model.product,
            });
        }
    }

    let (week_start, week_end) = match (decoded_year, decoded_week) {
        (Some(year), Some(week)) => week_span(year, week),
        _ => (None, None),
    };

    let (decoded_line, decoded_copy) = decode_line(line, line_start, &mut findings);
    let model_description = catalog.describe(&model_code);

    for finding in &findings {
        debug!(serial = %input, %finding, "serial finding");
    }

    let serial = Serial {
        format,
        country: country_code,
        year: char::from(year),
        week: to_string(week),
        line: to_string(line),
        model: model_code,
        decoded_year,
        decoded_week,
        decoded_line,
        decoded_copy,
        model_index: matched.map(|(index, _)| index),
        country_index: location.map(|(index, _)| index),
        details: SerialDetails {
            location: location.map(|(_, l)| l.name),
            product: info.map(|m| m.product),
            model_description,
            week_start,
            week_end,
        },
    };

    Ok(Decoded { serial, findings })
}

fn to_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Reads the year and week symbols of a modern serial.
///
/// The week returned is not range-checked yet.
fn decode_modern_date(
    year: u8,
    week: u8,
    model: &[u8],
    info: Option<&ModelInfo>,
    findings: &mut Vec<Finding>,
) -> (Option<i32>, Option<u32>) {
    let decoded_year = match tables::year_offset(year) {
        Some(offset) => Some(epoch(offset, model, info) + offset as i32),
        None => {
            findings.push(Finding::InvalidYearSymbol {
                symbol: char::from(year),
            });
            None
        }
    };

    let raw_week = match week {
        b'1'..=b'9' => Some(u32::from(week - b'0')),
        _ => tables::week_letter(week),
    };

    let decoded_week = match raw_week {
        Some(w) if decoded_year.is_some() => Some(w + tables::week_carry(year)),
        Some(w) => Some(w),
        None => {
            findings.push(Finding::InvalidWeekSymbol {
                symbol: char::from(week),
            });
            None
        }
    };

    (decoded_year, decoded_week)
}

/// Decade a modern year symbol counts from.
///
/// The same symbol encodes a year of the 2010s and of the 2020s. Models
/// first produced in 2017 or later read offsets below 7 as 2020s; a zero
/// offset with a model code starting at `H` or later is also read as 2020.
pub(crate) fn epoch(offset: u32, model: &[u8], info: Option<&ModelInfo>) -> i32 {
    let recent_model = info
        .and_then(ModelInfo::earliest_year)
        .is_some_and(|y| y >= 2017);
    let late_code = model.first().is_some_and(|&c| c >= b'H');

    if (recent_model && offset < 7) || (offset == 0 && late_code) {
        MODERN_YEAR_MID
    } else {
        MODERN_YEAR_MIN
    }
}

fn decode_legacy_date(
    year: u8,
    week: &[u8],
    findings: &mut Vec<Finding>,
) -> (Option<i32>, Option<u32>) {
    let decoded_year = match year {
        b'0'..=b'2' => Some(2010 + i32::from(year - b'0')),
        b'3'..=b'9' => Some(2000 + i32::from(year - b'0')),
        _ => {
            findings.push(Finding::InvalidYearSymbol {
                symbol: char::from(year),
            });
            None
        }
    };

    let mut decoded_week = 0;
    for &c in week {
        match base34::digit_value(c) {
            Some(d) => decoded_week = decoded_week * 10 + d,
            None => {
                findings.push(Finding::InvalidWeekSymbol {
                    symbol: char::from(c),
                });
                return (decoded_year, None);
            }
        }
    }

    (decoded_year, Some(decoded_week))
}

/// Calendar span of a production week, counted from January 1st.
///
/// The last week of a year ends on December 31st even when it is short. A
/// week that starts on December 31st has no end.
fn week_span(year: i32, week: u32) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let Some(new_year) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return (None, None);
    };
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    let start = new_year.checked_add_days(Days::new(7 * u64::from(week - 1)));
    let end = start
        .filter(|&s| Some(s) != last)
        .and_then(|s| s.checked_add_days(Days::new(6)))
        .zip(last)
        .map(|(end, last)| end.min(last));

    (start, end)
}

/// Reads the weighted line field and derives the copy index.
fn decode_line(
    line: &[u8],
    offset: usize,
    findings: &mut Vec<Finding>,
) -> (Option<u32>, Option<u32>) {
    let mut total = 0;
    for (i, (&c, weight)) in line.iter().zip(LINE_WEIGHTS).enumerate() {
        match base34::weighted_digit(c, weight) {
            Some(v) => total += v,
            None => {
                findings.push(Finding::InvalidLineSymbol {
                    position: offset + i,
                    symbol: char::from(c),
                });
                return (None, None);
            }
        }
    }

    let copy = base34::value(line[0]).and_then(|high| high.checked_sub(line_to_rmin(total)));
    (Some(total), copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_builtin(input: &str) -> Decoded {
        decode(Catalog::builtin(), input).unwrap()
    }

    #[test]
    fn test_decode_legacy() {
        let decoded = decode_builtin("W88401231AX");
        assert!(decoded.is_valid(), "{:?}", decoded.findings);

        let serial = decoded.serial;
        assert_eq!(serial.format, SerialFormat::Legacy);
        assert_eq!(serial.country, "W8");
        assert_eq!(serial.year, '8');
        assert_eq!(serial.week, "40");
        assert_eq!(serial.line, "123");
        assert_eq!(serial.model, "1AX");
        assert_eq!(serial.decoded_year, Some(2008));
        assert_eq!(serial.decoded_week, Some(40));
        assert_eq!(serial.decoded_line, Some(139));
        assert_eq!(serial.copy(), Some(2));
        assert_eq!(serial.details.product, Some("MacBook5,1"));
    }

    #[test]
    fn test_decode_modern() {
        let decoded = decode_builtin("C02L13ECF8J2");
        assert!(decoded.is_valid(), "{:?}", decoded.findings);

        let serial = decoded.serial;
        assert_eq!(serial.format, SerialFormat::Modern);
        assert_eq!(serial.country, "C02");
        assert_eq!(serial.decoded_year, Some(2013));
        assert_eq!(serial.decoded_week, Some(27));
        assert_eq!(serial.decoded_line, Some(692));
        assert_eq!(serial.decoded_copy, Some(3));
        assert_eq!(serial.details.product, Some("iMac14,1"));
        assert_eq!(serial.to_string(), "C02L13ECF8J2");
    }

    #[test]
    fn test_length_errors() {
        let catalog = Catalog::builtin();
        assert_eq!(
            decode(catalog, "C02443500KZG2QDA7"),
            Err(SerialError::LooksLikeMlb)
        );
        assert_eq!(
            decode(catalog, "C02L13"),
            Err(SerialError::InvalidLength { len: 6 })
        );
        assert_eq!(
            decode(catalog, ""),
            Err(SerialError::InvalidLength { len: 0 })
        );
    }

    #[test]
    fn test_epoch_from_model_years() {
        // iMacPro1,1 started in 2017: offset 0 is 2020.
        assert_eq!(epoch(0, b"HX87", None), MODERN_YEAR_MID);
        assert_eq!(epoch(0, b"F8J2", None), MODERN_YEAR_MIN);
        assert_eq!(epoch(3, b"HX87", None), MODERN_YEAR_MIN);

        let catalog = Catalog::builtin();
        let (_, recent) = catalog.find_model_code("HX87").unwrap();
        assert_eq!(epoch(3, b"HX87", Some(recent)), MODERN_YEAR_MID);
        assert_eq!(epoch(7, b"HX87", Some(recent)), MODERN_YEAR_MIN);
    }

    #[test]
    fn test_week_span() {
        let (start, end) = week_span(2013, 1);
        assert_eq!(start, NaiveDate::from_ymd_opt(2013, 1, 1));
        assert_eq!(end, NaiveDate::from_ymd_opt(2013, 1, 7));

        // 2012 is a leap year: week 53 starts on December 30th.
        let (start, end) = week_span(2012, 53);
        assert_eq!(start, NaiveDate::from_ymd_opt(2012, 12, 30));
        assert_eq!(end, NaiveDate::from_ymd_opt(2012, 12, 31));

        // A one-day week 53 has a start but no end.
        let (start, end) = week_span(2013, 53);
        assert_eq!(start, NaiveDate::from_ymd_opt(2013, 12, 31));
        assert_eq!(end, None);
    }

    #[test]
    fn test_invalid_line_symbol() {
        let mut findings = Vec::new();
        assert_eq!(decode_line(b"0I2", 5, &mut findings), (None, None));
        assert_eq!(
            findings,
            vec![Finding::InvalidLineSymbol {
                position: 6,
                symbol: 'I'
            }]
        );
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        // 11 bytes, 10 characters.
        let decoded = decode_builtin("W884012é1A");
        assert!(!decoded.is_valid());
        assert!(decoded
            .findings
            .iter()
            .any(|f| matches!(f, Finding::InvalidSymbol { .. })));
    }
}
