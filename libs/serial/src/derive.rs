//! Sibling serials sharing a production batch.

use serde::Serialize;

use crate::base34;
use crate::serial::{line_to_rmin, Serial, LINE_REPR_MAX};

/// Number of values the high line digit can take.
const HIGH_DIGITS: u32 = 34;

/// A serial that encodes the same production line with another copy index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivative {
    pub serial: String,
    /// One-based copy index.
    pub copy: u32,
}

/// Iterator over the derivatives of a serial, see [`derivatives`].
#[derive(Debug, Clone)]
pub struct Derivatives<'a> {
    serial: &'a Serial,
    line: u32,
    rmin: u32,
    next: u32,
}

/// Enumerates every line field that decodes to the same line as `serial`.
///
/// Each high digit `k` whose window `(k * 68, k * 68 + 1155]` contains the
/// line yields one serial. Serials whose line did not decode yield nothing.
#[must_use]
pub fn derivatives(serial: &Serial) -> Derivatives<'_> {
    let line = serial.decoded_line.unwrap_or(0);
    Derivatives {
        serial,
        line,
        rmin: line_to_rmin(line),
        next: if serial.decoded_line.is_some() {
            0
        } else {
            HIGH_DIGITS
        },
    }
}

impl Iterator for Derivatives<'_> {
    type Item = Derivative;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < HIGH_DIGITS {
            let k = self.next;
            self.next += 1;

            let start = k * 68;
            if self.line <= start || self.line - start > LINE_REPR_MAX {
                continue;
            }

            let rest = self.line - start;
            let field: Option<String> = [k, rest / 34, rest % 34]
                .into_iter()
                .map(base34::symbol)
                .collect();
            let Some(field) = field else {
                continue;
            };

            let s = self.serial;
            return Some(Derivative {
                serial: format!("{}{}{}{field}{}", s.country, s.year, s.week, s.model),
                copy: k - self.rmin + 1,
            });
        }
        None
    }
}
