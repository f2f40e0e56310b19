//! Year and week symbol tables for the modern serial layout.
//!
//! A modern serial spends one symbol on the year and one on the week. The
//! year symbol also carries which half of the year the week falls in: odd
//! positions in [`YEAR_SYMBOLS`] mean "add 26 to the week".

use crate::base34::{letter_value, LetterTable};

#[rustfmt::skip]
//                             A  B  C  D  E  F  G  H  I  J  K  L  M  N  O  P  Q  R  S  T  U  V  W  X  Y  Z
const YEAR_TABLE: LetterTable = [0, 0, 0, 0, 0, 1, 1, 2, 0, 2, 3, 3, 4, 4, 0, 5, 5, 6, 6, 7, 0, 7, 8, 8, 9, 9];
const YEAR_BLACKLIST: &str = "ABEIOU";

#[rustfmt::skip]
//                                    A  B  C  D   E  F  G   H  I  J   K  L   M  N   O  P  Q   R  S   T  U  V   W  X   Y  Z
const WEEK_CARRY_TABLE: LetterTable = [0, 0, 0, 26, 0, 0, 26, 0, 0, 26, 0, 26, 0, 26, 0, 0, 26, 0, 26, 0, 0, 26, 0, 26, 0, 26];

#[rustfmt::skip]
//                             A  B  C   D   E  F   G   H   I  J   K   L   M   N   O  P   Q   R   S  T   U  V   W   X   Y   Z
const WEEK_TABLE: LetterTable = [0, 0, 10, 11, 0, 12, 13, 14, 0, 15, 16, 17, 18, 19, 0, 20, 21, 22, 0, 23, 0, 24, 25, 26, 27, 0];
const WEEK_BLACKLIST: &str = "ABEIOSUZ";

/// Year symbols, two per year of the decade (first half, second half).
pub(crate) const YEAR_SYMBOLS: &[u8; 20] = b"CDFGHJKLMNPQRSTVWXYZ";

/// Week symbols indexed by week number. Index 0 is never produced.
pub(crate) const WEEK_SYMBOLS: &[u8; 54] =
    b"0123456789CDFGHJKLMNPQRTVWX123456789CDFGHJKLMNPQRTVWXY";

/// Offset within the decade encoded by a modern year symbol.
#[must_use]
pub fn year_offset(c: u8) -> Option<u32> {
    letter_value(c, &YEAR_TABLE, YEAR_BLACKLIST)
}

/// Week encoded by a modern week letter, before the half-year carry.
#[must_use]
pub fn week_letter(c: u8) -> Option<u32> {
    letter_value(c, &WEEK_TABLE, WEEK_BLACKLIST).filter(|&w| w > 0)
}

/// Weeks to add when the year symbol marks the second half of the year.
#[must_use]
pub fn week_carry(year_symbol: u8) -> u32 {
    letter_value(year_symbol, &WEEK_CARRY_TABLE, "").unwrap_or(0)
}

/// Year symbol for a decade offset and week.
pub(crate) fn year_symbol(offset: u32, week: u32) -> Option<char> {
    let index = offset * 2 + u32::from(week >= 27);
    YEAR_SYMBOLS
        .get(usize::try_from(index).ok()?)
        .map(|&c| char::from(c))
}

/// Week symbol for a week number.
pub(crate) fn week_symbol(week: u32) -> Option<char> {
    WEEK_SYMBOLS
        .get(usize::try_from(week).ok()?)
        .map(|&c| char::from(c))
}

// =============================================================================
// Board serial tables
// =============================================================================

/// Year symbols understood by board serial generation, paired with
/// [`MLB_YEAR_DIGITS`].
const MLB_YEAR_SYMBOLS: &[u8; 20] = b"CDFGHJKLMNPQRSTVWXYZ";
const MLB_YEAR_DIGITS: &[u8; 20] = b"00112233445566778899";

/// Year symbols whose board serial week starts at 27.
const MLB_WEEK_OVERRIDES: &[u8; 10] = b"DGJLNQSVXZ";

/// Week symbols understood by board serial generation; position + 1 is
/// added to the week.
const MLB_WEEK_SYMBOLS: &[u8; 29] = b"123456789CDFGHJKLMNPQRSTVWXYZ";

/// Decade digit of a modern year symbol, 0 when unknown.
pub(crate) fn mlb_year(year_symbol: u8) -> u32 {
    MLB_YEAR_SYMBOLS
        .iter()
        .position(|&c| c == year_symbol)
        .map(|i| u32::from(MLB_YEAR_DIGITS[i] - b'0'))
        .unwrap_or(0)
}

/// Week number of a modern year/week symbol pair, 0 when undecodable.
pub(crate) fn mlb_week(year_symbol: u8, week_symbol: u8) -> u32 {
    let base = if MLB_WEEK_OVERRIDES.contains(&year_symbol) {
        27
    } else {
        0
    };
    let offset = MLB_WEEK_SYMBOLS
        .iter()
        .position(|&c| c == week_symbol)
        .map(|i| i as u32 + 1)
        .unwrap_or(0);
    base + offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_offset() {
        // C02VCWY4HH27
        assert_eq!(year_offset(b'V'), Some(7));
        assert_eq!(year_offset(b'C'), Some(0));
        assert_eq!(year_offset(b'Z'), Some(9));
        assert_eq!(year_offset(b'U'), None);
        assert_eq!(year_offset(b'A'), None);
        assert_eq!(year_offset(b'1'), None);
    }

    #[test]
    fn test_week_letter() {
        assert_eq!(week_letter(b'C'), Some(10));
        assert_eq!(week_letter(b'Y'), Some(27));
        assert_eq!(week_letter(b'S'), None);
        assert_eq!(week_letter(b'Z'), None);
        assert_eq!(week_letter(b'5'), None);
    }

    #[test]
    fn test_week_carry() {
        assert_eq!(week_carry(b'C'), 0);
        assert_eq!(week_carry(b'D'), 26);
        assert_eq!(week_carry(b'L'), 26);
        assert_eq!(week_carry(b'M'), 0);
    }

    #[test]
    fn test_year_symbols_decode_back() {
        for offset in 0..10 {
            for week in [1, 26, 27, 53] {
                let c = year_symbol(offset, week).unwrap() as u8;
                assert_eq!(year_offset(c), Some(offset));
                assert_eq!(week_carry(c) == 26, week >= 27);
            }
        }
        assert_eq!(year_symbol(10, 1), None);
    }

    #[test]
    fn test_week_symbols_decode_back() {
        for week in 1..=53u32 {
            let c = week_symbol(week).unwrap() as u8;
            let raw = match c {
                b'1'..=b'9' => u32::from(c - b'0'),
                _ => week_letter(c).unwrap(),
            };
            let carry = if week >= 27 { 26 } else { 0 };
            assert_eq!(raw + carry, week, "week {week}");
        }
    }

    #[test]
    fn test_mlb_tables() {
        assert_eq!(mlb_year(b'C'), 0);
        assert_eq!(mlb_year(b'L'), 3);
        assert_eq!(mlb_year(b'?'), 0);
        assert_eq!(mlb_week(b'C', b'1'), 1);
        assert_eq!(mlb_week(b'L', b'1'), 28);
        assert_eq!(mlb_week(b'C', b'0'), 0);
    }
}
