//! Base34 numerals: digits plus upper-case letters without `I` and `O`.
//!
//! Every symbol of a serial number or board serial belongs to [`ALPHABET`].
//! Letter lookups go through 26-entry tables indexed by `c - 'A'`, each
//! paired with a blacklist of letters the table must never decode.

/// Reverse alphabet: the symbol for value `v` is `ALPHABET[v]`.
pub const ALPHABET: &[u8; 34] = b"0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Letters that never appear in a serial.
pub const BLACKLIST: &str = "IO";

/// Table entry for a letter that has no value.
pub(crate) const UNUSED: i8 = -1;

/// A letter-to-value table, indexed by `letter - 'A'`.
pub type LetterTable = [i8; 26];

#[rustfmt::skip]
//                                  A   B   C   D   E   F   G   H   I       J   K   L   M   N   O       P   Q   R   S   T   U   V   W   X   Y   Z
pub(crate) const TABLE: LetterTable = [10, 11, 12, 13, 14, 15, 16, 17, UNUSED, 18, 19, 20, 21, 22, UNUSED, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33];

/// Line fields are weighted by position: high digit, middle, low.
pub const LINE_WEIGHTS: [u32; 3] = [68, 34, 1];

/// Value of an ASCII digit.
#[must_use]
pub fn digit_value(c: u8) -> Option<u32> {
    c.is_ascii_digit().then(|| u32::from(c - b'0'))
}

/// Value of an upper-case letter in `table`, unless blacklisted or unused.
#[must_use]
pub fn letter_value(c: u8, table: &LetterTable, blacklist: &str) -> Option<u32> {
    if !c.is_ascii_uppercase() || blacklist.as_bytes().contains(&c) {
        return None;
    }
    u32::try_from(table[usize::from(c - b'A')]).ok()
}

/// Value of a Base34 symbol.
#[must_use]
pub fn value(c: u8) -> Option<u32> {
    digit_value(c).or_else(|| letter_value(c, &TABLE, BLACKLIST))
}

/// Value of a Base34 symbol scaled by its positional multiplier.
#[must_use]
pub fn weighted_digit(c: u8, multiplier: u32) -> Option<u32> {
    value(c).map(|v| v * multiplier)
}

/// Symbol for a value in `[0, 33]`.
#[must_use]
pub fn symbol(value: u32) -> Option<char> {
    usize::try_from(value)
        .ok()
        .and_then(|v| ALPHABET.get(v))
        .map(|&c| char::from(c))
}

/// Returns true if `c` may appear in a serial.
#[must_use]
pub fn is_symbol(c: u8) -> bool {
    ALPHABET.contains(&c)
}

/// Renders a scaled random value the way legacy board serials expect.
///
/// Values below 1,000,000 are rejected. Larger values are divided by ten
/// until they fit in 10,000,000, rendered in Base34, and the `size` leading
/// symbols are kept (left-padded with `0` if the rendering is shorter).
#[must_use]
pub fn ascii7(mut value: u32, size: usize) -> Option<String> {
    if value < 1_000_000 {
        return None;
    }

    while value > 10_000_000 {
        value /= 10;
    }

    let mut digits = Vec::with_capacity(8);
    loop {
        digits.push(ALPHABET[(value % 34) as usize]);
        value /= 34;
        if value == 0 {
            break;
        }
    }
    while digits.len() < size {
        digits.push(b'0');
    }

    Some(digits.iter().rev().take(size).map(|&c| char::from(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digit_value(b'0'), Some(0));
        assert_eq!(digit_value(b'9'), Some(9));
        assert_eq!(digit_value(b'A'), None);
    }

    #[test]
    fn test_letters_skip_i_and_o() {
        assert_eq!(value(b'A'), Some(10));
        assert_eq!(value(b'H'), Some(17));
        assert_eq!(value(b'I'), None);
        assert_eq!(value(b'J'), Some(18));
        assert_eq!(value(b'O'), None);
        assert_eq!(value(b'P'), Some(23));
        assert_eq!(value(b'Z'), Some(33));
        assert_eq!(value(b'a'), None);
        assert_eq!(value(b'-'), None);
    }

    #[test]
    fn test_blacklist_wins_over_table() {
        // C has a table entry but the caller excludes it.
        assert_eq!(letter_value(b'C', &TABLE, "C"), None);
        assert_eq!(letter_value(b'C', &TABLE, ""), Some(12));
        // I is unused even without a blacklist.
        assert_eq!(letter_value(b'I', &TABLE, ""), None);
    }

    #[test]
    fn test_weighted_line_symbols() {
        // Line field of C02VCWY4HH27.
        let line = b"WY4";
        let expected = [2040, 1088, 4];
        for ((&c, weight), want) in line.iter().zip(LINE_WEIGHTS).zip(expected) {
            assert_eq!(weighted_digit(c, weight), Some(want));
        }
    }

    #[test]
    fn test_symbol_matches_value() {
        for v in 0..34 {
            let c = symbol(v).unwrap();
            assert_eq!(value(c as u8), Some(v));
        }
        assert_eq!(symbol(34), None);
    }

    #[test]
    fn test_ascii7() {
        assert_eq!(ascii7(0x73BA1C * 10, 3).as_deref(), Some("5NY"));
        assert_eq!(ascii7(999_999, 3), None);
        assert_eq!(ascii7(1_000_000, 3).map(|s| s.len()), Some(3));
    }
}
