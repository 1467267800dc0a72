//! Exact decimal (and general-radix) integer conversion.
//!
//! Parsing accumulates with checked multiply/add over the target type, so
//! overflow is detected at the first digit that would exceed the range.
//! Printing writes into caller-supplied slices through fixed stack scratch
//! buffers; nothing here allocates.
//!
//! One deliberate quirk carried from the original design: parsing an empty
//! digit sequence yields zero rather than an error. Callers that require
//! at least one digit must check the input length themselves.

use std::fmt::Write as _;

use thiserror::Error;

/// Decimal digits needed for the largest `u64` (18446744073709551615).
pub const MAX_U64_DIGITS: usize = 20;

/// Bytes needed for the longest `i64` rendering (sign plus magnitude).
pub const MAX_I64_DIGITS: usize = MAX_U64_DIGITS + 1;

/// Fixed fractional precision used by [`buf_print_f64`].
pub const F64_FRAC_DIGITS: usize = 4;

/// Bytes needed for the widest `f64` rendered at [`F64_FRAC_DIGITS`]:
/// sign, 309 integral digits, the point, and the fraction.
pub const MAX_F64_LEN: usize = 1 + 309 + 1 + F64_FRAC_DIGITS;

/// Failure outcomes of digit-sequence parsing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("character is not a digit in the given radix")]
    InvalidCharacter,
    #[error("value does not fit in the target type")]
    Overflow,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Map an ASCII byte to its digit value: `0-9`, then `a-z`/`A-Z` for 10+.
fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'z' => Some(byte - b'a' + 10),
        b'A'..=b'Z' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse an unsigned digit sequence in the given radix (2..=36).
///
/// The digit check precedes accumulation, so an out-of-radix byte reports
/// `InvalidCharacter` even when the digits before it already overflowed.
/// Empty input is `Ok(0)`.
///
/// A radix outside 2..=36 is a caller bug and panics.
pub fn parse_u64(s: &[u8], radix: u8) -> Result<u64, ParseError> {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36");

    let mut value: u64 = 0;
    for &byte in s {
        let digit = digit_value(byte)
            .filter(|&d| d < radix)
            .ok_or(ParseError::InvalidCharacter)?;
        value = value
            .checked_mul(u64::from(radix))
            .ok_or(ParseError::Overflow)?;
        value = value
            .checked_add(u64::from(digit))
            .ok_or(ParseError::Overflow)?;
    }
    Ok(value)
}

/// Parse an optionally `-`-prefixed digit sequence in the given radix.
///
/// Overflow is checked against the asymmetric `i64` range, so
/// `-9223372036854775808` parses while its positive twin does not.
pub fn parse_i64(s: &[u8], radix: u8) -> Result<i64, ParseError> {
    let (negative, digits) = match s.first() {
        Some(&b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    let magnitude = parse_u64(digits, radix)?;
    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(ParseError::Overflow);
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| ParseError::Overflow)
    }
}

// ---------------------------------------------------------------------------
// Printing
// ---------------------------------------------------------------------------

/// Render `value` in decimal into `out`, returning the byte count.
///
/// `out` must be large enough for the rendered digits; [`MAX_U64_DIGITS`]
/// always suffices. Zero renders as a single `'0'`.
pub fn buf_print_u64(value: u64, out: &mut [u8]) -> usize {
    buf_print_u64_radix(value, 10, out)
}

/// Render `value` in an arbitrary radix (2..=36, lowercase digits).
///
/// Digits are produced least-significant-first into a fixed scratch
/// buffer, then copied most-significant-first into `out`.
pub fn buf_print_u64_radix(mut value: u64, radix: u8, out: &mut [u8]) -> usize {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36");

    // 64 bits of base-2 digits is the worst case across all radices.
    let mut scratch = [0u8; 64];
    let mut pos = scratch.len();
    loop {
        pos -= 1;
        let digit = (value % u64::from(radix)) as u8;
        scratch[pos] = if digit < 10 {
            b'0' + digit
        } else {
            b'a' + (digit - 10)
        };
        value /= u64::from(radix);
        if value == 0 {
            break;
        }
    }
    let digits = &scratch[pos..];
    out[..digits.len()].copy_from_slice(digits);
    digits.len()
}

/// Render a signed value in decimal, returning the byte count including
/// any leading `'-'`.
///
/// The magnitude of a negative value is computed as `(-(x + 1)) as u64 + 1`
/// so `i64::MIN` never negates out of range.
pub fn buf_print_i64(value: i64, out: &mut [u8]) -> usize {
    if value < 0 {
        out[0] = b'-';
        let magnitude = (-(value + 1)) as u64 + 1;
        1 + buf_print_u64(magnitude, &mut out[1..])
    } else {
        buf_print_u64(value as u64, out)
    }
}

/// Render a float with exactly [`F64_FRAC_DIGITS`] fractional digits,
/// returning the byte count. `out` must hold [`MAX_F64_LEN`] bytes.
///
/// Digit generation delegates to the standard correctly-rounded decimal
/// conversion; this function only moves the bytes, it never allocates.
pub fn buf_print_f64(value: f64, out: &mut [u8]) -> usize {
    let mut sink = SliceWriter { out, len: 0 };
    match write!(sink, "{value:.prec$}", prec = F64_FRAC_DIGITS) {
        Ok(()) => sink.len,
        Err(_) => panic!("output slice shorter than MAX_F64_LEN"),
    }
}

/// `fmt::Write` over a borrowed byte slice; fails instead of growing.
struct SliceWriter<'a> {
    out: &'a mut [u8],
    len: usize,
}

impl std::fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        let bytes = s.as_bytes();
        let end = self.len + bytes.len();
        if end > self.out.len() {
            return Err(std::fmt::Error);
        }
        self.out[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_u64(b"0", 10), Ok(0));
        assert_eq!(parse_u64(b"42", 10), Ok(42));
        assert_eq!(parse_u64(b"18446744073709551615", 10), Ok(u64::MAX));
    }

    #[test]
    fn test_parse_radix_case_insensitive() {
        assert_eq!(parse_u64(b"ff", 16), Ok(255));
        assert_eq!(parse_u64(b"FF", 16), Ok(255));
        assert_eq!(parse_u64(b"z", 36), Ok(35));
        assert_eq!(parse_u64(b"101", 2), Ok(5));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        // Documented edge case: absence of digits parses as zero.
        assert_eq!(parse_u64(b"", 10), Ok(0));
        assert_eq!(parse_i64(b"", 10), Ok(0));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(parse_u64(b"12x3", 10), Err(ParseError::InvalidCharacter));
        assert_eq!(parse_u64(b" 1", 10), Err(ParseError::InvalidCharacter));
        // '2' is alphanumeric but not a base-2 digit.
        assert_eq!(parse_u64(b"102", 2), Err(ParseError::InvalidCharacter));
        // 'g' is one past the base-16 digit range.
        assert_eq!(parse_u64(b"g", 16), Err(ParseError::InvalidCharacter));
    }

    #[test]
    fn test_parse_overflow() {
        // u64::MAX + 1
        assert_eq!(
            parse_u64(b"18446744073709551616", 10),
            Err(ParseError::Overflow)
        );
        // 21 nines overflows the multiply step.
        assert_eq!(
            parse_u64(b"999999999999999999999", 10),
            Err(ParseError::Overflow)
        );
    }

    #[test]
    fn test_parse_character_check_precedes_accumulation() {
        // The bad byte is hit before its accumulation step, so this is an
        // invalid-character failure even though the prefix is near the max.
        assert_eq!(parse_u64(b"123a", 10), Err(ParseError::InvalidCharacter));
        assert_eq!(
            parse_u64(b"18446744073709551615!", 10),
            Err(ParseError::InvalidCharacter)
        );
    }

    #[test]
    fn test_parse_i64_range() {
        assert_eq!(parse_i64(b"-9223372036854775808", 10), Ok(i64::MIN));
        assert_eq!(parse_i64(b"9223372036854775807", 10), Ok(i64::MAX));
        assert_eq!(parse_i64(b"9223372036854775808", 10), Err(ParseError::Overflow));
        assert_eq!(
            parse_i64(b"-9223372036854775809", 10),
            Err(ParseError::Overflow)
        );
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn test_parse_radix_out_of_range_panics() {
        let _ = parse_u64(b"1", 37);
    }

    #[test]
    fn test_print_u64() {
        let mut out = [0u8; MAX_U64_DIGITS];
        let n = buf_print_u64(0, &mut out);
        assert_eq!(&out[..n], b"0");
        let n = buf_print_u64(4096, &mut out);
        assert_eq!(&out[..n], b"4096");
        let n = buf_print_u64(u64::MAX, &mut out);
        assert_eq!(&out[..n], b"18446744073709551615");
        assert_eq!(n, MAX_U64_DIGITS);
    }

    #[test]
    fn test_print_radix() {
        let mut out = [0u8; 64];
        let n = buf_print_u64_radix(255, 16, &mut out);
        assert_eq!(&out[..n], b"ff");
        let n = buf_print_u64_radix(5, 2, &mut out);
        assert_eq!(&out[..n], b"101");
        let n = buf_print_u64_radix(35, 36, &mut out);
        assert_eq!(&out[..n], b"z");
    }

    #[test]
    fn test_print_i64() {
        let mut out = [0u8; MAX_I64_DIGITS];
        let n = buf_print_i64(-123, &mut out);
        assert_eq!(&out[..n], b"-123");
        let n = buf_print_i64(7, &mut out);
        assert_eq!(&out[..n], b"7");
    }

    #[test]
    fn test_print_i64_min() {
        // The negate-overflow edge case: the magnitude is computed without
        // ever forming +9223372036854775808 in i64.
        let mut out = [0u8; MAX_I64_DIGITS];
        let n = buf_print_i64(i64::MIN, &mut out);
        assert_eq!(&out[..n], b"-9223372036854775808");
    }

    #[test]
    fn test_round_trip_all_radices() {
        let samples = [0u64, 1, 2, 35, 36, 255, 4095, 1 << 33, u64::MAX];
        let mut out = [0u8; 64];
        for radix in 2..=36u8 {
            for &x in &samples {
                let n = buf_print_u64_radix(x, radix, &mut out);
                assert_eq!(parse_u64(&out[..n], radix), Ok(x), "radix {radix}, x {x}");
            }
        }
    }

    #[test]
    fn test_print_f64_fixed_precision() {
        let mut out = [0u8; MAX_F64_LEN];
        let n = buf_print_f64(3.5, &mut out);
        assert_eq!(&out[..n], b"3.5000");
        let n = buf_print_f64(-0.25, &mut out);
        assert_eq!(&out[..n], b"-0.2500");
        let n = buf_print_f64(0.0, &mut out);
        assert_eq!(&out[..n], b"0.0000");
    }

    #[test]
    fn test_print_f64_extreme_magnitude_fits() {
        let mut out = [0u8; MAX_F64_LEN];
        let n = buf_print_f64(f64::MAX, &mut out);
        assert!(n <= MAX_F64_LEN);
        assert!(out[..n].ends_with(b".0000"));
    }
}
