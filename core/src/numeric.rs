//! Range-checked integer conversion of option values.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Bound, CommandLineError, Result};

/// Integer types that option values can be converted to.
///
/// `FromStr` on the primitive integers already requires the whole string to
/// be a base-10 number with an optional leading sign, which is exactly the
/// accepted syntax.
pub trait OptionInteger: FromStr + PartialOrd + Display + Copy {}

impl OptionInteger for i8 {}
impl OptionInteger for i16 {}
impl OptionInteger for i32 {}
impl OptionInteger for i64 {}
impl OptionInteger for isize {}
impl OptionInteger for u8 {}
impl OptionInteger for u16 {}
impl OptionInteger for u32 {}
impl OptionInteger for u64 {}
impl OptionInteger for usize {}

/// Parses `raw` and checks it against `[min, max]`.
pub(crate) fn convert_in_range<T: OptionInteger>(
    option: &str,
    raw: &str,
    min: T,
    max: T,
) -> Result<T> {
    debug_assert!(min <= max, "inverted range for {option}: {min} > {max}");

    let value: T = raw
        .parse()
        .map_err(|_| CommandLineError::ConversionFailure {
            option: option.to_string(),
            value: raw.to_string(),
        })?;

    if value < min {
        return Err(range_violation(option, value, Bound::Minimum, min));
    }
    if value > max {
        return Err(range_violation(option, value, Bound::Maximum, max));
    }
    Ok(value)
}

fn range_violation<T: Display>(option: &str, value: T, bound: Bound, limit: T) -> CommandLineError {
    CommandLineError::RangeViolation {
        option: option.to_string(),
        value: value.to_string(),
        bound,
        limit: limit.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn kind<T: OptionInteger + std::fmt::Debug>(result: Result<T>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    #[test]
    fn test_in_range_values_round_trip() {
        assert_eq!(convert_in_range("--n", "0", i32::MIN, i32::MAX), Ok(0));
        assert_eq!(convert_in_range("--n", "-17", -20, 20), Ok(-17));
        assert_eq!(convert_in_range("--n", "+5", 0, 10), Ok(5));
        assert_eq!(
            convert_in_range("--n", "18446744073709551615", 0, u64::MAX),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(convert_in_range("--n", "2", 2, 2), Ok(2));
        assert_eq!(convert_in_range("--n", "10", 1u64, 10), Ok(10));
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert_eq!(kind(convert_in_range("--n", "", 0, 10)), ErrorKind::ConversionFailure);
        assert_eq!(kind(convert_in_range("--n", "abc", 0, 10)), ErrorKind::ConversionFailure);
        assert_eq!(kind(convert_in_range("--n", "12abc", 0, 100)), ErrorKind::ConversionFailure);
        assert_eq!(kind(convert_in_range("--n", " 1", 0, 10)), ErrorKind::ConversionFailure);
        assert_eq!(kind(convert_in_range("--n", "0x10", 0, 100)), ErrorKind::ConversionFailure);
        assert_eq!(kind(convert_in_range("--n", "1.5", 0, 10)), ErrorKind::ConversionFailure);
    }

    #[test]
    fn test_overflow_and_sign_are_conversion_failures() {
        assert_eq!(
            kind(convert_in_range("--n", "2147483648", i32::MIN, i32::MAX)),
            ErrorKind::ConversionFailure
        );
        assert_eq!(
            kind(convert_in_range("--n", "-1", 0u64, u64::MAX)),
            ErrorKind::ConversionFailure
        );
    }

    #[test]
    fn test_range_violation_reports_bound() {
        let err = convert_in_range("--n", "2", 3, 3).unwrap_err();
        assert_eq!(
            err,
            CommandLineError::RangeViolation {
                option: "--n".to_string(),
                value: "2".to_string(),
                bound: Bound::Minimum,
                limit: "3".to_string(),
            }
        );

        let err = convert_in_range("--n", "2", 1, 1).unwrap_err();
        assert!(matches!(
            err,
            CommandLineError::RangeViolation {
                bound: Bound::Maximum,
                ..
            }
        ));
    }
}
