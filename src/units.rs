#![forbid(unsafe_code)]

//! Human-readable byte sizes
//!
//! Thresholds such as `10MB` or `1.5 GiB` are written the way people write
//! them in CI config files. SI units are powers of 1000, IEC units are powers
//! of 1024, and unit names are case-insensitive. A bare number is a byte count.

use crate::error::ByteSizeError;
use regex::Regex;
use std::sync::LazyLock;

const KILO: f64 = 1e3;
const KIBI: f64 = 1024.0;

/// Splits a size into its leading numeric run and the remaining unit text
static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([0-9.,]*)(.*)$").expect("size pattern is valid"));

/// Parse a human-readable byte size into a byte count
///
/// Thousands separators in the number are ignored (`1,024kB`), and
/// whitespace between the number and the unit is allowed (`10 MB`).
///
/// # Errors
///
/// Returns `ByteSizeError` if the number is missing or malformed, the unit
/// is not recognised, or the result does not fit in a `u64`.
pub fn parse_bytes(s: &str) -> Result<u64, ByteSizeError> {
    let captures = SIZE_PATTERN
        .captures(s)
        .ok_or_else(|| ByteSizeError::InvalidNumber(s.to_string()))?;
    let number = captures.get(1).map_or("", |m| m.as_str()).replace(',', "");
    let unit = captures
        .get(2)
        .map_or("", |m| m.as_str())
        .trim()
        .to_lowercase();

    let value: f64 = number
        .parse()
        .map_err(|_| ByteSizeError::InvalidNumber(s.to_string()))?;
    let multiplier = unit_multiplier(&unit).ok_or(ByteSizeError::UnknownUnit(unit))?;

    let bytes = value * multiplier;
    if bytes >= u64::MAX as f64 {
        return Err(ByteSizeError::TooLarge(s.to_string()));
    }
    Ok(bytes as u64)
}

fn unit_multiplier(unit: &str) -> Option<f64> {
    let multiplier = match unit {
        "" | "b" => 1.0,
        "k" | "kb" => KILO,
        "ki" | "kib" => KIBI,
        "m" | "mb" => KILO.powi(2),
        "mi" | "mib" => KIBI.powi(2),
        "g" | "gb" => KILO.powi(3),
        "gi" | "gib" => KIBI.powi(3),
        "t" | "tb" => KILO.powi(4),
        "ti" | "tib" => KIBI.powi(4),
        "p" | "pb" => KILO.powi(5),
        "pi" | "pib" => KIBI.powi(5),
        "e" | "eb" => KILO.powi(6),
        "ei" | "eib" => KIBI.powi(6),
        "z" | "zb" => KILO.powi(7),
        "zi" | "zib" => KIBI.powi(7),
        "y" | "yb" => KILO.powi(8),
        "yi" | "yib" => KIBI.powi(8),
        _ => return None,
    };
    Some(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_number_is_bytes() {
        assert_eq!(parse_bytes("42").unwrap(), 42);
        assert_eq!(parse_bytes("42B").unwrap(), 42);
        assert_eq!(parse_bytes("0").unwrap(), 0);
    }

    #[test]
    fn test_si_units() {
        assert_eq!(parse_bytes("10MB").unwrap(), 10_000_000);
        assert_eq!(parse_bytes("1kB").unwrap(), 1_000);
        assert_eq!(parse_bytes("2G").unwrap(), 2_000_000_000);
        assert_eq!(parse_bytes("1TB").unwrap(), 1_000_000_000_000);
    }

    #[test]
    fn test_iec_units() {
        assert_eq!(parse_bytes("10MiB").unwrap(), 10 * 1024 * 1024);
        assert_eq!(parse_bytes("1KiB").unwrap(), 1024);
        assert_eq!(parse_bytes("1Gi").unwrap(), 1024 * 1024 * 1024);
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(parse_bytes("10 mb").unwrap(), 10_000_000);
        assert_eq!(parse_bytes("10Mb ").unwrap(), 10_000_000);
        assert_eq!(parse_bytes("5 MIB").unwrap(), 5 * 1024 * 1024);
    }

    #[test]
    fn test_fractions_and_separators() {
        assert_eq!(parse_bytes("1.5MB").unwrap(), 1_500_000);
        assert_eq!(parse_bytes("1,024kB").unwrap(), 1_024_000);
        assert_eq!(parse_bytes("0.5KiB").unwrap(), 512);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_bytes("10XB"),
            Err(ByteSizeError::UnknownUnit("xb".to_string()))
        );
        let err = parse_bytes("10XB").unwrap_err();
        assert_eq!(err.to_string(), "unhandled size name: xb");
    }

    #[test]
    fn test_missing_number() {
        assert!(matches!(
            parse_bytes(""),
            Err(ByteSizeError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_bytes("MB"),
            Err(ByteSizeError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_bytes(" 10MB"),
            Err(ByteSizeError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_bytes("1.2.3MB"),
            Err(ByteSizeError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(parse_bytes("-10MB").is_err());
    }

    #[test]
    fn test_too_large() {
        assert!(matches!(
            parse_bytes("100EiB"),
            Err(ByteSizeError::TooLarge(_))
        ));
        assert!(matches!(
            parse_bytes("1ZB"),
            Err(ByteSizeError::TooLarge(_))
        ));
    }
}
