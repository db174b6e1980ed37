// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::int_parser::two_digits;
use crate::parse_error::ExtractError;

/// Returns the longest prefix of `src` shaped like `[+-]digits[.digits]`.
fn numeric_prefix(src: &[u8]) -> &[u8] {
    let mut end = 0;
    if matches!(src.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_point = false;
    while let Some(&byte) = src.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }
    if seen_digit {
        &src[..end]
    } else {
        &[]
    }
}

/// Lenient decimal conversion.
///
/// Parses the leading numeric prefix of the field and yields `0.0` when there
/// is none. Never fails.
pub fn parse_leading_f64(src: &[u8]) -> f64 {
    let prefix = numeric_prefix(src);
    core::str::from_utf8(prefix)
        .ok()
        .and_then(|text| f64::from_str(text).ok())
        .unwrap_or(0.0)
}

/// Converts an NMEA `ddmm.mmmm` / `dddmm.mmmm` coordinate to unsigned
/// decimal degrees.
pub fn parse_coordinate(src: &[u8]) -> Result<f64, ExtractError> {
    if src.is_empty() {
        return Err(ExtractError::EmptyField);
    }
    let raw = parse_leading_f64(src);
    // Truncating cast stands in for floor(), which core lacks.
    let degrees = (raw / 100.0) as u64 as f64;
    let minutes = raw - degrees * 100.0;
    Ok(degrees + minutes / 60.0)
}

/// Sign to apply for a hemisphere indicator field.
pub fn hemisphere_sign(src: &[u8]) -> Result<f64, ExtractError> {
    match src {
        [] => Err(ExtractError::EmptyField),
        [b'N'] | [b'E'] => Ok(1.0),
        [b'S'] | [b'W'] => Ok(-1.0),
        _ => Err(ExtractError::InvalidValue),
    }
}

/// UTC time of day split out of an `hhmmss[.ss]` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Parses `hhmmss[.ss]`; fractional seconds are dropped.
pub fn parse_time_of_day(src: &[u8]) -> Result<TimeOfDay, ExtractError> {
    if src.is_empty() {
        return Err(ExtractError::EmptyField);
    }
    match (two_digits(src, 0), two_digits(src, 2), two_digits(src, 4)) {
        (Some(hour), Some(minute), Some(second)) => Ok(TimeOfDay {
            hour,
            minute,
            second,
        }),
        _ => Err(ExtractError::InvalidValue),
    }
}

/// Calendar date split out of a `ddmmyy` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Parses `ddmmyy`, placing the two-digit year in the 2000s.
pub fn parse_date(src: &[u8]) -> Result<CalendarDate, ExtractError> {
    if src.is_empty() {
        return Err(ExtractError::EmptyField);
    }
    match (two_digits(src, 0), two_digits(src, 2), two_digits(src, 4)) {
        (Some(day), Some(month), Some(yy)) => Ok(CalendarDate {
            year: 2000 + u16::from(yy),
            month,
            day,
        }),
        _ => Err(ExtractError::InvalidValue),
    }
}
