// SPDX-License-Identifier: Apache-2.0

// Int parser module, mostly borrowed from core::num::parse::radix

/// A custom error type for const integer parsing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ConstParseIntegerError {
    /// The input byte slice was empty.
    Empty,
    /// An invalid character was found that was not a base-10 digit.
    InvalidDigit,
    /// The number overflowed the target integer type.
    Overflow,
}

/// Creates a panic-free, const-stable, base-10 parser for a specific unsigned integer type.
macro_rules! define_const_parser {
    ($fn_name:ident, $int_ty:ty) => {
        /// Parses a byte slice into a(n) `
        #[doc = stringify!($int_ty)]
        /// ` in a `const` context.
        ///
        /// This function is guaranteed not to panic.
        pub const fn $fn_name(src: &[u8]) -> Result<$int_ty, ConstParseIntegerError> {
            let mut digits = match src {
                [] => return Err(ConstParseIntegerError::Empty),
                [b'+', rest @ ..] => rest,
                _ => src,
            };

            if digits.is_empty() {
                return Err(ConstParseIntegerError::InvalidDigit);
            }

            let mut result: $int_ty = 0;

            while let Some((&byte, rest)) = digits.split_first() {
                let digit = match byte {
                    b'0'..=b'9' => (byte - b'0') as $int_ty,
                    _ => return Err(ConstParseIntegerError::InvalidDigit),
                };

                result = match result.checked_mul(10) {
                    Some(val) => val,
                    None => return Err(ConstParseIntegerError::Overflow),
                };
                result = match result.checked_add(digit) {
                    Some(val) => val,
                    None => return Err(ConstParseIntegerError::Overflow),
                };

                digits = rest;
            }

            Ok(result)
        }
    };
}

define_const_parser!(from_ascii_u8, u8);
define_const_parser!(from_ascii_u16, u16);

/// Returns the run of ASCII digits at the start of `src`.
pub const fn leading_digits(src: &[u8]) -> &[u8] {
    let mut len = 0;
    while len < src.len() && src[len].is_ascii_digit() {
        len += 1;
    }
    src.split_at(len).0
}

macro_rules! define_lenient_parser {
    ($fn_name:ident, $strict:ident, $int_ty:ty) => {
        /// Lenient conversion in the manner of C `atoi`.
        ///
        /// Parses the leading digits, yields zero when there are none and
        /// saturates on overflow. Never fails.
        pub fn $fn_name(src: &[u8]) -> $int_ty {
            match $strict(leading_digits(src)) {
                Ok(value) => value,
                Err(ConstParseIntegerError::Overflow) => <$int_ty>::MAX,
                Err(_) => 0,
            }
        }
    };
}

define_lenient_parser!(parse_leading_u8, from_ascii_u8, u8);
define_lenient_parser!(parse_leading_u16, from_ascii_u16, u16);

/// Reads the two-digit decimal group starting at `at`, as found in
/// `hhmmss` and `ddmmyy` fields.
pub fn two_digits(src: &[u8], at: usize) -> Option<u8> {
    let pair = src.get(at..at + 2)?;
    if !pair.iter().all(u8::is_ascii_digit) {
        return None;
    }
    from_ascii_u8(pair).ok()
}

/// Decodes one ASCII hex digit, either case.
pub const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
