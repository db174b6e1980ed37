// SPDX-License-Identifier: Apache-2.0

//! The byte-at-a-time NMEA-0183 sentence decoder.
//!
//! Bytes are consumed one at a time with no line buffering: only the field
//! currently being assembled is held. On every field boundary the field is
//! either identified (the first field of a sentence) or handed to the
//! extraction logic for the sentence type. A `$` always starts over, so a
//! truncated or corrupted sentence is simply abandoned.

use log::{debug, trace};

use crate::config_check::FieldCapacity;
use crate::dispatch::{dispatch, FieldContext, PendingCoordinates};
use crate::field_buffer::FieldBuffer;
use crate::int_parser::hex_digit;
use crate::navigation::{FixType, NavigationState};
use crate::sentence_type::SentenceType;

/// Field capacity used by [`NmeaDecoder`] unless configured otherwise.
///
/// One slot is the terminator, so fields keep at most 15 bytes.
pub const DEFAULT_FIELD_CAPACITY: usize = 16;

/// Outcome of comparing the transmitted checksum against the computed parity.
///
/// This is informational only: fields are extracted as they arrive, whatever
/// the checksum turns out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// No checksum field has completed since the last `$`.
    Unchecked,
    /// The transmitted checksum matched.
    Valid,
    /// The transmitted checksum differs from the parity of the received bytes.
    Mismatch { computed: u8, received: u8 },
    /// The checksum field was not exactly two hex digits.
    Malformed,
}

/// Incremental NMEA-0183 decoder holding the latest navigation values.
///
/// # Generic Parameters
///
/// * `C` - Field capacity in bytes, terminator slot included. Longer fields
///   are truncated and their excess bytes rejected by [`NmeaDecoder::decode`].
///
/// # Example
///
/// ```rust
/// use picogps::NmeaDecoder;
///
/// let mut decoder = NmeaDecoder::<16>::new();
/// let sentence = b"$GPGSV,2,1,05,19,,,22,24,,,22,25,,,22,26,,,23*73\r\n";
/// assert_eq!(decoder.decode_bytes(sentence), sentence.len());
/// assert_eq!(decoder.satellites(), 5);
/// ```
#[derive(Debug)]
pub struct NmeaDecoder<const C: usize = DEFAULT_FIELD_CAPACITY> {
    /// Bytes of the current field and the running parity
    field: FieldBuffer<C>,
    /// Index of the current field, 0 being the type token
    field_number: u8,
    /// Type of the current sentence, `None` until identified
    sentence_type: Option<SentenceType>,
    /// The current field follows a `*`
    is_checksum_field: bool,
    /// A `$` has been seen and no terminator since
    in_sentence: bool,
    /// Coordinates waiting for their hemisphere field
    pending: PendingCoordinates,
    checksum: ChecksumStatus,
    navigation: NavigationState,
}

macro_rules! forward_accessors {
    ($($(#[$meta:meta])* $name:ident -> $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> $ty {
                self.navigation.$name()
            }
        )*
    };
}

impl<const C: usize> NmeaDecoder<C> {
    /// Creates a decoder with empty navigation state.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = FieldCapacity::<C>::VALID;
        Self {
            field: FieldBuffer::new(),
            field_number: 0,
            sentence_type: None,
            is_checksum_field: false,
            in_sentence: false,
            pending: PendingCoordinates::new(),
            checksum: ChecksumStatus::Unchecked,
            navigation: NavigationState::new(),
        }
    }

    /// Consumes one byte of the stream.
    ///
    /// Returns `false` only when the byte had to be dropped because the
    /// current field is full. Delimiters and `$` are always accepted.
    pub fn decode(&mut self, byte: u8) -> bool {
        match byte {
            b'$' => {
                self.start_sentence();
                true
            }
            b',' | b'\r' | b'\n' | b'*' => {
                if byte == b',' {
                    self.field.fold_parity(byte);
                }
                let consumed = self.close_field();
                trace!("field closed by {:?}, consumed: {}", byte as char, consumed);
                self.is_checksum_field = byte == b'*';
                if matches!(byte, b'\r' | b'\n') {
                    self.in_sentence = false;
                }
                true
            }
            _ => match self.field.push(byte) {
                Ok(()) => {
                    if !self.is_checksum_field {
                        self.field.fold_parity(byte);
                    }
                    true
                }
                Err(_) => {
                    trace!(
                        "field {} full at {} bytes, dropping {:#04x}",
                        self.field_number,
                        self.field.offset(),
                        byte
                    );
                    false
                }
            },
        }
    }

    /// Feeds a buffer through [`NmeaDecoder::decode`] byte by byte.
    ///
    /// Stops at the first rejected byte and returns how many bytes were
    /// consumed before it, or `data.len()` when every byte was accepted.
    pub fn decode_bytes(&mut self, data: &[u8]) -> usize {
        for (consumed, &byte) in data.iter().enumerate() {
            if !self.decode(byte) {
                return consumed;
            }
        }
        data.len()
    }

    fn start_sentence(&mut self) {
        if self.in_sentence && self.field_number > 0 {
            trace!(
                "abandoning unterminated {:?} at field {}",
                self.sentence_type,
                self.field_number
            );
        }
        self.field.reset();
        self.field_number = 0;
        self.sentence_type = None;
        self.is_checksum_field = false;
        self.in_sentence = true;
        self.pending = PendingCoordinates::new();
        self.checksum = ChecksumStatus::Unchecked;
    }

    /// Terminates the current field and acts on it. Returns whether the field
    /// was identified or consumed by a handler.
    fn close_field(&mut self) -> bool {
        let consumed = if !self.in_sentence {
            false
        } else if self.is_checksum_field {
            self.verify_checksum()
        } else if self.field_number == 0 {
            self.identify_sentence()
        } else {
            dispatch(
                self.sentence_type,
                self.field_number,
                self.field.as_bytes(),
                FieldContext {
                    state: &mut self.navigation,
                    pending: &mut self.pending,
                },
            )
        };
        self.field_number = self.field_number.saturating_add(1);
        self.field.clear_field();
        consumed
    }

    fn identify_sentence(&mut self) -> bool {
        self.sentence_type = SentenceType::identify(self.field.as_bytes());
        if self.sentence_type.is_none() {
            debug!(
                "unrecognized sentence token {:?}",
                core::str::from_utf8(self.field.as_bytes()).unwrap_or("<non-ascii>")
            );
        }
        self.sentence_type.is_some()
    }

    fn verify_checksum(&mut self) -> bool {
        let computed = self.field.parity();
        self.checksum = match self.field.as_bytes() {
            &[high, low] => match (hex_digit(high), hex_digit(low)) {
                (Some(high), Some(low)) => {
                    let received = (high << 4) | low;
                    if received == computed {
                        ChecksumStatus::Valid
                    } else {
                        ChecksumStatus::Mismatch { computed, received }
                    }
                }
                _ => ChecksumStatus::Malformed,
            },
            _ => ChecksumStatus::Malformed,
        };
        trace!("checksum of {:?}: {:?}", self.sentence_type, self.checksum);
        self.checksum == ChecksumStatus::Valid
    }

    /// The navigation values decoded so far.
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// XOR of every byte since the last `$`, excluding framing and checksum digits.
    pub fn parity(&self) -> u8 {
        self.field.parity()
    }

    /// Type of the sentence being decoded, `None` if unidentified.
    pub fn sentence_type(&self) -> Option<SentenceType> {
        self.sentence_type
    }

    /// Index of the field currently being assembled.
    pub fn field_number(&self) -> u8 {
        self.field_number
    }

    /// Bytes of the field currently being assembled.
    pub fn field(&self) -> &[u8] {
        self.field.as_bytes()
    }

    pub fn field_offset(&self) -> usize {
        self.field.offset()
    }

    pub fn is_checksum_field(&self) -> bool {
        self.is_checksum_field
    }

    /// Result of the most recent checksum field in the current sentence.
    pub fn checksum_status(&self) -> ChecksumStatus {
        self.checksum
    }

    forward_accessors! {
        /// Latitude in decimal degrees, negative south of the equator.
        latitude -> f64,
        /// Longitude in decimal degrees, negative west of Greenwich.
        longitude -> f64,
        altitude -> f64,
        /// Speed over ground, in knots.
        speed -> f64,
        fix_type -> FixType,
        satellites -> u8,
        course_over_ground -> f64,
        vertical_speed_indicator -> f64,
        horizontal_dilution_of_precision -> f64,
        vertical_dilution_of_precision -> f64,
        year -> u16,
        month -> u8,
        day -> u8,
        hour -> u8,
        minute -> u8,
        second -> u8,
        is_locked -> bool,
    }
}

impl<const C: usize> Default for NmeaDecoder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn xor(bytes: &[u8]) -> u8 {
        bytes.iter().fold(0, |acc, &b| acc ^ b)
    }

    #[test]
    fn test_dollar_resets_mid_field() {
        let mut decoder = NmeaDecoder::<16>::new();
        decoder.decode_bytes(b"$GPGSV,2,1,0");
        assert_eq!(decoder.field_number(), 3);
        assert_eq!(decoder.sentence_type(), Some(SentenceType::Gsv));

        assert!(decoder.decode(b'$'));
        assert_eq!(decoder.field_number(), 0);
        assert_eq!(decoder.field_offset(), 0);
        assert_eq!(decoder.parity(), 0);
        assert_eq!(decoder.sentence_type(), None);
        assert!(!decoder.is_checksum_field());
    }

    #[test]
    fn test_parity_before_star() {
        let mut decoder = NmeaDecoder::<16>::new();
        decoder.decode_bytes(b"$GPXXX,a,b");
        assert_eq!(decoder.parity(), xor(b"GPXXX,a,b"));
        decoder.decode(b'*');
        assert!(decoder.is_checksum_field());
        decoder.decode_bytes(b"4F");
        assert_eq!(decoder.parity(), xor(b"GPXXX,a,b"));
    }

    #[test]
    fn test_field_truncated_at_capacity() {
        let mut decoder = NmeaDecoder::<8>::new();
        decoder.decode(b'$');
        for &byte in b"ABCDEFG" {
            assert!(decoder.decode(byte));
        }
        assert!(!decoder.decode(b'H'));
        assert!(!decoder.decode(b'I'));
        assert_eq!(decoder.field(), b"ABCDEFG");
        assert_eq!(decoder.field_offset(), 7);
        assert_eq!(decoder.parity(), xor(b"ABCDEFG"));
    }

    #[test]
    fn test_checksum_status() {
        let mut decoder = NmeaDecoder::<16>::new();
        decoder.decode_bytes(b"$GPGSV,2,2,05,28,,,21*75\r\n");
        assert_eq!(decoder.checksum_status(), ChecksumStatus::Valid);

        decoder.decode_bytes(b"$GPGSV,2,2,05,28,,,21*76\r\n");
        assert_eq!(
            decoder.checksum_status(),
            ChecksumStatus::Mismatch {
                computed: 0x75,
                received: 0x76
            }
        );

        decoder.decode_bytes(b"$GPGSV,2,2,05,28,,,21*7\r\n");
        assert_eq!(decoder.checksum_status(), ChecksumStatus::Malformed);

        decoder.decode(b'$');
        assert_eq!(decoder.checksum_status(), ChecksumStatus::Unchecked);
    }

    #[test]
    fn test_bytes_before_first_dollar_are_ignored() {
        let mut decoder = NmeaDecoder::<16>::new();
        decoder.decode_bytes(b"GPGSV,2,1,07,");
        assert_eq!(decoder.sentence_type(), None);
        assert_eq!(decoder.satellites(), 0);
    }

    #[test]
    fn test_stray_fields_after_terminator_are_ignored() {
        let mut decoder = NmeaDecoder::<16>::new();
        decoder.decode_bytes(b"$GPGSV,2\r\n09,");
        assert_eq!(decoder.satellites(), 0);
    }
}
