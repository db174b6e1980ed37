// SPDX-License-Identifier: Apache-2.0

use crate::int_parser::ConstParseIntegerError;

/// Reasons a single field produced no navigation update.
///
/// These never leave the decoder as errors: the dispatcher folds them into the
/// boolean field outcome and decoding carries on with the next field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtractError {
    /// The sentence token was not recognized, so no handler applies.
    InvalidSentence,
    /// The handler does not read this field index.
    UnknownField,
    /// The field was present but empty (the receiver has no data for it).
    EmptyField,
    /// The sentence type carries nothing that maps onto navigation state.
    NoNavigationData,
    /// A hemisphere arrived without a preceding coordinate in the sentence.
    MissingCoordinate,
    /// The field text did not have the expected shape.
    InvalidValue,
}

impl From<ConstParseIntegerError> for ExtractError {
    fn from(err: ConstParseIntegerError) -> Self {
        match err {
            ConstParseIntegerError::Empty => ExtractError::EmptyField,
            ConstParseIntegerError::InvalidDigit | ConstParseIntegerError::Overflow => {
                ExtractError::InvalidValue
            }
        }
    }
}

impl core::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ExtractError::InvalidSentence => write!(f, "unrecognized sentence type"),
            ExtractError::MissingCoordinate => write!(f, "hemisphere without coordinate"),
            _ => write!(f, "{self:?}"),
        }
    }
}
