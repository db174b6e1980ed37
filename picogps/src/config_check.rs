// SPDX-License-Identifier: Apache-2.0

//! Compile-time configuration validation
//!
//! The field capacity of a decoder is a const generic, so it is checked when
//! the decoder is instantiated rather than at run time.

/// Longest sentence type token, e.g. `GPGGA`.
pub const SENTENCE_TOKEN_LEN: usize = 5;

/// Smallest capacity that still holds a full type token plus the terminator slot.
pub const MIN_FIELD_CAPACITY: usize = SENTENCE_TOKEN_LEN + 1;

pub(crate) struct FieldCapacity<const C: usize>;

impl<const C: usize> FieldCapacity<C> {
    /// Evaluating this constant fails the build for unusable capacities.
    pub(crate) const VALID: () = assert!(
        C >= MIN_FIELD_CAPACITY,
        "field capacity must hold a 5 byte sentence token plus its terminator"
    );
}
