// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

// Compile-time configuration validation
mod config_check;
pub use config_check::MIN_FIELD_CAPACITY;

mod int_parser;

mod number_parser;

mod parse_error;

mod field_buffer;

mod sentence_type;
pub use sentence_type::SentenceType;

mod navigation;
pub use navigation::{FixType, NavigationState};

mod dispatch;
pub use dispatch::GSV_SATELLITES_IN_VIEW_FIELD;

mod decoder;
pub use decoder::{ChecksumStatus, NmeaDecoder, DEFAULT_FIELD_CAPACITY};
