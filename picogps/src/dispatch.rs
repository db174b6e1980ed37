// SPDX-License-Identifier: Apache-2.0

//! Routes completed fields to the handler of their sentence type.
//!
//! Each handler matches on the field index and only touches the navigation
//! values that index carries. Indices a handler does not read, and empty
//! fields, leave the state alone.

use log::trace;

use crate::int_parser::{parse_leading_u16, parse_leading_u8};
use crate::navigation::{FixType, NavigationState};
use crate::number_parser::{
    hemisphere_sign, parse_coordinate, parse_date, parse_leading_f64, parse_time_of_day,
};
use crate::parse_error::ExtractError;
use crate::sentence_type::SentenceType;

/// Field index of the satellites-in-view count in `GSV`.
pub const GSV_SATELLITES_IN_VIEW_FIELD: u8 = 3;

/// Coordinates seen in the current sentence that still wait for their
/// hemisphere field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendingCoordinates {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PendingCoordinates {
    pub const fn new() -> Self {
        Self {
            latitude: None,
            longitude: None,
        }
    }
}

/// Everything a handler may read or update for one field.
pub struct FieldContext<'a> {
    pub state: &'a mut NavigationState,
    pub pending: &'a mut PendingCoordinates,
}

/// Hands one field to the handler for `sentence`, reporting whether it
/// updated anything.
pub fn dispatch(
    sentence: Option<SentenceType>,
    index: u8,
    field: &[u8],
    context: FieldContext<'_>,
) -> bool {
    match extract(sentence, index, field, context) {
        Ok(()) => true,
        Err(err) => {
            trace!("field {} of {:?} not extracted: {}", index, sentence, err);
            false
        }
    }
}

fn extract(
    sentence: Option<SentenceType>,
    index: u8,
    field: &[u8],
    cx: FieldContext<'_>,
) -> Result<(), ExtractError> {
    let sentence = sentence.ok_or(ExtractError::InvalidSentence)?;
    match sentence {
        SentenceType::Gga => positioning_system_fix(index, field, cx),
        SentenceType::Gll => latitude_and_longitude(index, field, cx),
        SentenceType::Gsa => dop_and_active_satellites(index, field, cx),
        SentenceType::Gsv => satellites_in_view(index, field, cx),
        SentenceType::Rmc => recommended_minimum_data(index, field, cx),
        SentenceType::Vtg => course_and_ground_speed(index, field, cx),
        SentenceType::Zda => time_and_date(index, field, cx),
        SentenceType::Gbs | SentenceType::Grs | SentenceType::Gst => {
            time_stamped_statistics(index, field, cx)
        }
        SentenceType::Dtm | SentenceType::Gpq | SentenceType::Txt => {
            Err(ExtractError::NoNavigationData)
        }
    }
}

fn non_empty(field: &[u8]) -> Result<&[u8], ExtractError> {
    if field.is_empty() {
        Err(ExtractError::EmptyField)
    } else {
        Ok(field)
    }
}

fn set_time(field: &[u8], state: &mut NavigationState) -> Result<(), ExtractError> {
    let time = parse_time_of_day(field)?;
    state.hour = time.hour;
    state.minute = time.minute;
    state.second = time.second;
    Ok(())
}

fn stash_latitude(field: &[u8], pending: &mut PendingCoordinates) -> Result<(), ExtractError> {
    pending.latitude = Some(parse_coordinate(field)?);
    Ok(())
}

fn stash_longitude(field: &[u8], pending: &mut PendingCoordinates) -> Result<(), ExtractError> {
    pending.longitude = Some(parse_coordinate(field)?);
    Ok(())
}

fn commit_latitude(field: &[u8], cx: FieldContext<'_>) -> Result<(), ExtractError> {
    let sign = hemisphere_sign(field)?;
    let magnitude = cx
        .pending
        .latitude
        .take()
        .ok_or(ExtractError::MissingCoordinate)?;
    cx.state.latitude = sign * magnitude;
    Ok(())
}

fn commit_longitude(field: &[u8], cx: FieldContext<'_>) -> Result<(), ExtractError> {
    let sign = hemisphere_sign(field)?;
    let magnitude = cx
        .pending
        .longitude
        .take()
        .ok_or(ExtractError::MissingCoordinate)?;
    cx.state.longitude = sign * magnitude;
    Ok(())
}

fn set_status(field: &[u8], state: &mut NavigationState) -> Result<(), ExtractError> {
    state.locked = match non_empty(field)? {
        b"A" => true,
        b"V" => false,
        _ => return Err(ExtractError::InvalidValue),
    };
    Ok(())
}

// $GPGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B
fn positioning_system_fix(
    index: u8,
    field: &[u8],
    cx: FieldContext<'_>,
) -> Result<(), ExtractError> {
    match index {
        1 => set_time(field, cx.state),
        2 => stash_latitude(field, cx.pending),
        3 => commit_latitude(field, cx),
        4 => stash_longitude(field, cx.pending),
        5 => commit_longitude(field, cx),
        6 => {
            let quality = parse_leading_u8(non_empty(field)?);
            cx.state.fix_type = FixType::from_gga_quality(quality);
            cx.state.locked = quality > 0;
            Ok(())
        }
        7 => {
            cx.state.satellites = parse_leading_u8(non_empty(field)?);
            Ok(())
        }
        8 => {
            cx.state.horizontal_dilution_of_precision = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        9 => {
            cx.state.altitude = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        _ => Err(ExtractError::UnknownField),
    }
}

// $GPGLL,4717.11634,N,00833.91297,E,124923.00,A,A*6E
// $GPGLL,,,,,,V,N*64
fn latitude_and_longitude(
    index: u8,
    field: &[u8],
    cx: FieldContext<'_>,
) -> Result<(), ExtractError> {
    match index {
        1 => stash_latitude(field, cx.pending),
        2 => commit_latitude(field, cx),
        3 => stash_longitude(field, cx.pending),
        4 => commit_longitude(field, cx),
        5 => set_time(field, cx.state),
        6 => set_status(field, cx.state),
        _ => Err(ExtractError::UnknownField),
    }
}

// $GPGSA,A,3,23,29,07,08,09,18,26,28,,,,,1.94,1.18,1.54*0D
fn dop_and_active_satellites(
    index: u8,
    field: &[u8],
    cx: FieldContext<'_>,
) -> Result<(), ExtractError> {
    match index {
        2 => {
            let mode = parse_leading_u8(non_empty(field)?);
            cx.state.fix_type = FixType::from_gsa_mode(mode);
            Ok(())
        }
        16 => {
            cx.state.horizontal_dilution_of_precision = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        17 => {
            cx.state.vertical_dilution_of_precision = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        _ => Err(ExtractError::UnknownField),
    }
}

// $GPGSV,2,1,05,19,,,22,24,,,22,25,,,22,26,,,23*73
// $GPGSV,2,2,05,28,,,21*75
fn satellites_in_view(index: u8, field: &[u8], cx: FieldContext<'_>) -> Result<(), ExtractError> {
    match index {
        GSV_SATELLITES_IN_VIEW_FIELD => {
            // An empty count means none in view
            cx.state.satellites = parse_leading_u8(field);
            Ok(())
        }
        _ => Err(ExtractError::UnknownField),
    }
}

// $GPRMC,083559.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A*57
fn recommended_minimum_data(
    index: u8,
    field: &[u8],
    cx: FieldContext<'_>,
) -> Result<(), ExtractError> {
    match index {
        1 => set_time(field, cx.state),
        2 => set_status(field, cx.state),
        3 => stash_latitude(field, cx.pending),
        4 => commit_latitude(field, cx),
        5 => stash_longitude(field, cx.pending),
        6 => commit_longitude(field, cx),
        7 => {
            cx.state.speed = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        8 => {
            cx.state.course_over_ground = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        9 => {
            let date = parse_date(field)?;
            cx.state.year = date.year;
            cx.state.month = date.month;
            cx.state.day = date.day;
            Ok(())
        }
        _ => Err(ExtractError::UnknownField),
    }
}

// $GPVTG,77.52,T,,M,0.004,N,0.008,K,A*06
fn course_and_ground_speed(
    index: u8,
    field: &[u8],
    cx: FieldContext<'_>,
) -> Result<(), ExtractError> {
    match index {
        1 => {
            cx.state.course_over_ground = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        5 => {
            cx.state.speed = parse_leading_f64(non_empty(field)?);
            Ok(())
        }
        _ => Err(ExtractError::UnknownField),
    }
}

// $GPZDA,082710.00,16,09,2002,00,00*64
fn time_and_date(index: u8, field: &[u8], cx: FieldContext<'_>) -> Result<(), ExtractError> {
    match index {
        1 => set_time(field, cx.state),
        2 => {
            cx.state.day = parse_leading_u8(non_empty(field)?);
            Ok(())
        }
        3 => {
            cx.state.month = parse_leading_u8(non_empty(field)?);
            Ok(())
        }
        4 => {
            cx.state.year = parse_leading_u16(non_empty(field)?);
            Ok(())
        }
        _ => Err(ExtractError::UnknownField),
    }
}

// $GPGST,082356.00,1.8,,,,1.7,1.3,2.2*7E
fn time_stamped_statistics(
    index: u8,
    field: &[u8],
    cx: FieldContext<'_>,
) -> Result<(), ExtractError> {
    match index {
        1 => set_time(field, cx.state),
        _ => Err(ExtractError::UnknownField),
    }
}
