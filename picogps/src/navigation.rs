// SPDX-License-Identifier: Apache-2.0

//! The last-known-good navigation values.
//!
//! Every field is written independently by whichever sentence carries it, so a
//! reader may see a position from one sentence next to a time from another.
//! Nothing here is ever reset to its default once written.

/// Quality of the position fix as last reported by the receiver.
///
/// `GGA` reports the fix source, `GSA` reports its dimension; whichever was
/// decoded last wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixType {
    #[default]
    NoFix,
    /// Standard GNSS fix.
    Gps,
    /// Differential GNSS fix.
    Differential,
    /// Precise positioning service fix.
    Pps,
    /// Real time kinematic, fixed integers.
    RtkFixed,
    /// Real time kinematic, float integers.
    RtkFloat,
    /// Estimated by dead reckoning.
    DeadReckoning,
    /// Position entered manually.
    Manual,
    /// Simulator output.
    Simulation,
    /// Two-dimensional fix.
    Fix2D,
    /// Three-dimensional fix.
    Fix3D,
}

impl FixType {
    /// Maps the `GGA` fix quality indicator.
    pub fn from_gga_quality(quality: u8) -> FixType {
        match quality {
            1 => FixType::Gps,
            2 => FixType::Differential,
            3 => FixType::Pps,
            4 => FixType::RtkFixed,
            5 => FixType::RtkFloat,
            6 => FixType::DeadReckoning,
            7 => FixType::Manual,
            8 => FixType::Simulation,
            _ => FixType::NoFix,
        }
    }

    /// Maps the `GSA` navigation mode.
    pub fn from_gsa_mode(mode: u8) -> FixType {
        match mode {
            2 => FixType::Fix2D,
            3 => FixType::Fix3D,
            _ => FixType::NoFix,
        }
    }
}

/// Navigation values decoded from the stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) altitude: f64,
    pub(crate) speed: f64,
    pub(crate) fix_type: FixType,
    pub(crate) satellites: u8,
    pub(crate) course_over_ground: f64,
    pub(crate) vertical_speed_indicator: f64,
    pub(crate) horizontal_dilution_of_precision: f64,
    pub(crate) vertical_dilution_of_precision: f64,
    pub(crate) year: u16,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) locked: bool,
}

impl NavigationState {
    pub const fn new() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
            speed: 0.0,
            fix_type: FixType::NoFix,
            satellites: 0,
            course_over_ground: 0.0,
            vertical_speed_indicator: 0.0,
            horizontal_dilution_of_precision: 0.0,
            vertical_dilution_of_precision: 0.0,
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            locked: false,
        }
    }

    /// Latitude in decimal degrees, negative south of the equator.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees, negative west of Greenwich.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude above mean sea level, in metres.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Speed over ground, in knots.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn fix_type(&self) -> FixType {
        self.fix_type
    }

    pub fn satellites(&self) -> u8 {
        self.satellites
    }

    /// Course over ground, degrees true.
    pub fn course_over_ground(&self) -> f64 {
        self.course_over_ground
    }

    pub fn vertical_speed_indicator(&self) -> f64 {
        self.vertical_speed_indicator
    }

    pub fn horizontal_dilution_of_precision(&self) -> f64 {
        self.horizontal_dilution_of_precision
    }

    pub fn vertical_dilution_of_precision(&self) -> f64 {
        self.vertical_dilution_of_precision
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Whether the receiver currently reports a valid fix.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The decoded UTC date, if the stored fields form a real calendar date.
    #[cfg(feature = "chrono")]
    pub fn utc_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// The decoded UTC time of day.
    #[cfg(feature = "chrono")]
    pub fn utc_time(&self) -> Option<chrono::NaiveTime> {
        chrono::NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
    }

    /// The decoded UTC date and time combined.
    #[cfg(feature = "chrono")]
    pub fn utc_datetime(&self) -> Option<chrono::NaiveDateTime> {
        Some(chrono::NaiveDateTime::new(self.utc_date()?, self.utc_time()?))
    }
}
