// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};

use self::builder::ZipDateTimeBuilder;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

/// The earliest year representable by an MS-DOS date.
pub const MIN_YEAR: i32 = 1980;

/// The latest year representable by an MS-DOS date (seven bits of year offset).
pub const MAX_YEAR: i32 = 2107;

/// A date and time stored as per the MS-DOS representation used by ZIP files.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl Default for ZipDateTime {
    /// 1980-01-01 00:00:00, the MS-DOS epoch.
    fn default() -> Self {
        ZipDateTimeBuilder::new().year(MIN_YEAR).month(1).day(1).build()
    }
}

impl ZipDateTime {
    /// Encodes the current local time.
    pub fn now() -> Self {
        Self::from_naive(&Local::now().naive_local())
    }

    /// Encodes a calendar timestamp.
    ///
    /// Timestamps before 1980-01-01 00:00:00 are clamped to that instant, and timestamps after the end of 2107 are
    /// clamped to the last representable instant. Seconds are truncated to a multiple of two.
    pub fn from_naive(value: &NaiveDateTime) -> Self {
        if value.year() < MIN_YEAR {
            return Self::default();
        }
        if value.year() > MAX_YEAR {
            return ZipDateTimeBuilder::new().year(MAX_YEAR).month(12).day(31).hour(23).minute(59).second(58).build();
        }

        ZipDateTimeBuilder::new()
            .year(value.year())
            .month(value.month())
            .day(value.day())
            .hour(value.hour())
            .minute(value.minute())
            .second(value.second())
            .build()
    }

    /// Returns the raw MS-DOS date word.
    pub fn date(&self) -> u16 {
        self.date
    }

    /// Returns the raw MS-DOS time word.
    pub fn time(&self) -> u16 {
        self.time
    }

    /// Returns the packed 32-bit form, date in the high word and time in the low word.
    pub fn as_dos_u32(&self) -> u32 {
        (u32::from(self.date) << 16) | u32::from(self.time)
    }

    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Constructs chrono's [`DateTime`] representation of this date & time.
    pub fn as_chrono(&self) -> LocalResult<DateTime<Utc>> {
        self.into()
    }

    /// Constructs this date & time from chrono's [`DateTime`] representation.
    pub fn from_chrono(dt: &DateTime<Utc>) -> Self {
        dt.into()
    }
}

impl From<ZipDateTimeBuilder> for ZipDateTime {
    fn from(builder: ZipDateTimeBuilder) -> Self {
        builder.0
    }
}

impl From<&DateTime<Utc>> for ZipDateTime {
    fn from(value: &DateTime<Utc>) -> Self {
        Self::from_naive(&value.naive_utc())
    }
}

impl From<&ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: &ZipDateTime) -> Self {
        Utc.with_ymd_and_hms(value.year(), value.month(), value.day(), value.hour(), value.minute(), value.second())
    }
}

impl From<DateTime<Utc>> for ZipDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        (&value).into()
    }
}

impl From<ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: ZipDateTime) -> Self {
        (&value).into()
    }
}
