// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::date::MIN_YEAR;
use crate::ZipDateTime;

/// A builder for [`ZipDateTime`].
///
/// Each setter replaces the bits the MS-DOS layout reserves for its component, so setters may be called in any
/// order and repeatedly. Out-of-range components are truncated to their bit width rather than rejected; use
/// [`ZipDateTime::from_naive`] for clamped conversion from a calendar value.
#[derive(Debug, Clone, Copy)]
pub struct ZipDateTimeBuilder(pub(crate) ZipDateTime);

/// Replaces `width` bits of `word` starting at `shift` with the low bits of `value`.
fn with_bits(word: u16, shift: u16, width: u16, value: u32) -> u16 {
    let mask = ((1u16 << width) - 1) << shift;
    (word & !mask) | (((value as u16) << shift) & mask)
}

impl From<ZipDateTime> for ZipDateTimeBuilder {
    fn from(date: ZipDateTime) -> Self {
        Self(date)
    }
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipDateTimeBuilder {
    /// Constructs a new builder with every component zeroed.
    pub fn new() -> Self {
        Self(ZipDateTime { date: 0, time: 0 })
    }

    /// Sets the year; years outside 1980..=2107 are clamped.
    pub fn year(mut self, year: i32) -> Self {
        let offset = (year - MIN_YEAR).clamp(0, 0x7F) as u32;
        self.0.date = with_bits(self.0.date, 9, 7, offset);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.0.date = with_bits(self.0.date, 5, 4, month);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.0.date = with_bits(self.0.date, 0, 5, day);
        self
    }

    pub fn hour(mut self, hour: u32) -> Self {
        self.0.time = with_bits(self.0.time, 11, 5, hour);
        self
    }

    pub fn minute(mut self, minute: u32) -> Self {
        self.0.time = with_bits(self.0.time, 5, 6, minute);
        self
    }

    /// Sets the second, truncated to a multiple of two (the format's resolution).
    pub fn second(mut self, second: u32) -> Self {
        self.0.time = with_bits(self.0.time, 0, 5, second >> 1);
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use streamzip::{ZipDateTime, ZipDateTimeBuilder};
    /// #
    /// # let builder = ZipDateTimeBuilder::new().year(2024).month(3).day(2);
    /// let date: ZipDateTime = builder.into();
    /// ```
    pub fn build(self) -> ZipDateTime {
        self.into()
    }
}
