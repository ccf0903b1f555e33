// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// Effort the compression backend spends on each entry, from 1 (fastest) to 9 (smallest output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    pub const FASTEST: CompressionLevel = CompressionLevel(1);
    pub const BEST: CompressionLevel = CompressionLevel(9);

    /// Constructs a level, clamping values outside 1..=9 to the nearest bound.
    pub fn new(level: i32) -> Self {
        Self(level.clamp(1, 9) as u8)
    }

    /// Returns the numeric level.
    pub fn get(&self) -> u8 {
        self.0
    }

    #[cfg(any(feature = "deflate", feature = "bzip2"))]
    pub(crate) fn into_level(self) -> async_compression::Level {
        async_compression::Level::Precise(i32::from(self.0))
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self(4)
    }
}

impl From<i32> for CompressionLevel {
    fn from(level: i32) -> Self {
        Self::new(level)
    }
}
