// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::str::FromStr;

use crate::error::{ConfigError, ZipError};

/// A compression method supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Stored,
    #[cfg(feature = "deflate")]
    Deflate,
    #[cfg(feature = "bzip2")]
    Bz,
}

impl Compression {
    /// Returns whether entries written with this method pass through the compression backend.
    pub fn is_compressed(&self) -> bool {
        !matches!(self, Compression::Stored)
    }
}

impl TryFrom<u16> for Compression {
    type Error = ZipError;

    // Convert a u16 stored with little endianness into a supported compression method.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn try_from(value: u16) -> Result<Self, ZipError> {
        match value {
            0 => Ok(Compression::Stored),
            #[cfg(feature = "deflate")]
            8 => Ok(Compression::Deflate),
            #[cfg(not(feature = "deflate"))]
            8 => Err(ConfigError::CompressionUnavailable("deflate").into()),
            #[cfg(feature = "bzip2")]
            12 => Ok(Compression::Bz),
            #[cfg(not(feature = "bzip2"))]
            12 => Err(ConfigError::CompressionUnavailable("bzip2").into()),
            _ => Err(ConfigError::UnsupportedCompression(value).into()),
        }
    }
}

impl FromStr for Compression {
    type Err = ZipError;

    fn from_str(value: &str) -> Result<Self, ZipError> {
        match value.to_ascii_lowercase().as_str() {
            "store" | "stored" => Ok(Compression::Stored),
            #[cfg(feature = "deflate")]
            "deflate" => Ok(Compression::Deflate),
            #[cfg(not(feature = "deflate"))]
            "deflate" => Err(ConfigError::CompressionUnavailable("deflate").into()),
            #[cfg(feature = "bzip2")]
            "bzip2" | "bz" => Ok(Compression::Bz),
            #[cfg(not(feature = "bzip2"))]
            "bzip2" | "bz" => Err(ConfigError::CompressionUnavailable("bzip2").into()),
            _ => Err(ConfigError::UnknownCompression(value.to_string()).into()),
        }
    }
}

impl From<&Compression> for u16 {
    // Convert a supported compression method into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn from(compression: &Compression) -> u16 {
        match compression {
            Compression::Stored => 0,
            #[cfg(feature = "deflate")]
            Compression::Deflate => 8,
            #[cfg(feature = "bzip2")]
            Compression::Bz => 12,
        }
    }
}

impl From<Compression> for u16 {
    fn from(compression: Compression) -> u16 {
        (&compression).into()
    }
}
