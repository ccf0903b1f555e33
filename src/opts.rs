// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::level::CompressionLevel;
use crate::Compression;

/// When added files are encoded into the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Each file is compressed and written as soon as it is added.
    ///
    /// Preferable when streaming to stdout, as output starts flowing immediately.
    #[default]
    Immediate,
    /// Files are queued when added and written in insertion order by `create_archive()`.
    Deferred,
}

/// Archive-wide settings fixed when a session is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub(crate) compression: Compression,
    pub(crate) mode: WriteMode,
    pub(crate) level: CompressionLevel,
}

impl ArchiveOptions {
    /// Constructs options for the given method, writing immediately at the default level (4).
    pub fn new(compression: Compression) -> Self {
        ArchiveOptions { compression, mode: WriteMode::default(), level: CompressionLevel::default() }
    }

    /// Sets when added files are written.
    pub fn mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the compression level; values outside 1..=9 are clamped.
    pub fn compression_level(mut self, level: impl Into<CompressionLevel>) -> Self {
        self.level = level.into();
        self
    }
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self::new(Compression::Stored)
    }
}
