// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The central directory accumulator and end of central directory rendering.

use crate::core::cdr::{self, CentralDirectoryRecord};
use crate::core::eocdr::{self, RawEndOfCentralDirectoryRecord};
use crate::core::zip64::eocdr::{self as zip64_eocdr, RawZip64EndOfCentralDirectoryRecord};
use crate::core::zip64::locator::{self, RawZip64EndOfCentralDirectoryLocator};
use crate::core::zip64::ZIP64_VERSION;
use crate::core::{NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};

/// The central directory built up while entries are written.
///
/// Records are appended in the order their entries were written; the buffer's length is always the directory's
/// size.
#[derive(Clone, Debug, Default)]
pub struct CentralDirectory {
    buffer: Vec<u8>,
    entries: u64,
}

impl CentralDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry's record.
    pub fn append(&mut self, record: &CentralDirectoryRecord) {
        self.buffer.reserve(record.encoded_len());
        cdr::write(&mut self.buffer, record);
        self.entries += 1;
    }

    /// Returns the number of records appended so far.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Returns the size of the directory in bytes.
    pub fn size(&self) -> u64 {
        self.buffer.len() as u64
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Renders the end of central directory structures for this directory, written at `offset`.
    pub fn render_end_of_central_directory(&self, offset: u64, zip64: bool) -> Vec<u8> {
        render_end_of_central_directory(self.entries, offset, self.size(), zip64)
    }
}

/// Returns whether the archive-level counters overflow the classic end of central directory record.
pub fn requires_zip64(entries: u64, offset: u64, size: u64) -> bool {
    entries >= NON_ZIP64_MAX_NUM_FILES as u64 || offset >= NON_ZIP64_MAX_SIZE as u64 || size >= NON_ZIP64_MAX_SIZE as u64
}

/// Renders the trailing structures of an archive whose central directory holds `entries` records, is `size` bytes
/// long, and starts at `offset`.
///
/// In ZIP64 mode (requested, or forced by any counter overflowing) the output is the ZIP64 end of central directory
/// record, its locator, then the classic record with overflowing fields set to their sentinels. Otherwise it is the
/// classic record alone.
#[tracing::instrument]
pub fn render_end_of_central_directory(entries: u64, offset: u64, size: u64, zip64: bool) -> Vec<u8> {
    let zip64 = zip64 || requires_zip64(entries, offset, size);
    let mut buffer = Vec::new();

    if zip64 {
        let record = RawZip64EndOfCentralDirectoryRecord {
            size_of_record: zip64_eocdr::SIZE_OF_RECORD,
            version_made_by: ZIP64_VERSION,
            version_needed: ZIP64_VERSION,
            number_of_this_disk: 0,
            disk_with_start_of_cd: 0,
            total_entries_in_cd_on_this_disk: entries,
            total_entries_in_cd: entries,
            size_of_cd: size,
            offset_start_of_cd: offset,
        };
        zip64_eocdr::write(&mut buffer, &record);

        // The ZIP64 record immediately follows the central directory.
        let locator = RawZip64EndOfCentralDirectoryLocator {
            disk_with_start_eocdr: 0,
            relative_offset_eocdr: offset + size,
            total_disks: 1,
        };
        locator::write(&mut buffer, &locator);
    }

    let entries = u16::try_from(entries).ok().filter(|count| *count < NON_ZIP64_MAX_NUM_FILES);
    let entries = entries.unwrap_or(NON_ZIP64_MAX_NUM_FILES);

    let classic = RawEndOfCentralDirectoryRecord {
        number_of_this_disk: 0,
        number_of_the_disk_with_the_start_of_the_central_directory: 0,
        total_number_of_entries_in_the_central_directory_on_this_disk: entries,
        total_number_of_entries_in_the_central_directory: entries,
        size_of_the_central_directory: sentinel_u32(size),
        offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number: sentinel_u32(offset),
        zip_file_comment_length: 0,
    };
    eocdr::write(&mut buffer, &classic);

    buffer
}

fn sentinel_u32(value: u64) -> u32 {
    u32::try_from(value).ok().filter(|value| *value < NON_ZIP64_MAX_SIZE).unwrap_or(NON_ZIP64_MAX_SIZE)
}
