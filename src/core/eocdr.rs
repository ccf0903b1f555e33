// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::utils::{write_u16, write_u32};

pub const SIGNATURE: u32 = 0x06054b50;

raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk , u16, write_u16,
        number_of_the_disk_with_the_start_of_the_central_directory, u16, write_u16,
        total_number_of_entries_in_the_central_directory_on_this_disk, u16, write_u16,
        total_number_of_entries_in_the_central_directory, u16, write_u16,
        size_of_the_central_directory, u32, write_u32,
        offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number, u32, write_u32,
        zip_file_comment_length, u16, write_u16
    }
}

/// Writes the end of central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the end of central directory record
/// - writing the raw end of central directory record
///
/// Archive comments are never written, so the comment length must be zero.
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, raw: &RawEndOfCentralDirectoryRecord) {
    debug_assert_eq!(raw.zip_file_comment_length, 0);

    write_u32(buffer, SIGNATURE);
    raw_write(buffer, raw);
}
