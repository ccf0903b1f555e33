// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::utils::{write_u16, write_u32, write_u64};

pub const SIGNATURE: u32 = 0x06064b50;

/// The value of the record's size field: fixed fields only, less the leading signature and size field (56 - 12).
pub const SIZE_OF_RECORD: u64 = 44;

raw! {
    RawZip64EndOfCentralDirectoryRecord {
        // size of zip64 end of central directory record - 8 bytes
        size_of_record, u64, write_u64,
        // version made by - 2 bytes
        version_made_by, u16, write_u16,
        // version needed to extract - 2 bytes
        version_needed, u16, write_u16,
        // number of this disk - 4 bytes
        number_of_this_disk, u32, write_u32,
        // number of the disk with the start of the central directory - 4 bytes
        disk_with_start_of_cd, u32, write_u32,
        // total number of entries in the central directory on this disk - 8 bytes
        total_entries_in_cd_on_this_disk, u64, write_u64,
        // total number of entries in the central directory - 8 bytes
        total_entries_in_cd, u64, write_u64,
        // size of the central directory - 8 bytes
        size_of_cd, u64, write_u64,
        // offset of start of central directory with respect to the starting disk number - 8 bytes
        offset_start_of_cd, u64, write_u64
    }
}

/// Writes the ZIP64 end of central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the ZIP64 end of central directory record
/// - writing the raw ZIP64 end of central directory record
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, raw: &RawZip64EndOfCentralDirectoryRecord) {
    write_u32(buffer, SIGNATURE);
    raw_write(buffer, raw);
}
