// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::utils::{write_u32, write_u64};

pub const SIGNATURE: u32 = 0x07064b50;

raw! {
    RawZip64EndOfCentralDirectoryLocator {
        // number of the disk with the start of the zip64 end of central directory - 4 bytes
        disk_with_start_eocdr, u32, write_u32,
        // relative offset of the zip64 end of central directory record - 8 bytes
        relative_offset_eocdr, u64, write_u64,
        // total number of disks - 4 bytes
        total_disks, u32, write_u32
    }
}

/// Writes the ZIP64 end of central directory locator to the given buffer.
///
/// This function does so by:
/// - writing the signature of the ZIP64 end of central directory locator
/// - writing the raw ZIP64 end of central directory locator
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, raw: &RawZip64EndOfCentralDirectoryLocator) {
    write_u32(buffer, SIGNATURE);
    raw_write(buffer, raw);
}
