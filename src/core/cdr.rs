// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};
use crate::utils::write_u16;
use crate::utils::write_u32;

pub const SIGNATURE: u32 = 0x02014b50;

/// The MS-DOS "archive" attribute, set on every entry this crate writes.
pub const ARCHIVE_ATTRIBUTE: u32 = 0x00000020;

raw! {
    RawCentralDirectoryRecord {
        version_made_by, u16, write_u16,
        version_needed_to_extract, u16, write_u16,
        general_purpose_bit_flag, u16, write_u16,
        compression_method, u16, write_u16,
        last_mod_file_time, u16, write_u16,
        last_mod_file_date, u16, write_u16,
        crc_32, u32, write_u32,
        compressed_size, u32, write_u32,
        uncompressed_size, u32, write_u32,
        file_name_length, u16, write_u16,
        extra_field_length, u16, write_u16,
        file_comment_length, u16, write_u16,
        disk_number_start, u16, write_u16,
        internal_file_attributes, u16, write_u16,
        external_file_attributes, u32, write_u32,
        relative_offset_of_local_header, u32, write_u32
    }
}

#[derive(Clone, Debug)]
pub struct CentralDirectoryRecord {
    pub raw: RawCentralDirectoryRecord,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
}

raw_deref!(CentralDirectoryRecord, RawCentralDirectoryRecord);

impl CentralDirectoryRecord {
    /// Returns the number of bytes this record occupies in the central directory, signature included.
    pub fn encoded_len(&self) -> usize {
        SIGNATURE_LENGTH + RawCentralDirectoryRecord::LENGTH + self.file_name.len() + self.extra_field.len()
    }
}

/// Writes a central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the central directory record
/// - writing the raw central directory record
/// - writing the file name
/// - writing the extra field
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, header: &CentralDirectoryRecord) {
    write_u32(buffer, SIGNATURE);

    raw_write(buffer, &header.raw);
    buffer.extend_from_slice(&header.file_name);
    buffer.extend_from_slice(&header.extra_field);
}
