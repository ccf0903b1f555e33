// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref, SIGNATURE_LENGTH};
use crate::utils::write_u16;
use crate::utils::write_u32;

pub const SIGNATURE: u32 = 0x04034b50;

raw! {
    RawLocalFileHeader {
        version_needed_to_extract, u16, write_u16,
        general_purpose_flags, u16, write_u16,
        compression_method, u16, write_u16,
        last_mod_file_time, u16, write_u16,
        last_mod_file_date, u16, write_u16,
        crc_32, u32, write_u32,
        compressed_size, u32, write_u32,
        uncompressed_size, u32, write_u32,
        file_name_length, u16, write_u16,
        extra_field_length, u16, write_u16
    }
}

#[derive(Clone, Debug)]
pub struct LocalFileHeader {
    pub raw: RawLocalFileHeader,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
}

raw_deref!(LocalFileHeader, RawLocalFileHeader);

impl LocalFileHeader {
    /// Returns the number of bytes this header occupies in the archive, signature included.
    pub fn encoded_len(&self) -> usize {
        SIGNATURE_LENGTH + RawLocalFileHeader::LENGTH + self.file_name.len() + self.extra_field.len()
    }
}

/// Writes a local file header to the given buffer.
///
/// This function does so by:
/// - writing the signature of the local file header
/// - writing the raw local file header
/// - writing the file name
/// - writing the extra field
#[tracing::instrument(skip(buffer))]
pub fn write(buffer: &mut Vec<u8>, header: &LocalFileHeader) {
    write_u32(buffer, SIGNATURE);

    raw_write(buffer, &header.raw);
    buffer.extend_from_slice(&header.file_name);
    buffer.extend_from_slice(&header.extra_field);
}
