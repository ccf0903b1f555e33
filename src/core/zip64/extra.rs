// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The ZIP64 extended information extra field (header ID 0x0001).
//!
//! Only the fields whose 32-bit counterpart overflowed are carried, each as a 64-bit little-endian value. The
//! order differs between the two places the field appears, and readers in the wild depend on both orders:
//! - local file header: compressed size, uncompressed size
//! - central directory record: uncompressed size, compressed size, local header offset

use crate::core::edf::{ExtensibleDataField, RawExtensibleDataField};
use crate::utils::write_u64;

pub const HEADER_ID: u16 = 0x0001;

/// Builds the extra field for a local file header, or `None` if neither size overflowed.
pub fn local(compressed_size: Option<u64>, uncompressed_size: Option<u64>) -> Option<ExtensibleDataField> {
    build(&[compressed_size, uncompressed_size])
}

/// Builds the extra field for a central directory record, or `None` if nothing overflowed.
pub fn central(
    uncompressed_size: Option<u64>,
    compressed_size: Option<u64>,
    relative_header_offset: Option<u64>,
) -> Option<ExtensibleDataField> {
    build(&[uncompressed_size, compressed_size, relative_header_offset])
}

fn build(values: &[Option<u64>]) -> Option<ExtensibleDataField> {
    let mut data = Vec::with_capacity(values.len() * 8);
    for value in values.iter().flatten() {
        write_u64(&mut data, *value);
    }

    if data.is_empty() {
        return None;
    }

    // At most three u64s, so the size always fits.
    let raw = RawExtensibleDataField { header_id: HEADER_ID, data_size: data.len() as u16 };
    Some(ExtensibleDataField { raw, data })
}
