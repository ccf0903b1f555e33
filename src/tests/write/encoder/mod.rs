// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::write::encoder::{encode, EntryMetadata};
use crate::core::NON_ZIP64_MAX_SIZE;
use crate::error::ZipError;
use crate::{Compression, ZipDateTime};

const FIVE_GIB: u64 = 5 * 1024 * 1024 * 1024;

pub(crate) fn stub(name: &str, size: u64, compression: Compression) -> EntryMetadata {
    EntryMetadata {
        file_name: name.as_bytes().to_vec(),
        compression,
        uncompressed_size: size,
        compressed_size: size,
        crc32: 0xDEAD_BEEF,
        date_time: ZipDateTime::default(),
    }
}

fn u16_at(buffer: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buffer[at], buffer[at + 1]])
}

fn u32_at(buffer: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(buffer[at..at + 4].try_into().unwrap())
}

fn u64_at(buffer: &[u8], at: usize) -> u64 {
    u64::from_le_bytes(buffer[at..at + 8].try_into().unwrap())
}

#[test]
fn small_stored_entry() {
    let metadata = stub("hello.txt", 10, Compression::Stored);
    let encoded = encode(&metadata, 0).expect("failed to encode entry");

    assert!(!encoded.needs_zip64());
    assert_eq!(encoded.data_length, 10);
    assert_eq!(encoded.bytes_written(), 30 + 9 + 10);

    let header = encoded.local_header_bytes();
    assert_eq!(header.len(), 30 + 9);
    assert_eq!(u32_at(&header, 0), 0x04034b50);
    assert_eq!(u16_at(&header, 4), 0x0A);
    assert_eq!(u16_at(&header, 6), 0);
    assert_eq!(u16_at(&header, 8), 0);
    assert_eq!(u32_at(&header, 14), 0xDEAD_BEEF);
    assert_eq!(u32_at(&header, 18), 10);
    assert_eq!(u32_at(&header, 22), 10);
    assert_eq!(u16_at(&header, 26), 9);
    assert_eq!(u16_at(&header, 28), 0);
    assert_eq!(&header[30..], b"hello.txt");

    let record = &encoded.central_record;
    assert_eq!(record.version_made_by, 0x0A);
    assert_eq!(record.version_needed_to_extract, 0x0A);
    assert_eq!(record.external_file_attributes, 0x20);
    assert_eq!(record.relative_offset_of_local_header, 0);
    assert_eq!(record.compressed_size, 10);
    assert!(record.extra_field.is_empty());
    assert_eq!(record.encoded_len(), 46 + 9);
}

#[test]
fn five_gibibyte_stored_entry() {
    let metadata = stub("big.bin", FIVE_GIB, Compression::Stored);
    let encoded = encode(&metadata, 0).expect("failed to encode entry");

    assert!(encoded.needs_zip64());

    let local = &encoded.local_header;
    assert_eq!(local.compressed_size, NON_ZIP64_MAX_SIZE);
    assert_eq!(local.uncompressed_size, NON_ZIP64_MAX_SIZE);
    assert_eq!(local.extra_field_length, 20);
    assert_eq!(u16_at(&local.extra_field, 0), 0x0001);
    assert_eq!(u16_at(&local.extra_field, 2), 16);
    assert_eq!(u64_at(&local.extra_field, 4), FIVE_GIB);
    assert_eq!(u64_at(&local.extra_field, 12), FIVE_GIB);

    // Two 32-bit words, low first.
    assert_eq!(u32_at(&local.extra_field, 4), 0x4000_0000);
    assert_eq!(u32_at(&local.extra_field, 8), 1);

    let central = &encoded.central_record;
    assert_eq!(central.compressed_size, NON_ZIP64_MAX_SIZE);
    assert_eq!(central.uncompressed_size, NON_ZIP64_MAX_SIZE);
    assert_eq!(central.relative_offset_of_local_header, 0);
    assert_eq!(central.extra_field_length, 20);
    assert_eq!(u16_at(&central.extra_field, 2), 16);
}

#[cfg(feature = "deflate")]
#[test]
fn extra_field_orders_differ() {
    let mut metadata = stub("big.bin", FIVE_GIB, Compression::Deflate);
    metadata.compressed_size = FIVE_GIB - 1024;

    let encoded = encode(&metadata, 0).expect("failed to encode entry");

    // Local: compressed, then uncompressed.
    assert_eq!(u64_at(&encoded.local_header.extra_field, 4), FIVE_GIB - 1024);
    assert_eq!(u64_at(&encoded.local_header.extra_field, 12), FIVE_GIB);

    // Central: uncompressed, then compressed.
    assert_eq!(u64_at(&encoded.central_record.extra_field, 4), FIVE_GIB);
    assert_eq!(u64_at(&encoded.central_record.extra_field, 12), FIVE_GIB - 1024);
}

#[test]
fn boundary_size_only_overflows_central_record() {
    let metadata = stub("edge.bin", NON_ZIP64_MAX_SIZE as u64, Compression::Stored);
    let encoded = encode(&metadata, 0).expect("failed to encode entry");

    assert!(encoded.local_header.extra_field.is_empty());
    assert_eq!(encoded.local_header.compressed_size, NON_ZIP64_MAX_SIZE);

    assert_eq!(encoded.central_record.extra_field.len(), 4 + 16);
    assert!(encoded.needs_zip64());
}

#[test]
fn large_offset_only() {
    let offset = 6 * 1024 * 1024 * 1024;
    let metadata = stub("late.txt", 10, Compression::Stored);
    let encoded = encode(&metadata, offset).expect("failed to encode entry");

    assert!(encoded.local_header.extra_field.is_empty());
    assert_eq!(encoded.central_record.relative_offset_of_local_header, NON_ZIP64_MAX_SIZE);
    assert_eq!(encoded.central_record.compressed_size, 10);
    assert_eq!(encoded.central_record.extra_field.len(), 4 + 8);
    assert_eq!(u64_at(&encoded.central_record.extra_field, 4), offset);
    assert_eq!(encoded.offset, offset);
}

#[cfg(feature = "deflate")]
#[test]
fn empty_payload_forced_to_stored() {
    let metadata = stub("empty.txt", 0, Compression::Deflate);
    let encoded = encode(&metadata, 0).expect("failed to encode entry");

    assert_eq!(metadata.effective_compression(), Compression::Stored);
    assert_eq!(encoded.local_header.compression_method, 0);
    assert_eq!(encoded.local_header.version_needed_to_extract, 0x0A);
    assert_eq!(encoded.central_record.compression_method, 0);
}

#[cfg(feature = "deflate")]
#[test]
fn compressed_entry_versions() {
    let mut metadata = stub("notes.txt", 1000, Compression::Deflate);
    metadata.compressed_size = 300;

    let encoded = encode(&metadata, 0).expect("failed to encode entry");
    assert_eq!(encoded.local_header.compression_method, 8);
    assert_eq!(encoded.local_header.version_needed_to_extract, 0x14);
    assert_eq!(encoded.central_record.version_made_by, 0x14);
    assert_eq!(encoded.data_length, 300);
}

#[test]
fn file_name_too_large() {
    let name = "a".repeat(u16::MAX as usize + 1);
    let metadata = stub(&name, 10, Compression::Stored);

    assert!(matches!(encode(&metadata, 0), Err(ZipError::FileNameTooLarge(len)) if len == u16::MAX as usize + 1));
}
