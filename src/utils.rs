// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// Splits an unsigned 64-bit value into its `(low, high)` 32-bit words.
pub fn split_u64(value: u64) -> (u32, u32) {
    let low = (value & 0xFFFF_FFFF) as u32;
    let high = (value >> 32) as u32;
    (low, high)
}

/// Appends a little-endian u16 to the buffer.
pub(crate) fn write_u16(buffer: &mut Vec<u8>, value: u16) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

/// Appends a little-endian u32 to the buffer.
pub(crate) fn write_u32(buffer: &mut Vec<u8>, value: u32) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

/// Appends a u64 to the buffer as two little-endian 32-bit words, low word first.
pub(crate) fn write_u64(buffer: &mut Vec<u8>, value: u64) {
    let (low, high) = split_u64(value);
    write_u32(buffer, low);
    write_u32(buffer, high);
}

/// Narrows a 32-bit field, substituting the ZIP64 sentinel when `overflow` holds.
pub(crate) fn u32_or_sentinel(value: u64, overflow: bool) -> u32 {
    if overflow {
        crate::core::NON_ZIP64_MAX_SIZE
    } else {
        value as u32
    }
}
