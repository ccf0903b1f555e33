// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref};
use crate::utils::write_u16;

raw! {
    RawExtensibleDataField {
        // Head ID - 2 bytes
        header_id, u16, write_u16,
        // Data Size - 2 bytes
        data_size, u16, write_u16
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensibleDataField {
    pub raw: RawExtensibleDataField,
    pub data: Vec<u8>,
}

raw_deref!(ExtensibleDataField, RawExtensibleDataField);

impl ExtensibleDataField {
    /// Returns the encoded length of this field, header included.
    pub fn encoded_len(&self) -> usize {
        RawExtensibleDataField::LENGTH + self.data.len()
    }

    /// Encodes this field into a freshly allocated buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.encoded_len());
        write(&mut buffer, self);
        buffer
    }
}

/// Writes an extensible data field to the provided buffer.
///
/// This function does so by:
/// - writing the raw extensible data field
/// - writing the data of the extensible data field
pub fn write(buffer: &mut Vec<u8>, field: &ExtensibleDataField) {
    raw_write(buffer, &field.raw);
    buffer.extend_from_slice(&field.data);
}
