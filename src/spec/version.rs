// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::compression::Compression;

/// Version 1.0: stored entries only.
pub const VERSION_STORED: u16 = 0x000A;

/// Version 2.0: compressed entries.
pub const VERSION_COMPRESSED: u16 = 0x0014;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
//
// Independent of whether the entry carries ZIP64 extra fields.
pub fn as_needed_to_extract(compression: Compression) -> u16 {
    if compression.is_compressed() {
        VERSION_COMPRESSED
    } else {
        VERSION_STORED
    }
}

/// The "version made by" field mirrors the version needed to extract, with a host byte of zero (MS-DOS).
pub fn as_made_by(compression: Compression) -> u16 {
    as_needed_to_extract(compression)
}
