// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod eocdr;
pub mod extra;
pub mod locator;

/// Version 4.5, the first to define ZIP64 structures.
pub const ZIP64_VERSION: u16 = 0x002d;
