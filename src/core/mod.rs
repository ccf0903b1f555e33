// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Raw on-disk structures and their little-endian encoders.
//!
//! Each structure lives in its own module and is split into a fixed-size `Raw*` part (generated by [`raw!`]) and
//! an owning wrapper which carries any variable-length trailing data (file names, extra fields).

pub mod cdr;
pub mod edf;
pub mod eocdr;
pub mod lfh;
pub mod zip64;

/// The length in bytes of a signature. All signatures are u32s, so 4 bytes long.
pub const SIGNATURE_LENGTH: usize = 4;

/// The sentinel stored in a 32-bit size or offset field whose real value lives in a ZIP64 extra field.
pub const NON_ZIP64_MAX_SIZE: u32 = 0xFFFFFFFF;

/// The sentinel stored in a 16-bit entry count whose real value lives in the ZIP64 end of central directory record.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = 0xFFFF;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty, $write:expr),* }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        impl $name {
            /// The encoded length of the raw header in bytes, excluding its signature.
            pub const LENGTH: usize = 0 $(+ std::mem::size_of::<$type>())*;
        }

        /// Writes the raw underlying header to the given buffer.
        pub fn raw_write(buffer: &mut Vec<u8>, raw: &$name) {
            $($write(buffer, raw.$field);)*
        }
    }
}

macro_rules! raw_deref {
    ($from:ident, $to:ident) => {
        use std::ops::{Deref, DerefMut};

        impl Deref for $from {
            type Target = $to;

            fn deref(&self) -> &Self::Target {
                &self.raw
            }
        }

        impl DerefMut for $from {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.raw
            }
        }
    };
}

pub(crate) use raw;
pub(crate) use raw_deref;
