// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Transcoding of entry names into the archive's legacy code page (IBM850).
//!
//! Entries are written without the UTF-8 general purpose flag, so readers interpret names as an OEM code page.
//! Characters with no IBM850 representation are dropped, and leading path separators are stripped so every
//! archive path is relative.

/// IBM850 code points 0x80..=0xFF, in order.
const CP850_HIGH: [char; 128] = [
    '\u{00c7}', '\u{00fc}', '\u{00e9}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e5}', '\u{00e7}', // 0x80
    '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ef}', '\u{00ee}', '\u{00ec}', '\u{00c4}', '\u{00c5}', // 0x88
    '\u{00c9}', '\u{00e6}', '\u{00c6}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00fb}', '\u{00f9}', // 0x90
    '\u{00ff}', '\u{00d6}', '\u{00dc}', '\u{00f8}', '\u{00a3}', '\u{00d8}', '\u{00d7}', '\u{0192}', // 0x98
    '\u{00e1}', '\u{00ed}', '\u{00f3}', '\u{00fa}', '\u{00f1}', '\u{00d1}', '\u{00aa}', '\u{00ba}', // 0xa0
    '\u{00bf}', '\u{00ae}', '\u{00ac}', '\u{00bd}', '\u{00bc}', '\u{00a1}', '\u{00ab}', '\u{00bb}', // 0xa8
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{00c1}', '\u{00c2}', '\u{00c0}', // 0xb0
    '\u{00a9}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255d}', '\u{00a2}', '\u{00a5}', '\u{2510}', // 0xb8
    '\u{2514}', '\u{2534}', '\u{252c}', '\u{251c}', '\u{2500}', '\u{253c}', '\u{00e3}', '\u{00c3}', // 0xc0
    '\u{255a}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256c}', '\u{00a4}', // 0xc8
    '\u{00f0}', '\u{00d0}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{0131}', '\u{00cd}', '\u{00ce}', // 0xd0
    '\u{00cf}', '\u{2518}', '\u{250c}', '\u{2588}', '\u{2584}', '\u{00a6}', '\u{00cc}', '\u{2580}', // 0xd8
    '\u{00d3}', '\u{00df}', '\u{00d4}', '\u{00d2}', '\u{00f5}', '\u{00d5}', '\u{00b5}', '\u{00fe}', // 0xe0
    '\u{00de}', '\u{00da}', '\u{00db}', '\u{00d9}', '\u{00fd}', '\u{00dd}', '\u{00af}', '\u{00b4}', // 0xe8
    '\u{00ad}', '\u{00b1}', '\u{2017}', '\u{00be}', '\u{00b6}', '\u{00a7}', '\u{00f7}', '\u{00b8}', // 0xf0
    '\u{00b0}', '\u{00a8}', '\u{00b7}', '\u{00b9}', '\u{00b3}', '\u{00b2}', '\u{25a0}', '\u{00a0}', // 0xf8
];

/// Maps a single character to its IBM850 byte, if it has one.
pub fn to_cp850(c: char) -> Option<u8> {
    if c.is_ascii() {
        return Some(c as u8);
    }

    CP850_HIGH.iter().position(|high| *high == c).map(|index| 0x80 + index as u8)
}

/// Encodes an entry name for storage in the archive.
///
/// Unrepresentable characters are dropped, then any leading `/` (and `\`, which some platforms hand us) is
/// stripped.
pub fn encode_file_name(name: &str) -> Vec<u8> {
    let encoded: Vec<u8> = name.chars().filter_map(to_cp850).collect();
    let start = encoded.iter().position(|byte| *byte != b'/' && *byte != b'\\').unwrap_or(encoded.len());

    if start > 0 {
        tracing::trace!(name, stripped = start, "stripped leading separators from entry name");
    }

    encoded[start..].to_vec()
}
