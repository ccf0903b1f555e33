// Copyright Cognite AS, 2023

use crate::base::write::directory::CentralDirectory;
use crate::base::write::encoder::encode;
use crate::base::write::ArchiveSession;
use crate::tests::write::encoder::stub;
use crate::tests::{fixture, init_logger};
use crate::{ArchiveOptions, Compression};

const FIVE_GIB: u64 = 5 * 1024 * 1024 * 1024;

/// A 5 GiB stored entry carries ZIP64 extra fields in both headers and pushes the archive into ZIP64 mode.
#[test]
fn five_gibibyte_entry_archive() {
    init_logger();

    let encoded = encode(&stub("big.bin", FIVE_GIB, Compression::Stored), 0).unwrap();
    assert!(encoded.needs_zip64());

    let mut directory = CentralDirectory::new();
    directory.append(&encoded.central_record);

    let cd_offset = encoded.bytes_written();
    assert_eq!(cd_offset, 30 + 7 + 20 + FIVE_GIB);

    let trailer = directory.render_end_of_central_directory(cd_offset, encoded.needs_zip64());
    let signatures: Vec<u32> = [0, 56, 76]
        .iter()
        .map(|at: &usize| u32::from_le_bytes(trailer[*at..*at + 4].try_into().unwrap()))
        .collect();

    assert_eq!(signatures, vec![0x06064b50, 0x07064b50, 0x06054b50]);
}

/// Entries below every threshold never gain extra fields, however many are written.
#[test]
fn small_entries_have_no_extra_fields() {
    let mut offset = 0;
    let mut directory = CentralDirectory::new();

    for i in 0..100u32 {
        let encoded = encode(&stub(&i.to_string(), 4, Compression::Stored), offset).unwrap();
        assert!(!encoded.needs_zip64());

        offset += encoded.bytes_written();
        directory.append(&encoded.central_record);
    }

    assert_eq!(directory.render_end_of_central_directory(offset, false).len(), 22);
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

/// An entry whose local header starts past 4 GiB carries its offset in a central ZIP64 extra field, which
/// switches the session into ZIP64 as soon as it is written.
#[tokio::test]
async fn session_offset_past_four_gibibytes() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let source = fixture(dir.path(), "a.txt", b"hello");

    let start = 0x1_0000_0000;
    let mut session = ArchiveSession::starting_at(Vec::<u8>::new(), ArchiveOptions::default(), start);

    session.add_file(&source, Some("a.txt")).await.unwrap();
    assert!(session.zip64());
    assert_eq!(session.offset(), start + 30 + 5 + 5);
    assert_eq!(session.central_directory_size(), 46 + 5 + 12);

    session.finalize().await.unwrap();
    assert!(session.zip64());

    let archive = session.into_inner();
    assert_eq!(archive.len(), 40 + 63 + 56 + 20 + 22);

    // The central record's offset moves into the extra field.
    assert_eq!(u32_at(&archive, 40 + 42), 0xFFFFFFFF);
    assert_eq!(u16_at(&archive, 40 + 51), 0x0001);
    assert_eq!(u16_at(&archive, 40 + 53), 8);
    assert_eq!(u64_at(&archive, 40 + 55), start);

    let record = 103;
    assert_eq!(u32_at(&archive, record), 0x06064b50);
    assert_eq!(u64_at(&archive, record + 24), 1);
    assert_eq!(u64_at(&archive, record + 40), 63);
    assert_eq!(u64_at(&archive, record + 48), start + 40);

    let locator = record + 56;
    assert_eq!(u32_at(&archive, locator), 0x07064b50);
    assert_eq!(u64_at(&archive, locator + 8), start + 103);

    let classic = locator + 20;
    assert_eq!(u32_at(&archive, classic), 0x06054b50);
    assert_eq!(u16_at(&archive, classic + 10), 1);
    assert_eq!(u32_at(&archive, classic + 12), 63);
    assert_eq!(u32_at(&archive, classic + 16), 0xFFFFFFFF);
}

/// An archive whose entries fit but whose central directory starts past `0xFFFFFFFF` only becomes ZIP64 at
/// finalize.
#[tokio::test]
async fn session_central_directory_crosses_boundary() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let source = fixture(dir.path(), "a.txt", b"hello");

    let start = 0xFFFF_FFF0;
    let mut session = ArchiveSession::starting_at(Vec::<u8>::new(), ArchiveOptions::default(), start);

    session.add_file(&source, Some("a.txt")).await.unwrap();
    assert!(!session.zip64());
    assert_eq!(session.central_directory_size(), 46 + 5);

    session.finalize().await.unwrap();
    assert!(session.zip64());

    let archive = session.into_inner();
    assert_eq!(archive.len(), 40 + 51 + 56 + 20 + 22);

    // The entry itself needed no extra fields.
    assert_eq!(u16_at(&archive, 28), 0);
    assert_eq!(u16_at(&archive, 40 + 30), 0);
    assert_eq!(u32_at(&archive, 40 + 42), start as u32);

    let record = 91;
    assert_eq!(u32_at(&archive, record), 0x06064b50);
    assert_eq!(u64_at(&archive, record + 48), start + 40);
    assert_eq!(u64_at(&archive, record + 56 + 8), start + 40 + 51);

    let classic = record + 56 + 20;
    assert_eq!(u32_at(&archive, classic), 0x06054b50);
    assert_eq!(u32_at(&archive, classic + 12), 51);
    assert_eq!(u32_at(&archive, classic + 16), 0xFFFFFFFF);
}
