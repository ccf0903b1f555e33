// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use futures_lite::io::AsyncWrite;
use std::io::{Error, ErrorKind};
use std::pin::Pin;
use std::task::{Context, Poll};

pub(crate) mod encoder;
#[cfg(target_pointer_width = "64")]
mod zip64;

/// /dev/null for AsyncWrite.
/// Useful for tests that involve writing, but not reading, large amounts of data.
pub(crate) struct AsyncSink;

// AsyncSink is always ready to receive bytes and throw them away.
impl AsyncWrite for AsyncSink {
    fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<Result<usize, Error>> {
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }
}

/// An AsyncWrite which accepts `remaining` bytes, then fails every write.
pub(crate) struct FailingSink {
    pub(crate) remaining: usize,
}

impl AsyncWrite for FailingSink {
    fn poll_write(mut self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<Result<usize, Error>> {
        if self.remaining == 0 {
            return Poll::Ready(Err(Error::new(ErrorKind::BrokenPipe, "sink closed")));
        }

        let accepted = buf.len().min(self.remaining);
        self.remaining -= accepted;
        Poll::Ready(Ok(accepted))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn hashed_reader_reports_crc_and_length() {
    use crate::base::write::io::hashed::HashedReader;
    use futures_lite::io::Cursor;

    let data = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
    let mut reader = HashedReader::new(Cursor::new(data.to_vec()));

    futures_lite::io::copy(&mut reader, futures_lite::io::sink()).await.expect("failed to read data");
    let (crc, length) = reader.finish();

    assert_eq!(crc, crc32fast::hash(data));
    assert_eq!(length, data.len() as u64);
}

#[tokio::test]
async fn scratch_reused_between_entries() {
    use crate::base::write::backend::compress;
    use crate::base::write::scratch::ScratchFile;
    use crate::{Compression, CompressionLevel};
    use futures_lite::io::{AsyncReadExt, Cursor};

    let mut scratch = ScratchFile::new().expect("failed to create scratch file");

    let first = vec![1u8; 4096];
    let written = compress(&mut Cursor::new(first), &mut scratch, Compression::Stored, CompressionLevel::default())
        .await
        .expect("failed to compress");
    assert_eq!(written, 4096);

    let second = b"short".to_vec();
    let written = compress(&mut Cursor::new(second), &mut scratch, Compression::Stored, CompressionLevel::default())
        .await
        .expect("failed to compress");
    assert_eq!(written, 5);

    // The previous, longer contents must not leak into the next entry.
    let mut contents = Vec::new();
    scratch.reader().await.unwrap().read_to_end(&mut contents).await.unwrap();
    assert_eq!(contents, b"short");
}

#[cfg(feature = "deflate")]
#[tokio::test]
async fn deflate_into_scratch() {
    use crate::base::write::backend::compress;
    use crate::base::write::scratch::ScratchFile;
    use crate::{Compression, CompressionLevel};
    use futures_lite::io::Cursor;

    let mut scratch = ScratchFile::new().expect("failed to create scratch file");
    let data = vec![b'z'; 64 * 1024];

    let written = compress(&mut Cursor::new(data), &mut scratch, Compression::Deflate, CompressionLevel::BEST)
        .await
        .expect("failed to compress");
    assert!(written > 0 && written < 1024);
}
