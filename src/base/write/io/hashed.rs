// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::pin::Pin;
use std::task::{ready, Context, Poll};

use crc32fast::Hasher;
use futures_lite::io::AsyncRead;
use pin_project::pin_project;

/// A wrapping reader which computes the CRC32 hash and length of data read via [`AsyncRead`].
#[pin_project]
pub(crate) struct HashedReader<R> {
    #[pin]
    reader: R,
    hasher: Hasher,
    bytes_read: u64,
}

impl<R> HashedReader<R>
where
    R: AsyncRead + Unpin,
{
    /// Constructs a new wrapping reader from a generic [`AsyncRead`] implementer.
    pub(crate) fn new(reader: R) -> Self {
        Self { reader, hasher: Hasher::new(), bytes_read: 0 }
    }

    /// Consumes this reader and returns the CRC32 hash and number of bytes read.
    ///
    /// Only meaningful once EOF has been reached.
    pub(crate) fn finish(self) -> (u32, u64) {
        (self.hasher.finalize(), self.bytes_read)
    }
}

impl<R> AsyncRead for HashedReader<R>
where
    R: AsyncRead + Unpin,
{
    fn poll_read(self: Pin<&mut Self>, c: &mut Context<'_>, b: &mut [u8]) -> Poll<std::io::Result<usize>> {
        let project = self.project();
        let read = ready!(project.reader.poll_read(c, b))?;
        project.hasher.update(&b[..read]);
        *project.bytes_read += read as u64;

        Poll::Ready(Ok(read))
    }
}
