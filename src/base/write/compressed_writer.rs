// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

#[cfg(any(feature = "deflate", feature = "bzip2"))]
use async_compression::futures::write;
use futures_lite::io::AsyncWrite;
use pin_project::pin_project;

use crate::entry::level::CompressionLevel;
use crate::spec::Compression;

/// An encoder for one of the supported methods, writing into the scratch file.
#[pin_project(project = CompressedProj)]
pub(crate) enum CompressedAsyncWriter<W: AsyncWrite + Unpin> {
    Stored(#[pin] FlushOnClose<W>),
    #[cfg(feature = "deflate")]
    Deflate(#[pin] write::DeflateEncoder<FlushOnClose<W>>),
    #[cfg(feature = "bzip2")]
    Bz(#[pin] write::BzEncoder<FlushOnClose<W>>),
}

impl<W: AsyncWrite + Unpin> CompressedAsyncWriter<W> {
    #[cfg_attr(not(any(feature = "deflate", feature = "bzip2")), allow(unused_variables))]
    pub(crate) fn from_raw(writer: W, compression: Compression, level: CompressionLevel) -> Self {
        let writer = FlushOnClose(writer);

        match compression {
            Compression::Stored => Self::Stored(writer),
            #[cfg(feature = "deflate")]
            Compression::Deflate => Self::Deflate(write::DeflateEncoder::with_quality(writer, level.into_level())),
            #[cfg(feature = "bzip2")]
            Compression::Bz => Self::Bz(write::BzEncoder::with_quality(writer, level.into_level())),
        }
    }

    /// Returns the underlying writer. Call only after closing, or buffered output is lost.
    pub(crate) fn into_inner(self) -> W {
        let writer = match self {
            Self::Stored(inner) => inner,
            #[cfg(feature = "deflate")]
            Self::Deflate(inner) => inner.into_inner(),
            #[cfg(feature = "bzip2")]
            Self::Bz(inner) => inner.into_inner(),
        };
        writer.0
    }
}

impl<W: AsyncWrite + Unpin> AsyncWrite for CompressedAsyncWriter<W> {
    fn poll_write(self: Pin<&mut Self>, cx: &mut Context, buf: &[u8]) -> Poll<Result<usize, Error>> {
        match self.project() {
            CompressedProj::Stored(inner) => inner.poll_write(cx, buf),
            #[cfg(feature = "deflate")]
            CompressedProj::Deflate(inner) => inner.poll_write(cx, buf),
            #[cfg(feature = "bzip2")]
            CompressedProj::Bz(inner) => inner.poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Error>> {
        match self.project() {
            CompressedProj::Stored(inner) => inner.poll_flush(cx),
            #[cfg(feature = "deflate")]
            CompressedProj::Deflate(inner) => inner.poll_flush(cx),
            #[cfg(feature = "bzip2")]
            CompressedProj::Bz(inner) => inner.poll_flush(cx),
        }
    }

    /// Finishes the compressed stream; the scratch file itself is only flushed.
    fn poll_close(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Error>> {
        match self.project() {
            CompressedProj::Stored(inner) => inner.poll_close(cx),
            #[cfg(feature = "deflate")]
            CompressedProj::Deflate(inner) => inner.poll_close(cx),
            #[cfg(feature = "bzip2")]
            CompressedProj::Bz(inner) => inner.poll_close(cx),
        }
    }
}

/// Forwards writes, turning close into a flush so the scratch file stays usable for the next entry.
pub(crate) struct FlushOnClose<W>(W);

impl<W: AsyncWrite + Unpin> AsyncWrite for FlushOnClose<W> {
    fn poll_write(mut self: Pin<&mut Self>, cx: &mut Context, buf: &[u8]) -> Poll<Result<usize, Error>> {
        Pin::new(&mut self.0).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Error>> {
        Pin::new(&mut self.0).poll_flush(cx)
    }

    fn poll_close(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Error>> {
        Pin::new(&mut self.0).poll_flush(cx)
    }
}
