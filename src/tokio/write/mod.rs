// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP files to stdout, files, or any [`tokio`] writer.

use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::AsyncWrite;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::base::write::ArchiveSession as BaseArchiveSession;
use crate::error::{ConfigError, Result, ZipError};
use crate::opts::ArchiveOptions;

/// A [`tokio`]-specific type alias for [`crate::base::write::ArchiveSession`].
pub type ArchiveSession<W> = BaseArchiveSession<Compat<W>>;

/// Where a session created through [`BaseArchiveSession::create()`] writes its archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// A file, created or truncated when the session is created.
    File(PathBuf),
}

/// The writer behind an [`OutputTarget`].
#[derive(Debug)]
pub enum OutputSink {
    Stdout(tokio::io::Stdout),
    File(tokio::fs::File),
}

impl OutputSink {
    /// Opens the given target.
    #[tracing::instrument]
    pub async fn open(target: &OutputTarget) -> Result<Self> {
        match target {
            OutputTarget::Stdout => Ok(OutputSink::Stdout(tokio::io::stdout())),
            OutputTarget::File(path) if path.as_os_str().is_empty() => Err(ConfigError::MissingOutputPath.into()),
            OutputTarget::File(path) => {
                let file = tokio::fs::File::create(path)
                    .await
                    .map_err(|source| ZipError::SinkOpenFailure { path: path.clone(), source })?;
                Ok(OutputSink::File(file))
            }
        }
    }
}

impl AsyncWrite for OutputSink {
    fn poll_write(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        match self.get_mut() {
            OutputSink::Stdout(inner) => Pin::new(inner).poll_write(cx, buf),
            OutputSink::File(inner) => Pin::new(inner).poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            OutputSink::Stdout(inner) => Pin::new(inner).poll_flush(cx),
            OutputSink::File(inner) => Pin::new(inner).poll_flush(cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            OutputSink::Stdout(inner) => Pin::new(inner).poll_shutdown(cx),
            OutputSink::File(inner) => Pin::new(inner).poll_shutdown(cx),
        }
    }
}

impl BaseArchiveSession<Compat<OutputSink>> {
    /// Construct a new session writing to stdout or a newly created file.
    ///
    /// A file target is closed when the session is finalized; stdout is only flushed.
    pub async fn create(options: ArchiveOptions, target: OutputTarget) -> Result<Self> {
        let sink = OutputSink::open(&target).await?;
        let close_on_finalize = matches!(sink, OutputSink::File(_));

        let mut session = BaseArchiveSession::new(sink.compat_write(), options);
        session.close_on_finalize = close_on_finalize;
        Ok(session)
    }
}

impl<W> BaseArchiveSession<Compat<W>>
where
    W: AsyncWrite + Unpin,
{
    /// Construct a new session writing to a [`tokio`] writer.
    ///
    /// The writer is flushed, but not shut down, when the session is finalized.
    pub fn with_tokio(writer: W, options: ArchiveOptions) -> ArchiveSession<W> {
        BaseArchiveSession::new(writer.compat_write(), options)
    }
}
