// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::SeekFrom;

use tokio::fs::File;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt, TokioAsyncWriteCompatExt};

use crate::error::{Result, ZipError};

/// A reusable scratch area holding one entry's compressed bytes at a time.
///
/// Backed by an anonymous temporary file which the operating system reclaims once the handle is dropped, on every
/// exit path (finalisation, errors, or the session simply being abandoned).
pub(crate) struct ScratchFile {
    file: File,
}

impl ScratchFile {
    pub(crate) fn new() -> Result<Self> {
        let file = tempfile::tempfile().map_err(ZipError::ScratchUnavailable)?;
        tracing::debug!("created compression scratch file");
        Ok(Self { file: File::from_std(file) })
    }

    /// Discards any previous contents and returns a writer positioned at the start.
    pub(crate) async fn writer(&mut self) -> std::io::Result<Compat<&mut File>> {
        self.file.set_len(0).await?;
        self.file.seek(SeekFrom::Start(0)).await?;
        Ok((&mut self.file).compat_write())
    }

    /// Flushes pending writes and returns a reader positioned at the start.
    pub(crate) async fn reader(&mut self) -> std::io::Result<Compat<&mut File>> {
        self.file.flush().await?;
        self.file.seek(SeekFrom::Start(0)).await?;
        Ok((&mut self.file).compat())
    }
}
