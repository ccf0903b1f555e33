// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports incrementally writing ZIP files.
//!
//! # Example
//! ### Immediate mode
//! ```no_run
//! # use streamzip::{ArchiveOptions, Compression, base::write::ArchiveSession};
//! # use streamzip::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut session = ArchiveSession::new(Vec::<u8>::new(), ArchiveOptions::new(Compression::Stored));
//!
//! session.add_file("./Cargo.toml", None).await?;
//! session.add_file("./README.md", Some("docs/README.md")).await?;
//! session.finalize().await?;
//!
//! let archive = session.into_inner();
//! #   Ok(())
//! # }
//! ```
//! ### Deferred mode
//! ```no_run
//! # use streamzip::{ArchiveOptions, Compression, WriteMode, base::write::ArchiveSession};
//! # use streamzip::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let opts = ArchiveOptions::new(Compression::Stored).mode(WriteMode::Deferred);
//! let mut session = ArchiveSession::new(Vec::<u8>::new(), opts);
//!
//! session.add_file("./a.txt", None).await?;
//! session.add_file("./b.txt", None).await?;
//! assert_eq!(session.pending(), 2);
//!
//! session.create_archive().await?;
//! session.finalize().await?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod backend;
pub(crate) mod compressed_writer;
pub mod directory;
pub mod encoder;
pub(crate) mod io;
pub(crate) mod scratch;

use std::collections::VecDeque;
use std::fmt;

use futures_lite::io::{AsyncWrite, AsyncWriteExt};

use crate::entry::level::CompressionLevel;
use crate::entry::EntryRequest;
use crate::error::{Result, ZipError};
use crate::opts::{ArchiveOptions, WriteMode};
use crate::spec::Compression;

use directory::CentralDirectory;
use encoder::Payload;
use io::offset::AsyncOffsetWriter;
use scratch::ScratchFile;

/// The lifecycle of an [`ArchiveSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, nothing added yet.
    Configured,
    /// At least one file has been added.
    Accumulating,
    /// The end of central directory has been written.
    Finalized,
    /// An entry could not be archived; the output is incomplete and can never be finalized.
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Configured => "configured",
            SessionState::Accumulating => "accumulating",
            SessionState::Finalized => "finalized",
            SessionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// An incremental ZIP file writer which acts over AsyncWrite implementers.
///
/// Entries are written strictly in the order they are added and are never revisited, so the output may be a
/// non-seekable stream such as stdout.
///
/// # Note
/// - [`ArchiveSession::finalize()`] must be called before the session goes out of scope, or the output will have
///   no central directory.
pub struct ArchiveSession<W> {
    pub(crate) writer: AsyncOffsetWriter<W>,
    options: ArchiveOptions,
    directory: CentralDirectory,
    pending: VecDeque<EntryRequest>,
    scratch: Option<ScratchFile>,
    zip64: bool,
    state: SessionState,
    pub(crate) close_on_finalize: bool,
}

impl<W: AsyncWrite + Unpin> ArchiveSession<W> {
    /// Construct a new session writing to the given writer.
    pub fn new(writer: W, options: ArchiveOptions) -> Self {
        tracing::debug!(?options, "configured archive session");

        Self {
            writer: AsyncOffsetWriter::new(writer),
            options,
            directory: CentralDirectory::new(),
            pending: VecDeque::new(),
            scratch: None,
            zip64: false,
            state: SessionState::Configured,
            close_on_finalize: false,
        }
    }

    /// Construct a session whose output is taken to already hold `offset` bytes.
    #[cfg(test)]
    pub(crate) fn starting_at(writer: W, options: ArchiveOptions, offset: u64) -> Self {
        let mut session = Self::new(writer, options);
        session.writer = AsyncOffsetWriter::starting_at(session.writer.into_inner(), offset);
        session
    }

    /// Adds a file to the archive, stored under `name` or, when absent or empty, its own path.
    ///
    /// In immediate mode the file is encoded and written before this returns; in deferred mode it is queued until
    /// [`ArchiveSession::create_archive()`].
    pub async fn add_file(&mut self, source: impl Into<std::path::PathBuf>, name: Option<&str>) -> Result<()> {
        let request = match name {
            Some(name) => EntryRequest::new(source).name(name),
            None => EntryRequest::new(source),
        };
        self.add_entry(request).await
    }

    /// Adds a file to the archive from a prepared request.
    pub async fn add_entry(&mut self, request: EntryRequest) -> Result<()> {
        self.ensure_writable("add a file")?;
        self.state = SessionState::Accumulating;

        match self.options.mode {
            WriteMode::Immediate => self.write_entry(request).await,
            WriteMode::Deferred => {
                tracing::trace!(source = %request.source().display(), "queued entry");
                self.pending.push_back(request);
                Ok(())
            }
        }
    }

    /// Writes every queued file, in the order they were added.
    ///
    /// This is a no-op in immediate mode. If an entry fails, the whole archive is aborted: the session moves to
    /// [`SessionState::Failed`] and refuses every further operation.
    #[tracing::instrument(skip(self), fields(pending = self.pending.len()))]
    pub async fn create_archive(&mut self) -> Result<()> {
        self.ensure_writable("create the archive")?;
        self.drain_pending().await
    }

    /// Sets the compression level used for entries written from now on; values outside 1..=9 are clamped.
    pub fn set_compression_level(&mut self, level: impl Into<CompressionLevel>) -> Result<()> {
        self.ensure_writable("set the compression level")?;
        self.options.level = level.into();
        Ok(())
    }

    /// Completes the archive.
    ///
    /// This includes:
    /// - Writing any files still queued in deferred mode.
    /// - Writing the central directory.
    /// - Writing the ZIP64 end of central directory record and locator, if required.
    /// - Writing the end of central directory record.
    /// - Releasing the compression scratch file.
    ///
    /// The output is flushed and, if the session opened it itself, closed.
    #[tracing::instrument(skip(self), fields(entries = self.directory.entries()))]
    pub async fn finalize(&mut self) -> Result<()> {
        self.ensure_writable("finalize the archive")?;

        if !self.pending.is_empty() {
            tracing::warn!(pending = self.pending.len(), "finalizing with queued files, writing them first");
            self.drain_pending().await?;
        }

        self.scratch = None;

        match self.write_trailer().await {
            Ok(()) => {
                self.state = SessionState::Finalized;
                Ok(())
            }
            Err(err) => {
                self.state = SessionState::Failed;
                Err(err)
            }
        }
    }

    /// Consumes the session, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Returns whether any ZIP64 structure has been, or will be, written. Once set, this never reverts.
    pub fn zip64(&self) -> bool {
        self.zip64
    }

    pub fn compression(&self) -> Compression {
        self.options.compression
    }

    pub fn mode(&self) -> WriteMode {
        self.options.mode
    }

    pub fn compression_level(&self) -> CompressionLevel {
        self.options.level
    }

    /// Returns the number of entries written so far.
    pub fn entry_count(&self) -> u64 {
        self.directory.entries()
    }

    /// Returns the number of files queued in deferred mode.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns the number of bytes written to the output so far.
    pub fn offset(&self) -> u64 {
        self.writer.offset()
    }

    pub fn central_directory_size(&self) -> u64 {
        self.directory.size()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn ensure_writable(&self, operation: &'static str) -> Result<()> {
        match self.state {
            SessionState::Configured | SessionState::Accumulating => Ok(()),
            state => Err(ZipError::InvalidStateTransition { operation, state }),
        }
    }

    async fn drain_pending(&mut self) -> Result<()> {
        while let Some(request) = self.pending.pop_front() {
            self.write_entry(request).await?;
        }
        Ok(())
    }

    /// Writes a single entry, aborting the archive if it cannot be.
    ///
    /// A skipped entry would leave an archive which silently lacks a requested file, so any failure (missing
    /// source included) moves the session to [`SessionState::Failed`].
    async fn write_entry(&mut self, request: EntryRequest) -> Result<()> {
        let result = self.encode_entry(&request).await;

        if let Err(err) = &result {
            tracing::error!(source = %request.source().display(), %err, "entry failed, aborting archive");
            self.state = SessionState::Failed;
        }
        result
    }

    /// Encodes and writes a single entry, then records it in the central directory.
    #[tracing::instrument(skip(self), fields(offset = self.writer.offset()))]
    async fn encode_entry(&mut self, request: &EntryRequest) -> Result<()> {
        let compression = self.options.compression;
        let (metadata, payload) =
            encoder::prepare(request, compression, self.options.level, &mut self.scratch).await?;

        let offset = self.writer.offset();
        let encoded = encoder::encode(&metadata, offset)?;

        match payload {
            Payload::Source(path) => {
                let reader = encoder::open_source(&path).await?;
                encoder::commit(&mut self.writer, &encoded, reader).await?;
            }
            Payload::Scratch => {
                let scratch = self.scratch.as_mut().ok_or_else(|| {
                    ZipError::ScratchUnavailable(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "compressed entry has no scratch file",
                    ))
                })?;
                let reader = scratch.reader().await.map_err(|source| ZipError::CompressionFailure {
                    path: request.source().to_owned(),
                    method: compression,
                    source,
                })?;
                encoder::commit(&mut self.writer, &encoded, reader).await?;
            }
        }

        debug_assert_eq!(self.writer.offset(), offset + encoded.bytes_written());

        self.directory.append(&encoded.central_record);
        if encoded.needs_zip64() && !self.zip64 {
            tracing::debug!("switching archive to ZIP64");
        }
        self.zip64 |= encoded.needs_zip64();

        tracing::debug!(
            name = %String::from_utf8_lossy(&metadata.file_name),
            compression = ?metadata.effective_compression(),
            uncompressed_size = metadata.uncompressed_size,
            compressed_size = metadata.compressed_size,
            "wrote entry"
        );

        Ok(())
    }

    async fn write_trailer(&mut self) -> Result<()> {
        let offset = self.writer.offset();
        let size = self.directory.size();

        self.zip64 |= directory::requires_zip64(self.directory.entries(), offset, size);
        let trailer = self.directory.render_end_of_central_directory(offset, self.zip64);

        self.writer.write_all(self.directory.as_bytes()).await?;
        self.writer.write_all(&trailer).await?;

        if self.close_on_finalize {
            self.writer.close().await?;
        } else {
            self.writer.flush().await?;
        }

        tracing::debug!(bytes = self.writer.offset(), zip64 = self.zip64, "finalized archive");
        Ok(())
    }
}
