// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The entry encoder.
//!
//! Encoding an entry happens in two phases. [`prepare()`] touches the filesystem: it resolves the source file into
//! an [`EntryMetadata`] (sizes, CRC32, name, timestamp), compressing into the scratch file if needed. [`encode()`]
//! is pure: it lays the local file header and central directory record out from that metadata and decides, per
//! structure, whether ZIP64 extra fields are required. Nothing is written to the output until both have succeeded,
//! so a missing or unreadable source never leaves partial entry bytes behind.

use std::path::{Path, PathBuf};

use futures_lite::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt};

use crate::base::write::backend;
use crate::base::write::io::hashed::HashedReader;
use crate::base::write::scratch::ScratchFile;
use crate::core::cdr::{self, CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::core::lfh::{self, LocalFileHeader, RawLocalFileHeader};
use crate::core::{zip64, NON_ZIP64_MAX_SIZE};
use crate::date::ZipDateTime;
use crate::entry::level::CompressionLevel;
use crate::entry::EntryRequest;
use crate::error::{Result, ZipError};
use crate::spec::{version, Compression};
use crate::string::encode_file_name;
use crate::utils::u32_or_sentinel;

/// Everything an entry's headers are laid out from, resolved from its source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryMetadata {
    /// The name as stored in the archive (IBM850, no leading separators).
    pub file_name: Vec<u8>,
    /// The session's configured method.
    pub compression: Compression,
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    /// CRC32 of the uncompressed bytes.
    pub crc32: u32,
    pub date_time: ZipDateTime,
}

impl EntryMetadata {
    /// Returns the method recorded in both headers.
    ///
    /// An empty payload is always recorded as stored, whatever the configured method; some readers reject a
    /// compressed method with a zero-length stream.
    pub fn effective_compression(&self) -> Compression {
        if self.compressed_size == 0 {
            Compression::Stored
        } else {
            self.compression
        }
    }

    fn file_name_length(&self) -> Result<u16> {
        self.file_name.len().try_into().map_err(|_| ZipError::FileNameTooLarge(self.file_name.len()))
    }

    /// Lays out the local file header.
    ///
    /// A size moves into the ZIP64 extra field only when it is strictly greater than `0xFFFFFFFF`.
    pub fn local_file_header(&self) -> Result<LocalFileHeader> {
        let compressed_overflow = self.compressed_size > NON_ZIP64_MAX_SIZE as u64;
        let uncompressed_overflow = self.uncompressed_size > NON_ZIP64_MAX_SIZE as u64;

        let extra_field = zip64::extra::local(
            compressed_overflow.then_some(self.compressed_size),
            uncompressed_overflow.then_some(self.uncompressed_size),
        )
        .map(|field| field.to_bytes())
        .unwrap_or_default();

        let compression = self.effective_compression();
        let raw = RawLocalFileHeader {
            version_needed_to_extract: version::as_needed_to_extract(compression),
            general_purpose_flags: 0,
            compression_method: compression.into(),
            last_mod_file_time: self.date_time.time(),
            last_mod_file_date: self.date_time.date(),
            crc_32: self.crc32,
            compressed_size: u32_or_sentinel(self.compressed_size, compressed_overflow),
            uncompressed_size: u32_or_sentinel(self.uncompressed_size, uncompressed_overflow),
            file_name_length: self.file_name_length()?,
            // At most two u64s plus the field header.
            extra_field_length: extra_field.len() as u16,
        };

        Ok(LocalFileHeader { raw, file_name: self.file_name.clone(), extra_field })
    }

    /// Lays out the central directory record for an entry whose local header starts at `offset`.
    ///
    /// Unlike the local header, a field moves into the ZIP64 extra field once it is greater than *or equal to*
    /// `0xFFFFFFFF`, so a value of exactly `0xFFFFFFFF` is treated differently in the two structures.
    pub fn central_directory_record(&self, offset: u64) -> Result<CentralDirectoryRecord> {
        let compressed_overflow = self.compressed_size >= NON_ZIP64_MAX_SIZE as u64;
        let uncompressed_overflow = self.uncompressed_size >= NON_ZIP64_MAX_SIZE as u64;
        let offset_overflow = offset >= NON_ZIP64_MAX_SIZE as u64;

        let extra_field = zip64::extra::central(
            uncompressed_overflow.then_some(self.uncompressed_size),
            compressed_overflow.then_some(self.compressed_size),
            offset_overflow.then_some(offset),
        )
        .map(|field| field.to_bytes())
        .unwrap_or_default();

        let compression = self.effective_compression();
        let raw = RawCentralDirectoryRecord {
            version_made_by: version::as_made_by(compression),
            version_needed_to_extract: version::as_needed_to_extract(compression),
            general_purpose_bit_flag: 0,
            compression_method: compression.into(),
            last_mod_file_time: self.date_time.time(),
            last_mod_file_date: self.date_time.date(),
            crc_32: self.crc32,
            compressed_size: u32_or_sentinel(self.compressed_size, compressed_overflow),
            uncompressed_size: u32_or_sentinel(self.uncompressed_size, uncompressed_overflow),
            file_name_length: self.file_name_length()?,
            extra_field_length: extra_field.len() as u16,
            file_comment_length: 0,
            disk_number_start: 0,
            internal_file_attributes: 0,
            external_file_attributes: cdr::ARCHIVE_ATTRIBUTE,
            relative_offset_of_local_header: u32_or_sentinel(offset, offset_overflow),
        };

        Ok(CentralDirectoryRecord { raw, file_name: self.file_name.clone(), extra_field })
    }
}

/// An entry laid out and ready to be committed to the output.
#[derive(Clone, Debug)]
pub struct EncodedEntry {
    pub local_header: LocalFileHeader,
    /// The number of payload bytes which follow the local header.
    pub data_length: u64,
    pub central_record: CentralDirectoryRecord,
    /// The offset of the local header within the output.
    pub offset: u64,
}

impl EncodedEntry {
    /// Returns whether either structure carries a ZIP64 extra field.
    pub fn needs_zip64(&self) -> bool {
        !self.local_header.extra_field.is_empty() || !self.central_record.extra_field.is_empty()
    }

    /// Returns the number of bytes this entry occupies in the output: local header plus payload.
    pub fn bytes_written(&self) -> u64 {
        self.local_header.encoded_len() as u64 + self.data_length
    }

    /// Returns the encoded local header.
    pub fn local_header_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.local_header.encoded_len());
        lfh::write(&mut buffer, &self.local_header);
        buffer
    }
}

/// Lays out both headers of an entry whose local header will start at `offset`.
#[tracing::instrument(skip(metadata), fields(file_name = %String::from_utf8_lossy(&metadata.file_name)))]
pub fn encode(metadata: &EntryMetadata, offset: u64) -> Result<EncodedEntry> {
    let local_header = metadata.local_file_header()?;
    let central_record = metadata.central_directory_record(offset)?;

    if metadata.effective_compression() != metadata.compression {
        tracing::debug!(configured = ?metadata.compression, "empty payload, recording entry as stored");
    }

    let encoded = EncodedEntry { local_header, data_length: metadata.compressed_size, central_record, offset };
    if encoded.needs_zip64() {
        tracing::debug!(
            uncompressed_size = metadata.uncompressed_size,
            compressed_size = metadata.compressed_size,
            offset,
            "entry requires ZIP64 extra fields"
        );
    }

    Ok(encoded)
}

/// Where an entry's payload bytes are read from when it is committed.
#[derive(Debug)]
pub(crate) enum Payload {
    /// The source file itself (stored entries).
    Source(PathBuf),
    /// The session's scratch file, holding the compressed bytes.
    Scratch,
}

/// Resolves a request into entry metadata, compressing the source into `scratch` when required.
///
/// The scratch file is created on first use and reused for every following entry.
#[tracing::instrument(skip(scratch))]
pub(crate) async fn prepare(
    request: &EntryRequest,
    compression: Compression,
    level: CompressionLevel,
    scratch: &mut Option<ScratchFile>,
) -> Result<(EntryMetadata, Payload)> {
    let source = request.source();
    let is_file = tokio::fs::metadata(source).await.map(|metadata| metadata.is_file()).unwrap_or(false);
    if !is_file {
        return Err(ZipError::MissingSourceFile(source.to_owned()));
    }

    let file_name = encode_file_name(&request.archive_name());
    let date_time = ZipDateTime::now();

    let mut input = HashedReader::new(open_source(source).await?);

    let (compressed_size, payload) = if compression.is_compressed() {
        let file = match scratch.take() {
            Some(file) => file,
            None => ScratchFile::new()?,
        };
        let scratch = scratch.insert(file);

        let compressed_size = backend::compress(&mut input, scratch, compression, level).await.map_err(|source_err| {
            ZipError::CompressionFailure { path: source.to_owned(), method: compression, source: source_err }
        })?;

        (compressed_size, Payload::Scratch)
    } else {
        futures_lite::io::copy(&mut input, futures_lite::io::sink()).await.map_err(|source_err| {
            ZipError::SourceReadError { path: source.to_owned(), source: source_err }
        })?;

        (0, Payload::Source(source.to_owned()))
    };

    let (crc32, uncompressed_size) = input.finish();

    // A compressed entry keeps the backend's output even for an empty source, so the method recorded is the one
    // configured.
    let compressed_size = match payload {
        Payload::Source(_) => uncompressed_size,
        Payload::Scratch => compressed_size,
    };

    let metadata = EntryMetadata { file_name, compression, uncompressed_size, compressed_size, crc32, date_time };
    Ok((metadata, payload))
}

/// Opens a source file as a futures-compatible reader.
pub(crate) async fn open_source(path: &Path) -> Result<Compat<tokio::fs::File>> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| ZipError::SourceReadError { path: path.to_owned(), source })?;

    Ok(file.compat())
}

/// Writes an encoded entry's local header followed by exactly `data_length` bytes of `payload`.
///
/// Callers must treat any error from here as leaving the output in an unknown state.
#[tracing::instrument(skip_all, fields(offset = encoded.offset, data_length = encoded.data_length))]
pub(crate) async fn commit<W, R>(writer: &mut W, encoded: &EncodedEntry, payload: R) -> Result<()>
where
    W: AsyncWrite + Unpin,
    R: AsyncRead + Unpin,
{
    writer.write_all(&encoded.local_header_bytes()).await?;

    let copied = futures_lite::io::copy(payload.take(encoded.data_length), &mut *writer).await?;
    if copied != encoded.data_length {
        return Err(ZipError::UpstreamWriteError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("entry payload ended after {copied} of {} bytes", encoded.data_length),
        )));
    }

    Ok(())
}
