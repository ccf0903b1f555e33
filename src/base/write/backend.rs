// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The compression backend: compresses one input stream into the scratch file.

use futures_lite::io::{AsyncRead, AsyncWriteExt};

use crate::base::write::compressed_writer::CompressedAsyncWriter;
use crate::base::write::io::offset::AsyncOffsetWriter;
use crate::base::write::scratch::ScratchFile;
use crate::entry::level::CompressionLevel;
use crate::spec::Compression;

/// Compresses everything `input` yields into `scratch`, returning the compressed byte count.
///
/// Any previous scratch contents are discarded. [`Compression::Stored`] passes bytes through unchanged.
#[tracing::instrument(skip(input, scratch))]
pub(crate) async fn compress<R>(
    input: &mut R,
    scratch: &mut ScratchFile,
    compression: Compression,
    level: CompressionLevel,
) -> std::io::Result<u64>
where
    R: AsyncRead + Unpin,
{
    let counter = AsyncOffsetWriter::new(scratch.writer().await?);
    let mut writer = CompressedAsyncWriter::from_raw(counter, compression, level);

    futures_lite::io::copy(input, &mut writer).await?;
    writer.close().await?;

    let compressed_size = writer.into_inner().offset();
    tracing::trace!(compressed_size, "compressed entry into scratch file");

    Ok(compressed_size)
}
