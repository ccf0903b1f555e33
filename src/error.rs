// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::path::PathBuf;

use thiserror::Error;

use crate::base::write::SessionState;
use crate::spec::Compression;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("unable to create output file '{}': {source}", path.display())]
    SinkOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("source file not found or not a regular file: '{}'", .0.display())]
    MissingSourceFile(PathBuf),
    #[error("failed to compress '{}' using {method:?}: {source}", path.display())]
    CompressionFailure {
        path: PathBuf,
        method: Compression,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read source file '{}': {source}", path.display())]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot {operation} whilst the archive is {state}")]
    InvalidStateTransition { operation: &'static str, state: SessionState },
    #[error("unable to create a scratch file for compressed data: {0}")]
    ScratchUnavailable(#[source] std::io::Error),
    #[error("encoded file name is {0} bytes long (expected at most {max})", max = u16::MAX)]
    FileNameTooLarge(usize),

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
}

/// An enum of configuration problems detected when setting up an archive.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("an output path must be provided when writing to a file")]
    MissingOutputPath,
    #[error("compression method code not supported: {0}")]
    UnsupportedCompression(u16),
    #[error("unknown compression method: '{0}' (expected one of store, deflate, bzip2)")]
    UnknownCompression(String),
    #[error("compression method '{0}' was disabled at compile time")]
    CompressionUnavailable(&'static str),
}
