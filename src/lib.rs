// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # streamzip
//!
//! An asynchronous, incremental ZIP archive builder which streams entries to a file or stdout.
//!
//! ## Features
//! - A strictly sequential, forward-only writer: no seeking, so the output can be a pipe.
//! - Stored, Deflate, and Bzip2 compression methods (the latter two behind the `deflate` and `bzip2` features).
//! - Transparent ZIP64 support, switched on per structure only where a 32-bit field would overflow.
//! - Immediate or deferred (queued) writing of added files.
//!
//! ## Example
//! ```no_run
//! # use streamzip::{ArchiveOptions, ArchiveSession, Compression, OutputTarget};
//! # use streamzip::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut session = ArchiveSession::create(ArchiveOptions::new(Compression::Stored), OutputTarget::Stdout).await?;
//!
//! session.add_file("./data.bin", Some("data.bin")).await?;
//! session.finalize().await?;
//! #   Ok(())
//! # }
//! ```

pub mod base;
pub mod core;
pub mod date;
pub mod entry;
pub mod error;
pub mod opts;
pub mod spec;
pub mod string;
pub mod tokio;
pub mod utils;


pub use crate::base::write::directory::CentralDirectory;
pub use crate::base::write::encoder::{encode, EncodedEntry, EntryMetadata};
pub use crate::base::write::{ArchiveSession, SessionState};
pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{level::CompressionLevel, EntryRequest};
pub use crate::opts::{ArchiveOptions, WriteMode};
pub use crate::spec::compression::Compression;
pub use crate::tokio::OutputTarget;
