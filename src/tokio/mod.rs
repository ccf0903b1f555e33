// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A set of [`tokio`]-specific output targets and type aliases.
//!
//! # Usage
//! Types from the [`base`] implementation gain additional constructors for use with [`tokio`], which internally
//! convert between the required async IO traits:
//! - [`base::write::ArchiveSession::with_tokio()`] wraps any [`tokio::io::AsyncWrite`].
//! - [`base::write::ArchiveSession::create()`] opens an [`OutputTarget`] (stdout or a file).
//!
//! The types returned by these constructors contain a wrapping compatibility type provided by [`tokio_util`]. The
//! aliases within [`write`] let them be named without pulling in that dependency.

#[cfg(doc)]
use crate::base;
#[cfg(doc)]
use tokio;
#[cfg(doc)]
use tokio_util;

pub mod write;

pub use write::{OutputSink, OutputTarget};
