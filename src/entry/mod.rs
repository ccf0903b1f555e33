// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod level;

use std::path::{Path, PathBuf};

/// A request to archive one source file.
///
/// Requests are cheap value objects: nothing about the source file is resolved until the entry is encoded, so a
/// deferred session may queue paths which do not exist yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRequest {
    pub(crate) source: PathBuf,
    pub(crate) name: Option<String>,
}

impl EntryRequest {
    /// Constructs a request which stores `source` under its own path.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), name: None }
    }

    /// Overrides the name the entry is stored under within the archive.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the path of the source file.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the name this entry will be stored under, before code page transcoding.
    ///
    /// Falls back to the source path when no name was given or the given name is empty.
    pub fn archive_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.source.to_string_lossy().into_owned(),
        }
    }
}
