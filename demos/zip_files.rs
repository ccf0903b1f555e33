// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Archives the given files, streaming the result to a file or stdout.
//!
//! Usage: zip_files [--method store|deflate|bzip2] [--level 1-9] [--deferred] <output ZIP file or -> <input files...>

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use streamzip::{ArchiveOptions, ArchiveSession, Compression, OutputTarget, WriteMode};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        eprintln!(
            "Usage: zip_files [--method store|deflate|bzip2] [--level 1-9] [--deferred] <output ZIP file or -> <input files...>"
        );
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut args = std::env::args().skip(1).peekable();

    let mut compression = Compression::Stored;
    let mut level = 4;
    let mut mode = WriteMode::Immediate;

    while let Some(flag) = args.next_if(|arg| arg.starts_with("--")) {
        match flag.as_str() {
            "--method" => compression = args.next().ok_or(anyhow!("No compression method specified."))?.parse()?,
            "--level" => level = args.next().ok_or(anyhow!("No compression level specified."))?.parse()?,
            "--deferred" => mode = WriteMode::Deferred,
            other => bail!("Unknown option '{other}'."),
        }
    }

    let output = args.next().ok_or(anyhow!("No output file specified."))?;
    let inputs: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if inputs.is_empty() {
        bail!("No input files specified.");
    }

    let target = match output.as_str() {
        "-" => OutputTarget::Stdout,
        path => OutputTarget::File(path.into()),
    };

    let opts = ArchiveOptions::new(compression).mode(mode).compression_level(level);
    let mut session = ArchiveSession::create(opts, target).await?;

    for input in &inputs {
        let name = input.file_name().and_then(|name| name.to_str());
        session.add_file(input, name).await?;
    }

    session.create_archive().await?;
    session.finalize().await?;

    if output != "-" {
        eprintln!(
            "Successfully written ZIP file '{}' ({} entries, {} bytes{}).",
            output,
            session.entry_count(),
            session.offset(),
            if session.zip64() { ", ZIP64" } else { "" }
        );
    }

    Ok(())
}
