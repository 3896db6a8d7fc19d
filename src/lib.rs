//! Batch converter from Markdown content folders to JSON documents.

pub mod cli;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod files;
#[macro_use]
pub mod logger;
pub mod render;
pub mod target;

use itertools::Itertools;
use std::path::PathBuf;

pub use config::Config;
pub use convert::Converter;
pub use document::Document;
pub use error::{Error, Result};
pub use render::{Highlighter, PlainHighlighter, Renderer, SyntectHighlighter};

/// Run the whole pipeline, returning the written files in conversion order.
pub fn run(config: &Config, renderer: &Renderer) -> Result<Vec<PathBuf>> {
    let targets = target::resolve(&config.targets, &config.known_targets)?;
    log!("target"; "Target Folders: {}", targets.iter().join(", "));

    let listings = files::list_targets(&config.content_dir, &targets)?;
    let selected = files::select(&listings, &config.files)?;
    log!("files"; "Files to convert: {}", selected.iter().join(", "));

    let converter = Converter::new(renderer, &config.content_dir, &config.dist_dir);
    let written = converter.convert_all(&selected)?;

    log!("done"; "Completed.");
    Ok(written)
}
