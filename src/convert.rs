use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::files::SourceFile;
use crate::render::Renderer;

/// Converts source files from `content_dir` into JSON under `dist_dir`.
pub struct Converter<'a> {
    renderer: &'a Renderer,
    content_dir: &'a Path,
    dist_dir: &'a Path,
}

impl<'a> Converter<'a> {
    pub fn new(renderer: &'a Renderer, content_dir: &'a Path, dist_dir: &'a Path) -> Self {
        Self {
            renderer,
            content_dir,
            dist_dir,
        }
    }

    pub fn convert(&self, file: &SourceFile) -> Result<Document> {
        let path = file.source_path(self.content_dir);
        let bytes = fs::read(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        // invalid sequences become U+FFFD instead of failing the batch
        let markdown = String::from_utf8_lossy(&bytes);
        let html = self
            .renderer
            .render(&markdown)
            .map_err(|source| Error::Render { path, source })?;
        Ok(Document::from_html(&html))
    }

    /// Convert and write one file, returning the output path.
    pub fn convert_file(&self, file: &SourceFile) -> Result<PathBuf> {
        let document = self.convert(file)?;
        let output = file.output_path(self.dist_dir);
        let json = document.to_json().map_err(|source| Error::Serialize {
            path: file.source_path(self.content_dir),
            source,
        })?;

        let write_err = |source| Error::Write {
            path: output.clone(),
            source,
        };
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&output, json).map_err(write_err)?;

        debug!("convert"; "{} -> {}", file, output.display());
        Ok(output)
    }

    /// Convert files in order, stopping at the first failure.
    pub fn convert_all(&self, files: &[SourceFile]) -> Result<Vec<PathBuf>> {
        files.iter().map(|file| self.convert_file(file)).collect()
    }
}
