use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File names found in one target folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetListing {
    pub target: String,
    pub file_names: Vec<String>,
}

/// A file picked for conversion, relative to the content and dist roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub target: String,
    pub file_name: String,
}

impl SourceFile {
    pub fn new(target: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            file_name: file_name.into(),
        }
    }

    pub fn source_path(&self, content_dir: &Path) -> PathBuf {
        content_dir.join(&self.target).join(&self.file_name)
    }

    /// `<dist>/<target>/<name>` with a trailing `.md` swapped for `.json`.
    pub fn output_path(&self, dist_dir: &Path) -> PathBuf {
        let name = match self.file_name.strip_suffix(".md") {
            Some(stem) => format!("{stem}.json"),
            None => self.file_name.clone(),
        };
        dist_dir.join(&self.target).join(name)
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.target, self.file_name)
    }
}

/// List every target folder. The first unreadable folder aborts the listing.
pub fn list_targets(content_dir: &Path, targets: &[String]) -> Result<Vec<TargetListing>> {
    targets
        .iter()
        .map(|target| {
            Ok(TargetListing {
                target: target.clone(),
                file_names: list_folder(&content_dir.join(target))?,
            })
        })
        .collect()
}

fn list_folder(dir: &Path) -> Result<Vec<String>> {
    let read_dir_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Pair up targets and file names, keeping only `filter` names when given.
pub fn select(listings: &[TargetListing], filter: &[String]) -> Result<Vec<SourceFile>> {
    let selected: Vec<SourceFile> = listings
        .iter()
        .flat_map(|listing| {
            listing
                .file_names
                .iter()
                .filter(|name| filter.is_empty() || filter.contains(name))
                .map(|name| SourceFile::new(&listing.target, name))
        })
        .collect();

    if selected.is_empty() {
        return Err(Error::NothingToConvert);
    }
    Ok(selected)
}
