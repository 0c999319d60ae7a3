//! Manifest (cbuild.txt) reading and validation
//!
//! The manifest is a line-oriented list of source files, one relative path
//! per line. Lines starting with [`COMMENT_TAG`] and lines made only of
//! spaces are ignored. Every other line is resolved against a base
//! directory by plain concatenation (`<base>/<line>`), with no
//! normalization of `..`, repeated separators or symlinks.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::defaults::COMMENT_TAG;
use crate::error::ManifestError;

/// Classification of a single manifest line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestLine<'a> {
    /// Line starts with the comment tag
    Comment,
    /// Line is empty or contains only spaces
    Blank,
    /// Relative path of a source file
    Source(&'a str),
}

impl<'a> ManifestLine<'a> {
    /// Classify a raw line (without its line terminator)
    ///
    /// Only the space character counts as blank; a line of tabs is kept as
    /// a source entry.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with(COMMENT_TAG) {
            Self::Comment
        } else if line.trim_matches(' ').is_empty() {
            Self::Blank
        } else {
            Self::Source(line)
        }
    }
}

/// Resolve a manifest entry against the base directory
///
/// The result is `<base>/<entry>` byte for byte.
pub fn resolve(base_dir: &Path, entry: &str) -> PathBuf {
    let mut resolved = OsString::from(base_dir.as_os_str());
    resolved.push("/");
    resolved.push(entry);
    PathBuf::from(resolved)
}

/// Ordered, duplicate-free list of absolute source file paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    files: Vec<PathBuf>,
    // Exact byte strings, so `a//b.c` and `a/b.c` stay distinct
    seen: HashSet<OsString>,
}

impl SourceList {
    /// Create an empty source list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolved path, rejecting exact duplicates
    pub fn push(&mut self, path: PathBuf) -> Result<(), ManifestError> {
        if !self.seen.insert(path.as_os_str().to_owned()) {
            return Err(ManifestError::DuplicateSource { path });
        }
        self.files.push(path);
        Ok(())
    }

    /// Parse manifest lines from a reader
    ///
    /// Stops at the first duplicate; the remaining input is not consumed.
    pub fn from_reader<R: BufRead>(
        reader: R,
        manifest_path: &Path,
        base_dir: &Path,
    ) -> Result<Self, ManifestError> {
        let mut list = Self::new();

        for line in reader.lines() {
            let line = line.map_err(|source| ManifestError::Unreadable {
                path: manifest_path.to_path_buf(),
                source,
            })?;

            match ManifestLine::classify(&line) {
                ManifestLine::Comment | ManifestLine::Blank => {}
                ManifestLine::Source(entry) => {
                    let path = resolve(base_dir, entry);
                    tracing::debug!("source file: {}", path.display());
                    list.push(path)?;
                }
            }
        }

        Ok(list)
    }

    /// Resolved paths in manifest order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of source files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the manifest listed no source files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Read the manifest at `manifest_path`, resolving entries against `base_dir`
///
/// The file is closed before returning, on success and on error.
pub fn read_manifest(manifest_path: &Path, base_dir: &Path) -> Result<SourceList, ManifestError> {
    let file = File::open(manifest_path).map_err(|source| ManifestError::Unreadable {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    SourceList::from_reader(BufReader::new(file), manifest_path, base_dir)
}
