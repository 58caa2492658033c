//! Directory walking functionality
//!
//! Enumerates source files below a root directory with pattern-based
//! exclusion and depth limiting.

use crate::error::{ReqgenError, Result};
use crate::models::config::Settings;
use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds the source files a run should scan
#[derive(Debug, Clone)]
pub struct SourceWalker {
    root: PathBuf,
    suffix: String,
    exclude_patterns: Vec<Pattern>,
    max_depth: Option<usize>,
    follow_links: bool,
}

impl SourceWalker {
    /// Create a walker from settings, compiling its exclude patterns
    pub fn new(settings: &Settings) -> Result<Self> {
        let exclude_patterns = settings
            .exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern).map_err(ReqgenError::from))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: settings.scan_path.clone(),
            suffix: settings.source_suffix.clone(),
            exclude_patterns,
            max_depth: settings.max_depth,
            follow_links: settings.follow_links,
        })
    }

    /// Directory the walk starts from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fail unless the root can be stat'ed.
    ///
    /// Only a root that does not exist is reported as not found. Any other
    /// failure, such as a permission error, is a traversal error.
    pub fn check_root(&self) -> Result<()> {
        match fs::metadata(&self.root) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ReqgenError::scan_path_not_found(&self.root))
            }
            Err(err) => Err(ReqgenError::directory_traversal_error(
                &self.root,
                err.to_string(),
            )),
        }
    }

    /// Every matching file below the root, in file-name order.
    ///
    /// Fails before walking if the root cannot be stat'ed. Any error while
    /// walking stops the walk.
    pub fn find_source_files(&self) -> Result<Vec<PathBuf>> {
        self.check_root()?;

        let mut walk = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        if let Some(max_depth) = self.max_depth {
            walk = walk.max_depth(max_depth);
        }

        let mut files = Vec::new();
        let entries = walk
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry.path()));

        for entry in entries {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            if self.is_source_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Check if a path ends with the configured source suffix
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(&self.suffix)
    }

    /// Check if a path matches any exclude pattern, by file name or full path
    pub fn is_excluded(&self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches(&file_name) || pattern.matches_path(path))
    }
}
