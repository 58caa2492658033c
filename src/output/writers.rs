//! Output writing functionality
//!
//! The requirements manifest goes to a file; summaries go to stdout.

use crate::error::{ReqgenError, Result};
use crate::models::package::RequirementEntry;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| ReqgenError::StdoutWrite { source: e })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create or truncate the file and write one entry per line.
    ///
    /// Everything is flushed and synced to storage before returning.
    pub fn write_entries(&self, entries: &[RequirementEntry]) -> Result<()> {
        let file =
            File::create(&self.path).map_err(|e| ReqgenError::output_write(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        for entry in entries {
            writeln!(writer, "{}", entry.line)
                .map_err(|e| ReqgenError::output_write(&self.path, e))?;
        }

        self.finish(writer)
    }

    fn finish(&self, mut writer: BufWriter<File>) -> Result<()> {
        writer
            .flush()
            .and_then(|_| writer.get_ref().sync_all())
            .map_err(|e| ReqgenError::output_write(&self.path, e))
    }
}
