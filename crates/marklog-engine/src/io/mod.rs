//! File access for callers of the engine. The parsers never use this
//! module; they only see [`Document`]s built from whatever text it returns.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::parsing::Document;
use crate::render::LOG_TEMPLATE;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a file into a [`Document`]
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    read_file(path).map(Document::from)
}

/// Append text to a log file, seeding it with [`LOG_TEMPLATE`] first if it
/// does not exist yet
pub fn append_to_log(path: &Path, text: &str) -> Result<(), IoError> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(IoError::Io)?;
        }
        fs::write(path, LOG_TEMPLATE).map_err(IoError::Io)?;
        log::info!("Created log file {}", path.display());
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(IoError::Io)?;
    file.write_all(text.as_bytes()).map_err(IoError::Io)
}

/// Scan for markdown files below `root`
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}
