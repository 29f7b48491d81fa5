//! Source file reading with size and encoding checks

use super::MAX_SOURCE_SIZE;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading {path}: {message}")]
    IoError { path: String, message: String },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    fn from_io(error: std::io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            ErrorKind::NotFound => FileProcessorError::FileNotFound { path },
            ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied { path },
            ErrorKind::InvalidData => FileProcessorError::InvalidEncoding { path },
            _ => FileProcessorError::IoError {
                path,
                message: error.to_string(),
            },
        }
    }
}

/// A source file loaded into memory
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
    /// Size on disk in bytes
    pub size: u64,
    pub line_count: usize,
}

/// Read a UTF-8 source file, rejecting anything over `MAX_SOURCE_SIZE`
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<SourceFile, FileProcessorError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    log_debug!("Starting file processing", "file" => display.as_str());

    let result = load(path);
    match &result {
        Ok(file) => {
            log_success!(codes::success::FILE_PROCESSING_SUCCESS,
                "File processed successfully",
                "file" => display.as_str(),
                "size_bytes" => file.size,
                "lines" => file.line_count
            );
        }
        Err(error) => {
            log_error!(error.error_code(), "File processing failed",
                "file" => display.as_str(),
                "reason" => error
            );
        }
    }
    result
}

fn load(path: &Path) -> Result<SourceFile, FileProcessorError> {
    let metadata = fs::metadata(path).map_err(|e| FileProcessorError::from_io(e, path))?;

    if !metadata.is_file() {
        return Err(FileProcessorError::IoError {
            path: path.display().to_string(),
            message: "not a regular file".to_string(),
        });
    }

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(FileProcessorError::FileTooLarge {
            size: metadata.len(),
            max_size: MAX_SOURCE_SIZE,
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| FileProcessorError::from_io(e, path))?;

    Ok(SourceFile {
        path: path.to_path_buf(),
        line_count: contents.lines().count(),
        size: metadata.len(),
        contents,
    })
}
