//! 错误类型
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// 校验与扫描过程中可能出现的错误
/// Display 文本即面向用户的提示信息
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("File {} does not exist!", .0.display())]
    FileNotFound(PathBuf),

    #[error("File {} is a directory!", .0.display())]
    IsDirectory(PathBuf),

    #[error("Your given hash is not an even-length string of hex digits!")]
    MalformedHash,

    #[error("{0} not recognized as an algorithm!")]
    UnsupportedAlgorithm(String),

    #[error("Your hash is not the length returned by the {algorithm} algorithm!\nExpected {expected} bytes, but your hash was {actual} bytes!")]
    DigestLengthMismatch { algorithm: String, expected: usize, actual: usize },

    #[error("Your key length could not be parsed as a positive integer: {0:?}")]
    InvalidKeyLength(String),

    #[error("Key length must be a positive non-zero integer, got {0}!")]
    NonPositiveKeyLength(i64),

    #[error("File length ({file_len} bytes) is shorter than the key length ({key_length} bytes)!")]
    FileTooShort { file_len: u64, key_length: usize },

    #[error("scan cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 错误分类（对外输出用，与用户提示解耦）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FileNotFound,
    IsDirectory,
    MalformedHash,
    UnsupportedAlgorithm,
    DigestLengthMismatch,
    InvalidKeyLength,
    FileTooShort,
    Cancelled,
    Io,
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::FileNotFound(_) => ErrorKind::FileNotFound,
            ScanError::IsDirectory(_) => ErrorKind::IsDirectory,
            ScanError::MalformedHash => ErrorKind::MalformedHash,
            ScanError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            ScanError::DigestLengthMismatch { .. } => ErrorKind::DigestLengthMismatch,
            ScanError::InvalidKeyLength(_) | ScanError::NonPositiveKeyLength(_) => ErrorKind::InvalidKeyLength,
            ScanError::FileTooShort { .. } => ErrorKind::FileTooShort,
            ScanError::Cancelled => ErrorKind::Cancelled,
            ScanError::Io(_) => ErrorKind::Io,
        }
    }
}
