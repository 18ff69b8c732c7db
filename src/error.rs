//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无法读取 {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("DOT 解析失败 (第 {line} 行): {message}")]
    ParseFailure { line: usize, message: String },

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("输入错误: {0}")]
    PromptError(String),
}

impl Error {
    /// 构造解析错误
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::ParseFailure {
            line,
            message: message.into(),
        }
    }

    /// 进程退出码：文件不可读为 1，解析失败为 2
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::FileNotFound { .. } => 1,
            Error::ParseFailure { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = Error::FileNotFound {
            path: PathBuf::from("nope.dot"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(missing.exit_code(), 1);
        assert_eq!(Error::parse(3, "bad").exit_code(), 2);
        assert_eq!(Error::SerializationError("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_parse_message_has_line() {
        let err = Error::parse(7, "意外的符号 '@'");
        assert!(err.to_string().contains("第 7 行"));
    }
}
