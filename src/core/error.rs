//! 错误类型
//!
//! 处理流程中所有致命错误的统一定义。任何一个错误都会终止整个运行。

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 处理 vault 时可能出现的错误
#[derive(Debug, Error)]
pub enum VaultError {
    /// 配置文件不存在或无法解析
    #[error("failed to load configuration from {}: {message}", .path.display())]
    ConfigLoad { path: PathBuf, message: String },

    /// 必需的目录不存在或不是目录
    #[error("{} - {role} does not exist or is not a directory", .path.display())]
    NotADirectory { path: PathBuf, role: &'static str },

    /// 同一根目录下有多个同名文件
    #[error(
        "filename collision detected for {name}: {}. This is currently not a supported operating mode.",
        join_paths(.paths)
    )]
    Collision { name: String, paths: Vec<PathBuf> },

    /// 单个文件读写失败
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 遍历目录失败
    #[error("failed to walk {}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl VaultError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_lists_every_path() {
        let err = VaultError::Collision {
            name: "note.md".to_string(),
            paths: vec![PathBuf::from("/a/note.md"), PathBuf::from("/b/note.md")],
        };
        let message = err.to_string();
        assert!(message.contains("note.md"));
        assert!(message.contains("/a/note.md,/b/note.md"));
    }

    #[test]
    fn test_io_message_leaves_cause_to_source() {
        use std::error::Error;

        let err = VaultError::io(
            Path::new("/vault/bad.md"),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert_eq!(err.to_string(), "I/O error on /vault/bad.md");
        assert_eq!(
            err.source().unwrap().to_string(),
            "stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn test_not_a_directory_message() {
        let err = VaultError::NotADirectory {
            path: PathBuf::from("/missing"),
            role: "post output path",
        };
        assert_eq!(
            err.to_string(),
            "/missing - post output path does not exist or is not a directory"
        );
    }
}
