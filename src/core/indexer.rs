//! 索引模块
//!
//! 将目录中的文件按文件名建立索引
//!
//! ## 规则
//!
//! - 递归遍历整个子树
//! - 可选的文件名后缀过滤（如 `.md`）
//! - 同一根目录下文件名必须唯一，否则整个索引失败

use crate::core::error::{Result, VaultError};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// 文件索引
///
/// 文件名（含扩展名）到唯一完整路径的映射，按文件名排序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: BTreeMap<String, PathBuf>,
}

impl FileIndex {
    /// 索引目录
    ///
    /// # Arguments
    ///
    /// * `root` - 根目录路径
    /// * `extension` - 文件名后缀过滤，`None` 表示接受所有文件
    ///
    /// # Returns
    ///
    /// 校验过的索引；存在同名文件时返回 `Collision` 错误
    pub fn build(root: &Path, extension: Option<&str>) -> Result<Self> {
        let root = ensure_dir(root, "input files location")?;
        let mut candidates = Candidates::default();

        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|source| VaultError::Walk {
                root: root.clone(),
                source,
            })?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if extension.is_some_and(|ext| !name.ends_with(ext)) {
                continue;
            }

            candidates.add(name, path.to_path_buf());
        }

        let index = candidates.validate()?;
        debug!("Indexed {} files under {:?}", index.len(), root);
        Ok(index)
    }

    /// 获取文件名对应的路径
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按文件名顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}

/// 构建过程中的中间状态：文件名到所有出现位置
#[derive(Debug, Default)]
struct Candidates {
    by_name: BTreeMap<String, BTreeSet<PathBuf>>,
}

impl Candidates {
    fn add(&mut self, name: String, path: PathBuf) {
        self.by_name.entry(name).or_default().insert(path);
    }

    fn validate(self) -> Result<FileIndex> {
        let mut entries = BTreeMap::new();

        for (name, paths) in self.by_name {
            if paths.len() > 1 {
                return Err(VaultError::Collision {
                    name,
                    paths: paths.into_iter().collect(),
                });
            }
            if let Some(path) = paths.into_iter().next() {
                entries.insert(name, path);
            }
        }

        Ok(FileIndex { entries })
    }
}

/// 检查目录存在，返回其绝对路径
///
/// # Arguments
///
/// * `path` - 目录路径
/// * `role` - 目录用途，用于错误信息
pub fn ensure_dir(path: &Path, role: &'static str) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(VaultError::NotADirectory {
            path: path.to_path_buf(),
            role,
        });
    }
    std::fs::canonicalize(path).map_err(|e| VaultError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_index_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::write(root.join("a.md"), "# A").unwrap();
        fs::write(root.join("nested/b.png"), [0u8, 1, 2]).unwrap();
        fs::write(root.join("nested/deeper/c.md"), "# C").unwrap();

        let index = FileIndex::build(root, None).unwrap();

        assert_eq!(index.len(), 3);
        let c = index.get("c.md").unwrap();
        assert!(c.is_absolute());
        assert!(c.ends_with("nested/deeper/c.md"));
    }

    #[test]
    fn test_index_with_extension_filter() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("note.md"), "# Note").unwrap();
        fs::write(root.join("image.png"), [1u8]).unwrap();
        fs::write(root.join("draft.md.bak"), "old").unwrap();

        let index = FileIndex::build(root, Some(".md")).unwrap();

        let names: Vec<&str> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["note.md"]);
    }

    #[test]
    fn test_index_collision() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("one")).unwrap();
        fs::create_dir_all(root.join("two")).unwrap();
        fs::write(root.join("one/same.md"), "1").unwrap();
        fs::write(root.join("two/same.md"), "2").unwrap();
        fs::write(root.join("unique.md"), "3").unwrap();

        let err = FileIndex::build(root, Some(".md")).unwrap_err();

        match err {
            VaultError::Collision { name, paths } => {
                assert_eq!(name, "same.md");
                assert_eq!(paths.len(), 2);
            }
            other => panic!("Expected Collision, got {:?}", other),
        }
    }

    #[test]
    fn test_collision_outside_filter_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("one")).unwrap();
        fs::write(root.join("one/pic.png"), [1u8]).unwrap();
        fs::write(root.join("pic.png"), [2u8]).unwrap();
        fs::write(root.join("note.md"), "# Note").unwrap();

        let index = FileIndex::build(root, Some(".md")).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileIndex::build(&temp_dir.path().join("missing"), None).unwrap_err();
        assert!(matches!(err, VaultError::NotADirectory { .. }));
    }

    #[test]
    fn test_index_root_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.md");
        fs::write(&file, "x").unwrap();

        let err = FileIndex::build(&file, None).unwrap_err();
        assert!(matches!(err, VaultError::NotADirectory { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let index = FileIndex::build(temp_dir.path(), None).unwrap();
        assert!(index.is_empty());
    }
}
