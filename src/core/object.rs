//! 资源对象存储
//!
//! 按内容的 SHA-256 命名资源文件，相同内容只写一次

use crate::core::error::{Result, VaultError};
use crate::core::indexer::FileIndex;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// 内容寻址文件名：哈希值加上原文件扩展名
pub fn hashed_file_name(content: &[u8], original: &Path) -> String {
    let hash = hash_content(content);
    match original.extension() {
        Some(ext) => format!("{}.{}", hash, ext.to_string_lossy()),
        None => hash,
    }
}

/// 写入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectWrite {
    /// 新写入的文件名
    Written(String),
    /// 同名文件已存在，跳过写入
    Existing(String),
}

impl ObjectWrite {
    pub fn name(&self) -> &str {
        match self {
            ObjectWrite::Written(name) | ObjectWrite::Existing(name) => name,
        }
    }
}

pub fn write_object(output_dir: &Path, content: &[u8], original: &Path) -> Result<ObjectWrite> {
    let name = hashed_file_name(content, original);
    let object_path = output_dir.join(&name);

    if object_path.exists() {
        return Ok(ObjectWrite::Existing(name));
    }

    // 先写入同目录下的临时文件，完整写完后再改名，失败时不会留下残缺对象
    let mut staged = NamedTempFile::new_in(output_dir).map_err(|e| VaultError::io(output_dir, e))?;
    staged
        .write_all(content)
        .map_err(|e| VaultError::io(staged.path(), e))?;
    staged
        .persist(&object_path)
        .map_err(|e| VaultError::io(&object_path, e.error))?;

    Ok(ObjectWrite::Written(name))
}

/// 资源重命名表中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// 资源的源路径
    pub original_path: PathBuf,
    /// 内容寻址后的文件名
    pub hashed_name: String,
}

/// 资源重命名表
///
/// 原文件名到 (源路径, 哈希文件名) 的映射，按文件名排序遍历
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRenameMap {
    entries: BTreeMap<String, AssetEntry>,
    written: usize,
}

impl AssetRenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一项；已存在的文件名不会被覆盖
    pub fn insert(&mut self, name: impl Into<String>, entry: AssetEntry) {
        self.entries.entry(name.into()).or_insert(entry);
    }

    pub fn get(&self, name: &str) -> Option<&AssetEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 本次实际写入的对象数
    pub fn written(&self) -> usize {
        self.written
    }
}

/// 将索引中的所有资源写入输出目录
///
/// # Arguments
///
/// * `assets` - 资源文件索引
/// * `output_dir` - 资源输出目录
///
/// # Returns
///
/// 资源重命名表；任何一个文件读写失败都会中止整个过程
pub fn materialize(assets: &FileIndex, output_dir: &Path) -> Result<AssetRenameMap> {
    let mut renames = AssetRenameMap::new();

    for (name, path) in assets.iter() {
        let content = fs::read(path).map_err(|e| VaultError::io(path, e))?;

        let hashed_name = match write_object(output_dir, &content, path)? {
            ObjectWrite::Written(hashed) => {
                debug!("Wrote asset {} as {}", name, hashed);
                renames.written += 1;
                hashed
            }
            ObjectWrite::Existing(hashed) => {
                debug!("Asset {} already stored as {}", name, hashed);
                hashed
            }
        };

        renames.insert(
            name,
            AssetEntry {
                original_path: path.to_path_buf(),
                hashed_name,
            },
        );
    }

    info!(
        "Materialized {} assets ({} new objects)",
        renames.len(),
        renames.written
    );
    Ok(renames)
}
