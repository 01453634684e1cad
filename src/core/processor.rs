//! Vault 处理流程
//!
//! 1. 校验四个目录
//! 2. 索引笔记和资源
//! 3. 写出全部资源对象
//! 4. 逐篇改写笔记并写出

use crate::core::config::VaultConfig;
use crate::core::error::{Result, VaultError};
use crate::core::indexer::{ensure_dir, FileIndex};
use crate::core::object::materialize;
use crate::core::parser::slug::slugify_md_filename;
use crate::core::resolver::LinkRewriter;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 笔记文件后缀
pub const NOTE_EXTENSION: &str = ".md";

/// 一次运行的汇总
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    /// 写出的文章数
    pub notes_written: usize,
    /// 索引到的资源数
    pub assets_indexed: usize,
    /// 新写入的资源对象数
    pub assets_written: usize,
    /// 已存在而跳过的资源对象数
    pub assets_reused: usize,
    /// 改写为资源链接的数量
    pub asset_links: usize,
    /// 改写为文章引用的数量
    pub post_links: usize,
}

/// 校验后的目录
struct ResolvedPaths {
    vault: PathBuf,
    assets: PathBuf,
    posts: PathBuf,
    asset_output: PathBuf,
}

/// Vault 处理器
pub struct VaultProcessor {
    config: VaultConfig,
}

impl VaultProcessor {
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }

    /// 执行完整的处理流程
    ///
    /// 任何错误都会终止运行；目录校验在写出任何文件之前完成
    pub fn process(&self) -> Result<ProcessSummary> {
        let paths = self.resolve_paths()?;
        let mut summary = ProcessSummary::default();

        let notes = FileIndex::build(&paths.vault, Some(NOTE_EXTENSION))?;
        let assets = FileIndex::build(&paths.assets, None)?;
        info!(
            "Found {} notes and {} assets",
            notes.len(),
            assets.len()
        );

        let renames = materialize(&assets, &paths.asset_output)?;
        summary.assets_indexed = renames.len();
        summary.assets_written = renames.written();
        summary.assets_reused = renames.len() - renames.written();

        let rewriter = LinkRewriter::new(&renames, &self.config.relative_asset_variable);
        let mut written = BTreeSet::new();

        for (name, path) in notes.iter() {
            let slug_name = slugify_md_filename(name);
            if !written.insert(slug_name.clone()) {
                warn!("{} overwrites an earlier note with output name {}", name, slug_name);
            }

            let content = fs::read_to_string(path).map_err(|e| VaultError::io(path, e))?;
            let rewritten = rewriter.rewrite(&content);

            let output = paths.posts.join(&slug_name);
            fs::write(&output, rewritten.content).map_err(|e| VaultError::io(&output, e))?;
            debug!(
                "{} -> {} ({} asset links, {} post links)",
                name, slug_name, rewritten.asset_links, rewritten.post_links
            );

            summary.notes_written += 1;
            summary.asset_links += rewritten.asset_links;
            summary.post_links += rewritten.post_links;
        }

        info!("Wrote {} posts to {:?}", summary.notes_written, paths.posts);
        Ok(summary)
    }

    fn resolve_paths(&self) -> Result<ResolvedPaths> {
        Ok(ResolvedPaths {
            vault: ensure_dir(&self.config.vault_path, "vault path")?,
            assets: ensure_dir(&self.config.asset_path, "asset path")?,
            posts: ensure_dir(&self.config.post_output_path, "post output path")?,
            asset_output: ensure_dir(&self.config.asset_output_path, "asset output path")?,
        })
    }
}

/// 使用给定配置处理 vault
pub fn process(config: &VaultConfig) -> Result<ProcessSummary> {
    VaultProcessor::new(config.clone()).process()
}
