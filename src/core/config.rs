//! 配置模块
//!
//! 从 YAML 文件加载 vault 处理配置
//!
//! ## 配置格式
//!
//! ```yaml
//! vault:
//!   path: ./vault
//!   asset_path: ./vault/assets
//! output:
//!   post_output_path: ./site/_posts
//!   asset_output_path: ./site/assets
//!   relative_asset_variable: site.assets_location
//! ```

use crate::core::error::{Result, VaultError};
use std::path::{Path, PathBuf};
use yaml_rust2::{Yaml, YamlLoader};

/// 资源链接前缀的默认值
pub const DEFAULT_ASSET_VARIABLE: &str = "site.assets_location";

/// vault 处理配置
///
/// 由调用方显式构造并传入处理器，不存在全局状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    /// Markdown 笔记根目录
    pub vault_path: PathBuf,
    /// 资源文件根目录
    pub asset_path: PathBuf,
    /// 文章输出目录
    pub post_output_path: PathBuf,
    /// 资源输出目录
    pub asset_output_path: PathBuf,
    /// 资源链接使用的前缀变量
    pub relative_asset_variable: String,
}

impl VaultConfig {
    /// 使用默认资源前缀创建配置
    pub fn new(
        vault_path: impl Into<PathBuf>,
        asset_path: impl Into<PathBuf>,
        post_output_path: impl Into<PathBuf>,
        asset_output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vault_path: vault_path.into(),
            asset_path: asset_path.into(),
            post_output_path: post_output_path.into(),
            asset_output_path: asset_output_path.into(),
            relative_asset_variable: DEFAULT_ASSET_VARIABLE.to_string(),
        }
    }

    /// 设置资源前缀
    pub fn with_asset_variable(mut self, variable: impl Into<String>) -> Self {
        self.relative_asset_variable = variable.into();
        self
    }

    /// 从文件加载配置
    ///
    /// # Arguments
    ///
    /// * `path` - YAML 配置文件路径
    ///
    /// # Returns
    ///
    /// 加载的配置；文件不存在、无法解析或缺少必需字段时返回 `ConfigLoad` 错误
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VaultError::ConfigLoad {
            path: path.to_path_buf(),
            message: format!("{}. Is the file path correct?", e),
        })?;
        Self::from_yaml_str(&content, path)
    }

    /// 从 YAML 字符串解析配置
    ///
    /// `origin` 只用于错误信息
    pub fn from_yaml_str(content: &str, origin: &Path) -> Result<Self> {
        let fail = |message: String| VaultError::ConfigLoad {
            path: origin.to_path_buf(),
            message,
        };

        let docs = YamlLoader::load_from_str(content).map_err(|e| fail(e.to_string()))?;
        let doc = docs
            .first()
            .ok_or_else(|| fail("configuration document is empty".to_string()))?;

        let vault = &doc["vault"];
        let output = &doc["output"];

        let relative_asset_variable = match &output["relative_asset_variable"] {
            Yaml::BadValue | Yaml::Null => DEFAULT_ASSET_VARIABLE.to_string(),
            value => value
                .as_str()
                .ok_or_else(|| fail("output.relative_asset_variable must be a string".to_string()))?
                .to_string(),
        };

        Ok(Self {
            vault_path: required_path(vault, "vault", "path").map_err(fail)?,
            asset_path: required_path(vault, "vault", "asset_path").map_err(fail)?,
            post_output_path: required_path(output, "output", "post_output_path").map_err(fail)?,
            asset_output_path: required_path(output, "output", "asset_output_path")
                .map_err(fail)?,
            relative_asset_variable,
        })
    }
}

fn required_path(
    section: &Yaml,
    section_name: &str,
    key: &str,
) -> std::result::Result<PathBuf, String> {
    section[key]
        .as_str()
        .map(PathBuf::from)
        .ok_or_else(|| format!("missing string value for {}.{}", section_name, key))
}
