//! 链接改写
//!
//! 把 wiki 链接改写为静态站点生成器能识别的 Markdown 链接：
//!
//! ```markdown
//! [[diagram.png|see]]   ->  [see](site.assets_location/<sha256>.png)
//! [[My Other Note]]     ->  [My Other Note]({% post_url my-other-note %})
//! ```

use crate::core::object::AssetRenameMap;
use crate::core::parser::slug::slugify;
use crate::core::parser::wiki_link::{parse_wiki_links, WikiLink};

/// 链接解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 指向资源对象
    Asset { hashed_name: String },
    /// 指向另一篇文章，由站点生成器解析
    Post { slug: String },
}

/// 解析链接目标
///
/// 按重命名表的遍历顺序，第一个文件名或源路径包含目标字符串的资源胜出；
/// 都不匹配时回退为文章引用
pub fn resolve(link: &WikiLink, assets: &AssetRenameMap) -> Resolution {
    let hit = assets.iter().find(|(name, entry)| {
        name.contains(link.target.as_str())
            || entry.original_path.to_string_lossy().contains(link.target.as_str())
    });

    match hit {
        Some((_, entry)) => Resolution::Asset {
            hashed_name: entry.hashed_name.clone(),
        },
        None => Resolution::Post {
            slug: slugify(&link.target),
        },
    }
}

/// 生成替换后的 Markdown 链接
pub fn render(link: &WikiLink, resolution: &Resolution, asset_base: &str) -> String {
    match resolution {
        Resolution::Asset { hashed_name } => {
            format!("[{}]({}/{})", link.text, asset_base, hashed_name)
        }
        Resolution::Post { slug } => format!("[{}]({{% post_url {} %}})", link.text, slug),
    }
}

/// 单篇文本的改写结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub content: String,
    /// 改写为资源链接的数量
    pub asset_links: usize,
    /// 改写为文章引用的数量
    pub post_links: usize,
}

/// 链接改写器
///
/// 持有只读的资源重命名表，可以被多篇文档共享
pub struct LinkRewriter<'a> {
    assets: &'a AssetRenameMap,
    asset_base: &'a str,
}

impl<'a> LinkRewriter<'a> {
    /// # Arguments
    ///
    /// * `assets` - 资源重命名表
    /// * `asset_base` - 资源链接前缀，如 `site.assets_location`
    pub fn new(assets: &'a AssetRenameMap, asset_base: &'a str) -> Self {
        Self { assets, asset_base }
    }

    /// 改写文本中的所有 wiki 链接
    ///
    /// 按提取顺序逐个替换剩余文本中最左侧的同一链接；没有闭合 `]]` 的文本保持原样
    pub fn rewrite(&self, content: &str) -> Rewritten {
        let mut output = String::with_capacity(content.len());
        let mut rest = content;
        let mut asset_links = 0;
        let mut post_links = 0;

        for link in parse_wiki_links(content) {
            let Some(at) = rest.find(&link.raw) else {
                continue;
            };

            let resolution = resolve(&link, self.assets);
            match resolution {
                Resolution::Asset { .. } => asset_links += 1,
                Resolution::Post { .. } => post_links += 1,
            }

            output.push_str(&rest[..at]);
            output.push_str(&render(&link, &resolution, self.asset_base));
            rest = &rest[at + link.raw.len()..];
        }
        output.push_str(rest);

        Rewritten {
            content: output,
            asset_links,
            post_links,
        }
    }
}

/// 改写文本中的 wiki 链接
///
/// # Arguments
///
/// * `content` - Markdown 内容
/// * `assets` - 资源重命名表
/// * `asset_base` - 资源链接前缀
///
/// # Returns
///
/// 改写后的文本
pub fn rewrite_links(content: &str, assets: &AssetRenameMap, asset_base: &str) -> String {
    LinkRewriter::new(assets, asset_base).rewrite(content).content
}
