//! Wiki 链接解析模块
//!
//! 提取 Markdown 中的 `[[目标]]` 与 `[[目标|显示文本]]` 链接
//!
//! ## 链接格式
//!
//! ```markdown
//! [[目标]]              # 目标同时作为显示文本
//! [[目标|显示文本]]     # 按第一个 | 拆分
//! [[目标|]]             # 显示文本为空
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// 链接内部不含方括号也不跨行，因此总是从离 `]]` 最近的 `[[` 开始匹配
static WIKI_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]\n]*)\]\]").expect("wiki link pattern is valid"));

/// Wiki 链接结构
///
/// 只在一次改写过程中存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLink {
    /// 原始文本，包含 `[[` 和 `]]`
    pub raw: String,
    /// 解析目标
    pub target: String,
    /// 显示文本
    pub text: String,
}

impl WikiLink {
    /// 从去掉方括号后的内部文本构造链接
    ///
    /// # Arguments
    ///
    /// * `raw` - 完整的链接文本
    /// * `inner` - `[[` 与 `]]` 之间的内容
    pub fn from_inner(raw: &str, inner: &str) -> Self {
        let (target, text) = match inner.split_once('|') {
            Some((target, text)) => (target, text),
            None => (inner, inner),
        };

        Self {
            raw: raw.to_string(),
            target: target.to_string(),
            text: text.to_string(),
        }
    }
}

/// 解析 wiki 链接
///
/// # Arguments
///
/// * `content` - Markdown 内容
///
/// # Returns
///
/// 按出现顺序排列的链接，重复出现的链接各自保留一项
pub fn parse_wiki_links(content: &str) -> Vec<WikiLink> {
    WIKI_LINK_RE
        .captures_iter(content)
        .filter_map(|cap| {
            let raw = cap.get(0)?;
            let inner = cap.get(1)?;
            Some(WikiLink::from_inner(raw.as_str(), inner.as_str()))
        })
        .collect()
}
