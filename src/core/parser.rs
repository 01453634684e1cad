//! 链接语法解析
//!
//! 只处理 wiki 链接和文件名，不解析其余 Markdown 结构

pub mod slug;
pub mod wiki_link;

pub use slug::{slugify, slugify_md_filename};
pub use wiki_link::{parse_wiki_links, WikiLink};
