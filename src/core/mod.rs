pub mod config;
pub mod error;
pub mod indexer;
pub mod object;
pub mod parser;
pub mod processor;
pub mod resolver;

pub use config::{VaultConfig, DEFAULT_ASSET_VARIABLE};
pub use error::{Result, VaultError};

pub use indexer::FileIndex;

pub use object::{hash_content, materialize, AssetEntry, AssetRenameMap, ObjectWrite};

pub use parser::{parse_wiki_links, slugify, slugify_md_filename, WikiLink};

pub use resolver::{rewrite_links, LinkRewriter, Resolution, Rewritten};

pub use processor::{process, ProcessSummary, VaultProcessor};
