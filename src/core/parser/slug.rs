//! 文件名 slug 化

use std::path::Path;

/// 将标题或文件名主干转换为 slug
///
/// 转为小写，撇号直接删除，其余非字母数字字符的连续片段折叠为一个 `-`，
/// 并去掉首尾的分隔符。例如 `"My Other Note"` -> `"my-other-note"`
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}

/// 计算笔记的输出文件名：slug 化的主干加上原扩展名
///
/// `"My Note.md"` -> `"my-note.md"`
pub fn slugify_md_filename(file_name: &str) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    match path.extension() {
        Some(ext) => format!("{}.{}", slugify(&stem), ext.to_string_lossy()),
        None => slugify(&stem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Other Note"), "my-other-note");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
        assert_eq!(slugify("under_score"), "under-score");
        assert_eq!(slugify("2023-01-05 Weekly Review"), "2023-01-05-weekly-review");
    }

    #[test]
    fn test_slugify_drops_apostrophes() {
        assert_eq!(slugify("Don't Panic"), "dont-panic");
        assert_eq!(slugify("Ada\u{2019}s notes"), "adas-notes");
    }

    #[test]
    fn test_slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Café Notes"), "café-notes");
    }

    #[test]
    fn test_slugify_md_filename() {
        assert_eq!(slugify_md_filename("My Note.md"), "my-note.md");
        assert_eq!(slugify_md_filename("2023-01-05 Daily.md"), "2023-01-05-daily.md");
        assert_eq!(slugify_md_filename("README"), "readme");
    }
}
