//! 文本过滤器模块
//!
//! 提供判断文本节点是否需要翻译的两个独立谓词：
//! 父元素标签黑名单过滤和空白文本过滤。

/// 不翻译其直接文本内容的元素标签
pub const SKIPPED_PARENT_TAGS: [&str; 4] = ["script", "style", "select", "option"];

/// 判断父元素标签是否在黑名单中（大小写不敏感）
pub fn is_skipped_parent_tag(tag_name: &str) -> bool {
    SKIPPED_PARENT_TAGS
        .iter()
        .any(|skipped| tag_name.eq_ignore_ascii_case(skipped))
}

/// 判断文本去除首尾空白后是否仍有内容
pub fn is_translatable_text(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_denylisted_tags_case_insensitively() {
        assert!(is_skipped_parent_tag("script"));
        assert!(is_skipped_parent_tag("SCRIPT"));
        assert!(is_skipped_parent_tag("Style"));
        assert!(is_skipped_parent_tag("select"));
        assert!(is_skipped_parent_tag("OPTION"));
    }

    #[test]
    fn keeps_ordinary_tags() {
        assert!(!is_skipped_parent_tag("p"));
        assert!(!is_skipped_parent_tag("div"));
        assert!(!is_skipped_parent_tag("title"));
        assert!(!is_skipped_parent_tag("selection"));
    }

    #[test]
    fn rejects_whitespace_only_text() {
        assert!(!is_translatable_text(""));
        assert!(!is_translatable_text("   "));
        assert!(!is_translatable_text("\n\t  \n"));
    }

    #[test]
    fn accepts_text_with_content() {
        assert!(is_translatable_text("Hello world"));
        assert!(is_translatable_text("  padded  "));
    }
}
