//! 翻译管道模块
//!
//! 将纯文本翻译逻辑与 DOM 读写分离：
//!
//! - [`translate_fragments`] 对一组文本片段做严格顺序的翻译，
//!   单个片段失败不影响其余片段；
//! - [`translate_dom`] 是薄适配层，负责从 DOM 收集符合条件的
//!   文本节点、调用纯翻译逻辑并把结果写回。

use async_trait::async_trait;
use markup5ever_rcdom::Handle;
use tracing::{debug, warn};

use crate::parsers::html::dom::{get_node_name, get_parent_node};
use crate::parsers::html::text::{collect_text_nodes, set_text_content, text_node_content};
use crate::translation::error::TranslationResult;
use crate::translation::filters::{is_skipped_parent_tag, is_translatable_text};

/// 翻译提供者
///
/// 翻译管道对远程端点的唯一依赖，便于在测试中注入模拟实现。
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// 将一段文本翻译到目标语言（源语言自动检测）
    async fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String>;
}

/// 一次整页翻译的统计结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    /// 符合翻译条件的文本节点数
    pub eligible: usize,
    /// 成功翻译并写回的节点数
    pub translated: usize,
    /// 翻译失败、保留原文的节点数
    pub failed: usize,
    /// 因空白或黑名单父元素而跳过的节点数
    pub skipped: usize,
}

/// 顺序翻译一组文本片段
///
/// 请求严格串行：前一个片段处理完毕后才发起下一个请求，
/// 输出顺序与输入顺序一致。失败的片段记录日志并以 `None`
/// 占位，不会中断整个序列。
pub async fn translate_fragments(
    provider: &dyn TranslationProvider,
    fragments: &[String],
    target_language: &str,
) -> Vec<Option<String>> {
    let mut results = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        match provider.translate(fragment, target_language).await {
            Ok(translated) => results.push(Some(translated)),
            Err(err) => {
                warn!("Translation failed: {}", err);
                results.push(None);
            }
        }
    }

    results
}

/// 判断文本节点是否需要翻译
///
/// 两个条件：去除空白后仍有内容，且直接父元素不在黑名单中。
fn is_eligible_text_node(node: &Handle) -> bool {
    let Some(text) = text_node_content(node) else {
        return false;
    };
    if !is_translatable_text(&text) {
        return false;
    }

    match get_parent_node(node) {
        Some(parent) => match get_node_name(&parent) {
            Some(tag_name) => !is_skipped_parent_tag(tag_name),
            None => true,
        },
        None => true,
    }
}

/// 翻译整个 DOM 树的文本内容
///
/// 按文档顺序逐个翻译符合条件的文本节点并写回译文；
/// 单个节点失败只影响该节点，遍历始终进行到底。
pub async fn translate_dom(
    provider: &dyn TranslationProvider,
    root: &Handle,
    target_language: &str,
) -> TranslationSummary {
    let mut summary = TranslationSummary::default();

    let mut eligible_nodes: Vec<Handle> = Vec::new();
    for node in collect_text_nodes(root) {
        if is_eligible_text_node(&node) {
            eligible_nodes.push(node);
        } else {
            summary.skipped += 1;
        }
    }
    summary.eligible = eligible_nodes.len();

    let fragments: Vec<String> = eligible_nodes
        .iter()
        .map(|node| {
            text_node_content(node)
                .map(|text| text.trim().to_string())
                .unwrap_or_default()
        })
        .collect();

    let translations = translate_fragments(provider, &fragments, target_language).await;

    for (node, translated) in eligible_nodes.iter().zip(translations) {
        match translated {
            Some(text) => {
                set_text_content(node, &text);
                summary.translated += 1;
            }
            None => summary.failed += 1,
        }
    }

    debug!(
        "Translated {}/{} text nodes ({} failed, {} skipped)",
        summary.translated, summary.eligible, summary.failed, summary.skipped
    );

    summary
}
