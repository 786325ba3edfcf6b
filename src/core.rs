//! 核心模块
//!
//! 文档级处理流程：读取输入页面（本地文件或远程 URL）、
//! 解析为 DOM、整页翻译、再序列化输出。

use std::fs;
use std::path::Path;

use markup5ever_rcdom::{Handle, RcDom};
use thiserror::Error;
use tracing::{info, warn};

use crate::network::{is_remote_url, NetworkError, Session};
use crate::parsers::html::{
    find_node_by_id, get_child_node_by_name, html_to_dom, node_text_content, serialize_document,
};
use crate::preferences::Preferences;
use crate::translation::{translate_dom, TranslationProvider, TranslationSummary};

/// 朗读内容块的默认元素 id
pub const SPEAKABLE_CONTENT_ID: &str = "speakable-content";

/// 顶层错误类型
#[derive(Error, Debug)]
pub enum PagevoxError {
    #[error("无法读取输入 '{path}': {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("无法写入输出 '{path}': {source}")]
    Output {
        path: String,
        source: std::io::Error,
    },

    #[error("未指定目标语言，且没有已保存的语言偏好")]
    NoTargetLanguage,
}

/// 文档处理选项
#[derive(Debug, Clone)]
pub struct LocalizeOptions {
    /// 目标语言代码（如 "fr"）
    pub target_language: String,
    /// 文档字符集标签；空串表示按 UTF-8 处理
    pub document_encoding: String,
}

impl LocalizeOptions {
    pub fn new(target_language: impl Into<String>) -> Self {
        LocalizeOptions {
            target_language: target_language.into(),
            document_encoding: String::new(),
        }
    }
}

/// 读取输入页面的字节
///
/// `http(s)` URL 通过会话下载，其余输入按本地路径读取。
pub async fn read_document(session: &Session, input: &str) -> Result<Vec<u8>, PagevoxError> {
    if is_remote_url(input) {
        Ok(session.retrieve(input).await?)
    } else {
        fs::read(Path::new(input)).map_err(|source| PagevoxError::Input {
            path: input.to_string(),
            source,
        })
    }
}

/// 定位文档的 body 节点
pub fn find_body(dom: &RcDom) -> Option<Handle> {
    let html = get_child_node_by_name(&dom.document, "html")?;
    get_child_node_by_name(&html, "body")
}

/// 解析本次翻译的目标语言
///
/// 显式选择会保存为语言偏好并立即使用；未选择时回放已保存的
/// 偏好；两者都没有时报错。
pub fn resolve_target_language(
    selection: Option<String>,
    preferences: Option<&Preferences>,
) -> Result<String, PagevoxError> {
    match selection {
        Some(language) => {
            if let Some(preferences) = preferences {
                if let Err(err) = preferences.set_preferred_language(&language) {
                    warn!("Cannot save language preference: {}", err);
                }
            }
            Ok(language)
        }
        None => preferences
            .and_then(|p| p.preferred_language().ok().flatten())
            .ok_or(PagevoxError::NoTargetLanguage),
    }
}

/// 本地化一份 HTML 文档
///
/// 解析字节为 DOM，按文档顺序翻译 body 之下全部符合条件的
/// 文本节点（head 内的文本保持原样），再序列化为字节返回。
/// 翻译统计一并返回，供调用方打印。
pub async fn localize_document(
    provider: &dyn TranslationProvider,
    data: &[u8],
    options: &LocalizeOptions,
) -> (Vec<u8>, TranslationSummary) {
    let dom = html_to_dom(data, options.document_encoding.clone());

    // 翻译范围限定在 body 之内
    let root = find_body(&dom).unwrap_or_else(|| dom.document.clone());
    let summary = translate_dom(provider, &root, &options.target_language).await;
    info!(
        "Translated {} of {} eligible text nodes into '{}'",
        summary.translated, summary.eligible, options.target_language
    );

    let output = serialize_document(dom, options.document_encoding.clone());
    (output, summary)
}

/// 提取朗读内容块的文本
///
/// 查找指定 id 的元素并拼接其全部后代文本；元素缺失时返回
/// `None`，对应的朗读功能静默禁用。
pub fn speakable_text(dom: &RcDom, content_id: &str) -> Option<String> {
    let node = find_node_by_id(&dom.document, content_id)?;
    let text = node_text_content(&node);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
