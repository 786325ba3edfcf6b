//! # Pagevox Library
//!
//! 一个用于本地化已保存网页的工具库：遍历 HTML 文档中的文本节点，
//! 通过远程翻译接口逐个重写文本内容，并可将指定内容块朗读出来。
//!
//! ## 模块组织
//!
//! - `core` - 核心功能和文档处理流程
//! - `parsers` - HTML 解析和 DOM 操作
//! - `network` - 网络通信（获取输入页面）
//! - `translation` - 翻译管道（过滤器、端点、顺序翻译）
//! - `preferences` - 语言偏好的持久化存储
//! - `speech` - 语音播放控制（speak / pause / resume / stop）

pub mod core;
pub mod network;
pub mod parsers;
pub mod preferences;
pub mod speech;
pub mod translation;

// Re-export commonly used items for convenience
pub use crate::core::{localize_document, LocalizeOptions, PagevoxError};
pub use crate::parsers::html::{html_to_dom, serialize_document};
pub use crate::translation::{translate_dom, TranslationProvider, TranslationSummary};
