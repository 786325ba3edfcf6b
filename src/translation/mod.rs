//! # 翻译模块
//!
//! 整页翻译功能：收集 DOM 中符合条件的文本节点，
//! 逐个（严格串行）调用远程翻译端点并把译文写回。
//!
//! # 模块组织
//!
//! - `filters` - 文本与父元素标签的过滤谓词
//! - `endpoint` - Google 翻译端点（URL 构造与响应解析）
//! - `pipeline` - 顺序翻译管道与 DOM 适配层
//! - `error` - 统一错误类型

pub mod endpoint;
pub mod error;
pub mod filters;
pub mod pipeline;

// Re-export commonly used items for convenience
pub use endpoint::{parse_translation_response, GoogleTranslateEndpoint, DEFAULT_ENDPOINT};
pub use error::{TranslationError, TranslationResult};
pub use filters::{is_skipped_parent_tag, is_translatable_text, SKIPPED_PARENT_TAGS};
pub use pipeline::{translate_dom, translate_fragments, TranslationProvider, TranslationSummary};
