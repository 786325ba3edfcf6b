//! 翻译模块统一错误处理

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone)]
pub enum TranslationError {
    /// 网络错误
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 响应解析错误
    #[error("解析错误: {0}")]
    ParseError(String),

    /// 响应结构不符合预期（缺少嵌套数组段）
    #[error("翻译响应格式无效")]
    MalformedResponse,
}

/// 翻译操作的结果类型
pub type TranslationResult<T> = Result<T, TranslationError>;

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(err: serde_json::Error) -> Self {
        TranslationError::ParseError(err.to_string())
    }
}
