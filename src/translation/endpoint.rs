//! 翻译端点模块
//!
//! 封装对 Google 翻译接口的 HTTP 访问：构造查询 URL、
//! 解析嵌套数组形式的响应。

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde_json::Value;

use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::pipeline::TranslationProvider;

/// 默认翻译端点地址
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google 翻译端点
///
/// 每次调用发起一个 GET 请求，参数为
/// `client=gtx&sl=auto&tl=<target>&dt=t&q=<urlencoded text>`。
pub struct GoogleTranslateEndpoint {
    client: Client,
    base_url: String,
}

impl GoogleTranslateEndpoint {
    /// 使用默认端点地址创建
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_ENDPOINT.to_string())
    }

    /// 使用自定义端点地址创建
    pub fn with_base_url(client: Client, base_url: String) -> Self {
        GoogleTranslateEndpoint { client, base_url }
    }

    /// 构造查询 URL
    ///
    /// 源语言固定为 `auto`，查询文本经过百分号编码。
    pub fn build_query_url(&self, target_language: &str, text: &str) -> String {
        format!(
            "{}?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.base_url,
            target_language,
            utf8_percent_encode(text, NON_ALPHANUMERIC)
        )
    }
}

/// 解析翻译响应
///
/// 响应是一个嵌套数组，译文位于第一个翻译段的第一个元素的
/// 第一个元素处（`data[0][0][0]`）。
pub fn parse_translation_response(body: &str) -> TranslationResult<String> {
    let data: Value = serde_json::from_str(body)?;

    data.get(0)
        .and_then(|segments| segments.get(0))
        .and_then(|segment| segment.get(0))
        .and_then(|translated| translated.as_str())
        .map(|s| s.to_string())
        .ok_or(TranslationError::MalformedResponse)
}

#[async_trait]
impl TranslationProvider for GoogleTranslateEndpoint {
    async fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        let url = self.build_query_url(target_language, text);
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_translation_response(&body)
    }
}
