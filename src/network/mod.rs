//! # 网络模块
//!
//! 负责获取输入页面：当输入是 `http(s)` URL 时，通过共享的
//! HTTP 会话下载页面字节；本地文件路径则由调用方直接读取。

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:136.0) Gecko/20100101 Firefox/136.0";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 网络错误
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("无法创建 HTTP 客户端: {0}")]
    Client(String),

    #[error("请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("无效的 URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// HTTP 会话
///
/// 封装一个可复用的 `reqwest` 客户端；整个处理流程共享同一个会话。
pub struct Session {
    client: Client,
}

impl Session {
    /// 创建新的会话
    pub fn new() -> Result<Self, NetworkError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| NetworkError::Client(e.to_string()))?;

        Ok(Session { client })
    }

    /// 下载指定 URL 的页面字节
    pub async fn retrieve(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        let url = Url::parse(url)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// 借用底层客户端（供翻译端点复用连接池）
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// 判断输入字符串是否为需要下载的远程地址
pub fn is_remote_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}
