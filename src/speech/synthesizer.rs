//! 语音合成接口模块
//!
//! 定义语音控制器与平台语音能力之间的接口。真实后端
//! （`system` 模块）封装平台的语音合成引擎；测试中注入
//! 内存实现即可覆盖完整的状态机行为。

use thiserror::Error;

/// 一次朗读请求
///
/// 同一时刻最多只有一个话语处于"当前"状态；发起新的朗读会
/// 先取消之前的话语。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// 朗读的文本内容
    pub text: String,
    /// 语言标签（如 "en"、"fr"）
    pub lang: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Utterance {
            text: text.into(),
            lang: lang.into(),
        }
    }
}

/// 语音合成错误
#[derive(Error, Debug)]
pub enum SpeechError {
    /// 平台语音能力不可用
    #[error("语音合成不可用: {0}")]
    Unavailable(String),

    /// 后端不支持该操作
    #[error("后端不支持 {0} 操作")]
    Unsupported(&'static str),

    /// 后端内部错误
    #[error("语音后端错误: {0}")]
    Backend(String),
}

/// 播放结束回调
pub type EndCallback = Box<dyn FnMut() + Send>;

/// 语音合成后端接口
///
/// 对应平台语音子系统的 speak / pause / resume / cancel 操作
/// 以及播放结束通知。
pub trait SpeechSynthesis {
    /// 提交话语开始播放；`on_end` 在播放自然结束时被调用
    fn speak(&mut self, utterance: &Utterance, on_end: EndCallback) -> Result<(), SpeechError>;

    /// 暂停当前播放
    fn pause(&mut self) -> Result<(), SpeechError>;

    /// 恢复暂停的播放
    fn resume(&mut self) -> Result<(), SpeechError>;

    /// 无条件取消播放
    fn cancel(&mut self) -> Result<(), SpeechError>;

    /// 是否正在播放
    fn is_speaking(&self) -> bool;
}
