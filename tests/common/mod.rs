// 集成测试公共模块
//
// 提供测试辅助工具：HTML 测试页、模拟翻译端点、模拟语音后端
//
// 该文件通过 include! 引入各个测试 crate，因此不能使用内部
// 属性；按条目标注 allow(dead_code)。

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use markup5ever_rcdom::RcDom;

use pagevox::parsers::html::html_to_dom;
use pagevox::speech::{EndCallback, SpeechError, SpeechSynthesis, Utterance};
use pagevox::translation::{TranslationError, TranslationProvider, TranslationResult};

/// HTML 测试辅助工具
#[allow(dead_code)]
pub struct HtmlTestHelper;

#[allow(dead_code)]
impl HtmlTestHelper {
    pub fn create_test_dom(html: &str) -> RcDom {
        html_to_dom(html.as_bytes(), "utf-8".to_string())
    }

    /// 简单英文页面：含脚本、样式、下拉框与可朗读内容块
    pub fn create_simple_english_page() -> String {
        concat!(
            "<html><head>",
            "<title>Test Page</title>",
            "</head><body>",
            "<h1>Welcome to Test</h1>",
            "<style>body { color: red; }</style>",
            "<script>var untouchable = 1;</script>",
            "<p>This is a test paragraph.</p>",
            "<select><option>Keep me</option></select>",
            "<div id=\"speakable-content\">Read this aloud.</div>",
            "<p>   </p>",
            "</body></html>",
        )
        .to_string()
    }

    /// 顺序性测试页面：三个依次出现的段落 A、B、C
    pub fn create_sequential_page() -> String {
        "<html><body><p>Alpha</p><p>Bravo</p><p>Charlie</p></body></html>".to_string()
    }
}

/// 模拟翻译端点
///
/// 记录请求顺序，可配置哪些文本必定失败；译文为
/// `<target>:<原文>`，便于断言。
#[allow(dead_code)]
pub struct MockTranslator {
    pub requests: Mutex<Vec<String>>,
    failing: HashSet<String>,
}

#[allow(dead_code)]
impl MockTranslator {
    pub fn new() -> Self {
        MockTranslator {
            requests: Mutex::new(Vec::new()),
            failing: HashSet::new(),
        }
    }

    pub fn failing_on(texts: &[&str]) -> Self {
        MockTranslator {
            requests: Mutex::new(Vec::new()),
            failing: texts.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn recorded_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        self.requests.lock().unwrap().push(text.to_string());

        if self.failing.contains(text) {
            return Err(TranslationError::NetworkError("mock failure".to_string()));
        }

        Ok(format!("{}:{}", target_language, text))
    }
}

/// 模拟语音后端的共享状态
#[allow(dead_code)]
#[derive(Default)]
pub struct MockSpeechState {
    pub active_utterances: usize,
    pub spoken: Vec<Utterance>,
    pub cancel_calls: usize,
    pub pause_calls: usize,
    pub resume_calls: usize,
    pub paused: bool,
    pub on_end: Option<EndCallback>,
}

/// 模拟语音后端
///
/// 完整支持 speak / pause / resume / cancel，并保留结束回调
/// 供测试手动触发"播放自然结束"。
#[allow(dead_code)]
pub struct MockSynthesizer(pub Arc<Mutex<MockSpeechState>>);

#[allow(dead_code)]
impl MockSynthesizer {
    pub fn new() -> (Self, Arc<Mutex<MockSpeechState>>) {
        let state = Arc::new(Mutex::new(MockSpeechState::default()));
        (MockSynthesizer(Arc::clone(&state)), state)
    }
}

impl SpeechSynthesis for MockSynthesizer {
    fn speak(&mut self, utterance: &Utterance, on_end: EndCallback) -> Result<(), SpeechError> {
        let mut state = self.0.lock().unwrap();
        state.active_utterances += 1;
        state.spoken.push(utterance.clone());
        state.paused = false;
        state.on_end = Some(on_end);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SpeechError> {
        let mut state = self.0.lock().unwrap();
        state.pause_calls += 1;
        state.paused = true;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), SpeechError> {
        let mut state = self.0.lock().unwrap();
        state.resume_calls += 1;
        state.paused = false;
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), SpeechError> {
        let mut state = self.0.lock().unwrap();
        state.active_utterances = 0;
        state.cancel_calls += 1;
        state.paused = false;
        state.on_end = None;
        Ok(())
    }

    fn is_speaking(&self) -> bool {
        let state = self.0.lock().unwrap();
        state.active_utterances > 0 && !state.paused
    }
}
