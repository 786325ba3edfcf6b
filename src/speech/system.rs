//! 平台语音后端模块
//!
//! 基于 `tts` crate 封装操作系统自带的语音合成引擎。
//! 构造即探测平台能力：引擎不可用时返回
//! [`SpeechError::Unavailable`]，由调用方向用户给出提示。
//!
//! `tts` crate 不提供暂停/恢复原语，该后端对这两个操作返回
//! [`SpeechError::Unsupported`]。

use tts::Tts;

use crate::speech::synthesizer::{EndCallback, SpeechError, SpeechSynthesis, Utterance};

/// 平台语音合成后端
pub struct SystemSynthesizer {
    tts: Tts,
}

impl SystemSynthesizer {
    /// 探测并初始化平台语音引擎
    pub fn new() -> Result<Self, SpeechError> {
        let tts = Tts::default().map_err(|e| SpeechError::Unavailable(e.to_string()))?;
        Ok(SystemSynthesizer { tts })
    }

    /// 尽力选择与话语语言匹配的声音
    fn select_voice(&mut self, lang: &str) {
        if !self.tts.supported_features().voice {
            return;
        }

        if let Ok(voices) = self.tts.voices() {
            let matching = voices
                .iter()
                .find(|voice| voice.language().to_string().starts_with(lang));
            if let Some(voice) = matching {
                if let Err(err) = self.tts.set_voice(voice) {
                    tracing::warn!("Failed to select voice for '{}': {}", lang, err);
                }
            }
        }
    }
}

impl SpeechSynthesis for SystemSynthesizer {
    fn speak(&mut self, utterance: &Utterance, mut on_end: EndCallback) -> Result<(), SpeechError> {
        self.select_voice(&utterance.lang);

        if self.tts.supported_features().utterance_callbacks {
            self.tts
                .on_utterance_end(Some(Box::new(move |_| on_end())))
                .map_err(|e| SpeechError::Backend(e.to_string()))?;
        }

        // 第二个参数请求打断：平台层面也保证只有一个活动话语
        self.tts
            .speak(utterance.text.as_str(), true)
            .map_err(|e| SpeechError::Backend(e.to_string()))?;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported("pause"))
    }

    fn resume(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported("resume"))
    }

    fn cancel(&mut self) -> Result<(), SpeechError> {
        self.tts
            .stop()
            .map(|_| ())
            .map_err(|e| SpeechError::Backend(e.to_string()))
    }

    fn is_speaking(&self) -> bool {
        self.tts.is_speaking().unwrap_or(false)
    }
}
