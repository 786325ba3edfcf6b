//! 语音播放控制器模块
//!
//! 在 {Idle, Speaking, Paused} 三态之间维护播放状态机，
//! 持有唯一的"当前话语"槽位，并把 speak / pause-resume / stop
//! 操作转发给语音合成后端。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::warn;

use crate::speech::synthesizer::{SpeechError, SpeechSynthesis, Utterance};

/// 未设置语言偏好时的默认朗读语言
pub const DEFAULT_SPEECH_LANG: &str = "en";

/// 暂停/恢复控件的两种标签文案
pub const PAUSE_LABEL: &str = "Pause";
pub const RESUME_LABEL: &str = "Resume";

/// 播放状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Speaking,
    Paused,
}

/// 语音播放控制器
///
/// 所有可变状态（当前话语、播放标志）都集中在该结构体内，
/// 可以创建多个互不影响的实例。
pub struct SpeechController {
    synthesizer: Box<dyn SpeechSynthesis>,
    current: Option<Utterance>,
    state: PlaybackState,
    /// 由后端的播放结束回调置位
    finished: Arc<AtomicBool>,
}

impl SpeechController {
    /// 用给定后端创建控制器，初始为 Idle 状态
    pub fn new(synthesizer: Box<dyn SpeechSynthesis>) -> Self {
        SpeechController {
            synthesizer,
            current: None,
            state: PlaybackState::Idle,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 当前播放状态
    ///
    /// 读取状态前先同步后端的播放结束通知：自然播完的话语
    /// 使状态机回到 Idle 并清空当前话语槽。
    pub fn state(&mut self) -> PlaybackState {
        if self.state != PlaybackState::Idle && self.finished.load(Ordering::SeqCst) {
            self.state = PlaybackState::Idle;
            self.current = None;
        }
        self.state
    }

    /// 当前话语（若有）
    pub fn current_utterance(&self) -> Option<&Utterance> {
        self.current.as_ref()
    }

    /// 暂停/恢复控件应显示的标签
    ///
    /// Speaking 状态显示 "Pause"，其余状态显示 "Resume"。
    pub fn pause_label(&mut self) -> &'static str {
        match self.state() {
            PlaybackState::Speaking => PAUSE_LABEL,
            PlaybackState::Paused | PlaybackState::Idle => RESUME_LABEL,
        }
    }

    /// 开始朗读
    ///
    /// 若存在当前话语则无条件取消它，再以 `lang`（缺省为
    /// [`DEFAULT_SPEECH_LANG`]）构造新话语提交给后端。
    pub fn speak(&mut self, text: &str, lang: Option<&str>) -> Result<(), SpeechError> {
        if self.current.is_some() {
            self.synthesizer.cancel()?;
            self.state = PlaybackState::Idle;
            self.current = None;
        }

        let utterance = Utterance::new(text, lang.unwrap_or(DEFAULT_SPEECH_LANG));

        self.finished = Arc::new(AtomicBool::new(false));
        let finished = Arc::clone(&self.finished);
        let on_end = Box::new(move || {
            finished.store(true, Ordering::SeqCst);
        });

        self.synthesizer.speak(&utterance, on_end)?;
        self.current = Some(utterance);
        self.state = PlaybackState::Speaking;
        Ok(())
    }

    /// 暂停/恢复开关
    ///
    /// Paused 时恢复播放，Speaking 时暂停播放，Idle 时不做任何
    /// 操作。后端拒绝该操作时记录日志并保持状态不变。
    pub fn toggle_pause(&mut self) -> Result<(), SpeechError> {
        match self.state() {
            PlaybackState::Paused => {
                self.synthesizer.resume().map_err(log_refused)?;
                self.state = PlaybackState::Speaking;
            }
            PlaybackState::Speaking => {
                self.synthesizer.pause().map_err(log_refused)?;
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Idle => {}
        }
        Ok(())
    }

    /// 停止播放
    ///
    /// 无条件取消当前播放，状态机回到 Idle。
    pub fn stop(&mut self) -> Result<(), SpeechError> {
        self.synthesizer.cancel()?;
        self.state = PlaybackState::Idle;
        self.current = None;
        Ok(())
    }
}

fn log_refused(err: SpeechError) -> SpeechError {
    warn!("Speech backend refused operation: {}", err);
    err
}
