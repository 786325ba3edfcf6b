//! # 语音模块
//!
//! 对指定内容块的朗读控制：speak / pause-resume / stop。
//!
//! # 模块组织
//!
//! - `synthesizer` - 话语类型与后端接口
//! - `controller` - {Idle, Speaking, Paused} 播放状态机
//! - `system` - 平台语音引擎后端（`speech` feature）

pub mod controller;
pub mod synthesizer;
#[cfg(feature = "speech")]
pub mod system;

// Re-export commonly used items for convenience
pub use controller::{
    PlaybackState, SpeechController, DEFAULT_SPEECH_LANG, PAUSE_LABEL, RESUME_LABEL,
};
pub use synthesizer::{EndCallback, SpeechError, SpeechSynthesis, Utterance};
#[cfg(feature = "speech")]
pub use system::SystemSynthesizer;
