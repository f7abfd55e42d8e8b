use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_MODEL: &str = "speech-2.6-hd";

/// Emotion tags the service accepts in `voice_setting.emotion`.
pub const EMOTIONS: [&str; 10] = [
    "neutral",
    "happy",
    "sad",
    "angry",
    "fearful",
    "disgusted",
    "surprised",
    "calm",
    "fluent",
    "whisper",
];

/// Application-level status embedded in otherwise-2xx responses. A non-zero
/// `status_code` is a failure regardless of the transport status.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseResp {
    pub status_code: i64,
    #[serde(default)]
    pub status_msg: String,
}

impl BaseResp {
    pub fn check(&self) -> Result<(), Error> {
        if self.status_code == 0 {
            Ok(())
        } else {
            Err(Error::Api {
                status_code: self.status_code,
                status_msg: self.status_msg.clone(),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub file: Option<UploadedFile>,
    #[serde(default)]
    pub base_resp: Option<BaseResp>,
}

#[derive(Debug, Deserialize)]
pub struct UploadedFile {
    pub file_id: i64,
}

#[derive(Debug, Serialize)]
pub struct VoiceCloneRequest {
    pub file_id: i64,
    pub voice_id: String,
    pub text: String,
    pub model: String,
}

impl VoiceCloneRequest {
    pub fn new(file_id: i64, voice_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_id,
            voice_id: voice_id.into(),
            text: text.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceSetting {
    pub voice_id: String,
    pub speed: f32,
    pub vol: f32,
    pub pitch: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
}

impl VoiceSetting {
    pub fn new(voice_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            speed: 1.0,
            vol: 1.0,
            pitch: 0,
            emotion: None,
        }
    }

    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AudioSetting {
    pub sample_rate: u32,
    pub bitrate: u32,
    pub format: String,
    pub channel: u32,
}

impl Default for AudioSetting {
    fn default() -> Self {
        Self {
            sample_rate: 32_000,
            bitrate: 128_000,
            format: "mp3".to_string(),
            channel: 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub text: String,
    pub stream: bool,
    pub voice_setting: VoiceSetting,
    pub audio_setting: AudioSetting,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, voice_setting: VoiceSetting) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            text: text.into(),
            stream: false,
            voice_setting,
            audio_setting: AudioSetting::default(),
        }
    }
}
