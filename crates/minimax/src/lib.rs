pub mod audio_url;
pub mod client;
pub mod error;
pub mod types;

pub use audio_url::find_audio_url;
pub use client::MinimaxClient;
pub use error::Error;
pub use types::{
    AudioSetting, BaseResp, DEFAULT_MODEL, EMOTIONS, SpeechRequest, UploadResponse, UploadedFile,
    VoiceCloneRequest, VoiceSetting,
};
