use castprep_http::HttpClient;
use serde_json::Value;

use crate::audio_url::find_audio_url;
use crate::error::Error;
use crate::types::{BaseResp, SpeechRequest, UploadResponse, VoiceCloneRequest};

pub const UPLOAD_PATH: &str = "/v1/files/upload";
pub const VOICE_CLONE_PATH: &str = "/v1/voice_clone";
pub const SPEECH_PATH: &str = "/v1/t2a_v2";

/// Client for the voice-cloning / text-to-speech service.
///
/// Every call is a single request-response exchange; nothing is retried.
pub struct MinimaxClient<C> {
    http: C,
}

impl<C: HttpClient> MinimaxClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Upload a reference audio file and return its opaque file id.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        purpose: &str,
    ) -> Result<i64, Error> {
        tracing::info!(file_name, purpose, "uploading reference audio");
        let raw = self
            .http
            .post_multipart(UPLOAD_PATH, file_name, bytes, &[("purpose", purpose)])
            .await
            .map_err(Error::Http)?;

        let response: UploadResponse = serde_json::from_slice(&raw)?;
        if let Some(base) = &response.base_resp {
            base.check()?;
        }

        let file_id = response
            .file
            .map(|f| f.file_id)
            .ok_or(Error::MissingFileId)?;
        tracing::info!(file_id, "upload complete");
        Ok(file_id)
    }

    /// Register a cloned voice from an uploaded reference and synthesize the
    /// demo text with it. Returns the demo audio bytes.
    pub async fn clone_voice(&self, request: VoiceCloneRequest) -> Result<Vec<u8>, Error> {
        tracing::info!(voice_id = %request.voice_id, "cloning voice");
        let body = serde_json::to_vec(&request)?;
        let raw = self
            .http
            .post_json(VOICE_CLONE_PATH, body)
            .await
            .map_err(Error::Http)?;
        self.recover_audio(&raw).await
    }

    /// Synthesize speech for `request` and return the audio bytes.
    pub async fn synthesize(&self, request: SpeechRequest) -> Result<Vec<u8>, Error> {
        tracing::info!(
            voice_id = %request.voice_setting.voice_id,
            emotion = request.voice_setting.emotion.as_deref().unwrap_or("-"),
            "synthesizing speech"
        );
        let body = serde_json::to_vec(&request)?;
        let raw = self
            .http
            .post_json(SPEECH_PATH, body)
            .await
            .map_err(Error::Http)?;
        self.recover_audio(&raw).await
    }

    /// Turn a service response into audio bytes.
    ///
    /// In order: a non-JSON body is already raw audio; a JSON body must pass
    /// the `base_resp` status check, then yields either inline hex audio at
    /// `data.audio` or a downloadable URL found anywhere in the document.
    async fn recover_audio(&self, raw: &[u8]) -> Result<Vec<u8>, Error> {
        let value: Value = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(_) => return Ok(raw.to_vec()),
        };

        if let Some(base) = value.get("base_resp") {
            let base: BaseResp = serde_json::from_value(base.clone())?;
            base.check()?;
        }

        if let Some(hex_audio) = value.pointer("/data/audio").and_then(Value::as_str) {
            return Ok(hex::decode(hex_audio)?);
        }

        let url = find_audio_url(&value).ok_or(Error::NoAudio)?;
        tracing::info!(url, "downloading result audio");
        self.http.get_bytes(url).await.map_err(Error::Http)
    }
}
