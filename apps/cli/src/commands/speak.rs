use std::path::PathBuf;

use anyhow::Context;
use castprep_minimax::{AudioSetting, SpeechRequest, VoiceSetting};
use clap::Args;

use crate::env::Env;

#[derive(Debug, Args)]
pub struct SpeakArgs {
    /// Cloned (or pre-registered) voice to speak with
    #[arg(long)]
    pub voice_id: String,

    /// Text to synthesize
    #[arg(long)]
    pub text: String,

    /// Emotion tag, e.g. happy, sad, whisper
    #[arg(long)]
    pub emotion: Option<String>,

    #[arg(long, default_value_t = 1.0)]
    pub speed: f32,

    #[arg(long, default_value_t = 1.0)]
    pub vol: f32,

    #[arg(long, default_value_t = 0)]
    pub pitch: i32,

    #[arg(long, default_value_t = 32_000)]
    pub sample_rate: u32,

    #[arg(long, default_value_t = 128_000)]
    pub bitrate: u32,

    #[arg(short, long, default_value = "speech.mp3")]
    pub output: PathBuf,
}

pub async fn run(args: SpeakArgs, env: &Env) -> anyhow::Result<()> {
    let client = super::speech_client(env);

    let mut voice = VoiceSetting::new(&args.voice_id);
    voice.speed = args.speed;
    voice.vol = args.vol;
    voice.pitch = args.pitch;
    voice.emotion = args.emotion.clone();

    let mut request = SpeechRequest::new(&args.text, voice);
    request.audio_setting = AudioSetting {
        sample_rate: args.sample_rate,
        bitrate: args.bitrate,
        ..AudioSetting::default()
    };

    let audio = client.synthesize(request).await?;
    std::fs::write(&args.output, audio)
        .with_context(|| format!("writing {}", args.output.display()))?;

    tracing::info!(output = %args.output.display(), "saved synthesized audio");
    Ok(())
}
