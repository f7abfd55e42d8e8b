use std::path::PathBuf;

use anyhow::Context;
use castprep_minimax::VoiceCloneRequest;
use clap::Args;

use crate::env::Env;

#[derive(Debug, Args)]
pub struct CloneArgs {
    /// Reference reel to clone the voice from
    #[arg(long)]
    pub reel: PathBuf,

    /// Identifier the cloned voice is registered under
    #[arg(long)]
    pub voice_id: String,

    /// Demo text spoken with the cloned voice
    #[arg(long)]
    pub text: String,

    #[arg(short, long, default_value = "clone_demo.mp3")]
    pub output: PathBuf,
}

pub async fn run(args: CloneArgs, env: &Env) -> anyhow::Result<()> {
    let client = super::speech_client(env);

    let bytes = std::fs::read(&args.reel)
        .with_context(|| format!("reading {}", args.reel.display()))?;
    let file_name = args
        .reel
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "reel.mp3".to_string());

    let file_id = client.upload_file(&file_name, bytes, "voice_clone").await?;
    let audio = client
        .clone_voice(VoiceCloneRequest::new(file_id, &args.voice_id, &args.text))
        .await?;

    std::fs::write(&args.output, audio)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(
        voice_id = %args.voice_id,
        output = %args.output.display(),
        "saved clone demo audio"
    );
    Ok(())
}
