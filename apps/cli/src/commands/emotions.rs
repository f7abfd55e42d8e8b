use std::path::PathBuf;

use anyhow::Context;
use castprep_minimax::{SpeechRequest, VoiceSetting};
use clap::Args;

use crate::env::Env;

/// One demo line per emotion tag, written so the emotion actually has
/// something to act on.
const EMOTION_LINES: [(&str, &str); 10] = [
    (
        "neutral",
        "哈，其实这个评价我们内部复盘会的时候，大家也讨论过。",
    ),
    (
        "happy",
        "哈哈，太好了！这正如我们所期待的那样，大家都非常开心。",
    ),
    (
        "sad",
        "唉，其实看到那个评价的时候，心里还是挺难受的，毕竟付出了那么多。",
    ),
    (
        "angry",
        "哼，这种毫无根据的指责，我完全无法接受！他们根本没看过我们的内容。",
    ),
    (
        "fearful",
        "说实话，当时看到数据掉得那么厉害，我真的有点慌了，不知道该怎么办。",
    ),
    (
        "disgusted",
        "啧，这种抄袭的手段也太低劣了，真是让人看不下去。",
    ),
    (
        "surprised",
        "哇！真的吗？完全没想到会有这么好的反馈，太意外了！",
    ),
    (
        "calm",
        "不管外界怎么评价，我们只需要专注于自己的节奏，把内容做好就行。",
    ),
    (
        "fluent",
        "我们持续优化流程，确保每一期视频都能高效、稳定地输出高质量内容。",
    ),
    (
        "whisper",
        "嘘，这是一个秘密，我们正在研发一个全新的项目，先别告诉别人。",
    ),
];

#[derive(Debug, Args)]
pub struct EmotionsArgs {
    /// Cloned voice to render every emotion with
    #[arg(long)]
    pub voice_id: String,

    #[arg(short, long, default_value = "emotions")]
    pub output: PathBuf,
}

pub async fn run(args: EmotionsArgs, env: &Env) -> anyhow::Result<()> {
    let client = super::speech_client(env);
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut saved = 0usize;
    for (emotion, line) in EMOTION_LINES {
        let voice = VoiceSetting::new(&args.voice_id).with_emotion(emotion);
        let request = SpeechRequest::new(line, voice);

        // One emotion failing should not sink the rest of the batch.
        match client.synthesize(request).await {
            Ok(audio) => {
                let path = args.output.join(format!("{emotion}.mp3"));
                std::fs::write(&path, audio)
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::info!(emotion, path = %path.display(), "saved emotion demo");
                saved += 1;
            }
            Err(err) => {
                tracing::error!(emotion, %err, "synthesis failed, continuing");
            }
        }
    }

    tracing::info!(saved, total = EMOTION_LINES.len(), "emotion batch finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lines_cover_every_service_emotion() {
        let lines: Vec<&str> = EMOTION_LINES.iter().map(|(e, _)| *e).collect();
        assert_eq!(lines, castprep_minimax::EMOTIONS);
    }
}
