use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Raw transcript text (GB18030 or UTF-8)
    pub input: PathBuf,

    #[arg(short, long, default_value = "podcast_transcript.csv")]
    pub output: PathBuf,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = castprep_transcript::read_transcript(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let turns = castprep_transcript::parse(&text);
    castprep_transcript::write_dialogue_csv(&args.output, &turns)
        .with_context(|| format!("writing {}", args.output.display()))?;

    tracing::info!(
        turns = turns.len(),
        output = %args.output.display(),
        "processed dialogue entries"
    );
    Ok(())
}
