use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Dialogue table produced by `parse`
    pub input: PathBuf,

    #[arg(short, long, default_value = "transcript.json")]
    pub output: PathBuf,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let turns = castprep_transcript::read_dialogue_csv(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let normalized = castprep_transcript::normalize(turns);
    castprep_transcript::write_normalized_json(&args.output, &normalized)
        .with_context(|| format!("writing {}", args.output.display()))?;

    tracing::info!(
        turns = normalized.len(),
        output = %args.output.display(),
        "normalized transcript"
    );
    Ok(())
}
