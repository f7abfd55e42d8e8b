use std::path::PathBuf;

use anyhow::Context;
use castprep_reel::{Ffmpeg, ReelCutter};
use clap::Args;

#[derive(Debug, Args)]
pub struct CutArgs {
    /// Normalized transcript document produced by `normalize`
    pub transcript: PathBuf,

    /// Source recording spanning the whole transcript timeline
    #[arg(long)]
    pub audio: PathBuf,

    /// Speaker identifier substring; repeat for multiple speakers
    #[arg(long = "speaker", required = true)]
    pub speakers: Vec<String>,

    /// Target cumulative duration of pure speech per speaker
    #[arg(long, default_value_t = 120)]
    pub target_secs: u64,

    #[arg(short, long, default_value = "reels")]
    pub output: PathBuf,
}

pub fn run(args: CutArgs) -> anyhow::Result<()> {
    let turns = castprep_transcript::read_normalized_json(&args.transcript)
        .with_context(|| format!("reading {}", args.transcript.display()))?;

    let cutter = ReelCutter::new(&Ffmpeg, &args.audio, &args.output);
    let reports = cutter.cut(&turns, &args.speakers, args.target_secs)?;

    let created = reports.iter().filter(|r| r.output.is_some()).count();
    tracing::info!(
        requested = args.speakers.len(),
        created,
        "reel extraction finished"
    );
    Ok(())
}
