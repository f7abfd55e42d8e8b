mod commands;
mod env;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "castprep", about = "Prepare podcast demo assets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a raw transcript into the dialogue table
    Parse(commands::parse::ParseArgs),
    /// Resolve timestamps to second offsets and persist the sequence
    Normalize(commands::normalize::NormalizeArgs),
    /// Cut per-speaker reference reels out of the source recording
    Cut(commands::cut::CutArgs),
    /// Upload a reel, register a cloned voice and save its demo audio
    Clone(commands::clone::CloneArgs),
    /// Synthesize one utterance with a cloned voice
    Speak(commands::speak::SpeakArgs),
    /// Synthesize one demo line per emotion preset
    Emotions(commands::emotions::EmotionsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Normalize(args) => commands::normalize::run(args),
        Commands::Cut(args) => commands::cut::run(args),
        Commands::Clone(args) => commands::clone::run(args, &env::load()?).await,
        Commands::Speak(args) => commands::speak::run(args, &env::load()?).await,
        Commands::Emotions(args) => commands::emotions::run(args, &env::load()?).await,
    }
}
