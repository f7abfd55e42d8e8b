use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::Error;

/// The external tool that cuts and joins audio.
///
/// Exit status is deliberately not part of the contract: callers treat the
/// expected output file's existence as the success signal, so an
/// implementation only errors when the tool cannot be launched at all.
pub trait ClipTool {
    /// Extract `[start, start + duration)` seconds of `source` into `dest`.
    fn extract(&self, source: &Path, start: u64, duration: u64, dest: &Path)
    -> Result<(), Error>;

    /// Join the files listed in `manifest` (concat-demuxer `file '<path>'`
    /// lines) into `dest` without re-encoding.
    fn concat(&self, manifest: &Path, dest: &Path) -> Result<(), Error>;
}

/// ffmpeg-backed [`ClipTool`].
///
/// Extraction re-encodes at high-quality VBR (`-q:a 2`); concatenation uses
/// the concat demuxer with stream copy, so clips of the same codec are
/// joined without another lossy pass.
#[derive(Debug, Default)]
pub struct Ffmpeg;

const FFMPEG: &str = "ffmpeg";

impl Ffmpeg {
    fn run(&self, args: &[&str]) -> Result<(), Error> {
        tracing::debug!(?args, "running {FFMPEG}");
        Command::new(FFMPEG)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| Error::ToolLaunch {
                tool: FFMPEG,
                source,
            })?;
        Ok(())
    }
}

impl ClipTool for Ffmpeg {
    fn extract(
        &self,
        source: &Path,
        start: u64,
        duration: u64,
        dest: &Path,
    ) -> Result<(), Error> {
        self.run(&[
            "-y",
            "-i",
            &source.to_string_lossy(),
            "-ss",
            &start.to_string(),
            "-t",
            &duration.to_string(),
            "-q:a",
            "2",
            &dest.to_string_lossy(),
        ])
    }

    fn concat(&self, manifest: &Path, dest: &Path) -> Result<(), Error> {
        self.run(&[
            "-y",
            "-f",
            "concat",
            "-safe",
            "0",
            "-i",
            &manifest.to_string_lossy(),
            "-c",
            "copy",
            &dest.to_string_lossy(),
        ])
    }
}
