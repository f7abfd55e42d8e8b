use std::fs;
use std::path::{Path, PathBuf};

use castprep_transcript::NormalizedTurn;

use crate::clip::ClipTool;
use crate::error::Error;
use crate::span::{Span, derive_spans, select_spans, total_duration};

/// Outcome of one speaker's cut, surfaced to the operator.
#[derive(Debug)]
pub struct ReelReport {
    pub speaker: String,
    pub segments: usize,
    pub duration_secs: u64,
    /// `Some` iff the expected output file exists after concatenation. The
    /// clip tool's exit status is never inspected; this is the success
    /// signal.
    pub output: Option<PathBuf>,
}

/// Cuts one reference reel per requested speaker out of a source recording.
///
/// Fully sequential: every extraction and concatenation runs to completion
/// before the next begins. One failing speaker never aborts the others.
pub struct ReelCutter<'a, T> {
    tool: &'a T,
    source: &'a Path,
    out_dir: &'a Path,
}

impl<'a, T: ClipTool> ReelCutter<'a, T> {
    pub fn new(tool: &'a T, source: &'a Path, out_dir: &'a Path) -> Self {
        Self {
            tool,
            source,
            out_dir,
        }
    }

    pub fn cut(
        &self,
        turns: &[NormalizedTurn],
        speakers: &[String],
        target_secs: u64,
    ) -> Result<Vec<ReelReport>, Error> {
        let spans = derive_spans(turns);

        // One scratch directory per run, owned exclusively by it. Drop
        // removes it on every exit path, whether or not any speaker's
        // extraction succeeded.
        let scratch = tempfile::tempdir()?;
        fs::create_dir_all(self.out_dir)?;

        let mut reports = Vec::with_capacity(speakers.len());
        for speaker in speakers {
            reports.push(self.cut_one(&spans, speaker, target_secs, scratch.path())?);
        }
        Ok(reports)
    }

    fn cut_one(
        &self,
        spans: &[Span],
        speaker: &str,
        target_secs: u64,
        scratch: &Path,
    ) -> Result<ReelReport, Error> {
        let selected = select_spans(spans, speaker, target_secs);

        if selected.is_empty() {
            tracing::warn!(speaker, "no segments found, skipping");
            return Ok(ReelReport {
                speaker: speaker.to_string(),
                segments: 0,
                duration_secs: 0,
                output: None,
            });
        }

        let duration_secs = total_duration(&selected);
        tracing::info!(
            speaker,
            segments = selected.len(),
            duration_secs,
            "collecting segments"
        );

        let mut manifest = String::new();
        for (i, span) in selected.iter().enumerate() {
            let clip = scratch.join(format!("{speaker}_{i}.mp3"));
            self.tool
                .extract(self.source, span.start, span.duration, &clip)?;
            manifest.push_str(&format!("file '{}'\n", clip.display()));
        }

        let list = scratch.join(format!("{speaker}_list.txt"));
        fs::write(&list, manifest)?;

        let dest = self.out_dir.join(format!("{speaker}.mp3"));
        self.tool.concat(&list, &dest)?;

        let output = if dest.exists() {
            tracing::info!(speaker, path = %dest.display(), "created reel");
            Some(dest)
        } else {
            tracing::error!(speaker, "failed to create {}", dest.display());
            None
        };

        Ok(ReelReport {
            speaker: speaker.to_string(),
            segments: selected.len(),
            duration_secs,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::tempdir;

    /// Writes stub clips and concatenates them by reading the manifest, so
    /// assembly logic is exercised without ffmpeg. Remembers the scratch
    /// location to let tests check the cleanup guarantee.
    struct FakeTool {
        scratch_seen: RefCell<Option<PathBuf>>,
        fail_concat: bool,
    }

    impl FakeTool {
        fn new() -> Self {
            Self {
                scratch_seen: RefCell::new(None),
                fail_concat: false,
            }
        }

        fn failing_concat() -> Self {
            Self {
                fail_concat: true,
                ..Self::new()
            }
        }
    }

    impl ClipTool for FakeTool {
        fn extract(
            &self,
            _source: &Path,
            start: u64,
            duration: u64,
            dest: &Path,
        ) -> Result<(), Error> {
            self.scratch_seen
                .borrow_mut()
                .get_or_insert_with(|| dest.parent().unwrap().to_path_buf());
            fs::write(dest, format!("{start}+{duration};"))?;
            Ok(())
        }

        fn concat(&self, manifest: &Path, dest: &Path) -> Result<(), Error> {
            if self.fail_concat {
                // Tool "ran" but produced nothing, like a real non-zero exit.
                return Ok(());
            }
            let mut joined = String::new();
            for line in fs::read_to_string(manifest)?.lines() {
                let path = line
                    .strip_prefix("file '")
                    .and_then(|l| l.strip_suffix('\''))
                    .expect("manifest line shape");
                joined.push_str(&fs::read_to_string(path)?);
            }
            fs::write(dest, joined)?;
            Ok(())
        }
    }

    fn turn(speaker: &str, seconds: u64) -> NormalizedTurn {
        NormalizedTurn {
            speaker: speaker.into(),
            timestamp: format!("{:02}:{:02}", seconds / 60, seconds % 60),
            seconds,
            content: "内容".into(),
        }
    }

    fn sample_turns() -> Vec<NormalizedTurn> {
        vec![
            turn("Tim", 0),
            turn("罗永浩", 40),
            turn("主持人 Tim", 80),
            turn("罗永浩", 120),
        ]
    }

    #[test]
    fn cuts_one_reel_per_speaker() {
        let out = tempdir().unwrap();
        let tool = FakeTool::new();
        let cutter = ReelCutter::new(&tool, Path::new("podcast.mp3"), out.path());

        let reports = cutter
            .cut(
                &sample_turns(),
                &["Tim".to_string(), "罗永浩".to_string()],
                100,
            )
            .unwrap();

        assert_eq!(reports.len(), 2);
        for report in &reports {
            let path = report.output.as_ref().expect("reel created");
            assert!(path.exists());
        }
        assert!(out.path().join("Tim.mp3").exists());
        assert!(out.path().join("罗永浩.mp3").exists());
    }

    #[test]
    fn substring_match_spans_end_up_in_the_reel() {
        let out = tempdir().unwrap();
        let tool = FakeTool::new();
        let cutter = ReelCutter::new(&tool, Path::new("podcast.mp3"), out.path());

        let reports = cutter
            .cut(&sample_turns(), &["Tim".to_string()], 1000)
            .unwrap();

        // "Tim" at 0 (40s) and "主持人 Tim" at 80 (40s).
        assert_eq!(reports[0].segments, 2);
        assert_eq!(reports[0].duration_secs, 80);
        let joined = fs::read_to_string(reports[0].output.as_ref().unwrap()).unwrap();
        assert_eq!(joined, "0+40;80+40;");
    }

    #[test]
    fn greedy_budget_is_reflected_in_report() {
        let out = tempdir().unwrap();
        let tool = FakeTool::new();
        let cutter = ReelCutter::new(&tool, Path::new("podcast.mp3"), out.path());

        let turns = vec![
            turn("Tim", 0),
            turn("Tim", 40),
            turn("Tim", 80),
            turn("Tim", 120),
            turn("罗永浩", 160),
        ];
        let reports = cutter.cut(&turns, &["Tim".to_string()], 100).unwrap();

        assert_eq!(reports[0].segments, 3);
        assert_eq!(reports[0].duration_secs, 120);
    }

    #[test]
    fn unmatched_speaker_reports_zero_segments_without_error() {
        let out = tempdir().unwrap();
        let tool = FakeTool::new();
        let cutter = ReelCutter::new(&tool, Path::new("podcast.mp3"), out.path());

        let reports = cutter
            .cut(
                &sample_turns(),
                &["Kostas".to_string(), "Tim".to_string()],
                100,
            )
            .unwrap();

        assert_eq!(reports[0].segments, 0);
        assert!(reports[0].output.is_none());
        assert!(!out.path().join("Kostas.mp3").exists());
        // The other speaker is still processed.
        assert!(reports[1].output.is_some());
    }

    #[test]
    fn scratch_directory_removed_after_run() {
        let out = tempdir().unwrap();
        let tool = FakeTool::new();
        let cutter = ReelCutter::new(&tool, Path::new("podcast.mp3"), out.path());

        cutter.cut(&sample_turns(), &["Tim".to_string()], 100).unwrap();

        let scratch = tool.scratch_seen.borrow().clone().unwrap();
        assert!(!scratch.exists());
    }

    #[test]
    fn scratch_removed_even_when_concat_produces_nothing() {
        let out = tempdir().unwrap();
        let tool = FakeTool::failing_concat();
        let cutter = ReelCutter::new(&tool, Path::new("podcast.mp3"), out.path());

        let reports = cutter.cut(&sample_turns(), &["Tim".to_string()], 100).unwrap();

        assert!(reports[0].output.is_none());
        let scratch = tool.scratch_seen.borrow().clone().unwrap();
        assert!(!scratch.exists());
    }
}
