use castprep_transcript::NormalizedTurn;

/// Assumed playtime of the final turn in the whole transcript, which has no
/// next offset to bound it.
const LAST_TURN_TAIL_SECS: u64 = 5;

/// The time range a turn occupies in the source recording.
///
/// Derived fresh per cut run, never persisted. `duration` is strictly
/// positive — turns whose computed duration would be zero or negative are
/// dropped during derivation and can never be selected for any speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub speaker: String,
    pub start: u64,
    pub duration: u64,
    /// Carried for logging only; audio correctness doesn't depend on it.
    pub content: String,
}

/// Derive spans for the entire normalized sequence, before any speaker
/// filtering.
///
/// Turn `i` ends where turn `i+1` begins; the last turn gets a fixed tail.
/// Non-monotonic or duplicate offsets produce non-positive durations, which
/// are discarded here.
pub fn derive_spans(turns: &[NormalizedTurn]) -> Vec<Span> {
    let mut spans = Vec::with_capacity(turns.len());

    for (i, turn) in turns.iter().enumerate() {
        let start = turn.seconds;
        let end = match turns.get(i + 1) {
            Some(next) => next.seconds,
            None => start + LAST_TURN_TAIL_SECS,
        };

        let duration = end.saturating_sub(start);
        if duration == 0 {
            tracing::warn!(
                speaker = %turn.speaker,
                timestamp = %turn.timestamp,
                "dropping turn with non-positive duration"
            );
            continue;
        }

        spans.push(Span {
            speaker: turn.speaker.clone(),
            start,
            duration,
            content: turn.content.clone(),
        });
    }

    spans
}

/// Greedy, order-preserving selection of one speaker's spans under a
/// duration budget.
///
/// A turn belongs to the speaker when `speaker` is a substring of the turn's
/// speaker field (case-sensitive), so inconsistently labeled transcripts
/// still match ("Tim" selects "主持人 Tim" turns). Spans are accepted in
/// chronological order while the accepted total is still strictly below the
/// target; the last accepted span may overshoot, and nothing after the stop
/// point is considered. No attempt is made to minimize the overshoot.
pub fn select_spans<'a>(spans: &'a [Span], speaker: &str, target_secs: u64) -> Vec<&'a Span> {
    let mut selected = Vec::new();
    let mut total = 0u64;

    for span in spans.iter().filter(|s| s.speaker.contains(speaker)) {
        if total >= target_secs {
            break;
        }
        total += span.duration;
        selected.push(span);
    }

    selected
}

pub fn total_duration(selected: &[&Span]) -> u64 {
    selected.iter().map(|s| s.duration).sum()
}
