use crate::types::DialogueTurn;

/// Split a trimmed line into `(speaker, timestamp)` if it is a speaker
/// marker: a non-empty name prefix followed by a trailing clock token
/// (`MM:SS` or `HH:MM:SS`).
///
/// The clock token is the last whitespace-delimited token, so names may
/// contain internal whitespace ("主持人 Tim 00:11" → speaker "主持人 Tim").
pub fn speaker_marker(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let (name, clock) = line.rsplit_once(|c: char| c.is_whitespace())?;
    let name = name.trim_end();
    if name.is_empty() || !is_clock(clock) {
        return None;
    }
    Some((name, clock))
}

/// `d{1,2}:d{2}` or `d{1,2}:d{2}:d{2}`, ASCII digits only.
fn is_clock(token: &str) -> bool {
    let mut parts = token.split(':');
    let Some(first) = parts.next() else {
        return false;
    };
    if first.is_empty() || first.len() > 2 || !first.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() || rest.len() > 2 {
        return false;
    }
    rest.iter()
        .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit()))
}

struct OpenTurn {
    speaker: String,
    timestamp: String,
    content: Vec<String>,
}

impl OpenTurn {
    fn new(speaker: &str, timestamp: &str) -> Self {
        Self {
            speaker: speaker.to_string(),
            timestamp: timestamp.to_string(),
            content: Vec::new(),
        }
    }

    /// Emit the turn, or nothing if no content line ever arrived (a marker
    /// immediately followed by another marker).
    fn close(self) -> Option<DialogueTurn> {
        if self.content.is_empty() {
            return None;
        }
        Some(DialogueTurn {
            speaker: self.speaker,
            timestamp: self.timestamp,
            content: self.content.join(" "),
        })
    }
}

/// Parse a raw transcript into ordered dialogue turns.
///
/// Two states: seeking the first speaker marker, then accumulating content
/// under the currently open turn. Blank lines never terminate or separate
/// content. Content ahead of the first marker has no speaker to attach to
/// and is dropped.
pub fn parse(input: &str) -> Vec<DialogueTurn> {
    let mut turns = Vec::new();
    let mut open: Option<OpenTurn> = None;

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((speaker, timestamp)) = speaker_marker(line) {
            if let Some(prev) = open.take() {
                turns.extend(prev.close());
            }
            open = Some(OpenTurn::new(speaker, timestamp));
        } else if let Some(turn) = open.as_mut() {
            turn.content.push(line.to_string());
        }
    }

    if let Some(last) = open.take() {
        turns.extend(last.close());
    }

    turns
}
