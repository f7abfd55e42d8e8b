/// One contiguous block of speech by a single speaker, as it appears in the
/// raw transcript. Bounded by the next speaker-marker line or end of input.
///
/// Serializes to the intermediate dialogue table (`Speaker,Timestamp,Content`
/// columns), hence the PascalCase field names on the wire.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DialogueTurn {
    pub speaker: String,
    /// Raw clock text, `MM:SS` or `HH:MM:SS`.
    pub timestamp: String,
    /// Space-joined from one or more source lines. Never empty — a turn is
    /// only emitted once it has accumulated content.
    pub content: String,
}

/// A [`DialogueTurn`] with its timestamp resolved to seconds from the start
/// of the recording.
///
/// Persisted as an ordered JSON array; insertion order is both transcript
/// order and time order. Downstream span derivation relies on treating the
/// next turn's `seconds` as this turn's end boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedTurn {
    pub speaker: String,
    pub timestamp: String,
    pub seconds: u64,
    pub content: String,
}
