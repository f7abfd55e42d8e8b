use crate::types::{DialogueTurn, NormalizedTurn};

/// Resolve a clock string to seconds from the start of the recording.
///
/// Two components are `minutes:seconds`, three are `hours:minutes:seconds`.
/// Anything else — wrong component count, non-numeric part — degrades to `0`
/// rather than failing the run. The turn keeps its raw timestamp either way,
/// so the degradation is visible in the persisted document.
pub fn offset_seconds(timestamp: &str) -> u64 {
    let parts: Option<Vec<u64>> = timestamp
        .split(':')
        .map(|p| p.trim().parse().ok())
        .collect();

    match parts.as_deref() {
        Some([m, s]) => m * 60 + s,
        Some([h, m, s]) => h * 3600 + m * 60 + s,
        _ => {
            tracing::warn!(timestamp, "unparseable timestamp, offset degraded to 0");
            0
        }
    }
}

/// Resolve every turn's offset, preserving order.
pub fn normalize(turns: Vec<DialogueTurn>) -> Vec<NormalizedTurn> {
    turns
        .into_iter()
        .map(|t| NormalizedTurn {
            seconds: offset_seconds(&t.timestamp),
            speaker: t.speaker,
            timestamp: t.timestamp,
            content: t.content,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_components_are_minutes_seconds() {
        assert_eq!(offset_seconds("01:05"), 65);
        assert_eq!(offset_seconds("00:00"), 0);
        assert_eq!(offset_seconds("59:59"), 3599);
    }

    #[test]
    fn three_components_are_hours_minutes_seconds() {
        assert_eq!(offset_seconds("1:30:00"), 5400);
        assert_eq!(offset_seconds("01:00:07"), 3607);
    }

    #[test]
    fn malformed_degrades_to_zero() {
        assert_eq!(offset_seconds("abc"), 0);
        assert_eq!(offset_seconds("90"), 0); // one component
        assert_eq!(offset_seconds("1:2:3:4"), 0);
        assert_eq!(offset_seconds("1x:05"), 0);
        assert_eq!(offset_seconds(""), 0);
    }

    #[test]
    fn normalize_preserves_order_and_fields() {
        let turns = vec![
            DialogueTurn {
                speaker: "Tim".into(),
                timestamp: "00:11".into(),
                content: "一".into(),
            },
            DialogueTurn {
                speaker: "罗永浩".into(),
                timestamp: "01:00:07".into(),
                content: "二".into(),
            },
        ];
        let normalized = normalize(turns);
        assert_eq!(normalized[0].seconds, 11);
        assert_eq!(normalized[1].seconds, 3607);
        assert_eq!(normalized[1].timestamp, "01:00:07");
        assert_eq!(normalized[1].content, "二");
    }
}
