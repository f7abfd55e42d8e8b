use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::types::{DialogueTurn, NormalizedTurn};

/// Write the dialogue table: header row `Speaker,Timestamp,Content`, one row
/// per turn, UTF-8.
pub fn write_dialogue_csv(path: &Path, turns: &[DialogueTurn]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for turn in turns {
        writer.serialize(turn)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_dialogue_csv(path: &Path) -> Result<Vec<DialogueTurn>, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Persist the normalized sequence as a pretty-printed JSON array with
/// literal (unescaped) unicode text.
pub fn write_normalized_json(path: &Path, turns: &[NormalizedTurn]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, turns)?;
    writer.flush()?;
    Ok(())
}

pub fn read_normalized_json(path: &Path) -> Result<Vec<NormalizedTurn>, Error> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_turns() -> Vec<DialogueTurn> {
        vec![
            DialogueTurn {
                speaker: "罗永浩".into(),
                timestamp: "00:11".into(),
                content: "对，当时我们聊到 \"工业化\" 这个词，还有逗号、引号。".into(),
            },
            DialogueTurn {
                speaker: "主持人 Tim".into(),
                timestamp: "01:00:07".into(),
                content: "哈哈，没错。".into(),
            },
        ]
    }

    #[test]
    fn csv_round_trip_preserves_unicode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transcript.csv");
        let turns = sample_turns();

        write_dialogue_csv(&path, &turns).unwrap();
        let loaded = read_dialogue_csv(&path).unwrap();

        assert_eq!(loaded, turns);
    }

    #[test]
    fn csv_has_expected_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transcript.csv");

        write_dialogue_csv(&path, &sample_turns()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();

        assert!(raw.starts_with("Speaker,Timestamp,Content"));
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        let turns = vec![NormalizedTurn {
            speaker: "罗永浩".into(),
            timestamp: "1:30:00".into(),
            seconds: 5400,
            content: "到了后半段。".into(),
        }];

        write_normalized_json(&path, &turns).unwrap();
        let loaded = read_normalized_json(&path).unwrap();

        assert_eq!(loaded, turns);
    }

    #[test]
    fn json_keeps_unicode_literal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        let turns = vec![NormalizedTurn {
            speaker: "罗永浩".into(),
            timestamp: "00:11".into(),
            seconds: 11,
            content: "你好".into(),
        }];

        write_normalized_json(&path, &turns).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();

        assert!(raw.contains("罗永浩"));
        assert!(raw.contains("你好"));
        assert!(!raw.contains("\\u"));
    }
}
