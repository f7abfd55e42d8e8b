use std::path::Path;

use crate::error::Error;

const PRIMARY: &str = "GB18030";
const FALLBACK: &str = "UTF-8";

/// Decode raw transcript bytes, GB18030 first, then UTF-8.
///
/// The fallback is decode-error driven, not content-sniffing: UTF-8 is only
/// tried once the GB18030 decode reports malformed sequences. Both failing
/// aborts the run.
pub fn decode_transcript(bytes: &[u8]) -> Result<String, Error> {
    let (text, _, had_errors) = encoding_rs::GB18030.decode(bytes);
    if !had_errors {
        return Ok(text.into_owned());
    }

    tracing::warn!("transcript is not {PRIMARY}, retrying as {FALLBACK}");
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => Err(Error::Encoding {
            primary: PRIMARY,
            fallback: FALLBACK,
        }),
    }
}

pub fn read_transcript(path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path)?;
    decode_transcript(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_gb18030_bytes() {
        let (encoded, _, _) = encoding_rs::GB18030.encode("罗永浩 00:11");
        assert_eq!(decode_transcript(&encoded).unwrap(), "罗永浩 00:11");
    }

    #[test]
    fn falls_back_to_utf8() {
        // "你!" as UTF-8 leaves a GB18030 lead byte followed by 0x21, which is
        // malformed there, so the fallback path runs.
        let input = "Tim 你! 00:11";
        assert_eq!(decode_transcript(input.as_bytes()).unwrap(), input);
    }

    #[test]
    fn rejects_bytes_valid_in_neither() {
        let bytes = [0xff, 0xfe, 0x80, 0x80, 0xff];
        assert!(matches!(
            decode_transcript(&bytes),
            Err(Error::Encoding { .. })
        ));
    }
}
