use serde_json::Value;

/// Field names the service has been seen carrying result URLs in.
const URL_KEYS: [&str; 5] = ["url", "audio_file", "file_url", "audio_url", "demo_audio"];

/// URLs may carry query parameters, so a suffix check is not enough.
fn looks_like_audio_url(s: &str) -> bool {
    s.starts_with("http") && (s.contains(".mp3") || s.contains(".wav"))
}

/// Hunt for a downloadable audio URL anywhere in a response document.
///
/// At each map, the known key names are checked before descending, so a
/// well-known field wins over whatever a string scan might turn up deeper
/// in the tree. String leaves reached by descent match on shape alone:
/// starts with `http` and names an audio file somewhere in the URL.
pub fn find_audio_url(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => looks_like_audio_url(s).then_some(s.as_str()),
        Value::Object(map) => {
            for key in URL_KEYS {
                if let Some(Value::String(s)) = map.get(key)
                    && s.starts_with("http")
                {
                    return Some(s);
                }
            }
            map.values().find_map(find_audio_url)
        }
        Value::Array(items) => items.iter().find_map(find_audio_url),
        _ => None,
    }
}
