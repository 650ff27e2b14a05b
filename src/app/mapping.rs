use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Display name for any label outside [`EMOTION_MAPPING`].
pub const UNKNOWN_EMOTION: &str = "Unknown Emotion";

/// Native model label (lower case) to display emotion name.
pub static EMOTION_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("anger", "Anger"),
        ("joy", "Joy"),
        ("fear", "Fear"),
        ("sadness", "Sadness"),
        ("surprise", "Surprise"),
        ("neutral", "Neutral"),
    ])
});

/// Map a raw label, ignoring case. Unmapped labels are never an error.
pub fn display_emotion(raw_label: &str) -> &'static str {
    EMOTION_MAPPING
        .get(raw_label.to_lowercase().as_str())
        .copied()
        .unwrap_or(UNKNOWN_EMOTION)
}
