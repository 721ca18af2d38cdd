use chrono::{DateTime, Local};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// Author type the backend uses for messages typed by the local user.
pub const USER_MESSAGE_TYPE: &str = "user";

/// A single chat line as exchanged with the backend.
///
/// Both fields default to empty so that partial payloads still render.
/// Null values become empty and other scalars are rendered as text, so one
/// odd element never rejects a whole transcript.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    /// Author type (e.g. "user", "bot"). Only used for styling.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
}

impl Message {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.kind.eq_ignore_ascii_case(USER_MESSAGE_TYPE)
    }

    /// Returns the author label shown next to the text, or None when the
    /// backend sent no type.
    pub fn author_label(&self) -> Option<&str> {
        let kind = self.kind.trim();
        if kind.is_empty() {
            None
        } else {
            Some(kind)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Text(String),
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Other(IgnoredAny),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<WireScalar>::deserialize(deserializer)?;

    Ok(match value {
        Some(WireScalar::Text(text)) => text,
        Some(WireScalar::Bool(flag)) => flag.to_string(),
        Some(WireScalar::Signed(number)) => number.to_string(),
        Some(WireScalar::Unsigned(number)) => number.to_string(),
        Some(WireScalar::Float(number)) => number.to_string(),
        Some(WireScalar::Other(_)) | None => String::new(),
    })
}

/// A message held in the transcript together with its local arrival time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub message: Message,
    pub received_at: DateTime<Local>,
}

impl TranscriptEntry {
    pub fn received_now(message: Message) -> Self {
        Self {
            message,
            received_at: Local::now(),
        }
    }
}
