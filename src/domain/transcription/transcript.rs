//! Transcript value object

/// Payload returned by the transcription service, verbatim.
///
/// An empty payload is a valid transcript (e.g., silent audio).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    payload: String,
}

impl Transcript {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn into_payload(self) -> String {
        self.payload
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
