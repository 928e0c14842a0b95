//! Response format value object

use std::fmt;

/// Transcript serialization requested from the API.
///
/// Closed set; the payload is passed through verbatim in whichever format the
/// service returns, including srt/vtt timing and the json schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
    Srt,
    Vtt,
    VerboseJson,
}

impl ResponseFormat {
    /// Wire name sent as the `response_format` form field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::VerboseJson => "verbose_json",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(ResponseFormat::Text.as_str(), "text");
        assert_eq!(ResponseFormat::Json.as_str(), "json");
        assert_eq!(ResponseFormat::Srt.as_str(), "srt");
        assert_eq!(ResponseFormat::Vtt.as_str(), "vtt");
        assert_eq!(ResponseFormat::VerboseJson.as_str(), "verbose_json");
    }

    #[test]
    fn default_is_text() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Text);
    }
}
