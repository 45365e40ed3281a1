use serde::{Deserialize, Serialize};

/// A confirmed speaker in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    /// Surface form of the name as it appears in the entity tree
    pub name: String,
    /// Firm the speaker represents, if a relation was found
    pub firm: Option<String>,
}

impl Speaker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            firm: None,
        }
    }

    pub fn with_firm(name: impl Into<String>, firm: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            firm: Some(firm.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_serializes_missing_firm_as_null() {
        let speaker = Speaker::new("Mary Jones");
        let json = serde_json::to_string(&speaker).unwrap();
        assert_eq!(json, r#"{"name":"Mary Jones","firm":null}"#);
    }
}
