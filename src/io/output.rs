use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Speaker;

/// Counts describing one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterMetadata {
    pub pages_total: usize,
    pub pages_kept: usize,
    /// Distinct PERSON mentions after stop-word filtering
    pub candidates: usize,
    /// Fingerprints with a resolved firm
    pub relations: usize,
    pub speakers: usize,
}

/// Machine-readable roster output
#[derive(Debug, Clone, Serialize)]
pub struct RosterOutput {
    /// Document the roster was extracted from, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub speakers: Vec<Speaker>,
    pub metadata: RosterMetadata,
}

impl RosterOutput {
    pub fn new(source: Option<&Path>, speakers: Vec<Speaker>, metadata: RosterMetadata) -> Self {
        Self {
            source: source.map(|p| p.display().to_string()),
            speakers,
            metadata,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Format the roster as one "Name (Firm)" line per speaker
pub fn format_roster(speakers: &[Speaker]) -> String {
    let mut output = String::new();

    for (i, speaker) in speakers.iter().enumerate() {
        let firm = speaker.firm.as_deref().unwrap_or("unknown firm");
        output.push_str(&format!("{:>3}. {} ({})\n", i + 1, speaker.name, firm));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_roster() {
        let speakers = vec![
            Speaker::with_firm("John Smith", "Acme Corp"),
            Speaker::new("Mary Jones"),
        ];

        assert_eq!(
            format_roster(&speakers),
            "  1. John Smith (Acme Corp)\n  2. Mary Jones (unknown firm)\n"
        );
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let output = RosterOutput::new(
            None,
            vec![Speaker::new("Mary Jones")],
            RosterMetadata {
                speakers: 1,
                ..Default::default()
            },
        );

        output.write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written.get("source").is_none());
        assert_eq!(written["speakers"][0]["name"], "Mary Jones");
        assert!(written["speakers"][0]["firm"].is_null());
        assert_eq!(written["metadata"]["speakers"], 1);
    }
}
