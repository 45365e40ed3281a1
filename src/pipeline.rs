use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::io::{DocumentReader, PdfDocumentReader, RosterMetadata, RosterOutput};
use crate::models::{RelationMap, Speaker};
use crate::nlp::{Annotator, RuleBasedAnnotator};
use crate::stages::{
    annotate, detect_speakers, extract_relations, select_pages, PageFilterConfig, RelationConfig,
    SpeakerConfig,
};

/// Configuration for the whole extraction pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub pages: PageFilterConfig,
    pub relations: RelationConfig,
    pub speakers: SpeakerConfig,
}

/// Everything produced by one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Speakers in first-mention order
    pub speakers: Vec<Speaker>,
    /// Fingerprint -> firm lookup used to resolve firms
    pub relations: RelationMap,
    pub metadata: RosterMetadata,
}

impl ExtractionReport {
    pub fn to_output(&self, source: Option<&Path>) -> RosterOutput {
        RosterOutput::new(source, self.speakers.clone(), self.metadata.clone())
    }
}

/// Extract the speaker roster from a transcript PDF with default settings
pub fn extract_speakers(path: &Path) -> Result<Vec<Speaker>> {
    let report = extract_with(
        &PdfDocumentReader,
        &RuleBasedAnnotator::new(),
        path,
        &PipelineConfig::default(),
    )?;
    Ok(report.speakers)
}

/// Extract the speaker roster using the given reader and annotator
///
/// Reader and annotator failures propagate; an empty roster is not an error.
pub fn extract_with(
    reader: &dyn DocumentReader,
    annotator: &dyn Annotator,
    path: &Path,
    config: &PipelineConfig,
) -> Result<ExtractionReport> {
    info!("Loading transcript from {:?}", path);
    let pages = reader.read_pages(path)?;
    let texts: Vec<&str> = pages.iter().map(|p| p.text()).collect();
    extract_from_pages(annotator, &texts, config)
}

/// Extract from already-rendered page texts
pub fn extract_from_pages<S: AsRef<str>>(
    annotator: &dyn Annotator,
    pages: &[S],
    config: &PipelineConfig,
) -> Result<ExtractionReport> {
    let selection = select_pages(pages, &config.pages);
    info!(
        "Kept {} of {} pages",
        selection.kept_pages.len(),
        selection.total_pages
    );

    let mut report = extract_from_text(annotator, &selection.text, config)?;
    report.metadata.pages_total = selection.total_pages;
    report.metadata.pages_kept = selection.kept_pages.len();
    Ok(report)
}

/// Extract from a single document string, skipping page selection
///
/// Page counts in the returned metadata are zero.
pub fn extract_from_text(
    annotator: &dyn Annotator,
    text: &str,
    config: &PipelineConfig,
) -> Result<ExtractionReport> {
    let tree = annotate(annotator, text)?;
    let relations = extract_relations(annotator, &tree, &config.relations)?;
    let detection = detect_speakers(annotator, &tree, text, &relations, &config.speakers)?;

    let metadata = RosterMetadata {
        pages_total: 0,
        pages_kept: 0,
        candidates: detection.candidates.len(),
        relations: relations.len(),
        speakers: detection.speakers.len(),
    };

    Ok(ExtractionReport {
        speakers: detection.speakers,
        relations,
        metadata,
    })
}
