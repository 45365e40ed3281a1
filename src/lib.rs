pub mod heuristics;
pub mod io;
pub mod logging;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod stages;

pub use heuristics::{fingerprint, StopWords, DEFAULT_STOP_WORDS};
pub use io::{format_roster, DocumentReader, Page, PdfDocumentReader, RosterMetadata, RosterOutput};
pub use logging::init_logging;
pub use models::{EntityLabel, EntitySpan, EntityTree, Node, RelationMap, RelationMatch, Speaker, TaggedToken};
pub use nlp::{AnnotationError, Annotator, RuleBasedAnnotator};
pub use pipeline::{
    extract_from_pages, extract_from_text, extract_speakers, extract_with, ExtractionReport,
    PipelineConfig,
};
pub use stages::{
    detect_speakers, extract_relations, filter_pages, select_pages, PageFilterConfig,
    RelationConfig, SpeakerConfig,
};
