pub mod stage0_pages;
pub mod stage1_annotate;
pub mod stage2_relations;
pub mod stage3_speakers;

pub use stage0_pages::*;
pub use stage1_annotate::*;
pub use stage2_relations::*;
pub use stage3_speakers::*;
