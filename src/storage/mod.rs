//! Lookup-table artifact storage

pub mod artifacts;
pub mod glove;

pub use artifacts::{
	artifact_paths, load_lookup_table, missing_artifacts, save_lookup_table, source_ids, EmbeddingMatrix, ModelSize,
};
pub use glove::{parse_glove_text, GloveTable};
