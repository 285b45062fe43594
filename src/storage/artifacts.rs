//! Word-index and embedding-matrix files

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ARTIFACT_EXT, ARTIFACT_SUFFIX, EMBEDDINGS_PREFIX, WORD_INDEX_PREFIX};
use crate::embedding::LookupTable;

/// GloVe Twitter table size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ModelSize {
	/// 25-dimensional vectors
	#[value(name = "25d")]
	D25,
	/// 50-dimensional vectors
	#[default]
	#[value(name = "50d")]
	D50,
	/// 100-dimensional vectors
	#[value(name = "100d")]
	D100,
}

impl ModelSize {
	pub fn dimension(self) -> usize {
		match self {
			ModelSize::D25 => 25,
			ModelSize::D50 => 50,
			ModelSize::D100 => 100,
		}
	}
}

impl std::fmt::Display for ModelSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}d", self.dimension())
	}
}

/// Remote file identifiers of the (word index, embeddings) pair for a size
pub fn source_ids(size: ModelSize) -> (&'static str, &'static str) {
	match size {
		ModelSize::D25 => ("13qMXs3-oB9C6kfSRMwbAtzda9xuAUtt8", "1-RXcfBvWyE-Av3ZHLcyJVsps0RYRRr_2"),
		ModelSize::D50 => ("1rB4ksHyHZ9skes-fJHMa2Z8J1Qa7awQ9", "1DBaVpJsitQ1qxtUvV1Kz7ThDc3az16kZ"),
		ModelSize::D100 => ("1-oWV0LqG3fmrozRZ7WB1jzeTJHRUI3mq", "1SRHfX130_6Znz7zbdfqboKosz-PfNvNp"),
	}
}

/// Row-major matrix as stored on disk
#[derive(Debug, Serialize, Deserialize)]
pub struct EmbeddingMatrix {
	pub rows: usize,
	pub dim: usize,
	pub data: Vec<f32>,
}

impl EmbeddingMatrix {
	pub fn from_array(array: &Array2<f32>) -> Self {
		let (rows, dim) = array.dim();
		Self {
			rows,
			dim,
			data: array.iter().copied().collect(),
		}
	}

	pub fn into_array(self) -> Result<Array2<f32>> {
		Array2::from_shape_vec((self.rows, self.dim), self.data).context("Embedding matrix shape does not match its data")
	}
}

/// (word index, embeddings) file paths for a size
pub fn artifact_paths(dir: &Path, size: ModelSize) -> (PathBuf, PathBuf) {
	(
		dir.join(format!("{}_{}_{}.{}", WORD_INDEX_PREFIX, size, ARTIFACT_SUFFIX, ARTIFACT_EXT)),
		dir.join(format!("{}_{}_{}.{}", EMBEDDINGS_PREFIX, size, ARTIFACT_SUFFIX, ARTIFACT_EXT)),
	)
}

pub fn missing_artifacts(dir: &Path, size: ModelSize) -> Vec<PathBuf> {
	let (index, embeddings) = artifact_paths(dir, size);
	[index, embeddings].into_iter().filter(|p| !p.is_file()).collect()
}

pub fn load_lookup_table(dir: &Path, size: ModelSize) -> Result<LookupTable> {
	let missing = missing_artifacts(dir, size);
	if !missing.is_empty() {
		let names: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
		bail!("Missing {} artifacts: {} (run 'catrank check -m {}')", size, names.join(", "), size);
	}

	let (index_path, embeddings_path) = artifact_paths(dir, size);

	let bytes = fs::read(&index_path).with_context(|| format!("Failed to read {}", index_path.display()))?;
	let word_index: HashMap<String, usize> =
		rmp_serde::from_slice(&bytes).with_context(|| format!("Failed to deserialize {}", index_path.display()))?;

	let bytes = fs::read(&embeddings_path).with_context(|| format!("Failed to read {}", embeddings_path.display()))?;
	let matrix: EmbeddingMatrix =
		rmp_serde::from_slice(&bytes).with_context(|| format!("Failed to deserialize {}", embeddings_path.display()))?;

	LookupTable::new(word_index, matrix.into_array()?, size)
}

pub fn save_lookup_table(
	dir: &Path,
	size: ModelSize,
	word_index: &HashMap<String, usize>,
	vectors: &Array2<f32>,
) -> Result<(PathBuf, PathBuf)> {
	fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
	let (index_path, embeddings_path) = artifact_paths(dir, size);

	let bytes = rmp_serde::to_vec(word_index).context("Failed to serialize word index")?;
	fs::write(&index_path, bytes).with_context(|| format!("Failed to write {}", index_path.display()))?;

	let bytes = rmp_serde::to_vec(&EmbeddingMatrix::from_array(vectors)).context("Failed to serialize embeddings")?;
	fs::write(&embeddings_path, bytes).with_context(|| format!("Failed to write {}", embeddings_path.display()))?;

	Ok((index_path, embeddings_path))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn artifact_names_follow_convention() {
		let (index, embeddings) = artifact_paths(Path::new("data"), ModelSize::D25);
		assert_eq!(index, Path::new("data/word_index_dict_25d_temp.msgpack"));
		assert_eq!(embeddings, Path::new("data/embeddings_25d_temp.msgpack"));
	}

	#[test]
	fn size_names() {
		assert_eq!(ModelSize::D50.to_string(), "50d");
		assert_eq!(ModelSize::from_str("25d", false), Ok(ModelSize::D25));
		assert_eq!(ModelSize::default(), ModelSize::D50);
	}

	#[test]
	fn matrix_shape_is_checked() {
		let bad = EmbeddingMatrix { rows: 2, dim: 2, data: vec![1.0, 2.0, 3.0] };
		assert!(bad.into_array().is_err());
	}

	#[test]
	fn missing_files_are_reported() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(missing_artifacts(dir.path(), ModelSize::D50).len(), 2);
		assert!(load_lookup_table(dir.path(), ModelSize::D50).is_err());
	}
}
