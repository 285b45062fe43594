//! GloVe lookup-table provider

use anyhow::{bail, Result};
use ndarray::Array2;
use std::collections::HashMap;

use super::{Embedded, EmbeddingProvider, FallbackReason};
use crate::storage::ModelSize;

/// Word vectors addressed through a word → row index
pub struct LookupTable {
	word_index: HashMap<String, usize>,
	vectors: Array2<f32>,
	size: ModelSize,
}

impl LookupTable {
	pub fn new(word_index: HashMap<String, usize>, vectors: Array2<f32>, size: ModelSize) -> Result<Self> {
		Self::with_dimension(word_index, vectors, size, size.dimension())
	}

	/// Builds a table whose width is not one of the GloVe sizes (fixtures, custom tables)
	pub fn with_dimension(
		word_index: HashMap<String, usize>,
		vectors: Array2<f32>,
		size: ModelSize,
		dim: usize,
	) -> Result<Self> {
		let (rows, cols) = vectors.dim();
		if cols != dim {
			bail!("Embedding matrix has {} columns, expected {}", cols, dim);
		}
		if let Some((word, &idx)) = word_index.iter().find(|(_, &idx)| idx >= rows) {
			bail!("Word '{}' points at row {} but the matrix has {} rows", word, idx, rows);
		}

		Ok(Self { word_index, vectors, size })
	}

	pub fn vocabulary_len(&self) -> usize {
		self.word_index.len()
	}

	fn row(&self, idx: usize) -> Vec<f32> {
		self.vectors.row(idx).to_vec()
	}

	/// Vector for a single word, looked up lower-cased
	pub fn embed_word(&self, word: &str) -> Embedded {
		match self.word_index.get(&word.to_lowercase()) {
			Some(&idx) => Embedded::Computed(self.row(idx)),
			None => Embedded::fallback(self.dimension(), FallbackReason::OutOfVocabulary),
		}
	}

	/// Mean of the vectors of the whitespace-separated tokens found in the table.
	///
	/// Tokens are matched with their exact case, unlike [`embed_word`](Self::embed_word).
	pub fn embed_sentence(&self, sentence: &str) -> Embedded {
		let mut sum = ndarray::Array1::<f32>::zeros(self.dimension());
		let mut matched = 0usize;

		for token in sentence.split_whitespace() {
			if let Some(&idx) = self.word_index.get(token) {
				sum += &self.vectors.row(idx);
				matched += 1;
			}
		}

		if matched == 0 {
			return Embedded::fallback(self.dimension(), FallbackReason::OutOfVocabulary);
		}

		sum /= matched as f32;
		Embedded::Computed(sum.to_vec())
	}
}

impl EmbeddingProvider for LookupTable {
	fn source_name(&self) -> String {
		format!("glove_{}", self.size)
	}

	fn model_id(&self) -> String {
		self.source_name()
	}

	fn dimension(&self) -> usize {
		self.vectors.ncols()
	}

	fn embed_query(&mut self, text: &str) -> Embedded {
		self.embed_sentence(text)
	}

	fn embed_label(&mut self, label: &str) -> Embedded {
		self.embed_word(label)
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use ndarray::array;

	/// Two-dimensional table with `red` = [1, 0] and `blue` = [0, 1]
	pub(crate) fn colors() -> LookupTable {
		let index = HashMap::from([("red".to_string(), 0), ("blue".to_string(), 1)]);
		LookupTable::with_dimension(index, array![[1.0, 0.0], [0.0, 1.0]], ModelSize::D25, 2).unwrap()
	}

	#[test]
	fn word_lookup_is_case_insensitive() {
		let table = colors();
		assert_eq!(table.embed_word("RED"), Embedded::Computed(vec![1.0, 0.0]));
		assert_eq!(table.embed_word("blue").vector(), &[0.0, 1.0]);
	}

	#[test]
	fn unknown_word_is_zero_fallback() {
		let table = colors();
		let e = table.embed_word("unknownword123");
		assert_eq!(e.vector(), &[0.0, 0.0]);
		assert_eq!(e.reason(), Some(&FallbackReason::OutOfVocabulary));
	}

	#[test]
	fn sentence_averages_matched_tokens() {
		let table = colors();
		assert_eq!(table.embed_sentence("Roses are red").vector(), table.embed_word("red").vector());
		assert_eq!(table.embed_sentence("red blue").vector(), &[0.5, 0.5]);
	}

	#[test]
	fn sentence_lookup_is_exact_case() {
		let table = colors();
		let e = table.embed_sentence("RED Blue");
		assert!(e.is_fallback());
		assert_eq!(e.vector(), &[0.0, 0.0]);
	}

	#[test]
	fn empty_sentence_is_zero_fallback() {
		assert!(colors().embed_sentence("").is_fallback());
	}

	#[test]
	fn rejects_out_of_range_index() {
		let index = HashMap::from([("red".to_string(), 5)]);
		assert!(LookupTable::with_dimension(index, array![[1.0, 0.0]], ModelSize::D25, 2).is_err());
	}

	#[test]
	fn rejects_wrong_width() {
		let index = HashMap::from([("red".to_string(), 0)]);
		assert!(LookupTable::new(index, array![[1.0, 0.0]], ModelSize::D25).is_err());
	}
}
