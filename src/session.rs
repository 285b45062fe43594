//! Per-session state: the current inputs and the category embedding cache

use std::collections::HashMap;

use crate::config::{DEFAULT_CATEGORIES, DEFAULT_ENCODER, DEFAULT_QUERY};
use crate::core::parse_categories;
use crate::embedding::Embedded;
use crate::storage::ModelSize;

/// Category embeddings keyed by (model id, label), filled on first use
#[derive(Debug, Default)]
pub struct CategoryCache {
	entries: HashMap<(String, String), Embedded>,
	hits: usize,
	misses: usize,
}

impl CategoryCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the cached embedding, or runs `embed` and keeps the result if it is cacheable.
	///
	/// Encoder failures are handed back but not stored, so the next request tries again.
	pub fn get_or_embed<F>(&mut self, model_id: &str, label: &str, embed: F) -> Embedded
	where
		F: FnOnce() -> Embedded,
	{
		let key = (model_id.to_string(), label.to_string());
		if let Some(cached) = self.entries.get(&key) {
			self.hits += 1;
			return cached.clone();
		}

		self.misses += 1;
		let embedded = embed();
		if embedded.is_cacheable() {
			self.entries.insert(key, embedded.clone());
		}
		embedded
	}

	pub fn contains(&self, model_id: &str, label: &str) -> bool {
		self.entries.contains_key(&(model_id.to_string(), label.to_string()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn hits(&self) -> usize {
		self.hits
	}

	pub fn misses(&self) -> usize {
		self.misses
	}
}

/// Everything one interactive session reads and mutates
#[derive(Debug)]
pub struct SessionContext {
	pub categories: String,
	pub query: String,
	pub model_size: ModelSize,
	pub encoder_model: String,
	pub cache: CategoryCache,
}

impl Default for SessionContext {
	fn default() -> Self {
		Self {
			categories: DEFAULT_CATEGORIES.to_string(),
			query: DEFAULT_QUERY.to_string(),
			model_size: ModelSize::default(),
			encoder_model: DEFAULT_ENCODER.to_string(),
			cache: CategoryCache::new(),
		}
	}
}

impl SessionContext {
	pub fn new(categories: impl Into<String>, query: impl Into<String>, model_size: ModelSize, encoder_model: impl Into<String>) -> Self {
		Self {
			categories: categories.into(),
			query: query.into(),
			model_size,
			encoder_model: encoder_model.into(),
			cache: CategoryCache::new(),
		}
	}

	pub fn labels(&self) -> Vec<String> {
		parse_categories(&self.categories)
	}
}
