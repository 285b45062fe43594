//! Sentence-encoder provider and model registry

use anyhow::Result;
use std::collections::HashMap;

use super::{Embedded, EmbeddingProvider, FallbackReason};
use crate::config::{DEFAULT_ENCODER, DEFAULT_ENCODER_DIM, OTHER_ENCODER_DIM};
use crate::core::Vector;
use crate::ui;

/// A pretrained text → vector model
pub trait SentenceEncoder {
	fn encode(&mut self, text: &str) -> Result<Vector>;
}

/// Builds an encoder for a model name
pub type EncoderLoader = Box<dyn FnMut(&str) -> Result<Box<dyn SentenceEncoder>>>;

/// Width of the zero vector returned when `model_name` fails
pub fn fallback_dimension(model_name: &str) -> usize {
	if model_name == DEFAULT_ENCODER {
		DEFAULT_ENCODER_DIM
	} else {
		OTHER_ENCODER_DIM
	}
}

/// Owns every loaded encoder. Each model is constructed at most once.
pub struct EncoderRegistry {
	loader: EncoderLoader,
	models: HashMap<String, Box<dyn SentenceEncoder>>,
	loads: usize,
}

impl EncoderRegistry {
	pub fn new(loader: EncoderLoader) -> Self {
		Self {
			loader,
			models: HashMap::new(),
			loads: 0,
		}
	}

	/// Registry backed by ONNX models under the configured models directory
	pub fn onnx() -> Self {
		Self::new(Box::new(|name: &str| -> Result<Box<dyn SentenceEncoder>> {
			let model = crate::models::OnnxSentenceEncoder::load(name)?;
			Ok(Box::new(model) as Box<dyn SentenceEncoder>)
		}))
	}

	/// Number of successful model constructions so far
	pub fn loads(&self) -> usize {
		self.loads
	}

	pub fn is_loaded(&self, model_name: &str) -> bool {
		self.models.contains_key(model_name)
	}

	fn get_or_load(&mut self, model_name: &str) -> Result<&mut Box<dyn SentenceEncoder>> {
		if !self.models.contains_key(model_name) {
			ui::debug(&format!("Loading sentence encoder: {}", model_name));
			let model = (self.loader)(model_name)?;
			self.loads += 1;
			self.models.insert(model_name.to_string(), model);
		}

		self.models
			.get_mut(model_name)
			.ok_or_else(|| anyhow::anyhow!("Encoder '{}' missing after load", model_name))
	}

	pub fn encode(&mut self, model_name: &str, text: &str) -> Result<Vector> {
		self.get_or_load(model_name)?.encode(text)
	}
}

/// Embeds through one named model of an [`EncoderRegistry`]
pub struct EncoderProvider<'r> {
	registry: &'r mut EncoderRegistry,
	model_name: String,
}

impl<'r> EncoderProvider<'r> {
	pub fn new(registry: &'r mut EncoderRegistry, model_name: impl Into<String>) -> Self {
		Self {
			registry,
			model_name: model_name.into(),
		}
	}

	fn embed(&mut self, text: &str) -> Embedded {
		match self.registry.encode(&self.model_name, text) {
			Ok(vector) => Embedded::Computed(vector),
			Err(e) => {
				ui::debug(&format!("Encoder '{}' failed on {:?}: {:#}", self.model_name, text, e));
				Embedded::fallback(self.dimension(), FallbackReason::EncoderFailed(format!("{:#}", e)))
			}
		}
	}
}

impl EmbeddingProvider for EncoderProvider<'_> {
	fn source_name(&self) -> String {
		format!("sentence_transformer_{}", self.dimension())
	}

	fn model_id(&self) -> String {
		self.model_name.clone()
	}

	fn dimension(&self) -> usize {
		fallback_dimension(&self.model_name)
	}

	fn embed_query(&mut self, text: &str) -> Embedded {
		self.embed(text)
	}

	fn embed_label(&mut self, label: &str) -> Embedded {
		self.embed(label)
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use anyhow::bail;
	use std::cell::Cell;
	use std::rc::Rc;

	/// Encodes `red` → [1, 0], `blue` → [0, 1], anything mentioning `red` → [1, 0]
	pub(crate) struct FakeEncoder {
		pub calls: Rc<Cell<usize>>,
	}

	impl SentenceEncoder for FakeEncoder {
		fn encode(&mut self, text: &str) -> Result<Vector> {
			self.calls.set(self.calls.get() + 1);
			if text.is_empty() {
				bail!("empty input");
			}
			if text.to_lowercase().contains("red") {
				Ok(vec![1.0, 0.0])
			} else if text.to_lowercase().contains("blue") {
				Ok(vec![0.0, 1.0])
			} else {
				Ok(vec![0.5, 0.5])
			}
		}
	}

	pub(crate) fn fake_registry(calls: Rc<Cell<usize>>) -> EncoderRegistry {
		EncoderRegistry::new(Box::new(move |_name: &str| -> Result<Box<dyn SentenceEncoder>> {
			Ok(Box::new(FakeEncoder { calls: calls.clone() }) as Box<dyn SentenceEncoder>)
		}))
	}

	#[test]
	fn fallback_dimensions() {
		assert_eq!(fallback_dimension("all-MiniLM-L6-v2"), 384);
		assert_eq!(fallback_dimension("distiluse-base-multilingual-cased"), 512);
	}

	#[test]
	fn loads_each_model_once() {
		let mut registry = fake_registry(Rc::new(Cell::new(0)));
		for _ in 0..3 {
			registry.encode(DEFAULT_ENCODER, "red").unwrap();
		}
		assert_eq!(registry.loads(), 1);
		registry.encode("other-model", "red").unwrap();
		assert_eq!(registry.loads(), 2);
		assert!(registry.is_loaded("other-model"));
	}

	#[test]
	fn encode_failure_degrades_to_zero_vector() {
		let mut registry = fake_registry(Rc::new(Cell::new(0)));
		let mut provider = EncoderProvider::new(&mut registry, DEFAULT_ENCODER);
		let e = provider.embed_query("");
		assert!(matches!(e.reason(), Some(FallbackReason::EncoderFailed(_))));
		assert_eq!(e.vector().len(), 384);
		assert!(e.vector().iter().all(|&x| x == 0.0));
	}

	#[test]
	fn load_failure_degrades_and_retries() {
		let attempts = Rc::new(Cell::new(0));
		let counter = attempts.clone();
		let mut registry = EncoderRegistry::new(Box::new(move |_name: &str| -> Result<Box<dyn SentenceEncoder>> {
			counter.set(counter.get() + 1);
			bail!("model files not found")
		}));

		let mut provider = EncoderProvider::new(&mut registry, "custom-model");
		let e = provider.embed_label("red");
		assert_eq!(e.vector().len(), 512);
		assert!(e.is_fallback());
		provider.embed_label("blue");

		assert_eq!(attempts.get(), 2);
		assert_eq!(registry.loads(), 0);
	}

	#[test]
	fn source_name_follows_dimension() {
		let mut registry = fake_registry(Rc::new(Cell::new(0)));
		let provider = EncoderProvider::new(&mut registry, DEFAULT_ENCODER);
		assert_eq!(provider.source_name(), "sentence_transformer_384");
	}
}
