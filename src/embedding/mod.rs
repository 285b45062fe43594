//! # Embedding Providers
//!
//! Two sources turn text into vectors: a GloVe lookup table and a
//! pretrained sentence encoder. Neither fails outright. When no vector can
//! be produced they hand back a zero vector tagged with the reason, so the
//! ranking can proceed while callers still see what happened.

pub mod encoder;
pub mod lookup;

pub use encoder::{fallback_dimension, EncoderLoader, EncoderProvider, EncoderRegistry, SentenceEncoder};
pub use lookup::LookupTable;

use crate::core::Vector;

/// Why a provider returned a zero vector instead of a computed one
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
	/// No token of the input is in the vocabulary
	OutOfVocabulary,
	/// The encoder could not be loaded or rejected the input
	EncoderFailed(String),
}

impl std::fmt::Display for FallbackReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FallbackReason::OutOfVocabulary => write!(f, "not in vocabulary"),
			FallbackReason::EncoderFailed(e) => write!(f, "encoder failed: {}", e),
		}
	}
}

/// Result of embedding a piece of text
#[derive(Debug, Clone, PartialEq)]
pub enum Embedded {
	Computed(Vector),
	Fallback { vector: Vector, reason: FallbackReason },
}

impl Embedded {
	pub fn fallback(dim: usize, reason: FallbackReason) -> Self {
		Embedded::Fallback {
			vector: crate::core::zero_vector(dim),
			reason,
		}
	}

	pub fn vector(&self) -> &[f32] {
		match self {
			Embedded::Computed(v) => v,
			Embedded::Fallback { vector, .. } => vector,
		}
	}

	pub fn into_vector(self) -> Vector {
		match self {
			Embedded::Computed(v) => v,
			Embedded::Fallback { vector, .. } => vector,
		}
	}

	pub fn is_fallback(&self) -> bool {
		matches!(self, Embedded::Fallback { .. })
	}

	/// Whether the result can be reused for the rest of the session.
	///
	/// Encoder failures are transient and must be retried.
	pub fn is_cacheable(&self) -> bool {
		!matches!(self.reason(), Some(FallbackReason::EncoderFailed(_)))
	}

	pub fn reason(&self) -> Option<&FallbackReason> {
		match self {
			Embedded::Computed(_) => None,
			Embedded::Fallback { reason, .. } => Some(reason),
		}
	}
}

/// A source of query and category embeddings
pub trait EmbeddingProvider {
	/// Name shown on the chart tab, e.g. `glove_50d`
	fn source_name(&self) -> String;

	/// Key under which category vectors are cached
	fn model_id(&self) -> String;

	/// Expected output dimensionality
	fn dimension(&self) -> usize;

	/// Embeds the user's query sentence
	fn embed_query(&mut self, text: &str) -> Embedded;

	/// Embeds a single category label
	fn embed_label(&mut self, label: &str) -> Embedded;
}
