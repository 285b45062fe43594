//! Ranking engine: scores every category label against one query

use crate::core::{score, RankedCategory, Ranking, SENTINEL_SCORE};
use crate::embedding::EmbeddingProvider;
use crate::session::{CategoryCache, SessionContext};
use crate::ui;

/// Ranks `labels` by similarity to `query` under one provider.
///
/// The query is embedded on every call; category embeddings go through `cache`.
/// A category that cannot be scored gets [`SENTINEL_SCORE`] and is still ranked.
pub fn rank(query: &str, labels: &[String], provider: &mut dyn EmbeddingProvider, cache: &mut CategoryCache) -> Ranking {
	if labels.is_empty() {
		return Ranking::default();
	}

	let query_embedding = provider.embed_query(query);
	if let Some(reason) = query_embedding.reason() {
		ui::debug(&format!("{}: query embedding fell back ({})", provider.source_name(), reason));
	}
	let query_vector = query_embedding.into_vector();
	let model_id = provider.model_id();

	let mut entries = Vec::with_capacity(labels.len());

	for label in labels {
		let category = cache.get_or_embed(&model_id, label, || provider.embed_label(label));
		if let Some(reason) = category.reason() {
			ui::debug(&format!("{}: category '{}' fell back ({})", model_id, label, reason));
		}

		let entry = match score(&query_vector, category.vector()) {
			Ok(s) => RankedCategory { label: label.clone(), score: s, degenerate: false },
			Err(e) => {
				ui::debug(&format!("{}: '{}' scored as {} ({})", model_id, label, SENTINEL_SCORE, e));
				RankedCategory { label: label.clone(), score: SENTINEL_SCORE, degenerate: true }
			}
		};
		entries.push(entry);
	}

	Ranking::from_unsorted(entries)
}

/// Runs every provider in order over the session's current inputs
pub fn rank_sources(session: &mut SessionContext, providers: &mut [&mut dyn EmbeddingProvider]) -> Vec<(String, Ranking)> {
	let labels = session.labels();

	providers
		.iter_mut()
		.map(|provider| {
			let ranking = rank(&session.query, &labels, &mut **provider, &mut session.cache);
			(provider.source_name(), ranking)
		})
		.collect()
}
