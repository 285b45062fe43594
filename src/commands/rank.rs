//! Rank command - score categories against one sentence

use anyhow::Result;
use colored::*;

use crate::chart::ChartTabs;
use crate::cli::SessionArgs;
use crate::config;
use crate::core::Ranking;
use crate::embedding::{EmbeddingProvider, EncoderProvider, EncoderRegistry, LookupTable};
use crate::engine::rank_sources;
use crate::session::SessionContext;
use crate::storage;
use crate::ui;

/// Ranks the session's categories with the lookup table, then the sentence encoder
pub fn submit(session: &mut SessionContext, table: &mut LookupTable, registry: &mut EncoderRegistry) -> Vec<(String, Ranking)> {
	let start = std::time::Instant::now();
	let encoder_model = session.encoder_model.clone();

	let results = {
		let mut encoder = EncoderProvider::new(registry, encoder_model.as_str());
		let mut providers: [&mut dyn EmbeddingProvider; 2] = [table, &mut encoder];
		rank_sources(session, &mut providers)
	};

	if !registry.is_loaded(&encoder_model) {
		ui::warn(&format!(
			"Sentence encoder '{}' unavailable, its chart uses fallback scores (--verbose for details)",
			encoder_model
		));
	}

	ui::debug(&format!(
		"Ranked {} sources in {}ms (cache: {} entries, {} hits, {} misses)",
		results.len(),
		start.elapsed().as_millis(),
		session.cache.len(),
		session.cache.hits(),
		session.cache.misses()
	));

	results
}

pub fn print_results(session: &SessionContext, results: &[(String, Ranking)], tab: Option<&str>) {
	ui::header(&format!(
		"Closest category among: {} as per different embeddings",
		session.categories.bright_white()
	));

	let mut tabs = ChartTabs::from_rankings(results);
	if let Some(name) = tab {
		if !tabs.select(name) {
			ui::warn(&format!("No tab named '{}' (available: {})", name, tabs.names().join(", ")));
		}
	}

	print!("{}", tabs.render());
	println!();
}

pub fn run(query: Option<&str>, args: &SessionArgs) -> Result<()> {
	let query = query.unwrap_or(config::DEFAULT_QUERY);
	if query.trim().is_empty() {
		ui::warn("Empty query, nothing to rank");
		return Ok(());
	}

	let mut session = SessionContext::new(args.categories.as_str(), query, args.model, args.encoder.as_str());

	ui::info(&format!("Loading GloVe {} lookup table...", args.model));
	let mut table = storage::load_lookup_table(&config::data_dir(), args.model)?;
	ui::debug(&format!("{} words in vocabulary", table.vocabulary_len()));

	let mut registry = EncoderRegistry::onnx();

	ui::info(&format!("Ranking: \"{}\"", query.bright_blue()));
	let results = submit(&mut session, &mut table, &mut registry);

	print_results(&session, &results, args.tab.as_deref());
	Ok(())
}
