//! Check command - report lookup-table artifacts

use anyhow::Result;
use colored::*;

use crate::config;
use crate::storage::{self, ModelSize};
use crate::ui;

pub fn run(size: ModelSize) -> Result<()> {
	let dir = config::data_dir();
	let missing = storage::missing_artifacts(&dir, size);

	if missing.is_empty() {
		let table = storage::load_lookup_table(&dir, size)?;
		ui::success(&format!(
			"GloVe {} ready in {} ({} words)",
			size,
			dir.display(),
			table.vocabulary_len()
		));
		return Ok(());
	}

	ui::warn(&format!("Missing {} artifacts in {}", size, dir.display()));
	for path in &missing {
		println!("  {}", path.display().to_string().dimmed());
	}

	let (index_id, embeddings_id) = storage::source_ids(size);
	println!();
	println!("  {} {}", "Word index source id:".bright_blue(), index_id);
	println!("  {} {}", "Embeddings source id:".bright_blue(), embeddings_id);
	println!(
		"  Or build them locally: {}",
		format!("catrank convert --glove glove.twitter.27B.{}.txt -m {}", size, size).yellow()
	);

	Ok(())
}
