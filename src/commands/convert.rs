//! Convert command - GloVe text file → lookup-table artifacts

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use crate::config;
use crate::storage::{self, ModelSize};
use crate::ui;

pub fn run(glove: &Path, size: ModelSize) -> Result<()> {
	let start = Instant::now();
	ui::info(&format!("Reading {} ({} vectors)", glove.display(), size));

	let file = File::open(glove).with_context(|| format!("Failed to open {}", glove.display()))?;
	let table = storage::parse_glove_text(BufReader::new(file), size)?;

	if table.word_index.is_empty() {
		bail!("No {}-dimensional vectors found in {}", size.dimension(), glove.display());
	}
	if table.skipped > 0 {
		ui::warn(&format!("Skipped {} malformed or duplicate lines", table.skipped));
	}

	let (index_path, embeddings_path) =
		storage::save_lookup_table(&config::data_dir(), size, &table.word_index, &table.vectors)?;

	ui::success(&format!(
		"Wrote {} words in {:.2}s",
		table.word_index.len(),
		start.elapsed().as_secs_f32()
	));
	ui::debug(&format!("{}", index_path.display()));
	ui::debug(&format!("{}", embeddings_path.display()));

	Ok(())
}
