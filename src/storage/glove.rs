//! GloVe text format reader (`word v1 v2 ... vN` per line)

use anyhow::{Context, Result};
use ndarray::Array2;
use std::collections::HashMap;
use std::io::BufRead;

use super::ModelSize;

/// Word index and row-major vectors parsed from a GloVe file
pub struct GloveTable {
	pub word_index: HashMap<String, usize>,
	pub vectors: Array2<f32>,
	pub skipped: usize,
}

/// Reads every well-formed line of width `size`. Repeated words keep their first vector.
pub fn parse_glove_text<R: BufRead>(reader: R, size: ModelSize) -> Result<GloveTable> {
	let dim = size.dimension();
	let mut word_index = HashMap::new();
	let mut data = Vec::new();
	let mut skipped = 0;

	for (line_no, line) in reader.lines().enumerate() {
		let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
		let mut parts = line.split_whitespace();
		let Some(word) = parts.next() else {
			continue;
		};

		let values: Result<Vec<f32>, _> = parts.map(str::parse::<f32>).collect();
		let values = match values {
			Ok(v) if v.len() == dim => v,
			_ => {
				skipped += 1;
				continue;
			}
		};

		if word_index.contains_key(word) {
			skipped += 1;
			continue;
		}

		word_index.insert(word.to_string(), word_index.len());
		data.extend(values);
	}

	let vectors = Array2::from_shape_vec((word_index.len(), dim), data).context("GloVe rows have inconsistent width")?;

	Ok(GloveTable { word_index, vectors, skipped })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn line(word: &str, value: f32) -> String {
		let values: Vec<String> = (0..25).map(|i| format!("{}", value + i as f32)).collect();
		format!("{} {}\n", word, values.join(" "))
	}

	#[test]
	fn parses_rows_in_order() {
		let text = format!("{}{}", line("red", 0.0), line("blue", 1.0));
		let table = parse_glove_text(text.as_bytes(), ModelSize::D25).unwrap();

		assert_eq!(table.word_index["red"], 0);
		assert_eq!(table.word_index["blue"], 1);
		assert_eq!(table.vectors.dim(), (2, 25));
		assert_eq!(table.vectors[[1, 0]], 1.0);
		assert_eq!(table.skipped, 0);
	}

	#[test]
	fn skips_malformed_and_duplicate_lines() {
		let text = format!(
			"{}green 1.0 2.0\n{}\nyellow x{}\n{}",
			line("red", 0.0),
			line("red", 9.0).trim_end(),
			" 1".repeat(24),
			line("blue", 1.0)
		);
		let table = parse_glove_text(text.as_bytes(), ModelSize::D25).unwrap();

		assert_eq!(table.word_index.len(), 2);
		assert_eq!(table.vectors[[0, 0]], 0.0);
		assert_eq!(table.skipped, 3);
	}
}
