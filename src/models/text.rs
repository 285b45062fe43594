//! Sentence-transformer text model (MiniLM-style, mean pooled)

use anyhow::{bail, Context, Result};
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use tokenizers::Tokenizer;

use crate::config;
use crate::core::Vector;
use crate::embedding::SentenceEncoder;

pub struct OnnxSentenceEncoder {
	session: Session,
	tokenizer: Tokenizer,
}

impl OnnxSentenceEncoder {
	/// Loads `<models_dir>/<model_name>/model.onnx` and its `tokenizer.json`
	pub fn load(model_name: &str) -> Result<Self> {
		let (model_path, tokenizer_path) = config::encoder_files(model_name).context(format!(
			"Models directory not found. Set CATRANK_MODELS_DIR or pass --models-dir (looking for {})",
			model_name
		))?;

		if !model_path.exists() {
			bail!("Encoder model file does not exist: {}", model_path.display());
		}
		if !tokenizer_path.exists() {
			bail!("Tokenizer file does not exist: {}", tokenizer_path.display());
		}

		Self::from_files(&model_path, &tokenizer_path)
	}

	pub fn from_files(model_path: &Path, tokenizer_path: &Path) -> Result<Self> {
		let session = crate::runtime::create_session(model_path).context("Failed to load sentence encoder")?;

		let tokenizer =
			Tokenizer::from_file(tokenizer_path).map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

		Ok(Self { session, tokenizer })
	}

	fn run(&mut self, text: &str) -> Result<Vector> {
		if text.trim().is_empty() {
			bail!("Cannot encode empty text");
		}

		let encoding = self
			.tokenizer
			.encode(text, true)
			.map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

		let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&x| x as i64).collect();
		let attention_mask: Vec<i64> = encoding.get_attention_mask().iter().map(|&x| x as i64).collect();
		let token_type_ids: Vec<i64> = vec![0i64; input_ids.len()];
		let seq_len = input_ids.len();

		let input_ids = Value::from_array((vec![1, seq_len], input_ids))?;
		let mask = Value::from_array((vec![1, seq_len], attention_mask.clone()))?;
		let token_types = Value::from_array((vec![1, seq_len], token_type_ids))?;

		let outputs = self.session.run(ort::inputs![
			"input_ids" => input_ids,
			"attention_mask" => mask,
			"token_type_ids" => token_types,
		])?;

		let output = outputs
			.get("last_hidden_state")
			.or_else(|| outputs.get("sentence_embedding"))
			.context("Model output not found")?;

		let (shape, data) = output.try_extract_tensor::<f32>()?;
		let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

		let embedding = match dims.as_slice() {
			// [1, seq_len, hidden] needs pooling
			[1, n, hidden] => mean_pool(data, *n, *hidden, &attention_mask),
			[1, _] => data.to_vec(),
			_ => bail!("Unexpected output shape: {:?}", dims),
		};

		Ok(l2_normalize(embedding))
	}
}

impl SentenceEncoder for OnnxSentenceEncoder {
	fn encode(&mut self, text: &str) -> Result<Vector> {
		self.run(text)
	}
}

/// Mean pooling with attention mask over flat `[seq_len, hidden]` data
fn mean_pool(data: &[f32], seq_len: usize, hidden: usize, attention_mask: &[i64]) -> Vec<f32> {
	let mut sum = vec![0.0f32; hidden];
	let mut count = 0.0f32;

	for i in 0..seq_len {
		if attention_mask.get(i).copied().unwrap_or(0) == 1 {
			let row = &data[i * hidden..(i + 1) * hidden];
			sum.iter_mut().zip(row).for_each(|(s, x)| *s += x);
			count += 1.0;
		}
	}

	if count > 0.0 {
		sum.iter_mut().for_each(|x| *x /= count);
	}

	sum
}

fn l2_normalize(v: Vec<f32>) -> Vec<f32> {
	let norm = crate::core::magnitude(&v);
	if norm > 0.0 {
		v.iter().map(|x| x / norm).collect()
	} else {
		v
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mean_pool_skips_masked_tokens() {
		let data = [1.0, 2.0, 3.0, 4.0, 100.0, 100.0];
		assert_eq!(mean_pool(&data, 3, 2, &[1, 1, 0]), vec![2.0, 3.0]);
	}

	#[test]
	fn mean_pool_all_masked_is_zero() {
		assert_eq!(mean_pool(&[5.0, 5.0], 1, 2, &[0]), vec![0.0, 0.0]);
	}

	#[test]
	fn normalize_to_unit_length() {
		let v = l2_normalize(vec![3.0, 4.0]);
		assert!((v[0] - 0.6).abs() < 1e-6 && (v[1] - 0.8).abs() < 1e-6);
		assert_eq!(l2_normalize(vec![0.0, 0.0]), vec![0.0, 0.0]);
	}
}
