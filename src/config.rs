//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Sentence Encoder ===
pub const DEFAULT_ENCODER: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_ENCODER_DIM: usize = 384;
pub const OTHER_ENCODER_DIM: usize = 512;
pub const ENCODER_MODEL: &str = "model.onnx";
pub const ENCODER_TOKENIZER: &str = "tokenizer.json";
pub const ENCODER_INTRA_THREADS: usize = 4;

// === Lookup Table Artifacts ===
pub const WORD_INDEX_PREFIX: &str = "word_index_dict";
pub const EMBEDDINGS_PREFIX: &str = "embeddings";
pub const ARTIFACT_SUFFIX: &str = "temp";
pub const ARTIFACT_EXT: &str = "msgpack";

// === Session Defaults ===
pub const DEFAULT_CATEGORIES: &str = "Flowers Colors Cars Weather Food";
pub const DEFAULT_QUERY: &str = "Roses are red, trucks are blue, and Seattle is grey right now";

// === Chart ===
pub const EXPLODE_TOP: f32 = 0.2;
pub const EXPLODE_SECOND_OF_THREE: f32 = 0.1;
pub const EXPLODE_THIRD: f32 = 0.05;
pub const CHART_WIDTH: usize = 40;

pub fn set_data_dir(path: PathBuf) {
	let _ = CUSTOM_DATA_DIR.set(path);
}

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

/// Directory holding the lookup-table artifacts (`--data-dir`, CATRANK_DATA_DIR, or cwd)
pub fn data_dir() -> PathBuf {
	if let Some(custom) = CUSTOM_DATA_DIR.get() {
		return custom.clone();
	}

	if let Ok(env_path) = std::env::var("CATRANK_DATA_DIR") {
		crate::ui::debug(&format!("Using CATRANK_DATA_DIR: {}", env_path));
		return PathBuf::from(env_path);
	}

	PathBuf::from(".")
}

/// Get models directory (`--models-dir`, CATRANK_MODELS_DIR, or `models/` next to the executable)
pub fn models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var("CATRANK_MODELS_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using CATRANK_MODELS_DIR: {}", env_path));
			return Some(path);
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::ui::debug(&format!("Found models at: {}", models.display()));
				return Some(models);
			}
		}
	}

	None
}

/// Model and tokenizer paths for a named sentence encoder
pub fn encoder_files(model_name: &str) -> Option<(PathBuf, PathBuf)> {
	let dir = models_dir()?.join(model_name);
	Some((dir.join(ENCODER_MODEL), dir.join(ENCODER_TOKENIZER)))
}
