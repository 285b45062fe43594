//! ONNX sessions for the sentence encoder

use anyhow::{Context, Result};
use ort::ep::ExecutionProvider;
use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use std::path::Path;
use std::sync::OnceLock;

use crate::cli::Provider;
use crate::config::ENCODER_INTRA_THREADS;
use crate::ui;

static SELECTED_PROVIDER: OnceLock<Provider> = OnceLock::new();

/// Chooses the execution provider for every session created afterwards. First call wins.
pub fn set_provider(p: Provider) {
	let _ = SELECTED_PROVIDER.set(p);
}

pub fn create_session(model_path: &Path) -> Result<Session> {
	let mut builder = Session::builder().context("Failed to create session builder")?;
	let provider = SELECTED_PROVIDER.get().copied().unwrap_or_default();

	let registered = match provider {
		Provider::Auto => register_best(&mut builder),
		Provider::Cpu => None,
		Provider::Cuda => register(&mut builder, ort::ep::CUDA::default(), "CUDA"),
		#[cfg(target_os = "macos")]
		Provider::Coreml => register(&mut builder, ort::ep::CoreML::default(), "CoreML"),
		#[cfg(not(target_os = "macos"))]
		Provider::Coreml => None,
		Provider::Xnnpack => register(&mut builder, ort::ep::XNNPACK::default(), "XNNPACK"),
	};

	match registered {
		Some(name) => ui::debug(&format!("Using {} execution provider", name)),
		None => {
			if !matches!(provider, Provider::Auto | Provider::Cpu) {
				ui::warn(&format!("{:?} execution provider unavailable, falling back to CPU", provider));
			}
			ui::debug("Using CPU execution provider");
		}
	}

	builder
		.with_optimization_level(GraphOptimizationLevel::Level3)?
		.with_intra_threads(ENCODER_INTRA_THREADS)?
		.commit_from_file(model_path)
		.with_context(|| format!("Failed to load model {}", model_path.display()))
}

fn register_best(builder: &mut SessionBuilder) -> Option<&'static str> {
	if let Some(name) = register(builder, ort::ep::CUDA::default(), "CUDA") {
		return Some(name);
	}

	#[cfg(target_os = "macos")]
	if let Some(name) = register(builder, ort::ep::CoreML::default(), "CoreML") {
		return Some(name);
	}

	register(builder, ort::ep::XNNPACK::default(), "XNNPACK")
}

fn register<E: ExecutionProvider>(builder: &mut SessionBuilder, ep: E, name: &'static str) -> Option<&'static str> {
	if !ep.is_available().unwrap_or(false) {
		ui::debug(&format!("{} not available", name));
		return None;
	}

	match ep.register(builder) {
		Ok(()) => Some(name),
		Err(e) => {
			ui::debug(&format!("{} registration failed: {}", name, e));
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::ValueEnum;

	#[test]
	fn provider_names() {
		for name in ["auto", "cpu", "cuda", "coreml", "xnnpack"] {
			assert!(Provider::from_str(name, true).is_ok(), "{}", name);
		}
		assert!(Provider::from_str("tensorrt", true).is_err());
		assert!(matches!(Provider::default(), Provider::Auto));
	}
}
