//! # ONNX Models
//!
//! Sentence encoder backed by ONNX Runtime and a HuggingFace tokenizer.

pub mod text;

pub use text::OnnxSentenceEncoder;
