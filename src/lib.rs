//! # catrank
//!
//! Ranks a set of category labels by semantic similarity to a sentence,
//! once with averaged GloVe word vectors and once with a sentence
//! transformer, and draws each ranking as a pie chart.
//!
//! ```text
//! sentence ─┬─ LookupTable ─────┐
//!           └─ EncoderProvider ─┴─ rank() ─ Ranking ─ ChartTabs
//!                                   │
//!                            CategoryCache
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod embedding;
pub mod engine;
pub mod models;
pub mod runtime;
pub mod session;
pub mod storage;
pub mod ui;
