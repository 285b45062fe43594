use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_CATEGORIES, DEFAULT_ENCODER};
use crate::storage::ModelSize;

/// Execution provider for ONNX Runtime
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Provider {
	/// Auto-detect best available (CUDA → CoreML → XNNPACK → CPU)
	#[default]
	Auto,
	/// CPU only
	Cpu,
	/// NVIDIA CUDA GPU
	Cuda,
	/// Apple CoreML (macOS only)
	Coreml,
	/// XNNPACK (optimized CPU kernels)
	Xnnpack,
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "catrank",
	author,
	version,
	about = "Rank categories by semantic similarity to a sentence",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {rank}     {rank_args}  {rank_desc}
  {bin} {repl}     {repl_args}                    {repl_desc}
  {bin} {convert}  {convert_args}  {convert_desc}
  {bin} {check}    {check_args}                     {check_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "catrank".bright_blue(),
		rank = "rank".yellow(),
		rank_args = "\"Roses are red\" -c \"Flowers Colors Cars\"",
		rank_desc = "Rank three categories".dimmed(),
		repl = "repl".yellow(),
		repl_args = "-m 25d",
		repl_desc = "Interactive session".dimmed(),
		convert = "convert".yellow(),
		convert_args = "--glove glove.twitter.27B.50d.txt",
		convert_desc = "Build lookup tables".dimmed(),
		check = "check".yellow(),
		check_args = "-m 50d",
		check_desc = "Look for lookup tables".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Execution provider: auto, cpu, cuda, coreml, xnnpack
	#[arg(short = 'p', long = "provider", global = true, default_value = "auto")]
	pub provider: Provider,

	/// Directory holding the lookup-table artifacts
	#[arg(long = "data-dir", global = true, value_name = "DIR")]
	pub data_dir: Option<PathBuf>,

	/// Directory holding sentence encoder models (<DIR>/<model>/model.onnx)
	#[arg(long = "models-dir", global = true, value_name = "DIR")]
	pub models_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

/// Inputs shared by `rank` and `repl`
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
	/// Space-separated category labels
	#[arg(short = 'c', long = "categories", default_value = DEFAULT_CATEGORIES)]
	pub categories: String,

	/// GloVe table size
	#[arg(short = 'm', long = "model", default_value = "50d")]
	pub model: ModelSize,

	/// Sentence encoder model name
	#[arg(short = 'e', long = "encoder", default_value = DEFAULT_ENCODER)]
	pub encoder: String,

	/// Only show the chart for this source (e.g. glove_50d)
	#[arg(short = 't', long = "tab", value_name = "SOURCE")]
	pub tab: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Rank categories against one sentence
	Rank {
		/// Input word or sentence
		#[arg(value_name = "QUERY")]
		query: Option<String>,

		#[command(flatten)]
		session: SessionArgs,
	},

	/// Interactive session: each line is a query
	Repl {
		#[command(flatten)]
		session: SessionArgs,
	},

	/// Build lookup-table artifacts from a GloVe text file
	Convert {
		/// GloVe text file (word v1 v2 ... vN per line)
		#[arg(short = 'g', long = "glove", value_name = "FILE")]
		glove: PathBuf,

		/// Table size the file contains
		#[arg(short = 'm', long = "model", default_value = "50d")]
		model: ModelSize,
	},

	/// Report missing lookup-table artifacts and where to get them
	Check {
		/// Table size to check
		#[arg(short = 'm', long = "model", default_value = "50d")]
		model: ModelSize,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
