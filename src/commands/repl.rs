//! REPL mode - interactive ranking session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::chart::ChartTabs;
use crate::cli::SessionArgs;
use crate::config;
use crate::embedding::{EncoderRegistry, LookupTable};
use crate::session::SessionContext;
use crate::storage::{self, ModelSize};
use crate::ui;
use clap::ValueEnum;

use super::rank::{print_results, submit};

/// One parsed line of input
#[derive(Debug, PartialEq)]
enum Input<'a> {
	Empty,
	Exit,
	Help,
	Categories(&'a str),
	Model(&'a str),
	Tab(Option<&'a str>),
	Tabs,
	Query(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
	let line = line.trim();

	if line.is_empty() {
		return Input::Empty;
	}

	match line {
		"exit" | "quit" | "q" => return Input::Exit,
		"help" => return Input::Help,
		":tabs" => return Input::Tabs,
		_ => {}
	}

	if let Some(rest) = line.strip_prefix(":categories") {
		return Input::Categories(rest.trim());
	}
	if let Some(rest) = line.strip_prefix(":model") {
		return Input::Model(rest.trim());
	}
	if let Some(rest) = line.strip_prefix(":tab") {
		let rest = rest.trim();
		return Input::Tab(if rest.is_empty() { None } else { Some(rest) });
	}

	Input::Query(line)
}

pub fn run(args: &SessionArgs) -> Result<()> {
	ui::print_logo();
	ui::info("Starting interactive ranking session");
	ui::info("Type a sentence to rank, 'help' for commands, or 'exit' to quit");
	println!();

	let mut session = SessionContext::new(args.categories.as_str(), "", args.model, args.encoder.as_str());
	let mut table = load_table(args.model)?;
	let mut registry = EncoderRegistry::onnx();
	let mut selected_tab = args.tab.clone();
	let mut last_results = Vec::new();

	ui::info(&format!("Categories: {}", session.categories.bright_white()));
	println!();

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		print!("{} ", "catrank>".bright_blue().bold());
		io::stdout().flush()?;

		let Some(line) = lines.next() else {
			break;
		};
		let line = line?;

		match parse_input(&line) {
			Input::Empty => continue,
			Input::Exit => {
				ui::info("Goodbye!");
				break;
			}
			Input::Help => show_help(),
			Input::Categories(categories) => {
				session.categories = categories.to_string();
				if session.labels().is_empty() {
					ui::warn("No categories set, rankings will be empty");
				} else {
					ui::success(&format!("Categories: {}", session.categories.bright_white()));
				}
			}
			Input::Model(name) => match ModelSize::from_str(name, true) {
				Ok(size) if size == session.model_size => ui::info(&format!("Already using {}", size)),
				Ok(size) => match load_table(size) {
					Ok(t) => {
						table = t;
						session.model_size = size;
						ui::success(&format!("Switched to GloVe {}", size));
					}
					Err(e) => ui::error(&format!("{:#}", e)),
				},
				Err(_) => ui::error(&format!("Unknown model '{}' (use 25d, 50d or 100d)", name)),
			},
			Input::Tab(name) => {
				selected_tab = name.map(str::to_string);
				if !last_results.is_empty() {
					print_results(&session, &last_results, selected_tab.as_deref());
				}
			}
			Input::Tabs => {
				let tabs = ChartTabs::from_rankings(&last_results);
				if tabs.names().is_empty() {
					ui::info("No results yet");
				} else {
					ui::info(&format!("Tabs: {}", tabs.names().join(", ")));
				}
			}
			Input::Query(query) => {
				session.query = query.to_string();
				last_results = submit(&mut session, &mut table, &mut registry);
				print_results(&session, &last_results, selected_tab.as_deref());
			}
		}

		println!();
	}

	Ok(())
}

fn load_table(size: ModelSize) -> Result<LookupTable> {
	ui::info(&format!("Loading GloVe {} lookup table...", size));
	storage::load_lookup_table(&config::data_dir(), size)
}

fn show_help() {
	println!("{}", "REPL Commands:".bright_blue().bold());
	println!("  {}                Rank categories against a sentence", "<text>".dimmed());
	println!("  {}  Replace the category list", ":categories <a b c>".dimmed());
	println!("  {}      Switch GloVe table (25d, 50d, 100d)", ":model <size>".dimmed());
	println!("  {}      Show one tab (no name shows all)", ":tab [source]".dimmed());
	println!("  {}                 List tabs of the last result", ":tabs".dimmed());
	println!("  {}                  Show this help message", "help".dimmed());
	println!("  {}                  Exit REPL mode", "exit".dimmed());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_commands() {
		assert_eq!(parse_input("   "), Input::Empty);
		assert_eq!(parse_input("quit"), Input::Exit);
		assert_eq!(parse_input(":categories Joy Anger  Worry"), Input::Categories("Joy Anger  Worry"));
		assert_eq!(parse_input(":model 25d"), Input::Model("25d"));
		assert_eq!(parse_input(":tab glove_25d"), Input::Tab(Some("glove_25d")));
		assert_eq!(parse_input(":tab"), Input::Tab(None));
		assert_eq!(parse_input(":tabs"), Input::Tabs);
	}

	#[test]
	fn anything_else_is_a_query() {
		assert_eq!(parse_input("  Roses are red  "), Input::Query("Roses are red"));
		assert_eq!(parse_input("help me"), Input::Query("help me"));
	}
}
