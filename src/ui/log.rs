//! Unified logging system

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
            __                         __  
  _________/ /_____ __________ _____  / /__
 / ___/ __ `/ __/ __ `/ ___/ __ `/ __ \/ //_/
/ /__/ /_/ / /_/ /_/ / /  / /_/ / / / / ,<   
\___/\__,_/\__/\__,_/_/   \__,_/_/ /_/_/|_|  "#;

const SLOGANS: &[&str] = &[
	"Roses are red, vectors are too",
	"Cosine, but make it exponential",
	"e is the best score you can get",
	"Is it a flower or a color? Ask the math",
	"Fifty dimensions of weather",
	"Zero vectors need love too",
	"Pie charts, served fresh",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		let time = Local::now().format("%H:%M:%S").to_string();
		println!("{} {} {}", "⚙".bright_black().bold(), time.dimmed(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}
