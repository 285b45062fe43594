//! catrank - rank categories against a sentence with two embedding sources

use anyhow::Result;
use clap::{CommandFactory, Parser};

use catrank::cli::{Cli, Command};
use catrank::{commands, config, runtime, ui};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	runtime::set_provider(cli.provider);
	if let Some(dir) = cli.data_dir {
		config::set_data_dir(dir);
	}
	if let Some(dir) = cli.models_dir {
		config::set_model_dir(dir);
	}

	match cli.command {
		Command::Rank { query, session } => commands::rank::run(query.as_deref(), &session),
		Command::Repl { session } => commands::repl::run(&session),
		Command::Convert { glove, model } => commands::convert::run(&glove, model),
		Command::Check { model } => commands::check::run(model),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand.and_then(|sub| cmd.find_subcommand_mut(&sub).cloned()) {
				Some(mut sub_cmd) => sub_cmd.print_help()?,
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}
