#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "chjson", about = "JSON column binary codec tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode consecutive values and print them as JSON text.
	Decode(cmd::decode::Args),
	/// Encode JSON lines into the binary column format.
	Encode(cmd::encode::Args),
	/// Show per-field wire tags of each decoded value.
	Dump(cmd::dump::Args),
	/// List the wire tag table.
	Tags(cmd::tags::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> chjson::codec::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Tags(args) => cmd::tags::run(args),
	}
}
