#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod cmd;

#[derive(Parser)]
#[command(name = "chunkobj", about = "Chunk container inspection and mesh extraction tools")]
struct Cli {
	/// Log verbosity on stderr (-v info, -vv debug).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print chunk statistics and tag histogram.
	Info(cmd::info::Args),
	/// Print the decoded chunk tree.
	Tree(cmd::tree::Args),
	/// Run the layout heuristics on every mesh chunk.
	Probe(cmd::probe::Args),
	/// Hex dump one chunk payload.
	Payload(cmd::payload::Args),
	/// Extract meshes as OBJ files.
	Extract(cmd::extract::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		_ => Level::DEBUG,
	};
	tracing_subscriber::fmt().with_max_level(level).with_target(false).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> chunkobj::scene::Result<()> {
	match command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Probe(args) => cmd::probe::run(args),
		Commands::Payload(args) => cmd::payload::run(args),
		Commands::Extract(args) => cmd::extract::run(args),
	}
}
