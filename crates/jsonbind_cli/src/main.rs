#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jsonbind::bind::Target;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "jsonbind", about = "Inspect JSON trees and coercion rules")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a document's tree with node kinds.
	Tree {
		path: PathBuf,
		/// Dotted path selecting the subtree to print.
		#[arg(long)]
		at: Option<String>,
		#[arg(long)]
		json: bool,
	},
	/// Coerce one node to a primitive type.
	Coerce {
		path: PathBuf,
		#[arg(long, value_enum)]
		to: TargetArg,
		/// Dotted path selecting the node to coerce.
		#[arg(long)]
		at: Option<String>,
		#[arg(long)]
		json: bool,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
	String,
	Bool,
	Int,
	Uint,
	Float,
}

impl From<TargetArg> for Target {
	fn from(value: TargetArg) -> Self {
		match value {
			TargetArg::String => Target::String,
			TargetArg::Bool => Target::Bool,
			TargetArg::Int => Target::Int,
			TargetArg::Uint => Target::Uint,
			TargetArg::Float => Target::Float,
		}
	}
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> jsonbind::bind::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Tree { path, at, json } => cmd::tree::run(path, at, json),
		Commands::Coerce { path, to, at, json } => cmd::coerce::run(path, to.into(), at, json),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
