use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

pub(crate) use jsonbind_testkit::fixture_path;

static JSONBIND_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_jsonbind(args: &[&str]) -> Output {
	Command::new(jsonbind_bin()).args(args).output().expect("jsonbind command executes")
}

pub(crate) fn run_jsonbind_json(args: &[&str]) -> serde_json::Value {
	let output = run_jsonbind(args);
	assert!(
		output.status.success(),
		"jsonbind command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn jsonbind_bin() -> &'static PathBuf {
	JSONBIND_BIN.get_or_init(resolve_jsonbind_bin)
}

fn resolve_jsonbind_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_jsonbind") {
		return PathBuf::from(path);
	}

	let target_dir = jsonbind_testkit::target_dir();
	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "jsonbind.exe" } else { "jsonbind" });

	let status = Command::new("cargo")
		.current_dir(jsonbind_testkit::workspace_root())
		.args(["build", "--quiet", "--bin", "jsonbind"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build jsonbind binary at {}", bin.display());

	bin
}
