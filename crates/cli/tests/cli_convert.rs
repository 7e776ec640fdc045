//! Integration tests for the `wxmd convert` binary on saved pages.

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

const URL: &str = "https://mp.weixin.qq.com/s/fixture";

fn wxmd_binary() -> PathBuf {
	let mut path = std::env::current_exe().expect("current_exe should resolve");
	path.pop();
	path.pop();
	path.push("wxmd");
	path
}

fn fixture() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/article.html")
}

fn run_wxmd(args: &[&str]) -> (bool, String, String) {
	let output = Command::new(wxmd_binary()).args(args).env_remove("RUST_LOG").output().expect("Failed to execute wxmd");

	let stdout = String::from_utf8_lossy(&output.stdout).to_string();
	let stderr = String::from_utf8_lossy(&output.stderr).to_string();

	(output.status.success(), stdout, stderr)
}

#[test]
fn prints_markdown_for_saved_page() {
	let input = fixture();
	let (success, stdout, stderr) = run_wxmd(&["convert", URL, "--input", input.to_str().unwrap()]);

	assert!(success, "Command failed: {stderr}");
	assert!(stdout.starts_with("# 周末读书笔记\n"));
	assert!(stdout.contains("> source: [https://mp.weixin.qq.com/s/fixture](https://mp.weixin.qq.com/s/fixture)"));
	assert!(stdout.contains("- Point one"));
}

#[test]
fn writes_json_to_output_file() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("article.json");
	let input = fixture();
	let (success, stdout, stderr) = run_wxmd(&["convert", URL, "-i", input.to_str().unwrap(), "-f", "json", "-o", out.to_str().unwrap()]);

	assert!(success, "Command failed: {stderr}");
	assert!(stdout.is_empty());
	let json: Value = serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
	assert_eq!(json["title"], "周末读书笔记");
	assert_eq!(json["author"], "Ferris");
	assert!(json["content"].as_str().unwrap().starts_with("<div"));
}

#[test]
fn invalid_url_exits_non_zero() {
	let (success, _stdout, stderr) = run_wxmd(&["convert", "not-a-url"]);

	assert!(!success);
	assert!(stderr.contains("invalid url"), "stderr: {stderr}");
}
