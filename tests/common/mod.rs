// tests/common/mod.rs
//! Shared helpers for driving the binary.

use assert_cmd::Command;

/// The `prime_range` binary with logging silenced unless a test opts in.
pub fn prime_range() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prime_range"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Answers for the two prompts, one per line.
#[allow(dead_code)]
pub fn answers(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

/// Number of times `needle` occurs in captured process output.
#[allow(dead_code)]
pub fn occurrences(output: &[u8], needle: &str) -> usize {
    String::from_utf8_lossy(output).matches(needle).count()
}
