// tests/cli/smoke_tests.rs
use predicates::prelude::*;

use crate::common::{occurrences, prime_range};

#[test]
fn shows_help() {
    prime_range()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prime_range"))
        .stdout(predicate::str::contains("--start"));
}

#[test]
fn shows_version() {
    prime_range()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn flags_print_report_without_prompting() {
    prime_range()
        .args(["--start", "10", "--end", "30"])
        .assert()
        .success()
        .stdout(
            "The last prime numbers in the range [10, 30] are: 19, 23, 29\n\
             The number of prime numbers in this range is: 6\n",
        );
}

#[test]
fn flags_with_no_primes() {
    prime_range()
        .args(["--start", "14", "--end", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prime numbers found in the range [14, 16]"))
        .stdout(predicate::str::contains("The number of prime numbers in this range is: 0"));
}

#[test]
fn invalid_flags_fail() {
    prime_range()
        .args(["--start", "20", "--end", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("less than or equal"));

    prime_range()
        .args(["--start", "-2", "--end", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn invalid_flags_report_cause_once() {
    let assert = prime_range().args(["--start", "20", "--end", "10"]).assert().failure();
    let stderr = &assert.get_output().stderr;
    assert_eq!(occurrences(stderr, "less than or equal"), 1);
    assert_eq!(occurrences(stderr, "Invalid CLI value"), 1);
}

#[test]
fn unsievable_end_fails_cleanly() {
    for end in ["9223372036854775807", "1000000000000000000"] {
        prime_range()
            .args(["--start", "0", "--end", end])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("too large to sieve in memory"));
    }
}

#[test]
fn lone_start_flag_is_a_usage_error() {
    prime_range().args(["--start", "10"]).assert().failure().code(2);
}

#[test]
fn debug_logging_goes_to_stderr() {
    prime_range()
        .args(["--start", "0", "--end", "10", "--log-level", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[debug]").not())
        .stderr(predicate::str::contains("[debug]"));
}
