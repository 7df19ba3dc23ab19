// tests/integration/end_to_end.rs
use std::io::Cursor;

use prime_range::options::OutputFormat;
use prime_range::presentation::ReportWriter;
use prime_range::sources::{FlagRange, InteractivePrompt};
use prime_range_shared_kernel::PrimeCount;
use prime_range_usecase::ReportPrimeRange;

fn run_interactive(input: &str) -> (String, String) {
    let mut source = InteractivePrompt::new(Cursor::new(input.to_string()), Vec::new());
    let mut sink = ReportWriter::new(Vec::new(), OutputFormat::Text);
    ReportPrimeRange::new(&mut source, &mut sink).run().expect("run succeeds");
    let prompts = String::from_utf8(source.into_output()).expect("utf8");
    let report = String::from_utf8(sink.into_inner()).expect("utf8");
    (prompts, report)
}

#[test]
fn interactive_session_renders_report() {
    let (prompts, report) = run_interactive("10\n30\n");
    assert!(prompts.starts_with("Please enter the start of the range"));
    assert_eq!(
        report,
        "The last prime numbers in the range [10, 30] are: 19, 23, 29\n\
         The number of prime numbers in this range is: 6\n"
    );
}

#[test]
fn retries_are_invisible_in_the_report() {
    let (prompts, report) = run_interactive("x\n30\n10\n10\n30\n");
    assert_eq!(prompts.matches("Error:").count(), 2);
    assert!(report.contains("[10, 30]"));
}

#[test]
fn fewer_than_three_primes() {
    let mut source = FlagRange::new(0, 4);
    let mut sink = ReportWriter::new(Vec::new(), OutputFormat::Text);
    let report = ReportPrimeRange::new(&mut source, &mut sink).run().expect("run succeeds");
    assert_eq!(report.last_three_primes, vec![2, 3]);
    assert_eq!(report.total_count, PrimeCount::from(2));
    let text = String::from_utf8(sink.into_inner()).expect("utf8");
    assert!(text.contains("are: 2, 3\n"));
}

#[test]
fn invalid_flags_emit_nothing() {
    let mut source = FlagRange::new(20, 10);
    let mut sink = ReportWriter::new(Vec::new(), OutputFormat::Text);
    assert!(ReportPrimeRange::new(&mut source, &mut sink).run().is_err());
    assert!(sink.into_inner().is_empty());
}
