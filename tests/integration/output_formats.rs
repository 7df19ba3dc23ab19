// tests/integration/output_formats.rs
use prime_range::options::OutputFormat;
use prime_range::presentation::ReportWriter;
use prime_range::sources::FlagRange;
use prime_range_usecase::ReportPrimeRange;
use serde_json::Value;

fn render(start: i64, end: i64, format: OutputFormat) -> String {
    let mut source = FlagRange::new(start, end);
    let mut sink = ReportWriter::new(Vec::new(), format);
    ReportPrimeRange::new(&mut source, &mut sink).run().expect("run succeeds");
    String::from_utf8(sink.into_inner()).expect("utf8")
}

#[test]
fn json_report_for_populated_range() {
    let value: Value = serde_json::from_str(&render(100, 200, OutputFormat::Json)).expect("json");
    assert_eq!(value["start"], 100);
    assert_eq!(value["end"], 200);
    assert_eq!(value["total_count"], 21);
    assert_eq!(value["last_three_primes"], serde_json::json!([193, 197, 199]));
}

#[test]
fn json_report_for_empty_range() {
    let value: Value = serde_json::from_str(&render(24, 28, OutputFormat::Json)).expect("json");
    assert_eq!(value["total_count"], 0);
    assert_eq!(value["last_three_primes"], serde_json::json!([]));
}

#[test]
fn text_report_is_two_lines() {
    let text = render(2, 2, OutputFormat::Text);
    assert_eq!(text.lines().count(), 2);
    assert_eq!(text.lines().next(), Some("The last prime numbers in the range [2, 2] are: 2"));
}
