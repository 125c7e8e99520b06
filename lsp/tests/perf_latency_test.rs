use cssls_lsp::analyzer::{CssAnalyzer, ParsedDocument};
use std::time::{Duration, Instant};
use tower_lsp::lsp_types::{FormattingOptions, Position};

fn assert_under(label: &str, dur: Duration, max: Duration) {
    eprintln!("{} took: {:?} (limit: {:?})", label, dur, max);
    assert!(dur <= max, "{} exceeded budget: {:?} > {:?}", label, dur, max);
}

fn large_stylesheet(rules: usize) -> String {
    let mut src = String::from(":root {\n  --brand: #336699;\n}\n");
    for i in 0..rules {
        src.push_str(&format!(
            ".item-{i} > a:hover {{\n  color: var(--brand);\n  margin: {i}px auto;\n  background: hsl({} 50% 50%);\n}}\n",
            i % 360
        ));
    }
    src
}

#[test]
fn test_diagnostics_latency_on_large_file() {
    let analyzer = CssAnalyzer::new();
    let src = large_stylesheet(2000);

    let start = Instant::now();
    let doc = ParsedDocument::parse(src);
    let diags = analyzer.diagnostics(&doc);
    let elapsed = start.elapsed();

    assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags.first());
    // Debug builds vary; keep threshold generous but meaningful
    assert_under("parse + diagnostics (2000 rules)", elapsed, Duration::from_secs(3));
}

#[test]
fn test_interactive_requests_latency() {
    let analyzer = CssAnalyzer::new();
    let doc = ParsedDocument::parse(large_stylesheet(1000));
    let position = Position::new(500, 10);

    let start = Instant::now();
    let _ = analyzer.completion(&doc, position);
    let _ = analyzer.hover(&doc, position, None);
    let _ = analyzer.document_colors(&doc, None);
    let _ = analyzer.document_symbols(&doc);
    let _ = analyzer.format(&doc, &FormattingOptions::default());
    assert_under("interactive requests (1000 rules)", start.elapsed(), Duration::from_secs(3));
}
