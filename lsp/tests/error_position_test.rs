use cssls_lsp::analyzer::{CssAnalyzer, ParsedDocument};
use tower_lsp::lsp_types::{DiagnosticSeverity, NumberOrString, Position};

fn syntax_errors(code: &str) -> Vec<tower_lsp::lsp_types::Diagnostic> {
    let analyzer = CssAnalyzer::new();
    analyzer
        .diagnostics(&ParsedDocument::parse(code))
        .into_iter()
        .filter(|d| d.code == Some(NumberOrString::String("syntax-error".to_string())))
        .collect()
}

#[test]
fn test_stray_closing_brace_position() {
    let code = "a { color: red; }\n}\nb { color: blue; }\n";
    let errors = syntax_errors(code);
    assert_eq!(errors.len(), 1);
    let diagnostic = &errors[0];
    assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
    assert_eq!(diagnostic.message, "unexpected '}'");
    assert_eq!(diagnostic.range.start, Position::new(1, 0));
    assert_eq!(diagnostic.range.end, Position::new(1, 1));
}

#[test]
fn test_errors_follow_lint_findings() {
    let analyzer = CssAnalyzer::new();
    let doc = ParsedDocument::parse("a { colo: red; }\n;\n");
    let diags = analyzer.diagnostics(&doc);
    let first_error = diags
        .iter()
        .position(|d| d.severity == Some(DiagnosticSeverity::ERROR))
        .expect("syntax error present");
    assert!(diags[..first_error]
        .iter()
        .all(|d| d.severity != Some(DiagnosticSeverity::ERROR)));
    assert!(diags[first_error..]
        .iter()
        .all(|d| d.severity == Some(DiagnosticSeverity::ERROR)));
}

#[test]
fn test_error_columns_after_wide_characters() {
    // Each 'é' is one UTF-16 unit but two bytes.
    let code = "/* éé */ }";
    let errors = syntax_errors(code);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].range.start, Position::new(0, 9));
}

#[test]
fn test_unclosed_block_still_analyzed() {
    let analyzer = CssAnalyzer::new();
    let doc = ParsedDocument::parse("a {\n  colo: red;\n");
    let diags = analyzer.diagnostics(&doc);
    assert!(diags.iter().any(|d| d.message == "unknown property 'colo'"));
}
