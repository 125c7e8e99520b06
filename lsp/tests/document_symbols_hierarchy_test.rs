use cssls_lsp::analyzer::{CssAnalyzer, ParsedDocument};
use tower_lsp::lsp_types::{DocumentSymbol, Position, SymbolKind};

fn get_symbol<'a>(symbols: &'a [DocumentSymbol], name: &str) -> Option<&'a DocumentSymbol> {
    symbols.iter().find(|s| s.name == name)
}

fn get_child<'a>(parent: &'a DocumentSymbol, name: &str) -> Option<&'a DocumentSymbol> {
    parent
        .children
        .as_ref()
        .and_then(|kids| kids.iter().find(|s| s.name == name))
}

fn list_child_names(parent: &DocumentSymbol) -> Vec<String> {
    parent
        .children
        .as_ref()
        .map(|kids| kids.iter().map(|s| s.name.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_rulesets_at_rules_and_variables_nest() {
    let analyzer = CssAnalyzer::new();
    let code = r#":root {
  --brand: #336699;
  --gap: 8px;
}

@media (max-width: 600px) {
  .card,
  .card>.title {
    color: var(--brand);
    --inner: 1;
  }

  @supports (display: grid) {
    .grid { display: grid; }
  }
}

.nav {
  &:hover { color: red; }
}
"#;
    let doc = ParsedDocument::parse(code);
    let symbols = analyzer.document_symbols(&doc);

    let root = get_symbol(&symbols, ":root").expect(":root symbol");
    assert_eq!(root.kind, SymbolKind::CLASS);
    assert_eq!(list_child_names(root), vec!["--brand", "--gap"]);

    let media = get_symbol(&symbols, "@media (max-width: 600px)").expect("media symbol");
    assert_eq!(media.kind, SymbolKind::MODULE);
    assert_eq!(media.selection_range.start, Position::new(5, 0));
    assert_eq!(list_child_names(media), vec![".card, .card > .title", "@supports (display: grid)"]);

    let card = get_child(media, ".card, .card > .title").unwrap();
    let inner = get_child(card, "--inner").expect("custom property inside nested rule");
    assert_eq!(inner.kind, SymbolKind::VARIABLE);
    assert_eq!(inner.range.start.line, 9);

    let supports = get_child(media, "@supports (display: grid)").unwrap();
    assert_eq!(list_child_names(supports), vec![".grid"]);

    let nav = get_symbol(&symbols, ".nav").expect("nav symbol");
    assert_eq!(list_child_names(nav).len(), 1);
}

#[test]
fn test_symbol_ranges_contain_selection() {
    let analyzer = CssAnalyzer::new();
    let doc = ParsedDocument::parse("a { --x: 1; }\n@font-face { font-family: x; }\n");
    for symbol in analyzer.document_symbols(&doc) {
        assert!(symbol.range.start <= symbol.selection_range.start);
        assert!(symbol.selection_range.end <= symbol.range.end);
    }
}
