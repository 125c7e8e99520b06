#[cfg(test)]
mod tests {
    use crate::{
        ast::parse,
        outline::{FoldingKind, FoldingRange, SymbolKind, document_links, document_symbols, folding_ranges, selection_ranges},
        token::Span,
    };

    #[test]
    fn symbols_nest_like_the_tree() {
        let src = ":root {\n  --brand: red;\n  color: blue;\n}\n@media screen and (max-width: 600px) {\n  .a>.b, p { --x: 1; }\n}\n";
        let (sheet, _) = parse(src);
        let symbols = document_symbols(&sheet, src);
        assert_eq!(symbols.len(), 2);

        assert_eq!(symbols[0].name, ":root");
        assert_eq!(symbols[0].kind, SymbolKind::Ruleset);
        assert_eq!(symbols[0].selection.text(src), ":root");
        assert_eq!(symbols[0].children.len(), 1);
        assert_eq!(symbols[0].children[0].name, "--brand");
        assert_eq!(symbols[0].children[0].kind, SymbolKind::Variable);

        let media = &symbols[1];
        assert_eq!(media.name, "@media screen and (max-width: 600px)");
        assert_eq!(media.kind, SymbolKind::AtRule);
        assert_eq!(media.children[0].name, ".a > .b, p");
        assert_eq!(media.children[0].children[0].name, "--x");
    }

    #[test]
    fn folding_blocks_comments_and_regions() {
        let src = "a {\n  color: red;\n}\n/*\n multi\n*/\n/* #region colors */\nb {\n  color: blue;\n}\n/* #endregion */\nc { color: red; }\n";
        let (sheet, _) = parse(src);
        let ranges = folding_ranges(&sheet, src);
        let range = |start_line, end_line, kind| FoldingRange {
            start_line,
            end_line,
            kind,
        };
        assert_eq!(
            ranges,
            vec![
                range(0, 1, None),
                range(3, 5, Some(FoldingKind::Comment)),
                range(6, 10, Some(FoldingKind::Region)),
                range(7, 8, None),
            ]
        );
    }

    #[test]
    fn unmatched_region_markers_are_ignored() {
        let src = "/* #endregion */\n/* #region open */\na {}\n";
        let (sheet, _) = parse(src);
        assert!(folding_ranges(&sheet, src).is_empty());
    }

    #[test]
    fn selection_chain_grows_outwards() {
        let src = "a { color: red; }";
        let (sheet, _) = parse(src);
        let value = src.find("red").unwrap() + 1;
        let result = selection_ranges(&sheet, src, &[value, 0]);
        assert_eq!(result.innermost.len(), 2);

        let chain: Vec<Span> = result.chain(result.innermost[0]).collect();
        assert_eq!(
            chain,
            vec![
                Span::new(11, 14),
                Span::new(4, 15),
                Span::new(3, 16),
                Span::new(2, 17),
                Span::new(0, 17),
            ]
        );
        for pair in chain.windows(2) {
            assert!(pair[1].covers(pair[0]));
        }

        let selector: Vec<Span> = result.chain(result.innermost[1]).collect();
        assert_eq!(selector, vec![Span::new(0, 1), Span::new(0, 17)]);
    }

    #[test]
    fn links_from_urls_and_imports() {
        let src = "@import \"base.css\";\n@import url(theme.css);\na { background: url( 'img/x.png' ); mask: url(data:image/png;base64,AAA); b: url(  spaced.svg  ); }";
        let (sheet, _) = parse(src);
        let links = document_links(&sheet, src);
        let targets: Vec<&str> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["base.css", "theme.css", "img/x.png", "spaced.svg"]);
        for link in &links {
            assert_eq!(link.span.text(src), link.target);
        }
    }
}
