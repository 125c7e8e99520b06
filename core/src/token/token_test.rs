#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind, matching_close, scan, split_dimension};

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn assert_covers(src: &str) {
        let tokens = scan(src);
        let mut at = 0;
        for tok in &tokens {
            assert_eq!(tok.start, at, "gap before {tok:?} in {src:?}");
            assert!(tok.end >= tok.start);
            if tok.kind != TokenKind::Eof {
                assert!(tok.end > tok.start, "empty token {tok:?} in {src:?}");
            }
            at = tok.end;
        }
        assert_eq!(at, src.len());
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn basic() {
        let tokens = scan(".foo { color: red; }");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Delim,
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::LBrace,
                TokenKind::Whitespace,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Whitespace,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::Whitespace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].value, "foo");
    }

    #[test]
    fn coverage_holds_for_odd_inputs() {
        for src in [
            "",
            "a{}",
            "/* unterminated",
            "\"unterminated\nnext",
            "url( a b ) url(x.png) url(\"q\")",
            "@media (min-width:10px){a{b:c}}",
            "<!-- --> --x -->",
            "#fff #1 # @ @1 \\41 bc",
            "é { content: \"😀\"; }",
            "1e3 .5em -.5% +2 - -- 10px!important",
        ] {
            assert_covers(src);
        }
    }

    #[test]
    fn numbers() {
        let tokens = scan("10px 50% -1.5 .5em +3");
        let numeric: Vec<_> = tokens.iter().filter(|t| !t.is_trivia() && t.kind != TokenKind::Eof).collect();
        assert_eq!(numeric[0].kind, TokenKind::Dimension);
        assert_eq!(numeric[0].value, "10px");
        assert_eq!(numeric[0].unit().as_deref(), Some("px"));
        assert_eq!(numeric[0].numeric_value(), Some(10.0));
        assert_eq!(numeric[1].kind, TokenKind::Percentage);
        assert_eq!(numeric[1].value, "50");
        assert_eq!(numeric[2].kind, TokenKind::Number);
        assert_eq!(numeric[2].numeric_value(), Some(-1.5));
        assert_eq!(numeric[3].value, ".5em");
        assert_eq!(numeric[4].numeric_value(), Some(3.0));
    }

    #[test]
    fn split_dimension_parts() {
        assert_eq!(split_dimension("-1.5em"), ("-1.5", "em"));
        assert_eq!(split_dimension("10PX"), ("10", "PX"));
    }

    #[test]
    fn strings_and_bad_strings() {
        let tokens = scan("'a\\'b' \"x\ny\"");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, "a'b");
        let bad = tokens.iter().find(|t| t.kind == TokenKind::BadString).unwrap();
        assert_eq!(bad.value, "x");
        // The line break is not part of the bad string.
        assert_eq!(bad.end, 9);
    }

    #[test]
    fn unterminated_comment_runs_to_end() {
        let src = "a /* open";
        let tokens = scan(src);
        let comment = &tokens[2];
        assert_eq!(comment.kind, TokenKind::Comment);
        assert_eq!(comment.end, src.len());
        assert_eq!(comment.value, " open");
    }

    #[test]
    fn urls() {
        let tokens = scan("url(img.png) URL( spaced.png ) url(\"quoted\") url(a b)");
        let sig: Vec<_> = tokens.iter().filter(|t| t.kind != TokenKind::Whitespace).collect();
        assert_eq!(sig[0].kind, TokenKind::Url);
        assert_eq!(sig[0].value, "img.png");
        assert_eq!(sig[1].kind, TokenKind::Url);
        assert_eq!(sig[1].value, "spaced.png");
        assert_eq!(sig[2].kind, TokenKind::Function);
        assert_eq!(sig[2].value, "url");
        assert_eq!(sig[3].kind, TokenKind::String);
        assert_eq!(sig[4].kind, TokenKind::RParen);
        assert_eq!(sig[5].kind, TokenKind::BadUrl);
        assert_eq!(sig[5].value, "url(a b)");
    }

    #[test]
    fn cdo_cdc_and_custom_idents() {
        let tokens = scan("<!-- --x -->");
        assert_eq!(tokens[0].kind, TokenKind::Cdo);
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[2].value, "--x");
        assert_eq!(tokens[4].kind, TokenKind::Cdc);
    }

    #[test]
    fn hash_at_keyword_and_function() {
        let tokens = scan("#a1b2 @media rgb(");
        assert_eq!(tokens[0].kind, TokenKind::Hash);
        assert_eq!(tokens[0].value, "a1b2");
        assert_eq!(tokens[2].kind, TokenKind::AtKeyword);
        assert_eq!(tokens[2].value, "media");
        assert_eq!(tokens[4].kind, TokenKind::Function);
        assert!(tokens[4].is_function("RGB"));
    }

    #[test]
    fn escapes_in_names() {
        let tokens = scan("\\41 bc");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].value, "Abc");
    }

    #[test]
    fn matching_close_tracks_depth() {
        let tokens = scan("rgb(a (b) c) d");
        let close = matching_close(&tokens, 0);
        assert_eq!(tokens[close].kind, TokenKind::RParen);
        assert_eq!(tokens[close].end, 12);

        let tokens = scan("calc(1 + (2");
        let close = matching_close(&tokens, 0);
        assert_eq!(tokens[close + 1].kind, TokenKind::Eof);
    }
}
