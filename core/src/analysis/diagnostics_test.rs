#[cfg(test)]
mod tests {
    use crate::{
        analysis::{
            DUPLICATE_PROPERTY, EMPTY_RULESET, SYNTAX_ERROR, Severity, UNKNOWN_AT_RULE, UNKNOWN_PROPERTY, analyze,
            edit_distance, lint, quick_fixes, suggest_properties,
        },
        ast::parse,
        token::{Position, apply_edits},
    };

    #[test]
    fn unknown_property() {
        let src = "body { colo: red; }";
        let (sheet, errors) = parse(src);
        let diags = analyze(&sheet, src, &errors);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unknown property 'colo'");
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].code, UNKNOWN_PROPERTY);
        assert_eq!(diags[0].span.text(src), "colo");
        assert_eq!(diags[0].range.start, Position::new(0, 7));
    }

    #[test]
    fn vendor_prefixes_and_custom_properties_are_known() {
        let src = "a { -webkit-transition: none; -moz-appearance: none; --anything: 1px; --anything: 2px; }";
        let (sheet, _) = parse(src);
        assert!(lint(&sheet, src).is_empty());
    }

    #[test]
    fn duplicate_property_is_case_insensitive() {
        let src = "a { color: red; margin: 0; COLOR: blue; }";
        let (sheet, _) = parse(src);
        let diags = lint(&sheet, src);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, DUPLICATE_PROPERTY);
        assert_eq!(diags[0].message, "duplicate property 'COLOR'");
        assert_eq!(diags[0].span.text(src), "COLOR: blue;");
    }

    #[test]
    fn duplicates_are_scoped_to_their_ruleset() {
        let src = "a { color: red; } b { color: red; } .c { color: red; .d { color: red; } }";
        let (sheet, _) = parse(src);
        assert!(lint(&sheet, src).is_empty());
    }

    #[test]
    fn unknown_at_rule_and_recursion_into_blocks() {
        let src = "@foo bar;\n@media screen { a { colr: red; } }\n@font-face { font-family: x; src: url(a.woff); }";
        let (sheet, _) = parse(src);
        let diags = lint(&sheet, src);
        let codes: Vec<_> = diags.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![UNKNOWN_AT_RULE, UNKNOWN_PROPERTY]);
        assert_eq!(diags[0].message, "unknown at-rule '@foo'");
        assert_eq!(diags[0].range.start, Position::new(0, 0));
        assert_eq!(diags[1].range.start, Position::new(1, 20));
    }

    #[test]
    fn empty_ruleset_is_a_hint() {
        let src = "a {}\nb { /* nothing */ }\nc { d { color: red; } }";
        let (sheet, _) = parse(src);
        let diags = lint(&sheet, src);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.code == EMPTY_RULESET && d.severity == Severity::Hint));
        assert_eq!(diags[0].message, "empty ruleset");
    }

    #[test]
    fn parse_errors_come_last_as_errors() {
        let src = "a { colr: red; }\n}";
        let (sheet, errors) = parse(src);
        let diags = analyze(&sheet, src, &errors);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].code, UNKNOWN_PROPERTY);
        assert_eq!(diags[1].code, SYNTAX_ERROR);
        assert_eq!(diags[1].severity, Severity::Error);
        assert_eq!(diags[1].range.start, Position::new(1, 0));
    }

    #[test]
    fn severity_ordinals() {
        assert_eq!(Severity::Error as u8, 1);
        assert_eq!(Severity::Warning as u8, 2);
        assert_eq!(Severity::Information as u8, 3);
        assert_eq!(Severity::Hint as u8, 4);
        assert!(Severity::Error < Severity::Hint);
    }

    #[test]
    fn levenshtein() {
        assert_eq!(edit_distance("colo", "color"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn spelling_suggestions() {
        assert_eq!(suggest_properties("colo").first(), Some(&"color"));
        assert_eq!(suggest_properties("MARGN").first(), Some(&"margin"));
        assert!(suggest_properties("zzzzzzzzzz").is_empty());
        assert!(suggest_properties("x").len() <= 3);
    }

    #[test]
    fn quick_fix_replaces_unknown_property() {
        let src = "body { colo: red; }";
        let (sheet, _) = parse(src);
        let fixes = quick_fixes(&sheet, src, src.find("colo").unwrap() + 1);
        assert!(!fixes.is_empty());
        assert_eq!(fixes[0].title, "Did you mean 'color'?");
        assert_eq!(fixes[0].code, UNKNOWN_PROPERTY);
        assert_eq!(apply_edits(src, &[fixes[0].edit.clone()]), "body { color: red; }");

        assert!(quick_fixes(&sheet, src, 0).is_empty());
    }

    #[test]
    fn quick_fix_removes_duplicate_line() {
        let src = "a {\n  color: red;\n  color: blue;\n}\n";
        let (sheet, _) = parse(src);
        let first = quick_fixes(&sheet, src, src.find("color").unwrap());
        assert!(first.is_empty());

        let fixes = quick_fixes(&sheet, src, src.rfind("color").unwrap());
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].title, "Remove duplicate property 'color'");
        assert_eq!(apply_edits(src, &[fixes[0].edit.clone()]), "a {\n  color: red;\n}\n");

        let inline = "a { color: red; color: blue; }";
        let (sheet, _) = parse(inline);
        let fixes = quick_fixes(&sheet, inline, inline.rfind("color").unwrap());
        assert_eq!(apply_edits(inline, &[fixes[0].edit.clone()]), "a { color: red; }");
    }
}
