#[cfg(test)]
mod tests {
    use crate::{
        analysis::{CompletionContext, CompletionItem, CompletionKind, CompletionOptions, complete, completion_context},
        ast::parse,
        token::Span,
    };

    fn context_at_end(src: &str) -> (CompletionContext, String) {
        let (sheet, _) = parse(src);
        let request = completion_context(&sheet, src, src.len());
        (request.context, request.prefix)
    }

    fn items_at_end(src: &str, options: CompletionOptions) -> Vec<CompletionItem> {
        let (sheet, _) = parse(src);
        complete(&sheet, src, src.len(), options)
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn property_context() {
        assert_eq!(context_at_end("a { col"), (CompletionContext::Property, "col".to_string()));
        assert_eq!(context_at_end("a { color: red; "), (CompletionContext::Property, String::new()));
        assert_eq!(context_at_end("@font-face { font-d"), (CompletionContext::Property, "font-d".to_string()));

        let items = items_at_end("a { col", CompletionOptions::default());
        let color = items.iter().find(|i| i.label == "color").unwrap();
        assert_eq!(color.kind, CompletionKind::Property);
        assert_eq!(color.insert_text, "color: ");
        assert_eq!(color.replace, Span::new(4, 7));
        assert!(items.iter().all(|i| i.label.starts_with("col")));
    }

    #[test]
    fn value_context() {
        let value = |p: &str| CompletionContext::Value { property: p.to_string() };
        assert_eq!(context_at_end("a { color: re"), (value("color"), "re".to_string()));
        assert_eq!(context_at_end("a { color:re"), (value("color"), "re".to_string()));
        assert_eq!(context_at_end("a { display: "), (value("display"), String::new()));
        assert_eq!(context_at_end("a { margin: 0 au"), (value("margin"), "0 au".to_string()));
        assert_eq!(context_at_end("a { font: 12px, seri"), (value("font"), "seri".to_string()));

        let items = items_at_end("a { color: re", CompletionOptions::default());
        let names = labels(&items);
        assert!(names.contains(&"red"));
        assert!(names.contains(&"rebeccapurple"));
        assert!(names.contains(&"revert"));

        let items = items_at_end("a { display: ", CompletionOptions::default());
        let names = labels(&items);
        assert!(names.contains(&"flex"));
        assert!(names.contains(&"inherit"));
        assert!(names.contains(&"calc()"));
        assert!(!names.contains(&"red"));
    }

    #[test]
    fn custom_properties_inside_var() {
        let src = ":root { --main: red; --gap: 1px; } a { color: var(--";
        let items = items_at_end(src, CompletionOptions::default());
        assert_eq!(labels(&items), vec!["--gap", "--main"]);
        assert!(items.iter().all(|i| i.kind == CompletionKind::Variable));
        assert_eq!(items[1].detail.as_deref(), Some("red"));
    }

    #[test]
    fn at_rule_and_pseudo_contexts() {
        assert_eq!(context_at_end("@me"), (CompletionContext::AtRule, "me".to_string()));
        assert_eq!(context_at_end("@"), (CompletionContext::AtRule, String::new()));
        assert_eq!(context_at_end("a:ho"), (CompletionContext::PseudoClass, "ho".to_string()));
        assert_eq!(context_at_end("a::be"), (CompletionContext::PseudoElement, "be".to_string()));
        assert_eq!(context_at_end(".a { &:ho"), (CompletionContext::PseudoClass, "ho".to_string()));
        assert_eq!(context_at_end("ul { li:ho"), (CompletionContext::PseudoClass, "ho".to_string()));

        let items = items_at_end("@me", CompletionOptions::default());
        let media = items.iter().find(|i| i.label == "@media").unwrap();
        assert_eq!(media.replace, Span::new(0, 3));
        assert_eq!(media.insert_text, "@media");

        let items = items_at_end("a:ho", CompletionOptions::default());
        assert!(labels(&items).contains(&":hover"));
        let items = items_at_end("a::be", CompletionOptions::default());
        assert_eq!(labels(&items), vec!["::before"]);
    }

    #[test]
    fn selector_and_top_level() {
        assert_eq!(context_at_end(""), (CompletionContext::TopLevel, String::new()));
        assert_eq!(context_at_end("a { color: red; }\n"), (CompletionContext::TopLevel, String::new()));
        assert_eq!(context_at_end("di"), (CompletionContext::Selector, "di".to_string()));

        let items = items_at_end("", CompletionOptions::default());
        let names = labels(&items);
        assert!(names.contains(&"div"));
        assert!(names.contains(&"@media"));

        let items = items_at_end("di", CompletionOptions::default());
        let names = labels(&items);
        assert!(names.contains(&"div"));
        assert!(names.contains(&"dialog"));
        assert!(!names.contains(&"@media"));
    }

    #[test]
    fn nothing_inside_comments() {
        assert_eq!(context_at_end("/* a { col").0, CompletionContext::None);
        assert!(items_at_end("a { /* col", CompletionOptions::default()).is_empty());
        assert_ne!(context_at_end("/* x */ a { col").0, CompletionContext::None);
    }

    #[test]
    fn deprecated_entries_need_opt_in() {
        let hidden = items_at_end("a { cli", CompletionOptions::default());
        assert!(!labels(&hidden).contains(&"clip"));

        let shown = items_at_end("a { cli", CompletionOptions { show_deprecated: true });
        let clip = shown.iter().find(|i| i.label == "clip").unwrap();
        assert!(clip.deprecated);
        assert!(shown.iter().filter(|i| i.label != "clip").all(|i| !i.deprecated));
    }
}
