#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        ast::parse,
        token::apply_edits,
        vars::{
            Access, ChainedResolver, LocalVariables, VariableResolver, find_definition, find_highlights,
            find_references, normalize_new_name, prepare_rename, rename, symbol_at,
        },
    };

    const SRC: &str = ":root { --color: red; --gap: 4px; }\n.foo { color: var(--color); border-color: var( --color , blue); }\n.bar { outline-color: var(--color); }";

    #[test]
    fn symbol_on_declaration_and_reference() {
        let (sheet, _) = parse(SRC);
        let decl = SRC.find("--color").unwrap();
        let sym = symbol_at(&sheet, decl + 2).unwrap();
        assert_eq!(sym.name, "--color");
        assert_eq!(sym.access, Access::Write);

        // On the `var` keyword, inside the parentheses and on the name.
        let var_kw = SRC.find("var(--color)").unwrap();
        for offset in [var_kw, var_kw + 4, var_kw + 6, var_kw + "var(--color)".len() - 1] {
            let sym = symbol_at(&sheet, offset).unwrap();
            assert_eq!(sym.name, "--color");
            assert_eq!(sym.access, Access::Read);
        }

        assert!(symbol_at(&sheet, SRC.find("red").unwrap() + 1).is_none());
    }

    #[test]
    fn references_count_declaration_plus_usages() {
        let (sheet, _) = parse(SRC);
        let offset = SRC.find("var(--color)").unwrap() + 5;
        let refs = find_references(&sheet, offset);
        assert_eq!(refs.len(), 4);
        assert_eq!(refs[0].text(SRC), "--color");
        assert_eq!(refs[1].text(SRC), "var(--color)");
        assert_eq!(refs[2].text(SRC), "var( --color , blue)");

        let defs = find_definition(&sheet, offset);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].text(SRC), "--color");

        let highlights = find_highlights(&sheet, offset);
        assert_eq!(highlights.iter().filter(|(_, a)| *a == Access::Write).count(), 1);
        assert_eq!(highlights.iter().filter(|(_, a)| *a == Access::Read).count(), 3);
    }

    #[test]
    fn nested_fallback_prefers_inner_reference() {
        let src = "a { color: var(--a, var(--b)); }";
        let (sheet, _) = parse(src);
        let inner = src.find("--b").unwrap();
        assert_eq!(symbol_at(&sheet, inner).unwrap().name, "--b");
        assert_eq!(symbol_at(&sheet, src.find("--a").unwrap()).unwrap().name, "--a");
    }

    #[test]
    fn rename_prefixes_new_name() {
        let src = ":root { --color: red; } .foo { color: var(--color); }";
        let (sheet, _) = parse(src);
        let offset = src.find("--color").unwrap();
        let edits = rename(&sheet, offset, "primary").unwrap();
        assert_eq!(edits.len(), 2);
        assert!(edits.iter().all(|e| e.new_text == "--primary"));
        assert_eq!(
            apply_edits(src, &edits),
            ":root { --primary: red; } .foo { color: var(--primary); }"
        );
    }

    #[test]
    fn rename_rejects_invalid_names_and_non_symbols() {
        let (sheet, _) = parse(SRC);
        let offset = SRC.find("--gap").unwrap();
        assert!(rename(&sheet, offset, "has space").is_none());
        assert!(rename(&sheet, offset, "--").is_none());
        assert!(rename(&sheet, 0, "x").is_none());
        assert_eq!(normalize_new_name("--ok-name"), Some("--ok-name".to_string()));

        let (span, name) = prepare_rename(&sheet, offset).unwrap();
        assert_eq!(name, "--gap");
        assert_eq!(span.text(SRC), "--gap");
    }

    #[test]
    fn local_and_chained_resolvers() {
        let (sheet, _) = parse(SRC);
        let local = LocalVariables::from_sheet(&sheet, SRC);
        assert_eq!(local.len(), 2);
        assert_eq!(local.resolve("--gap").as_deref(), Some("4px"));

        let mut workspace = HashMap::new();
        workspace.insert("--brand".to_string(), "#336699".to_string());
        workspace.insert("--gap".to_string(), "8px".to_string());
        let chained = ChainedResolver {
            first: &local,
            fallback: Some(&workspace),
        };
        assert_eq!(chained.resolve("--gap").as_deref(), Some("4px"));
        assert_eq!(chained.resolve("--brand").as_deref(), Some("#336699"));
        assert_eq!(chained.resolve("--missing"), None);
    }
}
