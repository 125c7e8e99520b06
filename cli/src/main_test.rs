#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::commands::{color_entries, fails_check, render_colors, render_diagnostic};
    use crate::*;
    use cssls_core::analysis::analyze;
    use cssls_core::ast::parse;

    #[test]
    fn test_cli_args_check_requires_files() {
        assert!(CliArgs::try_parse_from(["cssls", "check"]).is_err());
        let args = CliArgs::try_parse_from(["cssls", "check", "--deny-warnings", "a.css", "b.css"]).expect("should parse");
        match args.command {
            Commands::Check { deny_warnings, files } => {
                assert!(deny_warnings);
                assert_eq!(files, vec![PathBuf::from("a.css"), PathBuf::from("b.css")]);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_args_format_defaults_and_conflicts() {
        let args = CliArgs::try_parse_from(["cssls", "format", "a.css"]).expect("should parse");
        match args.command {
            Commands::Format {
                mode,
                tab_size,
                use_tabs,
                print_width,
                write,
                check,
                ..
            } => {
                assert_eq!(mode, FormatMode::Expanded);
                assert_eq!(tab_size, 2);
                assert!(!use_tabs);
                assert_eq!(print_width, 80);
                assert!(!write && !check);
            }
            other => panic!("expected format command, got {other:?}"),
        }

        let args = CliArgs::try_parse_from(["cssls", "format", "--mode", "compact", "a.css"]).expect("should parse");
        assert!(matches!(args.command, Commands::Format { mode: FormatMode::Compact, .. }));

        assert!(CliArgs::try_parse_from(["cssls", "format", "--write", "--check", "a.css"]).is_err());
        assert!(CliArgs::try_parse_from(["cssls", "format", "--mode", "pretty", "a.css"]).is_err());
        assert!(CliArgs::try_parse_from(["cssls", "format", "--tab-size", "0", "a.css"]).is_err());
    }

    #[test]
    fn test_render_diagnostic_is_one_based() {
        let src = "body {\n  colo: red;\n}\n";
        let (sheet, errors) = parse(src);
        let diagnostics = analyze(&sheet, src, &errors);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            render_diagnostic(Path::new("site.css"), &diagnostics[0]),
            "site.css:2:3: warning: unknown property 'colo'"
        );
    }

    #[test]
    fn test_fails_check_by_severity() {
        let src = "a { colo: red; }";
        let (sheet, errors) = parse(src);
        let warnings = analyze(&sheet, src, &errors);
        assert!(!fails_check(&warnings, false));
        assert!(fails_check(&warnings, true));

        let src = "a { color: red; } }";
        let (sheet, errors) = parse(src);
        let with_error = analyze(&sheet, src, &errors);
        assert!(fails_check(&with_error, false));
        assert!(!fails_check(&[], true));
    }

    #[test]
    fn test_color_entries_resolve_local_variables() {
        let src = ":root { --brand: #ff0000; }\na { color: var(--brand); }\n";
        let entries = color_entries(src);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].span.text(src), "var(--brand)");
        assert_eq!(entries[1].presentations[0], "#ff0000");

        let text = render_colors(src, &entries);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1:18\t#ff0000\t#ff0000\trgb("));
        assert!(lines[1].starts_with("2:12\tvar(--brand)\t#ff0000"));
    }
}
