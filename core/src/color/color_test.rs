#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        ast::parse,
        color::{
            CalcScope, Color, ColorScanner, ColorSpace, color_code_actions, evaluate_calc, find_colors, presentations,
        },
        token::scan,
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    fn assert_color(c: &Color, r: f64, g: f64, b: f64, a: f64) {
        assert!(
            approx(c.red, r) && approx(c.green, g) && approx(c.blue, b) && approx(c.alpha, a),
            "got {c:?}, want ({r}, {g}, {b}, {a})"
        );
    }

    fn one_color(value: &str) -> Option<Color> {
        let tokens = scan(value);
        ColorScanner::new(None).color_at(&tokens, 0, 0).map(|m| m.color)
    }

    #[test]
    fn hex() {
        assert_eq!(Color::from_hex("fff"), Some(Color::new(1.0, 1.0, 1.0, 1.0)));
        assert_eq!(Color::from_hex("000"), Some(Color::new(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(Color::from_hex("00ff0080"), Some(Color::new(0.0, 1.0, 0.0, 128.0 / 255.0)));
        assert_color(&Color::from_hex("f008").unwrap(), 1.0, 0.0, 0.0, 0.533);
        assert_eq!(Color::from_hex("12345"), None);
        assert_eq!(Color::from_hex("xyz"), None);
        assert_eq!(Color::from_hex("ggg"), None);
    }

    #[test]
    fn named_colors_skip_currentcolor() {
        assert_color(&one_color("rebeccapurple").unwrap(), 0.4, 0.2, 0.6, 1.0);
        assert_color(&one_color("Transparent").unwrap(), 0.0, 0.0, 0.0, 0.0);
        assert!(one_color("currentcolor").is_none());
        assert!(one_color("solid").is_none());
    }

    #[test]
    fn rgb_function() {
        let src = ".foo { color: rgb(255, 128, 0); }";
        let (sheet, _) = parse(src);
        let colors = find_colors(&sheet, None);
        assert_eq!(colors.len(), 1);
        assert_color(&colors[0].color, 1.0, 0.502, 0.0, 1.0);
        assert_eq!(colors[0].span.text(src), "rgb(255, 128, 0)");
    }

    #[test]
    fn rgb_alpha_forms() {
        assert_color(&one_color("rgb(100% 0% 0% / 50%)").unwrap(), 1.0, 0.0, 0.0, 0.5);
        assert_color(&one_color("rgba(0, 0, 255, 0.25)").unwrap(), 0.0, 0.0, 1.0, 0.25);
        // Without a slash an alpha above 1 is read on the 0-255 scale.
        assert_color(&one_color("rgba(0, 0, 0, 51)").unwrap(), 0.0, 0.0, 0.0, 0.2);
        assert_color(&one_color("rgb(0 0 0 / 1)").unwrap(), 0.0, 0.0, 0.0, 1.0);
        assert!(one_color("rgb(1, 2)").is_none());
        assert!(one_color("rgb(1, 2, 3, 4, 5)").is_none());
        assert!(one_color("rgb(a, b, c)").is_none());
    }

    #[test]
    fn hsl_and_hwb() {
        assert_color(&one_color("hsl(120, 100%, 50%)").unwrap(), 0.0, 1.0, 0.0, 1.0);
        assert_color(&one_color("hsl(-120deg 100% 50%)").unwrap(), 0.0, 0.0, 1.0, 1.0);
        assert_color(&one_color("hsl(0.5turn, 1, 0.5)").unwrap(), 0.0, 1.0, 1.0, 1.0);
        assert_color(&one_color("hsla(0, 0%, 100%, 0.5)").unwrap(), 1.0, 1.0, 1.0, 0.5);
        assert_color(&one_color("hwb(0 0% 0%)").unwrap(), 1.0, 0.0, 0.0, 1.0);
        // Whiteness and blackness past 100% in total normalize to gray.
        assert_color(&one_color("hwb(0 80% 80%)").unwrap(), 0.5, 0.5, 0.5, 1.0);
    }

    #[test]
    fn lab_family() {
        assert_color(&one_color("lab(100 0 0)").unwrap(), 1.0, 1.0, 1.0, 1.0);
        assert_color(&one_color("lab(0 0 0)").unwrap(), 0.0, 0.0, 0.0, 1.0);
        assert_color(&one_color("lab(53.24 80.09 67.2)").unwrap(), 1.0, 0.0, 0.0, 1.0);
        assert_color(&one_color("lch(53.24 104.55 40)").unwrap(), 1.0, 0.0, 0.0, 1.0);
        assert_color(&one_color("oklab(1 0 0)").unwrap(), 1.0, 1.0, 1.0, 1.0);
        assert_color(&one_color("oklab(0.628 0.2249 0.1258)").unwrap(), 1.0, 0.0, 0.0, 1.0);
        assert_color(&one_color("oklch(0.628 0.2577 29.23 / 0.5)").unwrap(), 1.0, 0.0, 0.0, 0.5);
        assert_color(&one_color("oklch(100% 0 0)").unwrap(), 1.0, 1.0, 1.0, 1.0);
    }

    #[test]
    fn space_round_trips() {
        let color = Color::new(0.2, 0.4, 0.6, 1.0);
        for space in [
            ColorSpace::Rgb,
            ColorSpace::Hsl,
            ColorSpace::Hwb,
            ColorSpace::Lab,
            ColorSpace::Lch,
            ColorSpace::Oklab,
            ColorSpace::Oklch,
        ] {
            let back = space.to_color(space.from_color(&color));
            assert_color(&back, 0.2, 0.4, 0.6, 1.0);
        }
    }

    #[test]
    fn relative_colors() {
        assert_color(&one_color("rgb(from red r g b / 50%)").unwrap(), 1.0, 0.0, 0.0, 0.5);
        assert_color(&one_color("rgb(from #0000ff b g r)").unwrap(), 1.0, 0.0, 0.0, 1.0);
        assert_color(&one_color("hsl(from red calc(h + 120) s l)").unwrap(), 0.0, 1.0, 0.0, 1.0);
        assert_color(&one_color("rgb(from rgb(200 100 0) calc(r / 2) none 0)").unwrap(), 0.392, 0.0, 0.0, 1.0);
        assert_color(&one_color("hwb(from white h w b / alpha)").unwrap(), 1.0, 1.0, 1.0, 1.0);
        assert_color(&one_color("oklch(from red l c h)").unwrap(), 1.0, 0.0, 0.0, 1.0);
        assert!(one_color("rgb(from red r g)").is_none());
        assert!(one_color("rgb(from red calc(r / 0) g b)").is_none());
        assert!(one_color("rgb(from nothing r g b)").is_none());
    }

    #[test]
    fn calc_evaluator() {
        let channels = [("r", 10.0)];
        let scope = CalcScope {
            channels: &channels,
            percent_reference: Some(255.0),
        };
        let eval = |text: &str| {
            let tokens = scan(text);
            evaluate_calc(&tokens[..tokens.len() - 1], scope)
        };
        assert_eq!(eval("1 + 2 * 3"), Some(7.0));
        assert_eq!(eval("(1 + 2) * 3"), Some(9.0));
        assert_eq!(eval("-(r) * 2"), Some(-20.0));
        assert_eq!(eval("100%"), Some(255.0));
        assert_eq!(eval("r / (5 - 5)"), None);
        assert_eq!(eval("1 +"), None);
        assert_eq!(eval("unknown"), None);

        let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(eval(&deep), None);
        let minus = format!("{}1", "- ".repeat(200));
        assert_eq!(eval(&minus), None);
    }

    #[test]
    fn nested_colors_inside_matched_function_are_skipped() {
        let tokens = scan("rgb(from red r g b) blue");
        let found = ColorScanner::new(None).scan_all(&tokens);
        assert_eq!(found.len(), 2);
        assert_color(&found[1].0, 0.0, 0.0, 1.0, 1.0);
    }

    #[test]
    fn var_resolution_needs_resolver() {
        let src = ":root { --brand: #ff0000; } a { color: var(--brand); background: var(--none, blue); }";
        let (sheet, _) = parse(src);

        let without = find_colors(&sheet, None);
        // The declaration itself plus the fallback.
        assert_eq!(without.len(), 2);

        let mut vars = HashMap::new();
        vars.insert("--brand".to_string(), "#ff0000".to_string());
        let with = find_colors(&sheet, Some(&vars));
        assert_eq!(with.len(), 3);
        assert_eq!(with[1].span.text(src), "var(--brand)");
        assert_color(&with[1].color, 1.0, 0.0, 0.0, 1.0);
        assert_eq!(with[2].span.text(src), "blue");
    }

    #[test]
    fn var_chain_depth_is_limited() {
        let chain = |len: usize| {
            let mut vars = HashMap::new();
            for i in 1..len {
                vars.insert(format!("--v{i}"), format!("var(--v{})", i + 1));
            }
            vars.insert(format!("--v{len}"), "red".to_string());
            let tokens = scan("var(--v1)");
            ColorScanner::new(Some(&vars)).scan_all(&tokens)
        };
        assert_eq!(chain(5).len(), 1);
        assert!(chain(6).is_empty());

        let mut cyclic = HashMap::new();
        cyclic.insert("--a".to_string(), "var(--b)".to_string());
        cyclic.insert("--b".to_string(), "var(--a)".to_string());
        let tokens = scan("var(--a)");
        assert!(ColorScanner::new(Some(&cyclic)).scan_all(&tokens).is_empty());
    }

    #[test]
    fn presentation_strings() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(presentations(&red), vec!["#ff0000", "rgb(255, 0, 0)", "hsl(0, 100%, 50%)"]);
        let translucent = Color::new(0.0, 0.0, 1.0, 0.5);
        assert_eq!(
            presentations(&translucent),
            vec!["#0000ff80", "rgba(0, 0, 255, 0.5)", "hsla(240, 100%, 50%, 0.5)"]
        );
    }

    #[test]
    fn code_actions_offer_other_notations() {
        let src = "a { color: #ff0000; }";
        let (sheet, _) = parse(src);
        let actions = color_code_actions(&sheet, src, src.find('#').unwrap() + 2);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].new_text, "rgb(255, 0, 0)");
        assert_eq!(actions[1].new_text, "hsl(0, 100%, 50%)");
        assert!(color_code_actions(&sheet, src, 0).is_empty());

        let src = "a { color: red; }";
        let (sheet, _) = parse(src);
        assert_eq!(color_code_actions(&sheet, src, src.find("red").unwrap()).len(), 3);
    }

    #[test]
    fn relative_origin_nesting_is_limited() {
        let nested = |n: usize| format!("a {{ color: {}red{}; }}", "rgb(from ".repeat(n), " r g b)".repeat(n));

        let src = nested(3);
        let (sheet, _) = parse(&src);
        let colors = find_colors(&sheet, None);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].span.start, 11);
        assert_color(&colors[0].color, 1.0, 0.0, 0.0, 1.0);

        // Too deep to take as a whole: only an inner run within the limit is reported.
        let src = nested(1000);
        let (sheet, _) = parse(&src);
        let colors = find_colors(&sheet, None);
        assert_eq!(colors.len(), 1);
        assert!(colors[0].span.start > 11);
        assert_color(&colors[0].color, 1.0, 0.0, 0.0, 1.0);
    }
}
