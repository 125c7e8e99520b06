use crate::{
    color::{
        Color,
        calc::{CalcScope, evaluate, evaluate_function},
        convert::{ColorSpace, angle_to_degrees},
    },
    data,
    token::{Span, Token, TokenKind, matching_close, scan},
    vars::VariableResolver,
};

/// Longest `var()` chain followed while looking for a color.
pub const MAX_VAR_DEPTH: usize = 5;

/// Deepest `from` origin nesting accepted in relative colors.
pub const MAX_RELATIVE_NESTING: usize = 16;

/// A color found in a token run, with the source span of the expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub color: Color,
    pub span: Span,
    /// Index of the last token consumed.
    pub last: usize,
}

/// Finds colors in token runs. `resolver` enables `var()` lookups.
#[derive(Clone, Copy)]
pub struct ColorScanner<'r> {
    resolver: Option<&'r dyn VariableResolver>,
}

impl<'r> ColorScanner<'r> {
    pub fn new(resolver: Option<&'r dyn VariableResolver>) -> Self {
        Self { resolver }
    }

    /// Every color in `tokens`, in order. Colors nested inside a matched color function
    /// are not reported separately.
    pub fn scan_all(&self, tokens: &[Token]) -> Vec<(Color, Span)> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            match self.color_at(tokens, i, 0) {
                Some(m) => {
                    out.push((m.color, m.span));
                    i = m.last + 1;
                }
                None => i += 1,
            }
        }
        out
    }

    /// First color anywhere in `tokens`.
    fn first_color(&self, tokens: &[Token], depth: usize, nesting: usize) -> Option<Color> {
        (0..tokens.len()).find_map(|i| self.color_at_nested(tokens, i, depth, nesting).map(|m| m.color))
    }

    /// Try to read a color starting exactly at `tokens[i]`. `depth` counts `var()` hops.
    pub fn color_at(&self, tokens: &[Token], i: usize, depth: usize) -> Option<Match> {
        self.color_at_nested(tokens, i, depth, 0)
    }

    /// `nesting` counts enclosing relative-color origins.
    fn color_at_nested(&self, tokens: &[Token], i: usize, depth: usize, nesting: usize) -> Option<Match> {
        let tok = tokens.get(i)?;
        match tok.kind {
            TokenKind::Hash => Color::from_hex(&tok.value).map(|color| Match {
                color,
                span: tok.span(),
                last: i,
            }),
            TokenKind::Ident => {
                if tok.value.eq_ignore_ascii_case("currentcolor") {
                    return None;
                }
                data::named_color(&tok.value).map(|packed| Match {
                    color: Color::from_packed(packed),
                    span: tok.span(),
                    last: i,
                })
            }
            TokenKind::Function if tok.is_function("var") => {
                let close = matching_close(tokens, i);
                let color = self.resolve_var(tokens, i, close, depth, nesting)?;
                Some(Match {
                    color,
                    span: Span::new(tok.start, tokens[close].end),
                    last: close,
                })
            }
            TokenKind::Function => {
                let space = ColorSpace::from_function(&tok.value)?;
                let close = matching_close(tokens, i);
                let args = function_args(tokens, i, close);
                let color = self.parse_function(space, args, depth, nesting)?;
                Some(Match {
                    color,
                    span: Span::new(tok.start, tokens[close].end),
                    last: close,
                })
            }
            _ => None,
        }
    }

    fn resolve_var(&self, tokens: &[Token], open: usize, close: usize, depth: usize, nesting: usize) -> Option<Color> {
        let resolver = self.resolver?;
        if depth >= MAX_VAR_DEPTH {
            tracing::debug!(depth, "var() chain too deep, giving up");
            return None;
        }
        let name = var_name(function_args(tokens, open, close))?;
        let text = resolver.resolve(&name)?;
        let inner = scan(&text);
        self.first_color(&inner, depth + 1, nesting)
    }

    fn parse_function(&self, space: ColorSpace, args: &[Token], depth: usize, nesting: usize) -> Option<Color> {
        let first = args.iter().position(|t| !t.is_trivia())?;
        if args[first].is_ident("from") {
            self.parse_relative(space, &args[first + 1..], depth, nesting)
        } else {
            parse_absolute(space, args)
        }
    }

    /// `func(from <origin> c0 c1 c2 [/ alpha])`, with `args` starting after `from`.
    fn parse_relative(&self, space: ColorSpace, args: &[Token], depth: usize, nesting: usize) -> Option<Color> {
        if nesting >= MAX_RELATIVE_NESTING {
            tracing::trace!(nesting, "relative color origin nested too deeply");
            return None;
        }
        let start = args.iter().position(|t| !t.is_trivia())?;
        let origin = self.color_at_nested(args, start, depth, nesting + 1)?;
        let native = space.from_color(&origin.color);

        let names = space.channel_names();
        let scope_channels = [
            (names[0], native[0]),
            (names[1], native[1]),
            (names[2], native[2]),
            ("alpha", native[3]),
        ];

        let exprs = split_channels(&args[origin.last + 1..])?;
        if exprs.channels.len() != 3 {
            return None;
        }

        let mut out = [0.0; 4];
        for (k, expr) in exprs.channels.iter().copied().enumerate() {
            let scope = CalcScope {
                channels: &scope_channels,
                percent_reference: space.percent_reference(k),
            };
            out[k] = eval_channel(expr, scope)?;
        }
        out[3] = match exprs.alpha {
            Some(expr) => eval_channel(
                expr,
                CalcScope {
                    channels: &scope_channels,
                    percent_reference: Some(1.0),
                },
            )?,
            None => native[3],
        };
        Some(space.to_color(out))
    }
}

/// Tokens strictly between the function token at `open` and its closing parenthesis.
fn function_args(tokens: &[Token], open: usize, close: usize) -> &[Token] {
    let end = if tokens[close].kind == TokenKind::RParen && close > open { close } else { close + 1 };
    tokens.get(open + 1..end).unwrap_or(&[])
}

/// The `--name` that must open a `var()` argument list.
pub fn var_name(args: &[Token]) -> Option<String> {
    let tok = args.iter().find(|t| !t.is_trivia())?;
    (tok.kind == TokenKind::Ident && tok.value.starts_with("--")).then(|| tok.value.clone())
}

/// One channel expression: a run of tokens such as `r`, `-10`, `50%` or `calc(l * 2)`.
type Expr<'a> = &'a [Token];

struct ChannelExprs<'a> {
    channels: Vec<Expr<'a>>,
    alpha: Option<Expr<'a>>,
}

/// Split the channel part of a relative color into per-channel token runs. A leading
/// `-` or `+` delimiter stays attached to the following token.
fn split_channels(tokens: &[Token]) -> Option<ChannelExprs<'_>> {
    let mut channels = Vec::new();
    let mut alpha = None;
    let mut after_slash = false;
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        if tok.is_trivia() || tok.kind == TokenKind::Comma {
            i += 1;
            continue;
        }
        if tok.is_delim('/') {
            if after_slash {
                return None;
            }
            after_slash = true;
            i += 1;
            continue;
        }
        let start = i;
        while tokens.get(i).is_some_and(|t| t.is_delim('-') || t.is_delim('+')) {
            i += 1;
        }
        let tok = tokens.get(i)?;
        let end = match tok.kind {
            TokenKind::Function | TokenKind::LParen => matching_close(tokens, i),
            _ => i,
        };
        let expr = &tokens[start..=end];
        if after_slash {
            if alpha.is_some() {
                return None;
            }
            alpha = Some(expr);
        } else {
            channels.push(expr);
        }
        i = end + 1;
    }
    Some(ChannelExprs { channels, alpha })
}

fn eval_channel(expr: Expr<'_>, scope: CalcScope<'_>) -> Option<f64> {
    let mut sign = 1.0;
    let mut i = 0;
    while let Some(t) = expr.get(i) {
        if t.is_delim('-') {
            sign = -sign;
        } else if !t.is_delim('+') {
            break;
        }
        i += 1;
    }
    let tok = expr.get(i)?;
    let value = match tok.kind {
        TokenKind::Function if tok.is_function("calc") => evaluate_function(expr, i, scope)?.0,
        TokenKind::LParen => {
            let close = matching_close(expr, i);
            evaluate(expr.get(i + 1..close)?, scope)?
        }
        TokenKind::Ident => {
            let body = std::slice::from_ref(tok);
            evaluate(body, scope)?
        }
        _ => scope.value_of(tok)?,
    };
    Some(sign * value)
}

/// An argument of an absolute color function.
#[derive(Debug, Clone, Copy)]
enum Arg {
    Number(f64),
    Percent(f64),
}

fn parse_absolute(space: ColorSpace, tokens: &[Token]) -> Option<Color> {
    let mut args: Vec<Arg> = Vec::with_capacity(4);
    let mut slash_at: Option<usize> = None;
    let mut negate = false;
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        i += 1;
        let arg = match tok.kind {
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::Comma => continue,
            TokenKind::Delim if tok.is_delim('/') => {
                if slash_at.is_some() {
                    return None;
                }
                slash_at = Some(args.len());
                continue;
            }
            TokenKind::Delim if tok.is_delim('-') => {
                negate = !negate;
                continue;
            }
            TokenKind::Delim if tok.is_delim('+') => continue,
            TokenKind::Number => Arg::Number(tok.numeric_value()?),
            TokenKind::Percentage => Arg::Percent(tok.numeric_value()?),
            TokenKind::Dimension => Arg::Number(angle_to_degrees(tok.numeric_value()?, &tok.unit()?)?),
            TokenKind::Ident if tok.is_ident("none") => Arg::Number(0.0),
            TokenKind::Function if tok.is_function("calc") => {
                let scope = CalcScope {
                    channels: &[],
                    percent_reference: space.percent_reference(args.len().min(3)),
                };
                let (value, close) = evaluate_function(tokens, i - 1, scope)?;
                i = close + 1;
                Arg::Number(value)
            }
            _ => return None,
        };
        let arg = if negate {
            negate = false;
            match arg {
                Arg::Number(v) => Arg::Number(-v),
                Arg::Percent(v) => Arg::Percent(-v),
            }
        } else {
            arg
        };
        args.push(arg);
    }

    if !(args.len() == 3 || args.len() == 4) {
        return None;
    }
    if slash_at.is_some_and(|at| at != 3 || args.len() != 4) {
        return None;
    }

    let mut native = [0.0; 4];
    for (k, slot) in native.iter_mut().take(3).enumerate() {
        *slot = absolute_channel(space, k, args[k])?;
    }
    native[3] = match args.get(3) {
        None => 1.0,
        Some(Arg::Percent(v)) => v / 100.0,
        // Legacy comma syntax sometimes carries alpha on a 0-255 scale.
        Some(Arg::Number(v)) if space == ColorSpace::Rgb && slash_at.is_none() && *v > 1.0 => v / 255.0,
        Some(Arg::Number(v)) => *v,
    };
    Some(space.to_color(native))
}

fn absolute_channel(space: ColorSpace, k: usize, arg: Arg) -> Option<f64> {
    match arg {
        Arg::Percent(v) => Some(v / 100.0 * space.percent_reference(k)?),
        // Saturation, lightness, whiteness and blackness written as bare numbers are
        // fractions up to 1 and percents above it.
        Arg::Number(v) if matches!(space, ColorSpace::Hsl | ColorSpace::Hwb) && k > 0 => {
            Some(if v > 1.0 { v } else { v * 100.0 })
        }
        Arg::Number(v) => Some(v),
    }
}
