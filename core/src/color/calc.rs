use crate::{
    color::convert::angle_to_degrees,
    token::{Token, TokenKind, matching_close},
};

/// Nesting limit for parentheses and unary signs inside one expression.
const MAX_CALC_DEPTH: usize = 32;

/// Names and percentage base visible to an expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalcScope<'a> {
    /// Channel values from a relative color's origin, e.g. `("r", 255.0)`.
    pub channels: &'a [(&'a str, f64)],
    /// What `100%` means for the channel being computed.
    pub percent_reference: Option<f64>,
}

impl CalcScope<'_> {
    fn lookup(&self, name: &str) -> Option<f64> {
        if name.eq_ignore_ascii_case("none") {
            return Some(0.0);
        }
        if let Some((_, v)) = self.channels.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            return Some(*v);
        }
        match name.to_ascii_lowercase().as_str() {
            "pi" => Some(std::f64::consts::PI),
            "e" => Some(std::f64::consts::E),
            _ => None,
        }
    }

    /// Native value of a single numeric token.
    pub fn value_of(&self, tok: &Token) -> Option<f64> {
        let v = tok.numeric_value()?;
        match tok.kind {
            TokenKind::Number => Some(v),
            TokenKind::Percentage => Some(v / 100.0 * self.percent_reference?),
            TokenKind::Dimension => angle_to_degrees(v, &tok.unit()?),
            _ => None,
        }
    }
}

/// Evaluate the arithmetic expression held in `tokens` (the body of a `calc(...)`, without
/// the function token and closing parenthesis). Any malformed input, unknown name, or
/// division by zero yields `None`.
pub fn evaluate(tokens: &[Token], scope: CalcScope<'_>) -> Option<f64> {
    let significant: Vec<&Token> = tokens.iter().filter(|t| !t.is_trivia()).collect();
    let mut calc = Calc {
        tokens: significant,
        pos: 0,
        depth: 0,
        scope,
    };
    let value = calc.expression()?;
    if calc.pos != calc.tokens.len() {
        tracing::trace!(pos = calc.pos, "trailing tokens in calc expression");
        return None;
    }
    value.is_finite().then_some(value)
}

/// Evaluate a `calc(` function token at `open`, returning the value and the index of its
/// closing parenthesis.
pub fn evaluate_function(tokens: &[Token], open: usize, scope: CalcScope<'_>) -> Option<(f64, usize)> {
    let close = matching_close(tokens, open);
    let body_end = if tokens.get(close).is_some_and(|t| t.kind == TokenKind::RParen) { close } else { close + 1 };
    let body = tokens.get(open + 1..body_end)?;
    Some((evaluate(body, scope)?, close))
}

struct Calc<'t, 's> {
    tokens: Vec<&'t Token>,
    pos: usize,
    depth: usize,
    scope: CalcScope<'s>,
}

impl<'t> Calc<'t, '_> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_delim(&self) -> Option<char> {
        self.peek()
            .filter(|t| t.kind == TokenKind::Delim)
            .and_then(|t| t.value.chars().next())
    }

    fn expression(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek_delim() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Some(value)
    }

    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        while let Some(op @ ('*' | '/')) = self.peek_delim() {
            self.pos += 1;
            let rhs = self.factor()?;
            if op == '*' {
                value *= rhs;
            } else {
                if rhs == 0.0 {
                    tracing::trace!("division by zero in calc expression");
                    return None;
                }
                value /= rhs;
            }
        }
        Some(value)
    }

    fn factor(&mut self) -> Option<f64> {
        if self.depth >= MAX_CALC_DEPTH {
            tracing::trace!("calc expression nested too deeply");
            return None;
        }
        self.depth += 1;
        let value = self.factor_inner();
        self.depth -= 1;
        value
    }

    fn factor_inner(&mut self) -> Option<f64> {
        let tok = self.peek()?;
        self.pos += 1;
        match tok.kind {
            TokenKind::Number | TokenKind::Percentage | TokenKind::Dimension => self.scope.value_of(tok),
            TokenKind::Ident => self.scope.lookup(&tok.value),
            TokenKind::Delim if tok.is_delim('-') => Some(-self.factor()?),
            TokenKind::Delim if tok.is_delim('+') => self.factor(),
            TokenKind::LParen => self.parenthesized(),
            TokenKind::Function if tok.is_function("calc") => self.parenthesized(),
            _ => None,
        }
    }

    fn parenthesized(&mut self) -> Option<f64> {
        let value = self.expression()?;
        match self.peek() {
            Some(t) if t.kind == TokenKind::RParen => {
                self.pos += 1;
                Some(value)
            }
            // Unclosed at end of input is tolerated.
            None => Some(value),
            Some(_) => None,
        }
    }
}
