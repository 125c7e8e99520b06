mod calc;
mod convert;
mod parse;

#[cfg(test)]
mod color_test;

pub use calc::{CalcScope, evaluate as evaluate_calc};
pub use convert::*;
pub use parse::{ColorScanner, MAX_VAR_DEPTH, Match, var_name};

use serde::Serialize;

use crate::{
    ast::{Stylesheet, declarations},
    token::Span,
    vars::VariableResolver,
};

/// RGBA color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl Color {
    /// Channels are clamped into `[0, 1]`; NaN becomes 0.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
        }
    }

    /// From `0xRRGGBBAA`.
    pub fn from_packed(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Parse the digits of a hex color without `#`: 3, 4, 6 or 8 hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u32::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
        let byte = |i: usize| u32::from_str_radix(&hex[i..i + 2], 16).ok();
        let (r, g, b, a) = match hex.len() {
            3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
            4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
            6 => (byte(0)?, byte(2)?, byte(4)?, 255),
            8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
            _ => return None,
        };
        Some(Self::from_packed((r << 24) | (g << 16) | (b << 8) | a))
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha].map(|c| (c * 255.0).round() as u8)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_bytes();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn to_rgb_string(&self) -> String {
        let [r, g, b, _] = self.to_bytes();
        if self.alpha >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", format_number(self.alpha))
        }
    }

    pub fn to_hsl_string(&self) -> String {
        let (h, s, l) = rgb_to_hsl(self.red, self.green, self.blue);
        let (h, s, l) = (h.round() % 360.0, (s * 100.0).round(), (l * 100.0).round());
        if self.alpha >= 1.0 {
            format!("hsl({h}, {s}%, {l}%)")
        } else {
            format!("hsla({h}, {s}%, {l}%, {})", format_number(self.alpha))
        }
    }
}

/// Up to two decimals, trailing zeros dropped.
pub fn format_number(v: f64) -> String {
    let s = format!("{:.2}", (v * 100.0).round() / 100.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" { "0".to_string() } else { s.to_string() }
}

/// A color and the span of the text that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DocumentColor {
    pub color: Color,
    pub span: Span,
}

/// Every color literal or color function in declaration values, in document order.
/// `var()` references are followed only when a resolver is supplied.
pub fn find_colors(sheet: &Stylesheet, resolver: Option<&dyn VariableResolver>) -> Vec<DocumentColor> {
    let scanner = ColorScanner::new(resolver);
    let mut out = Vec::new();
    for (decl, _) in declarations(sheet) {
        let Some(value) = &decl.value else { continue };
        out.extend(
            scanner
                .scan_all(&value.tokens)
                .into_iter()
                .map(|(color, span)| DocumentColor { color, span }),
        );
    }
    out
}

/// Textual renderings offered for a picked color: hex, rgb, hsl.
pub fn presentations(color: &Color) -> Vec<String> {
    vec![color.to_hex(), color.to_rgb_string(), color.to_hsl_string()]
}

/// A replacement turning one color notation into another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAction {
    pub title: String,
    pub span: Span,
    pub new_text: String,
}

fn notation_of(text: &str) -> &'static str {
    let lower = text.trim_start().to_ascii_lowercase();
    if lower.starts_with('#') {
        "hex"
    } else if lower.starts_with("rgb") {
        "rgb"
    } else if lower.starts_with("hsl") {
        "hsl"
    } else {
        "other"
    }
}

/// Conversions for the color under `offset` into the notations it is not already using.
pub fn color_code_actions(sheet: &Stylesheet, source: &str, offset: usize) -> Vec<ColorAction> {
    let Some(found) = find_colors(sheet, None).into_iter().find(|c| c.span.contains(offset)) else {
        return Vec::new();
    };
    let current = notation_of(found.span.text(source));
    ["hex", "rgb", "hsl"]
        .into_iter()
        .zip(presentations(&found.color))
        .filter(|(notation, _)| *notation != current)
        .map(|(notation, text)| ColorAction {
            title: format!("Convert to {notation}: {text}"),
            span: found.span,
            new_text: text,
        })
        .collect()
}
