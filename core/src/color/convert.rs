//! Color-space math. Every function works on plain `f64` channels; clamping into the
//! displayable range happens once, when a [`Color`](super::Color) is built.

use std::f64::consts::PI;

use serde::Serialize;

use super::Color;

/// D65 reference white in XYZ.
const WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];
const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

/// Color spaces reachable through a CSS color function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

impl ColorSpace {
    pub fn from_function(name: &str) -> Option<Self> {
        let space = match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => ColorSpace::Rgb,
            "hsl" | "hsla" => ColorSpace::Hsl,
            "hwb" => ColorSpace::Hwb,
            "lab" => ColorSpace::Lab,
            "lch" => ColorSpace::Lch,
            "oklab" => ColorSpace::Oklab,
            "oklch" => ColorSpace::Oklch,
            _ => return None,
        };
        Some(space)
    }

    /// Single-letter channel names usable in relative color syntax.
    pub fn channel_names(&self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["r", "g", "b"],
            ColorSpace::Hsl => ["h", "s", "l"],
            ColorSpace::Hwb => ["h", "w", "b"],
            ColorSpace::Lab | ColorSpace::Oklab => ["l", "a", "b"],
            ColorSpace::Lch | ColorSpace::Oklch => ["l", "c", "h"],
        }
    }

    /// Index of the hue channel, if the space is polar.
    pub fn hue_channel(&self) -> Option<usize> {
        match self {
            ColorSpace::Hsl | ColorSpace::Hwb => Some(0),
            ColorSpace::Lch | ColorSpace::Oklch => Some(2),
            _ => None,
        }
    }

    /// The native value `100%` maps to for `channel` (3 is alpha). `None` for hue,
    /// which does not take percentages.
    pub fn percent_reference(&self, channel: usize) -> Option<f64> {
        if channel == 3 {
            return Some(1.0);
        }
        if self.hue_channel() == Some(channel) {
            return None;
        }
        let reference = match (self, channel) {
            (ColorSpace::Rgb, _) => 255.0,
            (ColorSpace::Hsl | ColorSpace::Hwb, _) => 100.0,
            (ColorSpace::Lab | ColorSpace::Lch, 0) => 100.0,
            (ColorSpace::Lab, _) => 125.0,
            (ColorSpace::Lch, _) => 150.0,
            (ColorSpace::Oklab | ColorSpace::Oklch, 0) => 1.0,
            (ColorSpace::Oklab | ColorSpace::Oklch, _) => 0.4,
        };
        Some(reference)
    }

    /// Build a color from channel values in this space's native ranges
    /// (rgb 0-255, hsl/hwb degrees and percents, lab/lch lightness 0-100,
    /// oklab/oklch lightness 0-1) plus alpha in 0-1.
    pub fn to_color(&self, [c0, c1, c2, alpha]: [f64; 4]) -> Color {
        let (r, g, b) = match self {
            ColorSpace::Rgb => (c0 / 255.0, c1 / 255.0, c2 / 255.0),
            ColorSpace::Hsl => hsl_to_rgb(c0, c1 / 100.0, c2 / 100.0),
            ColorSpace::Hwb => hwb_to_rgb(c0, c1 / 100.0, c2 / 100.0),
            ColorSpace::Lab => lab_to_rgb(c0, c1, c2),
            ColorSpace::Lch => {
                let (a, b) = polar_to_rect(c1, c2);
                lab_to_rgb(c0, a, b)
            }
            ColorSpace::Oklab => oklab_to_rgb(c0, c1, c2),
            ColorSpace::Oklch => {
                let (a, b) = polar_to_rect(c1, c2);
                oklab_to_rgb(c0, a, b)
            }
        };
        Color::new(r, g, b, alpha)
    }

    /// Decompose `color` into this space's native channel values, alpha last.
    pub fn from_color(&self, color: &Color) -> [f64; 4] {
        let Color { red: r, green: g, blue: b, alpha } = *color;
        let [c0, c1, c2] = match self {
            ColorSpace::Rgb => [r * 255.0, g * 255.0, b * 255.0],
            ColorSpace::Hsl => {
                let (h, s, l) = rgb_to_hsl(r, g, b);
                [h, s * 100.0, l * 100.0]
            }
            ColorSpace::Hwb => {
                let (h, w, bl) = rgb_to_hwb(r, g, b);
                [h, w * 100.0, bl * 100.0]
            }
            ColorSpace::Lab => {
                let (l, a, bb) = rgb_to_lab(r, g, b);
                [l, a, bb]
            }
            ColorSpace::Lch => {
                let (l, a, bb) = rgb_to_lab(r, g, b);
                let (c, h) = rect_to_polar(a, bb);
                [l, c, h]
            }
            ColorSpace::Oklab => {
                let (l, a, bb) = rgb_to_oklab(r, g, b);
                [l, a, bb]
            }
            ColorSpace::Oklch => {
                let (l, a, bb) = rgb_to_oklab(r, g, b);
                let (c, h) = rect_to_polar(a, bb);
                [l, c, h]
            }
        };
        [c0, c1, c2, alpha]
    }
}

/// Convert an angle with a CSS unit to degrees.
pub fn angle_to_degrees(value: f64, unit: &str) -> Option<f64> {
    let degrees = match unit.to_ascii_lowercase().as_str() {
        "deg" => value,
        "rad" => value * 180.0 / PI,
        "grad" => value * 0.9,
        "turn" => value * 360.0,
        _ => return None,
    };
    Some(degrees)
}

pub fn normalize_hue(h: f64) -> f64 {
    if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// `h` in degrees, `s` and `l` in 0-1.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = normalize_hue(h) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return (0.0, 0.0, l);
    }
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    (hue_of(r, g, b, max, d), s, l)
}

fn hue_of(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    normalize_hue(h * 60.0)
}

/// `w` and `b` in 0-1; when they sum past 1 both are scaled down proportionally.
pub fn hwb_to_rgb(h: f64, w: f64, b: f64) -> (f64, f64, f64) {
    let mut w = w.max(0.0);
    let mut b = b.max(0.0);
    let sum = w + b;
    if sum >= 1.0 {
        w /= sum;
        b /= sum;
    }
    let (r, g, bl) = hsl_to_rgb(h, 1.0, 0.5);
    let scale = 1.0 - w - b;
    (r * scale + w, g * scale + w, bl * scale + w)
}

pub fn rgb_to_hwb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let h = if d == 0.0 { 0.0 } else { hue_of(r, g, b, max, d) };
    (h, min, 1.0 - max)
}

fn gamma_encode(c: f64) -> f64 {
    if c <= 0.0031308 { 12.92 * c } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 }
}

fn gamma_decode(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

pub fn lab_to_rgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    let finv = |t: f64| {
        let t3 = t * t * t;
        if t3 > LAB_EPSILON { t3 } else { (116.0 * t - 16.0) / LAB_KAPPA }
    };
    let yr = if l > LAB_KAPPA * LAB_EPSILON { fy * fy * fy } else { l / LAB_KAPPA };
    let x = finv(fx) * WHITE[0];
    let y = yr * WHITE[1];
    let z = finv(fz) * WHITE[2];

    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let bl = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;
    (gamma_encode(r), gamma_encode(g), gamma_encode(bl))
}

pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (gamma_decode(r), gamma_decode(g), gamma_decode(b));
    let x = (0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / WHITE[0];
    let y = (0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / WHITE[1];
    let z = (0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / WHITE[2];
    let f = |t: f64| if t > LAB_EPSILON { t.cbrt() } else { (LAB_KAPPA * t + 16.0) / 116.0 };
    let (fx, fy, fz) = (f(x), f(y), f(z));
    (116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

pub fn oklab_to_rgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;
    let (lc, mc, sc) = (l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);

    let r = 4.0767416621 * lc - 3.3077115913 * mc + 0.2309699292 * sc;
    let g = -1.2684380046 * lc + 2.6097574011 * mc - 0.3413193965 * sc;
    let bl = -0.0041960863 * lc - 0.7034186147 * mc + 1.7076147010 * sc;
    (gamma_encode(r), gamma_encode(g), gamma_encode(bl))
}

pub fn rgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (gamma_decode(r), gamma_decode(g), gamma_decode(b));
    let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
    let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
    let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();
    (
        0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    )
}

/// Chroma and hue in degrees to rectangular a/b.
pub fn polar_to_rect(c: f64, h: f64) -> (f64, f64) {
    let rad = normalize_hue(h).to_radians();
    (c.max(0.0) * rad.cos(), c.max(0.0) * rad.sin())
}

pub fn rect_to_polar(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    // Achromatic colors have no meaningful hue.
    let h = if c < 1e-9 { 0.0 } else { normalize_hue(b.atan2(a).to_degrees()) };
    (c, h)
}
