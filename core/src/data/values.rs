use super::Entry;

/// CSS-wide keywords valid for every property.
pub const GLOBAL_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert", "revert-layer"];

pub const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch"];

pub const UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "cap", "ic", "lh", "rlh", "vw", "vh", "vmin", "vmax", "svw", "svh", "lvw",
    "lvh", "dvw", "dvh", "cqw", "cqh", "cqi", "cqb", "cm", "mm", "q", "in", "pt", "pc", "deg", "rad", "grad",
    "turn", "s", "ms", "hz", "khz", "dpi", "dpcm", "dppx", "x", "fr",
];

pub const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "article", "aside", "audio", "b", "blockquote", "body", "br", "button", "canvas",
    "caption", "code", "col", "dd", "details", "dialog", "div", "dl", "dt", "em", "fieldset", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "i",
    "iframe", "img", "input", "label", "legend", "li", "main", "mark", "nav", "ol", "optgroup", "option", "p",
    "picture", "pre", "progress", "section", "select", "small", "source", "span", "strong", "sub", "summary",
    "sup", "svg", "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time", "tr", "u",
    "ul", "video",
];

pub(crate) static FUNCTIONS: &[Entry] = &[
    Entry::new("abs", "Absolute value of a calculation."),
    Entry::new("attr", "Value of an attribute of the selected element."),
    Entry::new("calc", "Performs a calculation to determine a value."),
    Entry::new("clamp", "Clamps a value between an upper and lower bound."),
    Entry::new("color", "Color in a predefined color space."),
    Entry::new("color-mix", "Mixes two colors in a given color space."),
    Entry::new("conic-gradient", "Gradient with color transitions rotated around a center."),
    Entry::new("counter", "Current value of a named counter."),
    Entry::new("counters", "Nested values of a named counter."),
    Entry::new("cubic-bezier", "Cubic Bézier easing curve."),
    Entry::new("env", "Value of a user-agent environment variable."),
    Entry::new("fit-content", "Size clamped between min-content and a limit."),
    Entry::new("hsl", "Color from hue, saturation and lightness."),
    Entry::obsolete("hsla", "Legacy alias of hsl() with alpha."),
    Entry::new("hwb", "Color from hue, whiteness and blackness."),
    Entry::new("image-set", "Set of images for different resolutions."),
    Entry::new("lab", "Color in the CIE Lab color space."),
    Entry::new("lch", "Color in the CIE LCH color space."),
    Entry::new("linear-gradient", "Gradient along a straight line."),
    Entry::new("max", "Largest of a list of values."),
    Entry::new("min", "Smallest of a list of values."),
    Entry::new("minmax", "Size range of a grid track."),
    Entry::new("oklab", "Color in the Oklab color space."),
    Entry::new("oklch", "Color in the Oklch color space."),
    Entry::new("radial-gradient", "Gradient radiating from an origin."),
    Entry::new("repeat", "Repeated fragment of a grid track list."),
    Entry::new("repeating-linear-gradient", "Repeating gradient along a straight line."),
    Entry::new("repeating-radial-gradient", "Repeating gradient radiating from an origin."),
    Entry::new("rgb", "Color from red, green and blue channels."),
    Entry::obsolete("rgba", "Legacy alias of rgb() with alpha."),
    Entry::new("rotate", "Rotation transform."),
    Entry::new("round", "Rounds a value to a multiple of an interval."),
    Entry::new("scale", "Scaling transform."),
    Entry::new("steps", "Stepped easing function."),
    Entry::new("translate", "Translation transform."),
    Entry::new("url", "Reference to an external resource."),
    Entry::new("var", "Value of a custom property."),
];
