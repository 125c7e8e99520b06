use super::Entry;

pub(crate) static AT_RULES: &[Entry] = &[
    Entry::new("charset", "Specifies the character encoding of the style sheet."),
    Entry::new("color-profile", "Defines a color profile usable by the color() function."),
    Entry::new("container", "Applies styles based on the size or style of a query container."),
    Entry::new("counter-style", "Defines a custom counter style."),
    Entry::obsolete("document", "Restricts rules to documents matching given URLs."),
    Entry::new("font-face", "Declares a custom font to load."),
    Entry::new("font-feature-values", "Names OpenType feature indexes for font-variant-alternates."),
    Entry::new("font-palette-values", "Defines a custom color palette for a color font."),
    Entry::new("import", "Imports rules from another style sheet."),
    Entry::new("keyframes", "Defines the intermediate steps of an animation."),
    Entry::new("layer", "Declares a cascade layer."),
    Entry::new("media", "Applies styles when the media query matches."),
    Entry::new("namespace", "Defines an XML namespace prefix for the style sheet."),
    Entry::new("page", "Modifies margins, orientation and size of printed pages."),
    Entry::new("property", "Registers a custom property with a syntax, inheritance and initial value."),
    Entry::new("scope", "Limits selectors to a DOM subtree."),
    Entry::new("starting-style", "Defines starting values for transitions on first style update."),
    Entry::new("supports", "Applies styles when the browser supports the given features."),
    Entry::obsolete("viewport", "Sets the initial viewport. Use the viewport meta tag instead."),
];

/// At-rules whose block holds declarations directly instead of rules.
pub const DECLARATION_BLOCK_AT_RULES: &[&str] =
    &["font-face", "page", "property", "counter-style", "font-palette-values", "viewport", "color-profile"];
