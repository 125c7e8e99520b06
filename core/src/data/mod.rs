//! Static CSS knowledge: properties, at-rules, selectors, functions, named colors.
//!
//! Tables are plain `static` slices. Name indexes are built once on first lookup and
//! are read-only afterwards, so concurrent readers need no synchronization.

mod at_rules;
mod colors;
mod properties;
mod selectors;
mod values;


pub use at_rules::DECLARATION_BLOCK_AT_RULES;
pub use colors::NAMED_COLORS;
pub use values::{COLOR_FUNCTIONS, GLOBAL_KEYWORDS, HTML_ELEMENTS, UNITS};

use once_cell::sync::Lazy;

use crate::util::fast_map::{FastHashMap, fast_hash_map_with_capacity};

/// A known property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub description: &'static str,
    /// Keyword values offered in value completion.
    pub values: &'static [&'static str],
    /// Accepts `<color>`; value completion also offers named colors and color functions.
    pub color: bool,
    pub obsolete: bool,
}

impl Property {
    pub(crate) const fn new(name: &'static str, description: &'static str, values: &'static [&'static str]) -> Self {
        Self {
            name,
            description,
            values,
            color: false,
            obsolete: false,
        }
    }

    pub(crate) const fn color(name: &'static str, description: &'static str, values: &'static [&'static str]) -> Self {
        Self {
            name,
            description,
            values,
            color: true,
            obsolete: false,
        }
    }

    pub(crate) const fn obsolete(name: &'static str, description: &'static str, values: &'static [&'static str]) -> Self {
        Self {
            name,
            description,
            values,
            color: false,
            obsolete: true,
        }
    }
}

/// A named entry without value data: at-rules, pseudo-classes, pseudo-elements, functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub description: &'static str,
    pub obsolete: bool,
}

impl Entry {
    pub(crate) const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            obsolete: false,
        }
    }

    pub(crate) const fn obsolete(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            obsolete: true,
        }
    }
}

fn index<T>(items: &'static [T], key: fn(&T) -> &'static str) -> FastHashMap<&'static str, &'static T> {
    let mut map = fast_hash_map_with_capacity(items.len());
    for item in items {
        map.insert(key(item), item);
    }
    map
}

static PROPERTY_INDEX: Lazy<FastHashMap<&'static str, &'static Property>> =
    Lazy::new(|| index(properties::PROPERTIES, |p| p.name));
static AT_RULE_INDEX: Lazy<FastHashMap<&'static str, &'static Entry>> =
    Lazy::new(|| index(at_rules::AT_RULES, |e| e.name));
static PSEUDO_CLASS_INDEX: Lazy<FastHashMap<&'static str, &'static Entry>> =
    Lazy::new(|| index(selectors::PSEUDO_CLASSES, |e| e.name));
static PSEUDO_ELEMENT_INDEX: Lazy<FastHashMap<&'static str, &'static Entry>> =
    Lazy::new(|| index(selectors::PSEUDO_ELEMENTS, |e| e.name));
static FUNCTION_INDEX: Lazy<FastHashMap<&'static str, &'static Entry>> =
    Lazy::new(|| index(values::FUNCTIONS, |e| e.name));
static COLOR_INDEX: Lazy<FastHashMap<&'static str, u32>> = Lazy::new(|| {
    let mut map = fast_hash_map_with_capacity(NAMED_COLORS.len());
    for (name, rgba) in NAMED_COLORS {
        map.insert(*name, *rgba);
    }
    map
});

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

/// Strip a vendor prefix such as `-webkit-`, returning the bare name.
pub fn unprefixed(name: &str) -> &str {
    VENDOR_PREFIXES
        .iter()
        .find_map(|p| name.strip_prefix(p))
        .unwrap_or(name)
}

/// Lookup by lowercase name.
pub fn property(name: &str) -> Option<&'static Property> {
    PROPERTY_INDEX.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Known directly or through a vendor prefix on a known name.
pub fn is_known_property(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    PROPERTY_INDEX.contains_key(lower.as_str()) || PROPERTY_INDEX.contains_key(unprefixed(&lower))
}

pub fn properties() -> &'static [Property] {
    properties::PROPERTIES
}

/// Lookup without the leading `@`.
pub fn at_rule(name: &str) -> Option<&'static Entry> {
    AT_RULE_INDEX.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn is_known_at_rule(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    AT_RULE_INDEX.contains_key(lower.as_str()) || AT_RULE_INDEX.contains_key(unprefixed(&lower))
}

pub fn at_rules() -> &'static [Entry] {
    at_rules::AT_RULES
}

/// Lookup without the leading `:`.
pub fn pseudo_class(name: &str) -> Option<&'static Entry> {
    PSEUDO_CLASS_INDEX.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn pseudo_classes() -> &'static [Entry] {
    selectors::PSEUDO_CLASSES
}

/// Lookup without the leading `::`.
pub fn pseudo_element(name: &str) -> Option<&'static Entry> {
    PSEUDO_ELEMENT_INDEX.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn pseudo_elements() -> &'static [Entry] {
    selectors::PSEUDO_ELEMENTS
}

pub fn function(name: &str) -> Option<&'static Entry> {
    FUNCTION_INDEX.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn functions() -> &'static [Entry] {
    values::FUNCTIONS
}

/// Packed `0xRRGGBBAA` for a named color. `currentcolor` resolves like black here;
/// callers that care about context must special-case it.
pub fn named_color(name: &str) -> Option<u32> {
    COLOR_INDEX.get(name.to_ascii_lowercase().as_str()).copied()
}
