use serde::{Deserialize, Serialize};

use crate::{
    ast::{NodeRef, Stylesheet, path_at},
    data::{self, DECLARATION_BLOCK_AT_RULES, GLOBAL_KEYWORDS, HTML_ELEMENTS, NAMED_COLORS},
    token::{Span, is_name_byte},
    vars::LocalVariables,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    /// Offer obsolete entries, flagged as deprecated.
    pub show_deprecated: bool,
}

/// What the cursor is positioned to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CompletionContext {
    None,
    Property,
    Value { property: String },
    AtRule,
    PseudoClass,
    PseudoElement,
    Selector,
    TopLevel,
}

/// A classified cursor: the context, the typed name fragment used for filtering, and
/// the span a chosen item replaces (sigils such as `@` or `::` included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub context: CompletionContext,
    pub prefix: String,
    pub replace: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompletionKind {
    Property,
    Keyword,
    Function,
    Color,
    Variable,
    AtRule,
    PseudoClass,
    PseudoElement,
    Element,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: Option<String>,
    pub insert_text: String,
    pub replace: Span,
    pub deprecated: bool,
}

const VALUE_BREAKS: &[u8] = b":;{}(,\n";
const WORD_BREAKS: &[u8] = b" \t\r\n\x0c{};,";

/// Classify the cursor at `offset` (a byte offset into `source`).
pub fn completion_context(sheet: &Stylesheet, source: &str, offset: usize) -> CompletionRequest {
    let offset = floor_char_boundary(source, offset.min(source.len()));
    let before = &source[..offset];
    let empty = |context| CompletionRequest {
        context,
        prefix: String::new(),
        replace: Span::single(offset),
    };

    if in_comment(before) {
        return empty(CompletionContext::None);
    }

    let word_start = before
        .bytes()
        .rposition(|b| WORD_BREAKS.contains(&b))
        .map_or(0, |i| i + 1);
    let name_start = trailing_name_start(before);
    let name = &before[name_start..];

    if name_start > word_start {
        let sigil = &before[word_start..name_start];
        if sigil.ends_with('@') && !sigil.ends_with("\\@") {
            return CompletionRequest {
                context: CompletionContext::AtRule,
                prefix: name.to_string(),
                replace: Span::new(name_start - 1, offset),
            };
        }
        if sigil.ends_with("::") {
            return CompletionRequest {
                context: CompletionContext::PseudoElement,
                prefix: name.to_string(),
                replace: Span::new(name_start - 2, offset),
            };
        }
        if sigil.ends_with(':') && is_selector_colon(before, name_start - 1) {
            return CompletionRequest {
                context: CompletionContext::PseudoClass,
                prefix: name.to_string(),
                replace: Span::new(name_start - 1, offset),
            };
        }
    }

    ast_context(sheet, source, offset, name_start)
}

fn ast_context(sheet: &Stylesheet, source: &str, offset: usize, name_start: usize) -> CompletionRequest {
    let before = &source[..offset];
    let name_request = |context| CompletionRequest {
        context,
        prefix: before[name_start..].to_string(),
        replace: Span::new(name_start, offset),
    };

    let path = path_at(sheet, offset);
    for node in path.iter().rev() {
        match node {
            NodeRef::Declaration(decl) if decl.semicolon && offset >= decl.span.end => {}
            NodeRef::Declaration(decl) if offset > decl.property.end => {
                return value_request(before, decl.name().to_string());
            }
            NodeRef::Declaration(_) => return name_request(CompletionContext::Property),
            NodeRef::Comment(_) => {
                return CompletionRequest {
                    context: CompletionContext::None,
                    prefix: String::new(),
                    replace: Span::single(offset),
                };
            }
            NodeRef::Ruleset(rule) if is_closed(source, rule.span) && offset >= rule.span.end => {}
            NodeRef::Ruleset(rule) => {
                if offset <= rule.block.start {
                    return name_request(CompletionContext::Selector);
                }
                if let Some(property) = pending_property(source, rule.block.start + 1, offset) {
                    return value_request(before, property);
                }
                return name_request(CompletionContext::Property);
            }
            NodeRef::AtRule(at) if offset >= at.span.end && at.span.text(source).ends_with(['}', ';']) => {}
            NodeRef::AtRule(at) => {
                let Some(block) = &at.block else {
                    return name_request(CompletionContext::None);
                };
                if offset <= block.span.start {
                    return name_request(CompletionContext::None);
                }
                let lower = at.name.to_ascii_lowercase();
                if DECLARATION_BLOCK_AT_RULES.contains(&lower.as_str()) {
                    if let Some(property) = pending_property(source, block.span.start + 1, offset) {
                        return value_request(before, property);
                    }
                    return name_request(CompletionContext::Property);
                }
                return name_request(CompletionContext::Selector);
            }
            NodeRef::Stylesheet(_) => {}
        }
    }

    if name_start == offset {
        name_request(CompletionContext::TopLevel)
    } else {
        name_request(CompletionContext::Selector)
    }
}

fn is_closed(source: &str, span: Span) -> bool {
    span.text(source).ends_with('}')
}

/// The value prefix runs back to the nearest break character, leading blanks excluded,
/// so `margin: 0 au` asks for `0 au`.
fn value_request(before: &str, property: String) -> CompletionRequest {
    let brk = before.bytes().rposition(|b| VALUE_BREAKS.contains(&b)).map_or(0, |i| i + 1);
    let start = before[brk..]
        .bytes()
        .position(|b| !b.is_ascii_whitespace())
        .map_or(before.len(), |i| brk + i);
    CompletionRequest {
        context: CompletionContext::Value { property },
        prefix: before[start..].to_string(),
        replace: Span::new(start, before.len()),
    }
}

/// A `name:` typed after the last statement boundary in a block, when the parser has not
/// produced a declaration for it yet (an empty value at end of input, for example).
fn pending_property(source: &str, block_start: usize, offset: usize) -> Option<String> {
    let segment = source.get(block_start..offset)?;
    let start = segment.rfind([';', '{', '}']).map_or(0, |i| i + 1);
    let segment = &segment[start..];
    let (name, _) = segment.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || !name.bytes().all(is_name_byte) || !looks_like_property(name) {
        return None;
    }
    Some(name.to_string())
}

fn looks_like_property(name: &str) -> bool {
    name.starts_with("--") || data::is_known_property(name) || !is_element(name)
}

fn is_element(name: &str) -> bool {
    HTML_ELEMENTS.iter().any(|e| e.eq_ignore_ascii_case(name))
}

/// A single `:` at `colon` starts a pseudo-class unless it follows a property name in
/// a block.
fn is_selector_colon(before: &str, colon: usize) -> bool {
    let head = &before[..colon];
    if block_depth(head) == 0 {
        return true;
    }
    let start = head.rfind([';', '{', '}']).map_or(0, |i| i + 1);
    let segment = head[start..].trim();
    if segment.is_empty() || !segment.bytes().all(is_name_byte) {
        return true;
    }
    if segment.starts_with("--") || data::is_known_property(segment) {
        return false;
    }
    is_element(segment)
}

/// Unmatched `{` count in `text`, ignoring comments and strings.
fn block_depth(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = text[i + 2..].find("*/").map_or(bytes.len(), |p| i + 2 + p + 2);
                continue;
            }
            quote @ (b'"' | b'\'') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote && bytes[i] != b'\n' {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }
    depth
}

fn in_comment(before: &str) -> bool {
    match (before.rfind("/*"), before.rfind("*/")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

fn trailing_name_start(before: &str) -> usize {
    before
        .bytes()
        .rposition(|b| !is_name_byte(b))
        .map_or(0, |i| i + 1)
}

fn floor_char_boundary(s: &str, mut offset: usize) -> usize {
    while offset > 0 && !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Candidates for the cursor at `offset`, filtered by the typed prefix.
pub fn complete(sheet: &Stylesheet, source: &str, offset: usize, options: CompletionOptions) -> Vec<CompletionItem> {
    let request = completion_context(sheet, source, offset);
    let mut out = Collector {
        request: &request,
        options,
        items: Vec::new(),
    };

    match &request.context {
        CompletionContext::None => {}
        CompletionContext::Property => {
            for p in data::properties() {
                out.push(p.name.to_string(), CompletionKind::Property, Some(p.description), format!("{}: ", p.name), p.obsolete);
            }
        }
        CompletionContext::Value { property } => {
            let inside_var = source[..request.replace.start].to_ascii_lowercase().ends_with("var(");
            if inside_var || request.prefix.starts_with("--") {
                let locals = LocalVariables::from_sheet(sheet, source);
                let mut vars: Vec<(&str, &str)> = locals.iter().collect();
                vars.sort_unstable();
                for (name, value) in vars {
                    out.push(name.to_string(), CompletionKind::Variable, Some(value), name.to_string(), false);
                }
            } else {
                out.values(property);
            }
        }
        CompletionContext::AtRule => out.at_rules(),
        CompletionContext::PseudoClass => {
            for e in data::pseudo_classes() {
                let label = format!(":{}", e.name);
                out.push(label.clone(), CompletionKind::PseudoClass, Some(e.description), label, e.obsolete);
            }
        }
        CompletionContext::PseudoElement => {
            for e in data::pseudo_elements() {
                let label = format!("::{}", e.name);
                out.push(label.clone(), CompletionKind::PseudoElement, Some(e.description), label, e.obsolete);
            }
        }
        CompletionContext::Selector => out.elements(),
        CompletionContext::TopLevel => {
            out.elements();
            out.at_rules();
        }
    }
    out.items
}

struct Collector<'a> {
    request: &'a CompletionRequest,
    options: CompletionOptions,
    items: Vec<CompletionItem>,
}

impl Collector<'_> {
    fn push(&mut self, label: String, kind: CompletionKind, detail: Option<&str>, insert_text: String, obsolete: bool) {
        if obsolete && !self.options.show_deprecated {
            return;
        }
        let prefix = &self.request.prefix;
        if !starts_with_ignore_case(label.trim_start_matches([':', '@']), prefix) {
            return;
        }
        self.items.push(CompletionItem {
            label,
            kind,
            detail: detail.filter(|d| !d.is_empty()).map(str::to_string),
            insert_text,
            replace: self.request.replace,
            deprecated: obsolete,
        });
    }

    fn elements(&mut self) {
        for name in HTML_ELEMENTS {
            self.push(name.to_string(), CompletionKind::Element, None, name.to_string(), false);
        }
    }

    fn at_rules(&mut self) {
        for e in data::at_rules() {
            let label = format!("@{}", e.name);
            self.push(label.clone(), CompletionKind::AtRule, Some(e.description), label, e.obsolete);
        }
    }

    /// Property keywords, CSS-wide keywords, named colors for color properties, then functions.
    fn values(&mut self, property: &str) {
        let known = data::property(property).or_else(|| data::property(data::unprefixed(&property.to_ascii_lowercase())));
        if let Some(p) = known {
            for value in p.values {
                self.push(value.to_string(), CompletionKind::Keyword, None, value.to_string(), false);
            }
        }
        for keyword in GLOBAL_KEYWORDS {
            self.push(keyword.to_string(), CompletionKind::Keyword, None, keyword.to_string(), false);
        }
        if known.is_some_and(|p| p.color) {
            for (name, _) in NAMED_COLORS {
                self.push(name.to_string(), CompletionKind::Color, None, name.to_string(), false);
            }
        }
        for f in data::functions() {
            let label = format!("{}()", f.name);
            self.push(label.clone(), CompletionKind::Function, Some(f.description), label, f.obsolete);
        }
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}
