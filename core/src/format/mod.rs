//! Stylesheet pretty printer.


use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    ast::{AtRule, Declaration, Node, Ruleset, Selector, SelectorList, SelectorPart, Spanned, Stylesheet},
    token::{Token, TokenKind},
};

/// Layout of rulesets and block at-rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    /// One declaration per line.
    #[default]
    Expanded,
    /// `selector { a; b; }` on one line when it fits the print width.
    Compact,
    /// Single-line when the original block was written on one line.
    Preserve,
    /// Same as `Preserve`.
    Detect,
}

impl FormatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatMode::Expanded => "expanded",
            FormatMode::Compact => "compact",
            FormatMode::Preserve => "preserve",
            FormatMode::Detect => "detect",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "expanded" => Ok(FormatMode::Expanded),
            "compact" => Ok(FormatMode::Compact),
            "preserve" => Ok(FormatMode::Preserve),
            "detect" => Ok(FormatMode::Detect),
            other => Err(format!("unknown format mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub tab_size: u32,
    pub insert_spaces: bool,
    pub mode: FormatMode,
    pub print_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_size: 2,
            insert_spaces: true,
            mode: FormatMode::Expanded,
            print_width: 80,
        }
    }
}

/// Print `sheet` (parsed from `source`) in the requested layout. The result always ends
/// with a newline; a stylesheet with no nodes prints as a single `\n`.
pub fn format(sheet: &Stylesheet, source: &str, options: &FormatOptions) -> String {
    let indent_unit = if options.insert_spaces {
        " ".repeat(options.tab_size.clamp(1, 8) as usize)
    } else {
        "\t".to_string()
    };
    let mut printer = Printer {
        source,
        options,
        indent_unit,
        out: String::with_capacity(source.len() + 16),
    };
    printer.nodes(&sheet.children, 0);
    if !printer.out.ends_with('\n') {
        printer.out.push('\n');
    }
    printer.out
}

struct Printer<'a> {
    source: &'a str,
    options: &'a FormatOptions,
    indent_unit: String,
    out: String,
}

impl Printer<'_> {
    fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }

    fn nodes(&mut self, nodes: &[Node], depth: usize) {
        let mut prev_end: Option<usize> = None;
        for node in nodes {
            let span = node.span();
            if let Some(end) = prev_end
                && blank_line_between(self.source, end, span.start)
            {
                self.out.push('\n');
            }
            prev_end = Some(span.end);

            match node {
                Node::Ruleset(rule) => self.ruleset(rule, depth),
                Node::AtRule(at) => self.at_rule(at, depth),
                Node::Declaration(decl) => {
                    let line = format!("{}{};\n", self.indent(depth), declaration_text(decl, self.source));
                    self.out.push_str(&line);
                }
                Node::Comment(comment) => {
                    let line = format!("{}{}\n", self.indent(depth), comment.span.text(self.source));
                    self.out.push_str(&line);
                }
            }
        }
    }

    fn ruleset(&mut self, rule: &Ruleset, depth: usize) {
        let indent = self.indent(depth);
        let selectors: Vec<String> = rule.selectors.selectors.iter().map(|s| selector_text(s, self.source)).collect();
        let head = selectors.join(", ");

        if rule.is_empty() && !has_comment(&rule.children) {
            self.out.push_str(&format!("{indent}{head} {{}}\n"));
            return;
        }

        if let Some(line) = self.single_line(&head, &rule.children, rule.span.text(self.source), depth) {
            self.out.push_str(&line);
            return;
        }

        // One selector per line, continuation lines re-indented.
        let multi = selectors
            .iter()
            .map(|s| format!("{indent}{s}"))
            .collect::<Vec<_>>()
            .join(",\n");
        self.out.push_str(&format!("{multi} {{\n"));
        self.nodes(&rule.children, depth + 1);
        self.out.push_str(&format!("{indent}}}\n"));
    }

    fn at_rule(&mut self, at: &AtRule, depth: usize) {
        let indent = self.indent(depth);
        let prelude = join_tokens(&at.prelude, self.source);
        let head = if prelude.is_empty() {
            format!("@{}", at.name)
        } else {
            format!("@{} {}", at.name, prelude)
        };

        let Some(block) = &at.block else {
            self.out.push_str(&format!("{indent}{head};\n"));
            return;
        };
        if block.children.is_empty() {
            self.out.push_str(&format!("{indent}{head} {{}}\n"));
            return;
        }
        if let Some(line) = self.single_line(&head, &block.children, at.span.text(self.source), depth) {
            self.out.push_str(&line);
            return;
        }
        self.out.push_str(&format!("{indent}{head} {{\n"));
        self.nodes(&block.children, depth + 1);
        self.out.push_str(&format!("{indent}}}\n"));
    }

    /// The `head { a; b; }` rendering when the mode allows it for this block. Only
    /// blocks holding nothing but declarations qualify.
    fn single_line(&self, head: &str, children: &[Node], original: &str, depth: usize) -> Option<String> {
        let mut decls = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Node::Declaration(d) => decls.push(declaration_text(d, self.source)),
                _ => return None,
            }
        }
        let indent = self.indent(depth);
        let line = format!("{indent}{head} {{ {}; }}", decls.join("; "));
        let allowed = match self.options.mode {
            FormatMode::Expanded => false,
            FormatMode::Compact => {
                let width = self.options.print_width;
                display_width(&line) <= width && display_width(&indent) + display_width(head) <= width
            }
            FormatMode::Preserve | FormatMode::Detect => !original.contains('\n'),
        };
        allowed.then(|| line + "\n")
    }
}

fn has_comment(nodes: &[Node]) -> bool {
    nodes.iter().any(|n| matches!(n, Node::Comment(_)))
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c == '\t' { 4 } else { 1 }).sum()
}

/// Two or more line breaks in the gap between sibling nodes.
fn blank_line_between(source: &str, end: usize, start: usize) -> bool {
    source
        .get(end..start)
        .is_some_and(|gap| gap.bytes().filter(|b| *b == b'\n').count() >= 2)
}

pub fn declaration_text(decl: &Declaration, source: &str) -> String {
    let value = decl
        .value
        .as_ref()
        .map(|v| join_tokens(&v.tokens, source))
        .unwrap_or_default();
    let mut text = format!("{}: {}", decl.name(), value);
    if decl.important {
        if !value.is_empty() {
            text.push(' ');
        }
        text.push_str("!important");
    }
    text
}

pub fn selector_list_text(list: &SelectorList, source: &str) -> String {
    list.selectors
        .iter()
        .map(|s| selector_text(s, source))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalized selector: compounds joined by ` ` or ` > `, ` + `, ` ~ `. A leading
/// combinator of a nested relative selector prints as `> .b`.
pub fn selector_text(selector: &Selector, source: &str) -> String {
    let mut out = String::new();
    for part in &selector.parts {
        match part {
            SelectorPart::Compound { tokens, .. } => out.push_str(&join_tokens(tokens, source)),
            SelectorPart::Combinator { kind, .. } => match kind.as_str() {
                " " => out.push(' '),
                op => {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(op);
                    out.push(' ');
                }
            },
        }
    }
    out
}

/// Source text of `tokens` with every whitespace gap collapsed to one space. No space
/// is kept right before a closing parenthesis.
pub fn join_tokens(tokens: &[Token], source: &str) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;
    for tok in tokens {
        if tok.kind == TokenKind::Whitespace {
            continue;
        }
        if let Some(p) = prev
            && tok.start > p.end
            && tok.kind != TokenKind::RParen
        {
            out.push(' ');
        }
        out.push_str(tok.text(source));
        prev = Some(tok);
    }
    out
}
