use serde::Serialize;
use tracing::trace;

use crate::{
    ast::{NodeRef, Stylesheet, walk},
    token::{Span, offset_to_position},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FoldingKind {
    Comment,
    Region,
}

/// Zero-based inclusive line range. `kind` is `None` for blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FoldingRange {
    pub start_line: u32,
    pub end_line: u32,
    pub kind: Option<FoldingKind>,
}

enum Marker {
    Start,
    End,
}

fn region_marker(comment: &str) -> Option<Marker> {
    let body = comment.strip_prefix("/*")?.trim_start();
    if body.starts_with("#endregion") {
        Some(Marker::End)
    } else if body.starts_with("#region") {
        Some(Marker::Start)
    } else {
        None
    }
}

/// Multi-line blocks fold from the `{` line to the line before `}`; multi-line comments
/// fold whole; `/* #region */` markers pair up into regions.
pub fn folding_ranges(sheet: &Stylesheet, source: &str) -> Vec<FoldingRange> {
    let line = |offset: usize| offset_to_position(source, offset).line;
    let mut out = Vec::new();
    let mut regions: Vec<u32> = Vec::new();

    let block = |span: Span, out: &mut Vec<FoldingRange>| {
        let start_line = line(span.start);
        let closed = span.text(source).ends_with('}');
        let end_line = if closed {
            line(span.end.saturating_sub(1)).saturating_sub(1)
        } else {
            line(span.end)
        };
        if end_line > start_line {
            out.push(FoldingRange {
                start_line,
                end_line,
                kind: None,
            });
        }
    };

    walk(sheet, &mut |node, _| {
        match node {
            NodeRef::Ruleset(rule) => block(rule.block, &mut out),
            NodeRef::AtRule(at) => {
                if let Some(b) = &at.block {
                    block(b.span, &mut out);
                }
            }
            NodeRef::Comment(comment) => {
                let text = comment.span.text(source);
                match region_marker(text) {
                    Some(Marker::Start) => regions.push(line(comment.span.start)),
                    Some(Marker::End) => match regions.pop() {
                        Some(start_line) => out.push(FoldingRange {
                            start_line,
                            end_line: line(comment.span.start),
                            kind: Some(FoldingKind::Region),
                        }),
                        None => trace!(offset = comment.span.start, "unmatched #endregion"),
                    },
                    None => {
                        let (start_line, end_line) = (line(comment.span.start), line(comment.span.end));
                        if end_line > start_line {
                            out.push(FoldingRange {
                                start_line,
                                end_line,
                                kind: Some(FoldingKind::Comment),
                            });
                        }
                    }
                }
            }
            NodeRef::Stylesheet(_) | NodeRef::Declaration(_) => {}
        }
        true
    });

    out.sort_by_key(|r| (r.start_line, r.end_line));
    out
}
