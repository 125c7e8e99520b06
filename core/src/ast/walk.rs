use crate::{
    ast::{AtRule, Comment, Declaration, Node, Ruleset, Spanned, Stylesheet},
    token::Span,
};

/// Borrowed view of any block-level node, the unit every traversal hands out.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Stylesheet(&'a Stylesheet),
    Ruleset(&'a Ruleset),
    AtRule(&'a AtRule),
    Declaration(&'a Declaration),
    Comment(&'a Comment),
}

impl<'a> NodeRef<'a> {
    pub fn span(&self) -> Span {
        match self {
            NodeRef::Stylesheet(n) => n.span,
            NodeRef::Ruleset(n) => n.span,
            NodeRef::AtRule(n) => n.span,
            NodeRef::Declaration(n) => n.span,
            NodeRef::Comment(n) => n.span,
        }
    }

    /// Direct children, empty for leaves and for statement at-rules.
    pub fn children(&self) -> &'a [Node] {
        match self {
            NodeRef::Stylesheet(n) => &n.children,
            NodeRef::Ruleset(n) => &n.children,
            NodeRef::AtRule(n) => n.block.as_ref().map(|b| b.children.as_slice()).unwrap_or(&[]),
            NodeRef::Declaration(_) | NodeRef::Comment(_) => &[],
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Ruleset(n) => NodeRef::Ruleset(n),
            Node::AtRule(n) => NodeRef::AtRule(n),
            Node::Declaration(n) => NodeRef::Declaration(n),
            Node::Comment(n) => NodeRef::Comment(n),
        }
    }
}

/// Depth-first pre-order traversal starting at the stylesheet itself (depth 0).
/// Returning `false` from `visit` skips the children of that node.
pub fn walk<'a, F>(sheet: &'a Stylesheet, visit: &mut F)
where
    F: FnMut(NodeRef<'a>, usize) -> bool,
{
    walk_ref(NodeRef::Stylesheet(sheet), 0, visit);
}

fn walk_ref<'a, F>(node: NodeRef<'a>, depth: usize, visit: &mut F)
where
    F: FnMut(NodeRef<'a>, usize) -> bool,
{
    if !visit(node, depth) {
        return;
    }
    for child in node.children() {
        walk_ref(child.into(), depth + 1, visit);
    }
}

/// Every declaration in document order, paired with its closest enclosing ruleset.
pub fn declarations(sheet: &Stylesheet) -> Vec<(&Declaration, Option<&Ruleset>)> {
    fn collect<'a>(nodes: &'a [Node], parent: Option<&'a Ruleset>, out: &mut Vec<(&'a Declaration, Option<&'a Ruleset>)>) {
        for node in nodes {
            match node {
                Node::Declaration(d) => out.push((d, parent)),
                Node::Ruleset(r) => collect(&r.children, Some(r), out),
                Node::AtRule(a) => {
                    if let Some(block) = &a.block {
                        collect(&block.children, parent, out);
                    }
                }
                Node::Comment(_) => {}
            }
        }
    }
    let mut out = Vec::new();
    collect(&sheet.children, None, &mut out);
    out
}

/// Nodes whose span contains `offset`, outermost (the stylesheet) first.
pub fn path_at(sheet: &Stylesheet, offset: usize) -> Vec<NodeRef<'_>> {
    let mut path = vec![NodeRef::Stylesheet(sheet)];
    let mut current: &[Node] = &sheet.children;
    loop {
        // Adjacent nodes can share a boundary offset; the later one wins so a cursor
        // at the start of a node resolves to it.
        let Some(next) = current.iter().rev().find(|n| n.span().contains(offset)) else {
            break;
        };
        let node = NodeRef::from(next);
        path.push(node);
        current = node.children();
    }
    path
}

/// Innermost node containing `offset`.
pub fn node_at(sheet: &Stylesheet, offset: usize) -> NodeRef<'_> {
    path_at(sheet, offset).pop().unwrap_or(NodeRef::Stylesheet(sheet))
}
