//! Owned Kotlin syntax tree built from a tree-sitter parse.
//!
//! The tree-sitter tree is copied into an arena once per file so that rules
//! can hold cheap [`Node`] handles with parent back-references, and so the
//! one sanctioned rewrite primitive ([`Node::replace_text`]) can be applied
//! while other handles into the same tree are alive.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;
use tree_sitter::Parser;

pub mod kinds;
mod traverse;

pub use traverse::{Ancestors, Descendants, WalkBackwards};

/// Errors produced while turning source text into a [`SyntaxTree`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The Kotlin grammar could not be loaded into the parser.
    #[error("failed to load kotlin grammar: {0}")]
    Language(String),

    /// tree-sitter returned no tree (cancelled or timed out).
    #[error("parser produced no tree")]
    NoTree,
}

/// Index of a node inside its [`SyntaxTree`].
///
/// Ids are assigned in pre-order, so every descendant of a node has an id
/// between the node's own id and its last descendant's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
struct NodeData {
    kind: &'static str,
    named: bool,
    extra: bool,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
    parent: Option<NodeId>,
    index: usize,
    last_descendant: usize,
    children: Vec<NodeId>,
}

/// A parsed Kotlin file.
pub struct SyntaxTree {
    source: String,
    nodes: Vec<NodeData>,
    has_errors: bool,
    rewrites: RefCell<HashMap<NodeId, String>>,
}

/// Opening of the class used to re-parse misread top-level declarations.
const RECOVERY_OPEN: &str = "class Recovered {";
const RECOVERY_CLOSE: &str = "\n}";

/// Maps byte offsets of a parse onto the original source.
struct Placement<'a> {
    line_starts: &'a [usize],
    from: usize,
    to: usize,
}

impl Placement<'_> {
    fn byte(&self, parsed: usize) -> usize {
        parsed - self.from + self.to
    }

    /// 1-indexed line and byte column of an original offset.
    fn position(&self, byte: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= byte);
        let line_start = self.line_starts[line.saturating_sub(1)];
        (line, byte - line_start + 1)
    }
}

impl SyntaxTree {
    /// Parses Kotlin source into an owned tree.
    ///
    /// Grammar errors never fail the parse; check [`SyntaxTree::has_errors`].
    ///
    /// Top-level declarations that the grammar reads as expression
    /// statements (an annotated `public fun` becoming an infix call, or
    /// `@Suppress("X")` splitting into an annotation and a parenthesized
    /// expression) are re-parsed as class members and spliced back at their
    /// original offsets.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser gives up.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language: tree_sitter::Language = tree_sitter_kotlin_ng::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let ts_tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
        let root = ts_tree.root_node();

        let mut tree = Self {
            source: source.to_owned(),
            nodes: Vec::new(),
            has_errors: root.has_error(),
            rewrites: RefCell::new(HashMap::new()),
        };
        let line_starts: Vec<usize> = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        let placement = Placement {
            line_starts: &line_starts,
            from: 0,
            to: 0,
        };
        tree.copy_source_file(&mut parser, root, &placement);
        Ok(tree)
    }

    fn copy_source_file(
        &mut self,
        parser: &mut Parser,
        root: tree_sitter::Node<'_>,
        placement: &Placement<'_>,
    ) {
        let id = self.push_node(root, None, 0, placement);
        let mut cursor = root.walk();
        let top_level: Vec<tree_sitter::Node<'_>> = root.children(&mut cursor).collect();

        let mut child_ids = Vec::with_capacity(top_level.len());
        let mut i = 0;
        while i < top_level.len() {
            let node = top_level[i];
            if !is_misread_declaration(node, &self.source) {
                child_ids.push(self.copy_node(node, Some(id), child_ids.len(), placement));
                i += 1;
                continue;
            }

            let end = misread_run_end(&top_level, i, &self.source);
            let start_byte = node.start_byte();
            let end_byte = top_level[end - 1].end_byte();
            let segment = self.source[start_byte..end_byte].to_owned();
            let wrapped = format!("{RECOVERY_OPEN}{segment}{RECOVERY_CLOSE}");
            let recovered = parser.parse(&wrapped, None);

            match recovered.as_ref().and_then(|t| recovered_members(t, segment.len())) {
                Some(members) => {
                    tracing::debug!(
                        "Recovered declarations misread as expressions at line {}",
                        node.start_position().row + 1
                    );
                    let shifted = Placement {
                        line_starts: placement.line_starts,
                        from: RECOVERY_OPEN.len(),
                        to: start_byte,
                    };
                    for member in members {
                        child_ids.push(self.copy_node(member, Some(id), child_ids.len(), &shifted));
                    }
                }
                None => {
                    tracing::warn!(
                        "Top-level statement at line {} could not be read as a declaration",
                        node.start_position().row + 1
                    );
                    for &original in &top_level[i..end] {
                        child_ids.push(self.copy_node(original, Some(id), child_ids.len(), placement));
                    }
                }
            }
            i = end;
        }

        let last = self.nodes.len() - 1;
        let data = &mut self.nodes[id.0];
        data.children = child_ids;
        data.last_descendant = last;
    }

    fn push_node(
        &mut self,
        node: tree_sitter::Node<'_>,
        parent: Option<NodeId>,
        index: usize,
        placement: &Placement<'_>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let start = placement.byte(node.start_byte());
        let (line, column) = placement.position(start);
        self.nodes.push(NodeData {
            kind: node.kind(),
            named: node.is_named(),
            extra: node.is_extra(),
            start,
            end: placement.byte(node.end_byte()),
            line,
            column,
            parent,
            index,
            last_descendant: id.0,
            children: Vec::new(),
        });
        id
    }

    fn copy_node(
        &mut self,
        node: tree_sitter::Node<'_>,
        parent: Option<NodeId>,
        index: usize,
        placement: &Placement<'_>,
    ) -> NodeId {
        let id = self.push_node(node, parent, index, placement);

        let mut cursor = node.walk();
        let children: Vec<tree_sitter::Node<'_>> = node.children(&mut cursor).collect();
        let mut child_ids = Vec::with_capacity(children.len());
        for (i, child) in children.into_iter().enumerate() {
            child_ids.push(self.copy_node(child, Some(id), i, placement));
        }

        let last = self.nodes.len() - 1;
        let data = &mut self.nodes[id.0];
        data.children = child_ids;
        data.last_descendant = last;
        id
    }

    /// Returns the root (`source_file`) node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Returns a handle for a previously obtained id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// The original, unmodified source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the parser had to recover from syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Number of nodes (named and anonymous) in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether any node text has been replaced.
    #[must_use]
    pub fn has_rewrites(&self) -> bool {
        !self.rewrites.borrow().is_empty()
    }

    /// Renders the whole file with every rewrite applied.
    #[must_use]
    pub fn render(&self) -> String {
        let rewrites = self.rewrites.borrow();
        if rewrites.is_empty() {
            return self.source.clone();
        }
        let root = &self.nodes[0];
        let mut out = String::with_capacity(self.source.len());
        out.push_str(&self.source[..root.start]);
        self.render_into(NodeId(0), &rewrites, &mut out);
        out.push_str(&self.source[root.end..]);
        out
    }

    fn render_into(&self, id: NodeId, rewrites: &HashMap<NodeId, String>, out: &mut String) {
        if let Some(text) = rewrites.get(&id) {
            out.push_str(text);
            return;
        }
        let data = &self.nodes[id.0];
        let mut cursor = data.start;
        for &child in &data.children {
            let child_data = &self.nodes[child.0];
            if child_data.start > cursor {
                out.push_str(&self.source[cursor..child_data.start]);
            }
            self.render_into(child, rewrites, out);
            cursor = cursor.max(child_data.end);
        }
        if data.end > cursor {
            out.push_str(&self.source[cursor..data.end]);
        }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("nodes", &self.nodes.len())
            .field("has_errors", &self.has_errors)
            .field("rewrites", &self.rewrites.borrow().len())
            .finish()
    }
}

/// Words that can open a declaration but also read as plain identifiers.
const DECLARATION_MODIFIERS: &[&str] = &[
    "public", "private", "protected", "internal", "abstract", "final", "open", "override",
    "sealed", "data", "enum", "inline", "value", "suspend", "tailrec", "operator", "infix",
    "external", "expect", "actual", "const", "lateinit",
];

/// A top-level expression statement that is really a declaration.
fn is_misread_declaration(node: tree_sitter::Node<'_>, source: &str) -> bool {
    if node.kind() == kinds::ANNOTATED_EXPRESSION {
        return true;
    }
    if !node.is_named() || node.is_extra() || is_declaration(node) {
        return false;
    }
    if matches!(
        node.kind(),
        kinds::PACKAGE_HEADER | kinds::IMPORT | kinds::FILE_ANNOTATION
    ) {
        return false;
    }
    let mut leaf = node;
    while let Some(child) = leaf.child(0) {
        leaf = child;
    }
    source
        .get(leaf.start_byte()..leaf.end_byte())
        .is_some_and(|word| DECLARATION_MODIFIERS.contains(&word))
}

/// End (exclusive) of the run of misread statements starting at `start`,
/// including the declaration a trailing detached annotation belongs to.
fn misread_run_end(top_level: &[tree_sitter::Node<'_>], start: usize, source: &str) -> usize {
    let mut end = start;
    while end < top_level.len()
        && (is_misread_declaration(top_level[end], source) || top_level[end].is_extra())
    {
        end += 1;
    }
    while end > start + 1 && top_level[end - 1].is_extra() {
        end -= 1;
    }
    let next = top_level[end..]
        .iter()
        .position(|node| !node.is_extra())
        .map(|offset| end + offset);
    match next {
        Some(index) if is_declaration(top_level[index]) => index + 1,
        _ => end,
    }
}

fn is_declaration(node: tree_sitter::Node<'_>) -> bool {
    matches!(
        node.kind(),
        kinds::FUNCTION_DECLARATION
            | kinds::CLASS_DECLARATION
            | kinds::OBJECT_DECLARATION
            | kinds::PROPERTY_DECLARATION
            | kinds::TYPE_ALIAS
    )
}

/// Members of the recovery class, or `None` if the segment does not read
/// cleanly as declarations.
fn recovered_members(tree: &tree_sitter::Tree, segment_len: usize) -> Option<Vec<tree_sitter::Node<'_>>> {
    let root = tree.root_node();
    if root.has_error() {
        return None;
    }
    let mut cursor = root.walk();
    let class = root
        .children(&mut cursor)
        .find(|node| node.kind() == kinds::CLASS_DECLARATION)?;
    let mut cursor = class.walk();
    let body = class
        .children(&mut cursor)
        .find(|node| node.kind() == kinds::CLASS_BODY)?;

    let range = RECOVERY_OPEN.len()..=RECOVERY_OPEN.len() + segment_len;
    let mut cursor = body.walk();
    let members: Vec<tree_sitter::Node<'_>> = body
        .children(&mut cursor)
        .filter(|node| range.contains(&node.start_byte()) && range.contains(&node.end_byte()))
        .collect();
    (!members.is_empty()).then_some(members)
}

/// A cheap, copyable handle to one node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    /// The node's id within its tree.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    #[must_use]
    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    /// Grammar kind, e.g. `function_declaration` or `(` for anonymous tokens.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.tree.data(self.id).kind
    }

    /// Whether this is a named grammar node rather than a literal token.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.tree.data(self.id).named
    }

    /// Whether this node is an extra (comments and the like).
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.tree.data(self.id).extra
    }

    /// Whether this node is a line or block comment.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        matches!(self.kind(), kinds::LINE_COMMENT | kinds::BLOCK_COMMENT)
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Node<'t>> {
        self.tree.data(self.id).parent.map(|id| self.with_id(id))
    }

    /// All children in source order, anonymous tokens included.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Node<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    /// Named, non-comment children in source order.
    pub fn named_children(&self) -> impl DoubleEndedIterator<Item = Node<'t>> + 't {
        self.children()
            .filter(|child| child.is_named() && !child.is_comment())
    }

    /// First named, non-comment child.
    #[must_use]
    pub fn first_named_child(&self) -> Option<Node<'t>> {
        self.named_children().next()
    }

    /// Number of children, anonymous tokens included.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.tree.data(self.id).children.len()
    }

    /// Sibling immediately before this node.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<Node<'t>> {
        let data = self.tree.data(self.id);
        let parent = self.tree.data(data.parent?);
        let index = data.index.checked_sub(1)?;
        parent.children.get(index).map(|&id| self.with_id(id))
    }

    /// Sibling immediately after this node.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Node<'t>> {
        let data = self.tree.data(self.id);
        let parent = self.tree.data(data.parent?);
        parent.children.get(data.index + 1).map(|&id| self.with_id(id))
    }

    /// Next named, non-comment sibling.
    #[must_use]
    pub fn next_named_sibling(&self) -> Option<Node<'t>> {
        let mut current = self.next_sibling();
        while let Some(node) = current {
            if node.is_named() && !node.is_comment() {
                return Some(node);
            }
            current = node.next_sibling();
        }
        None
    }

    /// Source text exactly as parsed, ignoring rewrites.
    #[must_use]
    pub fn original_text(&self) -> &'t str {
        let data = self.tree.data(self.id);
        &self.tree.source[data.start..data.end]
    }

    /// Current text of the node, reflecting any rewrite in its subtree.
    #[must_use]
    pub fn text(&self) -> Cow<'t, str> {
        let rewrites = self.tree.rewrites.borrow();
        if !rewrites.keys().any(|&id| self.contains(id)) {
            return Cow::Borrowed(self.original_text());
        }
        let mut out = String::new();
        self.tree.render_into(self.id, &rewrites, &mut out);
        Cow::Owned(out)
    }

    /// Replaces the text of this node.
    ///
    /// This is the only mutation the framework offers. The new text is
    /// visible immediately through [`Node::text`] on this node and its
    /// ancestors, and through [`SyntaxTree::render`]. The node's children are
    /// left untouched, so structural queries still see the original shape.
    pub fn replace_text(&self, text: impl Into<String>) {
        self.tree.rewrites.borrow_mut().insert(self.id, text.into());
    }

    /// 1-indexed line of the node's first byte.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tree.data(self.id).line
    }

    /// 1-indexed column (in bytes) of the node's first byte.
    #[must_use]
    pub fn column(&self) -> usize {
        self.tree.data(self.id).column
    }

    /// Byte offset of the node start.
    #[must_use]
    pub fn start_byte(&self) -> usize {
        self.tree.data(self.id).start
    }

    /// Byte offset one past the node end.
    #[must_use]
    pub fn end_byte(&self) -> usize {
        self.tree.data(self.id).end
    }

    /// Whether `other` lies strictly inside this node's subtree.
    #[must_use]
    pub fn is_ancestor_of(&self, other: Node<'_>) -> bool {
        other.id != self.id && self.contains(other.id)
    }

    fn contains(&self, id: NodeId) -> bool {
        let data = self.tree.data(self.id);
        id.0 >= self.id.0 && id.0 <= data.last_descendant
    }

    fn with_id(&self, id: NodeId) -> Node<'t> {
        Node {
            tree: self.tree,
            id,
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.kind(), self.line(), self.column())
    }
}
