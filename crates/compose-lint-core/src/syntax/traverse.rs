//! Generic tree-search primitives.
//!
//! Every search returns a fresh iterator, so a search can be restarted simply
//! by calling it again; no iteration state is shared between calls.

use std::collections::VecDeque;

use super::Node;

impl<'t> Node<'t> {
    /// All nodes below this one in breadth-first order (excluding `self`).
    #[must_use]
    pub fn descendants(&self) -> Descendants<'t> {
        let mut queue = VecDeque::new();
        queue.extend(self.children());
        Descendants { queue }
    }

    /// All descendants of the given kind, breadth-first.
    pub fn find_descendants(&self, kind: &'static str) -> impl Iterator<Item = Node<'t>> {
        self.descendants().filter(move |node| node.kind() == kind)
    }

    /// First descendant of the given kind in breadth-first order.
    #[must_use]
    pub fn find_descendant(&self, kind: &'static str) -> Option<Node<'t>> {
        self.find_descendants(kind).next()
    }

    /// Direct children of the given kind, in source order.
    pub fn children_of_kind(&self, kind: &'static str) -> impl DoubleEndedIterator<Item = Node<'t>> {
        self.children().filter(move |child| child.kind() == kind)
    }

    /// First direct child of the given kind.
    #[must_use]
    pub fn first_child_of_kind(&self, kind: &'static str) -> Option<Node<'t>> {
        self.children_of_kind(kind).next()
    }

    /// Ancestors from the parent up to the root.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'t> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Nearest ancestor of the given kind.
    #[must_use]
    pub fn first_ancestor_of_kind(&self, kind: &'static str) -> Option<Node<'t>> {
        self.ancestors().find(|node| node.kind() == kind)
    }

    /// Walks backwards through the source from this node.
    ///
    /// Yields the preceding siblings (nearest first), then the parent, then
    /// the parent's preceding siblings, and so on up the tree. The walk ends
    /// before reaching `stop` (or at the root when `stop` is `None`).
    #[must_use]
    pub fn walk_backwards(&self, stop: Option<Node<'t>>) -> WalkBackwards<'t> {
        WalkBackwards {
            current: Some(*self),
            pending: self.prev_sibling(),
            stop,
        }
    }
}

/// Breadth-first iterator over a subtree. See [`Node::descendants`].
pub struct Descendants<'t> {
    queue: VecDeque<Node<'t>>,
}

impl<'t> Iterator for Descendants<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

/// Iterator over a node's ancestors. See [`Node::ancestors`].
pub struct Ancestors<'t> {
    next: Option<Node<'t>>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}

/// Reverse-document-order walk. See [`Node::walk_backwards`].
pub struct WalkBackwards<'t> {
    current: Option<Node<'t>>,
    pending: Option<Node<'t>>,
    stop: Option<Node<'t>>,
}

impl<'t> Iterator for WalkBackwards<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(sibling) = self.pending.take() {
            self.pending = sibling.prev_sibling();
            return Some(sibling);
        }

        let parent = self.current?.parent();
        match parent {
            Some(parent) if Some(parent) != self.stop => {
                self.current = Some(parent);
                self.pending = parent.prev_sibling();
                Some(parent)
            }
            _ => {
                self.current = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax::{kinds, SyntaxTree};

    const SOURCE: &str = r"
fun outer() {
    val first = 1
    Row {
        val second = 2
        Text(second)
    }
}
";

    #[test]
    fn descendants_are_breadth_first_and_restartable() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let root = tree.root();

        let names: Vec<String> = root
            .find_descendants(kinds::VARIABLE_DECLARATION)
            .map(|n| n.text().into_owned())
            .collect();
        assert_eq!(names, vec!["first", "second"]);

        let again = root.find_descendants(kinds::VARIABLE_DECLARATION).count();
        assert_eq!(again, 2);
    }

    #[test]
    fn children_of_kind_only_looks_one_level_down() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let block = tree.root().find_descendant(kinds::BLOCK).expect("block");
        assert_eq!(block.children_of_kind(kinds::PROPERTY_DECLARATION).count(), 1);
        assert_eq!(block.find_descendants(kinds::PROPERTY_DECLARATION).count(), 2);
    }

    #[test]
    fn ancestors_reach_the_root() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let text_call = tree
            .root()
            .find_descendants(kinds::CALL_EXPRESSION)
            .find(|n| n.text().starts_with("Text"))
            .expect("Text call");
        let function = text_call
            .first_ancestor_of_kind(kinds::FUNCTION_DECLARATION)
            .expect("enclosing function");
        assert!(function.text().starts_with("fun outer"));
        assert_eq!(text_call.ancestors().last(), Some(tree.root()));
    }

    #[test]
    fn walk_backwards_visits_earlier_declarations_and_stops() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let root = tree.root();
        let function = root.find_descendant(kinds::FUNCTION_DECLARATION).expect("fn");
        let text_call = root
            .find_descendants(kinds::CALL_EXPRESSION)
            .find(|n| n.text().starts_with("Text"))
            .expect("Text call");

        let seen: Vec<String> = text_call
            .walk_backwards(Some(function))
            .filter(|n| n.kind() == kinds::PROPERTY_DECLARATION)
            .map(|n| n.text().into_owned())
            .collect();
        assert_eq!(seen, vec!["val second = 2", "val first = 1"]);

        assert!(text_call
            .walk_backwards(Some(function))
            .all(|n| n != function && !n.is_ancestor_of(function)));
    }
}
