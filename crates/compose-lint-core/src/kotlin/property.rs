//! Property declarations and `remember` detection.

use super::{is_token, Call};
use crate::syntax::{kinds, Node};

/// A `property_declaration` (`val`/`var`, local or member).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property<'t> {
    node: Node<'t>,
}

impl<'t> Property<'t> {
    /// Wraps a property declaration node.
    #[must_use]
    pub fn from_node(node: Node<'t>) -> Option<Self> {
        (node.kind() == kinds::PROPERTY_DECLARATION).then_some(Self { node })
    }

    /// The underlying node.
    #[must_use]
    pub fn node(&self) -> Node<'t> {
        self.node
    }

    fn variable(&self) -> Option<Node<'t>> {
        self.node.first_child_of_kind(kinds::VARIABLE_DECLARATION)
    }

    /// Declared name; `None` for destructuring declarations.
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        self.variable()?
            .first_child_of_kind(kinds::IDENTIFIER)
            .map(|id| id.original_text())
    }

    /// Names bound by a destructuring declaration.
    #[must_use]
    pub fn destructured_names(&self) -> Vec<&'t str> {
        self.node
            .first_child_of_kind(kinds::MULTI_VARIABLE_DECLARATION)
            .map(|multi| {
                multi
                    .children_of_kind(kinds::VARIABLE_DECLARATION)
                    .filter_map(|v| v.first_child_of_kind(kinds::IDENTIFIER))
                    .map(|id| id.original_text())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Explicit type annotation.
    #[must_use]
    pub fn type_node(&self) -> Option<Node<'t>> {
        self.variable()?
            .named_children()
            .find(|c| c.kind() != kinds::IDENTIFIER)
    }

    /// `var` rather than `val`.
    #[must_use]
    pub fn is_var(&self) -> bool {
        self.node.children().any(|c| is_token(c, "var"))
    }

    /// The expression after `=`.
    #[must_use]
    pub fn initializer(&self) -> Option<Node<'t>> {
        let eq = self.node.children().find(|c| is_token(*c, "="))?;
        eq.next_named_sibling()
    }

    /// The expression after `by`.
    #[must_use]
    pub fn delegate(&self) -> Option<Node<'t>> {
        self.node
            .first_child_of_kind(kinds::PROPERTY_DELEGATE)?
            .first_named_child()
    }

    /// Initializer or delegate, whichever is present.
    #[must_use]
    pub fn value(&self) -> Option<Node<'t>> {
        self.initializer().or_else(|| self.delegate())
    }
}

/// Whether `node` sits inside a `remember*` call below `boundary`.
#[must_use]
pub fn is_remembered(node: Node<'_>, boundary: Node<'_>) -> bool {
    node.ancestors()
        .take_while(|ancestor| *ancestor != boundary)
        .filter_map(Call::from_node)
        .any(|call| call.name().is_some_and(|name| name.starts_with("remember")))
}
