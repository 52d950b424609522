//! Call expressions.
//!
//! `Row(modifier) { ... }` parses as two nested `call_expression` nodes: the
//! inner one carries the value arguments, the outer one the trailing lambda.
//! [`Call`] folds both halves into one view anchored on the outer node and
//! refuses to wrap the inner half, so every source-level call is seen once.

use super::is_token;
use crate::syntax::{kinds, Node};

/// A function call, with a trailing lambda folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Call<'t> {
    node: Node<'t>,
    callee: Node<'t>,
    arguments: Option<Node<'t>>,
    trailing: Option<Node<'t>>,
}

fn is_lambda_half(node: Node<'_>) -> bool {
    node.kind() == kinds::CALL_EXPRESSION
        && node.first_child_of_kind(kinds::ANNOTATED_LAMBDA).is_some()
        && node.first_child_of_kind(kinds::VALUE_ARGUMENTS).is_none()
        && node
            .first_named_child()
            .is_some_and(|head| head.kind() == kinds::CALL_EXPRESSION)
}

impl<'t> Call<'t> {
    /// Wraps a `call_expression`, or returns `None` for the inner half of a
    /// trailing-lambda call.
    #[must_use]
    pub fn from_node(node: Node<'t>) -> Option<Self> {
        if node.kind() != kinds::CALL_EXPRESSION {
            return None;
        }
        if let Some(parent) = node.parent() {
            if is_lambda_half(parent) && parent.first_named_child() == Some(node) {
                return None;
            }
        }

        let trailing = node.first_child_of_kind(kinds::ANNOTATED_LAMBDA);
        let head = if is_lambda_half(node) {
            node.first_named_child()?
        } else {
            node
        };
        Some(Self {
            node,
            callee: head.first_named_child()?,
            arguments: head.first_child_of_kind(kinds::VALUE_ARGUMENTS),
            trailing,
        })
    }

    /// The outermost `call_expression` node.
    #[must_use]
    pub fn node(&self) -> Node<'t> {
        self.node
    }

    /// The expression being called (`foo` or `a.b.foo`).
    #[must_use]
    pub fn callee(&self) -> Node<'t> {
        self.callee
    }

    /// Simple name of the called function (`a.b.foo(...)` -> `foo`).
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        match self.callee.kind() {
            kinds::IDENTIFIER => Some(self.callee.original_text()),
            kinds::NAVIGATION_EXPRESSION => self
                .callee
                .children_of_kind(kinds::IDENTIFIER)
                .last()
                .map(|id| id.original_text()),
            _ => None,
        }
    }

    /// Receiver of a method call (`a.b.foo()` -> `a.b`).
    #[must_use]
    pub fn receiver(&self) -> Option<Node<'t>> {
        (self.callee.kind() == kinds::NAVIGATION_EXPRESSION)
            .then(|| self.callee.first_named_child())
            .flatten()
    }

    /// The parenthesised `value_arguments` node.
    #[must_use]
    pub fn value_arguments(&self) -> Option<Node<'t>> {
        self.arguments
    }

    /// Arguments inside the parentheses, in order.
    #[must_use]
    pub fn arguments(&self) -> Vec<Argument<'t>> {
        self.arguments
            .map(|args| {
                args.children_of_kind(kinds::VALUE_ARGUMENT)
                    .map(|node| Argument { node })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The argument passed under this name.
    #[must_use]
    pub fn argument_named(&self, name: &str) -> Option<Argument<'t>> {
        self.arguments()
            .into_iter()
            .find(|arg| arg.name() == Some(name))
    }

    /// The trailing lambda's `lambda_literal`.
    #[must_use]
    pub fn trailing_lambda(&self) -> Option<Node<'t>> {
        self.trailing?.first_child_of_kind(kinds::LAMBDA_LITERAL)
    }

    /// Every lambda literal passed to the call, trailing lambda last.
    #[must_use]
    pub fn lambda_arguments(&self) -> Vec<Node<'t>> {
        let mut lambdas: Vec<Node<'t>> = self
            .arguments()
            .iter()
            .filter_map(Argument::expression)
            .filter(|expr| expr.kind() == kinds::LAMBDA_LITERAL)
            .collect();
        lambdas.extend(self.trailing_lambda());
        lambdas
    }
}

/// A `value_argument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argument<'t> {
    node: Node<'t>,
}

impl<'t> Argument<'t> {
    /// The underlying node.
    #[must_use]
    pub fn node(&self) -> Node<'t> {
        self.node
    }

    /// Name of a named argument (`modifier = ...` -> `modifier`).
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        if !self.node.children().any(|c| is_token(c, "=")) {
            return None;
        }
        self.node
            .first_child_of_kind(kinds::IDENTIFIER)
            .map(|id| id.original_text())
    }

    /// The argument's value expression.
    #[must_use]
    pub fn expression(&self) -> Option<Node<'t>> {
        self.node.named_children().last()
    }
}

/// All calls inside `scope`, breadth-first.
pub fn calls_in<'t>(scope: Node<'t>) -> impl Iterator<Item = Call<'t>> {
    scope.descendants().filter_map(Call::from_node)
}
