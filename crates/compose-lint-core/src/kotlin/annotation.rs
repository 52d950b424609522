//! Annotations on declarations and files.

use crate::syntax::{kinds, Node};

/// An `annotation` or `file_annotation` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Annotation<'t> {
    node: Node<'t>,
}

impl<'t> Annotation<'t> {
    /// Wraps an annotation node.
    #[must_use]
    pub fn from_node(node: Node<'t>) -> Option<Self> {
        matches!(node.kind(), kinds::ANNOTATION | kinds::FILE_ANNOTATION).then_some(Self { node })
    }

    /// The underlying node.
    #[must_use]
    pub fn node(&self) -> Node<'t> {
        self.node
    }

    fn invocation(&self) -> Option<Node<'t>> {
        self.node.first_child_of_kind(kinds::CONSTRUCTOR_INVOCATION)
    }

    fn type_node(&self) -> Option<Node<'t>> {
        self.node
            .first_child_of_kind(kinds::USER_TYPE)
            .or_else(|| self.invocation()?.first_child_of_kind(kinds::USER_TYPE))
    }

    /// Short name of the annotation class (`@androidx.compose.runtime.Composable` -> `Composable`).
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        self.type_node()?
            .children_of_kind(kinds::IDENTIFIER)
            .last()
            .map(|id| id.original_text())
    }

    /// String literal arguments, in order (`@Suppress("A", "B")` -> `["A", "B"]`).
    #[must_use]
    pub fn string_arguments(&self) -> Vec<String> {
        let Some(arguments) = self
            .invocation()
            .and_then(|inv| inv.first_child_of_kind(kinds::VALUE_ARGUMENTS))
        else {
            return Vec::new();
        };
        arguments
            .find_descendants(kinds::STRING_LITERAL)
            .map(|literal| {
                literal
                    .children_of_kind(kinds::STRING_CONTENT)
                    .map(|content| content.original_text())
                    .collect::<String>()
            })
            .collect()
    }
}

/// Annotations in a declaration's `modifiers` block.
#[must_use]
pub fn annotations_of(declaration: Node<'_>) -> Vec<Annotation<'_>> {
    declaration
        .first_child_of_kind(kinds::MODIFIERS)
        .map(|modifiers| {
            modifiers
                .children_of_kind(kinds::ANNOTATION)
                .filter_map(Annotation::from_node)
                .collect()
        })
        .unwrap_or_default()
}

/// `@file:` annotations at the top of a source file.
#[must_use]
pub fn file_annotations(root: Node<'_>) -> Vec<Annotation<'_>> {
    root.children_of_kind(kinds::FILE_ANNOTATION)
        .filter_map(Annotation::from_node)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTree;

    #[test]
    fn reads_names_and_string_arguments() {
        let tree = SyntaxTree::parse(
            "@Suppress(\"ModifierMissing\", \"other\")\n@androidx.compose.runtime.Composable\nfun A() {}\n",
        )
        .expect("parse");
        let function = tree
            .root()
            .find_descendant(kinds::FUNCTION_DECLARATION)
            .expect("function");
        let annotations = annotations_of(function);
        let names: Vec<_> = annotations.iter().filter_map(Annotation::name).collect();
        assert_eq!(names, vec!["Suppress", "Composable"]);
        assert_eq!(
            annotations[0].string_arguments(),
            vec!["ModifierMissing".to_owned(), "other".to_owned()]
        );
        assert!(annotations[1].string_arguments().is_empty());
    }

    #[test]
    fn reads_file_annotations() {
        let tree = SyntaxTree::parse("@file:Suppress(\"compose:modifier-missing-check\")\npackage a\n")
            .expect("parse");
        let annotations = file_annotations(tree.root());
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].name(), Some("Suppress"));
        assert_eq!(
            annotations[0].string_arguments(),
            vec!["compose:modifier-missing-check".to_owned()]
        );
    }
}
