//! `@Suppress` handling.

use crate::kotlin::{annotations_of, file_annotations, Annotation};
use crate::syntax::Node;

fn lists_any(annotation: &Annotation<'_>, ids: &[&str]) -> bool {
    matches!(annotation.name(), Some("Suppress" | "SuppressWarnings"))
        && annotation
            .string_arguments()
            .iter()
            .any(|arg| ids.contains(&arg.as_str()))
}

/// Whether a finding at `node` is silenced by `@Suppress` on the node, on
/// any enclosing declaration, or on the file.
#[must_use]
pub fn is_suppressed(node: Node<'_>, ids: &[&str]) -> bool {
    let by_declaration = std::iter::once(node)
        .chain(node.ancestors())
        .any(|scope| annotations_of(scope).iter().any(|a| lists_any(a, ids)));
    if by_declaration {
        return true;
    }
    file_annotations(node.tree().root())
        .iter()
        .any(|a| lists_any(a, ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{kinds, SyntaxTree};

    const IDS: &[&str] = &["ModifierMissing", "compose:modifier-missing-check"];

    fn first_call(tree: &SyntaxTree) -> Node<'_> {
        tree.root()
            .find_descendant(kinds::CALL_EXPRESSION)
            .expect("call")
    }

    #[test]
    fn enclosing_declaration_suppresses() {
        let tree = SyntaxTree::parse(
            "class A {\n  @Suppress(\"ModifierMissing\")\n  fun b() { Text(\"\") }\n}\n",
        )
        .expect("parse");
        assert!(is_suppressed(first_call(&tree), IDS));
        assert!(!is_suppressed(first_call(&tree), &["Other"]));
    }

    #[test]
    fn file_annotation_suppresses() {
        let tree = SyntaxTree::parse(
            "@file:Suppress(\"compose:modifier-missing-check\")\npackage a\n\nfun b() { Text(\"\") }\n",
        )
        .expect("parse");
        assert!(is_suppressed(first_call(&tree), IDS));
    }

    #[test]
    fn unrelated_annotations_do_not_suppress() {
        let tree = SyntaxTree::parse("@Deprecated(\"ModifierMissing\")\nfun b() { Text(\"\") }\n")
            .expect("parse");
        assert!(!is_suppressed(first_call(&tree), IDS));
    }
}
