//! Name shadowing between a function's parameters and nested scopes.

use super::{Parameter, Property};
use crate::syntax::{kinds, Node};

/// Parameter names introduced by a lambda, anonymous function or function.
///
/// Destructured lambda parameters (`{ (a, b) -> }`) are included.
#[must_use]
pub fn declared_parameter_names(callable: Node<'_>) -> Vec<&str> {
    match callable.kind() {
        kinds::LAMBDA_LITERAL => callable
            .first_child_of_kind(kinds::LAMBDA_PARAMETERS)
            .map(|params| {
                params
                    .find_descendants(kinds::VARIABLE_DECLARATION)
                    .filter_map(|v| v.first_child_of_kind(kinds::IDENTIFIER))
                    .map(|id| id.original_text())
                    .collect()
            })
            .unwrap_or_default(),
        kinds::ANONYMOUS_FUNCTION | kinds::FUNCTION_DECLARATION => callable
            .first_child_of_kind(kinds::FUNCTION_VALUE_PARAMETERS)
            .map(|list| Parameter::all_in(list).iter().filter_map(Parameter::name).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Whether `name`, as used at `usage`, refers to something declared between
/// `usage` and `boundary` rather than to the boundary's own parameter.
///
/// A name is shadowed by a parameter of an enclosing lambda, anonymous
/// function or local function, or by a local declared earlier in an
/// enclosing block.
#[must_use]
pub fn is_shadowed(usage: Node<'_>, name: &str, boundary: Node<'_>) -> bool {
    let by_parameter = usage
        .ancestors()
        .take_while(|ancestor| *ancestor != boundary)
        .any(|scope| declared_parameter_names(scope).contains(&name));
    if by_parameter {
        return true;
    }

    // A property's own initializer still sees the outer name.
    usage
        .walk_backwards(Some(boundary))
        .filter(|node| !node.is_ancestor_of(usage))
        .filter_map(Property::from_node)
        .any(|property| {
            property.name() == Some(name) || property.destructured_names().contains(&name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTree;

    fn usages<'t>(tree: &'t SyntaxTree, name: &str) -> Vec<Node<'t>> {
        let mut found: Vec<Node<'t>> = tree
            .root()
            .find_descendants(kinds::IDENTIFIER)
            .filter(|id| id.original_text() == name)
            .filter(|id| id.parent().is_some_and(|p| p.kind() == kinds::VALUE_ARGUMENT))
            .collect();
        found.sort_by_key(|n| n.start_byte());
        found
    }

    #[test]
    fn lambda_and_local_declarations_shadow() {
        let tree = SyntaxTree::parse(
            r"
fun A(content: () -> Unit) {
    Box(content)
    items.forEach { content -> Text(content) }
    list.map { (content, x) -> Text(content) }
    Column {
        val content = 1
        Text(content)
    }
    fun local(content: Int) { Text(content) }
}
",
        )
        .expect("parse");
        let function = tree
            .root()
            .find_descendant(kinds::FUNCTION_DECLARATION)
            .expect("function");
        let shadowed: Vec<bool> = usages(&tree, "content")
            .into_iter()
            .map(|usage| is_shadowed(usage, "content", function))
            .collect();
        assert_eq!(shadowed, vec![false, true, true, true, true]);
    }

    #[test]
    fn redeclared_local_sees_outer_name_in_its_initializer() {
        let tree = SyntaxTree::parse(
            r"
fun A(modifier: Modifier) {
    val modifier = wrap(modifier)
    Text(modifier)
}
",
        )
        .expect("parse");
        let function = tree
            .root()
            .find_descendant(kinds::FUNCTION_DECLARATION)
            .expect("function");
        let shadowed: Vec<bool> = usages(&tree, "modifier")
            .into_iter()
            .map(|usage| is_shadowed(usage, "modifier", function))
            .collect();
        assert_eq!(shadowed, vec![false, true]);
    }

    #[test]
    fn collects_lambda_parameter_names() {
        let tree = SyntaxTree::parse("val f = { a: Int, (b, c) -> a }\n").expect("parse");
        let lambda = tree
            .root()
            .find_descendant(kinds::LAMBDA_LITERAL)
            .expect("lambda");
        assert_eq!(declared_parameter_names(lambda), vec!["a", "b", "c"]);
    }
}
