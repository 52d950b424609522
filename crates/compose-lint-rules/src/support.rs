//! Helpers shared by several rules.

use std::collections::HashSet;

use compose_lint_core::kotlin::{
    calls_in, chain_root, is_shadowed, obtain_all_modifier_names, Argument, Call, Function,
    ModifierTypes, Property, Visibility,
};
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::ConfigResolver;
use regex::Regex;
use tracing::warn;

/// Compiles a list-valued option of name patterns. Each pattern must match
/// the whole name; invalid patterns are skipped.
pub(crate) fn name_patterns(config: &ConfigResolver<'_>, key: &str, defaults: &[&str]) -> Vec<Regex> {
    config
        .get_list(key, defaults)
        .iter()
        .filter_map(|pattern| match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(option = key, pattern = %pattern, "Ignoring invalid pattern: {e}");
                None
            }
        })
        .collect()
}

pub(crate) fn matches_any(patterns: &[Regex], name: &str) -> bool {
    patterns.iter().any(|p| p.is_match(name))
}

/// Whether an identifier reads a value, as opposed to naming a declaration,
/// a member, a type or an argument label.
pub(crate) fn is_reference(identifier: Node<'_>) -> bool {
    let Some(parent) = identifier.parent() else {
        return false;
    };
    match parent.kind() {
        kinds::VALUE_ARGUMENT => !identifier
            .next_sibling()
            .is_some_and(|next| !next.is_named() && next.kind() == "="),
        kinds::NAVIGATION_EXPRESSION => parent.first_named_child() == Some(identifier),
        kinds::PARAMETER
        | kinds::CLASS_PARAMETER
        | kinds::VARIABLE_DECLARATION
        | kinds::FUNCTION_DECLARATION
        | kinds::CLASS_DECLARATION
        | kinds::OBJECT_DECLARATION
        | kinds::TYPE_ALIAS
        | kinds::USER_TYPE
        | kinds::QUALIFIED_IDENTIFIER => false,
        _ => true,
    }
}

/// Identifiers reading `name` anywhere inside `scope`, in document order.
pub(crate) fn references<'t>(scope: Node<'t>, name: &str) -> Vec<Node<'t>> {
    let mut found: Vec<Node<'t>> = scope
        .find_descendants(kinds::IDENTIFIER)
        .filter(|id| id.original_text() == name && is_reference(*id))
        .collect();
    found.sort_by_key(Node::start_byte);
    found
}

/// The innermost function declaration containing `node`.
pub(crate) fn owning_function(node: Node<'_>) -> Option<Node<'_>> {
    node.first_ancestor_of_kind(kinds::FUNCTION_DECLARATION)
}

/// Whether a function's visibility is covered by `checkModifiersForVisibility`
/// (`only_public`, `public_and_internal` or `all`).
pub(crate) fn visibility_is_checked(config: &ConfigResolver<'_>, function: &Function<'_>) -> bool {
    let visibility = function.visibility();
    match config.get_string("checkModifiersForVisibility", "only_public").as_str() {
        "all" => true,
        "public_and_internal" => matches!(visibility, Visibility::Public | Visibility::Internal),
        _ => visibility == Visibility::Public,
    }
}

const COMPOSITION_LOCAL_FACTORIES: &[&str] = &[
    "compositionLocalOf",
    "staticCompositionLocalOf",
    "compositionLocalWithComputedDefaultOf",
];

/// Whether a property is initialised with a CompositionLocal factory.
///
/// `staticCompositionLocalOf<T> { ... }` at the top level of a file parses
/// as a comparison, so the leftmost identifier is what gets checked.
pub(crate) fn is_composition_local(property: &Property<'_>) -> bool {
    let Some(mut node) = property.value() else {
        return false;
    };
    loop {
        match node.kind() {
            kinds::IDENTIFIER => return COMPOSITION_LOCAL_FACTORIES.contains(&node.original_text()),
            kinds::CALL_EXPRESSION | kinds::BINARY_EXPRESSION => match node.first_named_child() {
                Some(inner) => node = inner,
                None => return false,
            },
            _ => return false,
        }
    }
}

/// Whether an identifier names a modifier (`Modifier`, `modifier`, `iconModifier`).
pub(crate) fn looks_like_modifier(name: &str) -> bool {
    name == "Modifier" || name.ends_with("odifier")
}

/// Composables whose signature is fixed by a supertype or an `expect`
/// declaration, which rules about parameters leave alone.
pub(crate) fn signature_is_inherited(function: &Function<'_>) -> bool {
    function.has_inherited_signature() || function.is_abstract()
}

/// A composable call handed the function's modifier or one of its aliases.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModifierUsage<'t> {
    pub(crate) call: Call<'t>,
    pub(crate) argument: Argument<'t>,
}

/// Calls to other composables that receive the modifier parameter of
/// `function` (or a local derived from it), in breadth-first order.
pub(crate) fn modifier_usages<'t>(function: &Function<'t>, config: &ConfigResolver<'_>) -> Vec<ModifierUsage<'t>> {
    let (Some(body), Some(name)) = (
        function.body(),
        ModifierTypes::from_config(config)
            .modifier_parameter(function)
            .and_then(|p| p.name()),
    ) else {
        return Vec::new();
    };
    let aliases: HashSet<String> = obtain_all_modifier_names(body, name);
    let boundary = function.node();

    let passes_modifier = |expression: Node<'t>| {
        let root = chain_root(expression);
        root.kind() == kinds::IDENTIFIER
            && aliases.contains(root.original_text())
            && !(root.original_text() == name && is_shadowed(root, name, boundary))
    };

    calls_in(body)
        .filter(|call| call.receiver().is_none() && call.name().is_some_and(|n| n.starts_with(char::is_uppercase)))
        .filter_map(|call| {
            let argument = call.arguments().into_iter().find(|argument| {
                argument
                    .expression()
                    .is_some_and(|e| e.kind() != kinds::LAMBDA_LITERAL && passes_modifier(e))
            })?;
            Some(ModifierUsage { call, argument })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use compose_lint_core::syntax::SyntaxTree;
    use compose_lint_core::MapSource;

    #[test]
    fn test_references_skip_labels_members_and_declarations() {
        let tree = SyntaxTree::parse(
            "fun f(modifier: Modifier) {\n    val x = modifier.modifier\n    Box(modifier = modifier)\n}\n",
        )
        .expect("parse");
        let refs = references(tree.root(), "modifier");
        let columns: Vec<(usize, usize)> = refs.iter().map(|r| (r.line(), r.column())).collect();
        assert_eq!(columns, vec![(2, 13), (3, 20)]);
    }

    #[test]
    fn test_composition_local_factories_are_recognised() {
        let tree = SyntaxTree::parse(
            "val LocalA = compositionLocalOf { 0 }\nval LocalB = staticCompositionLocalOf<Int> { 0 }\nval c = listOf(1)\n",
        )
        .expect("parse");
        let verdicts: Vec<bool> = tree
            .root()
            .children_of_kind(kinds::PROPERTY_DECLARATION)
            .filter_map(Property::from_node)
            .map(|p| is_composition_local(&p))
            .collect();
        assert_eq!(verdicts, vec![true, true, false]);
    }

    #[test]
    fn test_name_patterns_match_whole_names() {
        let source: MapSource = [("names", ".*ViewModel, [broken")].into_iter().collect();
        let config = ConfigResolver::new(&source);
        let patterns = name_patterns(&config, "names", &[]);
        assert_eq!(patterns.len(), 1);
        assert!(matches_any(&patterns, "HomeViewModel"));
        assert!(!matches_any(&patterns, "HomeViewModelFactory"));
    }
}
