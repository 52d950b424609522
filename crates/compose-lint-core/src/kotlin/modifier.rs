//! `Modifier` chains and aliases.

use std::collections::HashSet;

use super::{Call, Function, Parameter, Property};
use crate::resolver::ConfigResolver;
use crate::syntax::{kinds, Node};

/// Parameter types treated as modifiers: the built-in ones plus the
/// `customModifiers` option.
#[derive(Debug, Clone, Default)]
pub struct ModifierTypes {
    custom: HashSet<String>,
}

impl ModifierTypes {
    /// Reads `customModifiers` from the config.
    #[must_use]
    pub fn from_config(config: &ConfigResolver<'_>) -> Self {
        Self {
            custom: config.get_set("customModifiers", &[]),
        }
    }

    /// Whether `parameter` is typed as one of the modifier types.
    #[must_use]
    pub fn is_modifier(&self, parameter: &Parameter<'_>) -> bool {
        parameter.is_modifier()
            || parameter
                .simple_type_name()
                .is_some_and(|name| self.custom.contains(&name))
    }

    /// The first modifier parameter of `function`.
    #[must_use]
    pub fn modifier_parameter<'t>(&self, function: &Function<'t>) -> Option<Parameter<'t>> {
        function.parameters().into_iter().find(|p| self.is_modifier(p))
    }

    /// The expression a missing default should be filled with.
    #[must_use]
    pub fn default_for(parameter: &Parameter<'_>) -> &'static str {
        match parameter.simple_type_name().as_deref() {
            Some("GlanceModifier") => "GlanceModifier",
            _ => "Modifier",
        }
    }
}

/// The expression a call chain starts from (`Modifier.a().b()` -> `Modifier`).
#[must_use]
pub fn chain_root(expression: Node<'_>) -> Node<'_> {
    let mut node = expression;
    while matches!(
        node.kind(),
        kinds::CALL_EXPRESSION | kinds::NAVIGATION_EXPRESSION | kinds::PARENTHESIZED_EXPRESSION
    ) {
        match node.first_named_child() {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Calls making up a chain, in source order (`Modifier.a().b()` -> `[a, b]`).
#[must_use]
pub fn chain_calls(expression: Node<'_>) -> Vec<Call<'_>> {
    let mut calls = Vec::new();
    let mut node = expression;
    loop {
        if let Some(call) = Call::from_node(node) {
            calls.push(call);
        }
        match node.kind() {
            kinds::CALL_EXPRESSION | kinds::NAVIGATION_EXPRESSION | kinds::PARENTHESIZED_EXPRESSION => {
                match node.first_named_child() {
                    Some(inner) => node = inner,
                    None => break,
                }
            }
            _ => break,
        }
    }
    calls.reverse();
    calls
}

/// Whether the chain in `expression` starts at one of `names`.
#[must_use]
pub fn refers_to_any(expression: Node<'_>, names: &HashSet<String>) -> bool {
    let root = chain_root(expression);
    root.kind() == kinds::IDENTIFIER && names.contains(root.original_text())
}

/// The modifier parameter's name plus every local derived from it.
///
/// `val m2 = modifier.padding(4)` makes `m2` an alias, and so does any
/// later `val m3 = m2.fillMaxSize()`. Expands until no new alias appears.
#[must_use]
pub fn obtain_all_modifier_names(scope: Node<'_>, initial: &str) -> HashSet<String> {
    let mut names = HashSet::from([initial.to_owned()]);
    let properties: Vec<Property<'_>> = scope
        .find_descendants(kinds::PROPERTY_DECLARATION)
        .filter_map(Property::from_node)
        .collect();

    loop {
        let mut changed = false;
        for property in &properties {
            let (Some(name), Some(value)) = (property.name(), property.initializer()) else {
                continue;
            };
            if !names.contains(name) && refers_to_any(value, &names) {
                names.insert(name.to_owned());
                changed = true;
            }
        }
        if !changed {
            return names;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTree;

    #[test]
    fn chain_root_and_calls() {
        let tree = SyntaxTree::parse("val m = Modifier.padding(2).clickable { }.then(other)\n")
            .expect("parse");
        let property = tree
            .root()
            .find_descendant(kinds::PROPERTY_DECLARATION)
            .and_then(Property::from_node)
            .expect("property");
        let value = property.initializer().expect("initializer");

        assert_eq!(chain_root(value).original_text(), "Modifier");
        let names: Vec<_> = chain_calls(value).iter().filter_map(Call::name).collect();
        assert_eq!(names, vec!["padding", "clickable", "then"]);
    }

    #[test]
    fn custom_modifier_types_come_from_config() {
        let tree = SyntaxTree::parse("fun f(a: Modifier, b: GlanceModifier, c: StyleModifier, d: Int) {}\n")
            .expect("parse");
        let function = tree
            .root()
            .find_descendant(kinds::FUNCTION_DECLARATION)
            .and_then(Function::from_node)
            .expect("function");
        let params = function.parameters();

        let builtin = ModifierTypes::default();
        let flags: Vec<bool> = params.iter().map(|p| builtin.is_modifier(p)).collect();
        assert_eq!(flags, vec![true, true, false, false]);
        assert_eq!(ModifierTypes::default_for(&params[1]), "GlanceModifier");

        let mut source = crate::resolver::MapSource::new();
        source.insert("customModifiers", "StyleModifier");
        let config = ConfigResolver::new(&source);
        let custom = ModifierTypes::from_config(&config);
        let flags: Vec<bool> = params.iter().map(|p| custom.is_modifier(p)).collect();
        assert_eq!(flags, vec![true, true, true, false]);
        assert_eq!(custom.modifier_parameter(&function).and_then(|p| p.name()), Some("a"));
    }

    #[test]
    fn aliases_are_expanded_transitively() {
        let tree = SyntaxTree::parse(
            r"
fun A(modifier: Modifier) {
    val m3 = m2.fillMaxSize()
    val m2 = modifier.padding(4)
    val unrelated = Modifier.size(2)
}
",
        )
        .expect("parse");
        let function = tree
            .root()
            .find_descendant(kinds::FUNCTION_DECLARATION)
            .expect("function");
        let names = obtain_all_modifier_names(function, "modifier");
        let mut sorted: Vec<_> = names.into_iter().collect();
        sorted.sort();
        assert_eq!(sorted, vec!["m2", "m3", "modifier"]);
    }
}
