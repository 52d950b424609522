//! Function value parameters.
//!
//! In the grammar a parameter's default value and its annotations are
//! siblings of the `parameter` node rather than children:
//!
//! ```text
//! function_value_parameters
//!   parameter_modifiers      (annotations, vararg)
//!   parameter                (name : type)
//!   =
//!   <default expression>
//! ```

use super::{is_token, simple_type_name, Annotation};
use crate::syntax::{kinds, Node};

/// Modifier types every Compose project has.
pub(crate) const BUILTIN_MODIFIER_TYPES: &[&str] = &["Modifier", "GlanceModifier"];

/// A single value parameter together with its detached default and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter<'t> {
    node: Node<'t>,
    default: Option<Node<'t>>,
    modifiers: Option<Node<'t>>,
}

impl<'t> Parameter<'t> {
    /// Collects the parameters of a `function_value_parameters` node.
    #[must_use]
    pub fn all_in(list: Node<'t>) -> Vec<Self> {
        let mut params: Vec<Self> = Vec::new();
        let mut modifiers = None;
        let mut expect_default = false;

        for child in list.children() {
            if child.is_comment() {
                continue;
            }
            match child.kind() {
                kinds::PARAMETER_MODIFIERS => modifiers = Some(child),
                kinds::PARAMETER => params.push(Self {
                    node: child,
                    default: None,
                    modifiers: modifiers.take(),
                }),
                _ if is_token(child, "=") => expect_default = true,
                _ if is_token(child, ",") || is_token(child, "(") || is_token(child, ")") => {
                    expect_default = false;
                }
                _ if expect_default && child.is_named() => {
                    if let Some(last) = params.last_mut() {
                        last.default = Some(child);
                    }
                    expect_default = false;
                }
                _ => {}
            }
        }
        params
    }

    /// The `parameter` node (name and type).
    #[must_use]
    pub fn node(&self) -> Node<'t> {
        self.node
    }

    /// The identifier naming the parameter.
    #[must_use]
    pub fn name_node(&self) -> Option<Node<'t>> {
        self.node.first_child_of_kind(kinds::IDENTIFIER)
    }

    /// The parameter's name.
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        self.name_node().map(|n| n.original_text())
    }

    /// The declared type node.
    #[must_use]
    pub fn type_node(&self) -> Option<Node<'t>> {
        self.node
            .named_children()
            .find(|child| child.kind() != kinds::IDENTIFIER)
    }

    /// Type as written in the source.
    #[must_use]
    pub fn type_text(&self) -> Option<&'t str> {
        self.type_node().map(|t| t.original_text())
    }

    /// Short type name through nullability (`Modifier?` -> `Modifier`).
    #[must_use]
    pub fn simple_type_name(&self) -> Option<String> {
        self.type_node().and_then(simple_type_name)
    }

    /// Whether the declared type is nullable.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.type_node()
            .is_some_and(|t| t.kind() == kinds::NULLABLE_TYPE)
    }

    /// Whether the parameter is typed `Modifier` or `GlanceModifier`.
    ///
    /// Use [`ModifierTypes`](super::ModifierTypes) to include `customModifiers`.
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        self.simple_type_name()
            .is_some_and(|name| BUILTIN_MODIFIER_TYPES.contains(&name.as_str()))
    }

    /// Default value expression, if one is declared.
    #[must_use]
    pub fn default_value(&self) -> Option<Node<'t>> {
        self.default
    }

    /// Whether a default value is declared.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The preceding `parameter_modifiers` node.
    #[must_use]
    pub fn modifiers(&self) -> Option<Node<'t>> {
        self.modifiers
    }

    /// Annotations applied to the parameter.
    #[must_use]
    pub fn annotations(&self) -> Vec<Annotation<'t>> {
        self.modifiers
            .map(|m| {
                m.children_of_kind(kinds::ANNOTATION)
                    .filter_map(Annotation::from_node)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the parameter is `vararg`.
    #[must_use]
    pub fn is_vararg(&self) -> bool {
        self.modifiers.is_some_and(|m| {
            m.children_of_kind(kinds::PARAMETER_MODIFIER)
                .any(|pm| pm.original_text() == "vararg")
        })
    }

    /// Whether the parameter's type is a function type, looking through
    /// nullability and parentheses only.
    #[must_use]
    pub fn is_function_typed(&self) -> bool {
        fn unwrap(node: Node<'_>) -> bool {
            match node.kind() {
                kinds::FUNCTION_TYPE => true,
                kinds::NULLABLE_TYPE | kinds::PARENTHESIZED_TYPE => node
                    .named_children()
                    .find(|c| c.kind() != kinds::TYPE_MODIFIERS)
                    .is_some_and(unwrap),
                _ => false,
            }
        }
        self.type_node().is_some_and(unwrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTree;

    fn parameters(tree: &SyntaxTree) -> Vec<Parameter<'_>> {
        let list = tree
            .root()
            .find_descendant(kinds::FUNCTION_VALUE_PARAMETERS)
            .expect("parameter list");
        Parameter::all_in(list)
    }

    #[test]
    fn defaults_are_attached_to_the_right_parameter() {
        let tree = SyntaxTree::parse(
            "fun f(a: Int, modifier: Modifier = Modifier, c: String = \"x\", d: () -> Unit) {}\n",
        )
        .expect("parse");
        let params = parameters(&tree);
        let summary: Vec<(Option<&str>, Option<&str>)> = params
            .iter()
            .map(|p| (p.name(), p.default_value().map(|d| d.original_text())))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Some("a"), None),
                (Some("modifier"), Some("Modifier")),
                (Some("c"), Some("\"x\"")),
                (Some("d"), None),
            ]
        );
        assert!(params[1].is_modifier());
        assert!(params[3].is_function_typed());
        assert!(!params[0].is_function_typed());
    }

    #[test]
    fn reads_annotations_and_vararg() {
        let tree = SyntaxTree::parse("fun f(vararg x: Int, @Foo y: Int = 2) {}\n").expect("parse");
        let params = parameters(&tree);
        assert!(params[0].is_vararg());
        assert!(params[0].annotations().is_empty());
        assert!(!params[1].is_vararg());
        assert_eq!(params[1].annotations()[0].name(), Some("Foo"));
        assert_eq!(params[1].default_value().map(|d| d.original_text()), Some("2"));
    }

    #[test]
    fn nullable_modifier_is_still_a_modifier() {
        let tree = SyntaxTree::parse("fun f(m: Modifier?) {}\n").expect("parse");
        let params = parameters(&tree);
        assert!(params[0].is_modifier());
        assert!(params[0].is_nullable());
    }
}
