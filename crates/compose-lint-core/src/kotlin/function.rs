//! Function declarations.

use super::{annotations_of, is_token, Annotation, Parameter};
use crate::syntax::{kinds, Node};

/// Declared visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Visibility {
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// `public`, or no visibility modifier at all.
    Public,
}

impl Visibility {
    /// Reads the visibility keyword from a declaration's `modifiers` node.
    #[must_use]
    pub fn of(declaration: Node<'_>) -> Self {
        let keyword = declaration
            .first_child_of_kind(kinds::MODIFIERS)
            .and_then(|modifiers| modifiers.first_child_of_kind(kinds::VISIBILITY_MODIFIER))
            .map(|modifier| modifier.original_text());

        match keyword {
            Some("private") => Self::Private,
            Some("protected") => Self::Protected,
            Some("internal") => Self::Internal,
            _ => Self::Public,
        }
    }

    /// Source keyword for this visibility.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Public => "public",
        }
    }
}

/// A `function_declaration` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Function<'t> {
    node: Node<'t>,
}

impl<'t> Function<'t> {
    /// Wraps a node if it is a function declaration.
    #[must_use]
    pub fn from_node(node: Node<'t>) -> Option<Self> {
        (node.kind() == kinds::FUNCTION_DECLARATION).then_some(Self { node })
    }

    /// The underlying declaration node.
    #[must_use]
    pub fn node(&self) -> Node<'t> {
        self.node
    }

    /// The identifier naming the function.
    #[must_use]
    pub fn name_node(&self) -> Option<Node<'t>> {
        self.node.first_child_of_kind(kinds::IDENTIFIER)
    }

    /// The function's name.
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        self.name_node().map(|node| node.original_text())
    }

    /// Annotations attached to the declaration.
    #[must_use]
    pub fn annotations(&self) -> Vec<Annotation<'t>> {
        annotations_of(self.node)
    }

    /// Whether an annotation with this short name is present.
    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations().iter().any(|a| a.name() == Some(name))
    }

    /// Whether the function is tagged `@Composable`.
    #[must_use]
    pub fn is_composable(&self) -> bool {
        self.has_annotation("Composable")
    }

    /// Whether the function is a preview (`@Preview`, `@PreviewLightDark`, ...).
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.annotations()
            .iter()
            .filter_map(Annotation::name)
            .any(|name| name.ends_with("Preview") || name.ends_with("Previews"))
    }

    /// The `function_value_parameters` node.
    #[must_use]
    pub fn parameter_list(&self) -> Option<Node<'t>> {
        self.node.first_child_of_kind(kinds::FUNCTION_VALUE_PARAMETERS)
    }

    /// Value parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> Vec<Parameter<'t>> {
        self.parameter_list()
            .map(Parameter::all_in)
            .unwrap_or_default()
    }

    /// The `function_body` node, absent for abstract and expect declarations.
    #[must_use]
    pub fn body(&self) -> Option<Node<'t>> {
        self.node.first_child_of_kind(kinds::FUNCTION_BODY)
    }

    /// The body block for `fun f() { ... }`.
    #[must_use]
    pub fn block_body(&self) -> Option<Node<'t>> {
        self.body()?.first_child_of_kind(kinds::BLOCK)
    }

    /// The expression for `fun f() = ...`.
    #[must_use]
    pub fn expression_body(&self) -> Option<Node<'t>> {
        let body = self.body()?;
        if body.first_child_of_kind(kinds::BLOCK).is_some() {
            return None;
        }
        body.first_named_child()
    }

    /// Top-level statements of the body block (comments excluded).
    #[must_use]
    pub fn statements(&self) -> Vec<Node<'t>> {
        self.block_body()
            .map(|block| block.named_children().collect())
            .unwrap_or_default()
    }

    /// The declared return type, if any.
    #[must_use]
    pub fn return_type(&self) -> Option<Node<'t>> {
        let params = self.parameter_list()?;
        let mut current = params.next_sibling();
        while let Some(node) = current {
            if node.kind() == kinds::FUNCTION_BODY {
                return None;
            }
            if is_token(node, ":") {
                return node.next_named_sibling();
            }
            current = node.next_sibling();
        }
        None
    }

    /// Whether the function declares a non-`Unit` return type.
    #[must_use]
    pub fn returns_value(&self) -> bool {
        self.return_type()
            .is_some_and(|ty| ty.original_text().trim() != "Unit")
    }

    /// Receiver type of an extension function (`fun Modifier.foo()`).
    #[must_use]
    pub fn receiver_type(&self) -> Option<Node<'t>> {
        let name = self.name_node()?;
        self.node
            .named_children()
            .take_while(|child| *child != name)
            .find(|child| {
                matches!(
                    child.kind(),
                    kinds::USER_TYPE
                        | kinds::NULLABLE_TYPE
                        | kinds::PARENTHESIZED_TYPE
                        | kinds::FUNCTION_TYPE
                )
            })
    }

    /// Whether the function is an extension function.
    #[must_use]
    pub fn has_receiver(&self) -> bool {
        self.receiver_type().is_some()
    }

    /// Declared visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        Visibility::of(self.node)
    }

    /// Whether a modifier keyword (`override`, `actual`, `operator`, ...) is present.
    #[must_use]
    pub fn has_modifier_keyword(&self, keyword: &str) -> bool {
        self.node
            .first_child_of_kind(kinds::MODIFIERS)
            .is_some_and(|modifiers| {
                modifiers
                    .named_children()
                    .filter(|m| m.kind() != kinds::ANNOTATION)
                    .any(|m| m.original_text() == keyword)
            })
    }

    /// `override fun`
    #[must_use]
    pub fn is_override(&self) -> bool {
        self.has_modifier_keyword("override")
    }

    /// `actual fun`
    #[must_use]
    pub fn is_actual(&self) -> bool {
        self.has_modifier_keyword("actual")
    }

    /// `expect fun`
    #[must_use]
    pub fn is_expect(&self) -> bool {
        self.has_modifier_keyword("expect")
    }

    /// `abstract fun`
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.has_modifier_keyword("abstract")
    }

    /// `operator fun`
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.has_modifier_keyword("operator")
    }

    /// The class, interface or object declaring this function as a member.
    #[must_use]
    pub fn containing_class(&self) -> Option<Node<'t>> {
        let body = self.node.parent()?;
        if body.kind() != kinds::CLASS_BODY {
            return None;
        }
        body.parent()
    }

    /// Whether the function is declared inside an interface.
    #[must_use]
    pub fn is_in_interface(&self) -> bool {
        self.containing_class()
            .is_some_and(|class| class.children().any(|c| is_token(c, "interface")))
    }

    /// Overrides, interface members and `actual` declarations whose
    /// signature is dictated elsewhere.
    #[must_use]
    pub fn has_inherited_signature(&self) -> bool {
        self.is_override() || self.is_actual() || self.is_in_interface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTree;

    fn with_function<R>(src: &str, f: impl FnOnce(Function<'_>) -> R) -> R {
        let tree = SyntaxTree::parse(src).expect("parse");
        let node = tree
            .root()
            .find_descendant(kinds::FUNCTION_DECLARATION)
            .expect("function");
        f(Function::from_node(node).expect("function view"))
    }

    #[test]
    fn reads_name_annotations_and_visibility() {
        with_function(
            "@Preview\n@Composable\ninternal fun Card(modifier: Modifier = Modifier) {}\n",
            |f| {
                assert_eq!(f.name(), Some("Card"));
                assert!(f.is_composable());
                assert!(f.is_preview());
                assert_eq!(f.visibility(), Visibility::Internal);
                assert!(!f.has_receiver());
                assert!(!f.returns_value());
            },
        );
    }

    #[test]
    fn reads_receiver_and_return_type() {
        with_function("private fun Modifier.fancy(): Modifier = this\n", |f| {
            assert_eq!(f.name(), Some("fancy"));
            assert_eq!(f.receiver_type().map(|t| t.original_text()), Some("Modifier"));
            assert_eq!(f.return_type().map(|t| t.original_text()), Some("Modifier"));
            assert!(f.returns_value());
            assert!(f.expression_body().is_some());
            assert!(f.block_body().is_none());
            assert_eq!(f.visibility(), Visibility::Private);
        });
    }

    #[test]
    fn unit_return_type_is_not_a_value() {
        with_function("fun a(): Unit {}\n", |f| {
            assert!(f.return_type().is_some());
            assert!(!f.returns_value());
        });
    }

    #[test]
    fn detects_modifier_keywords() {
        with_function(
            "class A : B() { override fun render() {} }\n",
            |f| {
                assert!(f.is_override());
                assert!(f.has_inherited_signature());
                assert!(!f.is_actual());
            },
        );
        with_function("actual fun Platform() {}\n", |f| assert!(f.is_actual()));
    }

    #[test]
    fn detects_interface_members() {
        with_function(
            "interface Screen { @Composable fun Content(modifier: Modifier) }\n",
            |f| {
                assert!(f.is_in_interface());
                assert!(f.body().is_none());
                assert_eq!(f.parameters().len(), 1);
            },
        );
    }

    #[test]
    fn statements_skip_comments() {
        with_function("fun a() {\n  // hi\n  b()\n  c()\n}\n", |f| {
            assert_eq!(f.statements().len(), 2);
        });
    }
}
