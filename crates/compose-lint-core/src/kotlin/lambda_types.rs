//! Deciding whether a declared type is a lambda, and a composable one.
//!
//! A type counts as a lambda when it is a function type, a `fun interface`
//! declared in the same file, a type alias resolving to either, or a name
//! listed in `treatAsLambda` / `treatAsComposableLambda`.

use std::collections::{HashMap, HashSet};

use super::{is_token, simple_type_name, Annotation, Function};
use crate::resolver::ConfigResolver;
use crate::syntax::{kinds, Node};

/// Lambda-like types known in one file.
#[derive(Debug, Default)]
pub struct LambdaTypes<'t> {
    fun_interfaces: HashMap<String, bool>,
    aliases: HashMap<String, Node<'t>>,
    treat_as_lambda: HashSet<String>,
    treat_as_composable: HashSet<String>,
}

fn marked_composable(node: Node<'_>) -> bool {
    node.first_child_of_kind(kinds::TYPE_MODIFIERS)
        .is_some_and(|modifiers| {
            modifiers
                .children_of_kind(kinds::ANNOTATION)
                .filter_map(Annotation::from_node)
                .any(|a| a.name() == Some("Composable"))
        })
}

/// `@Composable () -> Unit` carries the marker on the function type itself;
/// `@Composable Scope.() -> Unit` carries it on the receiver type.
fn function_type_is_composable(function_type: Node<'_>) -> bool {
    if marked_composable(function_type) {
        return true;
    }
    let has_receiver = function_type.children().any(|c| is_token(c, "."));
    has_receiver
        && function_type
            .named_children()
            .find(|c| c.kind() != kinds::TYPE_MODIFIERS)
            .is_some_and(marked_composable)
}

fn unwrapped(node: Node<'_>) -> Option<Node<'_>> {
    node.named_children().find(|c| c.kind() != kinds::TYPE_MODIFIERS)
}

impl<'t> LambdaTypes<'t> {
    /// Scans `root` for `fun interface` declarations and type aliases.
    #[must_use]
    pub fn collect(
        root: Node<'t>,
        treat_as_lambda: HashSet<String>,
        treat_as_composable: HashSet<String>,
    ) -> Self {
        let mut fun_interfaces = HashMap::new();
        for class in root.find_descendants(kinds::CLASS_DECLARATION) {
            let is_fun_interface = class.children().any(|c| is_token(c, "fun"))
                && class.children().any(|c| is_token(c, "interface"));
            if !is_fun_interface {
                continue;
            }
            let Some(name) = class.first_child_of_kind(kinds::IDENTIFIER) else {
                continue;
            };
            let composable = class
                .first_child_of_kind(kinds::CLASS_BODY)
                .is_some_and(|body| {
                    body.children_of_kind(kinds::FUNCTION_DECLARATION)
                        .filter_map(Function::from_node)
                        .any(|f| f.is_composable())
                });
            fun_interfaces.insert(name.original_text().to_owned(), composable);
        }

        let mut aliases = HashMap::new();
        for alias in root.find_descendants(kinds::TYPE_ALIAS) {
            let Some(name) = alias.first_child_of_kind(kinds::IDENTIFIER) else {
                continue;
            };
            let target = alias
                .children()
                .find(|c| is_token(*c, "="))
                .and_then(|eq| eq.next_named_sibling());
            if let Some(target) = target {
                aliases.insert(name.original_text().to_owned(), target);
            }
        }

        Self {
            fun_interfaces,
            aliases,
            treat_as_lambda,
            treat_as_composable,
        }
    }

    /// Like [`collect`](Self::collect), reading the extra names from configuration.
    #[must_use]
    pub fn from_config(root: Node<'t>, config: &ConfigResolver<'_>) -> Self {
        Self::collect(
            root,
            config.get_set("treatAsLambda", &[]),
            config.get_set("treatAsComposableLambda", &[]),
        )
    }

    /// Whether the type is lambda-like.
    #[must_use]
    pub fn is_lambda(&self, ty: Node<'_>) -> bool {
        self.resolve(ty, &mut HashSet::new()).is_some()
    }

    /// Whether the type is a composable lambda.
    #[must_use]
    pub fn is_composable_lambda(&self, ty: Node<'_>) -> bool {
        self.resolve(ty, &mut HashSet::new()) == Some(true)
    }

    /// `Some(composable)` when lambda-like, `None` otherwise.
    fn resolve(&self, ty: Node<'_>, visited: &mut HashSet<String>) -> Option<bool> {
        match ty.kind() {
            kinds::FUNCTION_TYPE => Some(function_type_is_composable(ty)),
            kinds::NULLABLE_TYPE | kinds::PARENTHESIZED_TYPE => {
                let marked = marked_composable(ty);
                self.resolve(unwrapped(ty)?, visited)
                    .map(|composable| composable || marked)
            }
            kinds::USER_TYPE => {
                let name = simple_type_name(ty)?;
                if self.treat_as_composable.contains(&name) {
                    return Some(true);
                }
                if self.treat_as_lambda.contains(&name) {
                    return Some(false);
                }
                if let Some(&composable) = self.fun_interfaces.get(&name) {
                    return Some(composable);
                }
                let target = *self.aliases.get(&name)?;
                if !visited.insert(name) {
                    return None;
                }
                self.resolve(target, visited)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kotlin::Parameter;
    use crate::syntax::SyntaxTree;

    const SOURCE: &str = r"
fun interface Plain {
    fun run()
}

fun interface Slot {
    @Composable
    fun Content()
}

typealias Callback = () -> Unit
typealias Content = @Composable () -> Unit
typealias Loop = Loop2
typealias Loop2 = Loop

@Composable
fun Screen(
    a: () -> Unit,
    b: @Composable () -> Unit,
    c: @Composable (() -> Unit)?,
    d: (@Composable RowScope.() -> Unit)?,
    e: @Composable RowScope.(Int) -> Unit,
    f: Callback,
    g: Content,
    h: Plain,
    i: Slot,
    j: Loop,
    k: String,
    l: Listener,
    m: (@Composable () -> Unit) -> Unit,
) {}
";

    fn verdicts(lambda_types: &LambdaTypes<'_>, params: &[Parameter<'_>]) -> Vec<(bool, bool)> {
        params
            .iter()
            .map(|p| {
                let ty = p.type_node().expect("type");
                (lambda_types.is_lambda(ty), lambda_types.is_composable_lambda(ty))
            })
            .collect()
    }

    #[test]
    fn classifies_parameter_types() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let root = tree.root();
        let function = root
            .find_descendants(kinds::FUNCTION_DECLARATION)
            .filter_map(Function::from_node)
            .find(|f| f.name() == Some("Screen"))
            .expect("Screen");
        let lambda_types = LambdaTypes::collect(
            root,
            HashSet::from(["Listener".to_owned()]),
            HashSet::new(),
        );

        assert_eq!(
            verdicts(&lambda_types, &function.parameters()),
            vec![
                (true, false),
                (true, true),
                (true, true),
                (true, true),
                (true, true),
                (true, false),
                (true, true),
                (true, false),
                (true, true),
                (false, false),
                (false, false),
                (true, false),
                (true, false),
            ]
        );
    }
}
