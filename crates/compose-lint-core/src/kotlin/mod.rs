//! Kotlin and Compose specific views over the syntax tree.
//!
//! Every view is a thin wrapper around a [`Node`]; attributes are derived on
//! demand and nothing is cached, so views stay valid for the lifetime of the
//! tree and cost nothing to copy.

mod annotation;
mod call;
mod function;
mod lambda_types;
mod modifier;
mod parameter;
mod property;
mod shadowing;

pub use annotation::{annotations_of, file_annotations, Annotation};
pub use call::{calls_in, Argument, Call};
pub use function::{Function, Visibility};
pub use lambda_types::LambdaTypes;
pub use modifier::{chain_calls, chain_root, obtain_all_modifier_names, refers_to_any, ModifierTypes};
pub use parameter::Parameter;
pub use property::{is_remembered, Property};
pub use shadowing::{declared_parameter_names, is_shadowed};

use crate::syntax::{kinds, Node};

/// Dotted name of a `user_type`, without type arguments (`foo.Bar<Int>` -> `foo.Bar`).
#[must_use]
pub fn user_type_name(node: Node<'_>) -> Option<String> {
    if node.kind() != kinds::USER_TYPE {
        return None;
    }
    let parts: Vec<&str> = node
        .children_of_kind(kinds::IDENTIFIER)
        .map(|id| id.original_text())
        .collect();
    (!parts.is_empty()).then(|| parts.join("."))
}

/// Last segment of a type's name, looking through nullability.
///
/// `Modifier?` and `androidx.compose.ui.Modifier` both yield `Modifier`.
#[must_use]
pub fn simple_type_name(node: Node<'_>) -> Option<String> {
    match node.kind() {
        kinds::USER_TYPE => user_type_name(node)
            .and_then(|name| name.rsplit('.').next().map(str::to_owned)),
        kinds::NULLABLE_TYPE | kinds::PARENTHESIZED_TYPE => node
            .named_children()
            .find(|child| child.kind() != kinds::TYPE_MODIFIERS)
            .and_then(simple_type_name),
        _ => None,
    }
}

/// Whether the node is one of the anonymous keyword or punctuation tokens.
pub(crate) fn is_token(node: Node<'_>, token: &str) -> bool {
    !node.is_named() && node.kind() == token
}
