//! Rule forbidding a composable content slot from being used more than once.
//!
//! # Rationale
//!
//! Each invocation of a `@Composable` lambda creates new content. Invoking a
//! slot from two code paths means its internal state is lost whenever the
//! path changes; `movableContentOf` keeps the state while moving content.
//!
//! Usages inside `movableContentOf { }` and usages of a nested lambda
//! parameter with the same name are not counted.
//!
//! # Configuration
//!
//! - `treatAsComposableLambda`: extra type names to treat as composable lambdas
//!
//! # Suppression
//!
//! - `@Suppress("ContentSlotReused")` on the function or file
//! - `// compose-lint: allow(content-slot-reused)` comment

use compose_lint_core::kotlin::{is_shadowed, Call, Function, LambdaTypes};
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::references;

/// Rule code for content-slot-reused.
pub const CODE: &str = "CL005";

/// Rule name for content-slot-reused.
pub const NAME: &str = "content-slot-reused";

const MOVABLE_CONTENT: &[&str] = &["movableContentOf", "movableContentWithReceiverOf"];

/// Flags composable lambda parameters invoked or forwarded more than once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSlotReused;

impl ContentSlotReused {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// `slot()`, `slot.invoke()`, `slot?.invoke()` or `Child(slot)`.
fn is_slot_use(reference: Node<'_>) -> bool {
    let Some(parent) = reference.parent() else {
        return false;
    };
    match parent.kind() {
        kinds::VALUE_ARGUMENT => true,
        kinds::CALL_EXPRESSION => parent.first_named_child() == Some(reference),
        kinds::NAVIGATION_EXPRESSION => {
            parent
                .named_children()
                .last()
                .is_some_and(|member| member.original_text() == "invoke")
                && parent
                    .parent()
                    .is_some_and(|grandparent| grandparent.kind() == kinds::CALL_EXPRESSION)
        }
        _ => false,
    }
}

fn inside_movable_content(reference: Node<'_>, boundary: Node<'_>) -> bool {
    reference
        .ancestors()
        .take_while(|ancestor| *ancestor != boundary)
        .filter_map(Call::from_node)
        .any(|call| call.name().is_some_and(|name| MOVABLE_CONTENT.contains(&name)))
}

impl Rule for ContentSlotReused {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Composable content slots are invoked at most once"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let Some(body) = function.body() else {
            return;
        };
        let lambda_types = LambdaTypes::from_config(function.node().tree().root(), config);

        for parameter in function.parameters() {
            let (Some(name), Some(ty)) = (parameter.name(), parameter.type_node()) else {
                continue;
            };
            if !lambda_types.is_composable_lambda(ty) {
                continue;
            }
            let uses = references(body, name)
                .into_iter()
                .filter(|r| is_slot_use(*r))
                .filter(|r| !is_shadowed(*r, name, function.node()))
                .filter(|r| !inside_movable_content(*r, function.node()))
                .count();
            if uses > 1 {
                emitter.report(
                    parameter.node(),
                    &format!(
                        "The composable lambda `{name}` is used in {uses} places. Content slots should not be reused \
                         in different code paths, as their state is lost every time the code path changes. \
                         Use `movableContentOf` to move the content between code paths instead."
                    ),
                    false,
                );
            }
        }
    }
}
