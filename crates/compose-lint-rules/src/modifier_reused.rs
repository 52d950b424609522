//! Rule forbidding the modifier parameter from being applied twice.
//!
//! # Rationale
//!
//! The modifier belongs to exactly one layout node, the root. Passing it
//! (or a modifier built from it) to several composables applies the
//! caller's padding, size and click handling more than once.
//!
//! Usages in different branches of the same `if` or `when` never run
//! together and are not reported.
//!
//! # Suppression
//!
//! - `@Suppress("ModifierReused")` on the function or file
//! - `// compose-lint: allow(modifier-reused)` comment

use compose_lint_core::kotlin::Function;
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::modifier_usages;

/// Rule code for modifier-reused.
pub const CODE: &str = "CL016";

/// Rule name for modifier-reused.
pub const NAME: &str = "modifier-reused";

const MESSAGE: &str = "Modifiers should only be used once and by the root level layout of a Composable. This \
modifier is also used by another composable in this function.";

/// Flags composables handed a modifier that another composable also receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierReused;

impl ModifierReused {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// The child of `ancestor` that contains `node`.
fn branch_of<'t>(ancestor: Node<'t>, node: Node<'t>) -> Option<Node<'t>> {
    ancestor
        .named_children()
        .find(|child| *child == node || child.is_ancestor_of(node))
}

/// Whether `a` and `b` sit in different branches of one `if` or `when`.
fn mutually_exclusive(a: Node<'_>, b: Node<'_>) -> bool {
    if a.is_ancestor_of(b) || b.is_ancestor_of(a) {
        return false;
    }
    let Some(common) = a.ancestors().find(|ancestor| ancestor.is_ancestor_of(b)) else {
        return false;
    };
    let (Some(branch_a), Some(branch_b)) = (branch_of(common, a), branch_of(common, b)) else {
        return false;
    };
    match common.kind() {
        kinds::IF_EXPRESSION => {
            let condition = common.first_named_child();
            branch_a != branch_b && condition != Some(branch_a) && condition != Some(branch_b)
        }
        kinds::WHEN_EXPRESSION => {
            branch_a != branch_b && branch_a.kind() == kinds::WHEN_ENTRY && branch_b.kind() == kinds::WHEN_ENTRY
        }
        _ => false,
    }
}

impl Rule for ModifierReused {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "The modifier parameter is applied once"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let usages = modifier_usages(&function, config);
        for (index, usage) in usages.iter().enumerate() {
            let node = usage.call.node();
            let reused = usages
                .iter()
                .enumerate()
                .any(|(other, usage)| other != index && !mutually_exclusive(node, usage.call.node()));
            if reused {
                emitter.report(node, MESSAGE, false);
            }
        }
    }
}
