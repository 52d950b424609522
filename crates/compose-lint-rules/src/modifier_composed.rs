//! Rule discouraging `Modifier.composed { }`.
//!
//! # Rationale
//!
//! `composed` runs a composition for every element it is applied to and
//! defeats skipping. `Modifier.Node` replaces it.
//!
//! # Suppression
//!
//! - `@Suppress("ModifierComposed")` on the function or file
//! - `// compose-lint: allow(modifier-composed)` comment

use compose_lint_core::kotlin::{calls_in, Function};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::modifier_composable::is_modifier_factory;

/// Rule code for modifier-composed.
pub const CODE: &str = "CL012";

/// Rule name for modifier-composed.
pub const NAME: &str = "modifier-composed";

const MESSAGE: &str = "Modifier.composed { ... } is no longer recommended due to performance issues. You should \
use the Modifier.Node API instead, as it was designed from the ground up to be far more performant than composed \
modifiers.";

/// Flags modifier factories implemented with `composed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierComposed;

impl ModifierComposed {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModifierComposed {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Modifier factories use `Modifier.Node` rather than `composed`"
    }

    fn visit_function(&self, function: Function<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        if !is_modifier_factory(&function) {
            return;
        }
        let Some(body) = function.body() else {
            return;
        };
        if calls_in(body).any(|call| call.name() == Some("composed")) {
            emitter.report(function.node(), MESSAGE, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_detects_composed_factories() {
        let violations = check_code(
            ModifierComposed::new(),
            r"
fun Modifier.shimmer(): Modifier = composed {
    val transition = rememberInfiniteTransition()
    this
}

fun Modifier.pulse(): Modifier {
    return this.then(Modifier.composed { this })
}

fun Modifier.plain(): Modifier = padding(4.dp)

fun notAModifier() = composed { this }
",
        );
        assert_eq!(lines(&violations), vec![2, 7]);
    }
}
