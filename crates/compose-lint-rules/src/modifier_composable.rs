//! Rule discouraging `@Composable` modifier factories.
//!
//! # Rationale
//!
//! A `@Composable fun Modifier.fade(): Modifier` cannot be skipped and is
//! recomposed with its caller. `Modifier.Node` based modifiers are the
//! supported way to build stateful modifiers.
//!
//! # Suppression
//!
//! - `@Suppress("ModifierComposable")` on the function or file
//! - `// compose-lint: allow(modifier-composable)` comment

use compose_lint_core::kotlin::{simple_type_name, Function};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

/// Rule code for modifier-composable.
pub const CODE: &str = "CL011";

/// Rule name for modifier-composable.
pub const NAME: &str = "modifier-composable";

const MESSAGE: &str = "Using @Composable builder functions for modifiers is not recommended, as they cause \
unnecessary recompositions. You should use the Modifier.Node API instead, as it limits recomposition to just the \
modifier instance, rather than the whole function tree.";

/// Flags `@Composable` extension functions on `Modifier` that build modifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierComposable;

impl ModifierComposable {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Whether `function` is declared as `fun Modifier.x()` and yields a modifier.
pub(crate) fn is_modifier_factory(function: &Function<'_>) -> bool {
    let on_modifier = function
        .receiver_type()
        .and_then(simple_type_name)
        .is_some_and(|name| name == "Modifier");
    let returns_other = function
        .return_type()
        .is_some_and(|ty| simple_type_name(ty).as_deref() != Some("Modifier"));
    on_modifier && !returns_other
}

impl Rule for ModifierComposable {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Modifier factories are not @Composable"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        if is_modifier_factory(&function) {
            emitter.report(function.node(), MESSAGE, false);
        }
    }
}
