//! Rule requiring state created in a composable to be remembered.
//!
//! # Rationale
//!
//! `val count = mutableStateOf(0)` in a composable body creates a fresh
//! state object on every recomposition, so every write is lost at the
//! next one. Wrap it in `remember { }` (or `rememberSaveable { }`).
//!
//! # Suppression
//!
//! - `@Suppress("RememberMissing")` on the function or file
//! - `// compose-lint: allow(remember-missing)` comment

use compose_lint_core::kotlin::{calls_in, is_remembered, Function};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::owning_function;

/// Rule code for remember-missing.
pub const CODE: &str = "CL024";

/// Rule name for remember-missing.
pub const NAME: &str = "remember-missing";

const STATE_FACTORIES: &[&str] = &[
    "mutableStateOf",
    "mutableIntStateOf",
    "mutableLongStateOf",
    "mutableFloatStateOf",
    "mutableDoubleStateOf",
    "mutableStateListOf",
    "mutableStateMapOf",
    "derivedStateOf",
];

/// Flags state factories called in a composable without `remember`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RememberMissing;

impl RememberMissing {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RememberMissing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "State created in a composable is wrapped in `remember`"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        let Some(body) = function.body() else {
            return;
        };
        let boundary = function.node();
        for call in calls_in(body) {
            let Some(name) = call.name().filter(|name| STATE_FACTORIES.contains(name)) else {
                continue;
            };
            if call.receiver().is_some()
                || owning_function(call.node()) != Some(boundary)
                || is_remembered(call.node(), boundary)
            {
                continue;
            }
            emitter.report(
                call.node(),
                &format!(
                    "Using `{name}` in a @Composable function without it being inside of a remember function. If \
                     you don't remember the state instance, a new state instance will be created when the function \
                     is recomposed."
                ),
                false,
            );
        }
    }
}
