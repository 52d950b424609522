//! Rule forbidding composables that both emit content and return a value.
//!
//! # Rationale
//!
//! A composable that emits UI and also hands a value back to its caller
//! mixes two responsibilities. Control surfaces for the caller belong in
//! parameters (state holders, callbacks).
//!
//! Emission is counted across the file: a composable that only calls other
//! same-file composables which emit is considered to emit too.
//!
//! # Configuration
//!
//! - `contentEmitters`: extra composables known to emit content
//! - `contentEmittersDenylist`: composables never considered emitters
//!
//! # Suppression
//!
//! - `@Suppress("ContentEmitterReturningValues")` on the function or file
//! - `// compose-lint: allow(content-emitter-returning-values)` comment

use compose_lint_core::emission::{ContentEmitters, EmissionCounter};
use compose_lint_core::syntax::Node;
use compose_lint_core::{ConfigResolver, Emitter, Rule};

/// Rule code for content-emitter-returning-values.
pub const CODE: &str = "CL004";

/// Rule name for content-emitter-returning-values.
pub const NAME: &str = "content-emitter-returning-values";

const MESSAGE: &str = "Composable functions should either emit content into the composition or return a value, \
but not both. If a composable should offer additional control surfaces to its caller, those control surfaces or \
callbacks should be provided as parameters to the composable function by the caller.";

/// Flags value-returning composables that emit UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentEmitterReturningValues;

impl ContentEmitterReturningValues {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ContentEmitterReturningValues {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Composables either emit content or return a value"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let emitters = ContentEmitters::from_config(config);
        let counter = EmissionCounter::new(EmissionCounter::components_in(file), &emitters);
        let counts = counter.resolve();

        for function in counter.components() {
            if function.returns_value() && counts.get(function) > 0 {
                emitter.report(function.node(), MESSAGE, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_detects_direct_and_indirect_emission() {
        let violations = check_code(
            ContentEmitterReturningValues::new(),
            r#"
@Composable
fun Header() {
    Text("header")
}

@Composable
fun direct(): Boolean {
    Text("hello")
    return true
}

@Composable
fun indirect(): Int {
    Header()
    return 1
}

@Composable
fun rememberCount(): Int {
    val count = remember { mutableIntStateOf(0) }
    return count.intValue
}
"#,
        );
        assert_eq!(lines(&violations), vec![7, 13]);
    }

    #[test]
    fn test_unit_composables_are_fine() {
        let violations = check_code(
            ContentEmitterReturningValues::new(),
            r#"
@Composable
fun Greeting() {
    Text("hello")
}
"#,
        );
        assert!(violations.is_empty());
    }
}
