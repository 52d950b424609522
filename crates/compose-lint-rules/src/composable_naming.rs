//! Rule enforcing the naming conventions of composable functions.
//!
//! # Rationale
//!
//! Composables returning `Unit` are declarative entities that get emitted
//! into the composition, so they are nouns and start with an upper-case
//! letter. Composables returning a value behave like factory functions and
//! start with a lower-case letter (`rememberScrollState`).
//!
//! # Configuration
//!
//! - `allowedComposableFunctionNames`: regular expressions for names that
//!   are exempt (e.g. `.*Presenter`)
//!
//! # Suppression
//!
//! - `@Suppress("ComposableNaming")` on the function or file
//! - `// compose-lint: allow(composable-naming)` comment

use compose_lint_core::kotlin::Function;
use compose_lint_core::utils::naming::{starts_lower, starts_upper};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::{matches_any, name_patterns};

/// Rule code for composable-naming.
pub const CODE: &str = "CL001";

/// Rule name for composable-naming.
pub const NAME: &str = "composable-naming";

const UNIT_SHOULD_BE_UPPERCASE: &str = "Composable functions that return Unit should start with an uppercase letter. \
They are considered declarative entities that can be either emitted in a composition or be part of the composition \
of other composables, and as such are nouns and should be capitalized.";

const VALUE_SHOULD_BE_LOWERCASE: &str = "Composable functions that return a value should start with a lowercase letter. \
While useful and accepted outside of @Composable functions, this factory function convention has drawbacks that set \
inappropriate expectations for callers.";

/// Checks the capitalisation of composable function names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposableNaming;

impl ComposableNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ComposableNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Unit composables are PascalCase, value-returning composables are camelCase"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if function.has_inherited_signature() || function.is_operator() {
            return;
        }
        let Some(name) = function.name() else {
            return;
        };
        if matches_any(&name_patterns(config, "allowedComposableFunctionNames", &[]), name) {
            return;
        }

        // `fun rememberX() = ...` has an inferred type that may or may not be Unit.
        let inferred = function.return_type().is_none() && function.expression_body().is_some();

        if function.returns_value() {
            if starts_upper(name) {
                emitter.report(function.node(), VALUE_SHOULD_BE_LOWERCASE, false);
            }
        } else if !inferred && starts_lower(name) {
            emitter.report(function.node(), UNIT_SHOULD_BE_UPPERCASE, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, check_code_with, lines};

    #[test]
    fn test_detects_lowercase_unit_composables() {
        let violations = check_code(
            ComposableNaming::new(),
            r#"
@Composable
fun myButton() {
    Text("hi")
}

@Composable
fun MyButton(): Unit {
    Text("hi")
}
"#,
        );
        assert_eq!(lines(&violations), vec![2]);
        assert_eq!(violations[0].code, CODE);
        assert!(violations[0].message.contains("uppercase"));
    }

    #[test]
    fn test_detects_uppercase_value_composables() {
        let violations = check_code(
            ComposableNaming::new(),
            r"
@Composable
fun RememberState(): State<Int> {
    return remember { mutableIntStateOf(0) }
}

@Composable
fun rememberState(): State<Int> {
    return remember { mutableIntStateOf(0) }
}
",
        );
        assert_eq!(lines(&violations), vec![2]);
        assert!(violations[0].message.contains("lowercase"));
    }

    #[test]
    fn test_skips_overrides_and_inferred_types() {
        let violations = check_code(
            ComposableNaming::new(),
            r"
class Impl : Screen {
    @Composable
    override fun content() {}
}

@Composable
fun rememberThing() = remember { Thing() }
",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_allowed_names_are_skipped() {
        let source = r"
@Composable
fun myPresenter() {}
";
        assert_eq!(check_code(ComposableNaming::new(), source).len(), 1);
        let violations = check_code_with(
            ComposableNaming::new(),
            source,
            r#"allowedComposableFunctionNames = [".*Presenter"]"#,
        );
        assert!(violations.is_empty());
    }
}
