//! Rule requiring content-emitting composables to accept a `Modifier`.
//!
//! # Rationale
//!
//! A modifier parameter is how callers place, size and decorate a
//! component. Without one, every caller has to wrap the component in a
//! `Box` to move it.
//!
//! Composables returning a value, previews and composables whose
//! signature is inherited are exempt.
//!
//! # Configuration
//!
//! - `checkModifiersForVisibility`: `only_public` (default),
//!   `public_and_internal` or `all`
//! - `contentEmitters`, `contentEmittersDenylist`: adjust what counts as
//!   emitting content
//!
//! # Suppression
//!
//! - `@Suppress("ModifierMissing")` on the function or file
//! - `// compose-lint: allow(modifier-missing)` comment

use compose_lint_core::emission::ContentEmitters;
use compose_lint_core::kotlin::{calls_in, Function, ModifierTypes};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::{signature_is_inherited, visibility_is_checked};

/// Rule code for modifier-missing.
pub const CODE: &str = "CL013";

/// Rule name for modifier-missing.
pub const NAME: &str = "modifier-missing";

const MESSAGE: &str = "This @Composable function emits content but doesn't have a modifier parameter.";

/// Flags emitting composables without a modifier parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierMissing;

impl ModifierMissing {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModifierMissing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Composables that emit content accept a `Modifier`"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if function.returns_value()
            || signature_is_inherited(&function)
            || function.is_preview()
            || !visibility_is_checked(config, &function)
            || ModifierTypes::from_config(config)
                .modifier_parameter(&function)
                .is_some()
        {
            return;
        }
        let Some(body) = function.body() else {
            return;
        };
        let emitters = ContentEmitters::from_config(config);
        if calls_in(body).any(|call| emitters.emits(&call)) {
            emitter.report(function.node(), MESSAGE, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, check_code_with, lines};

    const SOURCE: &str = r#"
@Composable
fun Title(text: String) {
    Text(text)
}

@Composable
internal fun Subtitle(text: String) {
    Text(text)
}

@Composable
fun Fine(text: String, modifier: Modifier = Modifier) {
    Text(text, modifier = modifier)
}

@Composable
fun Effects(key: String) {
    LaunchedEffect(key) { }
}

@Preview
@Composable
fun TitlePreview() {
    Title("x")
    Text("preview")
}

@Composable
fun rememberTitle(): String {
    Text("x")
    return "x"
}
"#;

    #[test]
    fn test_detects_missing_modifier() {
        let violations = check_code(ModifierMissing::new(), SOURCE);
        assert_eq!(lines(&violations), vec![2]);
        assert_eq!(violations[0].message, MESSAGE);
    }

    #[test]
    fn test_visibility_option_widens_the_check() {
        let violations = check_code_with(
            ModifierMissing::new(),
            SOURCE,
            "checkModifiersForVisibility = \"public_and_internal\"",
        );
        assert_eq!(lines(&violations), vec![2, 7]);
    }
}
