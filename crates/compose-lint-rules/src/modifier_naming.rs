//! Rule enforcing modifier parameter names.
//!
//! # Rationale
//!
//! `modifier` is what every Compose API calls the parameter applied to the
//! root of a component. Extra modifiers for inner parts are named after
//! the part: `iconModifier`, `titleModifier`.
//!
//! # Suppression
//!
//! - `@Suppress("ModifierNaming")` on the function or file
//! - `// compose-lint: allow(modifier-naming)` comment

use compose_lint_core::kotlin::{Function, ModifierTypes, Parameter};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::signature_is_inherited;

/// Rule code for modifier-naming.
pub const CODE: &str = "CL014";

/// Rule name for modifier-naming.
pub const NAME: &str = "modifier-naming";

const SINGLE_MESSAGE: &str = "Modifiers should be named `modifier` when there is only one modifier parameter.";

const MULTIPLE_MESSAGE: &str = "Modifiers applied to a part of the component should be named after that part, \
ending in `Modifier` (e.g. `iconModifier`).";

/// Flags modifier parameters that are not named `modifier` or `xModifier`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierNaming;

impl ModifierNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModifierNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Modifier parameters are named `modifier` or `xModifier`"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if signature_is_inherited(&function) {
            return;
        }
        let modifier_types = ModifierTypes::from_config(config);
        let modifiers: Vec<Parameter<'_>> = function
            .parameters()
            .into_iter()
            .filter(|p| modifier_types.is_modifier(p))
            .collect();

        if let [only] = modifiers.as_slice() {
            if only.name().is_some_and(|name| name != "modifier") {
                emitter.report(only.node(), SINGLE_MESSAGE, false);
            }
            return;
        }
        for parameter in &modifiers {
            let Some(name) = parameter.name() else {
                continue;
            };
            if name != "modifier" && !name.ends_with("Modifier") {
                emitter.report(parameter.node(), MULTIPLE_MESSAGE, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_single_modifier_must_be_named_modifier() {
        let violations = check_code(
            ModifierNaming::new(),
            r"
@Composable
fun Avatar(m: Modifier = Modifier) {}

@Composable
fun Badge(modifier: Modifier = Modifier) {}
",
        );
        assert_eq!(lines(&violations), vec![3]);
        assert_eq!(violations[0].message, SINGLE_MESSAGE);
    }

    #[test]
    fn test_part_modifiers_end_in_modifier() {
        let violations = check_code(
            ModifierNaming::new(),
            r"
@Composable
fun Chip(
    modifier: Modifier = Modifier,
    iconModifier: Modifier = Modifier,
    textMod: Modifier = Modifier,
) {}
",
        );
        assert_eq!(lines(&violations), vec![6]);
        assert_eq!(violations[0].message, MULTIPLE_MESSAGE);
    }
}
