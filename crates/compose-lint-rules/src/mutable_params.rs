//! Rule forbidding mutable types as composable parameters.
//!
//! # Rationale
//!
//! Compose only observes writes to `State`. A composable mutating a
//! `MutableList` it was given, or a caller mutating it later, never
//! triggers recomposition. Pass immutable data down and events up.
//!
//! # Suppression
//!
//! - `@Suppress("MutableParams")` on the function or file
//! - `// compose-lint: allow(mutable-params)` comment

use compose_lint_core::kotlin::Function;
use compose_lint_core::{ConfigResolver, Emitter, Rule};

/// Rule code for mutable-params.
pub const CODE: &str = "CL019";

/// Rule name for mutable-params.
pub const NAME: &str = "mutable-params";

const MUTABLE_TYPES: &[&str] = &[
    "MutableState",
    "MutableList",
    "MutableSet",
    "MutableMap",
    "MutableCollection",
    "ArrayList",
    "HashSet",
    "HashMap",
    "LinkedHashSet",
    "LinkedHashMap",
];

const MESSAGE: &str = "Using mutable objects as state in Compose will cause your users to see incorrect or stale \
data in your app. Mutable objects that are not observable, such as `ArrayList` or a mutable data class, cannot be \
observed by Compose to trigger recomposition when they change.";

/// Flags parameters typed as mutable collections or `MutableState`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutableParams;

impl MutableParams {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MutableParams {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Composables don't take mutable collections or `MutableState`"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        for parameter in function.parameters() {
            let mutable = parameter
                .simple_type_name()
                .is_some_and(|ty| MUTABLE_TYPES.contains(&ty.as_str()));
            if mutable {
                emitter.report(parameter.node(), MESSAGE, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_detects_mutable_parameters() {
        let violations = check_code(
            MutableParams::new(),
            r"
@Composable
fun Cart(
    items: MutableList<Item>,
    selection: MutableState<Item?>?,
    tags: kotlin.collections.HashMap<String, Tag>,
    total: List<Item>,
    state: State<Int>,
) {}
",
        );
        assert_eq!(lines(&violations), vec![4, 5, 6]);
    }
}
