//! Rule requiring `XDefaults` objects to be as visible as their composable.
//!
//! # Rationale
//!
//! A public composable whose default values come from an internal
//! `CardDefaults` object leaves callers unable to build on those defaults
//! (`CardDefaults.elevation(...)`) when they need to tweak one value.
//!
//! # Suppression
//!
//! - `@Suppress("DefaultsVisibility")` on the object or file
//! - `// compose-lint: allow(defaults-visibility)` comment

use std::collections::{HashMap, HashSet};

use compose_lint_core::emission::EmissionCounter;
use compose_lint_core::kotlin::Visibility;
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::is_reference;

/// Rule code for defaults-visibility.
pub const CODE: &str = "CL007";

/// Rule name for defaults-visibility.
pub const NAME: &str = "defaults-visibility";

/// Flags `*Defaults` objects less visible than a composable using them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsVisibility;

impl DefaultsVisibility {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DefaultsVisibility {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "`XDefaults` objects are at least as visible as the composables using them"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        let objects: HashMap<&str, Node<'_>> = file
            .find_descendants(kinds::OBJECT_DECLARATION)
            .filter_map(|object| {
                let name = object.first_child_of_kind(kinds::IDENTIFIER)?.original_text();
                name.ends_with("Defaults").then_some((name, object))
            })
            .collect();
        if objects.is_empty() {
            return;
        }

        let mut reported = HashSet::new();
        for function in EmissionCounter::components_in(file) {
            let visibility = function.visibility();
            for default in function.parameters().iter().filter_map(|p| p.default_value()) {
                let used = std::iter::once(default)
                    .chain(default.descendants())
                    .filter(|node| node.kind() == kinds::IDENTIFIER && is_reference(*node))
                    .filter_map(|node| objects.get(node.original_text()));
                for &object in used {
                    if Visibility::of(object) >= visibility || !reported.insert(object) {
                        continue;
                    }
                    let object_name = object
                        .first_child_of_kind(kinds::IDENTIFIER)
                        .map_or("", |id| id.original_text());
                    emitter.report(
                        object,
                        &format!(
                            "`{object_name}` is {} but is used by the {} composable `{}`. Defaults objects should \
                             be at least as visible as the composables using them.",
                            Visibility::of(object).keyword(),
                            visibility.keyword(),
                            function.name().unwrap_or_default()
                        ),
                        false,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_detects_less_visible_defaults() {
        let violations = check_code(
            DefaultsVisibility::new(),
            r"
internal object CardDefaults {
    val Elevation = 2.dp
}

@Composable
fun Card(elevation: Dp = CardDefaults.Elevation) {}

@Composable
fun OtherCard(elevation: Dp = CardDefaults.Elevation) {}
",
        );
        assert_eq!(lines(&violations), vec![2]);
        assert!(violations[0].message.contains("`CardDefaults` is internal but is used by the public composable `Card`"));
    }

    #[test]
    fn test_matching_visibility_is_fine() {
        let violations = check_code(
            DefaultsVisibility::new(),
            r"
internal object ChipDefaults {
    val Padding = 4.dp
}

@Composable
internal fun Chip(padding: Dp = ChipDefaults.Padding) {}

@Composable
private fun PrivateChip(padding: Dp = ChipDefaults.Padding) {}
",
        );
        assert!(violations.is_empty());
    }
}
