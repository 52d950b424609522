//! Rule flagging read-only collection interfaces as composable parameters.
//!
//! # Rationale
//!
//! `List`, `Set` and `Map` are interfaces the compiler cannot prove
//! immutable, so a composable taking one is never skipped. Immutable
//! collections from `kotlinx.collections.immutable`, or an `@Immutable`
//! wrapper, make the parameter stable.
//!
//! Opt-in: projects with strong skipping enabled don't need it.
//!
//! # Suppression
//!
//! - `@Suppress("UnstableCollections")` on the function or file
//! - `// compose-lint: allow(unstable-collections)` comment

use compose_lint_core::kotlin::Function;
use compose_lint_core::{ConfigResolver, Emitter, Rule, Severity};

/// Rule code for unstable-collections.
pub const CODE: &str = "CL025";

/// Rule name for unstable-collections.
pub const NAME: &str = "unstable-collections";

const UNSTABLE: &[&str] = &["Collection", "List", "Set", "Map"];

/// Flags `List`, `Set`, `Map` and `Collection` parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnstableCollections;

impl UnstableCollections {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UnstableCollections {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Composables take immutable collections"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        for parameter in function.parameters() {
            let Some(ty) = parameter.simple_type_name() else {
                continue;
            };
            if !UNSTABLE.contains(&ty.as_str()) {
                continue;
            }
            let name = parameter.name().unwrap_or("items");
            let type_text = parameter.type_text().unwrap_or(ty.as_str());
            emitter.report(
                parameter.node(),
                &format!(
                    "The Compose Compiler cannot infer the stability of a parameter if a {ty} is used in it, even \
                     if the item type is stable. Use Kotlinx Immutable Collections instead (`{name}: Immutable{ty}`) \
                     or wrap it in an `@Immutable` class holding `{type_text}`."
                ),
                false,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_detects_collection_interfaces() {
        let violations = check_code(
            UnstableCollections::new(),
            r"
@Composable
fun Cart(
    items: List<Item>,
    tags: Set<String>?,
    prices: ImmutableMap<String, Int>,
    count: Int,
) {}
",
        );
        assert_eq!(lines(&violations), vec![4, 5]);
        assert!(violations[0].message.contains("(`items: ImmutableList`)"));
        assert!(violations[0].message.contains("holding `List<Item>`"));
    }
}
