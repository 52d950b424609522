//! Rule requiring composables to emit from a single top-level point.
//!
//! # Rationale
//!
//! A composable emitting several top-level nodes relies on whatever layout
//! its caller happens to use, and cannot be given a single modifier.
//! Loops with an emitting body count as two emissions; `if`/`when` count
//! their busiest branch. Calls to other composables in the same file count
//! as whatever those composables emit.
//!
//! Extension composables (`fun ColumnScope.Items()`) are exempt since
//! emitting into the receiver's layout is their purpose.
//!
//! # Configuration
//!
//! - `contentEmitters`: extra composables known to emit content
//! - `contentEmittersDenylist`: composables never considered emitters
//!
//! # Suppression
//!
//! - `@Suppress("MultipleContentEmitters")` on the function or file
//! - `// compose-lint: allow(multiple-content-emitters)` comment

use std::collections::HashSet;

use compose_lint_core::emission::{ContentEmitters, EmissionCounter};
use compose_lint_core::syntax::Node;
use compose_lint_core::{ConfigResolver, Emitter, Rule};
use tracing::trace;

/// Rule code for multiple-content-emitters.
pub const CODE: &str = "CL018";

/// Rule name for multiple-content-emitters.
pub const NAME: &str = "multiple-content-emitters";

const MESSAGE: &str = "Composable functions should only be emitting content into the composition from one source \
at their top level.";

/// Flags composables with more than one top-level emission.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleContentEmitters;

impl MultipleContentEmitters {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MultipleContentEmitters {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Composables emit content from a single top-level point"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let emitters = ContentEmitters::from_config(config);
        let counter = EmissionCounter::new(EmissionCounter::components_in(file), &emitters);
        let mut reported = HashSet::new();

        let direct = counter.seed();
        for function in counter.components() {
            if !function.has_receiver() && direct.get(function) > 1 {
                emitter.report(function.node(), MESSAGE, false);
                reported.insert(function.node());
            }
        }

        let resolved = counter.resolve();
        for function in counter.components() {
            if function.has_receiver() || reported.contains(&function.node()) {
                continue;
            }
            let count = resolved.get(function);
            if count > 1 {
                trace!(function = function.name().unwrap_or_default(), count, "Emits through other composables");
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
    fn test_detects_direct_emitters() {
        let violations = check_code(
            MultipleContentEmitters::new(),
            r#"
@Composable
fun Something() {
    Text("Hi")
    Text("there")
}

@Composable
fun Fine() {
    Column {
        Text("Hi")
        Text("there")
    }
}
"#,
        );
        assert_eq!(lines(&violations), vec![2]);
        assert_eq!(violations[0].code, CODE);
    }

    #[test]
    fn test_detects_emission_through_same_file_composables() {
        let violations = check_code(
            MultipleContentEmitters::new(),
            r#"
@Composable
fun Title() {
    Text("title")
}

@Composable
fun Page() {
    Title()
    Image(painter = painter, contentDescription = null)
}

@Composable
fun Wrapper() {
    Page()
}
"#,
        );
        // `Wrapper` emits whatever `Page` emits, so it is reported as well.
        assert_eq!(lines(&violations), vec![7, 13]);
    }

    #[test]
    fn test_loops_count_twice_and_branches_once() {
        let violations = check_code(
            MultipleContentEmitters::new(),
            r#"
@Composable
fun Items(items: ImmutableList<String>) {
    for (item in items) {
        Text(item)
    }
}

@Composable
fun Either(flag: Boolean) {
    if (flag) {
        Text("a")
    } else {
        Text("b")
    }
}
"#,
        );
        assert_eq!(lines(&violations), vec![2]);
    }

    #[test]
    fn test_wrappers_passed_a_modifier_count_once() {
        let violations = check_code(
            MultipleContentEmitters::new(),
            r#"
@Composable
fun MyCard(modifier: Modifier = Modifier) {
    Card(modifier) {
        Text("card")
    }
}

@Composable
fun Screen(modifier: Modifier = Modifier) {
    MyCard(modifier = modifier)
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_annotated_declarations_with_visibility() {
        let violations = check_code(
            MultipleContentEmitters::new(),
            r#"
@Composable
fun Title() { Text("title") }

@Composable
public fun Header() {
    Text("a")
    Text("b")
}

@Suppress("MultipleContentEmitters")
@Composable
internal fun Quiet() {
    Text("a")
    Text("b")
}

@Composable
private fun Body() {
    Title()
    Text("body")
}
"#,
        );
        assert_eq!(lines(&violations), vec![5, 18]);
    }

    #[test]
    fn test_receiver_composables_are_exempt() {
        let violations = check_code(
            MultipleContentEmitters::new(),
            r#"
@Composable
fun ColumnScope.Rows() {
    Text("a")
    Text("b")
}
"#,
        );
        assert!(violations.is_empty());
    }
}
