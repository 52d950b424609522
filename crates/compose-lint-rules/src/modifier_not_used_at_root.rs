//! Rule requiring the modifier to be applied to the root layout.
//!
//! # Rationale
//!
//! The `modifier` a caller passes describes the component as a whole:
//! its placement, size and semantics. Applying it to a child of the
//! root layout makes those instructions apply to only a part of it.
//!
//! # Configuration
//!
//! - `contentEmitters`, `contentEmittersDenylist`: adjust what counts as a
//!   layout
//!
//! # Suppression
//!
//! - `@Suppress("ModifierNotUsedAtRoot")` on the function or file
//! - `// compose-lint: allow(modifier-not-used-at-root)` comment

use compose_lint_core::emission::ContentEmitters;
use compose_lint_core::kotlin::{Call, Function};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::{modifier_usages, ModifierUsage};

/// Rule code for modifier-not-used-at-root.
pub const CODE: &str = "CL015";

/// Rule name for modifier-not-used-at-root.
pub const NAME: &str = "modifier-not-used-at-root";

const MESSAGE: &str = "The modifier parameter should be applied to the root level composable of the function, \
not to one of its children.";

/// Flags modifiers applied inside the content of another layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierNotUsedAtRoot;

impl ModifierNotUsedAtRoot {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// The emitting call whose content lambda contains `usage`, if any.
fn enclosing_layout<'t>(usage: &ModifierUsage<'t>, boundary: Function<'t>, emitters: &ContentEmitters) -> Option<Call<'t>> {
    let call = usage.call.node();
    call.ancestors()
        .take_while(|ancestor| *ancestor != boundary.node())
        .filter_map(Call::from_node)
        .find(|ancestor| {
            emitters.emits(ancestor)
                && ancestor
                    .lambda_arguments()
                    .iter()
                    .any(|lambda| lambda.is_ancestor_of(call))
        })
}

impl Rule for ModifierNotUsedAtRoot {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "The modifier parameter is applied to the root layout"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let usages = modifier_usages(&function, config);
        if usages.is_empty() {
            return;
        }
        let emitters = ContentEmitters::from_config(config);
        for usage in &usages {
            if enclosing_layout(usage, function, &emitters).is_some() {
                emitter.report(usage.argument.node(), MESSAGE, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_detects_modifier_on_child() {
        let violations = check_code(
            ModifierNotUsedAtRoot::new(),
            r#"
@Composable
fun Header(modifier: Modifier = Modifier) {
    Column {
        Text("Title", modifier = modifier)
    }
}
"#,
        );
        assert_eq!(lines(&violations), vec![5]);
    }

    #[test]
    fn test_root_usage_and_non_layout_wrappers_are_fine() {
        let violations = check_code(
            ModifierNotUsedAtRoot::new(),
            r#"
@Composable
fun Header(modifier: Modifier = Modifier, wide: Boolean) {
    val padded = modifier.padding(8.dp)
    if (wide) {
        Row(padded) { Text("Title") }
    } else {
        CompositionLocalProvider(LocalContentColor provides Color.Red) {
            Column(modifier = padded) { Text("Title") }
        }
    }
}
"#,
        );
        assert!(violations.is_empty());
    }
}
