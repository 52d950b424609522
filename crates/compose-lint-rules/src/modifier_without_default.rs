//! Rule requiring modifier parameters to default to `Modifier`.
//!
//! # Rationale
//!
//! Callers should be able to leave the modifier out. `= Modifier` is the
//! empty modifier and the conventional default.
//!
//! Nullable modifiers and composables whose signature is inherited (where
//! Kotlin does not allow defaults) are exempt. The rule can fix what it
//! reports by appending ` = Modifier` (` = GlanceModifier` for Glance).
//!
//! # Configuration
//!
//! - `customModifiers`: extra type names treated as modifiers
//!
//! # Suppression
//!
//! - `@Suppress("ModifierWithoutDefault")` on the function or file
//! - `// compose-lint: allow(modifier-without-default)` comment

use compose_lint_core::kotlin::{Function, ModifierTypes};
use compose_lint_core::{ConfigResolver, Emitter, Rule};
use tracing::debug;

use crate::support::signature_is_inherited;

/// Rule code for modifier-without-default.
pub const CODE: &str = "CL017";

/// Rule name for modifier-without-default.
pub const NAME: &str = "modifier-without-default";

const MESSAGE: &str = "This @Composable function has a modifier parameter but it doesn't have a default value. \
Add `= Modifier` as its default.";

/// Flags and fixes modifier parameters without a default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierWithoutDefault;

impl ModifierWithoutDefault {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModifierWithoutDefault {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Modifier parameters default to `Modifier`"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if signature_is_inherited(&function) {
            return;
        }
        let modifier_types = ModifierTypes::from_config(config);
        let missing = function
            .parameters()
            .into_iter()
            .filter(|p| modifier_types.is_modifier(p) && !p.is_nullable() && !p.has_default());
        for parameter in missing {
            let node = parameter.node();
            if emitter.report(node, MESSAGE, true).should_fix() {
                let default = ModifierTypes::default_for(&parameter);
                debug!(parameter = parameter.name().unwrap_or_default(), default, "Adding default");
                node.replace_text(format!("{} = {default}", node.text()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, check_code_with, fix_code, lines};

    #[test]
    fn test_detects_modifier_without_default() {
        let violations = check_code(
            ModifierWithoutDefault::new(),
            r"
@Composable
fun Avatar(modifier: Modifier) {}

@Composable
fun Badge(modifier: Modifier = Modifier, iconModifier: Modifier?) {}

interface Screen {
    @Composable
    fun Content(modifier: Modifier)
}
",
        );
        assert_eq!(lines(&violations), vec![3]);
        assert!(violations[0].can_auto_correct);
    }

    #[test]
    fn test_fix_appends_default() {
        let (fixed, remaining) = fix_code(
            ModifierWithoutDefault::new(),
            "@Composable\nfun Avatar(name: String, modifier: Modifier) {}\n",
        );
        assert_eq!(fixed, "@Composable\nfun Avatar(name: String, modifier: Modifier = Modifier) {}\n");
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_glance_and_custom_modifiers() {
        let source = r"
@Composable
fun Widget(modifier: GlanceModifier) {}

@Composable
fun Styled(style: StyleModifier) {}
";
        assert_eq!(lines(&check_code(ModifierWithoutDefault::new(), source)), vec![3]);
        let violations = check_code_with(ModifierWithoutDefault::new(), source, "customModifiers = \"StyleModifier\"");
        assert_eq!(lines(&violations), vec![3, 6]);

        let (fixed, _) = fix_code(ModifierWithoutDefault::new(), source);
        assert!(fixed.contains("fun Widget(modifier: GlanceModifier = GlanceModifier)"));
    }
}
