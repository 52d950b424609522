//! Rule restricting which CompositionLocals a codebase declares.
//!
//! # Rationale
//!
//! CompositionLocals are implicit dependencies: callers cannot see them in
//! a composable's signature. New ones should be rare and deliberate.
//!
//! # Configuration
//!
//! - `allowedCompositionLocals`: names that may be declared
//!
//! # Suppression
//!
//! - `@Suppress("CompositionLocalAllowlist")` on the property or file
//! - `// compose-lint: allow(composition-local-allowlist)` comment

use compose_lint_core::kotlin::Property;
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::is_composition_local;

/// Rule code for composition-local-allowlist.
pub const CODE: &str = "CL002";

/// Rule name for composition-local-allowlist.
pub const NAME: &str = "composition-local-allowlist";

/// Flags CompositionLocal declarations missing from the allow-list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositionLocalAllowlist;

impl CompositionLocalAllowlist {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CompositionLocalAllowlist {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Only allow-listed CompositionLocals may be declared"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let allowed = config.get_set("allowedCompositionLocals", &[]);
        for property in file
            .find_descendants(kinds::PROPERTY_DECLARATION)
            .filter_map(Property::from_node)
            .filter(is_composition_local)
        {
            let Some(name) = property.name() else {
                continue;
            };
            if allowed.contains(name) {
                continue;
            }
            emitter.report(
                property.node(),
                &format!(
                    "CompositionLocals are implicit dependencies of composables and creating new ones should be avoided. \
                     If `{name}` is really needed, add it to `allowedCompositionLocals`."
                ),
                false,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, check_code_with, lines};

    const SOURCE: &str = r"
val LocalUser = compositionLocalOf { User.Guest }

private val LocalTheme = staticCompositionLocalOf { Theme() }

val LocalNotALocal = listOf(1, 2)
";

    #[test]
    fn test_detects_new_composition_locals() {
        let violations = check_code(CompositionLocalAllowlist::new(), SOURCE);
        assert_eq!(lines(&violations), vec![2, 4]);
        assert!(violations[0].message.contains("`LocalUser`"));
    }

    #[test]
    fn test_allow_list_is_respected() {
        let violations = check_code_with(
            CompositionLocalAllowlist::new(),
            SOURCE,
            r#"allowedCompositionLocals = ["LocalTheme"]"#,
        );
        assert_eq!(lines(&violations), vec![2]);
    }
}
