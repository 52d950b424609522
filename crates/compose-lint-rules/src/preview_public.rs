//! Rule requiring previews to be private.
//!
//! # Rationale
//!
//! Previews exist for the IDE. Public previews show up in autocomplete
//! for every consumer of the module and can be called by mistake.
//!
//! The rule fixes what it reports by making the preview `private`.
//!
//! # Suppression
//!
//! - `@Suppress("PreviewPublic")` on the function or file
//! - `// compose-lint: allow(preview-public)` comment

use compose_lint_core::kotlin::{Function, Visibility};
use compose_lint_core::syntax::kinds;
use compose_lint_core::{ConfigResolver, Emitter, Rule};

/// Rule code for preview-public.
pub const CODE: &str = "CL023";

/// Rule name for preview-public.
pub const NAME: &str = "preview-public";

const MESSAGE: &str = "Composables annotated with @Preview that are used only for previewing the UI should not be \
public.";

/// Flags and fixes public `@Preview` composables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewPublic;

impl PreviewPublic {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn make_private(function: &Function<'_>) {
    let explicit = function
        .node()
        .first_child_of_kind(kinds::MODIFIERS)
        .and_then(|modifiers| modifiers.first_child_of_kind(kinds::VISIBILITY_MODIFIER));
    if let Some(public) = explicit {
        public.replace_text("private");
        return;
    }
    let keyword = function
        .node()
        .children()
        .find(|child| !child.is_named() && child.kind() == "fun");
    if let Some(keyword) = keyword {
        keyword.replace_text("private fun");
    }
}

impl Rule for PreviewPublic {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Previews are private"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        if !function.is_preview() || function.visibility() != Visibility::Public {
            return;
        }
        if emitter.report(function.node(), MESSAGE, true).should_fix() {
            make_private(&function);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, fix_code, lines};

    #[test]
    fn test_detects_public_previews() {
        let violations = check_code(
            PreviewPublic::new(),
            r"
@Preview
@Composable
fun CardPreview() {}

@ThemePreviews
@Composable
public fun ThemedPreview() {}

@Preview
@Composable
private fun PrivatePreview() {}

@Preview
@Composable
internal fun InternalPreview() {}
",
        );
        assert_eq!(lines(&violations), vec![2, 6]);
    }

    #[test]
    fn test_fix_makes_previews_private() {
        let (fixed, remaining) = fix_code(
            PreviewPublic::new(),
            "@Preview\n@Composable\nfun A() {}\n\n@Preview\n@Composable\npublic fun B() {}\n",
        );
        assert_eq!(
            fixed,
            "@Preview\n@Composable\nprivate fun A() {}\n\n@Preview\n@Composable\nprivate fun B() {}\n"
        );
        assert!(remaining.is_empty());
    }
}
