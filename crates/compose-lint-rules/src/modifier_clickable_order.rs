//! Rule checking that clickable modifiers come after shaping modifiers.
//!
//! # Rationale
//!
//! Modifiers apply in chain order. In `Modifier.clickable { }.clip(CircleShape)`
//! the ripple and the touch target keep the rectangular bounds because
//! the clip only applies to what follows it. Shape first, then make it
//! clickable.
//!
//! # Suppression
//!
//! - `@Suppress("ModifierClickableOrder")` on the function or file
//! - `// compose-lint: allow(modifier-clickable-order)` comment

use compose_lint_core::kotlin::{chain_calls, chain_root, Call};
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::looks_like_modifier;

/// Rule code for modifier-clickable-order.
pub const CODE: &str = "CL010";

/// Rule name for modifier-clickable-order.
pub const NAME: &str = "modifier-clickable-order";

const CLICKABLES: &[&str] = &[
    "clickable",
    "combinedClickable",
    "selectable",
    "toggleable",
    "triStateToggleable",
];

/// Flags `clickable` applied before `clip` or a shaped `background`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierClickableOrder;

impl ModifierClickableOrder {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_clickable(call: &Call<'_>) -> bool {
    call.name().is_some_and(|name| CLICKABLES.contains(&name))
}

fn sets_shape(call: &Call<'_>) -> bool {
    match call.name() {
        Some("clip") => true,
        Some("background") => call.arguments().len() >= 2 || call.argument_named("shape").is_some(),
        _ => false,
    }
}

/// Outermost call of a chain starting at a modifier.
fn is_modifier_chain(node: Node<'_>) -> bool {
    node.kind() == kinds::CALL_EXPRESSION
        && !node
            .parent()
            .is_some_and(|parent| parent.kind() == kinds::NAVIGATION_EXPRESSION)
        && {
            let root = chain_root(node);
            root.kind() == kinds::IDENTIFIER && looks_like_modifier(root.original_text())
        }
}

impl Rule for ModifierClickableOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "`clickable` comes after `clip` and shaped `background` in a modifier chain"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        for chain in file.descendants().filter(|node| is_modifier_chain(*node)) {
            let calls = chain_calls(chain);
            let Some(index) = calls.iter().position(is_clickable) else {
                continue;
            };
            let Some(shape) = calls[index + 1..].iter().find(|call| sets_shape(call)) else {
                continue;
            };
            let clickable = calls[index].name().unwrap_or_default();
            let shaping = shape.name().unwrap_or_default();
            emitter.report(
                calls[index].node(),
                &format!(
                    "`{clickable}` is applied before `{shaping}`, so the click indication ignores the shape. \
                     Move `{shaping}` before `{clickable}` in the modifier chain."
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
    fn test_detects_clickable_before_shape() {
        let violations = check_code(
            ModifierClickableOrder::new(),
            r"
@Composable
fun Avatar(modifier: Modifier = Modifier) {
    Image(
        modifier = modifier
            .clickable { }
            .clip(CircleShape),
    )
    Box(Modifier.selectable(selected = true) { }.background(Color.Red, RoundedCornerShape(4.dp)))
}
",
        );
        assert_eq!(lines(&violations), vec![5, 9]);
        assert!(violations[0].message.starts_with("`clickable` is applied before `clip`"));
        assert!(violations[1].message.starts_with("`selectable` is applied before `background`"));
    }

    #[test]
    fn test_accepts_shape_first_and_plain_background() {
        let violations = check_code(
            ModifierClickableOrder::new(),
            r"
@Composable
fun Avatar(modifier: Modifier = Modifier) {
    Image(modifier = modifier.clip(CircleShape).clickable { })
    Box(Modifier.clickable { }.background(Color.Red))
    Box(Modifier.clickable { }.background(color = Color.Red).padding(4.dp))
}
",
        );
        assert!(violations.is_empty());
    }
}
