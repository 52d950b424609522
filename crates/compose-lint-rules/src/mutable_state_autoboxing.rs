//! Rule preferring the primitive `mutableStateOf` specialisations.
//!
//! # Rationale
//!
//! `mutableStateOf(0)` stores a boxed `Integer` and allocates on every
//! write. `mutableIntStateOf`, `mutableLongStateOf`, `mutableFloatStateOf`
//! and `mutableDoubleStateOf` store the primitive directly.
//!
//! Only calls whose argument is a numeric literal are checked, since the
//! literal fixes the type. The rule fixes what it reports.
//!
//! # Suppression
//!
//! - `@Suppress("MutableStateAutoboxing")` on the function or file
//! - `// compose-lint: allow(mutable-state-autoboxing)` comment

use compose_lint_core::kotlin::{calls_in, Call};
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

/// Rule code for mutable-state-autoboxing.
pub const CODE: &str = "CL020";

/// Rule name for mutable-state-autoboxing.
pub const NAME: &str = "mutable-state-autoboxing";

/// Flags `mutableStateOf` calls holding a primitive literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutableStateAutoboxing;

impl MutableStateAutoboxing {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// The specialised factory for a numeric literal, if there is one.
fn specialised_factory(literal: Node<'_>) -> Option<&'static str> {
    let literal = if literal.kind() == kinds::UNARY_EXPRESSION {
        literal.first_named_child()?
    } else {
        literal
    };
    let text = literal.original_text();
    match literal.kind() {
        kinds::NUMBER_LITERAL if text.contains(|c: char| matches!(c, 'u' | 'U')) => None,
        kinds::NUMBER_LITERAL if text.ends_with(|c: char| matches!(c, 'l' | 'L')) => Some("mutableLongStateOf"),
        kinds::NUMBER_LITERAL => Some("mutableIntStateOf"),
        kinds::FLOAT_LITERAL if text.ends_with(|c: char| matches!(c, 'f' | 'F')) => Some("mutableFloatStateOf"),
        kinds::FLOAT_LITERAL => Some("mutableDoubleStateOf"),
        _ => None,
    }
}

fn replacement(call: &Call<'_>) -> Option<&'static str> {
    if call.name() != Some("mutableStateOf") || call.receiver().is_some() {
        return None;
    }
    let head = call.callee().parent()?;
    if head.first_child_of_kind(kinds::TYPE_ARGUMENTS).is_some() {
        return None;
    }
    let arguments = call.arguments();
    let [argument] = arguments.as_slice() else {
        return None;
    };
    specialised_factory(argument.expression()?)
}

impl Rule for MutableStateAutoboxing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Primitive state uses the `mutableXStateOf` specialisations"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        for call in calls_in(file) {
            let Some(factory) = replacement(&call) else {
                continue;
            };
            let decision = emitter.report(
                call.callee(),
                &format!("Using mutableStateOf with a primitive value autoboxes it. Use `{factory}` instead."),
                true,
            );
            if decision.should_fix() {
                call.callee().replace_text(factory);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, fix_code, lines};

    const SOURCE: &str = r"
@Composable
fun Counter() {
    var count by remember { mutableStateOf(0) }
    var total by remember { mutableStateOf(-1L) }
    var ratio by remember { mutableStateOf(0.5f) }
    var precise by remember { mutableStateOf(0.5) }
    var nullable by remember { mutableStateOf<Int?>(0) }
    var unsigned by remember { mutableStateOf(1u) }
    var name by remember { mutableStateOf(initial) }
}
";

    #[test]
    fn test_detects_primitive_literals() {
        let violations = check_code(MutableStateAutoboxing::new(), SOURCE);
        assert_eq!(lines(&violations), vec![4, 5, 6, 7]);
        assert!(violations.iter().all(|v| v.can_auto_correct));
    }

    #[test]
    fn test_fix_uses_specialised_factories() {
        let (fixed, remaining) = fix_code(MutableStateAutoboxing::new(), SOURCE);
        assert!(remaining.is_empty());
        assert!(fixed.contains("mutableIntStateOf(0)"));
        assert!(fixed.contains("mutableLongStateOf(-1L)"));
        assert!(fixed.contains("mutableFloatStateOf(0.5f)"));
        assert!(fixed.contains("mutableDoubleStateOf(0.5)"));
        assert!(fixed.contains("mutableStateOf<Int?>(0)"));
    }
}
