//! Rule enforcing the conventional parameter order of composables.
//!
//! # Rationale
//!
//! Composables read best when required parameters come first, then the
//! `modifier` as the first optional parameter, then the other optional
//! parameters, and finally a trailing lambda (with or without a default)
//! so callers can use trailing-lambda syntax.
//!
//! # Configuration
//!
//! - `treatAsLambda`, `treatAsComposableLambda`: extra type names that may
//!   form the trailing lambda
//!
//! # Suppression
//!
//! - `@Suppress("ParameterOrder")` on the function or file
//! - `// compose-lint: allow(parameter-order)` comment

use compose_lint_core::kotlin::{Function, LambdaTypes, ModifierTypes, Parameter};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::signature_is_inherited;

/// Rule code for parameter-order.
pub const CODE: &str = "CL022";

/// Rule name for parameter-order.
pub const NAME: &str = "parameter-order";

/// Flags composables whose parameters are out of the conventional order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterOrder;

impl ParameterOrder {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// The conventional order of `parameters`.
fn expected_order<'p, 't>(
    parameters: &'p [Parameter<'t>],
    lambda_types: &LambdaTypes<'_>,
    modifier_types: &ModifierTypes,
) -> Vec<&'p Parameter<'t>> {
    let (rest, trailing) = match parameters.split_last() {
        Some((last, rest)) if last.type_node().is_some_and(|ty| lambda_types.is_lambda(ty)) => (rest, Some(last)),
        _ => (parameters, None),
    };

    let required = rest.iter().filter(|p| !p.has_default());
    let optional_modifiers = rest
        .iter()
        .filter(|p| p.has_default() && modifier_types.is_modifier(p));
    let optional_others = rest
        .iter()
        .filter(|p| p.has_default() && !modifier_types.is_modifier(p));

    required
        .chain(optional_modifiers)
        .chain(optional_others)
        .chain(trailing)
        .collect()
}

fn render(parameters: &[&Parameter<'_>]) -> String {
    parameters
        .iter()
        .map(|p| p.node().original_text())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Rule for ParameterOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Required params, then modifier, then optional params, then a trailing lambda"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if signature_is_inherited(&function) {
            return;
        }
        let Some(list) = function.parameter_list() else {
            return;
        };
        let parameters = function.parameters();
        let lambda_types = LambdaTypes::from_config(function.node().tree().root(), config);

        let current: Vec<&Parameter<'_>> = parameters.iter().collect();
        let expected = expected_order(&parameters, &lambda_types, &ModifierTypes::from_config(config));
        if current == expected {
            return;
        }

        emitter.report(
            list,
            &format!(
                "Parameters in a composable function should be ordered following this pattern: params without \
                 defaults, modifiers, params with defaults and optionally, a trailing function that might not have \
                 a default param.\nCurrent params are: [{}] but should be [{}].",
                render(&current),
                render(&expected)
            ),
            false,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, lines};

    #[test]
    fn test_detects_out_of_order_parameters() {
        let violations = check_code(
            ParameterOrder::new(),
            r"
@Composable
fun Profile(
    modifier: Modifier = Modifier,
    name: String,
    enabled: Boolean = true,
    onClick: () -> Unit,
) {}
",
        );
        assert_eq!(lines(&violations), vec![3]);
        insta::assert_snapshot!(violations[0].message, @r"
        Parameters in a composable function should be ordered following this pattern: params without defaults, modifiers, params with defaults and optionally, a trailing function that might not have a default param.
        Current params are: [modifier: Modifier, name: String, enabled: Boolean, onClick: () -> Unit] but should be [name: String, modifier: Modifier, enabled: Boolean, onClick: () -> Unit].
        ");
    }

    #[test]
    fn test_accepts_conventional_order() {
        let violations = check_code(
            ParameterOrder::new(),
            r"
@Composable
fun Profile(
    name: String,
    onClick: () -> Unit,
    modifier: Modifier = Modifier,
    enabled: Boolean = true,
    content: @Composable () -> Unit = {},
) {}

@Composable
fun Empty() {}
",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_overrides_are_skipped() {
        let violations = check_code(
            ParameterOrder::new(),
            r"
class Impl : Screen {
    @Composable
    override fun Content(modifier: Modifier = Modifier, title: String) {}
}
",
        );
        assert!(violations.is_empty());
    }
}
