//! Rule catching lambda parameters captured by restartable effects.
//!
//! # Rationale
//!
//! `LaunchedEffect(Unit) { onTimeout() }` captures the `onTimeout` passed
//! on the first composition and keeps calling it after the caller has
//! passed a new one. Either key the effect on the lambda so it restarts,
//! or read it through `rememberUpdatedState`.
//!
//! # Configuration
//!
//! - `treatAsLambda`: extra type names to treat as lambdas
//!
//! # Suppression
//!
//! - `@Suppress("LambdaParamInEffect")` on the function or file
//! - `// compose-lint: allow(lambda-param-in-effect)` comment

use compose_lint_core::kotlin::{calls_in, chain_root, is_shadowed, Call, Function, LambdaTypes};
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::{owning_function, references};

/// Rule code for lambda-param-in-effect.
pub const CODE: &str = "CL008";

/// Rule name for lambda-param-in-effect.
pub const NAME: &str = "lambda-param-in-effect";

const RESTARTABLE_EFFECTS: &[&str] = &["LaunchedEffect", "DisposableEffect", "produceState"];

const MESSAGE: &str = "Lambda parameters in a @Composable that are referenced directly inside of restarting effects \
can cause issues or unpredictable behavior. If restarting the effect is ok, add this parameter as a key of the effect \
so a new effect is created when it changes. Otherwise, use `rememberUpdatedState` on the parameter and use its \
result in the effect.";

/// Flags lambda parameters used inside effects that are not keyed on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LambdaParamInEffect;

impl LambdaParamInEffect {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_key(effect: &Call<'_>, name: &str) -> bool {
    effect
        .arguments()
        .iter()
        .filter_map(|argument| argument.expression())
        .filter(|expression| expression.kind() != kinds::LAMBDA_LITERAL)
        .map(chain_root)
        .any(|root| root.kind() == kinds::IDENTIFIER && root.original_text() == name)
}

impl Rule for LambdaParamInEffect {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Lambda parameters used in effects are keys or go through `rememberUpdatedState`"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let Some(body) = function.body() else {
            return;
        };
        let lambda_types = LambdaTypes::from_config(function.node().tree().root(), config);
        let lambdas: Vec<&str> = function
            .parameters()
            .iter()
            .filter(|p| {
                p.type_node()
                    .is_some_and(|ty| lambda_types.is_lambda(ty) && !lambda_types.is_composable_lambda(ty))
            })
            .filter_map(|p| p.name())
            .collect();
        if lambdas.is_empty() {
            return;
        }

        let effects = calls_in(body).filter(|call| {
            call.name().is_some_and(|name| RESTARTABLE_EFFECTS.contains(&name))
                && owning_function(call.node()) == Some(function.node())
        });
        for effect in effects {
            for name in &lambdas {
                if is_key(&effect, name) {
                    continue;
                }
                let captured: Option<Node<'_>> = effect
                    .lambda_arguments()
                    .into_iter()
                    .flat_map(|lambda| references(lambda, name))
                    .find(|reference| !is_shadowed(*reference, name, function.node()));
                if let Some(reference) = captured {
                    emitter.report(reference, MESSAGE, false);
                }
            }
        }
    }
}
