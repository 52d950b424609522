//! Rule requiring the `content` slot to be the trailing parameter.
//!
//! # Rationale
//!
//! Callers write `Card { ... }` only when the content slot comes last, and
//! that is the shape every layout in Compose uses.
//!
//! # Suppression
//!
//! - `@Suppress("ContentTrailingLambda")` on the function or file
//! - `// compose-lint: allow(content-trailing-lambda)` comment

use compose_lint_core::kotlin::{Function, LambdaTypes};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::signature_is_inherited;

/// Rule code for content-trailing-lambda.
pub const CODE: &str = "CL006";

/// Rule name for content-trailing-lambda.
pub const NAME: &str = "content-trailing-lambda";

const MESSAGE: &str = "A @Composable `content` parameter should be moved to be the trailing lambda in a composable \
function.";

/// Flags `content` slots that are not the last parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTrailingLambda;

impl ContentTrailingLambda {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ContentTrailingLambda {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "A `content` slot is the trailing parameter"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if signature_is_inherited(&function) {
            return;
        }
        let parameters = function.parameters();
        let Some((_, rest)) = parameters.split_last() else {
            return;
        };
        let lambda_types = LambdaTypes::from_config(function.node().tree().root(), config);

        let misplaced = rest.iter().find(|p| {
            p.name() == Some("content") && p.type_node().is_some_and(|ty| lambda_types.is_composable_lambda(ty))
        });
        if let Some(content) = misplaced {
            emitter.report(content.node(), MESSAGE, false);
        }
    }
}
