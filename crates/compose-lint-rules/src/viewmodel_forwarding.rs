//! Rule forbidding ViewModels from being passed down to other composables.
//!
//! # Rationale
//!
//! A screen-level composable that hands its ViewModel to children ties
//! them to that ViewModel, makes them hard to preview and test, and hides
//! which state they actually read. Pass the state and the event lambdas
//! instead.
//!
//! Calls to effects (`LaunchedEffect`) are not forwarding.
//!
//! # Configuration
//!
//! - `allowedStateHolderNames`: patterns of holder types (default
//!   `.*ViewModel` and `.*Presenter`)
//! - `allowedForwarding`: composables that may receive a holder
//! - `allowedForwardingOfTypes`: holder type patterns that may be forwarded
//!
//! # Suppression
//!
//! - `@Suppress("ViewModelForwarding")` on the function or file
//! - `// compose-lint: allow(viewmodel-forwarding)` comment

use std::collections::HashSet;

use compose_lint_core::kotlin::{calls_in, is_shadowed, Function};
use compose_lint_core::syntax::kinds;
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::{matches_any, name_patterns, owning_function};

/// Rule code for viewmodel-forwarding.
pub const CODE: &str = "CL026";

/// Rule name for viewmodel-forwarding.
pub const NAME: &str = "viewmodel-forwarding";

const DEFAULT_STATE_HOLDERS: &[&str] = &[".*ViewModel", ".*Presenter"];

const MESSAGE: &str = "Forwarding a ViewModel through multiple @Composable functions should be avoided. Consider \
using state hoisting.";

/// Flags composables passing a state-holder parameter to another composable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewModelForwarding;

impl ViewModelForwarding {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ViewModelForwarding {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "ViewModels are not forwarded to other composables"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let Some(body) = function.body() else {
            return;
        };
        let holders = name_patterns(config, "allowedStateHolderNames", DEFAULT_STATE_HOLDERS);
        let forwardable = name_patterns(config, "allowedForwardingOfTypes", &[]);
        let allowed_callees: HashSet<String> = config.get_set("allowedForwarding", &[]);

        let names: Vec<&str> = function
            .parameters()
            .iter()
            .filter(|p| {
                p.simple_type_name()
                    .is_some_and(|ty| matches_any(&holders, &ty) && !matches_any(&forwardable, &ty))
            })
            .filter_map(|p| p.name())
            .collect();
        if names.is_empty() {
            return;
        }

        let boundary = function.node();
        for call in calls_in(body) {
            let Some(callee) = call.name() else {
                continue;
            };
            if call.receiver().is_some()
                || !callee.starts_with(char::is_uppercase)
                || callee.ends_with("Effect")
                || allowed_callees.contains(callee)
                || owning_function(call.node()) != Some(boundary)
            {
                continue;
            }
            let forwards = call.arguments().iter().filter_map(|a| a.expression()).any(|value| {
                value.kind() == kinds::IDENTIFIER
                    && names.contains(&value.original_text())
                    && !is_shadowed(value, value.original_text(), boundary)
            });
            if forwards {
                emitter.report(call.node(), MESSAGE, false);
            }
        }
    }
}
