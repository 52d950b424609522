//! Rule requiring event lambdas to be named in present tense.
//!
//! # Rationale
//!
//! Compose names callbacks after the event as it happens: `onClick`, not
//! `onClicked`; `onValueChange`, not `onValueChanged`.
//!
//! # Configuration
//!
//! - `treatAsLambda`: extra type names to treat as lambdas
//!
//! # Suppression
//!
//! - `@Suppress("ParameterNaming")` on the function or file
//! - `// compose-lint: allow(parameter-naming)` comment

use compose_lint_core::kotlin::{Function, LambdaTypes};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

/// Rule code for parameter-naming.
pub const CODE: &str = "CL021";

/// Rule name for parameter-naming.
pub const NAME: &str = "parameter-naming";

/// Irregular past forms that don't end in `-ed`. Words that read the same
/// in present tense (`Set`, `Put`, `Cut`, `Read`) are left out.
const IRREGULAR_PAST: &[&str] = &[
    "Ate", "Began", "Blew", "Bought", "Broke", "Brought", "Built", "Came", "Caught", "Chose", "Dealt", "Did", "Drank",
    "Drew", "Drove", "Fell", "Felt", "Flew", "Forgot", "Fought", "Found", "Froze", "Gave", "Got", "Grew", "Heard",
    "Held", "Hid", "Kept", "Knew", "Laid", "Lost", "Made", "Meant", "Paid", "Ran", "Rang", "Rode", "Said", "Sang",
    "Sank", "Saw", "Sent", "Shook", "Shot", "Showed", "Slept", "Sold", "Spent", "Spoke", "Stood", "Stole", "Struck",
    "Swam", "Swept", "Swung", "Taught", "Threw", "Told", "Took", "Tore", "Thought", "Understood", "Went", "Woke",
    "Won", "Wore", "Wrote",
];

/// Words ending in `-ed` that are not past tense.
const NOT_PAST: &[&str] = &[
    "Bed", "Bleed", "Breed", "Embed", "Exceed", "Feed", "Need", "Proceed", "Red", "Seed", "Shed", "Shred", "Speed",
    "Succeed",
];

/// The last word of a camelCase identifier (`onTextChanged` -> `Changed`).
fn last_word(name: &str) -> &str {
    name.char_indices()
        .rev()
        .find(|(_, c)| c.is_uppercase())
        .map_or(name, |(index, _)| &name[index..])
}

fn is_past_tense(word: &str) -> bool {
    if IRREGULAR_PAST.contains(&word) {
        return true;
    }
    word.len() > 3 && word.ends_with("ed") && !NOT_PAST.contains(&word)
}

/// Flags `onXed` lambda parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterNaming;

impl ParameterNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ParameterNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Event lambda parameters are named in present tense"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if function.has_inherited_signature() {
            return;
        }
        let lambda_types = LambdaTypes::from_config(function.node().tree().root(), config);

        for parameter in function.parameters() {
            let (Some(name), Some(ty)) = (parameter.name(), parameter.type_node()) else {
                continue;
            };
            let is_event = name
                .strip_prefix("on")
                .is_some_and(|rest| rest.starts_with(char::is_uppercase));
            if !is_event || !lambda_types.is_lambda(ty) || lambda_types.is_composable_lambda(ty) {
                continue;
            }
            let word = last_word(name);
            if is_past_tense(word) {
                emitter.report(
                    parameter.node(),
                    &format!(
                        "Lambda parameters in a composable function should be in present tense, not past tense \
                         (`{name}` ends in `{word}`). Examples: `onClick` and not `onClicked`, `onTextChange` \
                         and not `onTextChanged`."
                    ),
                    false,
                );
            }
        }
    }
}
