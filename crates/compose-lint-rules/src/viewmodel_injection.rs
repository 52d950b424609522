//! Rule requiring ViewModels to be acquired as default parameters.
//!
//! # Rationale
//!
//! `val vm = hiltViewModel<HomeViewModel>()` inside a composable body hides
//! a dependency. Callers, previews and tests cannot substitute it. As a
//! default parameter (`viewModel: HomeViewModel = hiltViewModel()`) the
//! composable behaves the same but the dependency is visible and
//! replaceable.
//!
//! The rule fixes what it reports when the ViewModel type is spelled out,
//! either on the property or as a type argument of the factory call. The
//! parameter goes last, or just before a trailing lambda.
//!
//! # Configuration
//!
//! - `viewModelFactories`: extra factory functions, on top of the `viewModel`,
//!   Hilt, Koin, Mavericks, Weaver and Tangle factories
//!
//! # Suppression
//!
//! - `@Suppress("ViewModelInjection")` on the function or file
//! - `// compose-lint: allow(viewmodel-injection)` comment

use std::collections::HashSet;

use compose_lint_core::kotlin::{Call, Function, Property};
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};
use tracing::debug;

use crate::support::owning_function;

/// Rule code for viewmodel-injection.
pub const CODE: &str = "CL027";

/// Rule name for viewmodel-injection.
pub const NAME: &str = "viewmodel-injection";

const DEFAULT_FACTORIES: &[&str] = &[
    "viewModel",
    "weaverViewModel",
    "hiltViewModel",
    "injectedViewModel",
    "mavericksViewModel",
    "mavericksActivityViewModel",
    "tangleViewModel",
    "koinViewModel",
    "koinNavViewModel",
    "activityViewModel",
];

/// Flags and fixes ViewModels acquired inside a composable body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewModelInjection;

impl ViewModelInjection {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// A ViewModel acquired in the body.
struct Injection<'t> {
    property: Property<'t>,
    factory: &'t str,
    /// The parameter to declare instead, when the type is known.
    parameter: Option<String>,
}

fn type_argument<'t>(call: &Call<'t>) -> Option<Node<'t>> {
    call.callee()
        .parent()?
        .first_child_of_kind(kinds::TYPE_ARGUMENTS)?
        .first_child_of_kind(kinds::TYPE_PROJECTION)
}

fn injections<'t>(function: &Function<'t>, body: Node<'t>, factories: &HashSet<String>) -> Vec<Injection<'t>> {
    body.find_descendants(kinds::PROPERTY_DECLARATION)
        .filter(|node| owning_function(*node) == Some(function.node()))
        .filter_map(Property::from_node)
        .filter_map(|property| {
            let call = Call::from_node(property.value()?)?;
            let factory = call.name().filter(|name| factories.contains(*name))?;
            if call.receiver().is_some() {
                return None;
            }
            let parameter = property.initializer().and_then(|_| {
                let name = property.name()?;
                let ty = property.type_node().or_else(|| type_argument(&call))?;
                Some(format!("{name}: {} = {}", ty.original_text(), call.node().original_text()))
            });
            Some(Injection {
                property,
                factory,
                parameter,
            })
        })
        .collect()
}

/// Declares `added` in the parameter list of `function`.
fn add_parameters(function: &Function<'_>, added: &str) {
    let Some(list) = function.parameter_list() else {
        return;
    };
    let parameters = function.parameters();
    match parameters.last() {
        None => list.replace_text(format!("({added})")),
        Some(last) if last.is_function_typed() => {
            let node = last.node();
            node.replace_text(format!("{added}, {}", node.text()));
        }
        Some(last) => {
            let anchor = last.default_value().unwrap_or_else(|| last.node());
            anchor.replace_text(format!("{}, {added}", anchor.text()));
        }
    }
}

impl Rule for ViewModelInjection {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "ViewModels are acquired as default parameters"
    }

    fn visit_composable(&self, function: Function<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        let Some(body) = function.body() else {
            return;
        };
        let mut factories = config.get_set("viewModelFactories", &[]);
        factories.extend(DEFAULT_FACTORIES.iter().map(|f| (*f).to_owned()));

        let mut added = Vec::new();
        for injection in injections(&function, body, &factories) {
            let message = format!(
                "Implicit dependencies of composables should be made explicit. Acquire the ViewModel from \
                 `{}` as a default parameter of the composable instead of in its body.",
                injection.factory
            );
            let decision = emitter.report(injection.property.node(), &message, injection.parameter.is_some());
            if let (true, Some(parameter)) = (decision.should_fix(), injection.parameter) {
                injection.property.node().replace_text("");
                added.push(parameter);
            }
        }
        if !added.is_empty() {
            debug!(function = function.name().unwrap_or_default(), count = added.len(), "Hoisting ViewModels");
            add_parameters(&function, &added.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, check_code_with, fix_code, lines};

    #[test]
    fn test_detects_injected_view_models() {
        let violations = check_code(
            ViewModelInjection::new(),
            r"
@Composable
fun Home(title: String) {
    val home = viewModel<HomeViewModel>()
    val profile: ProfileViewModel = hiltViewModel()
    val settings by custom.koinViewModel()
    val unknown = hiltViewModel()
    Text(title)
}

class Screen {
    fun build() {
        val vm = viewModel<HomeViewModel>()
    }
}
",
        );
        assert_eq!(lines(&violations), vec![4, 5, 7]);
        assert!(violations[0].can_auto_correct);
        assert!(!violations[2].can_auto_correct);
    }

    #[test]
    fn test_custom_factories() {
        let violations = check_code_with(
            ViewModelInjection::new(),
            "@Composable\nfun Home() {\n    val vm = appViewModel<HomeViewModel>()\n}\n",
            "viewModelFactories = [\"appViewModel\"]",
        );
        assert_eq!(lines(&violations), vec![3]);
    }

    #[test]
    fn test_fix_hoists_into_parameters() {
        let (fixed, remaining) = fix_code(
            ViewModelInjection::new(),
            r"
@Composable
fun Home(title: String, onBack: () -> Unit) {
    val home = viewModel<HomeViewModel>()
    val profile: ProfileViewModel = hiltViewModel()
    Text(title)
}

@Composable
fun Settings() {
    val vm = viewModel<SettingsViewModel>()
}
",
        );
        assert!(remaining.is_empty());
        assert!(fixed.contains(
            "fun Home(title: String, home: HomeViewModel = viewModel<HomeViewModel>(), \
             profile: ProfileViewModel = hiltViewModel(), onBack: () -> Unit) {"
        ));
        assert!(fixed.contains("fun Settings(vm: SettingsViewModel = viewModel<SettingsViewModel>()) {"));
        assert!(!fixed.contains("val home"));
    }
}
