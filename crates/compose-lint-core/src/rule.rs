//! The rule trait.

use crate::emitter::Emitter;
use crate::kotlin::Function;
use crate::resolver::ConfigResolver;
use crate::syntax::Node;
use crate::types::Severity;
use crate::utils::naming::kebab_to_pascal;

/// Page every rule's documentation anchor lives on.
pub const RULES_DOC: &str = "docs/rules.md";

/// A lint rule over Kotlin syntax trees.
///
/// The dispatcher walks each file once and calls the hooks below; a rule
/// overrides only the ones it needs. Findings and fixes go through the
/// [`Emitter`], and options are read from the [`ConfigResolver`].
///
/// # Example
///
/// ```ignore
/// use compose_lint_core::{Emitter, Function, ConfigResolver, Rule};
///
/// pub struct NoEmptyComposables;
///
/// impl Rule for NoEmptyComposables {
///     fn name(&self) -> &'static str { "no-empty-composables" }
///     fn code(&self) -> &'static str { "CL100" }
///
///     fn visit_composable(&self, f: Function<'_>, emitter: &mut dyn Emitter, _: &ConfigResolver<'_>) {
///         if f.statements().is_empty() {
///             emitter.report(f.node(), "Empty composable", false);
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "modifier-missing").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CL013").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Documentation link attached to every violation.
    fn doc_ref(&self) -> String {
        format!("{RULES_DOC}#{}", self.name())
    }

    /// Identifiers accepted by `@Suppress` and allow comments.
    ///
    /// `modifier-missing` answers to `ModifierMissing`,
    /// `ComposeModifierMissing`, `modifier-missing` and
    /// `compose:modifier-missing-check`.
    fn suppression_ids(&self) -> Vec<String> {
        let pascal = kebab_to_pascal(self.name());
        vec![
            format!("Compose{pascal}"),
            pascal,
            self.name().to_owned(),
            format!("compose:{}-check", self.name()),
        ]
    }

    /// Called once per file with the root node.
    fn visit_file(&self, _file: Node<'_>, _emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {}

    /// Called for every class, interface and object declaration.
    fn visit_class(&self, _class: Node<'_>, _emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {}

    /// Called for every function declaration.
    fn visit_function(
        &self,
        _function: Function<'_>,
        _emitter: &mut dyn Emitter,
        _config: &ConfigResolver<'_>,
    ) {
    }

    /// Called for every `@Composable` function, after [`visit_function`](Self::visit_function).
    fn visit_composable(
        &self,
        _function: Function<'_>,
        _emitter: &mut dyn Emitter,
        _config: &ConfigResolver<'_>,
    ) {
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
