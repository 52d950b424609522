//! Walks a file once and hands each declaration to the rules.

use tracing::trace;

use crate::context::FileContext;
use crate::emitter::{FixMode, RuleEmitter};
use crate::kotlin::Function;
use crate::resolver::ConfigResolver;
use crate::rule::Rule;
use crate::syntax::{kinds, Node, SyntaxTree};
use crate::types::{Severity, Violation};

/// A rule scheduled for a run, with its effective severity.
#[derive(Clone, Copy)]
pub struct Scheduled<'r> {
    /// The rule.
    pub rule: &'r dyn Rule,
    /// Severity to report at.
    pub severity: Severity,
}

impl<'r> Scheduled<'r> {
    /// Schedules a rule at its default severity.
    #[must_use]
    pub fn new(rule: &'r dyn Rule) -> Self {
        Self {
            rule,
            severity: rule.default_severity(),
        }
    }
}

/// Declarations in document order: each node before its children, siblings
/// left to right.
fn pre_order(root: Node<'_>) -> Vec<Node<'_>> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(node.children().rev());
    }
    order
}

/// Runs every rule over one tree.
///
/// For each rule, in order: `visit_file` on the root, then for every node in
/// document order `visit_class` on class/object declarations and
/// `visit_function` (followed by `visit_composable` when annotated) on
/// function declarations. Rewrites made by an earlier rule are visible to
/// later ones.
pub fn dispatch(
    tree: &SyntaxTree,
    file: &FileContext<'_>,
    rules: &[Scheduled<'_>],
    config: &ConfigResolver<'_>,
    mode: FixMode,
) -> Vec<Violation> {
    let root = tree.root();
    let order = pre_order(root);
    let mut violations = Vec::new();

    for scheduled in rules {
        let rule = scheduled.rule;
        let mut emitter = RuleEmitter::new(rule, file, mode).with_severity(scheduled.severity);
        trace!(rule = rule.name(), "Visiting file");

        rule.visit_file(root, &mut emitter, config);
        for &node in &order {
            match node.kind() {
                kinds::CLASS_DECLARATION | kinds::OBJECT_DECLARATION | kinds::COMPANION_OBJECT => {
                    rule.visit_class(node, &mut emitter, config);
                }
                kinds::FUNCTION_DECLARATION => {
                    let Some(function) = Function::from_node(node) else {
                        continue;
                    };
                    rule.visit_function(function, &mut emitter, config);
                    if function.is_composable() {
                        rule.visit_composable(function, &mut emitter, config);
                    }
                }
                _ => {}
            }
        }
        violations.extend(emitter.into_violations());
    }
    violations
}
