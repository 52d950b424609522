//! Reporting findings and gating auto-correct.

use tracing::debug;

use crate::context::FileContext;
use crate::rule::Rule;
use crate::suppress::is_suppressed;
use crate::syntax::Node;
use crate::types::{Location, Severity, Violation};
use crate::utils::allowance::check_allow;

/// What a rule may do after reporting a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Leave the code as it is.
    Ignore,
    /// Apply the fix now.
    AutoCorrect,
}

impl Decision {
    /// Whether the rule should rewrite the code.
    #[must_use]
    pub fn should_fix(self) -> bool {
        self == Self::AutoCorrect
    }
}

/// Whether fixes are applied during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixMode {
    /// Report only.
    #[default]
    Report,
    /// Report and apply fixes.
    Fix,
}

/// Receives findings from rules.
///
/// A rule reports the node a finding is about and, if it can fix it, must
/// only touch the tree when the returned [`Decision`] says so.
pub trait Emitter {
    /// Records a finding anchored on `node`.
    fn report(&mut self, node: Node<'_>, message: &str, can_auto_correct: bool) -> Decision;
}

/// Collects violations for one rule over one file.
///
/// Findings silenced by `@Suppress` or an allow comment are dropped and
/// never auto-corrected.
pub struct RuleEmitter<'a> {
    rule: &'a dyn Rule,
    file: &'a FileContext<'a>,
    severity: Severity,
    mode: FixMode,
    ids: Vec<String>,
    violations: Vec<Violation>,
}

impl<'a> RuleEmitter<'a> {
    /// Creates an emitter reporting at the rule's default severity.
    #[must_use]
    pub fn new(rule: &'a dyn Rule, file: &'a FileContext<'a>, mode: FixMode) -> Self {
        Self {
            rule,
            file,
            severity: rule.default_severity(),
            mode,
            ids: rule.suppression_ids(),
            violations: Vec::new(),
        }
    }

    /// Overrides the reported severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Violations collected so far.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the emitter, returning its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn is_silenced(&self, node: Node<'_>) -> bool {
        let ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        if is_suppressed(node, &ids) {
            return true;
        }
        let allow = check_allow(self.file.content, node.line(), &ids);
        if let Some(reason) = allow.reason() {
            debug!(rule = self.rule.name(), reason, "Allowed by comment");
        }
        allow.is_allowed()
    }
}

impl Emitter for RuleEmitter<'_> {
    fn report(&mut self, node: Node<'_>, message: &str, can_auto_correct: bool) -> Decision {
        if self.is_silenced(node) {
            debug!(
                rule = self.rule.name(),
                line = node.line(),
                "Finding suppressed"
            );
            return Decision::Ignore;
        }

        let location = Location::from_node(self.file.relative_path.clone(), node);
        self.violations.push(
            Violation::new(
                self.rule.code(),
                self.rule.name(),
                self.severity,
                location,
                message,
            )
            .with_doc_ref(self.rule.doc_ref())
            .auto_correctable(can_auto_correct),
        );

        if can_auto_correct && self.mode == FixMode::Fix {
            Decision::AutoCorrect
        } else {
            Decision::Ignore
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{kinds, SyntaxTree};
    use std::path::Path;

    struct Dummy;

    impl Rule for Dummy {
        fn name(&self) -> &'static str {
            "dummy-check"
        }
        fn code(&self) -> &'static str {
            "CL999"
        }
    }

    const SOURCE: &str = "fun a() {}\n@Suppress(\"DummyCheck\")\nfun b() {}\n// compose-lint: allow(dummy-check)\nfun c() {}\n";

    fn functions(tree: &SyntaxTree) -> Vec<Node<'_>> {
        tree.root()
            .children_of_kind(kinds::FUNCTION_DECLARATION)
            .collect()
    }

    #[test]
    fn fix_mode_gates_auto_correct() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let ctx = FileContext::new(Path::new("A.kt"), SOURCE, Path::new("."));
        let a = functions(&tree)[0];

        let mut report_only = RuleEmitter::new(&Dummy, &ctx, FixMode::Report);
        assert_eq!(report_only.report(a, "msg", true), Decision::Ignore);

        let mut fixing = RuleEmitter::new(&Dummy, &ctx, FixMode::Fix);
        assert_eq!(fixing.report(a, "msg", true), Decision::AutoCorrect);
        assert_eq!(fixing.report(a, "msg", false), Decision::Ignore);

        let violations = fixing.into_violations();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].can_auto_correct);
        assert_eq!(violations[0].location.line, 1);
        assert_eq!(violations[0].doc_ref.as_deref(), Some("docs/rules.md#dummy-check"));
    }

    #[test]
    fn suppressed_findings_are_dropped_and_never_fixed() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let ctx = FileContext::new(Path::new("A.kt"), SOURCE, Path::new("."));
        let fns = functions(&tree);

        let mut emitter = RuleEmitter::new(&Dummy, &ctx, FixMode::Fix);
        assert_eq!(emitter.report(fns[1], "msg", true), Decision::Ignore);
        assert_eq!(emitter.report(fns[2], "msg", true), Decision::Ignore);
        assert!(emitter.violations().is_empty());
    }

    #[test]
    fn severity_can_be_overridden() {
        let tree = SyntaxTree::parse(SOURCE).expect("parse");
        let ctx = FileContext::new(Path::new("A.kt"), SOURCE, Path::new("."));
        let mut emitter =
            RuleEmitter::new(&Dummy, &ctx, FixMode::Report).with_severity(Severity::Warning);
        emitter.report(functions(&tree)[0], "msg", false);
        assert_eq!(emitter.violations()[0].severity, Severity::Warning);
    }
}
