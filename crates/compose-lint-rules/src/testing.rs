//! Lints Kotlin snippets with a single rule.

use std::path::Path;

use compose_lint_core::{Analyzer, Config, FileReport, Rule, Violation};

fn run(rule: impl Rule + 'static, source: &str, options: &str, fix: bool) -> FileReport {
    let config = Config::parse(&format!("[compose]\n{options}\n")).expect("options");
    let analyzer = Analyzer::builder()
        .root("/project")
        .config(config)
        .rule(rule)
        .fix(fix)
        .build()
        .expect("build analyzer");
    analyzer
        .analyze_source(Path::new("/project/Test.kt"), source)
        .expect("analyze")
}

/// Violations reported by `rule` on `source`.
pub(crate) fn check_code(rule: impl Rule + 'static, source: &str) -> Vec<Violation> {
    run(rule, source, "", false).violations
}

/// Like [`check_code`] with `[compose]` options given as TOML lines.
pub(crate) fn check_code_with(rule: impl Rule + 'static, source: &str, options: &str) -> Vec<Violation> {
    run(rule, source, options, false).violations
}

/// Applies the rule's fixes; returns the fixed source and what remains.
pub(crate) fn fix_code(rule: impl Rule + 'static, source: &str) -> (String, Vec<Violation>) {
    let report = run(rule, source, "", true);
    (
        report.fixed_source.unwrap_or_else(|| source.to_owned()),
        report.violations,
    )
}

/// Reported line numbers, ascending.
pub(crate) fn lines(violations: &[Violation]) -> Vec<usize> {
    let mut lines: Vec<usize> = violations.iter().map(|v| v.location.line).collect();
    lines.sort_unstable();
    lines
}
