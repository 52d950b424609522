//! Comment-based allowance directives.
//!
//! A finding is dropped when its line, or the line above it, carries:
//! ```text
//! // compose-lint: allow(modifier-missing, ComposeViewModelForwarding) reason="legacy screen"
//! ```
//! The directive may trail code on the same line. `all` matches every rule.

use std::collections::HashSet;

const MARKER: &str = "compose-lint:";

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// No directive applies.
    Denied,
    /// A directive applies.
    Allowed {
        /// The reason given, if any.
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

#[derive(Debug, Clone)]
struct AllowDirective {
    rules: HashSet<String>,
    reason: Option<String>,
}

/// Checks `line` (1-indexed) and the line above it for a directive naming
/// any of `ids`.
#[must_use]
pub fn check_allow(content: &str, line: usize, ids: &[&str]) -> AllowCheck {
    let candidates = [line.saturating_sub(1), line];
    for directive in candidates
        .iter()
        .filter(|&&n| n > 0)
        .filter_map(|&n| content.lines().nth(n - 1))
        .filter_map(parse_allow_directive)
    {
        if directive.rules.contains("all") || ids.iter().any(|id| directive.rules.contains(*id)) {
            return AllowCheck::Allowed {
                reason: directive.reason,
            };
        }
    }
    AllowCheck::Denied
}

fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let comment = line
        .find("//")
        .map(|at| &line[at + 2..])
        .or_else(|| line.find("/*").map(|at| &line[at + 2..]))?;
    let comment = comment.trim_start_matches('/').trim_start_matches('*').trim();

    let allow = comment.strip_prefix(MARKER)?.trim().strip_prefix("allow(")?;
    let close = allow.find(')')?;
    let rules: HashSet<String> = allow[..close]
        .split(',')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .map(str::to_owned)
        .collect();
    if rules.is_empty() {
        return None;
    }

    let reason = allow[close + 1..]
        .trim()
        .strip_prefix("reason=")
        .and_then(|r| r.trim().strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_owned()));

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_and_reason() {
        let directive =
            parse_allow_directive("// compose-lint: allow(modifier-missing, ComposeMutableParams) reason=\"legacy\"")
                .expect("directive");
        assert!(directive.rules.contains("modifier-missing"));
        assert!(directive.rules.contains("ComposeMutableParams"));
        assert_eq!(directive.reason.as_deref(), Some("legacy"));
    }

    #[test]
    fn ignores_other_comments() {
        assert!(parse_allow_directive("// just a comment").is_none());
        assert!(parse_allow_directive("// compose-lint: allow()").is_none());
        assert!(parse_allow_directive("val allow = 1").is_none());
    }

    #[test]
    fn applies_to_same_line_and_next_line() {
        let content = "@Composable\n// compose-lint: allow(modifier-missing)\nfun A() {}\nfun B() {} // compose-lint: allow(all) reason=\"demo\"\nfun C() {}\n";

        assert!(check_allow(content, 3, &["modifier-missing"]).is_allowed());
        assert!(!check_allow(content, 3, &["modifier-reused"]).is_allowed());

        let same_line = check_allow(content, 4, &["anything"]);
        assert_eq!(same_line.reason(), Some("demo"));

        assert!(check_allow(content, 5, &["anything"]).is_allowed());
        assert_eq!(check_allow(content, 1, &["modifier-missing"]), AllowCheck::Denied);
    }

    #[test]
    fn block_comments_are_accepted() {
        let content = "/* compose-lint: allow(preview-public) */\nfun P() {}\n";
        assert!(check_allow(content, 2, &["preview-public"]).is_allowed());
    }
}
