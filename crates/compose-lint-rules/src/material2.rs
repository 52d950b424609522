//! Rule flagging imports from Compose Material 2.
//!
//! # Rationale
//!
//! Material 3 succeeds Material 2 (`androidx.compose.material`). Projects
//! that have migrated use this rule to keep new M2 usages out.
//!
//! The `icons` and `ripple` packages are shared with M3 and never flagged.
//!
//! # Configuration
//!
//! - `disallowMaterial2`: set to `false` to turn the rule off (default `true`)
//! - `allowedFromM2`: M2 APIs still permitted, either as a simple name
//!   (`Scaffold`) or as a path below the package (`pullrefresh.PullRefreshIndicator`)
//!
//! # Suppression
//!
//! - `@Suppress("Material2")` on the file
//! - `// compose-lint: allow(material2)` comment

use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

/// Rule code for material2.
pub const CODE: &str = "CL009";

/// Rule name for material2.
pub const NAME: &str = "material2";

const M2_PACKAGE: &str = "androidx.compose.material";

const SHARED_PACKAGES: &[&str] = &["icons", "ripple"];

const MESSAGE: &str = "Compose Material 2 (M2) is succeeded by Material 3 (M3). Please use M3 APIs.";

/// Flags `androidx.compose.material` imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct Material2;

impl Material2 {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// The part of an import path below the M2 package, `Some("")` for the
/// package itself and `None` for anything else.
fn below_m2(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(M2_PACKAGE)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('.')
}

fn is_allowed(rest: &str, allowed: &[String]) -> bool {
    let first = rest.split('.').next().unwrap_or_default();
    if SHARED_PACKAGES.contains(&first) {
        return true;
    }
    let last = rest.rsplit('.').next().unwrap_or_default();
    allowed.iter().any(|entry| entry == rest || entry == last)
}

impl Rule for Material2 {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Material 3 is used instead of Material 2"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, config: &ConfigResolver<'_>) {
        if !config.get_bool("disallowMaterial2", true) {
            return;
        }
        let allowed = config.get_list("allowedFromM2", &[]);

        let imports = file.children_of_kind(kinds::IMPORT).filter(Node::is_named);
        for import in imports {
            let Some(path) = import.first_child_of_kind(kinds::QUALIFIED_IDENTIFIER) else {
                continue;
            };
            let Some(rest) = below_m2(path.original_text()) else {
                continue;
            };
            if is_allowed(rest, &allowed) {
                continue;
            }
            emitter.report(import, MESSAGE, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{check_code, check_code_with, lines};

    const IMPORTS: &str = r"
import androidx.compose.material.Text
import androidx.compose.material.icons.Icons
import androidx.compose.material.*
import androidx.compose.material.ripple.rememberRipple
import androidx.compose.material3.Button
import androidx.compose.materialx.Thing
import androidx.compose.material.Scaffold
";

    #[test]
    fn test_below_m2() {
        assert_eq!(below_m2("androidx.compose.material"), Some(""));
        assert_eq!(below_m2("androidx.compose.material.Text"), Some("Text"));
        assert_eq!(below_m2("androidx.compose.material3.Text"), None);
    }

    #[test]
    fn test_detects_m2_imports() {
        let violations = check_code(Material2::new(), IMPORTS);
        assert_eq!(lines(&violations), vec![2, 4, 8]);
        assert!(violations.iter().all(|v| v.message == MESSAGE));
    }

    #[test]
    fn test_allow_list_and_opt_out() {
        let violations = check_code_with(Material2::new(), IMPORTS, "allowedFromM2 = [\"Scaffold\", \"Text\"]");
        assert_eq!(lines(&violations), vec![4]);

        let violations = check_code_with(Material2::new(), IMPORTS, "disallowMaterial2 = false");
        assert!(violations.is_empty());
    }
}
