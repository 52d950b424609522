//! Rule requiring the `Local` prefix on CompositionLocals.
//!
//! # Suppression
//!
//! - `@Suppress("CompositionLocalNaming")` on the property or file
//! - `// compose-lint: allow(composition-local-naming)` comment

use compose_lint_core::kotlin::Property;
use compose_lint_core::syntax::{kinds, Node};
use compose_lint_core::{ConfigResolver, Emitter, Rule};

use crate::support::is_composition_local;

/// Rule code for composition-local-naming.
pub const CODE: &str = "CL003";

/// Rule name for composition-local-naming.
pub const NAME: &str = "composition-local-naming";

const MESSAGE: &str = "CompositionLocals should be named using the `Local` prefix as an adjective, \
followed by a descriptive noun.";

/// Flags CompositionLocals not named `LocalX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositionLocalNaming;

impl CompositionLocalNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CompositionLocalNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "CompositionLocals are named with a `Local` prefix"
    }

    fn visit_file(&self, file: Node<'_>, emitter: &mut dyn Emitter, _config: &ConfigResolver<'_>) {
        for property in file
            .find_descendants(kinds::PROPERTY_DECLARATION)
            .filter_map(Property::from_node)
            .filter(is_composition_local)
        {
            if property.name().is_some_and(|name| !name.starts_with("Local")) {
                emitter.report(property.node(), MESSAGE, false);
            }
        }
    }
}
