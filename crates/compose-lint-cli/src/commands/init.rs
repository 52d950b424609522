//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# compose-lint configuration
# Rule reference: docs/rules.md

# Rule set to start from: "recommended" (default) or "all".
# "all" adds the opt-in rules material2 and unstable-collections.
preset = "recommended"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./app/src"

# Glob patterns to exclude from analysis
exclude = [
    "**/build/**",
    "**/generated/**",
]

# Respect .gitignore files
respect_gitignore = true

# Read compose_* options from .editorconfig next to the root
editorconfig = true

# Rule switches. Each rule can be disabled or have its severity overridden.

# [rules.modifier-missing]
# severity = "warning"

# [rules.viewmodel-forwarding]
# enabled = false

# Rule options, shared by every rule that reads them.
[compose]
# Extra composables that emit content
# contentEmitters = ["MyCard"]

# Visibility checked by modifier-missing: only_public, public_and_internal, all
# checkModifiersForVisibility = "only_public"

# Type names to treat as lambdas and composable lambdas
# treatAsLambda = ["Callback"]
# treatAsComposableLambda = ["Slot"]

# CompositionLocals that may be declared
# allowedCompositionLocals = ["LocalSpacing"]

# Extra ViewModel factory functions
# viewModelFactories = ["rememberViewModel"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("compose-lint.toml");
    write_config(config_path, force)?;

    println!("Created compose-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit compose-lint.toml to configure rules");
    println!("  2. Run: compose-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
