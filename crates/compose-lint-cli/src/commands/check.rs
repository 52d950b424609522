//! Check command implementation.

use anyhow::{bail, Context, Result};
use compose_lint_core::{Analyzer, Config, RuleBox};
use compose_lint_rules::{all_rules, Preset};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Flags of the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules: Option<String>,
    /// Preset name, overriding the config file.
    pub preset: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Apply auto-corrections.
    pub fix: bool,
}

/// Runs the check command and returns whether errors were found.
pub fn run(path: &Path, options: CheckOptions, source: &ConfigSource) -> Result<bool> {
    let config = load_config(source)?;

    let rules = match options.rules.as_deref() {
        Some(filter) => filter_rules(filter)?,
        None => {
            let name = options
                .preset
                .as_deref()
                .or(config.preset.as_deref())
                .unwrap_or(Preset::Recommended.name());
            let preset = Preset::from_name(name)
                .with_context(|| format!("Unknown preset `{name}`, expected `recommended` or `all`"))?;
            preset.rules()
        }
    };

    let analyzer = Analyzer::builder()
        .root(path)
        .config(config)
        .excludes(options.exclude)
        .rules(rules)
        .fix(options.fix)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rules",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    if result.files_fixed > 0 {
        tracing::info!("Auto-corrected {} file(s)", result.files_fixed);
    }

    super::output::print(&result, options.format, analyzer.root())?;

    Ok(result.has_errors())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Selects rules by name or code from a comma-separated list.
fn filter_rules(filter: &str) -> Result<Vec<RuleBox>> {
    let wanted: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    let available = all_rules();
    for name in &wanted {
        if !available
            .iter()
            .any(|rule| rule.name() == *name || rule.code() == *name)
        {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    let selected: Vec<RuleBox> = available
        .into_iter()
        .filter(|rule| wanted.contains(&rule.name()) || wanted.contains(&rule.code()))
        .collect();
    if selected.is_empty() {
        bail!("No known rules in `--rules {filter}`. Run `compose-lint list-rules` to see them.");
    }
    Ok(selected)
}
