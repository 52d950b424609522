//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, RuleConfig};
use crate::context::FileContext;
use crate::dispatch::{dispatch, Scheduled};
use crate::emitter::FixMode;
use crate::resolver::{ChainedSource, ConfigResolver, EditorConfigSource};
use crate::rule::{Rule, RuleBox};
use crate::syntax::SyntaxTree;
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A Kotlin file could not be parsed.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Directory walk error.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Findings for one file.
#[derive(Debug, Default)]
pub struct FileReport {
    /// Violations that remain after any fixes were applied.
    pub violations: Vec<Violation>,
    /// The rewritten source, when fixing changed anything.
    pub fixed_source: Option<String>,
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    editorconfig: Option<EditorConfigSource>,
    fix_mode: FixMode,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory (or single file) to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses these `.editorconfig` properties instead of looking for a file.
    #[must_use]
    pub fn editorconfig(mut self, source: EditorConfigSource) -> Self {
        self.editorconfig = Some(source);
        self
    }

    /// Applies auto-corrections and writes fixed files back.
    #[must_use]
    pub fn fix(mut self, fix: bool) -> Self {
        self.fix_mode = if fix { FixMode::Fix } else { FixMode::Report };
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory or `.editorconfig` cannot be read.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        let editorconfig = match self.editorconfig {
            Some(source) => Some(source),
            None if config.analyzer.editorconfig => {
                let dir = if root.is_file() {
                    root.parent().map(Path::to_path_buf)
                } else {
                    Some(root.clone())
                };
                match dir.map(|d| d.join(".editorconfig")) {
                    Some(path) if path.is_file() => Some(EditorConfigSource::from_file(&path)?),
                    _ => None,
                }
            }
            None => None,
        };

        let mut options = ChainedSource::new().with(config.options());
        if let Some(editorconfig) = editorconfig {
            options = options.with(editorconfig);
        }

        let rules: Vec<RuleBox> = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        Ok(Analyzer {
            root,
            rules,
            exclude_patterns,
            config,
            options,
            fix_mode: self.fix_mode,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    options: ChainedSource,
    fix_mode: FixMode,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// In fix mode, corrected files are written back in place and only the
    /// violations left after fixing are reported.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or I/O fails, or on a parse
    /// error when `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            debug!("Analyzing: {}", file_path.display());
            let content = std::fs::read_to_string(file_path)?;
            match self.analyze_source(file_path, &content) {
                Ok(report) => {
                    if let Some(fixed) = report.fixed_source {
                        std::fs::write(file_path, fixed)?;
                        info!("Fixed {}", file_path.display());
                        result.files_fixed += 1;
                    }
                    result.violations.extend(report.violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes one file's source without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Parse`] if the grammar cannot be loaded, or
    /// if the source has syntax errors and `fail_on_parse_error` is set.
    pub fn analyze_source(&self, path: &Path, source: &str) -> Result<FileReport, AnalyzerError> {
        let tree = self.parse(path, source)?;
        let violations = self.run_rules(&tree, path, source, self.fix_mode);

        if self.fix_mode == FixMode::Fix && tree.has_rewrites() {
            let fixed = tree.render();
            let fixed_tree = self.parse(path, &fixed)?;
            let remaining = self.run_rules(&fixed_tree, path, &fixed, FixMode::Report);
            debug!(
                path = %path.display(),
                before = violations.len(),
                after = remaining.len(),
                "Applied fixes"
            );
            return Ok(FileReport {
                violations: remaining,
                fixed_source: Some(fixed),
            });
        }

        Ok(FileReport {
            violations,
            fixed_source: None,
        })
    }

    fn parse(&self, path: &Path, source: &str) -> Result<SyntaxTree, AnalyzerError> {
        let tree = SyntaxTree::parse(source).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if tree.has_errors() {
            if self.fail_on_parse_error {
                return Err(AnalyzerError::Parse {
                    path: path.to_path_buf(),
                    message: "source contains syntax errors".to_string(),
                });
            }
            debug!("{} has syntax errors; linting what parsed", path.display());
        }
        Ok(tree)
    }

    fn run_rules(&self, tree: &SyntaxTree, path: &Path, source: &str, mode: FixMode) -> Vec<Violation> {
        let ctx = FileContext::new(path, source, &self.root);
        let config = ConfigResolver::new(&self.options);
        let scheduled: Vec<Scheduled<'_>> = self
            .rules
            .iter()
            .map(|rule| {
                let mut entry = Scheduled::new(rule.as_ref());
                if let Some(severity) = self.config.rule_severity(rule.name()) {
                    entry.severity = severity;
                }
                entry
            })
            .collect();
        dispatch(tree, &ctx, &scheduled, &config, mode)
    }

    /// Discovers all Kotlin source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !is_kotlin(path) {
                continue;
            }
            if self.should_exclude(path)? {
                debug!("Excluding: {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> Result<bool, AnalyzerError> {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let path_str = relative.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if glob::Pattern::new(pattern)?.matches(&path_str) {
                return Ok(true);
            }

            // Directory patterns like "**/build/**" also match as "/build/",
            // keeping the separators so `build.gradle.kts` is not caught.
            let normalized_pattern = pattern.replace("**", "");
            if normalized_pattern.contains('/')
                && !normalized_pattern.contains('*')
                && format!("/{path_str}").contains(&normalized_pattern)
            {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rules.get(rule_name)
    }
}

fn is_kotlin(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "kt" || ext == "kts")
}
