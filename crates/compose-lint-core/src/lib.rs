//! # compose-lint-core
//!
//! Core framework for linting Jetpack Compose code written in Kotlin.
//!
//! This crate provides:
//!
//! - [`syntax`]: an owned Kotlin syntax tree with in-place text rewrites
//! - [`kotlin`]: views over functions, parameters, calls and types
//! - [`Rule`] and [`Emitter`]: the visitor contract rules implement
//! - [`emission`]: content-emission counting across composables
//! - [`ConfigResolver`]: memoized typed access to rule options
//! - [`Analyzer`]: file discovery, dispatch and auto-correct
//!
//! ## Example
//!
//! ```ignore
//! use compose_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./app/src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod dispatch;
pub mod emission;
mod emitter;
pub mod kotlin;
pub mod resolver;
mod rule;
mod suppress;
pub mod syntax;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, FileReport};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use dispatch::{dispatch, Scheduled};
pub use emitter::{Decision, Emitter, FixMode, RuleEmitter};
pub use resolver::{ChainedSource, ConfigResolver, ConfigSource, EditorConfigSource, MapSource};
pub use rule::{Rule, RuleBox, RULES_DOC};
pub use suppress::is_suppressed;
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
pub use utils::allowance::AllowCheck;
