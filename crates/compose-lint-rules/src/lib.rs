//! # compose-lint-rules
//!
//! Built-in Jetpack Compose lint rules for compose-lint.
//!
//! Every rule implements [`Rule`] and reads its options from the
//! `[compose]` table of `compose-lint.toml` (or `compose_*` properties in
//! `.editorconfig`).
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CL001 | `composable-naming` | Unit composables are PascalCase, value-returning ones camelCase |
//! | CL002 | `composition-local-allowlist` | Only allow-listed CompositionLocals may be declared |
//! | CL003 | `composition-local-naming` | CompositionLocals are named `LocalX` |
//! | CL004 | `content-emitter-returning-values` | Composables either emit content or return a value |
//! | CL005 | `content-slot-reused` | Content slots are invoked at most once |
//! | CL006 | `content-trailing-lambda` | `content` slots are the trailing parameter |
//! | CL007 | `defaults-visibility` | `XDefaults` objects are as visible as `X` |
//! | CL008 | `lambda-param-in-effect` | Lambda parameters in effects are keys or `rememberUpdatedState` |
//! | CL009 | `material2` | Material 2 imports are not used (opt-in) |
//! | CL010 | `modifier-clickable-order` | `clickable` comes after shape modifiers |
//! | CL011 | `modifier-composable` | Modifier factories are not `@Composable` |
//! | CL012 | `modifier-composed` | Modifier factories don't use `composed {}` |
//! | CL013 | `modifier-missing` | Content-emitting composables take a modifier |
//! | CL014 | `modifier-naming` | Modifier parameters are named `modifier` or `xModifier` |
//! | CL015 | `modifier-not-used-at-root` | The modifier is applied to the root layout |
//! | CL016 | `modifier-reused` | The modifier is used by one layout only |
//! | CL017 | `modifier-without-default` | Modifier parameters default to `Modifier` |
//! | CL018 | `multiple-content-emitters` | Composables emit from a single top-level point |
//! | CL019 | `mutable-params` | Parameters are not mutable collections or state |
//! | CL020 | `mutable-state-autoboxing` | Primitive state uses `mutableIntStateOf` and friends |
//! | CL021 | `parameter-naming` | Event lambdas are named in present tense |
//! | CL022 | `parameter-order` | Required, modifier, optional, trailing lambda |
//! | CL023 | `preview-public` | Previews are not public |
//! | CL024 | `remember-missing` | State objects are wrapped in `remember` |
//! | CL025 | `unstable-collections` | `List`/`Set`/`Map` parameters are avoided (opt-in) |
//! | CL026 | `viewmodel-forwarding` | ViewModels are not forwarded to other composables |
//! | CL027 | `viewmodel-injection` | ViewModels are injected through parameters |
//!
//! ## Usage
//!
//! ```ignore
//! use compose_lint_core::Analyzer;
//! use compose_lint_rules::{ModifierMissing, ModifierReused};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./app/src")
//!     .rule(ModifierMissing::new())
//!     .rule(ModifierReused::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composable_naming;
mod composition_local_allowlist;
mod composition_local_naming;
mod content_emitter_returning_values;
mod content_slot_reused;
mod content_trailing_lambda;
mod defaults_visibility;
mod lambda_param_in_effect;
mod material2;
mod modifier_clickable_order;
mod modifier_composable;
mod modifier_composed;
mod modifier_missing;
mod modifier_naming;
mod modifier_not_used_at_root;
mod modifier_reused;
mod modifier_without_default;
mod multiple_content_emitters;
mod mutable_params;
mod mutable_state_autoboxing;
mod parameter_naming;
mod parameter_order;
mod presets;
mod preview_public;
mod remember_missing;
mod support;
mod unstable_collections;
mod viewmodel_forwarding;
mod viewmodel_injection;

#[cfg(test)]
mod testing;

pub use composable_naming::ComposableNaming;
pub use composition_local_allowlist::CompositionLocalAllowlist;
pub use composition_local_naming::CompositionLocalNaming;
pub use content_emitter_returning_values::ContentEmitterReturningValues;
pub use content_slot_reused::ContentSlotReused;
pub use content_trailing_lambda::ContentTrailingLambda;
pub use defaults_visibility::DefaultsVisibility;
pub use lambda_param_in_effect::LambdaParamInEffect;
pub use material2::Material2;
pub use modifier_clickable_order::ModifierClickableOrder;
pub use modifier_composable::ModifierComposable;
pub use modifier_composed::ModifierComposed;
pub use modifier_missing::ModifierMissing;
pub use modifier_naming::ModifierNaming;
pub use modifier_not_used_at_root::ModifierNotUsedAtRoot;
pub use modifier_reused::ModifierReused;
pub use modifier_without_default::ModifierWithoutDefault;
pub use multiple_content_emitters::MultipleContentEmitters;
pub use mutable_params::MutableParams;
pub use mutable_state_autoboxing::MutableStateAutoboxing;
pub use parameter_naming::ParameterNaming;
pub use parameter_order::ParameterOrder;
pub use presets::{all_rules, recommended_rules, Preset};
pub use preview_public::PreviewPublic;
pub use remember_missing::RememberMissing;
pub use unstable_collections::UnstableCollections;
pub use viewmodel_forwarding::ViewModelForwarding;
pub use viewmodel_injection::ViewModelInjection;

/// Re-export core types for convenience.
pub use compose_lint_core::{Rule, Severity, Violation};
