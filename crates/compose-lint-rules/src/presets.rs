//! Rule presets for common configurations.

use compose_lint_core::RuleBox;

use crate::{
    ComposableNaming, CompositionLocalAllowlist, CompositionLocalNaming, ContentEmitterReturningValues,
    ContentSlotReused, ContentTrailingLambda, DefaultsVisibility, LambdaParamInEffect, Material2,
    ModifierClickableOrder, ModifierComposable, ModifierComposed, ModifierMissing, ModifierNaming,
    ModifierNotUsedAtRoot, ModifierReused, ModifierWithoutDefault, MultipleContentEmitters, MutableParams,
    MutableStateAutoboxing, ParameterNaming, ParameterOrder, PreviewPublic, RememberMissing, UnstableCollections,
    ViewModelForwarding, ViewModelInjection,
};

/// Rules left out of [`Preset::Recommended`] because they depend on project
/// choices (Material 3 migration, strong skipping).
const OPT_IN: &[&str] = &["material2", "unstable-collections"];

/// Preset configurations for compose-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule except the opt-in ones.
    Recommended,
    /// Every rule.
    All,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::All => all_rules(),
        }
    }

    /// The preset's name as used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::All => "all",
        }
    }

    /// Looks a preset up by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Returns the recommended set of rules: all of them except `material2`
/// and `unstable-collections`.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
        .into_iter()
        .filter(|rule| !OPT_IN.contains(&rule.name()))
        .collect()
}

/// Returns all available rules, in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ComposableNaming::new()),
        Box::new(CompositionLocalAllowlist::new()),
        Box::new(CompositionLocalNaming::new()),
        Box::new(ContentEmitterReturningValues::new()),
        Box::new(ContentSlotReused::new()),
        Box::new(ContentTrailingLambda::new()),
        Box::new(DefaultsVisibility::new()),
        Box::new(LambdaParamInEffect::new()),
        Box::new(Material2::new()),
        Box::new(ModifierClickableOrder::new()),
        Box::new(ModifierComposable::new()),
        Box::new(ModifierComposed::new()),
        Box::new(ModifierMissing::new()),
        Box::new(ModifierNaming::new()),
        Box::new(ModifierNotUsedAtRoot::new()),
        Box::new(ModifierReused::new()),
        Box::new(ModifierWithoutDefault::new()),
        Box::new(MultipleContentEmitters::new()),
        Box::new(MutableParams::new()),
        Box::new(MutableStateAutoboxing::new()),
        Box::new(ParameterNaming::new()),
        Box::new(ParameterOrder::new()),
        Box::new(PreviewPublic::new()),
        Box::new(RememberMissing::new()),
        Box::new(UnstableCollections::new()),
        Box::new(ViewModelForwarding::new()),
        Box::new(ViewModelInjection::new()),
    ]
}
