//! Model registry.
//!
//! A stable identifier per model, each mapped to a static implementation of
//! [`ModelVariant`]. Adding a model means adding an enum variant, its static
//! and one match arm in [`ModelId::variant`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bulk::ColumnLayout;
use crate::component::{Component, ComponentParameter};
use crate::cubic;
use crate::error::ModelError;
use crate::excess_gibbs;
use crate::mixing_rule::{MixingRule, MixingRuleKind};
use crate::model_spec::ModelSpec;
use crate::validate::{ConfigurationError, IssueCollector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ModelFamily {
    /// Cubic equations of state
    #[default]
    ResidualHelmholtz,
    /// Activity coefficient models
    ExcessGibbs,
}

impl ModelFamily {
    pub fn label(self) -> &'static str {
        match self {
            ModelFamily::ResidualHelmholtz => "ArModel (Residual Helmholtz)",
            ModelFamily::ExcessGibbs => "GeModel (Excess Gibbs)",
        }
    }

    pub fn models(self) -> impl Iterator<Item = ModelId> {
        ModelId::ALL.into_iter().filter(move |id| id.family() == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelId {
    PengRobinson76,
    PengRobinson78,
    SoaveRedlichKwong,
    #[serde(rename = "RKPR")]
    Rkpr,
    #[serde(rename = "PSRK")]
    Psrk,
    #[serde(rename = "NRTL")]
    Nrtl,
    #[serde(rename = "UNIQUAC")]
    Uniquac,
    #[serde(rename = "UNIFAC_VLE")]
    UnifacVle,
    #[serde(rename = "UNIFAC_PSRK")]
    UnifacPsrk,
    #[serde(rename = "UNIFAC_Dortmund")]
    UnifacDortmund,
}

impl ModelId {
    pub const ALL: [ModelId; 10] = [
        ModelId::PengRobinson76,
        ModelId::PengRobinson78,
        ModelId::SoaveRedlichKwong,
        ModelId::Rkpr,
        ModelId::Psrk,
        ModelId::Nrtl,
        ModelId::Uniquac,
        ModelId::UnifacVle,
        ModelId::UnifacPsrk,
        ModelId::UnifacDortmund,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::PengRobinson76 => "PengRobinson76",
            ModelId::PengRobinson78 => "PengRobinson78",
            ModelId::SoaveRedlichKwong => "SoaveRedlichKwong",
            ModelId::Rkpr => "RKPR",
            ModelId::Psrk => "PSRK",
            ModelId::Nrtl => "NRTL",
            ModelId::Uniquac => "UNIQUAC",
            ModelId::UnifacVle => "UNIFAC_VLE",
            ModelId::UnifacPsrk => "UNIFAC_PSRK",
            ModelId::UnifacDortmund => "UNIFAC_Dortmund",
        }
    }

    pub fn variant(self) -> &'static dyn ModelVariant {
        match self {
            ModelId::PengRobinson76 => &cubic::PENG_ROBINSON_76,
            ModelId::PengRobinson78 => &cubic::PENG_ROBINSON_78,
            ModelId::SoaveRedlichKwong => &cubic::SOAVE_REDLICH_KWONG,
            ModelId::Rkpr => &cubic::RKPR,
            ModelId::Psrk => &cubic::PSRK,
            ModelId::Nrtl => &excess_gibbs::NRTL,
            ModelId::Uniquac => &excess_gibbs::UNIQUAC,
            ModelId::UnifacVle => &excess_gibbs::UNIFAC_VLE,
            ModelId::UnifacPsrk => &excess_gibbs::UNIFAC_PSRK,
            ModelId::UnifacDortmund => &excess_gibbs::UNIFAC_DORTMUND,
        }
    }

    pub fn family(self) -> ModelFamily {
        self.variant().family()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ModelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ModelError::UnknownIdentifier {
                kind: "model",
                id: s.to_string(),
            })
    }
}

/// Whether a model takes a user-selected mixing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixingRulePolicy {
    /// The engine falls back to its default rule when none is selected.
    Optional,
    Required,
    /// The model carries its own rule; selecting one is an error.
    BuiltIn,
}

/// Capability interface shared by every registered model.
pub trait ModelVariant: Send + Sync {
    fn id(&self) -> ModelId;

    fn display_name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn family(&self) -> ModelFamily;

    /// Component data needed beyond Tc, Pc and ω.
    fn required_parameters(&self) -> &'static [ComponentParameter];

    fn mixing_rule_policy(&self) -> MixingRulePolicy;

    fn supported_mixing_rules(&self) -> &'static [MixingRuleKind];

    fn bulk_layout(&self) -> ColumnLayout {
        ColumnLayout::Basic
    }

    /// Model-specific checks on an accepted mixing rule.
    fn check_mixing_rule(&self, _rule: &MixingRule, _issues: &mut IssueCollector) {}

    /// Builds the engine payload. Only called on validated input.
    fn assemble(&self, components: &[Component], mixing_rule: Option<&MixingRule>) -> ModelSpec;

    /// Collects every issue with `components` and `mixing_rule` for this model.
    fn validate(
        &self,
        components: &[Component],
        mixing_rule: Option<&MixingRule>,
        issues: &mut IssueCollector,
    ) {
        issues.check_components(components, self.required_parameters());

        match (self.mixing_rule_policy(), mixing_rule) {
            (MixingRulePolicy::Required, None) => issues.missing("mixing_rule"),
            (MixingRulePolicy::BuiltIn, Some(rule)) => issues.invalid(
                "mixing_rule",
                format!(
                    "{} uses its built-in mixing rule, {} cannot be selected",
                    self.display_name(),
                    rule.kind()
                ),
            ),
            (_, Some(rule)) if !self.supported_mixing_rules().contains(&rule.kind()) => {
                issues.invalid(
                    "mixing_rule",
                    format!("{} is not available for {}", rule.kind(), self.display_name()),
                )
            }
            (_, Some(rule)) => {
                if !components.is_empty() {
                    rule.check(components.len(), issues);
                }
                self.check_mixing_rule(rule, issues);
            }
            (_, None) => {}
        }
    }

    fn build(
        &self,
        components: &[Component],
        mixing_rule: Option<&MixingRule>,
    ) -> Result<ModelSpec, ConfigurationError> {
        let mut issues = IssueCollector::default();
        if components.is_empty() {
            issues.missing("components");
        }
        self.validate(components, mixing_rule, &mut issues);
        issues.finish()?;
        Ok(self.assemble(components, mixing_rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_round_trip() {
        for id in ModelId::ALL {
            assert_eq!(id.as_str().parse::<ModelId>().unwrap(), id);
            assert_eq!(id.variant().id(), id);
        }
        assert!(matches!(
            "PR".parse::<ModelId>(),
            Err(ModelError::UnknownIdentifier { kind: "model", .. })
        ));
    }

    #[test]
    fn display_names_are_unique() {
        let mut seen = HashSet::new();
        for id in ModelId::ALL {
            assert!(seen.insert(id.variant().display_name()), "{id}");
        }
    }

    #[test]
    fn families_partition_the_registry() {
        let ar: Vec<_> = ModelFamily::ResidualHelmholtz.models().collect();
        let ge: Vec<_> = ModelFamily::ExcessGibbs.models().collect();
        assert_eq!(ar.len(), 5);
        assert_eq!(ge.len(), 5);
        assert_eq!(ar[0], ModelId::PengRobinson76);
        assert!(ge.contains(&ModelId::UnifacDortmund));
    }

    #[test]
    fn serialized_ids_match_as_str() {
        for id in ModelId::ALL {
            let json = serde_json::to_value(id).unwrap();
            assert_eq!(json, serde_json::Value::String(id.as_str().to_string()));
        }
    }

    #[test]
    fn excess_gibbs_models_require_a_rule() {
        for id in ModelFamily::ExcessGibbs.models() {
            let variant = id.variant();
            assert_eq!(variant.mixing_rule_policy(), MixingRulePolicy::Required);
            assert_eq!(variant.supported_mixing_rules(), &[MixingRuleKind::ExcessGibbs]);
        }
    }
}
