//! Cubic equations of state (residual-Helmholtz family).

use crate::bulk::ColumnLayout;
use crate::component::{Component, ComponentParameter};
use crate::mixing_rule::{MixingRule, MixingRuleKind};
use crate::model_spec::{CubicSpec, ModelSpec};
use crate::registry::{MixingRulePolicy, ModelFamily, ModelId, ModelVariant};

const CUBIC_MIXING_RULES: [MixingRuleKind; 5] = [
    MixingRuleKind::Qmr,
    MixingRuleKind::Qmrtd,
    MixingRuleKind::Hv,
    MixingRuleKind::Mhv,
    MixingRuleKind::HvNrtl,
];

/// Cubic EoS defined by Tc, Pc and ω alone (PR76, PR78, SRK).
#[derive(Debug)]
pub struct StandardCubic {
    id: ModelId,
    display_name: &'static str,
    description: &'static str,
}

pub static PENG_ROBINSON_76: StandardCubic = StandardCubic {
    id: ModelId::PengRobinson76,
    display_name: "Peng-Robinson (1976)",
    description: "Classic Peng-Robinson equation of state (1976)",
};

pub static PENG_ROBINSON_78: StandardCubic = StandardCubic {
    id: ModelId::PengRobinson78,
    display_name: "Peng-Robinson (1978)",
    description: "Modified Peng-Robinson equation with improved alpha function (1978)",
};

pub static SOAVE_REDLICH_KWONG: StandardCubic = StandardCubic {
    id: ModelId::SoaveRedlichKwong,
    display_name: "Soave-Redlich-Kwong",
    description: "Soave modification of the Redlich-Kwong equation of state",
};

impl ModelVariant for StandardCubic {
    fn id(&self) -> ModelId {
        self.id
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::ResidualHelmholtz
    }

    fn required_parameters(&self) -> &'static [ComponentParameter] {
        &[]
    }

    fn mixing_rule_policy(&self) -> MixingRulePolicy {
        MixingRulePolicy::Optional
    }

    fn supported_mixing_rules(&self) -> &'static [MixingRuleKind] {
        &CUBIC_MIXING_RULES
    }

    fn assemble(&self, components: &[Component], mixing_rule: Option<&MixingRule>) -> ModelSpec {
        let mut spec = CubicSpec::base(self.id, components);
        spec.mixing_rule = mixing_rule.cloned();
        ModelSpec::ResidualHelmholtz(spec)
    }
}

/// Redlich-Kwong-Peng-Robinson, parametrized by the critical compressibility.
#[derive(Debug)]
pub struct Rkpr;

pub static RKPR: Rkpr = Rkpr;

impl ModelVariant for Rkpr {
    fn id(&self) -> ModelId {
        ModelId::Rkpr
    }

    fn display_name(&self) -> &'static str {
        "RKPR"
    }

    fn description(&self) -> &'static str {
        "Redlich-Kwong-Peng-Robinson with additional flexibility parameter"
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::ResidualHelmholtz
    }

    fn required_parameters(&self) -> &'static [ComponentParameter] {
        &[ComponentParameter::CriticalCompressibility]
    }

    fn mixing_rule_policy(&self) -> MixingRulePolicy {
        MixingRulePolicy::Optional
    }

    fn supported_mixing_rules(&self) -> &'static [MixingRuleKind] {
        &CUBIC_MIXING_RULES
    }

    fn bulk_layout(&self) -> ColumnLayout {
        ColumnLayout::WithZc
    }

    fn assemble(&self, components: &[Component], mixing_rule: Option<&MixingRule>) -> ModelSpec {
        let mut spec = CubicSpec::base(ModelId::Rkpr, components);
        spec.zc = Some(components.iter().map(|c| c.zc.unwrap_or_default()).collect());
        spec.mixing_rule = mixing_rule.cloned();
        ModelSpec::ResidualHelmholtz(spec)
    }
}

/// Predictive SRK with its built-in UNIFAC-based mixing rule.
#[derive(Debug)]
pub struct Psrk;

pub static PSRK: Psrk = Psrk;

impl ModelVariant for Psrk {
    fn id(&self) -> ModelId {
        ModelId::Psrk
    }

    fn display_name(&self) -> &'static str {
        "PSRK (Predictive SRK)"
    }

    fn description(&self) -> &'static str {
        "Predictive Soave-Redlich-Kwong with built-in UNIFAC mixing rules"
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::ResidualHelmholtz
    }

    fn required_parameters(&self) -> &'static [ComponentParameter] {
        &[ComponentParameter::Groups]
    }

    fn mixing_rule_policy(&self) -> MixingRulePolicy {
        MixingRulePolicy::BuiltIn
    }

    fn supported_mixing_rules(&self) -> &'static [MixingRuleKind] {
        &[]
    }

    fn bulk_layout(&self) -> ColumnLayout {
        ColumnLayout::Psrk
    }

    fn assemble(&self, components: &[Component], _mixing_rule: Option<&MixingRule>) -> ModelSpec {
        let mut spec = CubicSpec::base(ModelId::Psrk, components);
        spec.molecules = Some(
            components
                .iter()
                .map(|c| c.groups.clone().unwrap_or_default())
                .collect(),
        );
        let column = |i: usize| -> Option<Vec<f64>> {
            let values: Vec<f64> = components
                .iter()
                .map(|c| c.mathias_copeman.map_or(0.0, |m| m[i]))
                .collect();
            values.iter().any(|v| *v != 0.0).then_some(values)
        };
        spec.c1 = column(0);
        spec.c2 = column(1);
        spec.c3 = column(2);
        ModelSpec::ResidualHelmholtz(spec)
    }
}
