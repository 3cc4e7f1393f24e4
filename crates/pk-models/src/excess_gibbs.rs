//! Excess-Gibbs (activity coefficient) models.

use serde::Serialize;

use crate::component::{Component, ComponentParameter, FunctionalGroups};
use crate::matrix::InteractionMatrix;
use crate::mixing_rule::{MixingRule, MixingRuleKind};
use crate::model_spec::{ExcessGibbsSpec, ModelSpec};
use crate::registry::{MixingRulePolicy, ModelFamily, ModelId, ModelVariant};
use crate::validate::IssueCollector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnifacVariant {
    #[serde(rename = "VLE")]
    Vle,
    #[serde(rename = "PSRK")]
    Psrk,
    Dortmund,
}

impl UnifacVariant {
    pub fn model_id(self) -> ModelId {
        match self {
            UnifacVariant::Vle => ModelId::UnifacVle,
            UnifacVariant::Psrk => ModelId::UnifacPsrk,
            UnifacVariant::Dortmund => ModelId::UnifacDortmund,
        }
    }
}

/// Parameter set of an excess-Gibbs model.
///
/// Used directly by excess-Gibbs models (through the `GE` mixing-rule slot) and
/// nested inside the HV and MHV mixing rules of cubic models.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "model")]
pub enum GeParameters {
    /// `τij = aij + bij / T`, non-randomness `cij`
    #[serde(rename = "NRTL")]
    Nrtl {
        aij: InteractionMatrix,
        bij: InteractionMatrix,
        cij: InteractionMatrix,
    },
    #[serde(rename = "UNIQUAC")]
    Uniquac {
        rs: Vec<f64>,
        qs: Vec<f64>,
        aij: InteractionMatrix,
        bij: InteractionMatrix,
        #[serde(skip_serializing_if = "Option::is_none")]
        cij: Option<InteractionMatrix>,
        #[serde(skip_serializing_if = "Option::is_none")]
        dij: Option<InteractionMatrix>,
        #[serde(skip_serializing_if = "Option::is_none")]
        eij: Option<InteractionMatrix>,
    },
    /// One group-count map per component.
    #[serde(rename = "UNIFAC")]
    Unifac {
        variant: UnifacVariant,
        molecules: Vec<FunctionalGroups>,
    },
}

impl GeParameters {
    pub fn nrtl(n: usize) -> Self {
        GeParameters::Nrtl {
            aij: InteractionMatrix::zeros(n),
            bij: InteractionMatrix::zeros(n),
            cij: InteractionMatrix::zeros(n),
        }
    }

    /// Unit volume and area parameters, zero interactions.
    pub fn uniquac(n: usize) -> Self {
        GeParameters::Uniquac {
            rs: vec![1.0; n],
            qs: vec![1.0; n],
            aij: InteractionMatrix::zeros(n),
            bij: InteractionMatrix::zeros(n),
            cij: None,
            dij: None,
            eij: None,
        }
    }

    /// Group sets taken from the components. Components without groups get an
    /// empty set, which fails validation.
    pub fn unifac(variant: UnifacVariant, components: &[Component]) -> Self {
        GeParameters::Unifac {
            variant,
            molecules: components
                .iter()
                .map(|c| c.groups.clone().unwrap_or_default())
                .collect(),
        }
    }

    /// Default parameter set for an excess-Gibbs model, `None` for cubic models.
    pub fn template(model: ModelId, components: &[Component]) -> Option<Self> {
        let n = components.len();
        match model {
            ModelId::Nrtl => Some(Self::nrtl(n)),
            ModelId::Uniquac => Some(Self::uniquac(n)),
            ModelId::UnifacVle => Some(Self::unifac(UnifacVariant::Vle, components)),
            ModelId::UnifacPsrk => Some(Self::unifac(UnifacVariant::Psrk, components)),
            ModelId::UnifacDortmund => Some(Self::unifac(UnifacVariant::Dortmund, components)),
            ModelId::PengRobinson76
            | ModelId::PengRobinson78
            | ModelId::SoaveRedlichKwong
            | ModelId::Rkpr
            | ModelId::Psrk => None,
        }
    }

    pub fn model_id(&self) -> ModelId {
        match self {
            GeParameters::Nrtl { .. } => ModelId::Nrtl,
            GeParameters::Uniquac { .. } => ModelId::Uniquac,
            GeParameters::Unifac { variant, .. } => variant.model_id(),
        }
    }

    /// Reports issues under `prefix`, e.g. `mixing_rule.ge.aij`.
    pub fn check(&self, prefix: &str, n: usize, issues: &mut IssueCollector) {
        let field = |name: &str| format!("{prefix}.{name}");
        match self {
            GeParameters::Nrtl { aij, bij, cij } => {
                issues.check_matrix(&field("aij"), aij, n, false);
                issues.check_matrix(&field("bij"), bij, n, false);
                issues.check_matrix(&field("cij"), cij, n, true);
            }
            GeParameters::Uniquac {
                rs,
                qs,
                aij,
                bij,
                cij,
                dij,
                eij,
            } => {
                issues.check_vector(&field("rs"), rs, n, true);
                issues.check_vector(&field("qs"), qs, n, true);
                issues.check_matrix(&field("aij"), aij, n, false);
                issues.check_matrix(&field("bij"), bij, n, false);
                issues.check_optional_matrix(&field("cij"), cij.as_ref(), n, false);
                issues.check_optional_matrix(&field("dij"), dij.as_ref(), n, false);
                issues.check_optional_matrix(&field("eij"), eij.as_ref(), n, false);
            }
            GeParameters::Unifac { molecules, .. } => {
                if molecules.len() != n {
                    issues.invalid(
                        field("molecules"),
                        format!("expected {n} group sets, got {}", molecules.len()),
                    );
                    return;
                }
                for (i, groups) in molecules.iter().enumerate() {
                    if groups.is_empty() {
                        issues.missing(field(&format!("molecules[{i}]")));
                    }
                }
            }
        }
    }
}

/// Any of the excess-Gibbs models. Parameters come from the `GE` mixing-rule slot.
#[derive(Debug)]
pub struct ExcessGibbsModel {
    id: ModelId,
    display_name: &'static str,
    description: &'static str,
}

pub static NRTL: ExcessGibbsModel = ExcessGibbsModel {
    id: ModelId::Nrtl,
    display_name: "NRTL",
    description: "Non-Random Two-Liquid model: τij = aij + bij/T",
};

pub static UNIQUAC: ExcessGibbsModel = ExcessGibbsModel {
    id: ModelId::Uniquac,
    display_name: "UNIQUAC",
    description: "Universal Quasi-Chemical model with full interaction parameter support (aij..eij)",
};

pub static UNIFAC_VLE: ExcessGibbsModel = ExcessGibbsModel {
    id: ModelId::UnifacVle,
    display_name: "UNIFAC-VLE (Original)",
    description: "Original UNIFAC model for vapor-liquid equilibrium; requires functional groups for each component",
};

pub static UNIFAC_PSRK: ExcessGibbsModel = ExcessGibbsModel {
    id: ModelId::UnifacPsrk,
    display_name: "UNIFAC-PSRK",
    description: "UNIFAC with the PSRK group parameter table; requires functional groups for each component",
};

pub static UNIFAC_DORTMUND: ExcessGibbsModel = ExcessGibbsModel {
    id: ModelId::UnifacDortmund,
    display_name: "UNIFAC-Dortmund",
    description: "Modified UNIFAC (Dortmund) with temperature-dependent group interactions; requires functional groups for each component",
};

impl ModelVariant for ExcessGibbsModel {
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
        ModelFamily::ExcessGibbs
    }

    fn required_parameters(&self) -> &'static [ComponentParameter] {
        &[]
    }

    fn mixing_rule_policy(&self) -> MixingRulePolicy {
        MixingRulePolicy::Required
    }

    fn supported_mixing_rules(&self) -> &'static [MixingRuleKind] {
        &[MixingRuleKind::ExcessGibbs]
    }

    fn check_mixing_rule(&self, rule: &MixingRule, issues: &mut IssueCollector) {
        if let MixingRule::ExcessGibbs { parameters } = rule {
            let got = parameters.model_id();
            if got != self.id {
                issues.invalid(
                    "mixing_rule.parameters",
                    format!("expected {} parameters, got {}", self.id, got),
                );
            }
        }
    }

    fn assemble(&self, components: &[Component], mixing_rule: Option<&MixingRule>) -> ModelSpec {
        let parameters = match mixing_rule {
            Some(MixingRule::ExcessGibbs { parameters }) => parameters.clone(),
            // Unreachable after validation; fall back to defaults for the model.
            _ => GeParameters::template(self.id, components)
                .unwrap_or_else(|| GeParameters::nrtl(components.len())),
        };
        ModelSpec::ExcessGibbs(ExcessGibbsSpec {
            model: self.id,
            names: components.iter().map(|c| c.name.clone()).collect(),
            parameters,
        })
    }
}
