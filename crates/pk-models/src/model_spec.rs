//! The payload handed to the thermodynamics engine.
//!
//! A `ModelSpec` is a pure function of the configuration it was built from:
//! identical configurations always produce equal specs. Temperatures are in K,
//! pressures in bar.

use serde::Serialize;

use crate::component::{Component, FunctionalGroups};
use crate::excess_gibbs::GeParameters;
use crate::mixing_rule::MixingRule;
use crate::registry::{ModelFamily, ModelId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family")]
pub enum ModelSpec {
    ResidualHelmholtz(CubicSpec),
    ExcessGibbs(ExcessGibbsSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CubicSpec {
    pub model: ModelId,
    pub names: Vec<String>,
    pub tc_k: Vec<f64>,
    pub pc_bar: Vec<f64>,
    pub acentric_factor: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zc: Option<Vec<f64>>,
    /// Mathias-Copeman constants, per column. `None` when the column is all zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c1: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c2: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c3: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecules: Option<Vec<FunctionalGroups>>,
    /// `None` lets the engine use its default quadratic rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixing_rule: Option<MixingRule>,
}

impl CubicSpec {
    /// Critical constants only; model-specific fields are filled by the caller.
    pub(crate) fn base(model: ModelId, components: &[Component]) -> Self {
        Self {
            model,
            names: components.iter().map(|c| c.name.clone()).collect(),
            tc_k: components.iter().map(Component::tc_k).collect(),
            pc_bar: components.iter().map(Component::pc_bar).collect(),
            acentric_factor: components.iter().map(|c| c.acentric_factor).collect(),
            zc: None,
            c1: None,
            c2: None,
            c3: None,
            molecules: None,
            mixing_rule: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcessGibbsSpec {
    pub model: ModelId,
    pub names: Vec<String>,
    pub parameters: GeParameters,
}

impl ModelSpec {
    pub fn family(&self) -> ModelFamily {
        match self {
            ModelSpec::ResidualHelmholtz(_) => ModelFamily::ResidualHelmholtz,
            ModelSpec::ExcessGibbs(_) => ModelFamily::ExcessGibbs,
        }
    }

    pub fn model(&self) -> ModelId {
        match self {
            ModelSpec::ResidualHelmholtz(spec) => spec.model,
            ModelSpec::ExcessGibbs(spec) => spec.model,
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            ModelSpec::ResidualHelmholtz(spec) => &spec.names,
            ModelSpec::ExcessGibbs(spec) => &spec.names,
        }
    }

    pub fn component_count(&self) -> usize {
        self.names().len()
    }
}
