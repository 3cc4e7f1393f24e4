//! Mixing rules and their parameters.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ModelError;
use crate::excess_gibbs::GeParameters;
use crate::matrix::{InteractionMatrix, PairFlags};
use crate::validate::IssueCollector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MixingRuleKind {
    #[serde(rename = "QMR")]
    Qmr,
    #[serde(rename = "QMRTD")]
    Qmrtd,
    #[serde(rename = "HV")]
    Hv,
    #[serde(rename = "MHV")]
    Mhv,
    #[serde(rename = "HVNRTL")]
    HvNrtl,
    #[serde(rename = "GE")]
    ExcessGibbs,
}

impl MixingRuleKind {
    pub const ALL: [MixingRuleKind; 6] = [
        MixingRuleKind::Qmr,
        MixingRuleKind::Qmrtd,
        MixingRuleKind::Hv,
        MixingRuleKind::Mhv,
        MixingRuleKind::HvNrtl,
        MixingRuleKind::ExcessGibbs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MixingRuleKind::Qmr => "QMR",
            MixingRuleKind::Qmrtd => "QMRTD",
            MixingRuleKind::Hv => "HV",
            MixingRuleKind::Mhv => "MHV",
            MixingRuleKind::HvNrtl => "HVNRTL",
            MixingRuleKind::ExcessGibbs => "GE",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MixingRuleKind::Qmr => "QMR - Quadratic Mixing Rule",
            MixingRuleKind::Qmrtd => "QMRTD - Temperature-Dependent Quadratic",
            MixingRuleKind::Hv => "HV - Huron-Vidal",
            MixingRuleKind::Mhv => "MHV - Modified Huron-Vidal",
            MixingRuleKind::HvNrtl => "HVNRTL - Huron-Vidal with NRTL",
            MixingRuleKind::ExcessGibbs => "GE - Excess Gibbs parameters",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MixingRuleKind::Qmr => {
                "Standard van der Waals mixing rules with binary interaction parameters"
            }
            MixingRuleKind::Qmrtd => {
                "kij varies with temperature: kij(T) = kij_0 + (kij_inf - kij_0) * T / Tref"
            }
            MixingRuleKind::Hv => "Huron-Vidal mixing rule with excess Gibbs energy model",
            MixingRuleKind::Mhv => {
                "Modified Huron-Vidal mixing rule with excess Gibbs energy model and q parameter"
            }
            MixingRuleKind::HvNrtl => {
                "Special implementation combining HV and NRTL with selective kij usage"
            }
            MixingRuleKind::ExcessGibbs => "Parameter set of an activity coefficient model",
        }
    }
}

impl fmt::Display for MixingRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MixingRuleKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MixingRuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownIdentifier {
                kind: "mixing rule",
                id: s.to_string(),
            })
    }
}

/// A selected mixing rule with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum MixingRule {
    /// Quadratic rule. Absent `lij` means zeros.
    #[serde(rename = "QMR")]
    Qmr {
        kij: InteractionMatrix,
        #[serde(skip_serializing_if = "Option::is_none")]
        lij: Option<InteractionMatrix>,
    },
    /// `kij(T) = kij_0 + (kij_inf - kij_0) * T / t_ref`
    #[serde(rename = "QMRTD")]
    Qmrtd {
        kij_0: InteractionMatrix,
        kij_inf: InteractionMatrix,
        t_ref: InteractionMatrix,
        #[serde(skip_serializing_if = "Option::is_none")]
        lij: Option<InteractionMatrix>,
    },
    #[serde(rename = "HV")]
    Hv { ge: GeParameters },
    #[serde(rename = "MHV")]
    Mhv { ge: GeParameters, q: f64 },
    #[serde(rename = "HVNRTL")]
    HvNrtl {
        alpha: InteractionMatrix,
        gji: InteractionMatrix,
        use_kij: PairFlags,
        kij: InteractionMatrix,
    },
    /// Parameters of an excess-Gibbs model.
    #[serde(rename = "GE")]
    ExcessGibbs { parameters: GeParameters },
}

impl MixingRule {
    pub const MHV_DEFAULT_Q: f64 = -0.53;
    pub const QMRTD_DEFAULT_TREF: f64 = 300.0;
    pub const HVNRTL_DEFAULT_ALPHA: f64 = 0.3;

    pub fn kind(&self) -> MixingRuleKind {
        match self {
            MixingRule::Qmr { .. } => MixingRuleKind::Qmr,
            MixingRule::Qmrtd { .. } => MixingRuleKind::Qmrtd,
            MixingRule::Hv { .. } => MixingRuleKind::Hv,
            MixingRule::Mhv { .. } => MixingRuleKind::Mhv,
            MixingRule::HvNrtl { .. } => MixingRuleKind::HvNrtl,
            MixingRule::ExcessGibbs { .. } => MixingRuleKind::ExcessGibbs,
        }
    }

    pub fn qmr(kij: InteractionMatrix) -> Self {
        MixingRule::Qmr { kij, lij: None }
    }

    pub fn mhv(ge: GeParameters) -> Self {
        MixingRule::Mhv {
            ge,
            q: Self::MHV_DEFAULT_Q,
        }
    }

    /// Default parameters of `kind` for `n` components.
    ///
    /// HV, MHV and GE start from a zero NRTL parameter set.
    pub fn template(kind: MixingRuleKind, n: usize) -> Self {
        match kind {
            MixingRuleKind::Qmr => Self::qmr(InteractionMatrix::zeros(n)),
            MixingRuleKind::Qmrtd => MixingRule::Qmrtd {
                kij_0: InteractionMatrix::zeros(n),
                kij_inf: InteractionMatrix::zeros(n),
                t_ref: InteractionMatrix::filled(n, Self::QMRTD_DEFAULT_TREF),
                lij: None,
            },
            MixingRuleKind::Hv => MixingRule::Hv {
                ge: GeParameters::nrtl(n),
            },
            MixingRuleKind::Mhv => Self::mhv(GeParameters::nrtl(n)),
            MixingRuleKind::HvNrtl => MixingRule::HvNrtl {
                alpha: InteractionMatrix::filled(n, Self::HVNRTL_DEFAULT_ALPHA),
                gji: InteractionMatrix::zeros(n),
                use_kij: PairFlags::from_element(n, false),
                kij: InteractionMatrix::zeros(n),
            },
            MixingRuleKind::ExcessGibbs => MixingRule::ExcessGibbs {
                parameters: GeParameters::nrtl(n),
            },
        }
    }

    /// Checks parameter shapes against `n` components, reporting under `mixing_rule`.
    pub fn check(&self, n: usize, issues: &mut IssueCollector) {
        match self {
            MixingRule::Qmr { kij, lij } => {
                issues.check_matrix("mixing_rule.kij", kij, n, true);
                issues.check_optional_matrix("mixing_rule.lij", lij.as_ref(), n, true);
            }
            MixingRule::Qmrtd {
                kij_0,
                kij_inf,
                t_ref,
                lij,
            } => {
                issues.check_matrix("mixing_rule.kij_0", kij_0, n, true);
                issues.check_matrix("mixing_rule.kij_inf", kij_inf, n, true);
                issues.check_matrix("mixing_rule.t_ref", t_ref, n, true);
                issues.check_optional_matrix("mixing_rule.lij", lij.as_ref(), n, true);
            }
            MixingRule::Hv { ge } => ge.check("mixing_rule.ge", n, issues),
            MixingRule::Mhv { ge, q } => {
                ge.check("mixing_rule.ge", n, issues);
                if !q.is_finite() {
                    issues.invalid("mixing_rule.q", "must be finite");
                }
            }
            MixingRule::HvNrtl {
                alpha,
                gji,
                use_kij,
                kij,
            } => {
                issues.check_matrix("mixing_rule.alpha", alpha, n, true);
                issues.check_matrix("mixing_rule.gji", gji, n, false);
                issues.check_flags("mixing_rule.use_kij", use_kij, n);
                issues.check_matrix("mixing_rule.kij", kij, n, false);
            }
            MixingRule::ExcessGibbs { parameters } => {
                parameters.check("mixing_rule.parameters", n, issues)
            }
        }
    }
}
