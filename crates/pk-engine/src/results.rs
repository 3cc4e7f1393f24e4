//! Values returned by engine models. Temperatures in K, pressures in bar.

use serde::Serialize;

/// Two-phase split of a feed into phases `x` and `y` with vapor-like fraction `beta`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashResult {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub beta: f64,
    pub temperature_k: f64,
    /// Absent for flashes that do not report a pressure (excess-Gibbs models).
    pub pressure_bar: Option<f64>,
}

impl FlashResult {
    /// Partition coefficients `y / x`.
    pub fn k_values(&self) -> Vec<f64> {
        self.x.iter().zip(&self.y).map(|(x, y)| y / x).collect()
    }

    /// Only results with `0 <= beta <= 1` count as converged.
    pub fn is_converged(&self) -> bool {
        (0.0..=1.0).contains(&self.beta)
    }

    pub fn is_two_phase(&self) -> bool {
        self.beta > 0.0 && self.beta < 1.0
    }
}

/// Outcome of a tangent-plane stability test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityResult {
    /// Trial phase composition at the minimum found.
    pub w: Vec<f64>,
    /// Tangent-plane distance at `w`. Negative means unstable.
    pub tm: f64,
}

impl StabilityResult {
    pub fn is_stable(&self) -> bool {
        self.tm >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EnvelopeKind {
    #[default]
    Dew,
    Bubble,
}

impl EnvelopeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EnvelopeKind::Dew => "dew",
            EnvelopeKind::Bubble => "bubble",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalPoint {
    pub temperature_k: f64,
    pub pressure_bar: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseEnvelope {
    pub kind: EnvelopeKind,
    pub temperatures_k: Vec<f64>,
    pub pressures_bar: Vec<f64>,
    pub critical_points: Vec<CriticalPoint>,
}

impl PhaseEnvelope {
    pub fn len(&self) -> usize {
        self.temperatures_k.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures_k.is_empty()
    }
}

/// A line in the PT plane.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Curve {
    pub temperatures_k: Vec<f64>,
    pub pressures_bar: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.temperatures_k.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures_k.is_empty()
    }
}

/// Global phase-equilibrium diagram of a binary mixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpecDiagram {
    /// Saturation line of each pure component, in component order.
    pub pure_saturation: Vec<Curve>,
    /// Critical locus starting at the critical point of component 2.
    pub critical_21: Curve,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_12: Option<Curve>,
    /// Liquid-liquid critical locus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_ll: Option<Curve>,
    /// Vapor-liquid-liquid line ending on the liquid-liquid locus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llv: Option<Curve>,
}

/// One branch of an isothermal Pxy diagram. Compositions are of component 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PxyBranch {
    pub x1: Vec<f64>,
    pub y1: Vec<f64>,
    pub pressures_bar: Vec<f64>,
}

/// One branch of an isobaric Txy diagram. Compositions are of component 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxyBranch {
    pub x1: Vec<f64>,
    pub y1: Vec<f64>,
    pub temperatures_k: Vec<f64>,
}
