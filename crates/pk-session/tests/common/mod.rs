//! A recording in-process engine for session tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pk_core::numeric::linspace;
use pk_core::units::{Pressure, Temperature, bar, k, to_bar, to_k};
use pk_engine::{
    CriticalPoint, Curve, EngineError, EngineModel, EngineResult, EnvelopeKind, FlashResult,
    GpecDiagram, PhaseEnvelope, PxyBranch, StabilityResult, ThermoEngine, TxyBranch,
};
use pk_models::{
    Component, GeParameters, MixingRule, ModelFamily, ModelId, ModelSpec, find_common_component,
};
use pk_session::EosModelConfig;

/// K-value guesses handed to `flash_t`, in call order.
pub type K0Log = Arc<Mutex<Vec<Option<Vec<f64>>>>>;

/// Builds [`FakeModel`]s and records every call.
#[derive(Default)]
pub struct FakeEngine {
    builds: AtomicUsize,
    failure: Mutex<Option<String>>,
    last_spec: Mutex<Option<ModelSpec>>,
    /// Flashes above this temperature fail.
    flash_limit_k: Option<f64>,
    k0_log: K0Log,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flash_limit(limit_k: f64) -> Self {
        Self {
            flash_limit_k: Some(limit_k),
            ..Self::default()
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn last_spec(&self) -> Option<ModelSpec> {
        self.last_spec.lock().unwrap().clone()
    }

    pub fn k0_log(&self) -> Vec<Option<Vec<f64>>> {
        self.k0_log.lock().unwrap().clone()
    }
}

impl ThermoEngine for FakeEngine {
    fn name(&self) -> &str {
        "fake"
    }

    fn build_model(&self, spec: &ModelSpec) -> EngineResult<Box<dyn EngineModel>> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        *self.last_spec.lock().unwrap() = Some(spec.clone());
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(EngineError::backend(message));
        }
        Ok(Box::new(FakeModel {
            family: spec.family(),
            n: spec.component_count(),
            flash_limit_k: self.flash_limit_k,
            k0_log: Arc::clone(&self.k0_log),
        }))
    }
}

/// Deterministic model: phases equal the feed, `beta = 0.5`.
pub struct FakeModel {
    family: ModelFamily,
    n: usize,
    flash_limit_k: Option<f64>,
    k0_log: K0Log,
}

impl FakeModel {
    fn split(&self, z: &[f64], beta: f64, t: Temperature, p: Option<Pressure>) -> FlashResult {
        FlashResult {
            x: z.to_vec(),
            y: z.to_vec(),
            beta,
            temperature_k: to_k(t),
            pressure_bar: p.map(to_bar),
        }
    }
}

impl EngineModel for FakeModel {
    fn family(&self) -> ModelFamily {
        self.family
    }

    fn component_count(&self) -> usize {
        self.n
    }

    /// Above 100 bar the fake reports `beta = 1.5`.
    fn flash_pt(&self, z: &[f64], p: Pressure, t: Temperature) -> EngineResult<FlashResult> {
        let beta = if to_bar(p) > 100.0 { 1.5 } else { 0.5 };
        Ok(self.split(z, beta, t, Some(p)))
    }

    fn flash_t(&self, z: &[f64], t: Temperature, k0: Option<&[f64]>) -> EngineResult<FlashResult> {
        self.k0_log.lock().unwrap().push(k0.map(<[f64]>::to_vec));
        if self.flash_limit_k.is_some_and(|limit| to_k(t) > limit) {
            return Err(EngineError::backend("flash diverged"));
        }
        Ok(self.split(z, 0.5, t, None))
    }

    /// Trial phase twice as rich in component 1, so `w / z` is 2 for it.
    fn stability_analysis(&self, z: &[f64], _t: Temperature) -> EngineResult<StabilityResult> {
        let w = z
            .iter()
            .enumerate()
            .map(|(i, z)| if i == 0 { 2.0 * z } else { *z })
            .collect();
        Ok(StabilityResult { w, tm: -0.1 })
    }

    fn phase_envelope_pt(
        &self,
        _z: &[f64],
        kind: EnvelopeKind,
        t0: Temperature,
        p0: Pressure,
    ) -> EngineResult<PhaseEnvelope> {
        Ok(PhaseEnvelope {
            kind,
            temperatures_k: linspace(to_k(t0), to_k(t0) + 100.0, 10),
            pressures_bar: linspace(to_bar(p0), 50.0, 10),
            critical_points: vec![CriticalPoint {
                temperature_k: to_k(t0) + 100.0,
                pressure_bar: 50.0,
            }],
        })
    }

    fn gpec(&self, max_pressure: Pressure) -> EngineResult<GpecDiagram> {
        let line = Curve {
            temperatures_k: linspace(150.0, 300.0, 5),
            pressures_bar: linspace(1.0, to_bar(max_pressure), 5),
        };
        Ok(GpecDiagram {
            pure_saturation: vec![line.clone(), line.clone()],
            critical_21: line,
            critical_12: None,
            critical_ll: None,
            llv: None,
        })
    }

    /// One real branch plus an empty one.
    fn pxy(&self, t: Temperature, _max_pressure: Pressure) -> EngineResult<Vec<PxyBranch>> {
        let x1 = linspace(0.0, 1.0, 5);
        Ok(vec![
            PxyBranch {
                y1: x1.clone(),
                pressures_bar: x1.iter().map(|x| 1.0 + x * to_k(t) / 100.0).collect(),
                x1,
            },
            PxyBranch {
                x1: Vec::new(),
                y1: Vec::new(),
                pressures_bar: Vec::new(),
            },
        ])
    }

    fn txy(&self, p: Pressure, _max_pressure: Pressure) -> EngineResult<Vec<TxyBranch>> {
        let x1 = linspace(0.0, 1.0, 5);
        Ok(vec![TxyBranch {
            y1: x1.clone(),
            temperatures_k: x1.iter().map(|x| 200.0 + x * to_bar(p)).collect(),
            x1,
        }])
    }

    /// Ideal gas, L.
    fn volume(&self, moles: &[f64], p: Pressure, t: Temperature) -> EngineResult<f64> {
        let total: f64 = moles.iter().sum();
        Ok(total * 0.083_144_626 * to_k(t) / to_bar(p))
    }
}

pub fn methane() -> Component {
    Component::new("Methane", k(190.6), bar(45.99), 0.012)
}

pub fn catalog(name: &str) -> Component {
    find_common_component(name)
        .expect("component should be in catalog")
        .to_component()
}

/// Unbuilt Peng-Robinson (1976) session over `names`.
pub fn cubic_session(names: &[&str]) -> EosModelConfig {
    let mut session = EosModelConfig::new();
    for name in names {
        session.add_component(catalog(name));
    }
    session.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson76);
    session
}

/// Unbuilt NRTL session over `names` with zero parameters.
pub fn nrtl_session(names: &[&str]) -> EosModelConfig {
    let mut session = EosModelConfig::new();
    for name in names {
        session.add_component(catalog(name));
    }
    session.set_model_type(ModelFamily::ExcessGibbs, ModelId::Nrtl);
    session.set_mixing_rule(Some(MixingRule::ExcessGibbs {
        parameters: GeParameters::nrtl(names.len()),
    }));
    session
}
