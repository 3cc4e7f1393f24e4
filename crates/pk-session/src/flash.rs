//! Flash services: single point, temperature/composition grid, composition path.

use pk_core::numeric::linspace;
use pk_core::units::{Pressure, Temperature, k, to_bar, to_k};
use pk_engine::validation::{validate_flash, validate_k_values};
use pk_engine::{EngineModel, EngineResult, FlashResult};
use pk_models::MoleFractions;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use crate::progress::{FlashProgress, emit_progress};
use crate::readiness::{Calculation, ready_model};
use crate::session::EosModelConfig;
use crate::settings::SessionSettings;

const NOT_CONVERGED: &str = "Flash calculation did not converge";

/// One flash evaluation. `result` is kept even when it did not converge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashOutcome {
    /// Normalized feed.
    pub z: Vec<f64>,
    pub temperature_k: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_bar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FlashResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FlashOutcome {
    fn from_result(z: Vec<f64>, t: Temperature, p: Option<Pressure>, result: FlashResult) -> Self {
        let error = (!result.is_converged()).then(|| NOT_CONVERGED.to_string());
        Self {
            z,
            temperature_k: to_k(t),
            pressure_bar: p.map(to_bar),
            result: Some(result),
            error,
        }
    }

    fn failed(z: Vec<f64>, t: Temperature, p: Option<Pressure>, message: String) -> Self {
        Self {
            z,
            temperature_k: to_k(t),
            pressure_bar: p.map(to_bar),
            result: None,
            error: Some(message),
        }
    }

    pub fn converged(&self) -> bool {
        self.error.is_none() && self.result.as_ref().is_some_and(FlashResult::is_converged)
    }

    pub fn beta(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.beta)
    }

    /// `y / x` of a converged flash.
    pub fn k_values(&self) -> Option<Vec<f64>> {
        if !self.converged() {
            return None;
        }
        self.result.as_ref().map(FlashResult::k_values)
    }

    pub fn is_two_phase(&self) -> bool {
        self.converged() && self.result.as_ref().is_some_and(FlashResult::is_two_phase)
    }
}

/// Normalizes a user composition against the session's component count.
fn normalized_feed(session: &EosModelConfig, z: &[f64]) -> SessionResult<MoleFractions> {
    let n = session.component_count();
    if z.len() != n {
        return Err(SessionError::InvalidInput(format!(
            "Composition has {} entries but the model has {n} components",
            z.len()
        )));
    }
    Ok(MoleFractions::new(z.to_vec())?)
}

fn checked(result: EngineResult<FlashResult>, n: usize) -> EngineResult<FlashResult> {
    let result = result?;
    validate_flash(&result, n)?;
    Ok(result)
}

/// PT flash of a residual-Helmholtz model.
pub fn flash_pt(
    session: &EosModelConfig,
    z: &[f64],
    p: Pressure,
    t: Temperature,
) -> SessionResult<FlashOutcome> {
    let model = ready_model(session, Calculation::FlashPt)?;
    let z = normalized_feed(session, z)?;
    let result = checked(model.flash_pt(z.as_slice(), p, t), z.len())?;
    Ok(FlashOutcome::from_result(z.into_vec(), t, Some(p), result))
}

/// Isothermal flash of an excess-Gibbs model.
pub fn flash_t(
    session: &EosModelConfig,
    z: &[f64],
    t: Temperature,
    k0: Option<&[f64]>,
) -> SessionResult<FlashOutcome> {
    let model = ready_model(session, Calculation::FlashExcessGibbs)?;
    let z = normalized_feed(session, z)?;
    if let Some(k0) = k0 {
        validate_k_values(k0, z.len())
            .map_err(|err| SessionError::InvalidInput(err.to_string()))?;
    }
    let result = checked(model.flash_t(z.as_slice(), t, k0), z.len())?;
    Ok(FlashOutcome::from_result(z.into_vec(), t, None, result))
}

/// Feeds of a composition grid.
///
/// Binary systems sweep `x1` over `[0, 1]`. Larger systems sweep the first
/// component over `[edge_offset, 1 - edge_offset]` and split the rest evenly.
pub fn grid_compositions(n_components: usize, n_compositions: usize, edge_offset: f64) -> Vec<Vec<f64>> {
    match n_components {
        0 => Vec::new(),
        1 => vec![vec![1.0]; n_compositions.min(1)],
        2 => linspace(0.0, 1.0, n_compositions)
            .into_iter()
            .map(|x1| vec![x1, 1.0 - x1])
            .collect(),
        n => linspace(edge_offset, 1.0 - edge_offset, n_compositions)
            .into_iter()
            .map(|alpha| {
                let rest = (1.0 - alpha) / (n - 1) as f64;
                let mut z = vec![rest; n];
                z[0] = alpha;
                z
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashGridRequest {
    pub t_min: Temperature,
    pub t_max: Temperature,
    pub n_temperatures: usize,
    pub n_compositions: usize,
}

impl Default for FlashGridRequest {
    fn default() -> Self {
        Self {
            t_min: k(298.15),
            t_max: k(348.15),
            n_temperatures: 5,
            n_compositions: 10,
        }
    }
}

/// Grid results in evaluation order: composition-major, then temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashGrid {
    pub points: Vec<FlashOutcome>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl FlashGrid {
    pub fn total(&self) -> usize {
        self.points.len()
    }

    /// Converged points with `0.01 < beta < 0.99`.
    pub fn two_phase_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.converged() && p.beta().is_some_and(|b| b > 0.01 && b < 0.99))
            .count()
    }
}

/// Stability-based K-value guess, `w / z`. `None` when no usable guess exists.
fn stability_guess(model: &dyn EngineModel, z: &[f64], t: Temperature) -> Option<Vec<f64>> {
    match model.stability_analysis(z, t) {
        Ok(stability) => {
            let k0: Vec<f64> = stability.w.iter().zip(z).map(|(w, z)| w / z).collect();
            match validate_k_values(&k0, z.len()) {
                Ok(()) => Some(k0),
                Err(err) => {
                    debug!(%err, "stability K-values unusable, starting cold");
                    None
                }
            }
        }
        Err(err) => {
            warn!(%err, "stability analysis failed, starting cold");
            None
        }
    }
}

fn evaluate_t(
    model: &dyn EngineModel,
    z: &[f64],
    t: Temperature,
    k0: Option<&[f64]>,
) -> FlashOutcome {
    match checked(model.flash_t(z, t, k0), z.len()) {
        Ok(result) => FlashOutcome::from_result(z.to_vec(), t, None, result),
        Err(err) => FlashOutcome::failed(z.to_vec(), t, None, SessionError::from(err).to_string()),
    }
}

/// Flash over every (composition, temperature) pair of the grid.
///
/// Each composition is warm-started from a stability analysis at the first
/// temperature, then from the previous converged point. Failed points are kept
/// with their error text.
pub fn flash_grid(
    session: &EosModelConfig,
    settings: &SessionSettings,
    request: &FlashGridRequest,
    mut progress_cb: Option<&mut dyn FnMut(FlashProgress)>,
) -> SessionResult<FlashGrid> {
    let model = ready_model(session, Calculation::FlashExcessGibbs)?;
    if request.n_temperatures == 0 || request.n_compositions == 0 {
        return Err(SessionError::InvalidInput(
            "Grid needs at least one temperature and one composition".to_string(),
        ));
    }

    let temperatures = linspace(to_k(request.t_min), to_k(request.t_max), request.n_temperatures);
    let feeds = grid_compositions(
        session.component_count(),
        request.n_compositions,
        settings.grid_edge_offset,
    );
    let total = feeds.len() * temperatures.len();
    let mut points = Vec::with_capacity(total);
    let mut num_failed = 0;

    emit_progress(&mut progress_cb, 0, total);

    for z in &feeds {
        let mut k0 = stability_guess(model, z, k(temperatures[0]));
        for &t in &temperatures {
            let outcome = evaluate_t(model, z, k(t), k0.as_deref());
            if let Some(next) = outcome
                .k_values()
                .filter(|next| validate_k_values(next, z.len()).is_ok())
            {
                k0 = Some(next);
            }
            if !outcome.converged() {
                num_failed += 1;
                warn!(
                    temperature_k = t,
                    error = outcome.error.as_deref().unwrap_or(NOT_CONVERGED),
                    "grid flash point failed"
                );
            }
            points.push(outcome);
            emit_progress(&mut progress_cb, points.len(), total);
        }
    }

    let num_successful = points.len() - num_failed;
    info!(total, num_successful, num_failed, "flash grid complete");
    Ok(FlashGrid {
        points,
        num_successful,
        num_failed,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashPathRequest {
    pub z_start: Vec<f64>,
    pub z_end: Vec<f64>,
    pub temperature: Temperature,
    pub n_points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashPathPoint {
    pub alpha: f64,
    pub outcome: FlashOutcome,
}

/// Isothermal flashes along `z(alpha) = alpha * z_end + (1 - alpha) * z_start`.
pub fn flash_path(
    session: &EosModelConfig,
    request: &FlashPathRequest,
    mut progress_cb: Option<&mut dyn FnMut(FlashProgress)>,
) -> SessionResult<Vec<FlashPathPoint>> {
    let model = ready_model(session, Calculation::FlashExcessGibbs)?;
    let start = normalized_feed(session, &request.z_start)?;
    let end = normalized_feed(session, &request.z_end)?;

    let alphas = linspace(0.0, 1.0, request.n_points);
    let total = alphas.len();
    let mut path = Vec::with_capacity(total);
    emit_progress(&mut progress_cb, 0, total);

    for alpha in alphas {
        let z = MoleFractions::interpolate(&start, &end, alpha)?;
        let outcome = evaluate_t(model, z.as_slice(), request.temperature, None);
        if !outcome.converged() {
            warn!(alpha, "path flash point failed");
        }
        path.push(FlashPathPoint { alpha, outcome });
        emit_progress(&mut progress_cb, path.len(), total);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_grid_spans_pure_ends() {
        let feeds = grid_compositions(2, 5, 1e-5);
        assert_eq!(feeds.len(), 5);
        assert_eq!(feeds[0], vec![0.0, 1.0]);
        assert_eq!(feeds[4], vec![1.0, 0.0]);
        assert!((feeds[2][0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn multicomponent_grid_stays_off_the_edges() {
        let feeds = grid_compositions(3, 4, 1e-5);
        assert_eq!(feeds.len(), 4);
        assert!((feeds[0][0] - 1e-5).abs() < 1e-15);
        assert!((feeds[3][0] - (1.0 - 1e-5)).abs() < 1e-12);
        for z in &feeds {
            assert!((z[1] - z[2]).abs() < 1e-15);
            assert!((z.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_grids() {
        assert!(grid_compositions(0, 5, 1e-5).is_empty());
        assert_eq!(grid_compositions(1, 5, 1e-5), vec![vec![1.0]]);
        assert!(grid_compositions(3, 0, 1e-5).is_empty());
    }

    #[test]
    fn outcome_flags_beta_out_of_range() {
        let result = FlashResult {
            x: vec![0.5, 0.5],
            y: vec![0.5, 0.5],
            beta: 1.5,
            temperature_k: 300.0,
            pressure_bar: None,
        };
        let outcome = FlashOutcome::from_result(vec![0.5, 0.5], k(300.0), None, result);
        assert!(!outcome.converged());
        assert_eq!(outcome.error.as_deref(), Some(NOT_CONVERGED));
        assert!(outcome.k_values().is_none());
        assert_eq!(outcome.beta(), Some(1.5));
    }

    #[test]
    fn unbuilt_session_blocks_flash() {
        let session = EosModelConfig::new();
        let err = flash_t(&session, &[0.5, 0.5], k(300.0), None).unwrap_err();
        assert!(matches!(err, SessionError::NotReady { .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grid_feeds_are_normalized(n in 2_usize..8, m in 1_usize..30) {
            let feeds = grid_compositions(n, m, 1e-5);
            prop_assert_eq!(feeds.len(), m);
            for z in feeds {
                prop_assert_eq!(z.len(), n);
                prop_assert!(z.iter().all(|v| *v >= 0.0));
                prop_assert!((z.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            }
        }
    }
}
