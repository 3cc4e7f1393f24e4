//! Binary global phase-equilibrium services.

use pk_core::numeric::linspace;
use pk_core::units::{Pressure, Temperature, bar, k, to_bar, to_k};
use pk_engine::{GpecDiagram, PxyBranch, TxyBranch};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{SessionError, SessionResult};
use crate::readiness::{Calculation, ready_model};
use crate::session::EosModelConfig;
use crate::settings::SessionSettings;

/// Pxy branches at one temperature. Empty branches are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PxyIsotherm {
    pub temperature_k: f64,
    pub branches: Vec<PxyBranch>,
}

/// Txy branches at one pressure. Empty branches are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxyIsobar {
    pub pressure_bar: f64,
    pub branches: Vec<TxyBranch>,
}

fn max_pressure(settings: &SessionSettings) -> Pressure {
    bar(settings.gpec_max_pressure_bar)
}

fn check_count(n: usize, what: &str) -> SessionResult<()> {
    if n == 0 {
        return Err(SessionError::InvalidInput(format!(
            "At least one {what} is required"
        )));
    }
    Ok(())
}

/// Pure saturation lines, critical loci and the LLV line of the binary.
pub fn global_diagram(
    session: &EosModelConfig,
    settings: &SessionSettings,
) -> SessionResult<GpecDiagram> {
    let model = ready_model(session, Calculation::Gpec)?;
    let diagram = model
        .gpec(max_pressure(settings))
        .inspect_err(|err| warn!(%err, "GPEC failed"))?;
    info!(
        max_pressure_bar = settings.gpec_max_pressure_bar,
        critical_21 = diagram.critical_21.len(),
        has_critical_12 = diagram.critical_12.is_some(),
        has_llv = diagram.llv.is_some(),
        "GPEC diagram computed"
    );
    Ok(diagram)
}

/// Pxy diagrams at `n` temperatures evenly spaced over `[t_min, t_max]`.
pub fn pxy_isotherms(
    session: &EosModelConfig,
    settings: &SessionSettings,
    t_min: Temperature,
    t_max: Temperature,
    n: usize,
) -> SessionResult<Vec<PxyIsotherm>> {
    let model = ready_model(session, Calculation::Gpec)?;
    check_count(n, "isotherm")?;

    linspace(to_k(t_min), to_k(t_max), n)
        .into_iter()
        .map(|t| -> SessionResult<PxyIsotherm> {
            let branches = model
                .pxy(k(t), max_pressure(settings))
                .inspect_err(|err| warn!(%err, temperature_k = t, "Pxy failed"))?
                .into_iter()
                .filter(|branch| !branch.x1.is_empty())
                .collect();
            Ok(PxyIsotherm {
                temperature_k: t,
                branches,
            })
        })
        .collect()
}

/// Txy diagrams at `n` pressures evenly spaced over `[p_min, p_max]`.
pub fn txy_isobars(
    session: &EosModelConfig,
    settings: &SessionSettings,
    p_min: Pressure,
    p_max: Pressure,
    n: usize,
) -> SessionResult<Vec<TxyIsobar>> {
    let model = ready_model(session, Calculation::Gpec)?;
    check_count(n, "isobar")?;

    linspace(to_bar(p_min), to_bar(p_max), n)
        .into_iter()
        .map(|p| -> SessionResult<TxyIsobar> {
            let branches = model
                .txy(bar(p), max_pressure(settings))
                .inspect_err(|err| warn!(%err, pressure_bar = p, "Txy failed"))?
                .into_iter()
                .filter(|branch| !branch.x1.is_empty())
                .collect();
            Ok(TxyIsobar {
                pressure_bar: p,
                branches,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_are_rejected() {
        assert!(check_count(0, "isotherm").is_err());
        assert!(check_count(3, "isotherm").is_ok());
    }

    #[test]
    fn unbuilt_session_is_blocked() {
        let session = EosModelConfig::new();
        let settings = SessionSettings::default();
        assert!(matches!(
            global_diagram(&session, &settings),
            Err(SessionError::NotReady { .. })
        ));
        assert!(matches!(
            pxy_isotherms(&session, &settings, k(250.0), k(350.0), 3),
            Err(SessionError::NotReady { .. })
        ));
    }
}
