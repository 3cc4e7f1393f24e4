//! Pure-component volume isotherms.

use pk_core::numeric::linspace;
use pk_core::units::{Temperature, bar, k, to_k};
use pk_engine::validation::validate_volume;
use pk_models::MoleFractions;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{SessionError, SessionResult};
use crate::readiness::{Calculation, ready_model};
use crate::session::EosModelConfig;
use crate::settings::SessionSettings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PureIsotherm {
    pub component: String,
    pub temperature_k: f64,
    pub pressures_bar: Vec<f64>,
    /// Molar volumes [L/mol], index-aligned with `pressures_bar`.
    pub volumes: Vec<f64>,
}

/// Molar volume of pure component `index` over the settings' pressure range.
///
/// `temperature` and `resolution` override the settings' defaults.
pub fn pure_isotherm(
    session: &EosModelConfig,
    settings: &SessionSettings,
    index: usize,
    temperature: Option<Temperature>,
    resolution: Option<usize>,
) -> SessionResult<PureIsotherm> {
    let model = ready_model(session, Calculation::PureIsotherm)?;
    let moles = MoleFractions::pure(session.component_count(), index)?.into_vec();
    let temperature = temperature.unwrap_or_else(|| k(settings.isotherm_temperature_k));

    let resolution = resolution.unwrap_or(settings.isotherm_resolution);
    if resolution == 0 {
        return Err(SessionError::InvalidInput(
            "Resolution must be at least 1".to_string(),
        ));
    }

    let pressures = linspace(
        settings.isotherm_min_pressure_bar,
        settings.isotherm_max_pressure_bar,
        resolution,
    );
    let volumes = pressures
        .iter()
        .map(|&p| -> SessionResult<f64> {
            let v = model
                .volume(&moles, bar(p), temperature)
                .inspect_err(|err| warn!(%err, pressure_bar = p, "volume failed"))?;
            Ok(validate_volume(v)?)
        })
        .collect::<SessionResult<Vec<_>>>()?;

    let component = session.components()[index].name.clone();
    debug!(%component, points = volumes.len(), "isotherm computed");
    Ok(PureIsotherm {
        component,
        temperature_k: to_k(temperature),
        pressures_bar: pressures,
        volumes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbuilt_session_is_blocked() {
        let session = EosModelConfig::new();
        let err = pure_isotherm(&session, &SessionSettings::default(), 0, None, None).unwrap_err();
        assert!(matches!(err, SessionError::NotReady { .. }));
    }
}
