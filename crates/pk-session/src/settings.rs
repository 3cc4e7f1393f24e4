//! Session-wide calculation defaults.

use pk_core::numeric::ensure_positive;
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Defaults the calculation services fall back to.
///
/// Every field has a default, so a settings document only needs the values it
/// changes. Temperatures in K, pressures in bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub gpec_max_pressure_bar: f64,
    pub envelope_t0_k: f64,
    pub envelope_p0_bar: f64,
    pub isotherm_min_pressure_bar: f64,
    pub isotherm_max_pressure_bar: f64,
    pub isotherm_resolution: usize,
    pub isotherm_temperature_k: f64,
    /// Distance from 0 and 1 of the swept mole fraction in grids of 3+ components.
    pub grid_edge_offset: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            gpec_max_pressure_bar: 300.0,
            envelope_t0_k: 150.0,
            envelope_p0_bar: 0.1,
            isotherm_min_pressure_bar: 0.1,
            isotherm_max_pressure_bar: 1000.0,
            isotherm_resolution: 1000,
            isotherm_temperature_k: 273.15,
            grid_edge_offset: 1e-5,
        }
    }
}

impl SessionSettings {
    pub fn from_yaml_str(text: &str) -> SessionResult<Self> {
        let settings: SessionSettings = serde_yaml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml_string(&self) -> SessionResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> SessionResult<()> {
        let positive = [
            ("gpec_max_pressure_bar", self.gpec_max_pressure_bar),
            ("envelope_t0_k", self.envelope_t0_k),
            ("envelope_p0_bar", self.envelope_p0_bar),
            ("isotherm_min_pressure_bar", self.isotherm_min_pressure_bar),
            ("isotherm_max_pressure_bar", self.isotherm_max_pressure_bar),
            ("isotherm_temperature_k", self.isotherm_temperature_k),
        ];
        for (name, value) in positive {
            ensure_positive(value, name)?;
        }
        if self.isotherm_min_pressure_bar >= self.isotherm_max_pressure_bar {
            return Err(SessionError::InvalidInput(
                "isotherm_min_pressure_bar must be below isotherm_max_pressure_bar".into(),
            ));
        }
        if self.isotherm_resolution == 0 {
            return Err(SessionError::InvalidInput(
                "isotherm_resolution must be at least 1".into(),
            ));
        }
        if !(self.grid_edge_offset >= 0.0 && self.grid_edge_offset < 0.5) {
            return Err(SessionError::InvalidInput(
                "grid_edge_offset must be in [0, 0.5)".into(),
            ));
        }
        Ok(())
    }
}
