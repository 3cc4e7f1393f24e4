//! Read-only summary of a session for display.

use serde::Serialize;

use crate::error::SessionResult;
use crate::session::{BuildState, EosModelConfig};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub tc_k: f64,
    pub pc_bar: f64,
    pub acentric_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mathias_copeman: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSummary {
    pub family: &'static str,
    pub model: Option<&'static str>,
    pub model_name: Option<&'static str>,
    pub mixing_rule: Option<&'static str>,
    pub components: Vec<ComponentSummary>,
    pub built: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl ConfigSummary {
    pub fn from_session(session: &EosModelConfig) -> Self {
        let variant = session.configuration().variant();
        Self {
            family: session.family().label(),
            model: session.model_id().map(|id| id.as_str()),
            model_name: variant.map(|v| v.display_name()),
            mixing_rule: session.mixing_rule().map(|rule| rule.kind().display_name()),
            components: session
                .components()
                .iter()
                .map(|c| ComponentSummary {
                    name: c.name.clone(),
                    tc_k: c.tc_k(),
                    pc_bar: c.pc_bar(),
                    acentric_factor: c.acentric_factor,
                    zc: c.zc,
                    mathias_copeman: c.mathias_copeman,
                    groups: c.groups.as_ref().map(ToString::to_string),
                })
                .collect(),
            built: session.state() == BuildState::Built,
            fingerprint: session.fingerprint().map(str::to_string),
        }
    }

    pub fn to_json_pretty(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl EosModelConfig {
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary::from_session(self)
    }
}
