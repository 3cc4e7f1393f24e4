//! PT phase envelope service.

use pk_core::units::{Pressure, Temperature, bar, k, to_bar, to_k};
use pk_engine::{EnvelopeKind, PhaseEnvelope};
use pk_models::MoleFractions;
use tracing::{info, warn};

use crate::error::{SessionError, SessionResult};
use crate::readiness::{Calculation, ready_model};
use crate::session::EosModelConfig;
use crate::settings::SessionSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeRequest {
    /// Feed, normalized before tracing.
    pub z: Vec<f64>,
    pub kind: EnvelopeKind,
    pub t0: Temperature,
    pub p0: Pressure,
}

impl EnvelopeRequest {
    /// A dew envelope started from the session defaults.
    pub fn new(z: Vec<f64>, settings: &SessionSettings) -> Self {
        Self {
            z,
            kind: EnvelopeKind::Dew,
            t0: k(settings.envelope_t0_k),
            p0: bar(settings.envelope_p0_bar),
        }
    }

    pub fn with_kind(mut self, kind: EnvelopeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_start_temperature(mut self, t0: Temperature) -> Self {
        self.t0 = t0;
        self
    }
}

pub fn phase_envelope(
    session: &EosModelConfig,
    request: &EnvelopeRequest,
) -> SessionResult<PhaseEnvelope> {
    let model = ready_model(session, Calculation::PhaseEnvelope)?;
    if request.z.len() != session.component_count() {
        return Err(SessionError::InvalidInput(format!(
            "Composition has {} entries but the model has {} components",
            request.z.len(),
            session.component_count()
        )));
    }
    let z = MoleFractions::new(request.z.clone())?;

    let envelope = model
        .phase_envelope_pt(z.as_slice(), request.kind, request.t0, request.p0)
        .inspect_err(|err| warn!(%err, kind = request.kind.as_str(), "phase envelope failed"))?;

    if envelope.temperatures_k.len() != envelope.pressures_bar.len() {
        return Err(SessionError::Backend {
            message: "Phase envelope returned mismatched temperature and pressure arrays"
                .to_string(),
        });
    }

    info!(
        kind = envelope.kind.as_str(),
        points = envelope.len(),
        t0_k = to_k(request.t0),
        p0_bar = to_bar(request.p0),
        "phase envelope traced"
    );
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_takes_settings_defaults() {
        let settings = SessionSettings::default();
        let request = EnvelopeRequest::new(vec![0.5, 0.5], &settings);
        assert_eq!(request.kind, EnvelopeKind::Dew);
        assert!((to_k(request.t0) - 150.0).abs() < 1e-9);
        assert!((to_bar(request.p0) - 0.1).abs() < 1e-12);

        let bubble = request
            .with_kind(EnvelopeKind::Bubble)
            .with_start_temperature(k(200.0));
        assert_eq!(bubble.kind, EnvelopeKind::Bubble);
        assert!((to_k(bubble.t0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn unbuilt_session_is_blocked() {
        let session = EosModelConfig::new();
        let request = EnvelopeRequest::new(vec![1.0], &SessionSettings::default());
        assert!(matches!(
            phase_envelope(&session, &request),
            Err(SessionError::NotReady { .. })
        ));
    }
}
