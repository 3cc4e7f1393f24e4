//! Per-page readiness checks.

use pk_engine::EngineModel;
use pk_models::ModelFamily;

use crate::error::{SessionError, SessionResult};
use crate::session::EosModelConfig;

const NO_MODEL: &str = "Please configure and create a model first";

/// Calculation pages a shell can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calculation {
    FlashExcessGibbs,
    FlashPt,
    PhaseEnvelope,
    Gpec,
    PureIsotherm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    /// The message the page shows instead of its inputs.
    Blocked(String),
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }

    pub fn into_result(self) -> SessionResult<()> {
        match self {
            Readiness::Ready => Ok(()),
            Readiness::Blocked(reason) => Err(SessionError::NotReady { reason }),
        }
    }
}

impl Calculation {
    pub const ALL: [Calculation; 5] = [
        Calculation::FlashExcessGibbs,
        Calculation::FlashPt,
        Calculation::PhaseEnvelope,
        Calculation::Gpec,
        Calculation::PureIsotherm,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Calculation::FlashExcessGibbs => "Excess-Gibbs flash calculations",
            Calculation::FlashPt => "PT flash calculations",
            Calculation::PhaseEnvelope => "Phase envelopes",
            Calculation::Gpec => "GPEC diagrams",
            Calculation::PureIsotherm => "Pure-component isotherms",
        }
    }

    pub fn required_family(self) -> ModelFamily {
        match self {
            Calculation::FlashExcessGibbs => ModelFamily::ExcessGibbs,
            Calculation::FlashPt
            | Calculation::PhaseEnvelope
            | Calculation::Gpec
            | Calculation::PureIsotherm => ModelFamily::ResidualHelmholtz,
        }
    }

    pub fn check(self, session: &EosModelConfig) -> Readiness {
        if !session.is_ready() {
            return Readiness::Blocked(NO_MODEL.to_string());
        }

        let required = self.required_family();
        if session.family() != required {
            let article = match required {
                ModelFamily::ResidualHelmholtz => "an",
                ModelFamily::ExcessGibbs => "a",
            };
            return Readiness::Blocked(format!(
                "{} require {article} {}",
                self.title(),
                required.label()
            ));
        }

        if self == Calculation::Gpec && session.component_count() != 2 {
            return Readiness::Blocked(format!(
                "GPEC diagrams are only available for binary systems (2 components). \
                 Current system has {} components.",
                session.component_count()
            ));
        }

        Readiness::Ready
    }
}

/// The built model, once `calculation` is unblocked.
pub(crate) fn ready_model(
    session: &EosModelConfig,
    calculation: Calculation,
) -> SessionResult<&dyn EngineModel> {
    calculation.check(session).into_result()?;
    session.model().ok_or_else(|| SessionError::NotReady {
        reason: NO_MODEL.to_string(),
    })
}
