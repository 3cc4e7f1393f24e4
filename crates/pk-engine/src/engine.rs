//! Engine traits.

use pk_core::units::{Pressure, Temperature};
use pk_models::{ModelFamily, ModelSpec};

use crate::error::{EngineError, EngineResult};
use crate::results::{
    EnvelopeKind, FlashResult, GpecDiagram, PhaseEnvelope, PxyBranch, StabilityResult, TxyBranch,
};

/// An external thermodynamics engine.
///
/// Implementations must be thread-safe (Send + Sync), though phasekit only
/// calls them from one session at a time.
pub trait ThermoEngine: Send + Sync {
    /// Engine name (for debugging/logging).
    fn name(&self) -> &str;

    /// Instantiates a model. Failures are reported as [`EngineError::Backend`].
    fn build_model(&self, spec: &ModelSpec) -> EngineResult<Box<dyn EngineModel>>;
}

/// A model instantiated by the engine.
///
/// Compositions are index-aligned with the components the model was built
/// from. Every calculation defaults to [`EngineError::Unsupported`]; engines
/// override what the model family supports.
pub trait EngineModel: Send + Sync {
    fn family(&self) -> ModelFamily;

    fn component_count(&self) -> usize;

    /// Isothermal-isobaric flash.
    fn flash_pt(&self, _z: &[f64], _p: Pressure, _t: Temperature) -> EngineResult<FlashResult> {
        Err(EngineError::Unsupported { what: "PT flash" })
    }

    /// Isothermal flash of an excess-Gibbs model, optionally warm-started with K-values.
    fn flash_t(&self, _z: &[f64], _t: Temperature, _k0: Option<&[f64]>) -> EngineResult<FlashResult> {
        Err(EngineError::Unsupported { what: "T flash" })
    }

    fn stability_analysis(&self, _z: &[f64], _t: Temperature) -> EngineResult<StabilityResult> {
        Err(EngineError::Unsupported {
            what: "stability analysis",
        })
    }

    /// Traces a PT phase envelope from an initial guess `(t0, p0)`.
    fn phase_envelope_pt(
        &self,
        _z: &[f64],
        _kind: EnvelopeKind,
        _t0: Temperature,
        _p0: Pressure,
    ) -> EngineResult<PhaseEnvelope> {
        Err(EngineError::Unsupported {
            what: "phase envelope",
        })
    }

    /// Global phase diagram of a binary mixture up to `max_pressure`.
    fn gpec(&self, _max_pressure: Pressure) -> EngineResult<GpecDiagram> {
        Err(EngineError::Unsupported { what: "GPEC" })
    }

    fn pxy(&self, _t: Temperature, _max_pressure: Pressure) -> EngineResult<Vec<PxyBranch>> {
        Err(EngineError::Unsupported { what: "Pxy diagram" })
    }

    fn txy(&self, _p: Pressure, _max_pressure: Pressure) -> EngineResult<Vec<TxyBranch>> {
        Err(EngineError::Unsupported { what: "Txy diagram" })
    }

    /// Volume [L] of `moles` at `(p, t)`.
    fn volume(&self, _moles: &[f64], _p: Pressure, _t: Temperature) -> EngineResult<f64> {
        Err(EngineError::Unsupported { what: "volume" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_core::units::{bar, k};

    struct Bare;

    impl EngineModel for Bare {
        fn family(&self) -> ModelFamily {
            ModelFamily::ExcessGibbs
        }

        fn component_count(&self) -> usize {
            2
        }
    }

    #[test]
    fn calculations_default_to_unsupported() {
        let model = Bare;
        let z = [0.5, 0.5];
        assert_eq!(
            model.flash_pt(&z, bar(1.0), k(300.0)).unwrap_err(),
            EngineError::Unsupported { what: "PT flash" }
        );
        assert!(matches!(
            model.phase_envelope_pt(&z, EnvelopeKind::Dew, k(150.0), bar(0.1)),
            Err(EngineError::Unsupported { .. })
        ));
        assert!(matches!(
            model.gpec(bar(300.0)),
            Err(EngineError::Unsupported { .. })
        ));
        assert!(matches!(
            model.volume(&[1.0, 0.0], bar(1.0), k(300.0)),
            Err(EngineError::Unsupported { .. })
        ));
    }
}
