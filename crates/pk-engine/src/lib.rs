//! pk-engine: the seam to the external thermodynamics engine.
//!
//! phasekit never evaluates an equation of state itself. An engine implements
//! [`ThermoEngine`], turning a validated [`pk_models::ModelSpec`] into a boxed
//! [`EngineModel`]. The model answers flash, stability, envelope, GPEC and
//! volume queries; anything a model family cannot serve falls back to
//! [`EngineError::Unsupported`].

pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod results;
pub mod validation;

pub use engine::{EngineModel, ThermoEngine};
pub use error::{EngineError, EngineResult};
pub use fingerprint::fingerprint;
pub use results::{
    CriticalPoint, Curve, EnvelopeKind, FlashResult, GpecDiagram, PhaseEnvelope, PxyBranch,
    StabilityResult, TxyBranch,
};
