//! Session service layer for phasekit.
//!
//! A presentation shell owns one [`EosModelConfig`] per user session. It edits
//! the configuration through the mutators, creates the engine model with
//! [`EosModelConfig::build`], and hands the session by reference to the
//! calculation services. Every mutation discards the built model, so a
//! calculation never runs against a model that no longer matches the inputs.

pub mod envelope;
pub mod error;
pub mod flash;
pub mod gpec;
pub mod isotherm;
pub mod progress;
pub mod readiness;
pub mod session;
pub mod settings;
pub mod summary;

// Re-export key types for convenience
pub use envelope::{EnvelopeRequest, phase_envelope};
pub use error::{SessionError, SessionResult};
pub use flash::{
    FlashGrid, FlashGridRequest, FlashOutcome, FlashPathPoint, FlashPathRequest, flash_grid,
    flash_path, flash_pt, flash_t, grid_compositions,
};
pub use gpec::{PxyIsotherm, TxyIsobar, global_diagram, pxy_isotherms, txy_isobars};
pub use isotherm::{PureIsotherm, pure_isotherm};
pub use progress::FlashProgress;
pub use readiness::{Calculation, Readiness};
pub use session::{BuildReceipt, BuildState, EosModelConfig, ImportSummary};
pub use settings::SessionSettings;
pub use summary::{ComponentSummary, ConfigSummary};
