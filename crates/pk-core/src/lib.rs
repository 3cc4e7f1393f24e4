//! pk-core: shared foundation for the phasekit crates.
//!
//! - [`units`]: uom SI quantities, built and read in K and bar
//! - [`numeric`]: float tolerances, positivity checks, `linspace` grids
//! - [`error`]: [`PkError`], raised by the numeric checks

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{PkError, PkResult};
pub use numeric::*;
pub use units::*;
