//! pk-models: model definitions for phasekit.
//!
//! Provides:
//! - Component descriptions (critical constants plus model-specific data)
//! - A catalog of common components
//! - Mole-fraction handling and binary interaction matrices
//! - Bulk text import of component tables
//! - The model and mixing-rule registry (`ModelId`, `MixingRuleKind`)
//! - Build-time validation producing the engine request (`ModelSpec`)
//!
//! # Architecture
//!
//! Every model identifier maps to a `&'static dyn ModelVariant`. The trait is the
//! single capability interface the rest of phasekit talks to: it names the
//! extra component data a model needs, whether it takes a mixing rule, and how
//! a validated configuration turns into the `ModelSpec` handed to the external
//! thermodynamics engine. Nothing in this crate evaluates a model.
//!
//! # Example
//!
//! ```
//! use pk_core::units::{bar, k};
//! use pk_models::{Component, ModelConfiguration, ModelFamily, ModelId};
//!
//! let mut config = ModelConfiguration::default();
//! config.add_component(Component::new("Methane", k(190.6), bar(45.99), 0.012));
//! config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson76);
//!
//! let spec = config.to_spec().unwrap();
//! assert_eq!(spec.component_count(), 1);
//! ```

pub mod bulk;
pub mod catalog;
pub mod component;
pub mod composition;
pub mod config;
pub mod cubic;
pub mod error;
pub mod excess_gibbs;
pub mod matrix;
pub mod mixing_rule;
pub mod model_spec;
pub mod registry;
pub mod validate;

// Re-exports for ergonomics
pub use bulk::{BulkImport, BulkImportOptions, ColumnLayout, parse_components};
pub use catalog::{CatalogEntry, common_components, filter_common_components, find_common_component};
pub use component::{Component, ComponentParameter, FunctionalGroups};
pub use composition::MoleFractions;
pub use config::ModelConfiguration;
pub use error::{ModelError, ModelResult};
pub use excess_gibbs::{GeParameters, UnifacVariant};
pub use matrix::{Delimiter, InteractionMatrix, MatrixLayout, PairFlags, SquareMatrix};
pub use mixing_rule::{MixingRule, MixingRuleKind};
pub use registry::{MixingRulePolicy, ModelFamily, ModelId, ModelVariant};
pub use model_spec::{CubicSpec, ExcessGibbsSpec, ModelSpec};
pub use validate::{ConfigIssue, ConfigurationError, IssueKind};
