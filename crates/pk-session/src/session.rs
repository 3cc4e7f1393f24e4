//! The session configuration and its build gate.

use std::fmt;

use pk_engine::{EngineModel, ThermoEngine, fingerprint};
use pk_models::{
    BulkImportOptions, ColumnLayout, Component, ConfigurationError, MixingRule, ModelConfiguration,
    ModelError, ModelFamily, ModelId, ModelSpec, find_common_component, parse_components,
};
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Unbuilt,
    Built,
}

/// What a successful [`EosModelConfig::build`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReceipt {
    pub model: ModelId,
    pub component_count: usize,
    /// SHA-256 of the spec handed to the engine.
    pub fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportSummary {
    pub imported: usize,
    pub errors: Vec<ModelError>,
}

/// A model configuration plus the engine model built from it.
///
/// Two states: `Unbuilt` and `Built`. Only a successful [`build`](Self::build)
/// enters `Built`; every mutator that changes the configuration drops back to
/// `Unbuilt` and discards the engine model.
#[derive(Default)]
pub struct EosModelConfig {
    config: ModelConfiguration,
    built: bool,
    model: Option<Box<dyn EngineModel>>,
    fingerprint: Option<String>,
}

impl fmt::Debug for EosModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EosModelConfig")
            .field("config", &self.config)
            .field("built", &self.built)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

impl EosModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configuration(&self) -> &ModelConfiguration {
        &self.config
    }

    pub fn components(&self) -> &[Component] {
        self.config.components()
    }

    pub fn component_count(&self) -> usize {
        self.config.component_count()
    }

    pub fn family(&self) -> ModelFamily {
        self.config.family()
    }

    pub fn model_id(&self) -> Option<ModelId> {
        self.config.model()
    }

    pub fn mixing_rule(&self) -> Option<&MixingRule> {
        self.config.mixing_rule()
    }

    /// Bulk-import column layout of the selected model.
    pub fn bulk_layout(&self) -> ColumnLayout {
        self.config
            .variant()
            .map_or(ColumnLayout::Basic, |variant| variant.bulk_layout())
    }

    pub fn state(&self) -> BuildState {
        if self.is_ready() {
            BuildState::Built
        } else {
            BuildState::Unbuilt
        }
    }

    pub fn is_ready(&self) -> bool {
        self.built && self.model.is_some()
    }

    /// The built engine model, `None` unless ready.
    pub fn model(&self) -> Option<&dyn EngineModel> {
        if self.built {
            self.model.as_deref()
        } else {
            None
        }
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Validates without building. Does not touch the gate.
    pub fn preview_spec(&self) -> Result<ModelSpec, ConfigurationError> {
        self.config.to_spec()
    }

    fn invalidate(&mut self, cause: &'static str) {
        if self.built || self.model.is_some() {
            debug!(cause, "built model invalidated");
        }
        self.built = false;
        self.model = None;
        self.fingerprint = None;
    }

    pub fn add_component(&mut self, component: Component) {
        self.config.add_component(component);
        self.invalidate("component added");
    }

    /// Out-of-range indices change nothing and keep the built model.
    pub fn remove_component(&mut self, index: usize) -> Option<Component> {
        let removed = self.config.remove_component(index)?;
        self.invalidate("component removed");
        Some(removed)
    }

    pub fn edit_component(&mut self, index: usize, component: Component) -> Option<Component> {
        let previous = self.config.edit_component(index, component)?;
        self.invalidate("component edited");
        Some(previous)
    }

    pub fn clear_components(&mut self) -> usize {
        let removed = self.config.clear_components();
        if removed > 0 {
            self.invalidate("components cleared");
        }
        removed
    }

    /// Adds a component from the common-component catalog.
    pub fn add_catalog_component(&mut self, name: &str) -> SessionResult<()> {
        let entry = find_common_component(name).ok_or_else(|| {
            SessionError::InvalidInput(format!("'{name}' is not a common component"))
        })?;
        self.add_component(entry.to_component());
        Ok(())
    }

    /// Parses a pasted component table in the selected model's layout and adds
    /// every valid row. Rejected rows are returned, not added.
    pub fn import_components(&mut self, text: &str, options: BulkImportOptions) -> ImportSummary {
        let report = parse_components(text, self.bulk_layout(), options);
        let imported = report.components.len();
        if imported > 0 {
            for component in report.components {
                self.config.add_component(component);
            }
            self.invalidate("components imported");
        }
        if !report.errors.is_empty() {
            warn!(rejected = report.errors.len(), imported, "bulk import skipped lines");
        }
        ImportSummary {
            imported,
            errors: report.errors,
        }
    }

    /// Switching family also clears the mixing rule.
    pub fn set_model_type(&mut self, family: ModelFamily, model: ModelId) {
        self.config.set_model_type(family, model);
        self.invalidate("model type changed");
    }

    pub fn set_mixing_rule(&mut self, rule: Option<MixingRule>) {
        self.config.set_mixing_rule(rule);
        self.invalidate("mixing rule changed");
    }

    /// Builds the engine model from the current configuration.
    ///
    /// Any previous model is discarded first, so a failed build always leaves
    /// the session `Unbuilt`. The engine is not called when validation fails.
    pub fn build(&mut self, engine: &dyn ThermoEngine) -> SessionResult<BuildReceipt> {
        self.invalidate("rebuild requested");

        let spec = self.config.to_spec().inspect_err(|err| {
            warn!(%err, "model configuration incomplete");
        })?;
        let fingerprint = fingerprint(&spec);

        let model = engine.build_model(&spec).map_err(|err| {
            warn!(engine = engine.name(), %err, "engine failed to build model");
            SessionError::from(err)
        })?;

        let receipt = BuildReceipt {
            model: spec.model(),
            component_count: spec.component_count(),
            fingerprint: fingerprint.clone(),
        };
        info!(
            engine = engine.name(),
            model = %receipt.model,
            components = receipt.component_count,
            fingerprint = %receipt.fingerprint,
            "model built"
        );

        self.model = Some(model);
        self.fingerprint = Some(fingerprint);
        self.built = true;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_core::units::{bar, k};

    #[test]
    fn fresh_session_is_unbuilt() {
        let session = EosModelConfig::new();
        assert_eq!(session.state(), BuildState::Unbuilt);
        assert!(session.model().is_none());
        assert!(session.fingerprint().is_none());
        assert_eq!(session.bulk_layout(), ColumnLayout::Basic);
    }

    #[test]
    fn bulk_layout_follows_the_model() {
        let mut session = EosModelConfig::new();
        session.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::Rkpr);
        assert_eq!(session.bulk_layout(), ColumnLayout::WithZc);
        session.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::Psrk);
        assert_eq!(session.bulk_layout(), ColumnLayout::Psrk);
    }

    #[test]
    fn catalog_lookup_is_case_insensitive() {
        let mut session = EosModelConfig::new();
        session.add_catalog_component("methane").unwrap();
        assert_eq!(session.components()[0].name, "Methane");

        let err = session.add_catalog_component("Krypton").unwrap_err();
        assert!(err.to_string().contains("Krypton"));
    }

    #[test]
    fn preview_does_not_build() {
        let mut session = EosModelConfig::new();
        session.add_component(Component::new("Methane", k(190.6), bar(45.99), 0.012));
        session.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson76);
        let spec = session.preview_spec().unwrap();
        assert_eq!(spec.component_count(), 1);
        assert!(!session.is_ready());
    }
}
