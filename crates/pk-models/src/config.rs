//! The user's in-progress model definition.

use crate::component::Component;
use crate::mixing_rule::MixingRule;
use crate::model_spec::ModelSpec;
use crate::registry::{ModelFamily, ModelId, ModelVariant};
use crate::validate::{ConfigurationError, IssueCollector};

/// Ordered components, a model selection and an optional mixing rule.
///
/// Plain data: partial and inconsistent states are allowed while the user is
/// editing. [`ModelConfiguration::to_spec`] is where everything is checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelConfiguration {
    components: Vec<Component>,
    family: ModelFamily,
    model: Option<ModelId>,
    mixing_rule: Option<MixingRule>,
}

impl ModelConfiguration {
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn family(&self) -> ModelFamily {
        self.family
    }

    pub fn model(&self) -> Option<ModelId> {
        self.model
    }

    pub fn variant(&self) -> Option<&'static dyn ModelVariant> {
        self.model.map(ModelId::variant)
    }

    pub fn mixing_rule(&self) -> Option<&MixingRule> {
        self.mixing_rule.as_ref()
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn remove_component(&mut self, index: usize) -> Option<Component> {
        (index < self.components.len()).then(|| self.components.remove(index))
    }

    /// Replaces the component at `index`, returning the previous one.
    pub fn edit_component(&mut self, index: usize, component: Component) -> Option<Component> {
        self.components
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, component))
    }

    /// Removes every component, returning how many there were.
    pub fn clear_components(&mut self) -> usize {
        let removed = self.components.len();
        self.components.clear();
        removed
    }

    /// Selects a model. Switching family drops the mixing rule, since rules
    /// of one family are meaningless for the other.
    pub fn set_model_type(&mut self, family: ModelFamily, model: ModelId) {
        if family != self.family {
            self.mixing_rule = None;
        }
        self.family = family;
        self.model = Some(model);
    }

    pub fn set_mixing_rule(&mut self, rule: Option<MixingRule>) {
        self.mixing_rule = rule;
    }

    /// Validates the whole configuration and assembles the engine payload.
    ///
    /// The error lists every missing or invalid field.
    pub fn to_spec(&self) -> Result<ModelSpec, ConfigurationError> {
        let mut issues = IssueCollector::default();

        if self.components.is_empty() {
            issues.missing("components");
        }

        let Some(model) = self.model else {
            issues.missing("model");
            return Err(issues.into_error());
        };

        if model.family() != self.family {
            issues.invalid(
                "model",
                format!("{model} is not a {} model", self.family.label()),
            );
        }

        let variant = model.variant();
        variant.validate(&self.components, self.mixing_rule.as_ref(), &mut issues);
        issues.finish()?;

        Ok(variant.assemble(&self.components, self.mixing_rule.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excess_gibbs::GeParameters;
    use crate::mixing_rule::MixingRuleKind;
    use pk_core::units::{bar, k};

    fn methane() -> Component {
        Component::new("Methane", k(190.6), bar(45.99), 0.012)
    }

    fn ethane() -> Component {
        Component::new("Ethane", k(305.3), bar(48.72), 0.1)
    }

    #[test]
    fn empty_configuration_lists_components_and_model() {
        let err = ModelConfiguration::default().to_spec().unwrap_err();
        assert_eq!(err.fields(), vec!["components", "model"]);
    }

    #[test]
    fn methane_with_pr76_builds() {
        let mut config = ModelConfiguration::default();
        config.add_component(methane());
        config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson76);

        let spec = config.to_spec().unwrap();
        assert_eq!(spec.model(), ModelId::PengRobinson76);
        assert_eq!(spec.names(), &["Methane".to_string()]);
    }

    #[test]
    fn family_mismatch_is_reported() {
        let mut config = ModelConfiguration::default();
        config.add_component(methane());
        config.set_model_type(ModelFamily::ExcessGibbs, ModelId::PengRobinson76);

        let err = config.to_spec().unwrap_err();
        assert!(err.mentions("model"));
    }

    #[test]
    fn excess_gibbs_without_rule_names_mixing_rule() {
        let mut config = ModelConfiguration::default();
        config.add_component(methane());
        config.add_component(ethane());
        config.set_model_type(ModelFamily::ExcessGibbs, ModelId::Nrtl);

        let err = config.to_spec().unwrap_err();
        assert_eq!(err.fields(), vec!["mixing_rule"]);
    }

    #[test]
    fn excess_gibbs_parameters_must_match_model() {
        let mut config = ModelConfiguration::default();
        config.add_component(methane());
        config.add_component(ethane());
        config.set_model_type(ModelFamily::ExcessGibbs, ModelId::Uniquac);
        config.set_mixing_rule(Some(MixingRule::ExcessGibbs {
            parameters: GeParameters::nrtl(2),
        }));

        let err = config.to_spec().unwrap_err();
        assert_eq!(err.fields(), vec!["mixing_rule.parameters"]);

        config.set_mixing_rule(Some(MixingRule::ExcessGibbs {
            parameters: GeParameters::uniquac(2),
        }));
        assert!(config.to_spec().is_ok());
    }

    #[test]
    fn matrix_size_checked_against_component_count() {
        let mut config = ModelConfiguration::default();
        config.add_component(methane());
        config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson76);
        config.set_mixing_rule(Some(MixingRule::template(MixingRuleKind::Qmr, 1)));
        assert!(config.to_spec().is_ok());

        config.add_component(ethane());
        let err = config.to_spec().unwrap_err();
        assert_eq!(err.fields(), vec!["mixing_rule.kij"]);
    }

    #[test]
    fn family_change_drops_rule() {
        let mut config = ModelConfiguration::default();
        config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson76);
        config.set_mixing_rule(Some(MixingRule::template(MixingRuleKind::Qmr, 0)));

        config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::SoaveRedlichKwong);
        assert!(config.mixing_rule().is_some());

        config.set_model_type(ModelFamily::ExcessGibbs, ModelId::Nrtl);
        assert!(config.mixing_rule().is_none());
    }

    #[test]
    fn component_edits() {
        let mut config = ModelConfiguration::default();
        config.add_component(methane());
        config.add_component(ethane());

        assert!(config.remove_component(2).is_none());
        assert!(config.edit_component(5, methane()).is_none());

        let old = config.edit_component(1, methane().with_zc(0.29)).unwrap();
        assert_eq!(old.name, "Ethane");
        assert_eq!(config.components()[1].zc, Some(0.29));

        assert_eq!(config.remove_component(0).map(|c| c.name), Some("Methane".into()));
        assert_eq!(config.component_count(), 1);
        assert_eq!(config.clear_components(), 1);
        assert!(config.components().is_empty());
    }

    #[test]
    fn identical_configurations_produce_equal_specs() {
        let build = || {
            let mut config = ModelConfiguration::default();
            config.add_component(methane());
            config.add_component(ethane());
            config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson78);
            config.set_mixing_rule(Some(MixingRule::template(MixingRuleKind::HvNrtl, 2)));
            config
        };
        assert_eq!(build().to_spec().unwrap(), build().to_spec().unwrap());
    }
}
