//! End-to-end model setup: catalog and bulk import feeding every registered model.

use pk_models::{
    BulkImportOptions, ColumnLayout, Component, Delimiter, FunctionalGroups, GeParameters,
    InteractionMatrix, MatrixLayout, MixingRule, MixingRuleKind, ModelConfiguration, ModelFamily,
    ModelId, ModelSpec, find_common_component, parse_components,
};

fn catalog(names: &[&str]) -> Vec<Component> {
    names
        .iter()
        .map(|name| {
            find_common_component(name)
                .expect("component should be in catalog")
                .to_component()
        })
        .collect()
}

/// Adds whatever extra data `model` needs so every registry entry can be built.
fn prepare(model: ModelId, components: Vec<Component>) -> ModelConfiguration {
    let mut config = ModelConfiguration::default();
    for (i, c) in components.into_iter().enumerate() {
        let c = c
            .with_zc(0.28)
            .with_groups(FunctionalGroups::from_pairs([(1, i as u32 + 1)]));
        config.add_component(c);
    }
    config.set_model_type(model.family(), model);
    if let Some(parameters) = GeParameters::template(model, config.components()) {
        config.set_mixing_rule(Some(MixingRule::ExcessGibbs { parameters }));
    }
    config
}

#[test]
fn every_registered_model_builds_from_the_catalog() {
    for model in ModelId::ALL {
        let config = prepare(model, catalog(&["Methane", "Ethane", "Propane"]));
        let spec = config
            .to_spec()
            .unwrap_or_else(|e| panic!("{model} should build: {e}"));
        assert_eq!(spec.model(), model);
        assert_eq!(spec.family(), model.family());
        assert_eq!(spec.component_count(), 3);
    }
}

#[test]
fn bulk_import_follows_model_layout() {
    for model in ModelFamily::ResidualHelmholtz.models() {
        let layout = model.variant().bulk_layout();
        let report = parse_components(layout.example(), layout, BulkImportOptions::default());
        assert!(report.errors.is_empty(), "{model}: {:?}", report.errors);

        let mut config = ModelConfiguration::default();
        for c in report.components {
            config.add_component(c);
        }
        config.set_model_type(ModelFamily::ResidualHelmholtz, model);
        assert!(config.to_spec().is_ok(), "{model}");
    }
}

#[test]
fn pasted_kij_flows_into_the_spec() {
    let mut config = ModelConfiguration::default();
    for c in catalog(&["CO2", "N2"]) {
        config.add_component(c);
    }
    config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::PengRobinson78);

    let kij = InteractionMatrix::parse(
        "0.0,-0.017\n-0.017,0.0",
        2,
        MatrixLayout::Full,
        Delimiter::Comma,
        true,
    )
    .unwrap();
    config.set_mixing_rule(Some(MixingRule::qmr(kij)));

    let ModelSpec::ResidualHelmholtz(spec) = config.to_spec().unwrap() else {
        panic!("expected cubic spec");
    };
    let Some(MixingRule::Qmr { kij, lij: None }) = spec.mixing_rule else {
        panic!("expected QMR without lij");
    };
    assert_eq!(kij.get(1, 0), Some(&-0.017));
}

#[test]
fn configuration_error_lists_everything_at_once() {
    let mut config = ModelConfiguration::default();
    config.add_component(Component::new(
        "Bad",
        pk_core::units::k(0.0),
        pk_core::units::bar(10.0),
        0.1,
    ));
    config.add_component(catalog(&["Water"]).remove(0));
    config.set_model_type(ModelFamily::ResidualHelmholtz, ModelId::Rkpr);
    config.set_mixing_rule(Some(MixingRule::template(MixingRuleKind::Mhv, 3)));

    let err = config.to_spec().unwrap_err();
    assert_eq!(
        err.fields(),
        vec![
            "components[0].tc",
            "components[0].zc",
            "components[1].zc",
            "mixing_rule.ge.aij",
            "mixing_rule.ge.bij",
            "mixing_rule.ge.cij",
        ]
    );
}

#[test]
fn bulk_layouts_cover_registry() {
    assert_eq!(ModelId::Rkpr.variant().bulk_layout(), ColumnLayout::WithZc);
    assert_eq!(ModelId::Psrk.variant().bulk_layout(), ColumnLayout::Psrk);
    assert_eq!(
        ModelId::PengRobinson76.variant().bulk_layout(),
        ColumnLayout::Basic
    );
}
