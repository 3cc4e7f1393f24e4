use pk_core::units::{bar, k};

use crate::Component;

/// Tabulated critical constants of a frequently used component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub tc_k: f64,
    pub pc_bar: f64,
    pub acentric_factor: f64,
}

impl CatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        self.canonical_id.eq_ignore_ascii_case(name)
            || self.display_name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn to_component(&self) -> Component {
        Component::new(
            self.display_name,
            k(self.tc_k),
            bar(self.pc_bar),
            self.acentric_factor,
        )
    }
}

const COMMON_COMPONENTS: [CatalogEntry; 7] = [
    CatalogEntry {
        canonical_id: "CH4",
        display_name: "Methane",
        aliases: &["methane", "c1"],
        tc_k: 190.6,
        pc_bar: 46.0,
        acentric_factor: 0.011,
    },
    CatalogEntry {
        canonical_id: "C2H6",
        display_name: "Ethane",
        aliases: &["ethane", "c2"],
        tc_k: 305.3,
        pc_bar: 48.7,
        acentric_factor: 0.099,
    },
    CatalogEntry {
        canonical_id: "C3H8",
        display_name: "Propane",
        aliases: &["propane", "c3"],
        tc_k: 369.8,
        pc_bar: 42.5,
        acentric_factor: 0.152,
    },
    CatalogEntry {
        canonical_id: "nC4H10",
        display_name: "n-Butane",
        aliases: &["butane", "nc4"],
        tc_k: 425.1,
        pc_bar: 37.9,
        acentric_factor: 0.200,
    },
    CatalogEntry {
        canonical_id: "CO2",
        display_name: "CO2",
        aliases: &["carbon dioxide"],
        tc_k: 304.1,
        pc_bar: 73.8,
        acentric_factor: 0.225,
    },
    CatalogEntry {
        canonical_id: "N2",
        display_name: "N2",
        aliases: &["nitrogen"],
        tc_k: 126.2,
        pc_bar: 34.0,
        acentric_factor: 0.037,
    },
    CatalogEntry {
        canonical_id: "H2O",
        display_name: "Water",
        aliases: &["water"],
        tc_k: 647.1,
        pc_bar: 220.6,
        acentric_factor: 0.344,
    },
];

pub fn common_components() -> &'static [CatalogEntry] {
    &COMMON_COMPONENTS
}

pub fn filter_common_components(query: &str) -> Vec<CatalogEntry> {
    common_components()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Exact (case-insensitive) lookup by id, display name or alias.
pub fn find_common_component(name: &str) -> Option<&'static CatalogEntry> {
    common_components().iter().find(|entry| entry.is_named(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in common_components() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn methane_constants() {
        let methane = find_common_component("methane").expect("methane should be in catalog");
        let c = methane.to_component();
        assert_eq!(c.name, "Methane");
        assert!((c.tc_k() - 190.6).abs() < 1e-9);
        assert!((c.pc_bar() - 46.0).abs() < 1e-9);
        assert_eq!(c.acentric_factor, 0.011);
    }

    #[test]
    fn lookup_accepts_ids_and_aliases() {
        assert_eq!(find_common_component("H2O").unwrap().display_name, "Water");
        assert_eq!(
            find_common_component(" Carbon Dioxide ").unwrap().canonical_id,
            "CO2"
        );
        assert!(find_common_component("argon").is_none());
    }

    #[test]
    fn search_is_substring_based() {
        let hits = filter_common_component_names("but");
        assert_eq!(hits, vec!["n-Butane"]);
        assert_eq!(filter_common_components("").len(), common_components().len());
    }

    fn filter_common_component_names(query: &str) -> Vec<&'static str> {
        filter_common_components(query)
            .into_iter()
            .map(|entry| entry.display_name)
            .collect()
    }
}
