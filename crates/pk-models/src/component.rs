//! Component descriptions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use pk_core::units::{Pressure, Temperature, to_bar, to_k};
use serde::Serialize;

use crate::error::{ModelError, ModelResult};

/// UNIFAC/PSRK functional-group counts of one molecule, keyed by group id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FunctionalGroups(BTreeMap<u32, u32>);

impl FunctionalGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut groups = Self::new();
        for (id, count) in pairs {
            groups.insert(id, count);
        }
        groups
    }

    /// Adds `count` occurrences of group `id`. Repeated ids accumulate.
    pub fn insert(&mut self, id: u32, count: u32) {
        *self.0.entry(id).or_insert(0) += count;
    }

    pub fn count(&self, id: u32) -> u32 {
        self.0.get(&id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().map(|(id, count)| (*id, *count))
    }
}

impl FromStr for FunctionalGroups {
    type Err = ModelError;

    /// Parses `id:count` pairs separated by commas, e.g. `1:2,2:8`.
    fn from_str(text: &str) -> ModelResult<Self> {
        let invalid = || ModelError::Groups {
            text: text.trim().to_string(),
        };

        let mut groups = Self::new();
        for pair in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (id, count) = pair.split_once(':').ok_or_else(invalid)?;
            let id: u32 = id.trim().parse().map_err(|_| invalid())?;
            let count: u32 = count.trim().parse().map_err(|_| invalid())?;
            groups.insert(id, count);
        }

        if groups.is_empty() {
            return Err(invalid());
        }
        Ok(groups)
    }
}

impl fmt::Display for FunctionalGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (id, count) in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{id}:{count}")?;
            first = false;
        }
        Ok(())
    }
}

/// Extra per-component data a model may need beyond Tc, Pc and ω.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentParameter {
    /// Critical compressibility factor (RKPR)
    CriticalCompressibility,
    /// Mathias-Copeman alpha-function constants c1..c3 (PSRK)
    MathiasCopeman,
    /// UNIFAC functional groups (PSRK)
    Groups,
}

impl ComponentParameter {
    /// Field name used in validation reports.
    pub fn field(self) -> &'static str {
        match self {
            ComponentParameter::CriticalCompressibility => "zc",
            ComponentParameter::MathiasCopeman => "mathias_copeman",
            ComponentParameter::Groups => "groups",
        }
    }
}

/// A chemical species as entered by the user.
///
/// Position in the owning configuration is significant: interaction matrices
/// are index-aligned with the component list.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub tc: Temperature,
    pub pc: Pressure,
    pub acentric_factor: f64,
    pub zc: Option<f64>,
    pub mathias_copeman: Option<[f64; 3]>,
    pub groups: Option<FunctionalGroups>,
}

impl Component {
    pub fn new(name: impl Into<String>, tc: Temperature, pc: Pressure, acentric_factor: f64) -> Self {
        Self {
            name: name.into(),
            tc,
            pc,
            acentric_factor,
            zc: None,
            mathias_copeman: None,
            groups: None,
        }
    }

    pub fn with_zc(mut self, zc: f64) -> Self {
        self.zc = Some(zc);
        self
    }

    pub fn with_mathias_copeman(mut self, c: [f64; 3]) -> Self {
        self.mathias_copeman = Some(c);
        self
    }

    pub fn with_groups(mut self, groups: FunctionalGroups) -> Self {
        self.groups = Some(groups);
        self
    }

    pub fn tc_k(&self) -> f64 {
        to_k(self.tc)
    }

    pub fn pc_bar(&self) -> f64 {
        to_bar(self.pc)
    }

    pub fn has_parameter(&self, parameter: ComponentParameter) -> bool {
        match parameter {
            ComponentParameter::CriticalCompressibility => self.zc.is_some(),
            ComponentParameter::MathiasCopeman => self.mathias_copeman.is_some(),
            ComponentParameter::Groups => self.groups.as_ref().is_some_and(|g| !g.is_empty()),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Tc={}K, Pc={}bar, ω={}",
            self.name,
            self.tc_k(),
            self.pc_bar(),
            self.acentric_factor
        )?;
        if let Some(zc) = self.zc {
            write!(f, ", Zc={zc}")?;
        }
        if let Some([c1, c2, c3]) = self.mathias_copeman {
            write!(f, ", c=[{c1}, {c2}, {c3}]")?;
        }
        if let Some(groups) = &self.groups {
            write!(f, ", Groups={{{groups}}}")?;
        }
        Ok(())
    }
}
