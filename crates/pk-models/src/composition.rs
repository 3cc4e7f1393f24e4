//! Mole fractions of a mixture.

use pk_core::numeric::check_index;

use crate::error::{ModelError, ModelResult};

/// Overall mole fractions, index-aligned with the configured components.
///
/// Always normalized (sum = 1.0). Unlike a species map, zero entries are kept so
/// positions stay aligned with the component list.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleFractions {
    values: Vec<f64>,
}

impl MoleFractions {
    /// Validates that all fractions are finite, non-negative, and have a positive
    /// sum, then normalizes to sum=1.
    pub fn new(fractions: Vec<f64>) -> ModelResult<Self> {
        if fractions.is_empty() {
            return Err(ModelError::NonPhysical {
                what: "empty composition",
            });
        }

        let mut sum = 0.0;
        for frac in &fractions {
            if !frac.is_finite() {
                return Err(ModelError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if *frac < 0.0 {
                return Err(ModelError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(ModelError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        Ok(Self {
            values: fractions.into_iter().map(|f| f / sum).collect(),
        })
    }

    /// Component `index` alone, the others kept at zero.
    pub fn pure(n: usize, index: usize) -> ModelResult<Self> {
        check_index(index, n, "component")?;
        let mut values = vec![0.0; n];
        values[index] = 1.0;
        Ok(Self { values })
    }

    /// Linear interpolation `alpha * end + (1 - alpha) * start`, renormalized.
    pub fn interpolate(start: &Self, end: &Self, alpha: f64) -> ModelResult<Self> {
        if start.len() != end.len() {
            return Err(ModelError::LengthMismatch {
                what: "composition",
                expected: start.len(),
                got: end.len(),
            });
        }
        Self::new(
            start
                .values
                .iter()
                .zip(&end.values)
                .map(|(s, e)| alpha * e + (1.0 - alpha) * s)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}
