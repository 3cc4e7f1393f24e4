//! Plausibility checks on engine output.

use pk_core::numeric::ensure_finite;

use crate::error::{EngineError, EngineResult};
use crate::results::FlashResult;

/// Phase compositions must have one finite entry per component.
pub fn validate_flash(result: &FlashResult, n: usize) -> EngineResult<()> {
    if result.x.len() != n || result.y.len() != n {
        return Err(EngineError::NonPhysical {
            what: "flash phase compositions have the wrong length",
        });
    }
    for v in result.x.iter().chain(&result.y) {
        ensure_finite(*v, "flash phase composition")?;
    }
    Ok(())
}

/// A molar volume must be positive and finite.
pub fn validate_volume(v: f64) -> EngineResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(EngineError::NonPhysical {
            what: "volume must be positive and finite",
        });
    }
    Ok(v)
}

/// `k0` must hold one positive finite value per component.
pub fn validate_k_values(k: &[f64], n: usize) -> EngineResult<()> {
    if k.len() != n {
        return Err(EngineError::InvalidArg {
            what: "K-value count must match component count",
        });
    }
    if k.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(EngineError::NonPhysical {
            what: "K-values must be positive and finite",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_lengths_and_finiteness() {
        let mut result = FlashResult {
            x: vec![0.5, 0.5],
            y: vec![0.2, 0.8],
            beta: 0.4,
            temperature_k: 300.0,
            pressure_bar: Some(1.0),
        };
        assert!(validate_flash(&result, 2).is_ok());
        assert!(validate_flash(&result, 3).is_err());

        result.y[1] = f64::INFINITY;
        assert!(matches!(
            validate_flash(&result, 2),
            Err(EngineError::NonPhysical { .. })
        ));
    }

    #[test]
    fn volume_positive() {
        assert_eq!(validate_volume(22.4).unwrap(), 22.4);
        assert!(validate_volume(0.0).is_err());
        assert!(validate_volume(f64::NAN).is_err());
    }

    #[test]
    fn k_values() {
        assert!(validate_k_values(&[2.0, 0.5], 2).is_ok());
        assert!(validate_k_values(&[2.0], 2).is_err());
        assert!(validate_k_values(&[2.0, 0.0], 2).is_err());
    }
}
