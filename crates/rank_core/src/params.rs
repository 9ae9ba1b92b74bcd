//! The explicit parameter record threaded through every optimizer stage.
//!
//! Earlier tooling loaded these from environment variables through a dotfile
//! at process start (a global configuration singleton). That global is
//! replaced here by a value passed explicitly to every operation that needs
//! it; there is no ambient state to read.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub struct Params {
    /// Per-inconsistency base penalty.
    pub alpha: u32,
    /// Exponent in SOS quality weighting.
    pub k: f64,
    /// Weight between win-quality and loss-quality in SOS, in `[0, 1]`.
    pub lambda: f64,
    /// Regularizer in SOS normalization denominators.
    pub epsilon: f64,
    /// RNG seed.
    pub seed: u64,
    /// Annealer step budget.
    pub annealing_iter: u64,
    /// Multiplicative cooling factor applied every 1000 steps, in `(0, 1)`.
    pub cooling_rate: f64,
    /// Slider sweep cap.
    pub max_slide_passes: u32,
    /// Slider half-window (max slide distance in either direction).
    pub window_search_size: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            alpha: 1,
            k: 2.0,
            lambda: 0.5,
            epsilon: 0.001,
            seed: 42,
            annealing_iter: 100_000,
            cooling_rate: 0.98,
            max_slide_passes: 1000,
            window_search_size: 3,
        }
    }
}

impl Params {
    /// Reject parameter combinations the optimizer cannot reason about.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.lambda) {
            return Err(CoreError::InvalidParams(format!(
                "lambda must lie in [0, 1], got {}",
                self.lambda
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(CoreError::InvalidParams(format!(
                "cooling_rate must lie in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.window_search_size == 0 {
            return Err(CoreError::InvalidParams(
                "window_search_size must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let p = Params::default();
        assert_eq!(p.alpha, 1);
        assert_eq!(p.k, 2.0);
        assert_eq!(p.lambda, 0.5);
        assert_eq!(p.epsilon, 0.001);
        assert_eq!(p.seed, 42);
        assert_eq!(p.annealing_iter, 100_000);
        assert_eq!(p.cooling_rate, 0.98);
        assert_eq!(p.max_slide_passes, 1000);
        assert_eq!(p.window_search_size, 3);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn lambda_out_of_range_rejected() {
        let mut p = Params::default();
        p.lambda = 1.5;
        assert!(p.validate().is_err());
    }

    #[test]
    fn cooling_rate_boundary_rejected() {
        let mut p = Params::default();
        p.cooling_rate = 1.0;
        assert!(p.validate().is_err());
        p.cooling_rate = 0.0;
        assert!(p.validate().is_err());
    }
}
