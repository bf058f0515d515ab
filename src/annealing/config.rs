//! Annealing configuration.

use serde::{Deserialize, Serialize};

use super::TemperatureSchedule;

/// One linear leg of the temperature schedule.
///
/// Yields `start, start + step, start + 2·step, …` for as long as the
/// value has not passed `bound` (the bound itself is included when
/// reached).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePhase {
    /// First temperature of the phase.
    pub start: f64,
    /// Increment applied after each step; negative cools, positive reheats.
    pub step: f64,
    /// Last admissible temperature.
    pub bound: f64,
}

impl TemperaturePhase {
    pub fn new(start: f64, step: f64, bound: f64) -> Self {
        Self { start, step, bound }
    }

    /// Returns `true` if `temperature` has not passed the bound.
    pub fn admits(&self, temperature: f64) -> bool {
        if self.step < 0.0 {
            temperature >= self.bound
        } else {
            temperature <= self.bound
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !self.start.is_finite() || !self.step.is_finite() || !self.bound.is_finite() {
            return Err("phase values must be finite".into());
        }
        if self.step == 0.0 {
            return Err("phase step must be non-zero".into());
        }
        if self.start <= 0.0 || self.bound <= 0.0 {
            return Err(format!(
                "temperatures must be positive, got {} → {}",
                self.start, self.bound
            ));
        }
        if !self.admits(self.start) {
            return Err(format!(
                "step {} moves {} away from bound {}",
                self.step, self.start, self.bound
            ));
        }
        Ok(())
    }
}

/// Configuration for simulated annealing.
///
/// The default schedule cools 80 → 50 by 0.05, reheats 50 → 120 by 0.05,
/// then cools slowly 120 → 30 by 0.005.
///
/// # Examples
///
/// ```
/// use tsp_search::annealing::{AnnealingConfig, TemperaturePhase};
///
/// let config = AnnealingConfig::new(vec![TemperaturePhase::new(10.0, -1.0, 1.0)]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.schedule().count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Schedule legs, walked in order.
    pub phases: Vec<TemperaturePhase>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            phases: vec![
                TemperaturePhase::new(80.0, -0.05, 50.0),
                TemperaturePhase::new(50.0, 0.05, 120.0),
                TemperaturePhase::new(120.0, -0.005, 30.0),
            ],
        }
    }
}

impl AnnealingConfig {
    pub fn new(phases: Vec<TemperaturePhase>) -> Self {
        Self { phases }
    }

    pub fn with_phase(mut self, phase: TemperaturePhase) -> Self {
        self.phases.push(phase);
        self
    }

    /// The temperatures this configuration walks through.
    pub fn schedule(&self) -> TemperatureSchedule {
        TemperatureSchedule::new(self.phases.clone())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.phases.is_empty() {
            return Err("schedule needs at least one phase".into());
        }
        for (i, phase) in self.phases.iter().enumerate() {
            phase.validate().map_err(|msg| format!("phase {i}: {msg}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phases() {
        let config = AnnealingConfig::default();
        assert_eq!(config.phases.len(), 3);
        assert_eq!(config.phases[0], TemperaturePhase::new(80.0, -0.05, 50.0));
        assert_eq!(config.phases[2].step, -0.005);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert!(AnnealingConfig::new(vec![]).validate().is_err());
    }

    #[test]
    fn test_validate_zero_step() {
        let config = AnnealingConfig::new(vec![TemperaturePhase::new(10.0, 0.0, 1.0)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_wrong_direction() {
        let config = AnnealingConfig::new(vec![TemperaturePhase::new(10.0, 1.0, 1.0)]);
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("phase 0:"), "{err}");
    }

    #[test]
    fn test_validate_non_positive_temperature() {
        let config = AnnealingConfig::new(vec![TemperaturePhase::new(10.0, -1.0, 0.0)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan() {
        let config = AnnealingConfig::default().with_phase(TemperaturePhase::new(f64::NAN, 1.0, 5.0));
        assert!(config.validate().is_err());
    }
}
