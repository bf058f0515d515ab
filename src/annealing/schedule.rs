//! Temperature schedule iterator.

use super::TemperaturePhase;

/// Walks the phases of an [`AnnealingConfig`](super::AnnealingConfig) in order.
///
/// Each phase accumulates its step by repeated addition, so the values
/// carry the usual floating-point drift of such a sequence.
#[derive(Debug, Clone)]
pub struct TemperatureSchedule {
    phases: Vec<TemperaturePhase>,
    phase: usize,
    next: Option<f64>,
}

impl TemperatureSchedule {
    pub fn new(phases: Vec<TemperaturePhase>) -> Self {
        let next = phases.first().map(|p| p.start);
        Self {
            phases,
            phase: 0,
            next,
        }
    }
}

impl Iterator for TemperatureSchedule {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        loop {
            let phase = *self.phases.get(self.phase)?;
            let t = self.next.unwrap_or(phase.start);
            if phase.admits(t) {
                self.next = Some(t + phase.step);
                return Some(t);
            }
            self.phase += 1;
            self.next = self.phases.get(self.phase).map(|p| p.start);
        }
    }
}
