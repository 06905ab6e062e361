//! Parameter sweeps for batch exploration.
//!
//! A sweep walks one of the physics sliders from `start` to `end` in evenly
//! spaced steps, holding the others at their resting values. Evaluating the
//! resulting presets (remotely or otherwise) is up to the caller.

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};

/// Resting values for the sliders a sweep does not touch.
const REST_TEMPERATURE: f64 = 0.0;
const REST_RENORMALIZATION: f64 = 0.5;
const REST_WICK: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepParameter {
    Temperature,
    Renormalization,
    Wick,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSweep {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub steps: usize,
}

/// One preset produced by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub temperature: f64,
    pub renormalization: f64,
    pub wick: f64,
}

impl Default for ParameterSweep {
    fn default() -> Self {
        Self {
            parameter: SweepParameter::Temperature,
            start: 0.0,
            end: 1.0,
            steps: 5,
        }
    }
}

impl ParameterSweep {
    pub fn validate(&self) -> LatticeResult<()> {
        if self.steps == 0 {
            return Err(LatticeError::InvalidSweep {
                reason: "steps must be at least 1".into(),
            });
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(LatticeError::InvalidSweep {
                reason: format!("bounds must be finite, got {}..{}", self.start, self.end),
            });
        }
        Ok(())
    }

    /// Evenly spaced values from `start` to `end` inclusive.
    ///
    /// A single step yields just `start`.
    pub fn values(&self) -> LatticeResult<Vec<f64>> {
        self.validate()?;
        if self.steps == 1 {
            return Ok(vec![self.start]);
        }
        let step = (self.end - self.start) / (self.steps - 1) as f64;
        Ok((0..self.steps).map(|i| self.start + i as f64 * step).collect())
    }

    pub fn points(&self) -> LatticeResult<Vec<SweepPoint>> {
        Ok(self
            .values()?
            .into_iter()
            .map(|v| self.point_at(v))
            .collect())
    }

    fn point_at(&self, value: f64) -> SweepPoint {
        let mut point = SweepPoint {
            temperature: REST_TEMPERATURE,
            renormalization: REST_RENORMALIZATION,
            wick: REST_WICK,
        };
        match self.parameter {
            SweepParameter::Temperature => point.temperature = value,
            SweepParameter::Renormalization => point.renormalization = value,
            SweepParameter::Wick => point.wick = value,
        }
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_has_quarter_steps() {
        let v = ParameterSweep::default().values().unwrap();
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn descending_sweep() {
        let sweep = ParameterSweep {
            parameter: SweepParameter::Wick,
            start: 1.0,
            end: -1.0,
            steps: 3,
        };
        assert_eq!(sweep.values().unwrap(), vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn single_step_is_start() {
        let sweep = ParameterSweep { steps: 1, start: 0.3, ..Default::default() };
        assert_eq!(sweep.values().unwrap(), vec![0.3]);
    }

    #[test]
    fn zero_steps_rejected() {
        let sweep = ParameterSweep { steps: 0, ..Default::default() };
        assert!(matches!(sweep.values(), Err(LatticeError::InvalidSweep { .. })));
        let sweep = ParameterSweep { end: f64::NAN, ..Default::default() };
        assert!(sweep.validate().is_err());
    }

    #[test]
    fn untouched_sliders_rest() {
        let sweep = ParameterSweep {
            parameter: SweepParameter::Renormalization,
            start: 0.25,
            end: 0.75,
            steps: 2,
        };
        let points = sweep.points().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], SweepPoint { temperature: 0.0, renormalization: 0.25, wick: 0.0 });
        assert_eq!(points[1].renormalization, 0.75);
    }
}
