use ndarray::Array1;

use crate::Error;

/// Evenly spaced sample points in the half-open interval `[start, stop)`.
///
/// The `i`-th point is `start + (stop - start) * (i / count)`.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SampleGrid {
    /// Number of sample points
    pub count: usize,
    /// First sample point
    #[serde(default = "default_start")]
    pub start: f64,
    /// End of the sampled interval, this value is never reached
    #[serde(default = "default_stop")]
    pub stop: f64,
}

fn default_start() -> f64 { 0.0 }
fn default_stop() -> f64 { 1.0 }

impl Default for SampleGrid {
    fn default() -> Self {
        SampleGrid::unit(1000)
    }
}

impl SampleGrid {
    /// Get `count` sample points in `[0, 1)`
    pub fn unit(count: usize) -> SampleGrid {
        SampleGrid {
            count,
            start: default_start(),
            stop: default_stop(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.count == 0 {
            return Err(Error::InvalidParameter(
                "expected at least one sample point".into()
            ));
        }

        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "sample interval bounds must be finite, got [{}, {})", self.start, self.stop
            )));
        }

        if self.stop <= self.start {
            return Err(Error::InvalidParameter(format!(
                "sample interval is empty: [{}, {})", self.start, self.stop
            )));
        }

        Ok(())
    }

    /// Create the array containing all sample points
    pub fn generate(&self) -> Result<Array1<f64>, Error> {
        self.validate()?;

        let width = self.stop - self.start;
        let count = self.count as f64;
        Ok(Array1::from_shape_fn(self.count, |i| self.start + width * (i as f64 / count)))
    }
}
