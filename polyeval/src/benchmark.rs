//! Measure the cost of the different [`Evaluator`] over a fixed batch of
//! sample points.
//!
//! A benchmark is configured with a [`BenchmarkConfig`], usually parsed from
//! JSON:
//!
//! ```
//! # use polyeval::{BenchmarkConfig, BenchmarkRunner, Evaluator};
//! let config = BenchmarkConfig::from_json(r#"{
//!     "polynomial": {"ExponentialSeries": {"order": 11}},
//!     "samples": {"count": 1000},
//!     "iterations": 20,
//!     "warmup": 2
//! }"#)?;
//!
//! let mut runner = BenchmarkRunner::new(config)?;
//! let report = runner.run(Evaluator::Horner);
//! assert_eq!(report.iterations, 20);
//! # Ok::<(), polyeval::Error>(())
//! ```

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use ndarray::Array1;

use crate::{BatchEvaluation, Error, Evaluator, OperationCount};
use crate::{PolynomialParameters, SampleGrid};

/// Parameters of a benchmark run
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkConfig {
    /// Polynomial to evaluate, defaults to the exponential series of order 11
    #[serde(default)]
    pub polynomial: PolynomialParameters,
    /// Sample points at which the polynomial is evaluated, defaults to 1000
    /// points in `[0, 1)`
    #[serde(default)]
    pub samples: SampleGrid,
    /// Number of timed passes over all the samples
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Number of untimed passes over all the samples before the timed ones
    #[serde(default = "default_warmup")]
    pub warmup: usize,
}

fn default_iterations() -> usize { 1000 }
fn default_warmup() -> usize { 10 }

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            polynomial: PolynomialParameters::default(),
            samples: SampleGrid::default(),
            iterations: default_iterations(),
            warmup: default_warmup(),
        }
    }
}

impl BenchmarkConfig {
    /// Parse and validate a configuration from its JSON representation
    pub fn from_json(json: &str) -> Result<BenchmarkConfig, Error> {
        let config: BenchmarkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.iterations == 0 {
            return Err(Error::InvalidParameter(
                "expected at least one benchmark iteration".into()
            ));
        }

        self.samples.validate()?;
        self.polynomial.build()?;

        Ok(())
    }
}

/// Timing and results of a single benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Evaluator used in this run
    pub evaluator: Evaluator,
    /// Degree of the evaluated polynomial
    pub degree: usize,
    /// Number of sample points in a pass
    pub samples: usize,
    /// Number of timed passes
    pub iterations: usize,
    /// Total time spent in the timed passes
    pub elapsed: Duration,
    /// Operations needed to evaluate the polynomial at a single point
    pub operations: OperationCount,
    /// Sum of the values from the last pass
    pub sum: f64,
    /// Mean of the values from the last pass
    pub mean: f64,
}

impl BenchmarkReport {
    /// Average time for a full pass over all samples
    pub fn per_iteration(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.iterations as f64)
    }

    /// Average time for a single evaluation of the polynomial
    pub fn per_sample(&self) -> Duration {
        let evaluations = self.iterations as f64 * self.samples as f64;
        Duration::from_secs_f64(self.elapsed.as_secs_f64() / evaluations)
    }
}

impl std::fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
            "{}: {} iterations x {} samples (degree {}, {} mul + {} add) in {:.2?}, {:.2?} per iteration, {:.2?} per sample, mean = {}",
            self.evaluator, self.iterations, self.samples, self.degree,
            self.operations.multiplications, self.operations.additions,
            self.elapsed, self.per_iteration(), self.per_sample(), self.mean,
        )
    }
}

/// Results of running the same benchmark with both evaluators
#[derive(Debug, Clone)]
pub struct Comparison {
    pub direct: BenchmarkReport,
    pub horner: BenchmarkReport,
    direct_results: Array1<f64>,
    horner_results: Array1<f64>,
}

impl Comparison {
    /// How many times faster Horner's scheme is compared to direct evaluation
    pub fn speedup(&self) -> f64 {
        self.direct.elapsed.as_secs_f64() / self.horner.elapsed.as_secs_f64()
    }

    /// Largest absolute difference between the values computed by both
    /// evaluators, coming from the different order of floating point
    /// operations.
    pub fn max_divergence(&self) -> f64 {
        self.direct_results.iter()
            .zip(&self.horner_results)
            .map(|(&direct, &horner)| (direct - horner).abs())
            .fold(0.0, f64::max)
    }

    /// Check that both evaluators produced the same values, up to a relative
    /// tolerance of `max_relative`
    pub fn results_agree(&self, max_relative: f64) -> bool {
        self.direct_results.iter()
            .zip(&self.horner_results)
            .all(|(&direct, &horner)| approx::relative_eq!(
                direct, horner, epsilon = f64::EPSILON, max_relative = max_relative
            ))
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.direct)?;
        writeln!(f, "{}", self.horner)?;
        write!(f, "horner speedup: {:.2}x, max divergence: {:e}", self.speedup(), self.max_divergence())
    }
}

/// Run benchmarks on a fixed polynomial and set of sample points.
///
/// The polynomial, samples and output buffer are created once in `new`, and
/// reused by every call to `run`.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    batch: BatchEvaluation,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Result<BenchmarkRunner, Error> {
        config.validate()?;

        let polynomial = config.polynomial.build()?;
        let batch = BatchEvaluation::with_grid(polynomial, &config.samples)?;

        Ok(BenchmarkRunner { config, batch })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Values computed by the last run
    pub fn batch(&self) -> &BatchEvaluation {
        &self.batch
    }

    /// Run the benchmark with the given `evaluator`. Only the passes over the
    /// samples are timed, the reductions happen after the timer is stopped.
    #[time_graph::instrument(name = "BenchmarkRunner::run")]
    pub fn run(&mut self, evaluator: Evaluator) -> BenchmarkReport {
        debug!("running {} warmup iterations for {}", self.config.warmup, evaluator);
        for _ in 0..self.config.warmup {
            self.batch.run(evaluator);
        }

        let start = Instant::now();
        for _ in 0..self.config.iterations {
            self.batch.run(evaluator);
        }
        let elapsed = start.elapsed();

        if elapsed.is_zero() {
            warn!(
                "benchmark for {} finished too fast to be measured, try increasing the number of iterations",
                evaluator
            );
        }

        let degree = self.batch.polynomial().degree();
        let report = BenchmarkReport {
            evaluator,
            degree,
            samples: self.batch.samples().len(),
            iterations: self.config.iterations,
            elapsed,
            operations: evaluator.operation_count(degree),
            sum: self.batch.sum(),
            mean: self.batch.mean(),
        };

        info!("{}", report);
        return report;
    }

    /// Run the benchmark with both evaluators, direct evaluation first
    pub fn compare(&mut self) -> Comparison {
        let direct = self.run(Evaluator::Direct);
        let direct_results = self.batch.results().to_owned();

        let horner = self.run(Evaluator::Horner);
        let horner_results = self.batch.results().to_owned();

        Comparison { direct, horner, direct_results, horner_results }
    }
}
