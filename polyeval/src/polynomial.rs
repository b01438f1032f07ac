use crate::{Error, Evaluator};

/// A single-variable polynomial, stored as its coefficients in ascending
/// powers: `coefficients[i]` multiplies `x^i`.
///
/// A `Polynomial` always has at least one coefficient, and can not be modified
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Create a new polynomial from its coefficients, starting with the
    /// constant term and ending with the leading term.
    pub fn new(coefficients: Vec<f64>) -> Result<Polynomial, Error> {
        if coefficients.is_empty() {
            return Err(Error::InvalidParameter(
                "a polynomial needs at least one coefficient".into()
            ));
        }

        Ok(Polynomial { coefficients })
    }

    /// Truncated Taylor series of `exp(x)` around 0, i.e. `c[i] = 1 / i!` for
    /// `i` in `0..=order`.
    pub fn exponential_series(order: usize) -> Polynomial {
        let mut coefficients = Vec::with_capacity(order + 1);
        let mut factorial = 1.0;
        coefficients.push(1.0);
        for i in 1..=order {
            factorial *= i as f64;
            coefficients.push(1.0 / factorial);
        }

        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Get the degree of this polynomial, i.e. the number of coefficients
    /// minus one. Zero leading coefficients are counted.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Get a new polynomial with all coefficients multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Polynomial {
        Polynomial {
            coefficients: self.coefficients.iter().map(|c| factor * c).collect(),
        }
    }

    /// Evaluate this polynomial at `x` with the given `evaluator`
    #[inline]
    pub fn evaluate(&self, evaluator: Evaluator, x: f64) -> f64 {
        evaluator.evaluate(&self.coefficients, x)
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = Error;

    fn try_from(coefficients: Vec<f64>) -> Result<Polynomial, Error> {
        Polynomial::new(coefficients)
    }
}

/// Parameters describing which polynomial to use in a benchmark
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub enum PolynomialParameters {
    /// Truncated Taylor series of the exponential function
    ExponentialSeries {
        /// Degree of the last term in the series
        order: usize,
    },
    /// Explicit list of coefficients, in ascending powers
    Explicit {
        /// Coefficients of the polynomial, `coefficients[i]` multiplies `x^i`
        coefficients: Vec<f64>,
    },
}

impl Default for PolynomialParameters {
    fn default() -> Self {
        PolynomialParameters::ExponentialSeries { order: 11 }
    }
}

impl PolynomialParameters {
    /// Create the polynomial described by these parameters
    pub fn build(&self) -> Result<Polynomial, Error> {
        match self {
            PolynomialParameters::ExponentialSeries { order } => {
                Ok(Polynomial::exponential_series(*order))
            }
            PolynomialParameters::Explicit { coefficients } => {
                Polynomial::new(coefficients.clone())
            }
        }
    }
}
