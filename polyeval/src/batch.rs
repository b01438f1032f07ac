use ndarray::{Array1, ArrayView1, ArrayViewMut1, azip};

use crate::{Error, Evaluator, Polynomial, SampleGrid};

/// Evaluate the polynomial defined by `coefficients` at all the `samples`
/// points with the given `evaluator`, storing the values in `results`.
///
/// After this call, `results[i]` contains the value of the polynomial at
/// `samples[i]`. No memory is allocated by this function.
///
/// # Panics
///
/// If `coefficients` is empty.
#[time_graph::instrument(name = "evaluate_batch")]
pub fn evaluate_batch(
    evaluator: Evaluator,
    coefficients: &[f64],
    samples: ArrayView1<'_, f64>,
    mut results: ArrayViewMut1<'_, f64>,
) -> Result<(), Error> {
    if samples.len() != results.len() {
        return Err(Error::InvalidParameter(format!(
            "expected the same number of samples and results, got {} and {}",
            samples.len(), results.len()
        )));
    }

    match evaluator {
        Evaluator::Direct => azip!((y in &mut results, &x in &samples) {
            *y = crate::evaluate_direct(coefficients, x);
        }),
        Evaluator::Horner => azip!((y in &mut results, &x in &samples) {
            *y = crate::evaluate_horner(coefficients, x);
        }),
    }

    Ok(())
}

/// Fixed set of data used to repeatedly evaluate a polynomial over a batch of
/// sample points.
///
/// The polynomial and samples are set once, and the output buffer is
/// allocated once and overwritten on every call to `run`.
#[derive(Debug, Clone)]
pub struct BatchEvaluation {
    polynomial: Polynomial,
    samples: Array1<f64>,
    results: Array1<f64>,
}

impl BatchEvaluation {
    pub fn new(polynomial: Polynomial, samples: Array1<f64>) -> BatchEvaluation {
        let results = Array1::zeros(samples.len());
        BatchEvaluation { polynomial, samples, results }
    }

    /// Create a new `BatchEvaluation` with points taken from the given grid
    pub fn with_grid(polynomial: Polynomial, grid: &SampleGrid) -> Result<BatchEvaluation, Error> {
        let samples = grid.generate()?;
        Ok(BatchEvaluation::new(polynomial, samples))
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn samples(&self) -> ArrayView1<'_, f64> {
        self.samples.view()
    }

    /// Values computed by the last call to `run`. These are all zero if
    /// `run` was never called.
    pub fn results(&self) -> ArrayView1<'_, f64> {
        self.results.view()
    }

    /// Evaluate the polynomial at all sample points with `evaluator`,
    /// overwriting the previous results.
    #[inline]
    pub fn run(&mut self, evaluator: Evaluator) {
        evaluate_batch(
            evaluator,
            self.polynomial.coefficients(),
            self.samples.view(),
            self.results.view_mut(),
        ).expect("samples and results have the same size");
    }

    /// Sum of the current results
    pub fn sum(&self) -> f64 {
        self.results.sum()
    }

    /// Mean of the current results, or `NaN` if there are no samples
    pub fn mean(&self) -> f64 {
        self.sum() / self.results.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array1, aview1};

    use super::*;

    #[test]
    fn matches_single_evaluations() {
        let polynomial = Polynomial::new(vec![1.0, -3.0, 2.0, -4.0, 1.5, 0.3, -0.1]).unwrap();
        let samples = Array1::linspace(-3.0, 12.0, 37);
        let mut results = Array1::from_elem(37, f64::NAN);

        for evaluator in Evaluator::ALL {
            evaluate_batch(evaluator, polynomial.coefficients(), samples.view(), results.view_mut()).unwrap();
            for (&x, &y) in samples.iter().zip(&results) {
                assert_eq!(y, polynomial.evaluate(evaluator, x));
            }
        }
    }

    #[test]
    fn size_mismatch() {
        let samples = Array1::linspace(0.0, 1.0, 10);
        let mut results = Array1::zeros(9);
        let error = evaluate_batch(Evaluator::Horner, &[1.0, 2.0], samples.view(), results.view_mut()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid parameter: expected the same number of samples and results, got 10 and 9"
        );
    }

    #[test]
    fn empty_batch() {
        let samples = Array1::<f64>::zeros(0);
        let mut results = Array1::<f64>::zeros(0);
        evaluate_batch(Evaluator::Direct, &[1.0], samples.view(), results.view_mut()).unwrap();
    }

    #[test]
    fn reuse_output_buffer() {
        let polynomial = Polynomial::new(vec![0.0, 1.0]).unwrap();
        let samples = Array1::from(vec![1.0, 2.0, 3.0, 4.0]);
        let mut batch = BatchEvaluation::new(polynomial, samples);
        assert_eq!(batch.results(), aview1(&[0.0, 0.0, 0.0, 0.0]));

        let buffer = batch.results().as_ptr();
        batch.run(Evaluator::Direct);
        assert_eq!(batch.results(), aview1(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(batch.sum(), 10.0);
        assert_eq!(batch.mean(), 2.5);

        batch.run(Evaluator::Horner);
        assert_eq!(batch.results(), aview1(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(batch.results().as_ptr(), buffer);
    }

    #[test]
    fn exponential_mean() {
        let polynomial = Polynomial::exponential_series(11);
        let mut batch = BatchEvaluation::with_grid(polynomial, &SampleGrid::unit(1000)).unwrap();

        // mean of exp(x) over [0, 1) with a left Riemann sum
        let expected = 1.0_f64.exp_m1() / (1000.0 * 1e-3_f64.exp_m1());
        for evaluator in Evaluator::ALL {
            batch.run(evaluator);
            assert_relative_eq!(batch.mean(), expected, max_relative = 1e-9);
        }
    }
}
