use approx::assert_relative_eq;
use ndarray::Array1;

use polyeval::{evaluate_batch, evaluate_direct, evaluate_horner};
use polyeval::{Evaluator, Polynomial, SampleGrid};

/// Regression value for `1 - 3x + 2x^2 - 4x^3 + 1.5x^4 + 0.3x^5 - 0.1x^6` at
/// `x = 10`, i.e. `1 - 30 + 200 - 4000 + 15000 + 30000 - 100000`
const FIXED_POINT: f64 = -58829.0;

/// Small deterministic generator for values in `[-1, 1)`
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }

    fn polynomial(&mut self, degree: usize) -> Polynomial {
        Polynomial::new((0..=degree).map(|_| self.next()).collect()).unwrap()
    }
}

/// Sum of the absolute values of all terms, bounding the rounding error of
/// both evaluation schemes
fn absolute_scale(coefficients: &[f64], x: f64) -> f64 {
    evaluate_horner(&coefficients.iter().map(|c| c.abs()).collect::<Vec<_>>(), x.abs())
}

#[test]
fn fixed_point() {
    let coefficients = [1.0, -3.0, 2.0, -4.0, 1.5, 0.3, -0.1];
    assert_eq!(evaluate_direct(&coefficients, 10.0), FIXED_POINT);
    assert_eq!(evaluate_horner(&coefficients, 10.0), FIXED_POINT);
}

#[test]
fn equivalence() {
    let mut rng = Lcg(0x5eed);
    for degree in 0..24 {
        for _ in 0..20 {
            let polynomial = rng.polynomial(degree);
            let coefficients = polynomial.coefficients();
            let x = 2.0 * rng.next();

            let direct = evaluate_direct(coefficients, x);
            let horner = evaluate_horner(coefficients, x);
            assert_relative_eq!(
                direct, horner,
                epsilon = 1e-13 * absolute_scale(coefficients, x),
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn degree_zero() {
    let mut rng = Lcg(42);
    for _ in 0..50 {
        let k = 100.0 * rng.next();
        let x = 1e6 * rng.next();
        assert_eq!(evaluate_direct(&[k], x), k);
        assert_eq!(evaluate_horner(&[k], x), k);
    }
}

#[test]
fn linearity() {
    let mut rng = Lcg(7);
    for degree in 1..12 {
        let polynomial = rng.polynomial(degree);
        let factor = 10.0 * rng.next();
        let scaled = polynomial.scaled(factor);

        for _ in 0..10 {
            let x = 1.5 * rng.next();
            let scale = factor.abs() * absolute_scale(polynomial.coefficients(), x);
            for evaluator in Evaluator::ALL {
                assert_relative_eq!(
                    scaled.evaluate(evaluator, x),
                    factor * polynomial.evaluate(evaluator, x),
                    epsilon = 1e-13 * scale,
                    max_relative = 1e-9
                );
            }
        }
    }
}

#[test]
fn batch_correctness() {
    let mut rng = Lcg(1234);
    let polynomial = rng.polynomial(9);
    let samples = SampleGrid { count: 257, start: -2.0, stop: 2.0 }.generate().unwrap();
    let mut results = Array1::zeros(samples.len());

    for evaluator in Evaluator::ALL {
        evaluate_batch(evaluator, polynomial.coefficients(), samples.view(), results.view_mut()).unwrap();
        for (i, &x) in samples.iter().enumerate() {
            assert_eq!(results[i], evaluator.evaluate(polynomial.coefficients(), x));
        }
    }
}

#[test]
fn fewer_multiplications_with_horner() {
    for degree in 2..64 {
        let direct = Evaluator::Direct.operation_count(degree);
        let horner = Evaluator::Horner.operation_count(degree);
        assert!(horner.multiplications < direct.multiplications);
        assert_eq!(horner.additions, direct.additions);
    }

    assert_eq!(Evaluator::Direct.operation_count(1), Evaluator::Horner.operation_count(1));
}

#[test]
fn empty_coefficients() {
    assert!(Polynomial::new(vec![]).is_err());

    for evaluator in Evaluator::ALL {
        let result = std::panic::catch_unwind(|| evaluator.evaluate(&[], 0.5));
        assert!(result.is_err());
    }
}
