use std::ops::{Add, Mul};

/// Evaluate the polynomial `p(x) = sum_i coefficients[i] * x^i` by explicitly
/// accumulating successive powers of `x`.
///
/// Terms are summed in ascending powers. The accumulator is seeded with the
/// constant term and the running power with `x`, and the power is only
/// advanced between two terms: a polynomial of degree `d >= 1` costs `2d - 1`
/// multiplications and `d` additions, a constant polynomial costs nothing.
///
/// `NaN` and infinite values propagate according to IEEE-754 rules.
///
/// # Panics
///
/// If `coefficients` is empty, since there is no polynomial to evaluate.
#[inline]
pub fn evaluate_direct<T>(coefficients: &[T], x: T) -> T
    where T: Copy + Add<Output = T> + Mul<Output = T>
{
    let (&constant, others) = coefficients.split_first()
        .expect("polynomials need at least one coefficient");

    let (&leading, middle) = match others.split_last() {
        Some(split) => split,
        None => return constant,
    };

    let mut result = constant;
    let mut power = x;
    for &c in middle {
        result = result + power * c;
        power = power * x;
    }

    return result + power * leading;
}

/// Evaluate the polynomial `p(x) = sum_i coefficients[i] * x^i` with Horner's
/// scheme, i.e. `(((c[d] * x + c[d - 1]) * x + c[d - 2]) * x + ...) + c[0]`.
///
/// A polynomial of degree `d` costs exactly `d` multiplications and `d`
/// additions. The result is the same as [`evaluate_direct`] in exact
/// arithmetic, but can differ in the last bits with floating point numbers.
///
/// # Panics
///
/// If `coefficients` is empty, since there is no polynomial to evaluate.
#[inline]
pub fn evaluate_horner<T>(coefficients: &[T], x: T) -> T
    where T: Copy + Add<Output = T> + Mul<Output = T>
{
    let (&leading, others) = coefficients.split_last()
        .expect("polynomials need at least one coefficient");

    let mut result = leading;
    for &c in others.iter().rev() {
        result = result * x + c;
    }

    return result;
}

/// The different strategies available to evaluate a polynomial at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
pub enum Evaluator {
    /// Explicit power accumulation, see [`evaluate_direct`]
    Direct,
    /// Nested multiplication, see [`evaluate_horner`]
    Horner,
}

/// Number of floating point operations needed for a single evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationCount {
    pub multiplications: usize,
    pub additions: usize,
}

impl Evaluator {
    /// All the available evaluators
    pub const ALL: [Evaluator; 2] = [Evaluator::Direct, Evaluator::Horner];

    pub fn name(self) -> &'static str {
        match self {
            Evaluator::Direct => "direct",
            Evaluator::Horner => "horner",
        }
    }

    /// Evaluate the polynomial defined by `coefficients` at `x` with this
    /// strategy.
    ///
    /// # Panics
    ///
    /// If `coefficients` is empty.
    #[inline]
    pub fn evaluate(self, coefficients: &[f64], x: f64) -> f64 {
        match self {
            Evaluator::Direct => evaluate_direct(coefficients, x),
            Evaluator::Horner => evaluate_horner(coefficients, x),
        }
    }

    /// Get the number of operations this strategy performs to evaluate a
    /// polynomial of the given `degree` at a single point.
    pub fn operation_count(self, degree: usize) -> OperationCount {
        match self {
            Evaluator::Direct => {
                if degree == 0 {
                    OperationCount::default()
                } else {
                    OperationCount {
                        multiplications: 2 * degree - 1,
                        additions: degree,
                    }
                }
            }
            Evaluator::Horner => OperationCount {
                multiplications: degree,
                additions: degree,
            },
        }
    }
}

impl std::fmt::Display for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
