#![warn(clippy::all, clippy::pedantic)]

// disable some style lints
#![allow(clippy::needless_return, clippy::must_use_candidate, clippy::comparison_chain)]
#![allow(clippy::redundant_field_names, clippy::redundant_closure_for_method_calls)]
#![allow(clippy::unreadable_literal, clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

// Tests lints
#![cfg_attr(test, allow(clippy::float_cmp))]

//! Evaluation of single-variable polynomials over batches of sample points,
//! using either direct power summation or Horner's nested multiplication, and
//! tools to compare the cost of both schemes.

mod errors;
pub use self::errors::Error;

mod polynomial;
pub use self::polynomial::{Polynomial, PolynomialParameters};

mod evaluator;
pub use self::evaluator::{evaluate_direct, evaluate_horner};
pub use self::evaluator::{Evaluator, OperationCount};

mod samples;
pub use self::samples::SampleGrid;

mod batch;
pub use self::batch::{evaluate_batch, BatchEvaluation};

pub mod benchmark;
pub use self::benchmark::{BenchmarkConfig, BenchmarkRunner, BenchmarkReport, Comparison};
