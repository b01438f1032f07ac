use polyeval::{BenchmarkConfig, BenchmarkRunner, Evaluator, Polynomial};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => BenchmarkConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => BenchmarkConfig::default(),
    };

    // sanity check with a known value: p(10) = -58829
    let polynomial = Polynomial::new(vec![1.0, -3.0, 2.0, -4.0, 1.5, 0.3, -0.1])?;
    for evaluator in Evaluator::ALL {
        println!("{} p(10) = {}", evaluator, polynomial.evaluate(evaluator, 10.0));
    }

    let mut runner = BenchmarkRunner::new(config)?;
    let comparison = runner.compare();
    println!("{}", comparison);

    Ok(())
}
