use polyeval::{BenchmarkConfig, BenchmarkRunner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BenchmarkConfig {
        iterations: 100,
        ..Default::default()
    };

    // enable collection of profiling data
    time_graph::enable_data_collection(true);
    // clear any existing collected data
    time_graph::clear_collected_data();

    let mut runner = BenchmarkRunner::new(config)?;
    let comparison = time_graph::spanned!("Full comparison", {
        runner.compare()
    });
    println!("{}", comparison);

    // get the call graph and display it
    let graph = time_graph::get_full_graph();
    // (this requires the "table" feature for the time_graph crate)
    println!("{}", graph.as_short_table());

    // also available for saving profiling data to the disk & future analysis
    // (this requires the "json" feature for the time_graph crate)
    println!("{}", graph.as_json());

    Ok(())
}
