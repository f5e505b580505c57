//! Learns a random linear boundary, printing the line after each correction.
//!
//! Run with `RUST_LOG=debug` to see every correction logged.

use perceptron_rs::{
    Config, Dataset, FitOptions, Label, Perceptron, Weights, utils::rng_from_entropy
};

fn main() -> perceptron_rs::Result<()> {
    pretty_env_logger::init();

    let config = Config::builder().points(50).draw_every(true).build()?;
    let mut rng = rng_from_entropy();

    let reference = Weights::random_reference(config.bias_range, &mut rng);
    let data = Dataset::generate(&config, reference, &mut rng)?;
    println!(
        "Generated {} points ({} positive, {} negative) against f = {:?}",
        data.len(),
        data.count(Label::Positive),
        data.count(Label::Negative),
        reference
    );

    let bound = config.bound;
    let samples = config.boundary_samples;
    let opts = FitOptions::from_config(&config)
        .with_max_corrections(1_000_000)
        .with_callback(move |snap| {
            match snap.boundary(bound, samples) {
                Ok(line) => match (line.points().first(), line.points().last()) {
                    (Some((x0, y0)), Some((x1, y1))) => println!(
                        "Iteration {}: h from ({x0:.2}, {y0:.2}) to ({x1:.2}, {y1:.2})",
                        snap.iteration
                    ),
                    _ => println!("Iteration {}: {:?}", snap.iteration, snap.weights)
                },
                Err(e) => println!("Iteration {}: {e}", snap.iteration)
            }
            true
        });

    let mut learner = Perceptron::from_config(&data, &config, &mut rng);
    let result = learner.fit(opts);

    if result.converged {
        println!("Learning complete! Iterations required was {}", result.iterations);
    } else {
        println!("Gave up after {} corrections", result.iterations);
    }
    println!("Final weights: {:?}", result.weights);
    Ok(())
}
