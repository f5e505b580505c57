//! XOR labels are not linearly separable: the learner never converges.

use perceptron_rs::{Dataset, FitOptions, Perceptron, Weights};

fn main() {
    pretty_env_logger::init();

    let data = Dataset::from_triples(&[(1.0, 1.0, 1), (-1.0, -1.0, 1), (1.0, -1.0, -1), (-1.0, 1.0, -1)])
        .expect("valid dataset");

    let mut learner = Perceptron::new(&data, Weights::default());

    println!("Training on XOR dataset...");
    let result = learner.fit(FitOptions::new().with_max_corrections(1000));

    println!("\nConverged: {}", result.converged);
    println!("Corrections: {}", result.iterations);
    println!("Accuracy: {:.1}%", learner.accuracy() * 100.0);

    println!("\nPredictions:");
    for lp in &data {
        let pred = result.weights.classify(&lp.point);
        let status = if pred == lp.label { "OK" } else { "WRONG" };
        println!("  {:?} -> {:?} (expected: {:?}) {}", lp.point, pred, lp.label, status);
    }
}
