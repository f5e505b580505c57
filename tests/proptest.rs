//! Property-based tests for the perceptron learner.

use perceptron_rs::{
    Config, Dataset, FitOptions, Label, LabeledPoint, Perceptron, Step, Weights,
    utils::rng_from_seed
};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = Label> {
    prop_oneof![Just(Label::Negative), Just(Label::Positive)]
}

fn weights() -> impl Strategy<Value = Weights> {
    (-20.0f64..20.0, -5.0f64..5.0, -5.0f64..5.0).prop_map(|(b, w1, w2)| Weights::new(b, w1, w2))
}

fn nonzero_weight() -> impl Strategy<Value = f64> {
    prop_oneof![-3.0f64..-0.05, 0.05f64..3.0]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Generated labels are the sign of the reference function.
    #[test]
    fn label_consistency(
        n_points in 1usize..80,
        bias in -10.0f64..10.0,
        w1 in nonzero_weight(),
        w2 in nonzero_weight(),
        continuous in any::<bool>(),
        seed in 0u64..1000
    ) {
        let mut builder = Config::builder().points(n_points);
        if continuous {
            builder = builder.continuous();
        }
        let config = builder.build().unwrap();
        let reference = Weights::new(bias, w1, w2);
        let data = Dataset::generate(&config, reference, &mut rng_from_seed(seed)).unwrap();

        prop_assert_eq!(data.len(), n_points);
        for lp in &data {
            let f = bias + w1 * lp.point.x1 + w2 * lp.point.x2;
            prop_assert_eq!(lp.label == Label::Positive, f >= 0.0);
        }
    }

    /// One correction adds exactly `y * [1, x1, x2]`.
    #[test]
    fn update_rule_exactness(
        w in weights(),
        x1 in -20.0f64..20.0,
        x2 in -20.0f64..20.0,
        y in label()
    ) {
        let lp = LabeledPoint::new(x1, x2, y);
        let mut next = w;
        next.update(&lp);

        let s = y.sign();
        prop_assert_eq!(next, Weights::new(w.bias + s, w.w1 + s * x1, w.w2 + s * x2));
    }

    /// The counter moves by exactly one per correction and never otherwise.
    #[test]
    fn monotonic_progress(
        triples in prop::collection::vec((-10i32..10, -10i32..10, any::<bool>()), 1..12),
        start in weights(),
        ticks in 1usize..400
    ) {
        let triples: Vec<(f64, f64, i8)> = triples
            .into_iter()
            .map(|(a, b, pos)| (a as f64, b as f64, if pos { 1 } else { -1 }))
            .collect();
        let data = Dataset::from_triples(&triples).unwrap();
        let mut p = Perceptron::new(&data, start);

        for _ in 0..ticks {
            let before = p.iterations();
            match p.tick() {
                Step::Corrected { iteration, .. } => {
                    prop_assert_eq!(iteration, before + 1);
                    prop_assert_eq!(p.iterations(), before + 1);
                }
                Step::Scanning { .. } | Step::Converged { .. } => {
                    prop_assert_eq!(p.iterations(), before);
                }
            }
        }
    }

    /// A converged learner misclassifies nothing.
    #[test]
    fn termination_correctness(
        n_points in 1usize..40,
        bias in -5i32..5,
        w1 in 1i32..4,
        w2 in -3i32..-1,
        start in weights(),
        seed in 0u64..1000
    ) {
        let config = Config::builder().points(n_points).bound(10.0).build().unwrap();
        let reference = Weights::new(bias as f64 + 0.5, w1 as f64, w2 as f64);
        let data = Dataset::generate(&config, reference, &mut rng_from_seed(seed)).unwrap();

        let result = Perceptron::new(&data, start)
            .fit(FitOptions::new().with_max_corrections(2_000_000));

        prop_assert!(result.converged);
        for lp in &data {
            let h = result.weights.value(&lp.point);
            if h < 0.0 {
                prop_assert_eq!(lp.label, Label::Negative);
            } else {
                prop_assert_eq!(lp.label, Label::Positive);
            }
        }
    }
}
