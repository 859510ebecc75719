#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use safs::activations::{ash, percentile, Activation};
    use safs::builders::ParametricActivationBuilder;
    use ndarray::{Array1, Array2, Axis};

    // Strategy for generating finite input arrays
    fn input_array_strategy() -> impl Strategy<Value = Array1<f32>> {
        prop::collection::vec(-50.0f32..50.0, 1..64).prop_map(Array1::from_vec)
    }

    // Strategy for generating a batch of equally sized samples
    fn batch_strategy() -> impl Strategy<Value = Array2<f32>> {
        (1usize..6, 1usize..20).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(-100.0f32..100.0, rows * cols)
                .prop_map(move |v| Array2::from_shape_vec((rows, cols), v).unwrap())
        })
    }

    fn coefficient_strategy() -> impl Strategy<Value = (f32, f32, f32)> {
        (0.1f32..3.0, 0.1f32..3.0, 0.1f32..3.0)
    }

    proptest! {
        #[test]
        fn test_fallback_matches_relu(
            input in input_array_strategy(),
            (p1, p2, _p3) in coefficient_strategy(),
            name in "[a-z]{3,10}"
        ) {
            prop_assume!(name.parse::<Activation>().is_err());
            let act = ParametricActivationBuilder::new().p1(p1).p2(p2).build().unwrap();

            let fallback = act.forward(input.view(), &name).unwrap();
            let relu = act.forward(input.view(), "relu").unwrap();
            prop_assert_eq!(fallback, relu);
        }

        #[test]
        fn test_elementwise_output_shape(
            input in batch_strategy(),
            (p1, p2, p3) in coefficient_strategy()
        ) {
            let act = ParametricActivationBuilder::new().p1(p1).p2(p2).p3(p3).build().unwrap();
            for activation in Activation::ALL.into_iter().filter(|a| a.is_elementwise()) {
                let output = act.apply(input.view(), activation).unwrap();
                prop_assert_eq!(output.shape(), input.shape());
            }
        }

        #[test]
        fn test_bounded_outputs(
            input in input_array_strategy()
        ) {
            let act = ParametricActivationBuilder::new().build().unwrap();

            // Test Sigmoid bounds [0, 1]
            let sigmoid_output = act.forward(input.view(), "sigmoid").unwrap();
            for &val in sigmoid_output.iter() {
                prop_assert!((0.0..=1.0).contains(&val), "Sigmoid output out of bounds: {}", val);
            }

            // Test Tanh bounds [-1, 1]
            let tanh_output = act.forward(input.view(), "tanh").unwrap();
            for &val in tanh_output.iter() {
                prop_assert!((-1.0..=1.0).contains(&val), "Tanh output out of bounds: {}", val);
            }

            // Test relu6 bounds [0, 6]
            let relu6_output = act.forward(input.view(), "relu6").unwrap();
            for &val in relu6_output.iter() {
                prop_assert!((0.0..=6.0).contains(&val), "relu6 output out of bounds: {}", val);
            }
        }

        #[test]
        fn test_symlog_is_odd(
            input in input_array_strategy(),
            (p1, p2, _p3) in coefficient_strategy()
        ) {
            let act = ParametricActivationBuilder::new().p1(p1).p2(p2).build().unwrap();
            let pos = act.forward(input.view(), "symlog").unwrap();
            let neg = act.forward(input.mapv(|v| -v).view(), "symlog").unwrap();
            for (a, b) in pos.iter().zip(neg.iter()) {
                prop_assert!((a + b).abs() < 1e-5, "symlog not odd: {} vs {}", a, b);
            }
        }

        #[test]
        fn test_acon_equal_slopes_is_linear(
            input in input_array_strategy(),
            (p, _p2, p3) in coefficient_strategy()
        ) {
            // p1 == p2 makes the gated term vanish
            let act = ParametricActivationBuilder::new().p1(p).p2(p).p3(p3).build().unwrap();
            let output = act.forward(input.view(), "acon").unwrap();
            for (y, x) in output.iter().zip(input.iter()) {
                prop_assert!((y - p * x).abs() < 1e-4);
            }
        }

        #[test]
        fn test_ash_samples_are_independent(
            batch in batch_strategy(),
            k in 0.0f32..=1.0
        ) {
            let output = ash(batch.view(), k).unwrap();
            for (i, sample) in batch.axis_iter(Axis(0)).enumerate() {
                let alone = ash(sample.insert_axis(Axis(0)), k).unwrap();
                prop_assert_eq!(alone.row(0), output.row(i));
            }
        }

        #[test]
        fn test_ash_keeps_only_values_above_threshold(
            batch in batch_strategy(),
            k in 0.0f32..=1.0
        ) {
            let rank = ((1.0 - k) * 100.0).trunc() as u32;
            let output = ash(batch.view(), k).unwrap();
            for (sample, out) in batch.axis_iter(Axis(0)).zip(output.axis_iter(Axis(0))) {
                let threshold = percentile(sample.iter(), rank);
                for (&x, &y) in sample.iter().zip(out.iter()) {
                    if x > threshold {
                        prop_assert_eq!(y, x);
                    } else {
                        prop_assert_eq!(y, 0.0);
                    }
                }
            }
        }
    }
}
