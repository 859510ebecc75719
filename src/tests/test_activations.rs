use ndarray::array;
use crate::activations::composite::{falu_d1, falu_d2};
use crate::activations::ParametricActivation;
use crate::builders::ParametricActivationBuilder;

fn with_params(p1: f32, p2: f32, p3: f32, p4: f32) -> ParametricActivation {
    ParametricActivationBuilder::new()
        .p1(p1)
        .p2(p2)
        .p3(p3)
        .p4(p4)
        .build()
        .unwrap()
}

#[test]
fn test_linear_activation() {
    let act = with_params(2.0, 1.0, 1.0, 1.0);
    let output = act.forward(array![1.0, -1.0, 2.0].view(), "linear").unwrap();
    assert_eq!(output, array![2.0, -2.0, 4.0]);
}

#[test]
fn test_relu_activation() {
    let act = ParametricActivation::default();
    let output = act.forward(array![-2.0, 0.0, 3.0].view(), "relu").unwrap();
    assert_eq!(output, array![0.0, 0.0, 3.0]);
}

#[test]
fn test_sigmoid_activation() {
    let act = ParametricActivation::default();
    let output = act.forward(array![0.0].view(), "sigmoid").unwrap();
    assert!((output[0] - 0.5).abs() < 1e-6);
}

#[test]
fn test_scaled_builtins() {
    let act = with_params(3.0, 0.5, 1.0, 1.0);
    let output = act.forward(array![4.0].view(), "tanh").unwrap();
    assert!((output[0] - 3.0 * 2.0f32.tanh()).abs() < 1e-6);

    let output = act.forward(array![std::f32::consts::PI].view(), "sin").unwrap();
    assert!((output[0] - 3.0).abs() < 1e-5);

    let output = act.forward(array![0.0].view(), "cos").unwrap();
    assert!((output[0] - 3.0).abs() < 1e-6);
}

#[test]
fn test_relu6_and_hardtan() {
    let act = ParametricActivation::default();
    let output = act.forward(array![-1.0, 3.0, 8.0].view(), "relu6").unwrap();
    assert_eq!(output, array![0.0, 3.0, 6.0]);

    let output = act.forward(array![-2.0, 0.5, 3.0].view(), "hardtan").unwrap();
    assert_eq!(output, array![-1.0, 0.5, 1.0]);
}

#[test]
fn test_hardswish() {
    let act = ParametricActivation::default();
    let output = act.forward(array![-4.0, 1.0, 4.0].view(), "hardswish").unwrap();
    assert_eq!(output[0], 0.0);
    assert!((output[1] - 4.0 / 6.0).abs() < 1e-6);
    assert!((output[2] - 4.0).abs() < 1e-6);
}

#[test]
fn test_elu_and_selu() {
    let act = ParametricActivation::default();
    let output = act.forward(array![-1.0, 0.0, 1.0].view(), "elu").unwrap();
    assert!((output[0] - (-0.632)).abs() < 0.001);
    assert_eq!(output[1], 0.0);
    assert_eq!(output[2], 1.0);

    let output = act.forward(array![-1.0, 1.0].view(), "selu").unwrap();
    assert!((output[0] - (-1.111_330_7)).abs() < 1e-5);
    assert!((output[1] - 1.050_701).abs() < 1e-5);
}

#[test]
fn test_softplus_family() {
    let act = ParametricActivation::default();
    let output = act.forward(array![0.0, 30.0].view(), "softplus").unwrap();
    assert!((output[0] - std::f32::consts::LN_2).abs() < 1e-6);
    assert_eq!(output[1], 30.0);

    let output = act.forward(array![0.0, -100.0].view(), "logsigmiod").unwrap();
    assert!((output[0] + std::f32::consts::LN_2).abs() < 1e-6);
    assert!((output[1] + 100.0).abs() < 1e-4);

    let output = act.forward(array![1.0].view(), "mish").unwrap();
    assert!((output[0] - 0.865_098_4).abs() < 1e-5);
}

#[test]
fn test_gelu() {
    let act = ParametricActivation::default();
    let output = act.forward(array![0.0, 1.0, -1.0].view(), "gelu").unwrap();

    // GELU(0) = 0
    assert!(output[0].abs() < 1e-6);
    // GELU(1) ≈ 0.8413
    assert!((output[1] - 0.841_344_7).abs() < 1e-5);
    // GELU(-1) ≈ -0.1587
    assert!((output[2] - (-0.158_655_3)).abs() < 1e-5);
}

#[test]
fn test_swish() {
    let act = with_params(2.0, 1.0, 1.0, 1.0);
    let output = act.forward(array![1.0].view(), "swish").unwrap();
    assert!((output[0] - 2.0 * 0.731_058_6).abs() < 1e-5);
}

#[test]
fn test_symlog_symexp() {
    let act = ParametricActivation::default();
    let e_minus_one = std::f32::consts::E - 1.0;

    let output = act.forward(array![0.0, e_minus_one, -e_minus_one].view(), "symlog").unwrap();
    assert_eq!(output[0], 0.0);
    assert!((output[1] - 1.0).abs() < 1e-6);
    assert!((output[2] + 1.0).abs() < 1e-6);

    let output = act.forward(array![0.0, 1.0, -1.0].view(), "symexp").unwrap();
    assert_eq!(output[0], 0.0);
    assert!((output[1] - e_minus_one).abs() < 1e-6);
    assert!((output[2] + e_minus_one).abs() < 1e-6);
}

#[test]
fn test_symlog_inverts_symexp() {
    let act = ParametricActivation::default();
    let x = array![-3.0, -0.25, 0.0, 0.5, 2.0];
    let there = act.forward(x.view(), "symexp").unwrap();
    let back = act.forward(there.view(), "symlog").unwrap();
    for (a, b) in x.iter().zip(back.iter()) {
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn test_acon() {
    let act = with_params(2.0, 0.5, 1.0, 1.0);
    let output = act.forward(array![1.0, 0.0].view(), "acon").unwrap();
    assert!((output[0] - 1.726_361_7).abs() < 1e-5);
    assert_eq!(output[1], 0.0);
}

#[test]
fn test_tanh_soft() {
    let act = ParametricActivation::default();
    let output = act.forward(array![1.0].view(), "TanhSoft-1").unwrap();
    assert!((output[0] - 1.000_172_4).abs() < 1e-5);

    let output = act.forward(array![0.0, 1.0].view(), "TanhSoft-2").unwrap();
    assert_eq!(output[0], 0.0);
    assert!((output[1] - 0.991_328_9).abs() < 1e-5);
}

#[test]
fn test_srs() {
    let act = ParametricActivation::default();
    let output = act.forward(array![0.0, 1.0].view(), "srs").unwrap();
    assert_eq!(output[0], 0.0);
    assert!((output[1] - 0.731_058_6).abs() < 1e-5);
}

#[test]
fn test_srelu_uses_first_four_coefficients() {
    // t_left = -1, t_right = 2, a_left = 0.1, a_right = 3
    let act = with_params(-1.0, 2.0, 0.1, 3.0);
    let output = act.forward(array![-3.0, 0.5, 4.0].view(), "SRelu").unwrap();
    assert!((output[0] - (-0.2)).abs() < 1e-6);
    assert!((output[1] - 1.5).abs() < 1e-6);
    assert!((output[2] - 9.0).abs() < 1e-5);
}

#[test]
fn test_falu_boundary_routes_to_second_blend() {
    let act = with_params(1.0, 1.0, 1.0, 1.0);
    let output = act.forward(array![1.0, -0.5].view(), "FALU").unwrap();
    assert_eq!(output[0], falu_d2(1.0, 0.0));
    assert_eq!(output[1], falu_d2(-0.5, 0.0));
    assert!((output[0] - 0.927_670_5).abs() < 1e-5);
}

#[test]
fn test_falu_branches() {
    let act = with_params(0.5, 1.0, 1.0, 1.0);
    let output = act.forward(array![1.0, 0.0].view(), "FALU").unwrap();
    assert_eq!(output[0], falu_d1(1.0, 0.5));
    assert!((output[0] - 0.829_364_5).abs() < 1e-5);
    // D1(0, a) = a * sigmoid(0)
    assert!((output[1] - 0.25).abs() < 1e-6);

    let act = with_params(1.5, 1.0, 1.0, 1.0);
    let output = act.forward(array![1.0].view(), "FALU").unwrap();
    assert!((output[0] - 0.615_018_3).abs() < 1e-5);
}

#[test]
fn test_elish_branches_on_raw_input() {
    // with p2 < 0 the raw input and the scaled input have opposite signs
    let act = with_params(1.0, -1.0, 1.0, 1.0);
    let output = act.forward(array![1.0, -1.0].view(), "elish").unwrap();
    // x = 1 >= 0: sigmoid(-1) * 1
    assert!((output[0] - 0.268_941_4).abs() < 1e-5);
    // x = -1 < 0: elu(1) * sigmoid(1)
    assert!((output[1] - 0.731_058_6).abs() < 1e-5);
}

#[test]
fn test_hard_elish_branches_on_raw_input() {
    let act = with_params(1.0, -1.0, 1.0, 1.0);
    let output = act.forward(array![1.0, -1.0].view(), "hard_elish").unwrap();
    // hard_sigmoid(-1) * 1
    assert!((output[0] - 0.3).abs() < 1e-6);
    // elu(1) * hard_sigmoid(1)
    assert!((output[1] - 0.7).abs() < 1e-6);

    let act = ParametricActivation::default();
    let output = act.forward(array![-1.0, 2.0, 5.0].view(), "hard_elish").unwrap();
    assert!((output[0] - (-0.189_636_2)).abs() < 1e-5);
    assert!((output[1] - 1.8).abs() < 1e-6);
    // hard sigmoid saturates at 1
    assert!((output[2] - 5.0).abs() < 1e-6);
}

#[test]
fn test_elish_is_continuous_at_zero_for_positive_scale() {
    let act = with_params(1.0, 2.0, 1.0, 1.0);
    let output = act.forward(array![-1e-4, 0.0, 1e-4].view(), "elish").unwrap();
    assert!(output.iter().all(|v| v.abs() < 1e-3));
}
