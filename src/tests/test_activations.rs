use crate::activations::Activation;
use ndarray::arr1;

#[test]
fn test_linear() {
    let linear = Activation::Linear;
    assert_eq!(linear.activate(3.0), 3.0);
    assert_eq!(linear.activate(-1.5), -1.5);
    assert_eq!(linear.differentiate(3.0), 1.0);
    assert_eq!(linear.differentiate(-1.5), 1.0);
}

#[test]
fn test_rectifier() {
    let rectifier = Activation::Rectifier;
    assert_eq!(rectifier.activate(2.0), 2.0);
    assert_eq!(rectifier.activate(-2.0), 0.0);
    assert_eq!(rectifier.differentiate(2.0), 1.0);
    assert_eq!(rectifier.differentiate(0.0), 1.0);
    assert_eq!(rectifier.differentiate(-2.0), 0.0);
}

#[test]
fn test_sigmoid() {
    let sigmoid = Activation::Sigmoid;
    assert_eq!(sigmoid.activate(0.0), 0.5);
    assert!((sigmoid.activate(2.0) - 0.8807970779778823).abs() < 1e-12);
    assert_eq!(sigmoid.differentiate(0.0), 0.25);

    // Derivative equals y * (1 - y) at the same pre-activation value.
    let y = sigmoid.activate(1.3);
    assert!((sigmoid.differentiate(1.3) - y * (1.0 - y)).abs() < 1e-12);
}

#[test]
fn test_tanh_scale_and_offset() {
    let tanh = Activation::Tanh {
        max: 2.0,
        offset: 1.0,
    };
    assert_eq!(tanh.activate(0.0), 2.0);
    assert_eq!(tanh.differentiate(0.0), 2.0);

    let t = 0.7f64.tanh();
    assert!((tanh.activate(0.7) - 2.0 * (t + 1.0)).abs() < 1e-12);
    assert!((tanh.differentiate(0.7) - 2.0 * (1.0 - t * t)).abs() < 1e-12);

    // The offset shifts the output but not the slope.
    let plain = Activation::Tanh {
        max: 2.0,
        offset: 0.0,
    };
    assert_eq!(tanh.differentiate(0.7), plain.differentiate(0.7));
}

#[test]
fn test_sine() {
    let sine = Activation::Sine {
        max: 1.5,
        offset: 0.5,
    };
    assert_eq!(sine.activate(0.0), 0.75);
    assert_eq!(sine.differentiate(0.0), 1.5);

    let x = std::f64::consts::FRAC_PI_2;
    assert!((sine.activate(x) - 1.5 * 1.5).abs() < 1e-12);
    assert!(sine.differentiate(x).abs() < 1e-12);
}

#[test]
fn test_array_apply_matches_scalar() {
    let sigmoid = Activation::Sigmoid;
    let input = arr1(&[-2.0, 0.0, 0.5, 3.0]);

    let mut applied = input.clone();
    sigmoid.apply(&mut applied);
    let derivative = sigmoid.derivative(&input);

    for (i, &x) in input.iter().enumerate() {
        assert_eq!(applied[i], sigmoid.activate(x));
        assert_eq!(derivative[i], sigmoid.differentiate(x));
    }
}
