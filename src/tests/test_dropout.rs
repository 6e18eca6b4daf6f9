use crate::activations::Activation;
use crate::dropout;
use crate::network::{Network, NetworkConfig};
use ndarray::arr1;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> NetworkConfig {
    NetworkConfig {
        learning_rate: 0.1,
        batch_size: 2,
        number_of_layers: 3,
        input_size: 2,
        output_size: 1,
    }
}

#[test]
fn test_zero_rate_is_the_identity_mask() {
    let mut rng = StdRng::seed_from_u64(1);
    let mask = dropout::sample_mask(16, 0.0, &mut rng);
    assert_eq!(mask, dropout::identity_mask(16));
}

#[test]
fn test_mask_values_are_zero_or_inverted_keep_scale() {
    let mut rng = StdRng::seed_from_u64(1);
    let rate = 0.3;
    let scale = 1.0 / (1.0 - rate);

    let mask = dropout::sample_mask(1000, rate, &mut rng);
    let mut dropped = 0;
    for &value in mask.iter() {
        assert!(value == 0.0 || value == scale);
        if value == 0.0 {
            dropped += 1;
        }
    }

    // Around 300 of 1000 should be dropped; allow a generous margin.
    assert!(dropped > 200 && dropped < 400);
}

#[test]
fn test_extreme_rate_stays_finite() {
    let mut rng = StdRng::seed_from_u64(1);
    let mask = dropout::sample_mask(100, 0.999, &mut rng);
    assert!(mask.iter().all(|v| v.is_finite()));
}

#[test]
#[should_panic]
fn test_rate_of_one_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    dropout::sample_mask(4, 1.0, &mut rng);
}

#[test]
fn test_inference_ignores_dropout() {
    let mut network = Network::new(config()).with_seed(11);
    network.add_layer_with_dropout(Activation::Rectifier, 8, 0.5);
    network.add_layer(Activation::Sigmoid, 1);
    network.init();

    let input = arr1(&[0.3, -0.7]);
    let first = network.calculate(input.view());
    let second = network.calculate(input.view());

    // No masks are sampled outside training, so inference is deterministic.
    assert_eq!(first, second);
}

#[test]
fn test_test_pass_ignores_dropout() {
    let mut network = Network::new(config()).with_seed(11);
    network.add_layer_with_dropout(Activation::Rectifier, 8, 0.5);
    network.add_layer(Activation::Sigmoid, 1);
    network.init();

    let inputs = vec![arr1(&[0.0, 1.0]), arr1(&[1.0, 0.0])];
    let answers = vec![arr1(&[1.0]), arr1(&[0.0])];

    let (first_loss, _) = network.test(&inputs, &answers, None);
    let (second_loss, _) = network.test(&inputs, &answers, None);
    assert_eq!(first_loss, second_loss);
}

#[test]
fn test_training_with_dropout_stays_finite() {
    let mut network = Network::new(config()).with_seed(11);
    network.add_layer_with_dropout(Activation::Rectifier, 8, 0.5);
    network.add_layer(Activation::Sigmoid, 1);
    network.init();

    let inputs = vec![arr1(&[0.0, 1.0]), arr1(&[1.0, 0.0])];
    let answers = vec![arr1(&[1.0]), arr1(&[0.0])];

    for _ in 0..50 {
        let loss = network.train(&inputs, &answers);
        assert!(loss.is_finite());
    }
    assert!(network.weights[1].iter().all(|w| w.is_finite()));
    assert!(network.weights[2].iter().all(|w| w.is_finite()));
}
