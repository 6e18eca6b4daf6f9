//! Inverted-dropout mask sampling.
//!
//! During a training forward pass each hidden-layer neuron independently
//! survives with probability `1 - rate`. Survivors are scaled by
//! `1 / (1 - rate)` so the expected activation magnitude is unchanged, which
//! lets inference run with no mask at all. The input and output layers are
//! never masked.

use ndarray::Array1;
use rand::Rng;

/// Sample a dropout mask for one layer.
///
/// Each entry is `1 / (1 - rate)` with probability `1 - rate` and `0.0`
/// otherwise. A rate of zero yields the identity mask without consuming
/// randomness.
pub fn sample_mask<R: Rng>(size: usize, rate: f64, rng: &mut R) -> Array1<f64> {
    assert!(
        (0.0..1.0).contains(&rate),
        "dropout rate must be in [0, 1), got {}",
        rate
    );

    if rate == 0.0 {
        return identity_mask(size);
    }

    let scale = 1.0 / (1.0 - rate);
    Array1::from_shape_fn(size, |_| {
        if rng.gen::<f64>() >= rate {
            scale
        } else {
            0.0
        }
    })
}

/// The mask that leaves a layer untouched.
pub fn identity_mask(size: usize) -> Array1<f64> {
    Array1::ones(size)
}
