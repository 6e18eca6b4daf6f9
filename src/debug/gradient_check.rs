use ndarray::ArrayView1;

use crate::loss::Loss;
use crate::network::Network;

/// Verify backpropagated gradients against central finite differences.
///
/// Accumulates the analytic gradients for one sample, then perturbs every
/// weight and bias by `±epsilon`, re-runs the forward pass, and compares the
/// resulting numerical gradient against the analytic one. Returns the
/// maximum relative error over all parameters.
///
/// The comparison is only meaningful when both paths compute the same
/// quantity, so the network must have `batch_size == 1`, no dropout, and a
/// loss whose derivative is exact for its output activation (mean-square
/// with a linear output, or cross-entropy with sigmoid outputs).
///
/// The gradient accumulators are cleared before returning.
pub fn gradient_check(
    network: &mut Network,
    input: ArrayView1<f64>,
    answer: ArrayView1<f64>,
    epsilon: f64,
) -> f64 {
    assert_eq!(
        network.config().batch_size,
        1,
        "gradient check requires batch_size == 1"
    );
    assert!(
        network.drop_probabilities().iter().all(|&rate| rate == 0.0),
        "gradient check requires dropout to be disabled"
    );
    assert!(epsilon > 0.0, "epsilon must be positive");

    network.clear_gradients();
    network.accumulate_gradients(input, answer);

    let layers = network.structure().len();
    let analytic_weights: Vec<_> = (1..layers)
        .map(|l| network.weight_gradient(l).to_owned())
        .collect();
    let analytic_biases: Vec<_> = (1..layers)
        .map(|l| network.bias_gradient(l).to_owned())
        .collect();

    let mut max_relative_error: f64 = 0.0;

    for l in 1..layers {
        let (rows, cols) = {
            let shape = network.weights[l].dim();
            (shape.0, shape.1)
        };

        for j in 0..rows {
            for k in 0..cols {
                let original = network.weights[l][[j, k]];

                network.weights[l][[j, k]] = original + epsilon;
                let loss_plus = sample_loss(network, input, answer);

                network.weights[l][[j, k]] = original - epsilon;
                let loss_minus = sample_loss(network, input, answer);

                network.weights[l][[j, k]] = original;

                let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
                let analytic = analytic_weights[l - 1][[j, k]];
                max_relative_error = max_relative_error.max(relative_error(analytic, numerical));
            }
        }

        for j in 0..network.biases[l].len() {
            let original = network.biases[l][j];

            network.biases[l][j] = original + epsilon;
            let loss_plus = sample_loss(network, input, answer);

            network.biases[l][j] = original - epsilon;
            let loss_minus = sample_loss(network, input, answer);

            network.biases[l][j] = original;

            let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
            let analytic = analytic_biases[l - 1][j];
            max_relative_error = max_relative_error.max(relative_error(analytic, numerical));
        }
    }

    network.clear_gradients();

    max_relative_error
}

fn sample_loss(network: &mut Network, input: ArrayView1<f64>, answer: ArrayView1<f64>) -> f64 {
    let output = network.calculate(input);
    network.loss_function().compute(output.view(), answer)
}

fn relative_error(analytic: f64, numerical: f64) -> f64 {
    let scale = analytic.abs().max(numerical.abs());
    if scale < 1e-12 {
        0.0
    } else {
        (analytic - numerical).abs() / scale
    }
}
