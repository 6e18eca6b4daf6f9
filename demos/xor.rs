/***
# XOR.

* The four XOR points, learned by a 2-4-1 network with a rectifier hidden
  layer, a sigmoid output, and cross-entropy loss.
* One epoch trains on the full four-point batch; a few hundred epochs are
  usually enough for a perfect classifier.
***/

use ndarray::{arr1, Array1, ArrayView1};
use rand::rngs::StdRng;

use synapse::activations::Activation;
use synapse::loss::LossFunction;
use synapse::network::{Network, NetworkConfig, Validator};
use synapse::simulator::{Problem, Simulator};

const EPOCHS: usize = 2000;

struct Xor;

fn xor_points() -> Vec<Array1<f64>> {
    vec![
        arr1(&[0.0, 0.0]),
        arr1(&[0.0, 1.0]),
        arr1(&[1.0, 0.0]),
        arr1(&[1.0, 1.0]),
    ]
}

impl Problem for Xor {
    fn config(&self) -> NetworkConfig {
        NetworkConfig {
            learning_rate: 1.0,
            batch_size: 4,
            number_of_layers: 3,
            input_size: 2,
            output_size: 1,
        }
    }

    fn epochs(&self) -> usize {
        EPOCHS
    }

    fn setup(&self, network: &mut Network) {
        network.set_loss_function(LossFunction::cross_entropy());
        network.add_layer(Activation::Rectifier, 4);
        network.add_layer(Activation::Sigmoid, 1);
    }

    fn training_data(&self, _rng: &mut StdRng) -> Vec<Array1<f64>> {
        xor_points()
    }

    fn testing_data(&self, _rng: &mut StdRng) -> Vec<Array1<f64>> {
        xor_points()
    }

    fn answer(&self, input: ArrayView1<f64>) -> Array1<f64> {
        let bit = (input[0] > 0.5) != (input[1] > 0.5);
        arr1(&[if bit { 1.0 } else { 0.0 }])
    }

    fn validator(&self) -> Option<Box<Validator>> {
        Some(Box::new(|output, answer| {
            if (output[0] > 0.5) == (answer[0] > 0.5) {
                1.0
            } else {
                0.0
            }
        }))
    }
}

fn main() {
    let mut simulator = Simulator::with_seed(Xor, 42);
    simulator.run().expect("xor simulation failed");

    for input in xor_points() {
        let output = simulator.network_mut().calculate(input.view());
        println!(
            "{} xor {} -> {:.3}",
            input[0] as u8, input[1] as u8, output[0]
        );
    }
}
