/***
# Donut classification.

* Points are drawn from a 2D standard Gaussian.
* A point is labeled +1 when its squared radius lies in (1, 4) - inside the
  donut - and -1 otherwise.
* A 2-32-64-32-1 network with a tanh output learns the ring boundary.
* The trained model is cached next to the binary; delete `donut.model` to
  retrain from scratch.
***/

use ndarray::{arr1, Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::StandardNormal;

use synapse::activations::Activation;
use synapse::loss::LossFunction;
use synapse::network::{Network, NetworkConfig, Validator};
use synapse::simulator::{Problem, Simulator};

const EPOCHS: usize = 300;
const TRAINING_SAMPLES: usize = 5000;
const TESTING_SAMPLES: usize = 500;

struct Donut;

impl Donut {
    fn gaussian_points(&self, count: usize, rng: &mut StdRng) -> Vec<Array1<f64>> {
        (0..count)
            .map(|_| {
                let x: f64 = rng.sample(StandardNormal);
                let y: f64 = rng.sample(StandardNormal);
                arr1(&[x, y])
            })
            .collect()
    }
}

impl Problem for Donut {
    fn config(&self) -> NetworkConfig {
        NetworkConfig {
            learning_rate: 0.005,
            batch_size: 16,
            number_of_layers: 5,
            input_size: 2,
            output_size: 1,
        }
    }

    fn epochs(&self) -> usize {
        EPOCHS
    }

    fn model_path(&self) -> Option<&str> {
        Some("donut.model")
    }

    fn metrics_path(&self) -> Option<&str> {
        Some("donut.csv")
    }

    fn setup(&self, network: &mut Network) {
        network.set_loss_function(LossFunction::mean_square());
        network.add_layer(Activation::Rectifier, 32);
        network.add_layer(Activation::Sigmoid, 64);
        network.add_layer(Activation::Rectifier, 32);
        network.add_layer(
            Activation::Tanh {
                max: 1.0,
                offset: 0.0,
            },
            1,
        );
    }

    fn training_data(&self, rng: &mut StdRng) -> Vec<Array1<f64>> {
        self.gaussian_points(TRAINING_SAMPLES, rng)
    }

    fn testing_data(&self, rng: &mut StdRng) -> Vec<Array1<f64>> {
        self.gaussian_points(TESTING_SAMPLES, rng)
    }

    fn answer(&self, input: ArrayView1<f64>) -> Array1<f64> {
        let radius = input[0] * input[0] + input[1] * input[1];
        if 1.0 < radius && radius < 4.0 {
            arr1(&[1.0])
        } else {
            arr1(&[-1.0])
        }
    }

    fn validator(&self) -> Option<Box<Validator>> {
        // Correct whenever output and answer agree in sign.
        Some(Box::new(|output, answer| {
            if output[0] * answer[0] > 0.0 {
                1.0
            } else {
                0.0
            }
        }))
    }
}

fn main() {
    let mut simulator = Simulator::with_seed(Donut, 2024);
    simulator.run().expect("donut simulation failed");

    let record = simulator
        .tracker()
        .last()
        .expect("simulation produced no records");
    println!(
        "Finished: testing loss {:.4}, validity {:.1}%",
        record.testing_loss,
        record.validity * 100.0
    );
}
