use ndarray::{Array1, Array2, ArrayView1, Axis};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

use crate::activations::Activation;
use crate::dropout;
use crate::error::Result;
use crate::loss::{Loss, LossFunction};

/// Caller-supplied scoring function for `test`, mapping an (output, answer)
/// pair to a validity score in `[0, 1]`.
pub type Validator = dyn Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64;

/// Configuration of a network: hyperparameters and the fixed outer shape.
///
/// `number_of_layers` counts the input layer, so a network with one hidden
/// layer has three layers in total.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub learning_rate: f64,
    pub batch_size: usize,
    pub number_of_layers: usize,
    pub input_size: usize,
    pub output_size: usize,
}

/// A fully-connected feedforward neural network trained by mini-batch
/// gradient descent.
///
/// The network owns one buffer per layer for every quantity involved in
/// training: weights and biases (the parameters), pre-activation inputs,
/// post-activation outputs, backpropagated error terms, gradient
/// accumulators, and dropout state. Index 0 is the input layer, which has no
/// parameters; `weights[l]` has shape `structure[l] × structure[l-1]`, entry
/// `[j, k]` weighting the connection from neuron `k` of layer `l-1` to
/// neuron `j` of layer `l`.
///
/// All randomness (weight initialization, sample shuffling, dropout
/// sampling) comes from one owned generator, seedable through
/// [`Network::with_seed`] for reproducible runs. The generator is not part
/// of the persisted state; a loaded network continues with fresh entropy.
#[derive(Serialize, Deserialize)]
pub struct Network {
    config: NetworkConfig,
    structure: Vec<usize>,
    activations: Vec<Option<Activation>>,
    loss_function: LossFunction,
    pub weights: Vec<Array2<f64>>,
    pub biases: Vec<Array1<f64>>,
    inputs: Vec<Array1<f64>>,
    outputs: Vec<Array1<f64>>,
    errors: Vec<Array1<f64>>,
    weight_gradients: Vec<Array2<f64>>,
    bias_gradients: Vec<Array1<f64>>,
    drop_probabilities: Vec<f64>,
    dropout_masks: Vec<Array1<f64>>,
    #[serde(skip, default = "entropy_rng")]
    rng: StdRng,
}

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

impl Network {
    /// Create a network with the given configuration. The input layer is
    /// allocated immediately; hidden and output layers are appended with
    /// [`Network::add_layer`] afterwards.
    pub fn new(config: NetworkConfig) -> Self {
        assert!(
            config.learning_rate > 0.0 && config.learning_rate.is_finite(),
            "learning rate must be positive, got {}",
            config.learning_rate
        );
        assert!(config.batch_size >= 1, "batch size must be at least 1");
        assert!(
            config.number_of_layers >= 2,
            "a network needs at least an input and an output layer"
        );
        assert!(config.input_size >= 1, "input size must be at least 1");
        assert!(config.output_size >= 1, "output size must be at least 1");

        let input_size = config.input_size;

        Network {
            config,
            structure: vec![input_size],
            activations: vec![None],
            loss_function: LossFunction::default(),
            weights: vec![Array2::zeros((0, 0))],
            biases: vec![Array1::zeros(input_size)],
            inputs: vec![Array1::zeros(input_size)],
            outputs: vec![Array1::zeros(input_size)],
            errors: vec![Array1::zeros(input_size)],
            weight_gradients: vec![Array2::zeros((0, 0))],
            bias_gradients: vec![Array1::zeros(input_size)],
            drop_probabilities: vec![0.0],
            dropout_masks: vec![dropout::identity_mask(input_size)],
            rng: entropy_rng(),
        }
    }

    /// Seed the network's random generator, making initialization, shuffle
    /// order, and dropout sampling reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the loss function used by `train` and `test`.
    pub fn set_loss_function(&mut self, loss_function: LossFunction) {
        self.loss_function = loss_function;
    }

    /// Append a layer with no dropout. Layers must be added in order, from
    /// the first hidden layer to the output layer.
    pub fn add_layer(&mut self, activation: Activation, width: usize) {
        self.add_layer_with_dropout(activation, width, 0.0);
    }

    /// Append a layer whose outputs are dropped with the given probability
    /// during training forward passes. The rate is ignored on the output
    /// layer, which is never masked.
    pub fn add_layer_with_dropout(&mut self, activation: Activation, width: usize, rate: f64) {
        assert!(width >= 1, "layer width must be at least 1");
        assert!(
            (0.0..1.0).contains(&rate),
            "dropout rate must be in [0, 1), got {}",
            rate
        );
        assert!(
            self.structure.len() < self.config.number_of_layers,
            "network already has its {} layers",
            self.config.number_of_layers
        );

        let previous = *self.structure.last().expect("input layer always present");

        self.weights.push(Array2::zeros((width, previous)));
        self.biases.push(Array1::zeros(width));
        self.inputs.push(Array1::zeros(width));
        self.outputs.push(Array1::zeros(width));
        self.errors.push(Array1::zeros(width));
        self.weight_gradients.push(Array2::zeros((width, previous)));
        self.bias_gradients.push(Array1::zeros(width));
        self.structure.push(width);
        self.activations.push(Some(activation));
        self.drop_probabilities.push(rate);
        self.dropout_masks.push(dropout::identity_mask(width));

        if self.structure.len() == self.config.number_of_layers {
            assert_eq!(
                width, self.config.output_size,
                "output layer width must match the configured output size"
            );
        }
    }

    /// Draw every weight and bias from a Gaussian distribution with mean 0
    /// and unit variance. The input layer has no parameters and is left
    /// untouched.
    pub fn init(&mut self) {
        self.assert_topology_complete();

        for l in 1..self.config.number_of_layers {
            self.biases[l] = Array1::random_using(self.structure[l], StandardNormal, &mut self.rng);
            self.weights[l] = Array2::random_using(
                (self.structure[l], self.structure[l - 1]),
                StandardNormal,
                &mut self.rng,
            );
        }
    }

    /// Train on one mini-batch drawn from the given samples and return its
    /// mean loss.
    ///
    /// The sample order is shuffled, at most `batch_size` samples are
    /// consumed (all of them when fewer are supplied), their gradients are
    /// accumulated, and exactly one gradient-descent update is applied.
    /// Iterating over a full epoch of mini-batches is the caller's loop.
    pub fn train(&mut self, input_set: &[Array1<f64>], answer_set: &[Array1<f64>]) -> f64 {
        self.assert_topology_complete();
        self.assert_dataset(input_set, answer_set);

        let output_layer = self.config.number_of_layers - 1;
        let inv_batch = 1.0 / self.config.batch_size as f64;

        let mut order: Vec<usize> = (0..input_set.len()).collect();
        order.shuffle(&mut self.rng);

        let mut loss = 0.0;
        for &n in order.iter().take(self.config.batch_size) {
            self.forward_propagate(input_set[n].view(), true);
            self.backward_propagate(answer_set[n].view());

            loss += self
                .loss_function
                .compute(self.outputs[output_layer].view(), answer_set[n].view())
                * inv_batch;
        }

        self.update();

        loss
    }

    /// Evaluate the network over every given sample without touching the
    /// parameters. Dropout is disabled. Returns the mean loss and, when a
    /// validator is supplied, the mean validity; the validity is 0 otherwise.
    pub fn test(
        &mut self,
        input_set: &[Array1<f64>],
        answer_set: &[Array1<f64>],
        validator: Option<&Validator>,
    ) -> (f64, f64) {
        self.assert_topology_complete();
        self.assert_dataset(input_set, answer_set);

        let output_layer = self.config.number_of_layers - 1;
        let count = input_set.len() as f64;

        let mut loss = 0.0;
        let mut validity = 0.0;
        for (input, answer) in input_set.iter().zip(answer_set.iter()) {
            self.forward_propagate(input.view(), false);

            loss += self
                .loss_function
                .compute(self.outputs[output_layer].view(), answer.view())
                / count;

            if let Some(validator) = validator {
                validity += validator(self.outputs[output_layer].view(), answer.view()) / count;
            }
        }

        (loss, validity)
    }

    /// Run a single inference forward pass (no dropout) and return the
    /// output-layer vector.
    pub fn calculate(&mut self, input: ArrayView1<f64>) -> Array1<f64> {
        self.assert_topology_complete();
        self.forward_propagate(input, false);
        self.outputs[self.config.number_of_layers - 1].clone()
    }

    /// Output of the output layer from the most recent forward pass.
    pub fn output(&self) -> ArrayView1<f64> {
        self.layer_output(self.config.number_of_layers - 1)
    }

    /// Output of layer `l` from the most recent forward pass.
    pub fn layer_output(&self, l: usize) -> ArrayView1<f64> {
        assert!(l < self.outputs.len(), "no layer {} in this network", l);
        self.outputs[l].view()
    }

    /// Error terms of the output layer from the most recent backward pass.
    pub fn errors(&self) -> ArrayView1<f64> {
        self.layer_errors(self.config.number_of_layers - 1)
    }

    /// Error terms of layer `l` from the most recent backward pass.
    pub fn layer_errors(&self, l: usize) -> ArrayView1<f64> {
        assert!(l < self.errors.len(), "no layer {} in this network", l);
        self.errors[l].view()
    }

    /// Accumulated weight gradients of layer `l`.
    pub fn weight_gradient(&self, l: usize) -> ndarray::ArrayView2<f64> {
        assert!(
            (1..self.weight_gradients.len()).contains(&l),
            "layer {} has no weight gradients",
            l
        );
        self.weight_gradients[l].view()
    }

    /// Accumulated bias gradients of layer `l`.
    pub fn bias_gradient(&self, l: usize) -> ArrayView1<f64> {
        assert!(
            (1..self.bias_gradients.len()).contains(&l),
            "layer {} has no bias gradients",
            l
        );
        self.bias_gradients[l].view()
    }

    /// Neuron counts per layer, input layer first.
    pub fn structure(&self) -> &[usize] {
        &self.structure
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn loss_function(&self) -> &LossFunction {
        &self.loss_function
    }

    pub fn drop_probabilities(&self) -> &[f64] {
        &self.drop_probabilities
    }

    /// Save the network's state to a file as an opaque serialized blob.
    pub fn save(&self, path: &str) -> Result<()> {
        let serialized = bincode::serialize(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(&serialized)?;
        Ok(())
    }

    /// Load a network from a file written by [`Network::save`]. The restored
    /// network computes bit-identical outputs to the saved one.
    pub fn load(path: &str) -> Result<Self> {
        let mut file = fs::File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        let deserialized: Self = bincode::deserialize(&buffer)?;
        Ok(deserialized)
    }

    /// Forward propagation: for each layer `l`, the pre-activation input is
    /// `weights[l] · outputs[l-1] + biases[l]` and the output is the
    /// activated value scaled by the layer's dropout mask. Masks are
    /// resampled once per training pass; inference passes use the identity
    /// mask everywhere.
    fn forward_propagate(&mut self, input: ArrayView1<f64>, training: bool) {
        assert_eq!(
            input.len(),
            self.config.input_size,
            "input length {} does not match the configured input size {}",
            input.len(),
            self.config.input_size
        );

        self.outputs[0].assign(&input);

        let output_layer = self.config.number_of_layers - 1;
        for l in 1..=output_layer {
            self.dropout_masks[l] = if training && l != output_layer {
                dropout::sample_mask(self.structure[l], self.drop_probabilities[l], &mut self.rng)
            } else {
                dropout::identity_mask(self.structure[l])
            };

            self.inputs[l] = self.weights[l].dot(&self.outputs[l - 1]) + &self.biases[l];

            let activation = self.activations[l].expect("non-input layer has an activation");
            let mut activated = self.inputs[l].clone();
            activation.apply(&mut activated);
            self.outputs[l] = activated * &self.dropout_masks[l];
        }
    }

    /// Backward propagation: seed the output-layer error with the loss
    /// derivative, chain it backwards through the weights and activation
    /// derivatives, and accumulate parameter gradients scaled by
    /// `1 / batch_size`.
    fn backward_propagate(&mut self, answer: ArrayView1<f64>) {
        assert_eq!(
            answer.len(),
            self.config.output_size,
            "answer length {} does not match the configured output size {}",
            answer.len(),
            self.config.output_size
        );

        let output_layer = self.config.number_of_layers - 1;
        let inv_batch = 1.0 / self.config.batch_size as f64;

        self.errors[output_layer] = self
            .loss_function
            .gradient(self.outputs[output_layer].view(), answer);

        for l in (1..output_layer).rev() {
            let activation = self.activations[l].expect("non-input layer has an activation");
            let propagated = self.weights[l + 1].t().dot(&self.errors[l + 1]);
            self.errors[l] = propagated * activation.derivative(&self.inputs[l]);
        }

        for l in 1..=output_layer {
            self.bias_gradients[l].scaled_add(inv_batch, &self.errors[l]);

            let outer = self.errors[l]
                .view()
                .insert_axis(Axis(1))
                .dot(&self.outputs[l - 1].view().insert_axis(Axis(0)));
            self.weight_gradients[l].scaled_add(inv_batch, &outer);
        }
    }

    /// Apply one gradient-descent step and reset the accumulators.
    fn update(&mut self) {
        let lr = self.config.learning_rate;
        for l in 1..self.config.number_of_layers {
            self.biases[l].scaled_add(-lr, &self.bias_gradients[l]);
            self.weights[l].scaled_add(-lr, &self.weight_gradients[l]);
        }
        self.clear_gradients();
    }

    /// Run forward and backward propagation for one sample without updating
    /// the parameters, leaving the gradients in the accumulators.
    pub(crate) fn accumulate_gradients(&mut self, input: ArrayView1<f64>, answer: ArrayView1<f64>) {
        self.assert_topology_complete();
        self.forward_propagate(input, true);
        self.backward_propagate(answer);
    }

    /// Zero both gradient accumulators.
    pub(crate) fn clear_gradients(&mut self) {
        for l in 1..self.config.number_of_layers {
            self.bias_gradients[l].fill(0.0);
            self.weight_gradients[l].fill(0.0);
        }
    }

    fn assert_topology_complete(&self) {
        assert_eq!(
            self.structure.len(),
            self.config.number_of_layers,
            "network has {} of {} layers; add the remaining layers first",
            self.structure.len(),
            self.config.number_of_layers
        );
    }

    fn assert_dataset(&self, input_set: &[Array1<f64>], answer_set: &[Array1<f64>]) {
        assert!(!input_set.is_empty(), "sample set must not be empty");
        assert_eq!(
            input_set.len(),
            answer_set.len(),
            "every input needs exactly one answer"
        );
    }
}
