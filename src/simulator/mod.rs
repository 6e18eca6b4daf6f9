//! # Simulator Module
//!
//! The training-loop driver. A [`Problem`] describes everything specific to
//! one learning task: the network configuration and layers, how to generate
//! training and testing data, how to label an input with its answer, and
//! optionally how to validate an output. The [`Simulator`] owns the loop
//! around it: restore a cached model (or initialize a fresh one), run one
//! mini-batch of training plus a full test pass per epoch, track metrics,
//! render progress, and persist the results.

pub mod progress;

use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::metrics::MetricsTracker;
use crate::network::{Network, NetworkConfig, Validator};
use progress::ProgressBar;

/// A learning task the simulator can drive.
pub trait Problem {
    /// Network configuration for this problem.
    fn config(&self) -> NetworkConfig;

    /// Number of epochs to run.
    fn epochs(&self) -> usize;

    /// Path of the cached model file, if the problem persists one.
    fn model_path(&self) -> Option<&str> {
        None
    }

    /// Path of the exported metrics CSV, if any.
    fn metrics_path(&self) -> Option<&str> {
        None
    }

    /// Attach the loss function and add every layer to a fresh network.
    fn setup(&self, network: &mut Network);

    /// Generate the training inputs.
    fn training_data(&self, rng: &mut StdRng) -> Vec<Array1<f64>>;

    /// Generate the testing inputs.
    fn testing_data(&self, rng: &mut StdRng) -> Vec<Array1<f64>>;

    /// Label an input with its expected answer.
    fn answer(&self, input: ArrayView1<f64>) -> Array1<f64>;

    /// Scoring function for the test pass, if the problem has one.
    fn validator(&self) -> Option<Box<Validator>> {
        None
    }
}

/// Drives a [`Problem`] through its epochs.
pub struct Simulator<P: Problem> {
    problem: P,
    network: Network,
    tracker: MetricsTracker,
    rng: StdRng,
    silent: bool,
}

impl<P: Problem> Simulator<P> {
    /// Build a simulator, restoring the problem's cached model when one
    /// loads cleanly.
    pub fn new(problem: P) -> Self {
        Self::build(problem, None)
    }

    /// Like [`Simulator::new`], with every random source seeded for a
    /// reproducible run.
    pub fn with_seed(problem: P, seed: u64) -> Self {
        Self::build(problem, Some(seed))
    }

    fn build(problem: P, seed: Option<u64>) -> Self {
        // A cached model that is missing or unreadable falls back to fresh
        // random initialization.
        let cached = problem.model_path().and_then(|path| Network::load(path).ok());

        let network = match cached {
            Some(network) => network,
            None => {
                let mut network = Network::new(problem.config());
                if let Some(seed) = seed {
                    network = network.with_seed(seed);
                }
                problem.setup(&mut network);
                network.init();
                network
            }
        };

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        Simulator {
            problem,
            network,
            tracker: MetricsTracker::new(),
            rng,
            silent: false,
        }
    }

    /// Disable the progress display.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Run every epoch: one mini-batch of training and a full test pass per
    /// epoch. Saves the model and exports metrics afterwards when the
    /// problem asks for either.
    pub fn run(&mut self) -> Result<()> {
        let training_inputs = self.problem.training_data(&mut self.rng);
        let training_answers: Vec<Array1<f64>> = training_inputs
            .iter()
            .map(|input| self.problem.answer(input.view()))
            .collect();

        let testing_inputs = self.problem.testing_data(&mut self.rng);
        let testing_answers: Vec<Array1<f64>> = testing_inputs
            .iter()
            .map(|input| self.problem.answer(input.view()))
            .collect();

        let validator = self.problem.validator();
        let epochs = self.problem.epochs();
        let mut progress = ProgressBar::new(epochs);

        for epoch in 1..=epochs {
            let training_loss = self.network.train(&training_inputs, &training_answers);

            let (testing_loss, validity) =
                self.network
                    .test(&testing_inputs, &testing_answers, validator.as_deref());

            self.tracker.record(epoch, training_loss, testing_loss, validity);

            if !self.silent {
                progress.update(epoch, testing_loss, validity);
            }
        }

        if let Some(path) = self.problem.model_path() {
            self.network.save(path)?;
        }
        if let Some(path) = self.problem.metrics_path() {
            self.tracker.export_csv(path, self.network.config())?;
        }

        Ok(())
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    pub fn tracker(&self) -> &MetricsTracker {
        &self.tracker
    }
}
