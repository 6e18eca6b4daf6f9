//! # Synapse - Fully-Connected Feedforward Network Trainer
//!
//! Synapse is a small Rust library for building and training fully-connected
//! feedforward neural networks from scratch: topology definition, forward
//! propagation, backpropagation with hand-derived gradients, mini-batch
//! gradient descent, pluggable activation and loss strategies, and
//! inverted-dropout regularization.
//!
//! ## Key Features
//!
//! - **Explicit topology**: layers are declared one by one against a fixed
//!   network configuration, with per-layer activation and dropout settings
//! - **Plain gradient descent**: gradients are accumulated over a mini-batch
//!   and applied in a single update step
//! - **Reproducible randomness**: weight initialization, sample shuffling,
//!   and dropout sampling all draw from one seedable generator
//! - **Persistence**: a trained network serializes to an opaque blob and
//!   restores bit-for-bit
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use synapse::network::{Network, NetworkConfig};
//! use synapse::activations::Activation;
//! use synapse::loss::LossFunction;
//!
//! let mut network = Network::new(NetworkConfig {
//!     learning_rate: 0.05,
//!     batch_size: 4,
//!     number_of_layers: 3,
//!     input_size: 2,
//!     output_size: 1,
//! })
//! .with_seed(42);
//!
//! network.set_loss_function(LossFunction::cross_entropy());
//! network.add_layer(Activation::Rectifier, 4);
//! network.add_layer(Activation::Sigmoid, 1);
//! network.init();
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions (Rectifier, Sigmoid, Tanh, ...)
//! - [`debug`] - Numerical verification of backpropagated gradients
//! - [`dropout`] - Inverted-dropout mask sampling
//! - [`error`] - Error types and result handling
//! - [`loss`] - Loss functions and their derivatives
//! - [`metrics`] - Per-epoch training metrics and CSV export
//! - [`network`] - Core network implementation
//! - [`simulator`] - Training-loop driver for example problems

pub mod activations;
pub mod debug;
pub mod dropout;
pub mod error;
pub mod loss;
pub mod metrics;
pub mod network;
pub mod simulator;

#[cfg(test)]
mod tests;
