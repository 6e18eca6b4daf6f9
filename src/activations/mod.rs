//! # Activation Functions Module
//!
//! This module provides the activation functions a layer can be built with.
//! Each variant knows both its activation and its derivative with respect to
//! the pre-activation input, so the backward pass can apply the chain rule
//! without any automatic differentiation.
//!
//! ## Available Activations
//!
//! - **Rectifier**: `max(0, x)` - The usual default for hidden layers
//! - **Sigmoid**: `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **Tanh**: `max * (tanh(x) + offset)` - Scaled/shifted hyperbolic tangent
//! - **Sine**: `max * (sin(x) + offset)` - Periodic activation
//! - **Linear**: Identity function - No transformation
//!
//! ## Usage Example
//!
//! ```rust
//! use synapse::activations::Activation;
//!
//! let rectifier = Activation::Rectifier;
//! assert_eq!(rectifier.activate(-2.0), 0.0);
//! assert_eq!(rectifier.activate(3.0), 3.0);
//!
//! let tanh = Activation::Tanh { max: 1.0, offset: 0.0 };
//! assert!(tanh.activate(100.0) <= 1.0);
//! ```
//!
//! ## Choosing an Activation Function
//!
//! - **Hidden layers**: Rectifier is usually the best default choice
//! - **Output layer**:
//!   - Binary classification: Sigmoid (pairs with cross-entropy loss)
//!   - Signed classification or bounded regression: Tanh
//!   - Unbounded regression: Linear

pub mod functions;

pub use functions::Activation;
