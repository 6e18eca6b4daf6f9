use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// An enumeration of the activation functions a layer can use.
///
/// The derivative is always taken with respect to the pre-activation input,
/// so `differentiate` expects the same argument as `activate`, not its
/// result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum Activation {
    #[default]
    Rectifier,
    Linear,
    Sigmoid,
    Tanh { max: f64, offset: f64 },
    Sine { max: f64, offset: f64 },
}

impl Activation {
    /// Apply the activation function to a single pre-activation value.
    pub fn activate(&self, value: f64) -> f64 {
        match self {
            Activation::Rectifier => value.max(0.0),
            Activation::Linear => value,
            Activation::Sigmoid => 1.0 / (1.0 + (-value).exp()),
            Activation::Tanh { max, offset } => max * (value.tanh() + offset),
            Activation::Sine { max, offset } => max * (value.sin() + offset),
        }
    }

    /// Compute the derivative of the activation at a pre-activation value.
    pub fn differentiate(&self, value: f64) -> f64 {
        match self {
            Activation::Rectifier => {
                if value >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Linear => 1.0,
            Activation::Sigmoid => {
                let sigmoid = 1.0 / (1.0 + (-value).exp());
                sigmoid * (1.0 - sigmoid)
            }
            Activation::Tanh { max, .. } => {
                let tanh_v = value.tanh();
                max * (1.0 - tanh_v * tanh_v)
            }
            Activation::Sine { max, .. } => max * value.cos(),
        }
    }

    /// Apply the activation function to an input array in-place.
    pub fn apply(&self, input: &mut Array1<f64>) {
        input.mapv_inplace(|v| self.activate(v));
    }

    /// Compute the derivative of the activation for each element of an
    /// input array, returning a new array.
    pub fn derivative(&self, input: &Array1<f64>) -> Array1<f64> {
        input.mapv(|v| self.differentiate(v))
    }
}
