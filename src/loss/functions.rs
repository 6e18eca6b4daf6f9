use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Keeps `ln` away from 0 and 1 in the cross-entropy loss.
const LOG_EPSILON: f64 = 1e-12;

/// Trait defining the interface for loss functions
pub trait Loss {
    /// Compute the scalar loss between an output vector and its answer
    fn compute(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> f64;

    /// Compute the derivative of the loss with respect to the output layer
    fn gradient(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> Array1<f64>;
}

/// Mean squared error loss, `Σ (output - answer)^2 / 2N`
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct MeanSquareLoss;

impl Loss for MeanSquareLoss {
    fn compute(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> f64 {
        let diff = &output - &answer;
        (&diff * &diff).sum() / (2.0 * output.len() as f64)
    }

    fn gradient(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> Array1<f64> {
        &output - &answer
    }
}

/// Binary cross-entropy loss, one Bernoulli unit per output element.
///
/// Outputs are clamped away from 0 and 1 before the logarithms, so answers
/// hit exactly by a saturated output produce a large finite loss rather than
/// an infinity.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CrossEntropyLoss;

impl Loss for CrossEntropyLoss {
    fn compute(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> f64 {
        assert_eq!(
            output.len(),
            answer.len(),
            "output and answer must have the same length"
        );
        -output
            .iter()
            .zip(answer.iter())
            .map(|(&o, &a)| {
                let o = o.clamp(LOG_EPSILON, 1.0 - LOG_EPSILON);
                a * o.ln() + (1.0 - a) * (1.0 - o).ln()
            })
            .sum::<f64>()
    }

    fn gradient(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> Array1<f64> {
        &output - &answer
    }
}

/// A serializable wrapper over the available loss functions, so a network
/// can own its loss strategy and persist it alongside the parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum LossFunction {
    MeanSquare(MeanSquareLoss),
    CrossEntropy(CrossEntropyLoss),
}

impl LossFunction {
    pub fn mean_square() -> Self {
        LossFunction::MeanSquare(MeanSquareLoss)
    }

    pub fn cross_entropy() -> Self {
        LossFunction::CrossEntropy(CrossEntropyLoss)
    }
}

impl Default for LossFunction {
    fn default() -> Self {
        LossFunction::mean_square()
    }
}

impl Loss for LossFunction {
    fn compute(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> f64 {
        match self {
            LossFunction::MeanSquare(loss) => loss.compute(output, answer),
            LossFunction::CrossEntropy(loss) => loss.compute(output, answer),
        }
    }

    fn gradient(&self, output: ArrayView1<f64>, answer: ArrayView1<f64>) -> Array1<f64> {
        match self {
            LossFunction::MeanSquare(loss) => loss.gradient(output, answer),
            LossFunction::CrossEntropy(loss) => loss.gradient(output, answer),
        }
    }
}
