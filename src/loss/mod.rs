//! # Loss Functions Module
//!
//! Loss (cost) functions measure the discrepancy between the network output
//! and the expected answer, and supply the derivative that seeds the
//! backward pass at the output layer.
//!
//! Both provided variants share the derivative form `output - answer`. For
//! the cross-entropy loss this is exact only when the output layer uses a
//! sigmoid activation; that pairing is the caller's responsibility and is
//! deliberately not enforced here.

pub mod functions;

pub use functions::{CrossEntropyLoss, Loss, LossFunction, MeanSquareLoss};
